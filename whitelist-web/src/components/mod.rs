//! UI Components

pub mod navbar;
pub mod whitelist_action;

pub use navbar::Navbar;
pub use whitelist_action::WhitelistAction;
