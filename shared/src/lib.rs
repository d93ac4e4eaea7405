//! # Whitelist Page Core
//!
//! Everything the whitelist page does that is not rendering: which contract
//! to talk to, how to encode calls to it, how to obtain a reader or signer
//! from the visitor's wallet, and how the page state moves between its four
//! branches.
//!
//! ## Structure
//!
//! - **[`config`]**: contract address and the single accepted chain
//! - **[`error`]**: [`WhitelistError`] and the crate `Result` alias
//! - **[`types`]**: [`Address`], [`TxHash`], [`Receipt`]
//! - **[`abi`]**: selectors and word encoding for the three contract calls
//! - **[`provider`]**: the [`WalletProvider`] and [`Alert`] seams
//! - **[`session`]**: the owned [`Session`] and [`Handle`]
//! - **[`contract`]**: typed [`WhitelistContract`] binding
//! - **[`state`]**: [`PageState`], [`PageEvent`] and the [`reduce`] function
//! - **[`controller`]**: [`WhitelistController`] with connect / refresh / join
//! - **[`utils`]**: address shortening for display
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shared::{reduce, PageState, Session, WhitelistConfig, WhitelistController};
//! # use shared::WalletProvider;
//! # async fn run<P: WalletProvider>(provider: P) {
//! let session = Session::new(provider, WhitelistConfig::from_build_env().unwrap());
//! let state = std::cell::RefCell::new(PageState::default());
//! let controller = WhitelistController::new(
//!     |message: &str| eprintln!("{}", message),
//!     |event| reduce(&mut state.borrow_mut(), event),
//! );
//! controller.connect(&session).await;
//! controller.join(&session).await;
//! # }
//! ```

pub mod abi;
pub mod config;
pub mod contract;
pub mod controller;
pub mod error;
pub mod provider;
pub mod session;
pub mod state;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use config::WhitelistConfig;
pub use contract::{PendingTransaction, WhitelistContract};
pub use controller::WhitelistController;
pub use error::{Result, WhitelistError};
pub use provider::{Alert, WalletProvider};
pub use session::{Handle, Session};
pub use state::{reduce, PageEvent, PageState, PageView};
pub use types::{Address, Receipt, TxHash};
