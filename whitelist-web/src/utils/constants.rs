//! Page copy

pub const TITLE: &str = "Welcome to the Red & White Army!";
pub const DESCRIPTION: &str = "It's an NFT collection for Arsenal Fans.";
pub const FOOTER: &str = "Made with ❤ for Arsenal Fans all over the world. ❤️ 🤍";

pub const CONNECT_LABEL: &str = "Connect your wallet";
pub const CONNECTING_LABEL: &str = "Connecting...";
pub const JOIN_LABEL: &str = "Join the Whitelist";
pub const JOINED_TEXT: &str = "Thanks for joining the Whitelist! #COYG 🔴 ⚪️";

pub const HERO_IMAGE: &str = "./Emirates_Stadium_Logo_Arsenal.jpeg";
pub const HERO_ALT: &str = "Emirates Stadium";
