//! # Whitelist Error Types
//!
//! Consolidated error handling for the whitelist page core.
//!
//! Every fallible operation in this crate returns [`Result<T>`], an alias over
//! [`WhitelistError`]. The controller is the only place these errors are
//! consumed: it logs them and leaves the page state where it was.
//!
//! ## Error Categories
//!
//! - **Network**: [`WrongNetwork`](WhitelistError::WrongNetwork). The only
//!   error the visitor is told about directly (through a blocking alert).
//! - **Wallet**: [`WalletUnavailable`](WhitelistError::WalletUnavailable),
//!   [`NoAccounts`](WhitelistError::NoAccounts),
//!   [`Wallet`](WhitelistError::Wallet) (rejected prompts, provider failures).
//! - **Chain**: [`Rpc`](WhitelistError::Rpc) and
//!   [`Transaction`](WhitelistError::Transaction) (reverted receipts).
//! - **Data**: [`Decoding`](WhitelistError::Decoding),
//!   [`InvalidAddress`](WhitelistError::InvalidAddress),
//!   [`Config`](WhitelistError::Config).
//!
//! ## Usage Pattern
//!
//! ```rust
//! use shared::error::{Result, WhitelistError};
//!
//! fn require_accounts(accounts: &[String]) -> Result<&str> {
//!     accounts
//!         .first()
//!         .map(String::as_str)
//!         .ok_or(WhitelistError::NoAccounts)
//! }
//!
//! assert!(require_accounts(&[]).is_err());
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, WhitelistError>`.
pub type Result<T> = std::result::Result<T, WhitelistError>;

/// Error type covering every failure the whitelist page can hit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WhitelistError {
    /// The wallet is on a different chain than the whitelist contract.
    #[error("Wrong network: expected chain {expected}, wallet is on chain {actual}")]
    WrongNetwork { expected: u64, actual: u64 },

    /// No injected provider (`window.ethereum`) was found.
    #[error("No browser wallet found")]
    WalletUnavailable,

    /// The wallet returned an empty account list.
    #[error("Wallet exposed no accounts")]
    NoAccounts,

    /// The wallet rejected or failed a request.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// JSON-RPC failure reported by the provider.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// The transaction was mined but reverted, or could not be tracked.
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// Provider returned data that does not match the contract ABI.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Not a 20-byte hex address.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Build-time configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WhitelistError {
    /// Whether this error comes from the single-network policy.
    pub fn is_network_mismatch(&self) -> bool {
        matches!(self, WhitelistError::WrongNetwork { .. })
    }

    /// Failures worth retrying while a transaction is still pending.
    ///
    /// Only node-side RPC errors qualify; a reverted, dropped or malformed
    /// receipt is final.
    pub fn is_transient(&self) -> bool {
        matches!(self, WhitelistError::Rpc(_))
    }

    /// Message suitable for showing to the visitor.
    ///
    /// `network_name` is the human name of the expected chain ("Goerli").
    pub fn user_message(&self, network_name: &str) -> String {
        match self {
            WhitelistError::WrongNetwork { .. } => format!("Change the network to {}", network_name),
            WhitelistError::WalletUnavailable => "Install a browser wallet such as MetaMask".to_string(),
            WhitelistError::NoAccounts => "Unlock your wallet and try again".to_string(),
            WhitelistError::Wallet(msg) => msg.clone(),
            WhitelistError::Transaction(_) => "The whitelist transaction failed".to_string(),
            WhitelistError::Rpc(_)
            | WhitelistError::Decoding(_)
            | WhitelistError::InvalidAddress(_)
            | WhitelistError::Config(_) => "Something went wrong, please try again".to_string(),
        }
    }
}

impl From<hex::FromHexError> for WhitelistError {
    fn from(err: hex::FromHexError) -> Self {
        WhitelistError::Decoding(format!("hex: {}", err))
    }
}

impl From<serde_json::Error> for WhitelistError {
    fn from(err: serde_json::Error) -> Self {
        WhitelistError::Decoding(format!("JSON error: {}", err))
    }
}
