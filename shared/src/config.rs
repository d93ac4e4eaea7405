//! # Whitelist Configuration
//!
//! Which contract the page talks to and which chain it insists on.
//!
//! The page runs as WebAssembly inside a browser tab, so there is no process
//! environment at runtime. Values are taken from the build environment with
//! `option_env!`. Without them the page targets Goerli at a placeholder
//! contract address, so real builds set `WHITELIST_CONTRACT_ADDRESS`:
//!
//! | Variable | Default |
//! |---|---|
//! | `WHITELIST_CONTRACT_ADDRESS` | [`DEFAULT_CONTRACT_ADDRESS`] |
//! | `WHITELIST_CHAIN_ID` | `5` |
//! | `WHITELIST_NETWORK_NAME` | `Goerli` |
//! | `WHITELIST_RECEIPT_POLL_MS` | `2000` |
//!
//! ```rust
//! use shared::config::WhitelistConfig;
//!
//! let config = WhitelistConfig::from_build_env().unwrap();
//! assert!(config.validate().is_ok());
//! assert_ne!(config.chain_id, 0);
//! ```

use crate::error::{Result, WhitelistError};
use crate::types::Address;

/// Placeholder used when `WHITELIST_CONTRACT_ADDRESS` is not set at build time.
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x9a2E8CD0a1b0Bc6b7aE5B2B3aD9c5aC3eE0b5A0f";
/// Goerli.
pub const DEFAULT_CHAIN_ID: u64 = 5;
pub const DEFAULT_NETWORK_NAME: &str = "Goerli";
pub const DEFAULT_RECEIPT_POLL_MS: u32 = 2_000;

/// Fixed, externally supplied configuration for the whitelist page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhitelistConfig {
    /// Address of the whitelist contract
    pub contract_address: Address,

    /// The only chain the page accepts
    pub chain_id: u64,

    /// Human name of `chain_id`, used in the wrong-network alert
    pub network_name: String,

    /// Delay between receipt polls while a join is pending
    pub receipt_poll_ms: u32,
}

impl WhitelistConfig {
    /// Build configuration from explicit values and validate it.
    pub fn new(contract_address: &str, chain_id: u64, network_name: &str) -> Result<Self> {
        let config = Self {
            contract_address: contract_address.parse()?,
            chain_id,
            network_name: network_name.to_string(),
            receipt_poll_ms: DEFAULT_RECEIPT_POLL_MS,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from variables captured at compile time.
    pub fn from_build_env() -> Result<Self> {
        if option_env!("WHITELIST_CONTRACT_ADDRESS").is_none() {
            log::warn!("WHITELIST_CONTRACT_ADDRESS not set, using placeholder {}", DEFAULT_CONTRACT_ADDRESS);
        }
        Self::from_lookup(|name| match name {
            "WHITELIST_CONTRACT_ADDRESS" => option_env!("WHITELIST_CONTRACT_ADDRESS"),
            "WHITELIST_CHAIN_ID" => option_env!("WHITELIST_CHAIN_ID"),
            "WHITELIST_NETWORK_NAME" => option_env!("WHITELIST_NETWORK_NAME"),
            "WHITELIST_RECEIPT_POLL_MS" => option_env!("WHITELIST_RECEIPT_POLL_MS"),
            _ => None,
        })
    }

    fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Result<Self> {
        let contract_address = lookup("WHITELIST_CONTRACT_ADDRESS")
            .unwrap_or(DEFAULT_CONTRACT_ADDRESS)
            .parse::<Address>()
            .map_err(|e| WhitelistError::Config(format!("WHITELIST_CONTRACT_ADDRESS: {}", e)))?;

        let chain_id = match lookup("WHITELIST_CHAIN_ID") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| WhitelistError::Config(format!("WHITELIST_CHAIN_ID must be a number: {}", e)))?,
            None => DEFAULT_CHAIN_ID,
        };

        let network_name = lookup("WHITELIST_NETWORK_NAME")
            .unwrap_or(DEFAULT_NETWORK_NAME)
            .to_string();

        let receipt_poll_ms = match lookup("WHITELIST_RECEIPT_POLL_MS") {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|e| WhitelistError::Config(format!("WHITELIST_RECEIPT_POLL_MS must be a number: {}", e)))?,
            None => DEFAULT_RECEIPT_POLL_MS,
        };

        let config = Self {
            contract_address,
            chain_id,
            network_name,
            receipt_poll_ms,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the page cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.chain_id == 0 {
            return Err(WhitelistError::Config("WHITELIST_CHAIN_ID must be non-zero".to_string()));
        }
        if self.network_name.trim().is_empty() {
            return Err(WhitelistError::Config("WHITELIST_NETWORK_NAME must not be empty".to_string()));
        }
        if self.receipt_poll_ms == 0 {
            return Err(WhitelistError::Config("WHITELIST_RECEIPT_POLL_MS must be non-zero".to_string()));
        }
        Ok(())
    }
}
