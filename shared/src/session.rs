//! # Wallet Session
//!
//! The explicitly owned connection object. A page creates one [`Session`]
//! when it mounts and passes it by reference into every controller
//! operation; nothing is cached in globals.

use crate::config::WhitelistConfig;
use crate::contract::WhitelistContract;
use crate::error::{Result, WhitelistError};
use crate::provider::WalletProvider;
use crate::types::Address;

/// What an operation is allowed to do with the connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handle {
    /// Read chain state only.
    Reader,
    /// Read chain state and sign transactions as `address`.
    Signer { address: Address },
}

impl Handle {
    pub fn signer_address(&self) -> Option<&Address> {
        match self {
            Handle::Signer { address } => Some(address),
            Handle::Reader => None,
        }
    }
}

pub struct Session<P> {
    provider: P,
    config: WhitelistConfig,
}

impl<P: WalletProvider> Session<P> {
    pub fn new(provider: P, config: WhitelistConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &WhitelistConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Obtain a reader or signer handle.
    ///
    /// Requests account access and checks the active chain on every call; a
    /// wallet on any chain other than the configured one is rejected.
    pub async fn operational_handle(&self, needs_signer: bool) -> Result<Handle> {
        let accounts = self.provider.request_accounts().await?;
        let chain_id = self.provider.chain_id().await?;
        if chain_id != self.config.chain_id {
            return Err(WhitelistError::WrongNetwork {
                expected: self.config.chain_id,
                actual: chain_id,
            });
        }

        if !needs_signer {
            return Ok(Handle::Reader);
        }
        let address = accounts.into_iter().next().ok_or(WhitelistError::NoAccounts)?;
        Ok(Handle::Signer { address })
    }

    /// Contract binding at the configured address.
    pub fn contract(&self, handle: Handle) -> WhitelistContract<'_, P> {
        WhitelistContract::new(&self.provider, self.config.contract_address, handle)
    }
}
