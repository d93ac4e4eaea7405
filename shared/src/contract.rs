//! Typed binding for the whitelist contract.

use crate::abi::{self, WhitelistCall};
use crate::error::{Result, WhitelistError};
use crate::provider::WalletProvider;
use crate::session::Handle;
use crate::types::{Address, Receipt, TxHash};

pub struct WhitelistContract<'a, P> {
    provider: &'a P,
    address: Address,
    handle: Handle,
}

impl<'a, P: WalletProvider> WhitelistContract<'a, P> {
    pub fn new(provider: &'a P, address: Address, handle: Handle) -> Self {
        Self { provider, address, handle }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// `numAddressesWhitelisted() -> uint`
    pub async fn num_addresses_whitelisted(&self) -> Result<u64> {
        let data = self.read(WhitelistCall::NumAddressesWhitelisted).await?;
        abi::decode_uint(&data)
    }

    /// `whitelistedAddresses(address) -> bool`
    pub async fn whitelisted_addresses(&self, account: &Address) -> Result<bool> {
        let data = self.read(WhitelistCall::WhitelistedAddresses(*account)).await?;
        abi::decode_bool(&data)
    }

    /// `addAddressToWhitelist()`, sent from the signer.
    pub async fn add_address_to_whitelist(&self) -> Result<PendingTransaction<'a, P>> {
        let from = self
            .handle
            .signer_address()
            .ok_or_else(|| WhitelistError::Wallet("a signer is required to join the whitelist".to_string()))?;
        let hash = self
            .provider
            .send_transaction(from, &self.address, &WhitelistCall::AddAddressToWhitelist.encode())
            .await?;
        log::info!("[CONTRACT] addAddressToWhitelist submitted: {}", hash);
        Ok(PendingTransaction { provider: self.provider, hash })
    }

    async fn read(&self, call: WhitelistCall) -> Result<Vec<u8>> {
        log::debug!("[CONTRACT] eth_call {} on {}", call.signature(), self.address);
        self.provider.call(&self.address, &call.encode()).await
    }
}

/// A submitted transaction whose confirmation can be awaited.
pub struct PendingTransaction<'a, P> {
    provider: &'a P,
    hash: TxHash,
}

impl<P: WalletProvider> PendingTransaction<'_, P> {
    pub fn hash(&self) -> &TxHash {
        &self.hash
    }

    /// Wait until mined; a reverted transaction is an error.
    pub async fn wait(self) -> Result<Receipt> {
        let receipt = self.provider.wait_for_receipt(&self.hash).await?;
        if !receipt.succeeded {
            return Err(WhitelistError::Transaction(format!(
                "{} reverted in block {}",
                self.hash, receipt.block_number
            )));
        }
        Ok(receipt)
    }
}
