//! # Wallet Provider Seam
//!
//! Traits the page core uses to reach the outside world. The browser crate
//! implements them on top of the injected EIP-1193 provider; tests implement
//! them with in-memory fakes.
//!
//! Browser handles (`JsValue`) are not `Send`, so the async methods are
//! declared with `#[async_trait(?Send)]`.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Address, Receipt, TxHash};

/// A network-aware wallet connection.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Ask the wallet for account access. May prompt the visitor.
    async fn request_accounts(&self) -> Result<Vec<Address>>;

    /// Chain the wallet is currently pointed at.
    async fn chain_id(&self) -> Result<u64>;

    /// Read-only contract call (`eth_call`) returning raw return data.
    async fn call(&self, to: &Address, data: &[u8]) -> Result<Vec<u8>>;

    /// Sign and submit a transaction from `from`.
    async fn send_transaction(&self, from: &Address, to: &Address, data: &[u8]) -> Result<TxHash>;

    /// One `eth_getTransactionReceipt` poll. `None` while still pending.
    async fn transaction_receipt(&self, hash: &TxHash) -> Result<Option<Receipt>>;

    /// Pause between receipt polls.
    async fn poll_delay(&self);

    /// Resolve once the transaction has been mined.
    ///
    /// Transient poll failures are logged and polled again. Any other error
    /// ends the wait.
    async fn wait_for_receipt(&self, hash: &TxHash) -> Result<Receipt> {
        loop {
            match self.transaction_receipt(hash).await {
                Ok(Some(receipt)) => return Ok(receipt),
                Ok(None) => log::debug!("[RECEIPT] {} still pending", hash),
                Err(e) if e.is_transient() => log::warn!("[RECEIPT] Poll for {} failed, retrying: {}", hash, e),
                Err(e) => return Err(e),
            }
            self.poll_delay().await;
        }
    }
}

/// Blocking, user-facing notification.
pub trait Alert {
    fn alert(&self, message: &str);
}

impl<F: Fn(&str)> Alert for F {
    fn alert(&self, message: &str) {
        self(message)
    }
}
