//! Injected Ethereum Provider via wasm-bindgen
//!
//! Talks to the EIP-1193 provider that browser wallets (MetaMask and
//! friends) inject as `window.ethereum`, and implements the core's
//! [`WalletProvider`] seam on top of it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use wasm_bindgen::{JsCast, JsValue};

use shared::abi;
use shared::types::parse_quantity;
use shared::{Address, Alert, Receipt, Result, TxHash, WalletProvider, WhitelistError};

// ============================================================================
// EIP-1193 BINDINGS (JavaScript Interop)
// ============================================================================

mod bindings {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(inline_js = "
export function hasInjectedProvider() {
    return typeof window !== 'undefined' && !!window.ethereum;
}

export async function ethereumRequest(method, params) {
    if (!window.ethereum) {
        throw new Error('No injected Ethereum provider');
    }
    try {
        return await window.ethereum.request({ method: method, params: params });
    } catch (error) {
        // Provider errors are plain objects { code, message }
        const message = error && error.message ? error.message : String(error);
        const code = error && error.code !== undefined ? ' (code ' + error.code + ')' : '';
        throw new Error(message + code);
    }
}
")]
    extern "C" {
        /// Whether a wallet extension injected `window.ethereum`
        pub fn hasInjectedProvider() -> bool;

        /// `window.ethereum.request({ method, params })`
        #[wasm_bindgen(catch)]
        pub async fn ethereumRequest(method: &str, params: JsValue) -> Result<JsValue, JsValue>;
    }
}

use bindings::{ethereumRequest, hasInjectedProvider};

// ============================================================================
// PROVIDER
// ============================================================================

/// Which error variant a failed request maps to.
#[derive(Clone, Copy)]
enum Origin {
    /// The wallet itself (prompts, signing)
    Wallet,
    /// The node behind the wallet
    Node,
}

/// [`WalletProvider`] backed by `window.ethereum`.
pub struct InjectedProvider {
    receipt_poll_ms: u32,
}

impl InjectedProvider {
    pub fn new(receipt_poll_ms: u32) -> Self {
        Self { receipt_poll_ms }
    }

    pub fn is_available() -> bool {
        hasInjectedProvider()
    }

    async fn request(&self, method: &str, params: Value, origin: Origin) -> Result<Value> {
        if !Self::is_available() {
            return Err(WhitelistError::WalletUnavailable);
        }

        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let params = params
            .serialize(&serializer)
            .map_err(|e| WhitelistError::Decoding(format!("{} params: {}", method, e)))?;

        log::debug!("[ETHEREUM] {}", method);
        match ethereumRequest(method, params).await {
            Ok(result) => serde_wasm_bindgen::from_value(result)
                .map_err(|e| WhitelistError::Decoding(format!("{} result: {}", method, e))),
            Err(e) => {
                let message = format!("{}: {}", method, js_error_message(&e));
                Err(match origin {
                    Origin::Wallet => WhitelistError::Wallet(message),
                    Origin::Node => WhitelistError::Rpc(message),
                })
            }
        }
    }
}

#[async_trait(?Send)]
impl WalletProvider for InjectedProvider {
    async fn request_accounts(&self) -> Result<Vec<Address>> {
        let accounts = self.request("eth_requestAccounts", json!([]), Origin::Wallet).await?;
        Ok(serde_json::from_value(accounts)?)
    }

    async fn chain_id(&self) -> Result<u64> {
        let chain_id = self.request("eth_chainId", json!([]), Origin::Node).await?;
        parse_quantity(chain_id.as_str().unwrap_or_default())
    }

    async fn call(&self, to: &Address, data: &[u8]) -> Result<Vec<u8>> {
        let params = json!([{ "to": to, "data": abi::encode_hex_data(data) }, "latest"]);
        let result = self.request("eth_call", params, Origin::Node).await?;
        abi::decode_hex_data(result.as_str().unwrap_or_default())
    }

    async fn send_transaction(&self, from: &Address, to: &Address, data: &[u8]) -> Result<TxHash> {
        let params = json!([{ "from": from, "to": to, "data": abi::encode_hex_data(data) }]);
        let hash = self.request("eth_sendTransaction", params, Origin::Wallet).await?;
        Ok(serde_json::from_value(hash)?)
    }

    async fn transaction_receipt(&self, hash: &TxHash) -> Result<Option<Receipt>> {
        let raw = self
            .request("eth_getTransactionReceipt", json!([hash]), Origin::Node)
            .await?;
        parse_receipt(raw)
    }

    async fn poll_delay(&self) {
        gloo_timers::future::TimeoutFuture::new(self.receipt_poll_ms).await;
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReceipt {
    transaction_hash: TxHash,
    block_number: Option<String>,
    status: Option<String>,
}

/// `null` while pending, a receipt object once mined.
fn parse_receipt(raw: Value) -> Result<Option<Receipt>> {
    if raw.is_null() {
        return Ok(None);
    }
    let raw: RawReceipt = serde_json::from_value(raw)?;
    let Some(block_number) = raw.block_number.as_deref() else {
        return Ok(None);
    };
    let succeeded = match raw.status.as_deref() {
        Some(status) => parse_quantity(status)? == 1,
        None => false,
    };
    Ok(Some(Receipt {
        transaction_hash: raw.transaction_hash,
        block_number: parse_quantity(block_number)?,
        succeeded,
    }))
}

fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

// ============================================================================
// ALERT
// ============================================================================

/// `window.alert`, blocking until dismissed.
#[derive(Clone, Copy, Default)]
pub struct BrowserAlert;

impl Alert for BrowserAlert {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    log::error!("[ALERT] window.alert failed: {:?}", e);
                }
            }
            None => log::error!("[ALERT] No window to show: {}", message),
        }
    }
}
