//! # Chain Primitives
//!
//! Strongly-typed values exchanged with the wallet provider:
//!
//! - [`Address`] - 20-byte account or contract address (`0x` + 40 hex chars)
//! - [`TxHash`] - 32-byte transaction hash
//! - [`Receipt`] - the parts of a mined transaction receipt the page cares about
//! - [`parse_quantity`] - JSON-RPC hex quantity (`"0x5"`) to `u64`
//!
//! Addresses and hashes (de)serialize as their `0x` strings so they can be
//! passed straight through JSON-RPC payloads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WhitelistError};

/// A 20-byte Ethereum address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address([u8; 20]);

impl Address {
    pub const LEN: usize = 20;

    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = WhitelistError;

    fn from_str(s: &str) -> Result<Self> {
        let digits = strip_hex_prefix(s).ok_or_else(|| WhitelistError::InvalidAddress(s.to_string()))?;
        if digits.len() != Self::LEN * 2 {
            return Err(WhitelistError::InvalidAddress(s.to_string()));
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| WhitelistError::InvalidAddress(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for Address {
    type Error = WhitelistError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// A 32-byte transaction hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TxHash([u8; 32]);

impl FromStr for TxHash {
    type Err = WhitelistError;

    fn from_str(s: &str) -> Result<Self> {
        let digits = strip_hex_prefix(s)
            .ok_or_else(|| WhitelistError::Decoding(format!("transaction hash without 0x prefix: {}", s)))?;
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(digits, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for TxHash {
    type Error = WhitelistError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TxHash> for String {
    fn from(hash: TxHash) -> Self {
        hash.to_string()
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Outcome of a mined transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub transaction_hash: TxHash,
    pub block_number: u64,
    /// `status == 0x1`. A reverted transaction is still mined.
    pub succeeded: bool,
}

/// Parse a JSON-RPC quantity such as `"0x5"` or `"0x0"`.
pub fn parse_quantity(value: &str) -> Result<u64> {
    let digits = strip_hex_prefix(value)
        .ok_or_else(|| WhitelistError::Decoding(format!("quantity without 0x prefix: {}", value)))?;
    if digits.is_empty() {
        return Err(WhitelistError::Decoding("empty quantity".to_string()));
    }
    u64::from_str_radix(digits, 16)
        .map_err(|e| WhitelistError::Decoding(format!("quantity {}: {}", value, e)))
}

pub(crate) fn strip_hex_prefix(value: &str) -> Option<&str> {
    value.strip_prefix("0x").or_else(|| value.strip_prefix("0X"))
}
