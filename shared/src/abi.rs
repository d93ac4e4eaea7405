//! # Whitelist Contract ABI
//!
//! Calldata encoding and return-data decoding for the three contract
//! functions the page uses. Selectors are the first four bytes of the
//! keccak-256 hash of each function signature.
//!
//! | Function | Selector |
//! |---|---|
//! | `numAddressesWhitelisted()` | `0x4011d7cd` |
//! | `whitelistedAddresses(address)` | `0x06c933d8` |
//! | `addAddressToWhitelist()` | `0x8e7314d9` |

use crate::error::{Result, WhitelistError};
use crate::types::{strip_hex_prefix, Address};

/// ABI words are 32 bytes.
pub const WORD_LEN: usize = 32;

pub const NUM_ADDRESSES_WHITELISTED: [u8; 4] = [0x40, 0x11, 0xd7, 0xcd];
pub const WHITELISTED_ADDRESSES: [u8; 4] = [0x06, 0xc9, 0x33, 0xd8];
pub const ADD_ADDRESS_TO_WHITELIST: [u8; 4] = [0x8e, 0x73, 0x14, 0xd9];

/// Calls exposed by the whitelist contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WhitelistCall {
    NumAddressesWhitelisted,
    WhitelistedAddresses(Address),
    AddAddressToWhitelist,
}

impl WhitelistCall {
    pub fn signature(&self) -> &'static str {
        match self {
            WhitelistCall::NumAddressesWhitelisted => "numAddressesWhitelisted()",
            WhitelistCall::WhitelistedAddresses(_) => "whitelistedAddresses(address)",
            WhitelistCall::AddAddressToWhitelist => "addAddressToWhitelist()",
        }
    }

    pub fn selector(&self) -> [u8; 4] {
        match self {
            WhitelistCall::NumAddressesWhitelisted => NUM_ADDRESSES_WHITELISTED,
            WhitelistCall::WhitelistedAddresses(_) => WHITELISTED_ADDRESSES,
            WhitelistCall::AddAddressToWhitelist => ADD_ADDRESS_TO_WHITELIST,
        }
    }

    /// Selector followed by the ABI-encoded arguments.
    pub fn encode(&self) -> Vec<u8> {
        let mut data = self.selector().to_vec();
        if let WhitelistCall::WhitelistedAddresses(address) = self {
            data.extend_from_slice(&encode_address(address));
        }
        data
    }
}

/// Left-pad an address into one ABI word.
pub fn encode_address(address: &Address) -> [u8; WORD_LEN] {
    let mut word = [0u8; WORD_LEN];
    word[WORD_LEN - Address::LEN..].copy_from_slice(address.as_bytes());
    word
}

/// Decode the first word of return data as an unsigned integer.
///
/// The contract declares a narrow uint; anything that does not fit in `u64`
/// is rejected rather than truncated.
pub fn decode_uint(data: &[u8]) -> Result<u64> {
    let word = first_word(data)?;
    let (high, low) = word.split_at(WORD_LEN - 8);
    if high.iter().any(|b| *b != 0) {
        return Err(WhitelistError::Decoding("uint does not fit in 64 bits".to_string()));
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(low);
    Ok(u64::from_be_bytes(buf))
}

/// Decode the first word of return data as a bool (exactly 0 or 1).
pub fn decode_bool(data: &[u8]) -> Result<bool> {
    match decode_uint(data)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(WhitelistError::Decoding(format!("bool word holds {}", other))),
    }
}

/// Decode `0x`-prefixed hex returned by `eth_call`.
pub fn decode_hex_data(value: &str) -> Result<Vec<u8>> {
    let digits = strip_hex_prefix(value)
        .ok_or_else(|| WhitelistError::Decoding(format!("call result without 0x prefix: {}", value)))?;
    Ok(hex::decode(digits)?)
}

/// Encode calldata as `0x`-prefixed hex for JSON-RPC.
pub fn encode_hex_data(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

fn first_word(data: &[u8]) -> Result<&[u8]> {
    data.get(..WORD_LEN).ok_or_else(|| {
        WhitelistError::Decoding(format!("expected a {}-byte word, got {} bytes", WORD_LEN, data.len()))
    })
}
