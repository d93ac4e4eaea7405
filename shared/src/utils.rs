//! # Display Helpers
//!
//! Shortening of `0x` addresses for the page header:
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! let address = "0x52908400098527886e0f7030069857d2e4169ee7";
//! assert_eq!(truncate_address(address), "0x5290...9ee7");
//! ```

/// Keep the first `prefix_len` characters after `0x` and the last `suffix_len`.
///
/// Strings too short to shorten come back unchanged.
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let (lead, body) = match address.strip_prefix("0x") {
        Some(rest) => ("0x", rest),
        None => ("", address),
    };

    if !body.is_ascii() || body.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    format!("{}{}...{}", lead, &body[..prefix_len], &body[body.len() - suffix_len..])
}

/// `0x` plus four characters on each side.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}
