//! # Formatting Utilities for the Whitelist Page
//!
//! For address shortening use [`shared::utils::truncate_address`].

/// Group digits with commas (e.g., 1234567 -> "1,234,567")
///
/// # Examples
///
/// ```rust
/// use whitelist_web::utils::format::format_count;
///
/// assert_eq!(format_count(1234567), "1,234,567");
/// assert_eq!(format_count(42), "42");
/// ```
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Sentence shown under the description.
pub fn fan_count_text(count: u64) -> String {
    format!("{} fans have already joined the Whitelist!", format_count(count))
}
