//! Currency amount parsing and formatting.
//!
//! ## Overview
//!
//! Bid exports carry amounts as display strings such as `"$1,234.56"`.
//! Parsing goes through `rust_decimal` so that the textual value is read
//! exactly before being narrowed to the `f64` stored on a [`Bid`].
//!
//! ## Examples
//!
//! ```
//! use bid_tree::types::amount::{format_amount, parse_amount};
//!
//! let amount = parse_amount("$1,234.50").unwrap();
//! assert_eq!(amount, 1234.5);
//! assert_eq!(format_amount(amount), "1234.50");
//! ```
//!
//! [`Bid`]: crate::types::Bid

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::error::AmountError;

/// Characters stripped from an amount before parsing
pub const STRIP_CHARS: [char; 2] = ['$', ','];

// ============================================================================
// Conversion Functions
// ============================================================================

/// Parse a currency string into an amount
///
/// Currency symbols and thousands separators are removed first. A blank
/// field parses as `0.0`.
///
/// Only plain decimal notation is accepted. Scientific notation (`"1e3"`)
/// and integer parts wider than a `Decimal` (about 28 digits) are rejected
/// as [`AmountError::Invalid`], unlike C's `atof`.
///
/// # Arguments
///
/// * `s` - Amount string (e.g., `"$50,000.25"`)
///
/// # Returns
///
/// * `Ok(f64)` - The parsed amount
/// * `Err(AmountError)` - If the remaining text is not a decimal number
///
/// # Example
///
/// ```
/// use bid_tree::types::amount::parse_amount;
///
/// assert_eq!(parse_amount("$27.00").unwrap(), 27.0);
/// assert_eq!(parse_amount("").unwrap(), 0.0);
/// assert!(parse_amount("n/a").is_err());
/// ```
pub fn parse_amount(s: &str) -> Result<f64, AmountError> {
    let cleaned: String = s.chars().filter(|c| !STRIP_CHARS.contains(c)).collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Ok(0.0);
    }

    let decimal = Decimal::from_str(cleaned).map_err(|_| AmountError::Invalid(s.to_string()))?;
    decimal.to_f64().ok_or_else(|| AmountError::OutOfRange(s.to_string()))
}

/// Format an amount with two decimal places
///
/// # Example
///
/// ```
/// use bid_tree::types::amount::format_amount;
///
/// assert_eq!(format_amount(5.0), "5.00");
/// assert_eq!(format_amount(1234.567), "1234.57");
/// ```
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

// ============================================================================
// Unit Tests
// ============================================================================
