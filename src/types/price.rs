//! Price helpers.
//!
//! ## Overview
//!
//! Book prices are `rust_decimal::Decimal` values with two decimal places.
//! Floating point never touches money: sample and random prices are built
//! from integer cents.
//!
//! ## Examples
//!
//! ```
//! use bookstore_orders::types::price::{from_cents, format_price, parse_price};
//!
//! let price = from_cents(4599);
//! assert_eq!(format_price(price), "$45.99");
//! assert_eq!(parse_price("45.99"), Some(price));
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;

/// Decimal places kept for display and rounding
pub const PRICE_DP: u32 = 2;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Build a price from whole cents
///
/// ```
/// use bookstore_orders::types::price::{from_cents, format_price};
///
/// assert_eq!(format_price(from_cents(3599)), "$35.99");
/// ```
pub fn from_cents(cents: u64) -> Decimal {
    Decimal::from(cents) / Decimal::from(100u64)
}

/// Parse a price string
///
/// # Returns
///
/// * `Some(Decimal)` - The price rounded to 2 decimal places
/// * `None` - If parsing fails or the value is negative
///
/// ```
/// use bookstore_orders::types::price::parse_price;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_price("45.99"), Some(Decimal::new(4599, 2)));
/// assert_eq!(parse_price("-1.00"), None);
/// assert_eq!(parse_price("cheap"), None);
/// ```
pub fn parse_price(s: &str) -> Option<Decimal> {
    let price = Decimal::from_str(s.trim()).ok()?;
    if price.is_sign_negative() {
        return None;
    }
    Some(price.round_dp(PRICE_DP))
}

/// Format a price as dollars with exactly 2 decimal places
///
/// ```
/// use bookstore_orders::types::price::format_price;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_price(Decimal::new(40, 0)), "$40.00");
/// assert_eq!(format_price(Decimal::new(4599, 2)), "$45.99");
/// ```
pub fn format_price(price: Decimal) -> String {
    format!("${:.2}", price.round_dp(PRICE_DP))
}

// ============================================================================
// Unit Tests
// ============================================================================
