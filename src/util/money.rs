//! Money parsing and formatting utilities
//!
//! Amounts are `rust_decimal::Decimal` everywhere; these helpers sit at
//! the text boundary: parsing what the user typed into the entry modal
//! and rendering amounts with the locale's currency symbol.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a user-typed amount into a Decimal
///
/// Accepts "," as a decimal separator so Portuguese-style input works
/// without a locale branch.
///
/// # Examples
/// ```
/// use faretrack::util::money::parse_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(parse_amount("25").unwrap(), dec!(25));
/// assert_eq!(parse_amount(" 12.50 ").unwrap(), dec!(12.50));
/// assert_eq!(parse_amount("12,50").unwrap(), dec!(12.50));
/// assert!(parse_amount("abc").is_err());
/// ```
pub fn parse_amount(input: &str) -> Result<Decimal, String> {
    let normalized = input.trim().replace(',', ".");

    if normalized.is_empty() {
        return Err("Empty amount".to_string());
    }

    Decimal::from_str(&normalized).map_err(|_| format!("Invalid amount: {}", input.trim()))
}

/// Format an amount with a currency symbol and two decimal places
///
/// # Examples
/// ```
/// use faretrack::util::money::format_money;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_money(dec!(25), "$"), "$25.00");
/// assert_eq!(format_money(dec!(12.5), "R$"), "R$12.50");
/// ```
pub fn format_money(amount: Decimal, currency: &str) -> String {
    format!("{}{:.2}", currency, amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("0").unwrap(), dec!(0));
        assert_eq!(parse_amount("30").unwrap(), dec!(30));
        assert_eq!(parse_amount("12.50").unwrap(), dec!(12.50));
        assert_eq!(parse_amount("12,50").unwrap(), dec!(12.50));
        assert_eq!(parse_amount("  7.25  ").unwrap(), dec!(7.25));
        assert_eq!(parse_amount("-5").unwrap(), dec!(-5));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("   ").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("12.5.0").is_err());
        assert!(parse_amount("12x").is_err());
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec!(0), "$"), "$0.00");
        assert_eq!(format_money(dec!(25), "$"), "$25.00");
        assert_eq!(format_money(dec!(1234.5), "R$"), "R$1234.50");
        assert_eq!(format_money(dec!(0.7), "$"), "$0.70");
    }
}
