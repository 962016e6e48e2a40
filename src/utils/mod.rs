//! Utility functions for formatting report values
//!
//! Centralized display helpers so the table output formats cash, share
//! counts and percentages the same way everywhere.

use rust_decimal::Decimal;

/// Currency symbol options for formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencySymbol {
    /// Include "$" prefix
    Dollar,
    /// No currency symbol (for table cells, calculations display)
    None,
}

/// Insert `,` every three digits of an unsigned digit string
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Core formatting function with full control over output.
///
/// Rounded to two decimal places, `,` thousands separator, `.` decimal separator,
/// sign ahead of the symbol.
///
/// # Examples
/// ```
/// use captable::utils::{format_currency_with_width, CurrencySymbol};
/// use rust_decimal_macros::dec;
///
/// assert_eq!(
///     format_currency_with_width(dec!(1234.56), 0, CurrencySymbol::Dollar),
///     "$1,234.56"
/// );
///
/// assert_eq!(
///     format_currency_with_width(dec!(1234), 12, CurrencySymbol::None),
///     "    1,234.00"
/// );
/// ```
pub fn format_currency_with_width(value: Decimal, width: usize, symbol: CurrencySymbol) -> String {
    // Sign follows the rounded value so tiny negatives print as 0.00
    let rounded = value.round_dp(2);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };

    let formatted = format!("{:.2}", rounded.abs());
    let (integer_part, decimal_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let prefix = match symbol {
        CurrencySymbol::Dollar => "$",
        CurrencySymbol::None => "",
    };

    let result = format!(
        "{}{}{}.{}",
        sign,
        prefix,
        group_thousands(integer_part),
        decimal_part
    );

    if width > 0 && result.len() < width {
        format!("{:>width$}", result, width = width)
    } else {
        result
    }
}

/// Format as dollars: "$1,234.56"
///
/// # Examples
/// ```
/// use captable::utils::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(1234.56)), "$1,234.56");
/// assert_eq!(format_currency(dec!(-500)), "-$500.00");
/// ```
pub fn format_currency(value: Decimal) -> String {
    format_currency_with_width(value, 0, CurrencySymbol::Dollar)
}

/// Share count with thousands separators: "1,250,000"
pub fn format_shares(shares: i64) -> String {
    let digits = shares.unsigned_abs().to_string();
    let sign = if shares < 0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(&digits))
}

/// Percentage with two decimals: "66.67%"
pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    if rounded.is_zero() {
        return "0.00%".to_string();
    }
    format!("{:.2}%", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency_basic() {
        assert_eq!(format_currency(dec!(1234.56)), "$1,234.56");
        assert_eq!(format_currency(dec!(0.99)), "$0.99");
        assert_eq!(format_currency(dec!(1000000)), "$1,000,000.00");
    }

    #[test]
    fn test_format_currency_small_values() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(0.01)), "$0.01");
        assert_eq!(format_currency(dec!(12)), "$12.00");
        assert_eq!(format_currency(dec!(999.99)), "$999.99");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec!(-1234.56)), "-$1,234.56");
        assert_eq!(format_currency(dec!(-0.01)), "-$0.01");
    }

    #[test]
    fn test_format_currency_sign_follows_rounding() {
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
        assert_eq!(format_currency(dec!(-0.004)), "$0.00");
        assert_eq!(format_currency(dec!(-0.006)), "-$0.01");
        assert_eq!(
            format_currency_with_width(dec!(-0.001), 8, CurrencySymbol::None),
            "    0.00"
        );
    }

    #[test]
    fn test_format_with_width() {
        let result = format_currency_with_width(dec!(100), 12, CurrencySymbol::Dollar);
        assert_eq!(result, "     $100.00");

        let result = format_currency_with_width(dec!(1000000), 5, CurrencySymbol::Dollar);
        assert_eq!(result, "$1,000,000.00");
    }

    #[test]
    fn test_format_shares() {
        assert_eq!(format_shares(0), "0");
        assert_eq!(format_shares(999), "999");
        assert_eq!(format_shares(1000), "1,000");
        assert_eq!(format_shares(1250000), "1,250,000");
        assert_eq!(format_shares(-45000), "-45,000");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(100)), "100.00%");
        assert_eq!(format_percent(dec!(0)), "0.00%");
        assert_eq!(format_percent(dec!(33.3333)), "33.33%");
        assert_eq!(format_percent(dec!(66.6667)), "66.67%");
        assert_eq!(format_percent(dec!(-0.001)), "0.00%");
        assert_eq!(format_percent(dec!(-1.234)), "-1.23%");
    }
}
