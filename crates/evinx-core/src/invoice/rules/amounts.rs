//! Amount parsing for German-formatted invoice numbers.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a German-formatted amount (e.g. "1.234,56" or "12,34").
///
/// Thousands dots are dropped and the decimal comma becomes a point.
pub fn parse_german_amount(s: &str) -> Option<Decimal> {
    let normalized = s.trim().replace('.', "").replace(',', ".");
    if !normalized.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    Decimal::from_str(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_german_amount() {
        assert_eq!(
            parse_german_amount("1.234,56"),
            Some(Decimal::from_str("1234.56").unwrap())
        );
        assert_eq!(
            parse_german_amount("12,34"),
            Some(Decimal::from_str("12.34").unwrap())
        );
        assert_eq!(
            parse_german_amount("1.000.000,5"),
            Some(Decimal::from_str("1000000.5").unwrap())
        );
        assert_eq!(parse_german_amount("15"), Some(Decimal::from(15)));
    }

    #[test]
    fn test_parse_german_amount_rejects_garbage() {
        assert_eq!(parse_german_amount(""), None);
        assert_eq!(parse_german_amount(","), None);
        assert_eq!(parse_german_amount("12,34,56"), None);
        assert_eq!(parse_german_amount("EUR"), None);
    }
}
