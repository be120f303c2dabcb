//! Money amounts as stored: `NUMERIC(12, 2)`, so at most two decimal places
//! and ten integer digits.

use std::str::FromStr;

use bigdecimal::BigDecimal;

pub const MAX_SCALE: i64 = 2;
const MAX_INTEGER_DIGITS: u32 = 10;

/// Parse a strictly positive amount that fits the column unchanged. Returns
/// `None` for anything Postgres would round or refuse.
pub fn parse_amount(raw: &str) -> Option<BigDecimal> {
    let value = BigDecimal::from_str(raw.trim()).ok()?;
    if value <= BigDecimal::from(0_i64) {
        return None;
    }

    let (_, scale) = value.normalized().as_bigint_and_exponent();
    if scale > MAX_SCALE {
        return None;
    }

    let ceiling = BigDecimal::from(10_i64.pow(MAX_INTEGER_DIGITS));
    if value >= ceiling {
        return None;
    }

    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_cents_and_whole_amounts() {
        assert_eq!(parse_amount("15.50"), Some(BigDecimal::from_str("15.50").unwrap()));
        assert_eq!(parse_amount(" 20 "), Some(BigDecimal::from(20_i64)));
        assert_eq!(parse_amount("0.01"), Some(BigDecimal::from_str("0.01").unwrap()));
    }

    #[test]
    fn trailing_zeros_do_not_count_as_precision() {
        assert!(parse_amount("1.500").is_some());
    }

    #[test]
    fn rejects_amounts_the_column_would_round() {
        assert_eq!(parse_amount("0.004"), None);
        assert_eq!(parse_amount("1.234"), None);
    }

    #[test]
    fn rejects_amounts_the_column_cannot_hold() {
        assert_eq!(parse_amount("100000000000"), None);
        assert_eq!(parse_amount("10000000000"), None);
        assert!(parse_amount("9999999999.99").is_some());
    }

    #[test]
    fn rejects_non_positive_and_non_numeric() {
        for raw in ["0", "0.00", "-3", "abc", ""] {
            assert_eq!(parse_amount(raw), None, "amount {:?}", raw);
        }
    }
}
