//! Numeric coercion for admin form input.
//!
//! Prices and counts are typed into text fields. Parsing is strict and typed
//! internally, but the public helpers never reject: unparsable input falls
//! back to a per-field default so the admin is never blocked on a number.

use thiserror::Error;

/// Why a numeric input did not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing was typed.
    #[error("empty input")]
    Empty,

    /// The text is not a number.
    #[error("not a number: {0:?}")]
    Invalid(String),

    /// The number is NaN or infinite.
    #[error("not a finite number: {0:?}")]
    NonFinite(String),
}

/// Parse a decimal amount. Accepts surrounding whitespace and a decimal comma.
pub fn parse_price(input: &str) -> Result<f64, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let normalized = trimmed.replace(',', ".");
    let value: f64 = normalized
        .parse()
        .map_err(|_| ParseError::Invalid(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(ParseError::NonFinite(trimmed.to_string()));
    }
    Ok(value)
}

/// Parse an integer count. A decimal input is truncated toward zero.
pub fn parse_count(input: &str) -> Result<i64, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    match trimmed.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(_) => parse_price(trimmed).map(|v| v.trunc() as i64),
    }
}

/// Required amount: unparsable input becomes `0.0`.
pub fn price_or_zero(input: &str) -> f64 {
    parse_price(input).unwrap_or(0.0)
}

/// Optional amount: unparsable or empty input becomes `None`.
pub fn price_or_none(input: &str) -> Option<f64> {
    parse_price(input).ok()
}

/// Non-negative count: unparsable input becomes `0`, negatives clamp to `0`.
pub fn count_or_zero(input: &str) -> u32 {
    parse_count(input)
        .map(|v| v.clamp(0, i64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}

/// Percentage in `0..=100`: unparsable input becomes `0`.
pub fn percent_or_zero(input: &str) -> u8 {
    parse_count(input).map(|v| v.clamp(0, 100) as u8).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12.5"), Ok(12.5));
        assert_eq!(parse_price(" 12,5 "), Ok(12.5));
        assert_eq!(parse_price(""), Err(ParseError::Empty));
        assert!(matches!(parse_price("doce"), Err(ParseError::Invalid(_))));
        assert!(matches!(parse_price("inf"), Err(ParseError::NonFinite(_))));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("7"), Ok(7));
        assert_eq!(parse_count("7.9"), Ok(7));
        assert_eq!(parse_count("-3"), Ok(-3));
        assert!(parse_count("x").is_err());
    }

    #[test]
    fn test_silent_defaults() {
        assert_eq!(price_or_zero("abc"), 0.0);
        assert_eq!(price_or_none(""), None);
        assert_eq!(price_or_none("19.99"), Some(19.99));
        assert_eq!(count_or_zero("-4"), 0);
        assert_eq!(count_or_zero("nope"), 0);
        assert_eq!(count_or_zero("12"), 12);
    }

    #[test]
    fn test_percent_clamped() {
        assert_eq!(percent_or_zero("150"), 100);
        assert_eq!(percent_or_zero("-5"), 0);
        assert_eq!(percent_or_zero("15"), 15);
        assert_eq!(percent_or_zero(""), 0);
    }
}
