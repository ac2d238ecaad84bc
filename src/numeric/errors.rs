// ============================================================================
// Numeric Errors
// Failures of the parsing and division helpers
// ============================================================================

use std::fmt;

/// Why a decimal helper could not produce a value.
///
/// The formatting pipeline never surfaces these: it logs and falls back to
/// the unconverted value instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// Quotient or product does not fit in a `Decimal`
    Overflow,
    DivisionByZero,
    /// The offending input, as given
    InvalidInput(String),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => f.write_str("decimal overflow"),
            NumericError::DivisionByZero => f.write_str("division by zero"),
            NumericError::InvalidInput(input) => write!(f, "not a number: {input:?}"),
        }
    }
}

impl std::error::Error for NumericError {}

pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{div_scaled, parse_decimal};
    use rust_decimal::Decimal;

    #[test]
    fn test_division_errors() {
        let err = div_scaled(Decimal::ONE, Decimal::ZERO, 2).unwrap_err();
        assert_eq!(err, NumericError::DivisionByZero);
        assert_eq!(err.to_string(), "division by zero");

        let tenth = Decimal::new(1, 1);
        let err = div_scaled(Decimal::MAX, tenth, 2).unwrap_err();
        assert_eq!(err, NumericError::Overflow);
        assert_eq!(err.to_string(), "decimal overflow");
    }

    #[test]
    fn test_parse_error_keeps_input() {
        let err = parse_decimal(" 12abc").unwrap_err();
        assert_eq!(err, NumericError::InvalidInput(" 12abc".to_string()));
        assert_eq!(err.to_string(), "not a number: \" 12abc\"");
    }
}
