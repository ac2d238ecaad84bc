// ============================================================================
// Date Errors
// Error types for localized date formatting and month arithmetic
// ============================================================================

use std::fmt;

/// Errors from the date helpers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateError {
    /// The locale identifier is not known to the locale tables
    UnsupportedLocale(String),
    /// The strftime pattern contains an invalid specifier
    InvalidPattern(String),
    /// Month arithmetic left the representable date range
    OutOfRange,
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::UnsupportedLocale(locale) => write!(f, "unsupported locale: {locale}"),
            DateError::InvalidPattern(pattern) => write!(f, "invalid date pattern: {pattern}"),
            DateError::OutOfRange => write!(f, "date out of range"),
        }
    }
}

impl std::error::Error for DateError {}

/// Result type alias for date operations
pub type DateResult<T> = Result<T, DateError>;
