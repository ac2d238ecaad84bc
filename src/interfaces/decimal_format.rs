// ============================================================================
// Decimal Format Interface
// Method-call access to the formatters for decimals and numeric strings
// ============================================================================

use crate::domain::FormatOptions;
use crate::engine::{format_amount, format_number, format_percentage, format_price};
use crate::numeric::try_parse;
use rust_decimal::Decimal;

/// Extension trait exposing the formatters as methods.
///
/// Implemented for `Decimal`, `Option<Decimal>` and `str`. Strings are parsed
/// best-effort; anything unparseable takes the `def_if_null` path.
pub trait FormatDecimal {
    /// The value to format, if any
    fn to_display_decimal(&self) -> Option<Decimal>;

    fn format_number(&self, options: &FormatOptions) -> String {
        format_number(self.to_display_decimal(), options)
    }

    fn format_percentage(&self, options: &FormatOptions) -> String {
        format_percentage(self.to_display_decimal(), options)
    }

    fn format_price(&self, options: &FormatOptions) -> String {
        format_price(self.to_display_decimal(), options)
    }

    fn format_amount(&self, options: &FormatOptions) -> String {
        format_amount(self.to_display_decimal(), options)
    }
}

impl FormatDecimal for Decimal {
    #[inline]
    fn to_display_decimal(&self) -> Option<Decimal> {
        Some(*self)
    }
}

impl FormatDecimal for Option<Decimal> {
    #[inline]
    fn to_display_decimal(&self) -> Option<Decimal> {
        *self
    }
}

impl FormatDecimal for str {
    #[inline]
    fn to_display_decimal(&self) -> Option<Decimal> {
        try_parse(self)
    }
}
