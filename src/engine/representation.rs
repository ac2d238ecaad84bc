// ============================================================================
// Rounding & Representation Selector
// Applies the rounding mode and picks fixed vs. exponential rendering
// ============================================================================

use crate::domain::RoundMode;
use crate::numeric::{to_exponential, to_fixed, MAX_SCALE};
use rust_decimal::Decimal;

/// A numeral rendered with exactly the requested fractional width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub exponential: bool,
}

/// Magnitude window outside of which values switch to exponential form.
#[derive(Debug, Clone, Copy)]
pub struct ExponentBounds {
    /// Nonzero magnitudes `<= min` go exponential
    pub min: Decimal,
    /// Magnitudes `> max` go exponential
    pub max: Decimal,
}

/// Round `value` to `precision` fractional digits with `round_mode` (if any)
/// and render it.
///
/// Without a mode the value is rendered at `precision` digits directly,
/// which rounds half away from zero when digits have to be dropped.
pub fn render(
    value: Decimal,
    precision: u32,
    round_mode: Option<RoundMode>,
    bounds: ExponentBounds,
) -> Rendered {
    let value = match round_mode {
        Some(mode) => value.round_dp_with_strategy(precision.min(MAX_SCALE), mode.strategy()),
        None => value,
    };

    let magnitude = value.abs();
    let exponential = !value.is_zero() && (magnitude <= bounds.min || magnitude > bounds.max);

    let text = if exponential {
        to_exponential(value, precision)
    } else {
        to_fixed(value, precision)
    };

    Rendered { text, exponential }
}
