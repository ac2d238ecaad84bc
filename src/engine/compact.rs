// ============================================================================
// Compaction Engine
// Maps large magnitudes onto a scaled value plus a unit label
// ============================================================================

use crate::domain::{ResolvedOptions, RoundMode};
use crate::interfaces::CompactFn;
use crate::numeric::{canonical_scale, div_scaled, MAX_SCALE};
use rust_decimal::{Decimal, RoundingStrategy};

/// Power-of-ten thresholds for K/M/B/T, largest first.
const THOUSAND_UNITS: [(u32, &str); 4] = [(12, "T"), (9, "B"), (6, "M"), (3, "K")];

/// Power-of-ten thresholds for 万/亿/万亿, largest first.
const CHINESE_UNITS: [(u32, &str); 3] = [(12, "万亿"), (8, "亿"), (4, "万")];

/// Result of running a converter over a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compacted {
    pub value: Decimal,
    /// Explicit precision, or the scaled value's own canonical scale
    pub precision: u32,
    pub unit: String,
}

/// Compact `value` with the resolved converter, precision and rounding.
///
/// Without an explicit precision the scaled value's canonical scale is
/// used, not the input's: `1500` compacts to `1.5K`. When rounding carries
/// the scaled value up into the next unit (`999.9999` at two digits), the
/// converter runs again on the rounded magnitude, giving `1K` over `1000`.
pub fn compact(value: Decimal, options: &ResolvedOptions) -> Compacted {
    let converter = &options.compact_converter;
    let scale = options.scale_on_infinite_precision;

    let first = convert(value, options.precision, converter, scale);
    if first.value.is_zero() {
        return first;
    }

    let rounded = round_scaled(first.value, first.precision, options.round_mode);
    if rounded.abs() <= first.value.abs() {
        return first;
    }

    let carried = value
        .checked_div(first.value)
        .and_then(|factor| factor.checked_mul(rounded));
    let Some(carried) = carried else {
        return first;
    };

    let second = convert(carried, options.precision, converter, scale);
    if second.unit == first.unit {
        first
    } else {
        tracing::trace!(from = %first.unit, to = %second.unit, "rounding carried into next unit");
        second
    }
}

fn convert(value: Decimal, precision: Option<u32>, converter: &CompactFn, scale: u32) -> Compacted {
    let (scaled, unit) = converter.convert(value, scale);
    Compacted {
        precision: precision.unwrap_or_else(|| canonical_scale(scaled)),
        value: scaled,
        unit,
    }
}

/// The scaled value as the selector will round it.
fn round_scaled(value: Decimal, precision: u32, round_mode: Option<RoundMode>) -> Decimal {
    let strategy = round_mode.map_or(RoundingStrategy::MidpointAwayFromZero, RoundMode::strategy);
    value.round_dp_with_strategy(precision.min(MAX_SCALE), strategy)
}

/// K (10³), M (10⁶), B (10⁹), T (10¹²).
pub fn thousand_converter(value: Decimal, division_scale: u32) -> (Decimal, String) {
    scale_by_units(value, &THOUSAND_UNITS, division_scale)
}

/// 万 (10⁴), 亿 (10⁸), 万亿 (10¹²).
pub fn chinese_converter(value: Decimal, division_scale: u32) -> (Decimal, String) {
    scale_by_units(value, &CHINESE_UNITS, division_scale)
}

fn scale_by_units(value: Decimal, units: &[(u32, &str)], division_scale: u32) -> (Decimal, String) {
    let magnitude = value.abs();

    for &(exponent, label) in units {
        let unit = pow10(exponent);
        if magnitude >= unit {
            return match div_scaled(value, unit, division_scale) {
                Ok(scaled) => (scaled, label.to_string()),
                Err(err) => {
                    tracing::warn!(%err, %value, label, "compaction failed, keeping raw value");
                    (value, String::new())
                },
            };
        }
    }

    (value, String::new())
}

#[inline]
fn pow10(exponent: u32) -> Decimal {
    Decimal::from_i128_with_scale(10i128.pow(exponent), 0)
}
