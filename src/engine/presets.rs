// ============================================================================
// Preset Formatters
// Percentage, price and amount wrappers over the orchestrator
// ============================================================================
//
// Each preset only fills in options the caller left unset, then delegates
// to format_number_with. Caller-provided options always win.

use super::formatter::format_number_with;
use crate::domain::config::{self, GlobalConfig};
use crate::domain::{FormatOptions, RoundMode};
use rust_decimal::Decimal;

pub const PERCENT_SIGN: &str = "%";

/// Default fractional digits for percentages and amounts.
pub const PRESET_PRECISION: u32 = 2;

// ============================================================================
// Percentage
// ============================================================================

/// Format a ratio as a percentage: `0.1` → `10.00%`.
///
/// Defaults: multiply by 100, truncate, grouping on, sign-first on,
/// two fractional digits. The `%` glyph goes directly before or after the
/// number according to `percent_sign_first` (call option, else global);
/// any `%` already present in the caller's prefix/suffix is dropped.
pub fn format_percentage(value: impl Into<Option<Decimal>>, options: &FormatOptions) -> String {
    let config = config::current();
    format_percentage_with(value, options, &config)
}

pub fn format_percentage_with(
    value: impl Into<Option<Decimal>>,
    options: &FormatOptions,
    config: &GlobalConfig,
) -> String {
    let mut options = options.clone();

    let value = value.into();
    let value = if options.multiply_hundred.unwrap_or(true) {
        value.map(scale_hundred)
    } else {
        value
    };

    options.round_mode.get_or_insert(RoundMode::Truncate);
    options.enable_grouping.get_or_insert(true);
    options.sign_first.get_or_insert(true);
    options.precision.get_or_insert(PRESET_PRECISION);

    let prefix = options.prefix.take().unwrap_or_default().replace(PERCENT_SIGN, "");
    let suffix = options.suffix.take().unwrap_or_default().replace(PERCENT_SIGN, "");

    if options.percent_sign_first.unwrap_or(config.percent_sign_first) {
        options.prefix = Some(format!("{prefix}{PERCENT_SIGN}"));
        options.suffix = Some(suffix);
    } else {
        options.prefix = Some(prefix);
        options.suffix = Some(format!("{PERCENT_SIGN}{suffix}"));
    }

    format_number_with(value, &options, config)
}

fn scale_hundred(value: Decimal) -> Decimal {
    match value.checked_mul(Decimal::ONE_HUNDRED) {
        Some(scaled) => scaled,
        None => {
            tracing::warn!(%value, "percentage overflow, formatting unscaled value");
            value
        },
    }
}

// ============================================================================
// Price
// ============================================================================

/// Format a price. Defaults: trim trailing zeros, grouping on, truncate.
pub fn format_price(value: impl Into<Option<Decimal>>, options: &FormatOptions) -> String {
    let config = config::current();
    format_price_with(value, options, &config)
}

pub fn format_price_with(
    value: impl Into<Option<Decimal>>,
    options: &FormatOptions,
    config: &GlobalConfig,
) -> String {
    let mut options = options.clone();
    options.cut_invalid_zero.get_or_insert(true);
    options.enable_grouping.get_or_insert(true);
    options.round_mode.get_or_insert(RoundMode::Truncate);

    format_number_with(value, &options, config)
}

// ============================================================================
// Amount
// ============================================================================

/// Format an amount compactly: `9876543210.1` → `9.88B`.
/// Defaults: compaction on, trim trailing zeros, two fractional digits.
pub fn format_amount(value: impl Into<Option<Decimal>>, options: &FormatOptions) -> String {
    let config = config::current();
    format_amount_with(value, options, &config)
}

pub fn format_amount_with(
    value: impl Into<Option<Decimal>>,
    options: &FormatOptions,
    config: &GlobalConfig,
) -> String {
    let mut options = options.clone();
    options.enable_compact.get_or_insert(true);
    options.cut_invalid_zero.get_or_insert(true);
    options.precision.get_or_insert(PRESET_PRECISION);

    format_number_with(value, &options, config)
}
