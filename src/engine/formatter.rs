// ============================================================================
// Format Orchestrator
// Sequences guards, sign handling, mode dispatch, shrink, affixes and bidi
// ============================================================================

use super::bidi;
use super::cleanup::cleanup;
use super::compact::compact;
use super::grouping::{group_numeral, split_fraction};
use super::representation::{render, ExponentBounds};
use super::shrink::shrink_zeros;
use crate::domain::config::{self, GlobalConfig};
use crate::domain::{FormatOptions, ResolvedOptions};
use crate::numeric::canonical_scale;
use rust_decimal::Decimal;

/// Which rendering path a call takes. Exactly one runs per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPath {
    Compact,
    Group,
    Plain,
}

impl RenderPath {
    /// Compact beats grouping beats plain.
    pub fn select(options: &ResolvedOptions) -> Self {
        if options.compact {
            RenderPath::Compact
        } else if options.grouping {
            RenderPath::Group
        } else {
            RenderPath::Plain
        }
    }
}

/// Format `value` using the current global configuration.
///
/// # Example
/// ```
/// use decimal_display::prelude::*;
///
/// let value: rust_decimal::Decimal = "1234567".parse().unwrap();
/// let options = FormatOptions::new()
///     .with_grouping(true)
///     .with_group_separator("_")
///     .with_precision(0);
/// assert_eq!(format_number(value, &options), "1_234_567");
/// ```
pub fn format_number(value: impl Into<Option<Decimal>>, options: &FormatOptions) -> String {
    let config = config::current();
    format_number_with(value, options, &config)
}

/// Format `value` against an explicit configuration snapshot.
pub fn format_number_with(
    value: impl Into<Option<Decimal>>,
    options: &FormatOptions,
    config: &GlobalConfig,
) -> String {
    format_resolved(value.into(), &options.resolve(config))
}

/// Run the pipeline over fully resolved options.
pub fn format_resolved(value: Option<Decimal>, options: &ResolvedOptions) -> String {
    let body = match value {
        None => affix(&options.prefix, &options.def_if_null, &options.suffix),
        Some(v) if v.is_zero() && options.def_if_zero.is_some() => {
            let text = options.def_if_zero.as_deref().unwrap_or_default();
            affix(&options.prefix, text, &options.suffix)
        },
        Some(v) => format_value(v, options),
    };

    bidi::wrap(body, options.explicit_direction)
}

fn format_value(value: Decimal, options: &ResolvedOptions) -> String {
    let (value, prefix) = apply_sign(value, options);

    let path = RenderPath::select(options);
    tracing::trace!(?path, %value, "formatting decimal");

    let bounds = ExponentBounds {
        min: options.exponent_min_bound,
        max: options.exponent_max_bound,
    };

    let (integer, fraction, unit) = match path {
        RenderPath::Compact => {
            let compacted = compact(value, options);
            let rendered = render(compacted.value, compacted.precision, options.round_mode, bounds);
            let numeral = cleanup(&rendered.text, options.cut_invalid_zero);
            let (integer, fraction) = split_fraction(&numeral);
            (integer.to_string(), fraction.to_string(), compacted.unit)
        },
        RenderPath::Group => {
            let precision = options.precision.unwrap_or_else(|| canonical_scale(value));
            let rendered = render(value, precision, options.round_mode, bounds);
            let numeral = cleanup(&rendered.text, options.cut_invalid_zero);
            let (integer, fraction) =
                group_numeral(&numeral, &options.group_separator, options.group_size);
            (integer, fraction, String::new())
        },
        RenderPath::Plain => {
            let precision = options.precision.unwrap_or_else(|| canonical_scale(value));
            let rendered = render(value, precision, options.round_mode, bounds);
            let numeral = cleanup(&rendered.text, options.cut_invalid_zero);
            let (integer, fraction) = split_fraction(&numeral);
            (integer.to_string(), fraction.to_string(), String::new())
        },
    };

    let digits = fraction.strip_prefix('.').unwrap_or(&fraction);
    let shrunk = shrink_zeros(
        digits,
        options.shrink_zero_mode,
        options.shrink_zero_converter.as_ref(),
    );

    let mut numeral = integer;
    if !shrunk.is_empty() {
        numeral.push_str(&options.decimal_separator);
        numeral.push_str(&shrunk);
    }
    numeral.push_str(&unit);

    affix(&prefix, &numeral, &options.suffix)
}

/// Sign handling. Sign-first moves the glyph in front of the prefix and
/// continues with the magnitude; otherwise only positives get an explicit
/// `+` after the prefix and negatives keep their embedded `-`.
fn apply_sign(value: Decimal, options: &ResolvedOptions) -> (Decimal, String) {
    if !options.show_sign {
        return (value, options.prefix.clone());
    }

    let positive = value > Decimal::ZERO;
    let negative = value < Decimal::ZERO;

    if options.sign_first {
        let glyph = if negative {
            "-"
        } else if positive {
            "+"
        } else {
            ""
        };
        (value.abs(), format!("{glyph}{}", options.prefix))
    } else if positive {
        (value, format!("{}+", options.prefix))
    } else {
        (value, options.prefix.clone())
    }
}

fn affix(prefix: &str, body: &str, suffix: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + body.len() + suffix.len());
    out.push_str(prefix);
    out.push_str(body);
    out.push_str(suffix);
    out
}
