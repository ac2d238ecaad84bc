// ============================================================================
// Format Options
// Per-call overrides and their resolution against the global snapshot
// ============================================================================

use super::config::{clamp_group_size, GlobalConfig};
use super::modes::{ExplicitDirection, RoundMode, ShrinkZeroMode};
use crate::interfaces::{CompactFn, ShrinkZeroFn};
use rust_decimal::Decimal;

/// Pick the current name over its deprecated alias.
#[inline]
pub(crate) fn resolve_alias<T>(current: Option<T>, deprecated: Option<T>) -> Option<T> {
    current.or(deprecated)
}

// ============================================================================
// Per-call Options
// ============================================================================

/// Per-call formatting options. Every field is optional; absent fields fall
/// back to the global configuration, then to built-in defaults.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Fractional digits to render; defaults to the value's own scale
    pub precision: Option<u32>,
    pub round_mode: Option<RoundMode>,

    pub enable_grouping: Option<bool>,
    pub group_separator: Option<String>,
    pub group_size: Option<usize>,
    #[deprecated(note = "renamed to `group_size`")]
    pub group_counts: Option<usize>,
    pub decimal_separator: Option<String>,

    /// Compaction wins over grouping when both are enabled
    pub enable_compact: Option<bool>,
    pub compact_converter: Option<CompactFn>,

    pub show_sign: Option<bool>,
    /// Put the sign glyph in front of the prefix
    pub sign_first: Option<bool>,
    /// Trim trailing fractional zeros after rounding
    pub cut_invalid_zero: Option<bool>,

    pub prefix: Option<String>,
    pub suffix: Option<String>,
    /// Replaces the numeral when the value is zero
    pub def_if_zero: Option<String>,
    /// Replaces the numeral when there is no value
    pub def_if_null: Option<String>,

    pub shrink_zero_mode: Option<ShrinkZeroMode>,
    pub shrink_zero_converter: Option<ShrinkZeroFn>,

    pub explicit_direction: Option<ExplicitDirection>,
    #[deprecated(note = "renamed to `explicit_direction`")]
    pub direction: Option<ExplicitDirection>,

    /// Percentage only: scale the value by 100 first (default on)
    pub multiply_hundred: Option<bool>,
    /// Percentage only: put `%` before the number
    pub percent_sign_first: Option<bool>,
}

#[allow(deprecated)]
impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            precision: None,
            round_mode: None,
            enable_grouping: None,
            group_separator: None,
            group_size: None,
            group_counts: None,
            decimal_separator: None,
            enable_compact: None,
            compact_converter: None,
            show_sign: None,
            sign_first: None,
            cut_invalid_zero: None,
            prefix: None,
            suffix: None,
            def_if_zero: None,
            def_if_null: None,
            shrink_zero_mode: None,
            shrink_zero_converter: None,
            explicit_direction: None,
            direction: None,
            multiply_hundred: None,
            percent_sign_first: None,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_round_mode(mut self, mode: RoundMode) -> Self {
        self.round_mode = Some(mode);
        self
    }

    pub fn with_grouping(mut self, enabled: bool) -> Self {
        self.enable_grouping = Some(enabled);
        self
    }

    pub fn with_group_separator(mut self, separator: impl Into<String>) -> Self {
        self.group_separator = Some(separator.into());
        self
    }

    pub fn with_group_size(mut self, size: usize) -> Self {
        self.group_size = Some(size);
        self
    }

    #[deprecated(note = "use `with_group_size`")]
    #[allow(deprecated)]
    pub fn with_group_counts(mut self, size: usize) -> Self {
        self.group_counts = Some(size);
        self
    }

    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = Some(separator.into());
        self
    }

    pub fn with_compact(mut self, enabled: bool) -> Self {
        self.enable_compact = Some(enabled);
        self
    }

    pub fn with_compact_converter(mut self, converter: CompactFn) -> Self {
        self.compact_converter = Some(converter);
        self
    }

    pub fn with_show_sign(mut self, enabled: bool) -> Self {
        self.show_sign = Some(enabled);
        self
    }

    pub fn with_sign_first(mut self, enabled: bool) -> Self {
        self.sign_first = Some(enabled);
        self
    }

    pub fn with_cut_invalid_zero(mut self, enabled: bool) -> Self {
        self.cut_invalid_zero = Some(enabled);
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_def_if_zero(mut self, text: impl Into<String>) -> Self {
        self.def_if_zero = Some(text.into());
        self
    }

    pub fn with_def_if_null(mut self, text: impl Into<String>) -> Self {
        self.def_if_null = Some(text.into());
        self
    }

    pub fn with_shrink_zero_mode(mut self, mode: ShrinkZeroMode) -> Self {
        self.shrink_zero_mode = Some(mode);
        self
    }

    pub fn with_shrink_zero_converter(mut self, converter: ShrinkZeroFn) -> Self {
        self.shrink_zero_converter = Some(converter);
        self
    }

    pub fn with_explicit_direction(mut self, direction: ExplicitDirection) -> Self {
        self.explicit_direction = Some(direction);
        self
    }

    #[deprecated(note = "use `with_explicit_direction`")]
    #[allow(deprecated)]
    pub fn with_direction(mut self, direction: ExplicitDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_multiply_hundred(mut self, enabled: bool) -> Self {
        self.multiply_hundred = Some(enabled);
        self
    }

    pub fn with_percent_sign_first(mut self, enabled: bool) -> Self {
        self.percent_sign_first = Some(enabled);
        self
    }

    /// Group size after alias resolution, unclamped
    #[allow(deprecated)]
    pub fn resolved_group_size(&self) -> Option<usize> {
        resolve_alias(self.group_size, self.group_counts)
    }

    /// Direction after alias resolution
    #[allow(deprecated)]
    pub fn resolved_explicit_direction(&self) -> Option<ExplicitDirection> {
        resolve_alias(self.explicit_direction, self.direction)
    }

    /// Merge per-call options over a global snapshot.
    pub fn resolve(&self, config: &GlobalConfig) -> ResolvedOptions {
        ResolvedOptions {
            precision: self.precision,
            round_mode: self.round_mode.or(config.round_mode),
            grouping: self.enable_grouping.unwrap_or(false),
            group_separator: non_empty_or(&self.group_separator, &config.group_separator),
            group_size: self
                .resolved_group_size()
                .map(clamp_group_size)
                .unwrap_or(config.group_size),
            decimal_separator: non_empty_or(&self.decimal_separator, &config.decimal_separator),
            compact: self.enable_compact.unwrap_or(false),
            compact_converter: self
                .compact_converter
                .clone()
                .unwrap_or_else(|| config.compact_converter.clone()),
            show_sign: self.show_sign.unwrap_or(false),
            sign_first: self.sign_first.unwrap_or(false),
            cut_invalid_zero: self.cut_invalid_zero.unwrap_or(false),
            prefix: self.prefix.clone().unwrap_or_default(),
            suffix: self.suffix.clone().unwrap_or_default(),
            def_if_zero: self.def_if_zero.clone(),
            def_if_null: self.def_if_null.clone().unwrap_or_default(),
            shrink_zero_mode: self.shrink_zero_mode.or(config.shrink_zero_mode),
            shrink_zero_converter: self
                .shrink_zero_converter
                .clone()
                .or_else(|| config.shrink_zero_converter.clone()),
            explicit_direction: self
                .resolved_explicit_direction()
                .or(config.explicit_direction),
            exponent_min_bound: config.exponent_min_bound,
            exponent_max_bound: config.exponent_max_bound,
            scale_on_infinite_precision: config.scale_on_infinite_precision,
        }
    }
}

fn non_empty_or(value: &Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.clone(),
        _ => fallback.to_string(),
    }
}

// ============================================================================
// Resolved Options
// ============================================================================

/// Fully resolved settings for one formatting call. The pipeline only ever
/// sees this type, never the raw options or aliases.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub precision: Option<u32>,
    pub round_mode: Option<RoundMode>,
    pub grouping: bool,
    pub group_separator: String,
    pub group_size: usize,
    pub decimal_separator: String,
    pub compact: bool,
    pub compact_converter: CompactFn,
    pub show_sign: bool,
    pub sign_first: bool,
    pub cut_invalid_zero: bool,
    pub prefix: String,
    pub suffix: String,
    pub def_if_zero: Option<String>,
    pub def_if_null: String,
    pub shrink_zero_mode: Option<ShrinkZeroMode>,
    pub shrink_zero_converter: Option<ShrinkZeroFn>,
    pub explicit_direction: Option<ExplicitDirection>,
    pub exponent_min_bound: Decimal,
    pub exponent_max_bound: Decimal,
    /// Fallback width for non-terminating quotients during compaction
    pub scale_on_infinite_precision: u32,
}
