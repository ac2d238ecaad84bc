// ============================================================================
// Global Configuration
// Process-wide display defaults behind an atomically swapped snapshot
// ============================================================================

use super::modes::{ExplicitDirection, RoundMode, ShrinkZeroMode};
use super::options::resolve_alias;
use crate::engine::compact::thousand_converter;
use crate::interfaces::{CompactFn, ShrinkZeroFn};
use crate::numeric::MAX_SCALE;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::sync::{Arc, LazyLock};

/// Smallest and largest accepted group size.
pub const GROUP_SIZE_RANGE: (usize, usize) = (1, 10);

// ============================================================================
// Global Config Snapshot
// ============================================================================

/// Immutable snapshot of the process-wide formatting defaults.
///
/// Every formatting call reads one snapshot via [`current`] and uses it for
/// the whole call, so a concurrent [`configure`] never produces a mix of old
/// and new settings.
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    /// Resolve date locales from the process environment when none is given
    pub use_system_locale: bool,

    /// Put the percent sign in front of the number
    pub percent_sign_first: bool,

    /// Default rounding; `None` renders at full precision
    pub round_mode: Option<RoundMode>,

    /// Default bidi wrapping; `None` leaves output unwrapped
    pub explicit_direction: Option<ExplicitDirection>,

    /// Default zero-run notation; `None` disables shrinking
    pub shrink_zero_mode: Option<ShrinkZeroMode>,

    /// Encoder used by `ShrinkZeroMode::Custom`
    pub shrink_zero_converter: Option<ShrinkZeroFn>,

    pub decimal_separator: String,
    pub group_separator: String,

    /// Digits per group, always within [`GROUP_SIZE_RANGE`]
    pub group_size: usize,

    pub compact_converter: CompactFn,

    /// Nonzero magnitudes at or below this render exponentially
    pub exponent_min_bound: Decimal,

    /// Magnitudes above this render exponentially
    pub exponent_max_bound: Decimal,

    /// Fractional digits kept when a quotient does not terminate
    pub scale_on_infinite_precision: u32,

    /// Bumped on every configure/reset
    pub generation: u64,
}

impl GlobalConfig {
    pub const DEFAULT_DECIMAL_SEPARATOR: &'static str = ".";
    pub const DEFAULT_GROUP_SEPARATOR: &'static str = ",";
    pub const DEFAULT_GROUP_SIZE: usize = 3;
    pub const DEFAULT_SCALE_ON_INFINITE_PRECISION: u32 = 17;

    /// 10^-15
    pub fn default_exponent_min_bound() -> Decimal {
        Decimal::new(1, 15)
    }

    /// 10^21
    pub fn default_exponent_max_bound() -> Decimal {
        Decimal::from_i128_with_scale(10i128.pow(21), 0)
    }

    /// Build the next snapshot from a sparse update.
    ///
    /// Out-of-range values are clamped and empty separators ignored; both
    /// log a warning rather than failing.
    #[allow(deprecated)]
    fn apply(&self, update: ConfigUpdate) -> Self {
        let mut next = self.clone();
        next.generation = self.generation.wrapping_add(1);

        if let Some(flag) = update.use_system_locale {
            next.use_system_locale = flag;
        }
        if let Some(flag) = update.percent_sign_first {
            next.percent_sign_first = flag;
        }
        if let Some(mode) = update.round_mode {
            next.round_mode = mode;
        }
        if let Some(direction) = resolve_alias(update.explicit_direction, update.direction) {
            next.explicit_direction = direction;
        }
        if let Some(mode) = update.shrink_zero_mode {
            next.shrink_zero_mode = mode;
        }
        if let Some(converter) = update.shrink_zero_converter {
            next.shrink_zero_converter = converter;
        }
        if let Some(separator) = update.decimal_separator {
            if separator.is_empty() {
                tracing::warn!("ignoring empty decimal separator");
            } else {
                next.decimal_separator = separator;
            }
        }
        if let Some(separator) = update.group_separator {
            if separator.is_empty() {
                tracing::warn!("ignoring empty group separator");
            } else {
                next.group_separator = separator;
            }
        }
        if let Some(size) = resolve_alias(update.group_size, update.group_counts) {
            next.group_size = clamp_group_size(size);
        }
        if let Some(converter) = update.compact_converter {
            next.compact_converter = converter.unwrap_or_else(|| CompactFn::new(thousand_converter));
        }
        if let Some(bound) = update.exponent_min_bound {
            next.exponent_min_bound = bound.abs();
        }
        if let Some(bound) = update.exponent_max_bound {
            next.exponent_max_bound = bound.abs();
        }
        if let Some(scale) = update.scale_on_infinite_precision {
            if scale > MAX_SCALE {
                tracing::warn!(scale, max = MAX_SCALE, "clamping scale_on_infinite_precision");
            }
            next.scale_on_infinite_precision = scale.min(MAX_SCALE);
        }

        next
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            use_system_locale: false,
            percent_sign_first: false,
            round_mode: None,
            explicit_direction: None,
            shrink_zero_mode: None,
            shrink_zero_converter: None,
            decimal_separator: Self::DEFAULT_DECIMAL_SEPARATOR.to_string(),
            group_separator: Self::DEFAULT_GROUP_SEPARATOR.to_string(),
            group_size: Self::DEFAULT_GROUP_SIZE,
            compact_converter: CompactFn::new(thousand_converter),
            exponent_min_bound: Self::default_exponent_min_bound(),
            exponent_max_bound: Self::default_exponent_max_bound(),
            scale_on_infinite_precision: Self::DEFAULT_SCALE_ON_INFINITE_PRECISION,
            generation: 0,
        }
    }
}

/// Clamp a group size into [`GROUP_SIZE_RANGE`].
pub fn clamp_group_size(size: usize) -> usize {
    let (min, max) = GROUP_SIZE_RANGE;
    let clamped = size.clamp(min, max);
    if clamped != size {
        tracing::warn!(requested = size, clamped, "group size out of range");
    }
    clamped
}

// ============================================================================
// Sparse Update
// ============================================================================

/// Sparse update for [`configure`].
///
/// Outer `None` leaves a field untouched. For nullable fields the inner
/// option distinguishes "set to value" (`Some(Some(v))`) from "clear back to
/// the built-in default" (`Some(None)`).
#[derive(Debug, Clone)]
pub struct ConfigUpdate {
    pub use_system_locale: Option<bool>,
    pub percent_sign_first: Option<bool>,
    pub round_mode: Option<Option<RoundMode>>,
    pub explicit_direction: Option<Option<ExplicitDirection>>,
    #[deprecated(note = "renamed to `explicit_direction`")]
    pub direction: Option<Option<ExplicitDirection>>,
    pub shrink_zero_mode: Option<Option<ShrinkZeroMode>>,
    pub shrink_zero_converter: Option<Option<ShrinkZeroFn>>,
    pub decimal_separator: Option<String>,
    pub group_separator: Option<String>,
    pub group_size: Option<usize>,
    #[deprecated(note = "renamed to `group_size`")]
    pub group_counts: Option<usize>,
    /// `Some(None)` restores the thousand-unit converter
    pub compact_converter: Option<Option<CompactFn>>,
    pub exponent_min_bound: Option<Decimal>,
    pub exponent_max_bound: Option<Decimal>,
    pub scale_on_infinite_precision: Option<u32>,
}

#[allow(deprecated)]
impl Default for ConfigUpdate {
    fn default() -> Self {
        Self {
            use_system_locale: None,
            percent_sign_first: None,
            round_mode: None,
            explicit_direction: None,
            direction: None,
            shrink_zero_mode: None,
            shrink_zero_converter: None,
            decimal_separator: None,
            group_separator: None,
            group_size: None,
            group_counts: None,
            compact_converter: None,
            exponent_min_bound: None,
            exponent_max_bound: None,
            scale_on_infinite_precision: None,
        }
    }
}

impl ConfigUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_use_system_locale(mut self, flag: bool) -> Self {
        self.use_system_locale = Some(flag);
        self
    }

    pub fn with_percent_sign_first(mut self, flag: bool) -> Self {
        self.percent_sign_first = Some(flag);
        self
    }

    /// `None` clears the global rounding mode
    pub fn with_round_mode(mut self, mode: Option<RoundMode>) -> Self {
        self.round_mode = Some(mode);
        self
    }

    /// `None` clears the global direction
    pub fn with_explicit_direction(mut self, direction: Option<ExplicitDirection>) -> Self {
        self.explicit_direction = Some(direction);
        self
    }

    #[deprecated(note = "use `with_explicit_direction`")]
    #[allow(deprecated)]
    pub fn with_direction(mut self, direction: Option<ExplicitDirection>) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_shrink_zero_mode(mut self, mode: Option<ShrinkZeroMode>) -> Self {
        self.shrink_zero_mode = Some(mode);
        self
    }

    pub fn with_shrink_zero_converter(mut self, converter: Option<ShrinkZeroFn>) -> Self {
        self.shrink_zero_converter = Some(converter);
        self
    }

    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = Some(separator.into());
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

    pub fn with_compact_converter(mut self, converter: Option<CompactFn>) -> Self {
        self.compact_converter = Some(converter);
        self
    }

    pub fn with_exponent_bounds(mut self, min: Decimal, max: Decimal) -> Self {
        self.exponent_min_bound = Some(min);
        self.exponent_max_bound = Some(max);
        self
    }

    pub fn with_scale_on_infinite_precision(mut self, scale: u32) -> Self {
        self.scale_on_infinite_precision = Some(scale);
        self
    }
}

// ============================================================================
// Process-wide Store
// ============================================================================

static STORE: LazyLock<RwLock<Arc<GlobalConfig>>> =
    LazyLock::new(|| RwLock::new(Arc::new(GlobalConfig::default())));

/// The snapshot formatting calls should use right now.
#[inline]
pub fn current() -> Arc<GlobalConfig> {
    STORE.read().clone()
}

/// Apply a sparse update; later formatting calls observe it immediately.
pub fn configure(update: ConfigUpdate) {
    let mut slot = STORE.write();
    let next = slot.apply(update);
    tracing::debug!(generation = next.generation, "global display config updated");
    *slot = Arc::new(next);
}

/// Restore every field to its built-in default in one swap.
pub fn reset() {
    let mut slot = STORE.write();
    let generation = slot.generation.wrapping_add(1);
    *slot = Arc::new(GlobalConfig {
        generation,
        ..GlobalConfig::default()
    });
    tracing::debug!(generation, "global display config reset");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ConfigGuard;

    #[test]
    fn test_defaults() {
        let config = GlobalConfig::default();
        assert_eq!(config.decimal_separator, ".");
        assert_eq!(config.group_separator, ",");
        assert_eq!(config.group_size, 3);
        assert_eq!(config.scale_on_infinite_precision, 17);
        assert_eq!(config.exponent_min_bound, "0.000000000000001".parse().unwrap());
        assert_eq!(
            config.exponent_max_bound,
            "1000000000000000000000".parse().unwrap()
        );
        assert!(config.round_mode.is_none());
    }

    #[test]
    fn test_sparse_update_leaves_other_fields() {
        let base = GlobalConfig::default();
        let next = base.apply(ConfigUpdate::new().with_group_separator("_"));
        assert_eq!(next.group_separator, "_");
        assert_eq!(next.decimal_separator, ".");
        assert_eq!(next.generation, base.generation + 1);
    }

    #[test]
    fn test_explicit_clear_vs_leave() {
        let base = GlobalConfig::default()
            .apply(ConfigUpdate::new().with_round_mode(Some(RoundMode::Floor)));
        assert_eq!(base.round_mode, Some(RoundMode::Floor));

        let untouched = base.apply(ConfigUpdate::new());
        assert_eq!(untouched.round_mode, Some(RoundMode::Floor));

        let cleared = base.apply(ConfigUpdate::new().with_round_mode(None));
        assert_eq!(cleared.round_mode, None);
    }

    #[test]
    fn test_group_size_clamped() {
        let base = GlobalConfig::default();
        assert_eq!(base.apply(ConfigUpdate::new().with_group_size(0)).group_size, 1);
        assert_eq!(base.apply(ConfigUpdate::new().with_group_size(42)).group_size, 10);
        assert_eq!(base.apply(ConfigUpdate::new().with_group_size(4)).group_size, 4);
    }

    #[test]
    fn test_empty_separator_ignored() {
        let next = GlobalConfig::default().apply(ConfigUpdate::new().with_decimal_separator(""));
        assert_eq!(next.decimal_separator, ".");
    }

    #[test]
    #[allow(deprecated)]
    fn test_deprecated_aliases() {
        let base = GlobalConfig::default();

        let old_only = base.apply(ConfigUpdate::new().with_group_counts(5));
        assert_eq!(old_only.group_size, 5);

        let both = base.apply(ConfigUpdate::new().with_group_counts(5).with_group_size(2));
        assert_eq!(both.group_size, 2);

        let direction = base.apply(
            ConfigUpdate::new()
                .with_direction(Some(ExplicitDirection::Rli))
                .with_explicit_direction(Some(ExplicitDirection::Lri)),
        );
        assert_eq!(direction.explicit_direction, Some(ExplicitDirection::Lri));
    }

    #[test]
    fn test_store_configure_and_reset() {
        let _guard = ConfigGuard::acquire();

        let before = current().generation;
        configure(ConfigUpdate::new().with_group_separator(" ").with_use_system_locale(true));
        let snapshot = current();
        assert_eq!(snapshot.group_separator, " ");
        assert!(snapshot.use_system_locale);
        assert!(snapshot.generation > before);

        reset();
        let restored = current();
        assert_eq!(restored.group_separator, ",");
        assert!(!restored.use_system_locale);
        assert!(restored.generation > snapshot.generation);
    }

    #[test]
    fn test_snapshot_is_stable_across_configure() {
        let _guard = ConfigGuard::acquire();

        let held = current();
        configure(ConfigUpdate::new().with_decimal_separator(","));
        assert_eq!(held.decimal_separator, ".");
        assert_eq!(current().decimal_separator, ",");
    }

    #[test]
    fn test_scale_clamped() {
        let next = GlobalConfig::default()
            .apply(ConfigUpdate::new().with_scale_on_infinite_precision(40));
        assert_eq!(next.scale_on_infinite_precision, MAX_SCALE);
    }
}
