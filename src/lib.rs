// ============================================================================
// Decimal Display Library
// Locale-aware rendering of arbitrary-precision decimals for display layers
// ============================================================================

//! # Decimal Display
//!
//! Turns `rust_decimal::Decimal` values into display strings under a
//! composable set of rules.
//!
//! ## Features
//!
//! - **Rounding modes** (round/floor/ceil/truncate) with automatic
//!   exponential notation outside a configurable magnitude window
//! - **Digit grouping** with any separator and group size
//! - **Compaction** into K/M/B/T (or 万/亿) units via pluggable converters
//! - **Zero shrinking**: `0.0000012` → `0.0₅12` and friends
//! - **Sign placement, prefixes/suffixes and bidi wrapping**
//! - **Process-wide defaults** behind an atomically swapped snapshot
//!
//! ## Example
//!
//! ```rust
//! use decimal_display::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let value: Decimal = "9876543210.1".parse().unwrap();
//! assert_eq!(format_amount(value, &FormatOptions::new()), "9.88B");
//!
//! let ratio: Decimal = "0.1".parse().unwrap();
//! assert_eq!(format_percentage(ratio, &FormatOptions::new()), "10.00%");
//!
//! let options = FormatOptions::new().with_def_if_null("--");
//! assert_eq!(format_number(None::<Decimal>, &options), "--");
//! ```

pub mod date;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        configure, current, reset, ConfigUpdate, ExplicitDirection, FormatOptions, GlobalConfig,
        RoundMode, ShrinkZeroMode,
    };
    pub use crate::engine::{
        chinese_converter, format_amount, format_number, format_number_with, format_percentage,
        format_price, thousand_converter,
    };
    pub use crate::interfaces::{
        CompactConverter, CompactFn, FormatDecimal, ShrinkZeroConverter, ShrinkZeroFn,
    };
}
