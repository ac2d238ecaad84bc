// ============================================================================
// Numeric Module
// Decimal glue between rust_decimal and the formatting pipeline
// ============================================================================
//
// This module provides:
// - Best-effort string -> Decimal parsing
// - Scale-aware division with a fallback scale for non-terminating quotients
// - Fixed-point and exponential rendering to an exact fractional width
// - NumericError: Error types for arithmetic helpers
//
// Design principles:
// - No floating-point operations
// - Fallible arithmetic returns Result (no panics)
// - Rendering rounds half away from zero unless a RoundMode was applied first

mod decimal;
mod errors;

pub use decimal::{
    canonical_scale, div_scaled, parse_decimal, to_exponential, to_fixed, try_parse,
    MAX_SCALE,
};
pub use errors::{NumericError, NumericResult};
