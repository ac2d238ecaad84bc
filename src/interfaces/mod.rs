// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod converter;
mod decimal_format;

pub use converter::{CompactConverter, CompactFn, ShrinkZeroConverter, ShrinkZeroFn};
pub use decimal_format::FormatDecimal;
