// ============================================================================
// Converter Interfaces
// Pluggable strategies for unit compaction and zero-run encoding
// ============================================================================

use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;

/// Strategy for compacting a magnitude into a (scaled value, unit label) pair.
///
/// Implementations should pick larger units as magnitude grows; the
/// formatter does not check this. `division_scale` is the fractional width
/// from the call's configuration snapshot for quotients that do not
/// terminate (see [`crate::numeric::div_scaled`]).
pub trait CompactConverter: Send + Sync {
    /// Map `value` to its scaled value and unit label (`""` for no unit)
    fn convert(&self, value: Decimal, division_scale: u32) -> (Decimal, String);
}

impl<F> CompactConverter for F
where
    F: Fn(Decimal, u32) -> (Decimal, String) + Send + Sync,
{
    #[inline]
    fn convert(&self, value: Decimal, division_scale: u32) -> (Decimal, String) {
        self(value, division_scale)
    }
}

/// Strategy for encoding the length of a shrunk zero run in `Custom` mode.
pub trait ShrinkZeroConverter: Send + Sync {
    /// Encode a run length (always >= 4)
    fn encode(&self, count: usize) -> String;
}

impl<F> ShrinkZeroConverter for F
where
    F: Fn(usize) -> String + Send + Sync,
{
    #[inline]
    fn encode(&self, count: usize) -> String {
        self(count)
    }
}

/// Shared handle to a compaction strategy.
#[derive(Clone)]
pub struct CompactFn(pub Arc<dyn CompactConverter>);

/// Shared handle to a zero-run encoding strategy.
#[derive(Clone)]
pub struct ShrinkZeroFn(pub Arc<dyn ShrinkZeroConverter>);

impl CompactFn {
    pub fn new(converter: impl CompactConverter + 'static) -> Self {
        Self(Arc::new(converter))
    }

    #[inline]
    pub fn convert(&self, value: Decimal, division_scale: u32) -> (Decimal, String) {
        self.0.convert(value, division_scale)
    }
}

impl ShrinkZeroFn {
    pub fn new(converter: impl ShrinkZeroConverter + 'static) -> Self {
        Self(Arc::new(converter))
    }

    #[inline]
    pub fn encode(&self, count: usize) -> String {
        self.0.encode(count)
    }
}

impl fmt::Debug for CompactFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompactFn({:p})", Arc::as_ptr(&self.0))
    }
}

impl fmt::Debug for ShrinkZeroFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShrinkZeroFn({:p})", Arc::as_ptr(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_converters() {
        let compact = CompactFn::new(|v: Decimal, scale: u32| (v, format!("u{scale}")));
        assert_eq!(compact.convert(Decimal::ONE, 3), (Decimal::ONE, "u3".to_string()));

        let shrink = ShrinkZeroFn::new(|n: usize| format!("<{n}>"));
        assert_eq!(shrink.encode(6), "<6>");
    }
}
