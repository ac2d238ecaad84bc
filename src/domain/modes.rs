// ============================================================================
// Display Modes
// Rounding, zero-shrink and bidi direction enumerations
// ============================================================================

use rust_decimal::RoundingStrategy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Round Mode
// ============================================================================

/// How a value is brought down to the target fractional-digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundMode {
    /// Nearest, ties away from zero (`2.5` → `3`, `-2.5` → `-3`)
    Round,
    /// Toward negative infinity
    Floor,
    /// Toward positive infinity
    Ceil,
    /// Toward zero
    Truncate,
}

impl RoundMode {
    /// The equivalent rust_decimal strategy.
    #[inline]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            RoundMode::Round => RoundingStrategy::MidpointAwayFromZero,
            RoundMode::Floor => RoundingStrategy::ToNegativeInfinity,
            RoundMode::Ceil => RoundingStrategy::ToPositiveInfinity,
            RoundMode::Truncate => RoundingStrategy::ToZero,
        }
    }
}

// ============================================================================
// Shrink Zero Mode
// ============================================================================

/// Notation used to encode the length of a shrunk zero run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShrinkZeroMode {
    /// `0₅`
    Subscript,
    /// `0⁵`
    Superscript,
    /// `0{5}`
    CurlyBraces,
    /// `0(5)`
    Parentheses,
    /// `0[5]`
    SquareBrackets,
    /// Delegates to a configured `ShrinkZeroConverter`; skipped without one
    Custom,
}

// ============================================================================
// Explicit Direction
// ============================================================================

/// Unicode explicit bidi formatting pairs used to wrap formatted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExplicitDirection {
    /// Left-to-right isolate (U+2066 … U+2069)
    Lri,
    /// Right-to-left isolate (U+2067 … U+2069)
    Rli,
    /// First-strong isolate (U+2068 … U+2069)
    Fsi,
    /// Left-to-right embedding (U+202A … U+202C)
    Lre,
    /// Right-to-left embedding (U+202B … U+202C)
    Rle,
    /// Left-to-right override (U+202D … U+202C)
    Lro,
    /// Right-to-left override (U+202E … U+202C)
    Rlo,
}

impl ExplicitDirection {
    const PDF: char = '\u{202C}';
    const PDI: char = '\u{2069}';

    /// Opening control character.
    pub const fn start(self) -> char {
        match self {
            ExplicitDirection::Lri => '\u{2066}',
            ExplicitDirection::Rli => '\u{2067}',
            ExplicitDirection::Fsi => '\u{2068}',
            ExplicitDirection::Lre => '\u{202A}',
            ExplicitDirection::Rle => '\u{202B}',
            ExplicitDirection::Lro => '\u{202D}',
            ExplicitDirection::Rlo => '\u{202E}',
        }
    }

    /// Closing control character: PDI for isolates, PDF otherwise.
    pub const fn end(self) -> char {
        match self {
            ExplicitDirection::Lri | ExplicitDirection::Rli | ExplicitDirection::Fsi => Self::PDI,
            _ => Self::PDF,
        }
    }

    /// True for the isolate variants.
    pub const fn is_isolate(self) -> bool {
        matches!(
            self,
            ExplicitDirection::Lri | ExplicitDirection::Rli | ExplicitDirection::Fsi
        )
    }
}
