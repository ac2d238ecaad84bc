// ============================================================================
// Zero-Shrink Engine
// Re-encodes long runs of fractional zeros as `0` + run length
// ============================================================================
//
// A run qualifies when it holds at least MIN_RUN zeros and is followed by a
// nonzero digit or the end of the input. Anything else (e.g. a run followed
// by an exponent marker) is left as is.

use crate::domain::ShrinkZeroMode;
use crate::interfaces::ShrinkZeroFn;
use smallvec::SmallVec;

/// Shortest zero run that gets shrunk.
pub const MIN_RUN: usize = 4;

const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// A qualifying zero run: byte offset and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroRun {
    pub start: usize,
    pub len: usize,
}

/// Linear scan for qualifying zero runs, left to right.
pub fn find_zero_runs(digits: &str) -> SmallVec<[ZeroRun; 4]> {
    let bytes = digits.as_bytes();
    let mut runs = SmallVec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'0' {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i] == b'0' {
            i += 1;
        }

        let len = i - start;
        let bounded = i == bytes.len() || matches!(bytes[i], b'1'..=b'9');
        if len >= MIN_RUN && bounded {
            runs.push(ZeroRun { start, len });
        }
    }

    runs
}

/// Encode a run length in the given notation. `None` for `Custom` without a
/// converter.
pub fn encode_run_length(
    count: usize,
    mode: ShrinkZeroMode,
    converter: Option<&ShrinkZeroFn>,
) -> Option<String> {
    let encoded = match mode {
        ShrinkZeroMode::Subscript => map_digits(count, &SUBSCRIPT_DIGITS),
        ShrinkZeroMode::Superscript => map_digits(count, &SUPERSCRIPT_DIGITS),
        ShrinkZeroMode::CurlyBraces => format!("{{{count}}}"),
        ShrinkZeroMode::Parentheses => format!("({count})"),
        ShrinkZeroMode::SquareBrackets => format!("[{count}]"),
        ShrinkZeroMode::Custom => converter?.encode(count),
    };
    Some(encoded)
}

/// Shrink every qualifying zero run in a fractional digit string.
///
/// Without a mode, or in `Custom` mode without a converter, the input is
/// returned unchanged.
pub fn shrink_zeros(
    digits: &str,
    mode: Option<ShrinkZeroMode>,
    converter: Option<&ShrinkZeroFn>,
) -> String {
    let Some(mode) = mode else {
        return digits.to_string();
    };
    if mode == ShrinkZeroMode::Custom && converter.is_none() {
        tracing::warn!("custom shrink mode without converter, skipping");
        return digits.to_string();
    }

    let runs = find_zero_runs(digits);
    if runs.is_empty() {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len());
    let mut cursor = 0;
    for run in runs {
        out.push_str(&digits[cursor..run.start]);
        out.push('0');
        match encode_run_length(run.len, mode, converter) {
            Some(encoded) => out.push_str(&encoded),
            None => out.push_str(&digits[run.start + 1..run.start + run.len]),
        }
        cursor = run.start + run.len;
    }
    out.push_str(&digits[cursor..]);

    out
}

fn map_digits(count: usize, table: &[char; 10]) -> String {
    count
        .to_string()
        .bytes()
        .map(|b| table[usize::from(b - b'0')])
        .collect()
}
