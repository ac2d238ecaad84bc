// ============================================================================
// Decimal Helpers
// Parsing, scale-aware division and fixed/exponential rendering
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Largest scale a `rust_decimal::Decimal` can carry.
pub const MAX_SCALE: u32 = 28;

// ============================================================================
// Parsing
// ============================================================================

/// Parse a decimal string, accepting plain (`"-12.5"`) and scientific
/// (`"1.5e-7"`) notation. Surrounding whitespace and a leading `+` are ignored.
///
/// # Errors
/// Returns `InvalidInput` if the string is not a number.
pub fn parse_decimal(input: &str) -> NumericResult<Decimal> {
    let s = input.trim();
    let s = s.strip_prefix('+').unwrap_or(s);
    if s.is_empty() {
        return Err(NumericError::InvalidInput(input.to_string()));
    }

    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| NumericError::InvalidInput(input.to_string()))
}

/// Best-effort conversion: `None` when the string is not a number.
#[inline]
pub fn try_parse(input: &str) -> Option<Decimal> {
    parse_decimal(input).ok()
}

// ============================================================================
// Scale
// ============================================================================

/// Fractional digit count of the value's canonical form (trailing zeros
/// dropped), so `1.50` reports 1 and `100` reports 0.
#[inline]
pub fn canonical_scale(value: Decimal) -> u32 {
    value.normalize().scale()
}

// ============================================================================
// Division
// ============================================================================

/// Divide, falling back to `fallback_scale` fractional digits when the
/// quotient does not terminate.
///
/// Terminating quotients are returned exactly (normalized). Non-terminating
/// ones are rounded half away from zero to `fallback_scale` digits.
///
/// # Errors
/// - `DivisionByZero` if `divisor` is zero
/// - `Overflow` if the quotient is out of range
pub fn div_scaled(dividend: Decimal, divisor: Decimal, fallback_scale: u32) -> NumericResult<Decimal> {
    if divisor.is_zero() {
        return Err(NumericError::DivisionByZero);
    }

    let quotient = dividend
        .checked_div(divisor)
        .ok_or(NumericError::Overflow)?;

    let terminates = quotient
        .checked_mul(divisor)
        .is_some_and(|product| product == dividend);

    if terminates {
        Ok(quotient.normalize())
    } else {
        Ok(quotient
            .round_dp_with_strategy(fallback_scale.min(MAX_SCALE), RoundingStrategy::MidpointAwayFromZero)
            .normalize())
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render with exactly `fraction_digits` fractional digits, rounding half
/// away from zero when the value carries more digits than that.
pub fn to_fixed(value: Decimal, fraction_digits: u32) -> String {
    let mut rounded = if fraction_digits < value.scale() {
        value.round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero)
    } else {
        value
    };

    // "-0.00" is never a useful rendering
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }

    // Built from the coefficient: Decimal's Display caps out at 32 bytes
    let scale = rounded.scale() as usize;
    let width = fraction_digits as usize;
    let mut digits = rounded.mantissa().unsigned_abs().to_string();
    if digits.len() <= scale {
        digits.insert_str(0, &"0".repeat(scale + 1 - digits.len()));
    }
    let (integer, fraction) = digits.split_at(digits.len() - scale);

    let mut out = String::with_capacity(integer.len() + width + 2);
    if rounded.is_sign_negative() {
        out.push('-');
    }
    out.push_str(integer);
    if width > 0 {
        out.push('.');
        out.push_str(fraction);
        out.extend(std::iter::repeat_n('0', width.saturating_sub(fraction.len())));
    }
    out
}

/// Render in exponential notation with `fraction_digits` mantissa digits,
/// e.g. `to_exponential(12345, 2) == "1.23e+4"`.
///
/// The mantissa is rounded half away from zero; a carry that overflows the
/// mantissa (`9.99` → `10.0`) bumps the exponent instead.
pub fn to_exponential(value: Decimal, fraction_digits: u32) -> String {
    let significant = fraction_digits as usize + 1;
    let coefficient = value.mantissa().unsigned_abs();

    if coefficient == 0 {
        return assemble_exponential(false, &"0".repeat(significant), 0);
    }

    let digits = coefficient.to_string();
    let mut exponent = digits.len() as i64 - 1 - i64::from(value.scale());

    let kept = if digits.len() > significant {
        let dropped = (digits.len() - significant) as u32;
        let mut head = coefficient / 10u128.pow(dropped);
        let first_dropped = (coefficient / 10u128.pow(dropped - 1)) % 10;
        if first_dropped >= 5 {
            head += 1;
        }

        let mut kept = head.to_string();
        if kept.len() > significant {
            kept.pop();
            exponent += 1;
        }
        kept
    } else {
        format!("{digits:0<significant$}")
    };

    assemble_exponential(value.is_sign_negative(), &kept, exponent)
}

fn assemble_exponential(negative: bool, digits: &str, exponent: i64) -> String {
    let (lead, rest) = digits.split_at(1);
    let mut out = String::with_capacity(digits.len() + 8);

    if negative {
        out.push('-');
    }
    out.push_str(lead);
    if !rest.is_empty() {
        out.push('.');
        out.push_str(rest);
    }
    out.push('e');
    out.push(if exponent < 0 { '-' } else { '+' });
    out.push_str(&exponent.unsigned_abs().to_string());
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_plain_and_scientific() {
        assert_eq!(parse_decimal("123.456").unwrap(), d("123.456"));
        assert_eq!(parse_decimal("  -0.001 ").unwrap(), d("-0.001"));
        assert_eq!(parse_decimal("+42").unwrap(), d("42"));
        assert_eq!(parse_decimal("1.5e-3").unwrap(), d("0.0015"));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            parse_decimal("not_a_number"),
            Err(NumericError::InvalidInput("not_a_number".to_string()))
        );
        assert!(matches!(parse_decimal("   "), Err(NumericError::InvalidInput(_))));
        assert_eq!(try_parse("abc"), None);
        assert_eq!(try_parse("7"), Some(d("7")));
    }

    #[test]
    fn test_canonical_scale() {
        assert_eq!(canonical_scale(d("1.50")), 1);
        assert_eq!(canonical_scale(d("100")), 0);
        assert_eq!(canonical_scale(d("0.000")), 0);
        assert_eq!(canonical_scale(d("-3.14159")), 5);
    }

    #[test]
    fn test_div_scaled_terminating() {
        let q = div_scaled(d("9876543210.1"), d("1000000000"), 17).unwrap();
        assert_eq!(q, d("9.8765432101"));
        assert_eq!(q.scale(), 10);

        let q = div_scaled(d("1500"), d("1000"), 17).unwrap();
        assert_eq!(q.scale(), 1);
    }

    #[test]
    fn test_div_scaled_non_terminating() {
        let q = div_scaled(d("1"), d("3"), 5).unwrap();
        assert_eq!(q, d("0.33333"));

        let q = div_scaled(d("2"), d("3"), 4).unwrap();
        assert_eq!(q, d("0.6667"));
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(
            div_scaled(d("1"), Decimal::ZERO, 17),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(d("1.005"), 2), "1.01");
        assert_eq!(to_fixed(d("-1.005"), 2), "-1.01");
        assert_eq!(to_fixed(d("1.5"), 4), "1.5000");
        assert_eq!(to_fixed(d("1234567"), 0), "1234567");
        assert_eq!(to_fixed(d("0.5"), 0), "1");
        assert_eq!(to_fixed(d("-0.001"), 2), "0.00");
        assert_eq!(to_fixed(Decimal::ZERO, 3), "0.000");
    }

    #[test]
    fn test_to_fixed_wide_output() {
        assert_eq!(
            to_fixed(d("100000000000000000000"), 12),
            "100000000000000000000.000000000000"
        );
        assert_eq!(to_fixed(d("12345"), 28), format!("12345.{}", "0".repeat(28)));
        assert_eq!(to_fixed(d("-0.0000000000000000000000000001"), 40).len(), 43);
        assert_eq!(to_fixed(d("79228162514264337593543950335"), 30).len(), 29 + 31);
    }

    #[test]
    fn test_to_fixed_beyond_max_scale() {
        let s = to_fixed(d("0.5"), 30);
        assert_eq!(s.len(), 32);
        assert!(s.starts_with("0.5"));
    }

    #[test]
    fn test_to_exponential() {
        assert_eq!(to_exponential(d("12345"), 2), "1.23e+4");
        assert_eq!(to_exponential(d("-0.000000000000000123"), 1), "-1.2e-16");
        assert_eq!(to_exponential(d("1000000000000000000000"), 0), "1e+21");
        assert_eq!(to_exponential(d("1"), 3), "1.000e+0");
        assert_eq!(to_exponential(Decimal::ZERO, 2), "0.00e+0");
    }

    #[test]
    fn test_to_exponential_carry() {
        assert_eq!(to_exponential(d("9.996"), 2), "1.00e+1");
        assert_eq!(to_exponential(d("0.0995"), 1), "1.0e-1");
    }
}
