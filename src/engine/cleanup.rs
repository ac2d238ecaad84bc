// ============================================================================
// Cleanup
// Trailing-zero trim for fixed and exponential numerals
// ============================================================================

/// Apply [`cut_invalid_zero`] when `enabled`, otherwise return the input.
#[inline]
pub fn cleanup(numeral: &str, enabled: bool) -> String {
    if enabled {
        cut_invalid_zero(numeral)
    } else {
        numeral.to_string()
    }
}

/// Drop trailing fractional zeros and a dangling `.`.
///
/// For exponential numerals only the mantissa is trimmed: `1.2300e+5`
/// becomes `1.23e+5`. Integers pass through unchanged.
pub fn cut_invalid_zero(numeral: &str) -> String {
    match numeral.find(['e', 'E']) {
        Some(pos) => {
            let (mantissa, exponent) = numeral.split_at(pos);
            let mut out = trim_fraction(mantissa).to_string();
            out.push_str(exponent);
            out
        },
        None => trim_fraction(numeral).to_string(),
    }
}

fn trim_fraction(numeral: &str) -> &str {
    if !numeral.contains('.') {
        return numeral;
    }
    let trimmed = numeral.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{to_exponential, to_fixed};
    use quickcheck::quickcheck;
    use rust_decimal::Decimal;

    #[test]
    fn test_fixed() {
        assert_eq!(cut_invalid_zero("1.2300"), "1.23");
        assert_eq!(cut_invalid_zero("1.000"), "1");
        assert_eq!(cut_invalid_zero("100"), "100");
        assert_eq!(cut_invalid_zero("100.00"), "100");
        assert_eq!(cut_invalid_zero("-0.50"), "-0.5");
        assert_eq!(cut_invalid_zero("5."), "5");
    }

    #[test]
    fn test_exponential() {
        assert_eq!(cut_invalid_zero("1.2300e+21"), "1.23e+21");
        assert_eq!(cut_invalid_zero("1.000e-16"), "1e-16");
        assert_eq!(cut_invalid_zero("1e+20"), "1e+20");
    }

    #[test]
    fn test_disabled_is_noop() {
        assert_eq!(cleanup("1.2300", false), "1.2300");
        assert_eq!(cleanup("1.2300", true), "1.23");
    }

    quickcheck! {
        fn prop_fixed_idempotent(mantissa: i64, scale: u8, precision: u8) -> bool {
            let value = Decimal::new(mantissa.max(i64::MIN + 1), u32::from(scale % 29));
            let once = cut_invalid_zero(&to_fixed(value, u32::from(precision % 90)));
            !once.ends_with('.') && cut_invalid_zero(&once) == once
        }

        fn prop_exponential_idempotent(mantissa: i64, scale: u8, precision: u8) -> bool {
            let value = Decimal::new(mantissa.max(i64::MIN + 1), u32::from(scale % 29));
            let once = cut_invalid_zero(&to_exponential(value, u32::from(precision % 30)));
            !once.contains(".e") && cut_invalid_zero(&once) == once
        }
    }
}
