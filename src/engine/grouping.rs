// ============================================================================
// Grouping Engine
// Inserts a separator into the integer part of a rendered numeral
// ============================================================================

/// Split a rendered numeral at the first `.`; the fraction keeps the dot.
#[inline]
pub fn split_fraction(numeral: &str) -> (&str, &str) {
    match numeral.find('.') {
        Some(pos) => numeral.split_at(pos),
        None => (numeral, ""),
    }
}

/// Group the integer part of `numeral` into clusters of `size` digits.
///
/// Only the leading digit run is grouped: a leading `-` and anything after
/// the digits (an exponent like `e+21`) pass through untouched. Returns
/// `(grouped_integer, fraction_including_dot)`.
pub fn group_numeral(numeral: &str, separator: &str, size: usize) -> (String, String) {
    let (integer, fraction) = split_fraction(numeral);

    let (sign, unsigned) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };
    let digit_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    let (digits, tail) = unsigned.split_at(digit_len);

    let mut grouped = String::with_capacity(integer.len() + digit_len / size.max(1) * separator.len());
    grouped.push_str(sign);
    grouped.push_str(&group_digits(digits, separator, size));
    grouped.push_str(tail);

    (grouped, fraction.to_string())
}

/// Insert `separator` before every `size`-th digit counted from the right,
/// never before the leading digit.
pub fn group_digits(digits: &str, separator: &str, size: usize) -> String {
    let size = size.max(1);
    let len = digits.len();
    let mut out = String::with_capacity(len + (len / size) * separator.len());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1234567", ",", 3), "1,234,567");
        assert_eq!(group_digits("123456", ",", 3), "123,456");
        assert_eq!(group_digits("12345678", "_", 4), "1234_5678");
        assert_eq!(group_digits("123", ",", 3), "123");
        assert_eq!(group_digits("1", ",", 3), "1");
        assert_eq!(group_digits("", ",", 3), "");
        assert_eq!(group_digits("1234", " ", 1), "1 2 3 4");
    }

    #[test]
    fn test_group_numeral_keeps_fraction() {
        let (int, frac) = group_numeral("1234567.891", ",", 3);
        assert_eq!(int, "1,234,567");
        assert_eq!(frac, ".891");
    }

    #[test]
    fn test_group_numeral_negative() {
        let (int, frac) = group_numeral("-1234", ",", 3);
        assert_eq!(int, "-1,234");
        assert_eq!(frac, "");
    }

    #[test]
    fn test_group_numeral_exponential() {
        let (int, frac) = group_numeral("1.23e+21", ",", 3);
        assert_eq!(int, "1");
        assert_eq!(frac, ".23e+21");

        let (int, frac) = group_numeral("1e+21", ",", 3);
        assert_eq!(int, "1e+21");
        assert_eq!(frac, "");
    }

    #[test]
    fn test_multichar_separator() {
        assert_eq!(group_digits("1000000", "\u{2009}", 3), "1\u{2009}000\u{2009}000");
    }

    proptest! {
        #[test]
        fn prop_separator_count(n in 1000u64..u64::MAX, size in 1usize..=10) {
            let digits = n.to_string();
            let grouped = group_digits(&digits, "_", size);
            let count = grouped.matches('_').count();
            prop_assert_eq!(count, (digits.len() - 1) / size);
            prop_assert_eq!(grouped.replace('_', ""), digits);
            prop_assert!(!grouped.starts_with('_'));
        }
    }
}
