// ============================================================================
// Bidi Wrapper
// Encloses formatted output in Unicode explicit-direction controls
// ============================================================================

use crate::domain::ExplicitDirection;

/// Wrap `text` in the direction's start/end pair, or pass it through.
pub fn wrap(text: String, direction: Option<ExplicitDirection>) -> String {
    match direction {
        Some(direction) => {
            let mut out = String::with_capacity(text.len() + 6);
            out.push(direction.start());
            out.push_str(&text);
            out.push(direction.end());
            out
        },
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Remove one surrounding pair of explicit-direction controls, if present.
    fn unwrap(text: &str) -> &str {
        let mut chars = text.chars();
        let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
            return text;
        };

        let matched = [
            ExplicitDirection::Lri,
            ExplicitDirection::Rli,
            ExplicitDirection::Fsi,
            ExplicitDirection::Lre,
            ExplicitDirection::Rle,
            ExplicitDirection::Lro,
            ExplicitDirection::Rlo,
        ]
        .into_iter()
        .any(|d| d.start() == first && d.end() == last);

        if matched {
            chars.as_str()
        } else {
            text
        }
    }

    #[test]
    fn test_wrap_isolate() {
        let wrapped = wrap("1,234".to_string(), Some(ExplicitDirection::Lri));
        assert_eq!(wrapped, "\u{2066}1,234\u{2069}");
        assert_eq!(unwrap(&wrapped), "1,234");
    }

    #[test]
    fn test_wrap_embedding_and_override() {
        assert_eq!(
            wrap("x".to_string(), Some(ExplicitDirection::Rle)),
            "\u{202B}x\u{202C}"
        );
        assert_eq!(
            wrap("x".to_string(), Some(ExplicitDirection::Rlo)),
            "\u{202E}x\u{202C}"
        );
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(wrap("12".to_string(), None), "12");
        assert_eq!(unwrap("12"), "12");
        assert_eq!(unwrap(""), "");
    }
}
