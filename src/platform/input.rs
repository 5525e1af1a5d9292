//! Answer text parsing

/// Parse a typed answer: a decimal (`0.5`, `.5`) or a fraction (`1/2`).
/// Returns None for anything else, including division by zero.
pub fn parse_answer(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let value = match text.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.trim().parse().ok()?;
            let den: f64 = den.trim().parse().ok()?;
            if den == 0.0 {
                return None;
            }
            num / den
        }
        None => text.parse().ok()?,
    };
    value.is_finite().then_some(value)
}

/// Characters accepted while typing an answer
pub fn is_answer_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '/' | ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_answer("0.5"), Some(0.5));
        assert_eq!(parse_answer(" .25 "), Some(0.25));
        assert_eq!(parse_answer("0"), Some(0.0));
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(parse_answer("1/2"), Some(0.5));
        assert_eq!(parse_answer("3 / 6"), Some(0.5));
        assert_eq!(parse_answer("1/0"), None);
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_answer(""), None);
        assert_eq!(parse_answer("half"), None);
        assert_eq!(parse_answer("1/2/3"), None);
        assert_eq!(parse_answer("inf"), None);
    }

    #[test]
    fn test_answer_chars() {
        assert!(is_answer_char('7'));
        assert!(is_answer_char('/'));
        assert!(!is_answer_char('a'));
        assert!(!is_answer_char('-'));
    }
}
