//! Phone-likeness detector.

use once_cell::sync::Lazy;
use regex::Regex;

use super::date::is_literal_date;
use super::Rule;

/// Minimum number of digits (and characters) for a value to look like a phone number.
pub const MIN_PHONE_DIGITS: usize = 6;

// Optional leading '+', then only digits, whitespace, hyphens and parentheses.
#[allow(clippy::expect_used)]
static PHONE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9\-\s()]{6,}$").expect("hard-coded phone pattern should be valid")
});

/// Rules a value must satisfy, all of them, to look like a phone number.
///
/// `not_literal_date` keeps ISO dates such as `2020-01-05`, which are otherwise
/// phone-shaped, out of the phone fraction.
pub const PHONE_RULES: [Rule; 3] = [
    Rule::new("min_digits", has_min_digits),
    Rule::new("phone_shape", has_phone_shape),
    Rule::new("not_literal_date", |v| !is_literal_date(v)),
];

fn has_min_digits(value: &str) -> bool {
    value.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

fn has_phone_shape(value: &str) -> bool {
    PHONE_SHAPE.is_match(value)
}

/// Returns `true` if `value` is shaped like a phone number.
///
/// The digit count rejects long runs of punctuation; the shape check rejects embedded
/// letters.
pub fn looks_like_phone(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && PHONE_RULES.iter().all(|rule| rule.holds(value))
}

#[cfg(test)]
mod tests {
    use super::looks_like_phone;

    #[test]
    fn accepts_common_formats() {
        assert!(looks_like_phone("+1 (555) 123-4567"));
        assert!(looks_like_phone("555-123-4567"));
        assert!(looks_like_phone("  +91 9876543210 "));
        assert!(looks_like_phone("123456"));
    }

    #[test]
    fn rejects_letters_and_short_values() {
        assert!(!looks_like_phone("hello world"));
        assert!(!looks_like_phone("555-CALL-NOW"));
        assert!(!looks_like_phone("12345"));
        assert!(!looks_like_phone(""));
    }

    #[test]
    fn rejects_punctuation_without_enough_digits() {
        assert!(!looks_like_phone("(--) ( ) --"));
        assert!(!looks_like_phone("+12 (3) 4-"));
    }

    #[test]
    fn rejects_other_separators() {
        assert!(!looks_like_phone("555.123.4567"));
        assert!(!looks_like_phone("2020/01/05"));
    }

    #[test]
    fn rejects_iso_dates() {
        assert!(!looks_like_phone("2020-01-05"));
        assert!(looks_like_phone("2020-010-0555"));
    }
}
