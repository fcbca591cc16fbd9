//! Phone number decomposition into calling-code country and national number.

use crate::types::PhoneSplit;

/// Known calling codes and the country label they map to.
pub const CALLING_CODES: [(&str, &str); 13] = [
    ("1", "US"),
    ("91", "India"),
    ("44", "UK"),
    ("61", "Australia"),
    ("49", "Germany"),
    ("81", "Japan"),
    ("86", "China"),
    ("7", "Russia"),
    ("39", "Italy"),
    ("33", "France"),
    ("27", "South Africa"),
    ("34", "Spain"),
    ("55", "Brazil"),
];

/// Calling-code prefix lengths, tried shortest first.
const PREFIX_LENGTHS: [usize; 3] = [1, 2, 3];

/// Length of a national number when one has to be cut from a longer digit string.
pub const NATIONAL_NUMBER_LEN: usize = 10;

/// Country label for a calling code, if known.
pub fn calling_code_country(code: &str) -> Option<&'static str> {
    CALLING_CODES
        .iter()
        .find(|(cc, _)| *cc == code)
        .map(|(_, country)| *country)
}

struct PhoneDigits<'a> {
    international: bool,
    digits: &'a str,
}

type SplitRule = fn(&PhoneDigits<'_>) -> Option<PhoneSplit>;

// First rule that produces a split wins.
const SPLIT_RULES: [SplitRule; 3] = [by_calling_code, by_trailing_national, by_all_digits];

/// Split a raw phone value into `(country, national number)`.
///
/// - A leading `+`, or more than [`NATIONAL_NUMBER_LEN`] digits, means the value may carry a
///   calling code: prefixes of 1, 2, then 3 digits are looked up in [`CALLING_CODES`].
/// - Otherwise (or on a miss) a digit string longer than [`NATIONAL_NUMBER_LEN`] keeps only
///   its last [`NATIONAL_NUMBER_LEN`] digits, and a shorter one is kept whole.
///
/// Absent input, or input without digits, yields an empty split.
pub fn split_phone(raw: Option<&str>) -> PhoneSplit {
    let Some(raw) = raw else {
        return PhoneSplit::default();
    };
    let trimmed = raw.trim();
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return PhoneSplit::default();
    }

    let input = PhoneDigits {
        international: trimmed.starts_with('+'),
        digits: &digits,
    };
    SPLIT_RULES
        .iter()
        .find_map(|rule| rule(&input))
        .unwrap_or_default()
}

fn by_calling_code(input: &PhoneDigits<'_>) -> Option<PhoneSplit> {
    if !input.international && input.digits.len() <= NATIONAL_NUMBER_LEN {
        return None;
    }
    PREFIX_LENGTHS
        .iter()
        .filter(|&&len| len <= input.digits.len())
        .find_map(|&len| {
            let (code, rest) = input.digits.split_at(len);
            calling_code_country(code).map(|country| PhoneSplit {
                country: Some(country),
                national_number: (!rest.is_empty()).then(|| rest.to_owned()),
            })
        })
}

fn by_trailing_national(input: &PhoneDigits<'_>) -> Option<PhoneSplit> {
    let len = input.digits.len();
    (len > NATIONAL_NUMBER_LEN).then(|| PhoneSplit {
        country: None,
        national_number: Some(input.digits[len - NATIONAL_NUMBER_LEN..].to_owned()),
    })
}

fn by_all_digits(input: &PhoneDigits<'_>) -> Option<PhoneSplit> {
    Some(PhoneSplit {
        country: None,
        national_number: Some(input.digits.to_owned()),
    })
}
