//! Company-likeness detector.

use crate::decompose::split_company;
use crate::normalize::normalize_str;
use crate::types::ReferenceList;

use super::country::CountryMatcher;
use super::date::looks_like_date;

/// Returns `true` if `value` looks like a company name.
///
/// A value with a known legal suffix is always company-like. Otherwise it must have at least
/// two words and a letter, and must not itself look like a date or a country (so that
/// "United States" or "March 2, 2020" are not counted as companies).
pub fn looks_like_company(
    value: &str,
    countries: &CountryMatcher,
    legal_suffixes: &ReferenceList,
) -> bool {
    let value = normalize_str(value);
    if value.is_empty() {
        return false;
    }
    if split_company(Some(&value), legal_suffixes).legal_suffix.is_some() {
        return true;
    }
    value.split(' ').count() >= 2
        && value.chars().any(char::is_alphabetic)
        && !looks_like_date(&value)
        && !countries.is_country(&value)
}
