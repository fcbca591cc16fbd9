//! Date-likeness detector.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Rule;

#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("hard-coded date pattern should be valid")
}

static ISO_YMD: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$"));
static SLASH_MDY: Lazy<Regex> =
    Lazy::new(|| compile(r"^[0-9]{1,2}/[0-9]{1,2}/(?:[0-9]{2}|[0-9]{4})$"));
static MONTH_DAY_YEAR: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^[a-z]{3,9}\s+[0-9]{1,2},\s*[0-9]{4}$"));
static DAY_MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^[0-9]{1,2}\s+[a-z]{3,9}\s+[0-9]{4}$"));
// Loose safety net: any word starting with a month abbreviation.
static MONTH_WORD: Lazy<Regex> =
    Lazy::new(|| compile(r"\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\w*\b"));

/// Date rules in evaluation order. A value is date-like if any rule holds.
///
/// The four literal shapes come first; `month_word` is the loose fallback and will also
/// accept unrelated text that merely contains a month-like word.
pub const DATE_RULES: [Rule; 5] = [
    Rule::new("iso_ymd", |v| ISO_YMD.is_match(v)),
    Rule::new("slash_mdy", |v| SLASH_MDY.is_match(v)),
    Rule::new("month_day_year", |v| MONTH_DAY_YEAR.is_match(v)),
    Rule::new("day_month_year", |v| DAY_MONTH_YEAR.is_match(v)),
    Rule::new("month_word", |v| MONTH_WORD.is_match(&v.to_lowercase())),
];

/// Number of leading [`DATE_RULES`] that are literal date shapes (no loose fallback).
const LITERAL_RULES: usize = 4;

/// Returns `true` if `value` matches one of the literal date shapes, ignoring the loose
/// month-word fallback.
pub fn is_literal_date(value: &str) -> bool {
    let value = value.trim();
    DATE_RULES[..LITERAL_RULES].iter().any(|rule| rule.holds(value))
}

/// Name of the first [`DATE_RULES`] entry that `value` satisfies.
pub fn date_rule_for(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    DATE_RULES
        .iter()
        .find(|rule| rule.holds(value))
        .map(|rule| rule.name)
}

/// Returns `true` if `value` looks like a date.
pub fn looks_like_date(value: &str) -> bool {
    date_rule_for(value).is_some()
}
