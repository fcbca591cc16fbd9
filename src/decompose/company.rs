//! Company name decomposition into base name and legal-entity suffix.

use crate::normalize::normalize_str;
use crate::types::{CompanySplit, ReferenceList};

/// Split a raw company value into base name and legal suffix.
///
/// The legal-suffix list is scanned in order and the first entry that ends the normalized
/// value (case-insensitively) wins, so a more specific suffix must be listed before a shorter
/// one it contains. A separating comma or space is optional: `"AcmeLLC"` splits like
/// `"Acme, LLC"`. The returned suffix uses the reference list's spelling; the base name has
/// trailing commas and spaces removed and is absent when the value is only the suffix.
///
/// A value that does not end in a known suffix comes back whole, with no suffix. Absent or
/// blank input yields an empty split.
pub fn split_company(raw: Option<&str>, legal_suffixes: &ReferenceList) -> CompanySplit {
    let value = match raw {
        Some(raw) => normalize_str(raw),
        None => return CompanySplit::default(),
    };
    if value.is_empty() {
        return CompanySplit::default();
    }

    for suffix in legal_suffixes.iter() {
        if let Some(base) = strip_legal_suffix(&value, suffix) {
            return CompanySplit {
                base_name: (!base.is_empty()).then(|| base.to_owned()),
                legal_suffix: Some(suffix.trim().to_owned()),
            };
        }
    }

    CompanySplit {
        base_name: Some(value),
        legal_suffix: None,
    }
}

/// The text in front of `suffix` with separators trimmed, if `value` ends with it.
fn strip_legal_suffix<'a>(value: &'a str, suffix: &str) -> Option<&'a str> {
    let suffix = normalize_str(suffix);
    let suffix_chars = suffix.chars().count();
    if suffix_chars == 0 {
        return None;
    }

    let (start, _) = value.char_indices().rev().nth(suffix_chars - 1)?;
    let (head, tail) = value.split_at(start);
    if tail.to_lowercase() != suffix.to_lowercase() {
        return None;
    }
    Some(head.trim_end_matches([' ', ',']))
}
