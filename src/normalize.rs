//! Value normalization.

/// Canonicalize a raw cell: trim, and collapse every run of whitespace to a single space.
///
/// Absent input normalizes to the empty string.
pub fn normalize(raw: Option<&str>) -> String {
    match raw {
        Some(s) => normalize_str(s),
        None => String::new(),
    }
}

/// [`normalize`] for a present value.
pub fn normalize_str(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
