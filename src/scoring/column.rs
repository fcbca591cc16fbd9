//! Column scoring: the fraction of a column's values that satisfy a detector.

use crate::types::RawValue;

/// Fraction of `values` for which `predicate` holds, in `[0, 1]`.
///
/// Absent cells count toward the total but never match. An empty column scores `0.0`.
pub fn score_column<F>(values: &[RawValue], predicate: F) -> f64
where
    F: Fn(&str) -> bool,
{
    fraction_matching(values.iter().map(|v| v.as_deref()), predicate)
}

/// [`score_column`] over any sequence of optional string slices.
pub fn fraction_matching<'a, I, F>(values: I, predicate: F) -> f64
where
    I: IntoIterator<Item = Option<&'a str>>,
    F: Fn(&str) -> bool,
{
    let mut total = 0usize;
    let mut matches = 0usize;
    for value in values {
        total += 1;
        if value.is_some_and(|v| predicate(v)) {
            matches += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    matches as f64 / total as f64
}
