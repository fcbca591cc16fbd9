//! Whole-table column selection.
//!
//! Every column is scored for phone-likeness and company-likeness; the best column of each
//! kind wins, with ties going to the earlier column. The selector always reports its winners.
//! Whether a winner is confident enough to act on is a threshold decision left to the caller
//! (see [`ColumnSelection::accepted_phone`]).

use serde::Serialize;

use crate::detection::Detector;
use crate::error::{ClassifyError, ClassifyResult};
use crate::types::{Column, ColumnPick, ColumnSelection, Table};

use super::classifier::Classifier;

/// Default minimum phone score for the phone column to be acted on.
pub const DEFAULT_PHONE_THRESHOLD: f64 = 0.15;
/// Default minimum company score for the company column to be acted on.
pub const DEFAULT_COMPANY_THRESHOLD: f64 = 0.15;

/// Options controlling column selection.
///
/// Use [`Default`] for the standard thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionOptions {
    /// Minimum phone fraction (inclusive) for the phone pick to be accepted.
    pub phone_threshold: f64,
    /// Minimum company fraction (inclusive) for the company pick to be accepted.
    pub company_threshold: f64,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            phone_threshold: DEFAULT_PHONE_THRESHOLD,
            company_threshold: DEFAULT_COMPANY_THRESHOLD,
        }
    }
}

impl SelectionOptions {
    /// Check that both thresholds are finite and within `[0, 1]`.
    pub fn validate(&self) -> ClassifyResult<()> {
        for (name, value) in [
            ("phone_threshold", self.phone_threshold),
            ("company_threshold", self.company_threshold),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ClassifyError::invalid_argument(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Selection scores for one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnScores {
    pub column: String,
    pub phone: f64,
    pub company: f64,
}

impl Classifier {
    /// Phone and company fractions for one column.
    pub fn selection_scores(&self, column: &Column) -> ColumnScores {
        ColumnScores {
            column: column.name.clone(),
            phone: self.score(&column.values, Detector::Phone),
            company: self.score(&column.values, Detector::Company),
        }
    }

    /// Pick the best phone column and the best company column of `table`.
    pub fn select_columns(
        &self,
        table: &Table,
        options: &SelectionOptions,
    ) -> ClassifyResult<ColumnSelection> {
        options.validate()?;
        let scores: Vec<ColumnScores> = table
            .columns
            .iter()
            .map(|c| self.selection_scores(c))
            .collect();
        Ok(pick_columns(&scores, options))
    }
}

/// Reduce per-column scores (in column order) to a [`ColumnSelection`].
pub fn pick_columns(scores: &[ColumnScores], options: &SelectionOptions) -> ColumnSelection {
    ColumnSelection {
        phone: best_by(scores, |s| s.phone),
        company: best_by(scores, |s| s.company),
        phone_threshold: options.phone_threshold,
        company_threshold: options.company_threshold,
    }
}

fn best_by(scores: &[ColumnScores], key: impl Fn(&ColumnScores) -> f64) -> Option<ColumnPick> {
    let mut best: Option<&ColumnScores> = None;
    for candidate in scores {
        if best.is_none_or(|b| key(candidate) > key(b)) {
            best = Some(candidate);
        }
    }
    best.map(|s| ColumnPick {
        column: s.column.clone(),
        score: key(s),
    })
}

/// Select columns against raw reference lists.
///
/// Returns [`ClassifyError::InvalidArgument`] for a malformed reference list or an
/// out-of-range threshold.
pub fn select_columns<C, L>(
    table: &Table,
    countries: &[C],
    legal_suffixes: &[L],
    options: &SelectionOptions,
) -> ClassifyResult<ColumnSelection>
where
    C: AsRef<str>,
    L: AsRef<str>,
{
    Classifier::from_lists(countries, legal_suffixes)?.select_columns(table, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::from_lists(&["United States", "Canada"], &["Inc.", "LLC"]).unwrap()
    }

    fn contacts() -> Table {
        Table::new(vec![
            Column::from_strs("id", &["1", "2", "3", "4"]),
            Column::from_strs(
                "company",
                &["Acme Widgets, Inc.", "Globex LLC", "Stark Industries", "Wayne Enterprises"],
            ),
            Column::from_strs(
                "phone",
                &["+1 555 123 4567", "+91 9876543210", "(555) 987-6543", "n/a"],
            ),
            Column::from_strs("country", &["United States", "Canada", "Canada", "United States"]),
        ])
    }

    #[test]
    fn picks_the_strongest_columns() {
        let sel = classifier()
            .select_columns(&contacts(), &SelectionOptions::default())
            .unwrap();
        assert_eq!(sel.phone_column(), Some("phone"));
        assert_eq!(sel.phone_score(), 0.75);
        assert_eq!(sel.company_column(), Some("company"));
        assert_eq!(sel.company_score(), 1.0);
        assert!(sel.accepted_phone().is_some());
        assert!(sel.accepted_company().is_some());
    }

    #[test]
    fn ties_go_to_the_first_column() {
        let table = Table::new(vec![
            Column::from_strs("a", &["x"]),
            Column::from_strs("b", &["y"]),
        ]);
        let sel = classifier()
            .select_columns(&table, &SelectionOptions::default())
            .unwrap();
        assert_eq!(sel.phone_column(), Some("a"));
        assert_eq!(sel.phone_score(), 0.0);
        assert!(sel.accepted_phone().is_none());
    }

    #[test]
    fn empty_table_has_no_picks() {
        let sel = classifier()
            .select_columns(&Table::default(), &SelectionOptions::default())
            .unwrap();
        assert_eq!(sel.phone, None);
        assert_eq!(sel.company, None);
        assert_eq!(sel.phone_score(), 0.0);
    }

    #[test]
    fn thresholds_are_validated() {
        let opts = SelectionOptions {
            phone_threshold: 1.5,
            ..Default::default()
        };
        assert!(classifier().select_columns(&contacts(), &opts).is_err());
        let opts = SelectionOptions {
            company_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(classifier().select_columns(&contacts(), &opts).is_err());
    }

    #[test]
    fn country_columns_are_not_company_columns() {
        let c = classifier();
        let scores = c.selection_scores(&contacts().columns[3]);
        assert_eq!(scores.company, 0.0);
    }
}
