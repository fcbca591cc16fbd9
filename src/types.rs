//! Core data model types.
//!
//! Tables are stored column-major as ordered [`Column`]s of optional text cells. Column order
//! is significant: it is the tie-break when two columns score equally during selection.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{ClassifyError, ClassifyResult};

/// A single raw table cell. `None` means the cell was absent or empty.
pub type RawValue = Option<String>;

/// A single named column of raw values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name (header).
    pub name: String,
    /// Cell values in row order.
    pub values: Vec<RawValue>,
}

impl Column {
    /// Create a new column.
    pub fn new(name: impl Into<String>, values: Vec<RawValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Build a column from present string values (no absent cells).
    pub fn from_strs<S: AsRef<str>>(name: impl Into<String>, values: &[S]) -> Self {
        Self::new(
            name,
            values.iter().map(|v| Some(v.as_ref().to_owned())).collect(),
        )
    }

    /// Number of cells in the column.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Cell at `row`, flattened so that missing rows and absent cells both read as `None`.
    pub fn get(&self, row: usize) -> Option<&str> {
        self.values.get(row).and_then(|v| v.as_deref())
    }
}

/// An ordered, column-major table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Columns in header order.
    pub columns: Vec<Column>,
}

impl Table {
    /// Create a table from columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Iterate column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Returns the index of a column by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Look up a column by name.
    ///
    /// Returns [`ClassifyError::MissingColumn`] listing the available columns when absent.
    pub fn column(&self, name: &str) -> ClassifyResult<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| ClassifyError::MissingColumn {
                column: name.to_owned(),
                available: self.column_names().map(str::to_owned).collect(),
            })
    }

    /// Number of rows, taken as the length of the longest column.
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(Column::len).max().unwrap_or(0)
    }

    /// Returns `true` if the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// An ordered list of reference strings (country names, legal suffixes).
///
/// Entries must be non-empty and not whitespace-only. Duplicates are kept; consumers that
/// build lookup maps keep the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceList {
    entries: Vec<String>,
}

impl ReferenceList {
    /// Validate and wrap a list of entries.
    ///
    /// Returns [`ClassifyError::InvalidArgument`] if any entry is empty or whitespace-only.
    pub fn new<I, S>(entries: I) -> ClassifyResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if let Some(pos) = entries.iter().position(|e| e.trim().is_empty()) {
            return Err(ClassifyError::invalid_argument(format!(
                "reference list entry {pos} is empty or whitespace-only"
            )));
        }
        Ok(Self { entries })
    }

    /// Entries in their original order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Iterate entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The fixed set of semantic column types.
///
/// Declaration order is the tie-break priority used when two types score equally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SemanticType {
    PhoneNumber,
    Date,
    Country,
    CompanyName,
    Other,
}

impl SemanticType {
    /// All types in tie-break priority order.
    pub const ALL: [SemanticType; 5] = [
        SemanticType::PhoneNumber,
        SemanticType::Date,
        SemanticType::Country,
        SemanticType::CompanyName,
        SemanticType::Other,
    ];

    /// Stable output label.
    pub fn label(self) -> &'static str {
        match self {
            SemanticType::PhoneNumber => "phoneNumber",
            SemanticType::Date => "date",
            SemanticType::Country => "country",
            SemanticType::CompanyName => "companyName",
            SemanticType::Other => "other",
        }
    }

    /// Parse a stable output label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Probability distribution over the five [`SemanticType`]s.
///
/// Entries are non-negative and sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeDistribution {
    probs: [f64; 5],
}

impl TypeDistribution {
    /// The uniform distribution (1/5 per type).
    pub fn uniform() -> Self {
        Self { probs: [0.2; 5] }
    }

    /// Normalize raw non-negative scores (indexed in [`SemanticType::ALL`] order).
    ///
    /// Falls back to [`Self::uniform`] when the scores sum to zero. Negative or non-finite
    /// raw scores are treated as zero.
    pub fn from_raw_scores(raw: [f64; 5]) -> Self {
        let clean = raw.map(|s| if s.is_finite() && s > 0.0 { s } else { 0.0 });
        let total: f64 = clean.iter().sum();
        if total == 0.0 {
            return Self::uniform();
        }
        Self {
            probs: clean.map(|s| s / total),
        }
    }

    /// Probability assigned to `ty`.
    pub fn probability(&self, ty: SemanticType) -> f64 {
        self.probs[ty.index()]
    }

    /// Iterate `(type, probability)` pairs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (SemanticType, f64)> + '_ {
        SemanticType::ALL
            .into_iter()
            .map(|t| (t, self.probability(t)))
    }

    /// The most probable type; ties go to the earlier type in priority order.
    pub fn top(&self) -> SemanticType {
        let mut best = SemanticType::ALL[0];
        for ty in SemanticType::ALL.into_iter().skip(1) {
            if self.probability(ty) > self.probability(best) {
                best = ty;
            }
        }
        best
    }
}

impl Serialize for TypeDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.probs.len()))?;
        for (ty, p) in self.iter() {
            map.serialize_entry(ty.label(), &p)?;
        }
        map.end()
    }
}

/// A phone number split into calling-code country and national digits.
///
/// Absent fields mean "could not be determined".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneSplit {
    pub country: Option<&'static str>,
    pub national_number: Option<String>,
}

/// A company name split into base name and legal-entity suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySplit {
    pub base_name: Option<String>,
    pub legal_suffix: Option<String>,
}

/// The winning column for one detector, with its match fraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnPick {
    pub column: String,
    pub score: f64,
}

/// Result of whole-table column selection.
///
/// The selector always reports the best column of each kind (absent only for an empty
/// table). Whether that pick is confident enough is answered by [`Self::accepted_phone`] and
/// [`Self::accepted_company`] against the thresholds the selection was run with.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSelection {
    pub phone: Option<ColumnPick>,
    pub company: Option<ColumnPick>,
    pub phone_threshold: f64,
    pub company_threshold: f64,
}

impl ColumnSelection {
    /// Name of the best phone column, if the table had any columns.
    pub fn phone_column(&self) -> Option<&str> {
        self.phone.as_ref().map(|p| p.column.as_str())
    }

    /// Phone match fraction of the best phone column (0.0 for an empty table).
    pub fn phone_score(&self) -> f64 {
        self.phone.as_ref().map_or(0.0, |p| p.score)
    }

    /// Name of the best company column, if the table had any columns.
    pub fn company_column(&self) -> Option<&str> {
        self.company.as_ref().map(|p| p.column.as_str())
    }

    /// Company match fraction of the best company column (0.0 for an empty table).
    pub fn company_score(&self) -> f64 {
        self.company.as_ref().map_or(0.0, |p| p.score)
    }

    /// The phone pick, if its score reaches the phone threshold.
    pub fn accepted_phone(&self) -> Option<&ColumnPick> {
        self.phone
            .as_ref()
            .filter(|p| p.score >= self.phone_threshold)
    }

    /// The company pick, if its score reaches the company threshold.
    pub fn accepted_company(&self) -> Option<&ColumnPick> {
        self.company
            .as_ref()
            .filter(|p| p.score >= self.company_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_list_rejects_blank_entries() {
        assert!(ReferenceList::new(["Canada", "  "]).is_err());
        assert!(ReferenceList::new([""]).is_err());

        let list = ReferenceList::new(["Canada", "Canada", "Peru"]).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["Canada", "Canada", "Peru"]);
    }

    #[test]
    fn labels_round_trip_and_serialize_as_labels() {
        for ty in SemanticType::ALL {
            assert_eq!(SemanticType::from_label(ty.label()), Some(ty));
            assert_eq!(
                serde_json::to_string(&ty).unwrap(),
                format!("\"{}\"", ty.label())
            );
        }
        assert_eq!(SemanticType::from_label("Phone Number"), None);
    }

    #[test]
    fn distribution_falls_back_to_uniform_on_all_zero() {
        let d = TypeDistribution::from_raw_scores([0.0; 5]);
        assert_eq!(d, TypeDistribution::uniform());
        assert_eq!(d.top(), SemanticType::PhoneNumber);
    }

    #[test]
    fn distribution_normalizes_and_breaks_ties_by_priority() {
        let d = TypeDistribution::from_raw_scores([0.0, 0.5, 0.5, 0.0, 0.0]);
        assert_eq!(d.probability(SemanticType::Date), 0.5);
        assert_eq!(d.top(), SemanticType::Date);

        let json = serde_json::to_value(d).unwrap();
        assert_eq!(json["country"], 0.5);
        assert_eq!(json["other"], 0.0);
    }

    #[test]
    fn table_reports_available_columns_when_missing() {
        let table = Table::new(vec![Column::from_strs("a", &["1"]), Column::from_strs("b", &["2"])]);
        let err = table.column("c").unwrap_err();
        assert!(err.to_string().contains("column 'c' not found"));
        assert!(err.to_string().contains("\"a\", \"b\""));
        assert_eq!(table.index_of("b"), Some(1));
    }

    #[test]
    fn selection_acceptance_uses_inclusive_threshold() {
        let sel = ColumnSelection {
            phone: Some(ColumnPick {
                column: "tel".into(),
                score: 0.15,
            }),
            company: None,
            phone_threshold: 0.15,
            company_threshold: 0.15,
        };
        assert_eq!(sel.accepted_phone().map(|p| p.column.as_str()), Some("tel"));
        assert!(sel.accepted_company().is_none());
        assert_eq!(sel.company_score(), 0.0);
    }
}
