//! `column-typer` infers the semantic type of free-text table columns (phone number, company
//! name, country, date, or other) from value-level heuristics, and splits recognized values
//! into structured sub-fields.
//!
//! Everything is a pure function of the input values and two reference lists (known country
//! names and known legal-entity suffixes). There is no model and no external lookup.
//!
//! ## Entry points
//!
//! - [`classify_column`]: label and five-way probability distribution for one column
//! - [`select_columns`]: best phone column and best company column of a [`types::Table`]
//! - [`decompose_phone`]: phone number -> (calling-code country, national number)
//! - [`decompose_company`]: company name -> (base name, legal suffix)
//!
//! For repeated work build a [`Classifier`] once and call its methods; the free functions above
//! validate and index the reference lists on every call.
//!
//! ## Quick example
//!
//! ```rust
//! use column_typer::{classify_column, decompose_company, decompose_phone, SemanticType};
//!
//! let values = vec![
//!     Some("+1 (555) 123-4567".to_string()),
//!     Some("+44 20 7946 0958".to_string()),
//!     None,
//! ];
//! let result = classify_column(&values, &["United States", "Canada"], &["Inc.", "LLC"]).unwrap();
//! assert_eq!(result.label, SemanticType::PhoneNumber);
//!
//! let phone = decompose_phone(Some("+91 9876543210"));
//! assert_eq!(phone.country, Some("India"));
//! assert_eq!(phone.national_number.as_deref(), Some("9876543210"));
//!
//! let company = decompose_company(Some("Acme Widgets, Inc."), &["Inc.", "LLC", "Ltd"]).unwrap();
//! assert_eq!(company.base_name.as_deref(), Some("Acme Widgets"));
//! assert_eq!(company.legal_suffix.as_deref(), Some("Inc."));
//! ```
//!
//! ## Modules
//!
//! - [`normalize`]: whitespace normalization shared by every detector
//! - [`detection`]: per-value detectors and the fuzzy country matcher
//! - [`decompose`]: phone and company splitters
//! - [`scoring`]: column scores, type classification, column selection
//! - [`execution`]: parallel per-column scoring with observer hooks and metrics
//! - [`ingestion`]: CSV/JSON table readers and reference-list loading
//! - [`pipeline`]: select-then-decompose over a whole table, with CSV output
//! - [`types`]: data model
//! - [`error`]: error type

pub mod decompose;
pub mod detection;
pub mod error;
pub mod execution;
pub mod ingestion;
pub mod normalize;
pub mod pipeline;
pub mod scoring;
pub mod types;

pub use error::{ClassifyError, ClassifyResult};
pub use normalize::normalize;
pub use scoring::{classify_column, select_columns, Classifier, ColumnClassification, SelectionOptions};
pub use types::{
    Column, ColumnSelection, CompanySplit, PhoneSplit, RawValue, ReferenceList, SemanticType, Table,
    TypeDistribution,
};

/// Split a raw phone value into calling-code country and national number.
pub fn decompose_phone(raw: Option<&str>) -> PhoneSplit {
    decompose::split_phone(raw)
}

/// Split a raw company value into base name and legal suffix.
///
/// Returns [`ClassifyError::InvalidArgument`] if `legal_suffixes` has an empty or
/// whitespace-only entry.
pub fn decompose_company<S: AsRef<str>>(
    raw: Option<&str>,
    legal_suffixes: &[S],
) -> ClassifyResult<CompanySplit> {
    let legal = ReferenceList::new(legal_suffixes.iter().map(|s| s.as_ref()))?;
    Ok(decompose::split_company(raw, &legal))
}
