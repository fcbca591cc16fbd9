//! Column scoring, type classification and column selection.
//!
//! - [`score_column`]: fraction of a column's values satisfying one detector
//! - [`Classifier::classify`] / [`classify_column`]: five-way type distribution for one column
//! - [`Classifier::select_columns`] / [`select_columns`]: best phone and company column of a
//!   table
//!
//! ## Example: classify a column
//!
//! ```rust
//! use column_typer::scoring::classify_column;
//! use column_typer::types::SemanticType;
//!
//! let values = vec![
//!     Some("2020-01-05".to_string()),
//!     Some("2021-06-01".to_string()),
//!     Some("not a date".to_string()),
//! ];
//! let result = classify_column(&values, &["Canada"], &["LLC"]).unwrap();
//! assert_eq!(result.label, SemanticType::Date);
//! ```

pub mod classifier;
pub mod column;
pub mod selector;

pub use classifier::{classify_column, Classifier, ColumnClassification, DetectorFractions};
pub use column::{fraction_matching, score_column};
pub use selector::{
    pick_columns, select_columns, ColumnScores, SelectionOptions, DEFAULT_COMPANY_THRESHOLD,
    DEFAULT_PHONE_THRESHOLD,
};
