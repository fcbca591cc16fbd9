//! Loading tables and reference lists from disk.
//!
//! Most callers should use [`read_table`] and [`load_reference`] (from [`unified`]) which:
//!
//! - auto-detect the table format by file extension (or you can override via [`IngestionOptions`])
//! - read every cell as text into a [`crate::types::Table`]
//! - optionally report success/failure/alerts to an [`IngestionObserver`]
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - [`json`]
//! - [`reference`]

pub mod csv;
pub mod json;
pub mod observability;
pub mod reference;
pub mod unified;

pub use self::csv::{read_csv_table, read_csv_table_from_reader};
pub use json::{read_json_table, read_json_table_from_str};
pub use observability::{
    CompositeObserver, FileObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
    StdErrObserver, TracingObserver,
};
pub use reference::{load_reference_list, parse_reference_list, read_reference_list};
pub use unified::{load_reference, read_table, IngestionFormat, IngestionOptions};
