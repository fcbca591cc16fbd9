//! Unified, observed loading entrypoints.
//!
//! Most callers should use [`read_table`] for data tables and [`load_reference`] for country and
//! legal-suffix lists.
//!
//! - If [`IngestionOptions::format`] is `None`, the table format is inferred from the file
//!   extension.
//! - If an [`super::observability::IngestionObserver`] is provided, success/failure/alerts are
//!   reported to it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{ClassifyError, ClassifyResult};
use crate::types::{ReferenceList, Table};

use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};
use super::{csv, json, reference};

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// JSON array-of-objects, single object, or NDJSON.
    Json,
    /// Plain text, one entry per line.
    ReferenceList,
}

impl IngestionFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" | "ndjson" | "jsonl" => Some(Self::Json),
            "txt" | "lst" => Some(Self::ReferenceList),
            _ => None,
        }
    }
}

impl fmt::Display for IngestionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::ReferenceList => "reference-list",
        })
    }
}

/// Options controlling observed loading.
#[derive(Clone)]
pub struct IngestionOptions {
    /// If `None`, auto-detect the table format from the file extension.
    pub format: Option<IngestionFormat>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("format", &self.format)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            format: None,
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Read a data table from `path`.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row and column counts
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use column_typer::ingestion::{read_table, IngestionOptions, IngestionSeverity, StdErrObserver};
///
/// # fn main() -> Result<(), column_typer::ClassifyError> {
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     alert_at_or_above: IngestionSeverity::Critical,
///     ..Default::default()
/// };
///
/// let table = read_table("contacts.csv", &opts)?;
/// println!("rows={} columns={}", table.row_count(), table.columns.len());
/// # Ok(())
/// # }
/// ```
pub fn read_table(path: impl AsRef<Path>, options: &IngestionOptions) -> ClassifyResult<Table> {
    let path = path.as_ref();
    let format = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let ctx = IngestionContext {
        path: path.to_path_buf(),
        format,
    };

    let result = match format {
        IngestionFormat::Csv => csv::read_csv_table(path),
        IngestionFormat::Json => json::read_json_table(path),
        IngestionFormat::ReferenceList => Err(ClassifyError::SchemaMismatch {
            message: format!("{} is a reference list, not a table", path.display()),
        }),
    };

    report(options, &ctx, &result, |t| IngestionStats {
        rows: t.row_count(),
        columns: t.columns.len(),
    });
    result
}

/// Load a reference list (countries or legal suffixes) from `path`, reporting to the configured
/// observer. `options.format` is ignored.
pub fn load_reference(path: impl AsRef<Path>, options: &IngestionOptions) -> ClassifyResult<ReferenceList> {
    let path = path.as_ref();
    let ctx = IngestionContext {
        path: path.to_path_buf(),
        format: IngestionFormat::ReferenceList,
    };

    let result = reference::load_reference_list(path);
    report(options, &ctx, &result, |list| IngestionStats {
        rows: list.len(),
        columns: 1,
    });
    result
}

fn report<T>(
    options: &IngestionOptions,
    ctx: &IngestionContext,
    result: &ClassifyResult<T>,
    stats: impl FnOnce(&T) -> IngestionStats,
) {
    let Some(obs) = options.observer.as_ref() else {
        return;
    };
    match result {
        Ok(value) => obs.on_success(ctx, stats(value)),
        Err(e) => {
            let sev = severity_for_error(e);
            obs.on_failure(ctx, sev, e);
            if sev >= options.alert_at_or_above {
                obs.on_alert(ctx, sev, e);
            }
        }
    }
}

fn severity_for_error(e: &ClassifyError) -> IngestionSeverity {
    match e {
        ClassifyError::Io(_) => IngestionSeverity::Critical,
        ClassifyError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => IngestionSeverity::Critical,
            _ => IngestionSeverity::Error,
        },
        ClassifyError::Json(err) if err.is_io() => IngestionSeverity::Critical,
        ClassifyError::Json(_)
        | ClassifyError::SchemaMismatch { .. }
        | ClassifyError::MissingColumn { .. }
        | ClassifyError::InvalidArgument { .. } => IngestionSeverity::Error,
    }
}

fn infer_format_from_path(path: &Path) -> ClassifyResult<IngestionFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ClassifyError::SchemaMismatch {
            message: format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ),
        })?;

    IngestionFormat::from_extension(ext).ok_or_else(|| ClassifyError::SchemaMismatch {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::{infer_format_from_path, IngestionFormat};
    use std::path::Path;

    #[test]
    fn formats_are_inferred_from_extensions() {
        assert_eq!(
            infer_format_from_path(Path::new("a/b/contacts.CSV")).unwrap(),
            IngestionFormat::Csv
        );
        assert_eq!(
            infer_format_from_path(Path::new("events.ndjson")).unwrap(),
            IngestionFormat::Json
        );
        assert_eq!(
            infer_format_from_path(Path::new("legal.txt")).unwrap(),
            IngestionFormat::ReferenceList
        );
        assert!(infer_format_from_path(Path::new("no_extension")).is_err());
        assert!(infer_format_from_path(Path::new("book.xlsx")).is_err());
    }
}
