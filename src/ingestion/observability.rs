use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ClassifyError;

use super::unified::IngestionFormat;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (the input could not be read as a table or list).
    Error,
    /// Critical error (I/O failures such as a missing file).
    Critical,
}

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    /// The input path.
    pub path: PathBuf,
    /// Format the input was read as.
    pub format: IngestionFormat,
}

impl IngestionContext {
    /// What was being loaded: `"table"` or `"reference list"`.
    pub fn subject(&self) -> &'static str {
        match self.format {
            IngestionFormat::ReferenceList => "reference list",
            IngestionFormat::Csv | IngestionFormat::Json => "table",
        }
    }

    fn line(&self, event: &str, detail: fmt::Arguments<'_>) -> String {
        format!(
            "{event} {} format={} path={} {detail}",
            self.subject(),
            self.format,
            self.path.display()
        )
    }
}

/// Shape of a successfully loaded input.
///
/// For reference lists, `rows` is the number of entries and `columns` is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionStats {
    pub rows: usize,
    pub columns: usize,
}

impl IngestionStats {
    /// `rows=.. columns=..` for tables, `entries=..` for reference lists.
    fn describe(&self, format: IngestionFormat) -> String {
        match format {
            IngestionFormat::ReferenceList => format!("entries={}", self.rows),
            IngestionFormat::Csv | IngestionFormat::Json => {
                format!("rows={} columns={}", self.rows, self.columns)
            }
        }
    }
}

/// Observer interface for load outcomes.
pub trait IngestionObserver: Send + Sync {
    /// Called when loading succeeds.
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    /// Called when loading fails.
    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &ClassifyError) {}

    /// Called when a failure meets the alert threshold. Forwards to [`Self::on_failure`]
    /// unless overridden.
    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ClassifyError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Forwards every event to each inner observer in order.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestionObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn IngestionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.observers.len()).map(|_| "dyn IngestionObserver"))
            .finish()
    }
}

impl IngestionObserver for CompositeObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        self.observers.iter().for_each(|o| o.on_success(ctx, stats));
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ClassifyError) {
        self.observers.iter().for_each(|o| o.on_failure(ctx, severity, error));
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ClassifyError) {
        self.observers.iter().for_each(|o| o.on_alert(ctx, severity, error));
    }
}

/// Prints load events to stderr, one line each, prefixed with `column-typer:`.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl IngestionObserver for StdErrObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        eprintln!(
            "column-typer: {}",
            ctx.line("loaded", format_args!("{}", stats.describe(ctx.format)))
        );
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ClassifyError) {
        eprintln!(
            "column-typer: {}",
            ctx.line("could not load", format_args!("severity={severity:?} err={error}"))
        );
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ClassifyError) {
        eprintln!(
            "column-typer: ALERT {}",
            ctx.line("could not load", format_args!("severity={severity:?} err={error}"))
        );
    }
}

/// Forwards load events to `tracing`.
///
/// Successes log at debug, failures at warn, alerts at error.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl IngestionObserver for TracingObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        tracing::debug!(
            subject = ctx.subject(),
            format = %ctx.format,
            path = %ctx.path.display(),
            rows = stats.rows,
            columns = stats.columns,
            "loaded"
        );
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ClassifyError) {
        tracing::warn!(
            subject = ctx.subject(),
            path = %ctx.path.display(),
            severity = ?severity,
            error = %error,
            "could not load"
        );
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ClassifyError) {
        tracing::error!(
            subject = ctx.subject(),
            path = %ctx.path.display(),
            severity = ?severity,
            error = %error,
            "could not load (alert)"
        );
    }
}

/// Appends timestamped load events to a log file (the CLI's `--log-file`).
///
/// Writes are best-effort: a log file that cannot be opened is skipped silently.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append(&self, line: String) {
        let _guard = self.lock.lock().ok();
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{ts} {line}");
        }
    }
}

impl IngestionObserver for FileObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        self.append(ctx.line("loaded", format_args!("{}", stats.describe(ctx.format))));
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ClassifyError) {
        self.append(ctx.line("could not load", format_args!("severity={severity:?} err={error}")));
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &ClassifyError) {
        self.append(format!(
            "ALERT {}",
            ctx.line("could not load", format_args!("severity={severity:?} err={error}"))
        ));
    }
}
