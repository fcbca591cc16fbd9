use std::fmt;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use crate::detection::Detector;

/// Execution events emitted by the engine.
#[derive(Debug, Clone)]
pub enum ExecutionEvent {
    RunStarted { columns: usize },
    ColumnStarted { column: String, values: usize },
    ColumnScored {
        column: String,
        detector: Detector,
        score: f64,
    },
    ColumnFinished { column: String },
    RunFinished {
        elapsed: Duration,
        metrics: ExecutionMetricsSnapshot,
    },
}

/// Observer hook for execution events.
pub trait ExecutionObserver: Send + Sync {
    fn on_event(&self, event: &ExecutionEvent);
}

/// A simple stderr logger for execution events.
#[derive(Debug, Default)]
pub struct StdErrExecutionObserver;

impl ExecutionObserver for StdErrExecutionObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        eprintln!("{event:?}");
    }
}

/// Forwards execution events to `tracing` (debug for per-column events, info for runs).
#[derive(Debug, Default)]
pub struct TracingExecutionObserver;

impl ExecutionObserver for TracingExecutionObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        match event {
            ExecutionEvent::RunStarted { columns } => {
                tracing::info!(columns, "column scoring started");
            }
            ExecutionEvent::ColumnStarted { column, values } => {
                tracing::debug!(column = %column, values, "scoring column");
            }
            ExecutionEvent::ColumnScored {
                column,
                detector,
                score,
            } => {
                tracing::debug!(column = %column, detector = %detector, score, "column scored");
            }
            ExecutionEvent::ColumnFinished { column } => {
                tracing::debug!(column = %column, "column finished");
            }
            ExecutionEvent::RunFinished { elapsed, metrics } => {
                tracing::info!(elapsed_ms = elapsed.as_millis() as u64, %metrics, "column scoring finished");
            }
        }
    }
}

/// Real-time metrics for an execution run.
///
/// The engine updates these counters during execution; callers can snapshot them at any time.
pub struct ExecutionMetrics {
    run_id: AtomicU64,
    elapsed_ns: AtomicU64,

    columns_started: AtomicU64,
    columns_finished: AtomicU64,
    values_evaluated: AtomicU64,

    active_columns: AtomicUsize,
    max_active_columns: AtomicUsize,
}

impl ExecutionMetrics {
    pub fn new() -> Self {
        Self {
            run_id: AtomicU64::new(0),
            elapsed_ns: AtomicU64::new(0),
            columns_started: AtomicU64::new(0),
            columns_finished: AtomicU64::new(0),
            values_evaluated: AtomicU64::new(0),
            active_columns: AtomicUsize::new(0),
            max_active_columns: AtomicUsize::new(0),
        }
    }

    pub fn begin_run(&self) {
        let _ = self.run_id.fetch_add(1, Ordering::SeqCst);

        self.elapsed_ns.store(0, Ordering::SeqCst);
        self.columns_started.store(0, Ordering::SeqCst);
        self.columns_finished.store(0, Ordering::SeqCst);
        self.values_evaluated.store(0, Ordering::SeqCst);
        self.active_columns.store(0, Ordering::SeqCst);
        self.max_active_columns.store(0, Ordering::SeqCst);
    }

    pub fn end_run(&self, elapsed: Duration) {
        self.elapsed_ns
            .store(elapsed.as_nanos().min(u64::MAX as u128) as u64, Ordering::SeqCst);
    }

    pub fn on_values_evaluated(&self, n: usize) {
        let _ = self.values_evaluated.fetch_add(n as u64, Ordering::SeqCst);
    }

    pub fn on_column_start(&self) {
        let _ = self.columns_started.fetch_add(1, Ordering::SeqCst);
        let now = self.active_columns.fetch_add(1, Ordering::SeqCst) + 1;
        update_max_usize(&self.max_active_columns, now);
    }

    pub fn on_column_end(&self) {
        let _ = self.columns_finished.fetch_add(1, Ordering::SeqCst);
        let _ = self.active_columns.fetch_sub(1, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> ExecutionMetricsSnapshot {
        let elapsed_ns = self.elapsed_ns.load(Ordering::SeqCst);
        let elapsed = if elapsed_ns > 0 {
            Some(Duration::from_nanos(elapsed_ns))
        } else {
            None
        };

        ExecutionMetricsSnapshot {
            run_id: self.run_id.load(Ordering::SeqCst),
            elapsed,
            columns_started: self.columns_started.load(Ordering::SeqCst),
            columns_finished: self.columns_finished.load(Ordering::SeqCst),
            values_evaluated: self.values_evaluated.load(Ordering::SeqCst),
            max_active_columns: self.max_active_columns.load(Ordering::SeqCst),
        }
    }
}

impl Default for ExecutionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ExecutionMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExecutionMetrics")
            .field(&self.snapshot())
            .finish()
    }
}

fn update_max_usize(dst: &AtomicUsize, now: usize) {
    loop {
        let cur = dst.load(Ordering::SeqCst);
        if now <= cur {
            break;
        }
        if dst
            .compare_exchange(cur, now, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            break;
        }
    }
}

/// Immutable snapshot of [`ExecutionMetrics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionMetricsSnapshot {
    pub run_id: u64,
    pub elapsed: Option<Duration>,
    pub columns_started: u64,
    pub columns_finished: u64,
    /// Detector evaluations, one per value per detector.
    pub values_evaluated: u64,
    pub max_active_columns: usize,
}

impl fmt::Display for ExecutionMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "run_id={}, columns={}/{}, values_evaluated={}, max_active_columns={}, elapsed={:?}",
            self.run_id,
            self.columns_finished,
            self.columns_started,
            self.values_evaluated,
            self.max_active_columns,
            self.elapsed
        )
    }
}
