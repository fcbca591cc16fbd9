//! Execution engine for scoring the columns of a table in parallel.
//!
//! Per-column scoring passes are independent, so this module sits "above" [`crate::scoring`]
//! and provides:
//!
//! - Parallel per-column execution on a dedicated thread pool
//! - Real-time metrics + observer hooks for monitoring
//!
//! Results are collected in column order, so a parallel run returns exactly what the
//! sequential [`crate::scoring::Classifier`] methods return.

mod observer;

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use rayon::ThreadPool;
use rayon::ThreadPoolBuilder;

use crate::detection::Detector;
use crate::error::{ClassifyError, ClassifyResult};
use crate::scoring::{pick_columns, Classifier, ColumnClassification, ColumnScores, SelectionOptions};
use crate::types::{Column, ColumnSelection, Table};

pub use observer::{
    ExecutionEvent, ExecutionMetrics, ExecutionMetricsSnapshot, ExecutionObserver, StdErrExecutionObserver,
    TracingExecutionObserver,
};

/// Configuration for the [`ExecutionEngine`].
#[derive(Debug, Clone)]
pub struct ExecutionOptions {
    /// Number of worker threads used by the engine.
    ///
    /// If `None`, uses the platform's available parallelism.
    pub num_threads: Option<usize>,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        let n = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
        Self { num_threads: Some(n) }
    }
}

/// A configurable engine for scoring table columns in parallel.
pub struct ExecutionEngine {
    pool: ThreadPool,
    observer: Option<Arc<dyn ExecutionObserver>>,
    metrics: Arc<ExecutionMetrics>,
}

impl ExecutionEngine {
    /// Create a new engine with the given options.
    ///
    /// Returns [`ClassifyError::InvalidArgument`] if `num_threads == Some(0)` or the thread
    /// pool cannot be built.
    pub fn new(opts: ExecutionOptions) -> ClassifyResult<Self> {
        if opts.num_threads == Some(0) {
            return Err(ClassifyError::invalid_argument("num_threads must be > 0 when set"));
        }

        let n_threads = opts
            .num_threads
            .unwrap_or_else(|| std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1))
            .max(1);

        let pool = ThreadPoolBuilder::new()
            .num_threads(n_threads)
            .build()
            .map_err(|e| ClassifyError::invalid_argument(format!("failed to build thread pool: {e}")))?;

        Ok(Self {
            pool,
            observer: None,
            metrics: Arc::new(ExecutionMetrics::new()),
        })
    }

    /// Attach an observer for execution events (metrics/logging).
    pub fn with_observer(mut self, observer: Arc<dyn ExecutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Get a handle to real-time execution metrics.
    pub fn metrics(&self) -> Arc<ExecutionMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Parallel version of [`Classifier::select_columns`].
    pub fn select_columns(
        &self,
        classifier: &Classifier,
        table: &Table,
        options: &SelectionOptions,
    ) -> ClassifyResult<ColumnSelection> {
        options.validate()?;
        let scores = self.run(table, |column| {
            let phone = self.score_column(classifier, column, Detector::Phone);
            let company = self.score_column(classifier, column, Detector::Company);
            ColumnScores {
                column: column.name.clone(),
                phone,
                company,
            }
        });
        Ok(pick_columns(&scores, options))
    }

    /// Classify every column of `table` in parallel, returning results in column order.
    pub fn classify_table(
        &self,
        classifier: &Classifier,
        table: &Table,
    ) -> Vec<(String, ColumnClassification)> {
        self.run(table, |column| {
            let result = classifier.classify(&column.values);
            self.metrics
                .on_values_evaluated(column.len() * Detector::ALL.len());
            for detector in Detector::ALL {
                self.emit(ExecutionEvent::ColumnScored {
                    column: column.name.clone(),
                    detector,
                    score: result.fractions.get(detector),
                });
            }
            (column.name.clone(), result)
        })
    }

    fn run<T, F>(&self, table: &Table, per_column: F) -> Vec<T>
    where
        T: Send,
        F: Fn(&Column) -> T + Send + Sync,
    {
        self.pool.install(|| {
            let start = Instant::now();
            self.metrics.begin_run();
            self.emit(ExecutionEvent::RunStarted {
                columns: table.columns.len(),
            });

            let out: Vec<T> = table
                .columns
                .par_iter()
                .map(|column| {
                    self.metrics.on_column_start();
                    self.emit(ExecutionEvent::ColumnStarted {
                        column: column.name.clone(),
                        values: column.len(),
                    });

                    let result = per_column(column);

                    self.emit(ExecutionEvent::ColumnFinished {
                        column: column.name.clone(),
                    });
                    self.metrics.on_column_end();
                    result
                })
                .collect();

            self.metrics.end_run(start.elapsed());
            self.emit(ExecutionEvent::RunFinished {
                elapsed: start.elapsed(),
                metrics: self.metrics.snapshot(),
            });
            out
        })
    }

    fn score_column(&self, classifier: &Classifier, column: &Column, detector: Detector) -> f64 {
        let score = classifier.score(&column.values, detector);
        self.metrics.on_values_evaluated(column.len());
        self.emit(ExecutionEvent::ColumnScored {
            column: column.name.clone(),
            detector,
            score,
        });
        score
    }

    fn emit(&self, event: ExecutionEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}
