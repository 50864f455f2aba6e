//! Batch submitter.
//!
//! Splits a record sequence into contiguous chunks of at most `batch_size`
//! and sends each chunk as one create request, strictly in order. The first
//! chunk that fails stops the run: nothing is retried, skipped or resumed,
//! so a run is either fully delivered or delivered up to the failing chunk.

use crate::client::RecordSink;
use crate::error::{PopulateError, SinkError};
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Default pause between create requests.
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(100);

/// Metrics from a submit operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopulateMetrics {
    /// Records in successfully delivered batches.
    pub records_submitted: u64,
    /// Number of batches delivered.
    pub batch_count: u64,
    /// Number of batches the sequence was split into.
    pub total_batches: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent waiting on the backend.
    pub request_duration: Duration,
}

impl PopulateMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_submitted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// How a submit run ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Every batch was accepted.
    Completed(PopulateMetrics),

    /// Batch `failed_batch` (1-based) was rejected; later batches were never sent.
    Halted {
        failed_batch: u64,
        metrics: PopulateMetrics,
        error: SinkError,
    },
}

impl SubmitOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SubmitOutcome::Completed(_))
    }

    pub fn metrics(&self) -> &PopulateMetrics {
        match self {
            SubmitOutcome::Completed(metrics) => metrics,
            SubmitOutcome::Halted { metrics, .. } => metrics,
        }
    }
}

/// Number of batches `total` records split into at `batch_size` per batch.
pub fn batch_count(total: usize, batch_size: usize) -> usize {
    if batch_size == 0 {
        return 0;
    }
    total.div_ceil(batch_size)
}

/// Sequential, halt-on-first-failure batch submitter.
pub struct BatchSubmitter<S> {
    sink: S,
    batch_size: usize,
    pause: Duration,
}

impl<S: RecordSink> BatchSubmitter<S> {
    /// Create a submitter. A batch size of zero is rejected before any I/O.
    pub fn new(sink: S, batch_size: usize) -> Result<Self, PopulateError> {
        if batch_size == 0 {
            return Err(PopulateError::InvalidBatchSize);
        }
        Ok(Self {
            sink,
            batch_size,
            pause: DEFAULT_PAUSE,
        })
    }

    /// Set the pause between consecutive requests.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Serialize and submit `records` to `table`.
    ///
    /// Serialization happens per batch; a record that fails to serialize
    /// halts the run exactly like a rejected request.
    pub async fn submit<T: Serialize>(&self, table: &str, records: &[T]) -> SubmitOutcome {
        let start_time = Instant::now();
        let total_batches = batch_count(records.len(), self.batch_size) as u64;
        let mut metrics = PopulateMetrics {
            total_batches,
            ..Default::default()
        };

        info!(
            "Submitting {} records to '{}' in {} batches (batch size: {})",
            records.len(),
            table,
            total_batches,
            self.batch_size
        );

        for (i, chunk) in records.chunks(self.batch_size).enumerate() {
            let batch_number = i as u64 + 1;

            if i > 0 && !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }

            info!(
                "Posting batch {}/{} ({} records)...",
                batch_number,
                total_batches,
                chunk.len()
            );

            let result = match to_rows(chunk) {
                Ok(rows) => {
                    let request_start = Instant::now();
                    let result = self.sink.create(table, &rows).await;
                    metrics.request_duration += request_start.elapsed();
                    result
                }
                Err(e) => Err(e),
            };

            if let Err(e) = result {
                error!(
                    "Batch {}/{} to '{}' failed: {}. Stopping due to error.",
                    batch_number, total_batches, table, e
                );
                metrics.total_duration = start_time.elapsed();
                return SubmitOutcome::Halted {
                    failed_batch: batch_number,
                    metrics,
                    error: e,
                };
            }

            metrics.records_submitted += chunk.len() as u64;
            metrics.batch_count += 1;

            debug!(
                "Batch {} complete: {} records delivered so far",
                batch_number, metrics.records_submitted
            );
        }

        metrics.total_duration = start_time.elapsed();

        info!(
            "Submission to '{}' complete: {} records in {:?} ({:.2} records/sec)",
            table,
            metrics.records_submitted,
            metrics.total_duration,
            metrics.records_per_second()
        );

        SubmitOutcome::Completed(metrics)
    }
}

fn to_rows<T: Serialize>(chunk: &[T]) -> Result<Vec<Value>, SinkError> {
    chunk
        .iter()
        .map(|record| serde_json::to_value(record).map_err(SinkError::from))
        .collect()
}
