//! JSONL writer.

use crate::error::JsonlWriterError;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl WriteMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes record sequences to one `<table>.jsonl` file per table.
pub struct JsonlWriter {
    output_dir: PathBuf,
}

impl JsonlWriter {
    /// Create a writer, creating `output_dir` if it does not exist.
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Result<Self, JsonlWriterError> {
        let output_dir = output_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the file holding `table`.
    pub fn path_for(&self, table: &str) -> Result<PathBuf, JsonlWriterError> {
        let valid = !table.is_empty()
            && table
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(JsonlWriterError::InvalidTableName(table.to_string()));
        }
        Ok(self.output_dir.join(format!("{table}.jsonl")))
    }

    /// Write `records` to `<output_dir>/<table>.jsonl`, replacing any previous file.
    pub fn write<T: Serialize>(
        &self,
        table: &str,
        records: &[T],
    ) -> Result<WriteMetrics, JsonlWriterError> {
        let start_time = Instant::now();
        let mut metrics = WriteMetrics::default();
        let output_path = self.path_for(table)?;

        info!(
            "Writing {} rows for '{}' to '{}'",
            records.len(),
            table,
            output_path.display()
        );

        let file = File::create(&output_path)?;
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

        for record in records {
            serde_json::to_writer(&mut writer, record)?;
            writeln!(writer)?;
            metrics.rows_written += 1;

            if metrics.rows_written % 10000 == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        writer.flush()?;
        drop(writer);

        metrics.file_size_bytes = std::fs::metadata(&output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "JSONL export of '{}' complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            table,
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use seed_core::SyntheticRecord;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn records(count: usize) -> Vec<SyntheticRecord> {
        let at = NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        (0..count)
            .map(|_| SyntheticRecord::instant(Uuid::new_v4(), "child-1", "pee-id", at))
            .collect()
    }

    #[test]
    fn test_metrics() {
        let metrics = WriteMetrics {
            rows_written: 1000,
            file_size_bytes: 100000,
            total_duration: Duration::from_secs(10),
        };
        assert_eq!(metrics.rows_per_second(), 100.0);
    }

    #[test]
    fn test_write_records() {
        let temp_dir = TempDir::new().unwrap();
        let writer = JsonlWriter::new(temp_dir.path().join("nested/out")).unwrap();

        let metrics = writer.write("logs", &records(10)).unwrap();

        assert_eq!(metrics.rows_written, 10);
        let path = temp_dir.path().join("nested/out/logs.jsonl");
        assert!(path.exists());
        assert_eq!(metrics.file_size_bytes, std::fs::metadata(&path).unwrap().len());

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 10);

        for line in lines {
            let json: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(json["child_id"], "child-1");
            assert_eq!(json["start_time"], "2026-01-05T08:30:00");
            // Absent optionals are still present as null
            assert!(json.get("end_time").unwrap().is_null());
            assert!(json.get("value").unwrap().is_null());
        }
    }

    #[test]
    fn test_write_replaces_previous_file() {
        let temp_dir = TempDir::new().unwrap();
        let writer = JsonlWriter::new(temp_dir.path()).unwrap();

        writer.write("logs", &records(5)).unwrap();
        let metrics = writer.write("logs", &records(2)).unwrap();

        assert_eq!(metrics.rows_written, 2);
        let content = std::fs::read_to_string(writer.path_for("logs").unwrap()).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_empty_sequence_writes_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let writer = JsonlWriter::new(temp_dir.path()).unwrap();

        let metrics = writer.write::<SyntheticRecord>("tasks", &[]).unwrap();

        assert_eq!(metrics.rows_written, 0);
        assert_eq!(metrics.file_size_bytes, 0);
    }

    #[test]
    fn test_rejects_path_like_table_names() {
        let temp_dir = TempDir::new().unwrap();
        let writer = JsonlWriter::new(temp_dir.path()).unwrap();

        for table in ["", "../logs", "a/b", "logs.jsonl"] {
            assert!(matches!(
                writer.path_for(table),
                Err(JsonlWriterError::InvalidTableName(_))
            ));
        }
    }
}
