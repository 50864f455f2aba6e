//! JSON Lines export target for nest-seed.
//!
//! Writes generated records to `<output_dir>/<table>.jsonl`, one JSON object
//! per line, in the same shape the REST target would post them.
//!
//! # Example
//!
//! ```ignore
//! use seed_populate_jsonl::JsonlWriter;
//!
//! let writer = JsonlWriter::new("out")?;
//! let metrics = writer.write("logs", &records)?;
//! println!("Wrote {} rows in {:?}", metrics.rows_written, metrics.total_duration);
//! ```

pub mod args;
pub mod error;
pub mod writer;

pub use args::JsonlExportArgs;
pub use error::JsonlWriterError;
pub use writer::{JsonlWriter, WriteMetrics};
