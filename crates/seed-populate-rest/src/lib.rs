//! REST data API populator for nest-seed.
//!
//! Submits generated records to a PostgREST-style backend: record batches
//! through [`BatchSubmitter`], member accounts through [`SignupRunner`] and
//! activity type definitions through [`CatalogSeeder`].
//!
//! # Example
//!
//! ```ignore
//! use seed_populate_rest::{BatchSubmitter, RestClient};
//! use std::time::Duration;
//!
//! let client = RestClient::new("https://project.example.co", "key", Duration::from_secs(30))?;
//! let submitter = BatchSubmitter::new(client, 200)?;
//! let outcome = submitter.submit("logs", &records).await;
//! ```

pub mod args;
pub mod catalog;
pub mod client;
pub mod error;
pub mod signup;
pub mod submitter;

pub use args::{mask_api_key, RestConnectionArgs, RestPopulateArgs};
pub use catalog::{CatalogReport, CatalogSeeder, ACTIVITY_TYPES_TABLE};
pub use client::{AccountService, CatalogStore, RecordSink, RestClient};
pub use error::{PopulateError, SinkError};
pub use signup::{extract_user_id, SignupOutcome, SignupReport, SignupRunner};
pub use submitter::{batch_count, BatchSubmitter, PopulateMetrics, SubmitOutcome};
