//! Core types for the nest-seed framework.
//!
//! This crate provides the foundational types shared by every other crate
//! in the workspace:
//!
//! - [`SyntheticRecord`] - A back-dated activity log entry
//! - Household records ([`FinanceAccount`], [`FinanceTransaction`], [`HomeDevice`],
//!   [`Note`], [`Task`], [`CalendarEvent`])
//! - [`MemberProfile`] - A test account submitted to the signup endpoint
//! - [`SeedConfig`] / [`CategoryTable`] - Configuration loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    ├─── seed-generator       (produces records from SeedConfig)
//!    │
//!    ├─── seed-populate-rest   (submits records to the REST data API)
//!    └─── seed-populate-jsonl  (writes records to JSON Lines files)
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_core::SeedConfig;
//!
//! let config = SeedConfig::from_yaml(r#"
//! window_days: 7
//! subjects:
//!   - id: c9adebed-db95-4aef-b6f9-8e0057b45dc2
//!     name: Baby
//! categories:
//!   activities:
//!     formula: f4a3d3a2-3050-4092-86a9-87fc0ec13004
//! "#).unwrap();
//!
//! let formula = config.categories.activities.require("activities", "FORMULA").unwrap();
//! assert_eq!(formula, "f4a3d3a2-3050-4092-86a9-87fc0ec13004");
//! ```

pub mod config;
pub mod household;
pub mod record;

// Re-exports for convenience
pub use config::{
    ActivityTypeDefinition, CategoryTable, CategoryTables, CategoryWarning, ConfigError,
    HouseholdRef, MembersConfig, SeedConfig, Subject,
};
pub use household::{
    AccountKind, CalendarEvent, FinanceAccount, FinanceTransaction, HomeDevice,
    HouseholdDataset, Note, Priority, Task, TransactionKind,
};
pub use record::{MemberProfile, ProfileAttributes, RecordError, SyntheticRecord};
