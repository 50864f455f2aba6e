//! Synthetic record generators for nest-seed.
//!
//! This crate turns a [`seed_core::SeedConfig`] into records. Every generator
//! owns a seeded [`rand::rngs::StdRng`], so the same seed and configuration
//! always produce the same records, identifiers included.
//!
//! # Architecture
//!
//! ```text
//! SeedConfig (YAML)
//!        │
//!        ├──▶ ActivityGenerator   ──▶ Vec<SyntheticRecord>   (logs)
//!        ├──▶ HouseholdGenerator  ──▶ HouseholdDataset       (finance, tasks, ...)
//!        └──▶ MemberGenerator     ──▶ Vec<MemberProfile>     (signups)
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use seed_core::CategoryTable;
//! use seed_generator::ActivityGenerator;
//!
//! let table = CategoryTable::from([
//!     ("formula", "f4a3d3a2-3050-4092-86a9-87fc0ec13004"),
//!     ("breast", "61f83e09-981c-4c8d-9f66-1705d011243c"),
//!     ("pee", "fb55f085-4317-4374-a470-ef768e11f3af"),
//!     ("poop", "958d5913-89db-4653-b9d3-6962a525c85c"),
//!     ("sleep", "887cbdfc-174f-468a-a212-dc18e6d64262"),
//!     ("temperature", "b8960b8c-0f68-4e5f-8a15-346f40b02bbd"),
//! ]);
//!
//! let mut generator = ActivityGenerator::new(&table, 42).unwrap();
//! let day = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
//! let records = generator.generate("c9adebed-db95-4aef-b6f9-8e0057b45dc2", day, day).unwrap();
//! assert!(records.len() >= 15);
//! ```

pub mod activity;
pub mod error;
pub mod generators;
pub mod household;
pub mod members;

// Re-exports for convenience
pub use activity::{ActivityCategories, ActivityGenerator, DayPlan};
pub use error::GeneratorError;
pub use household::{CalendarCategory, HouseholdGenerator};
pub use members::MemberGenerator;
