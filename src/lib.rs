//! nest-seed library
//!
//! Seeds a hosted REST backend with synthetic baby-care activity history,
//! household data, member accounts and activity type definitions.
//!
//! # CLI Usage
//!
//! ```bash
//! # Six months of activity logs for every configured child
//! nest-seed logs --config seed.yaml --api-url https://project.example.co --api-key $KEY
//!
//! # Generate without sending anything
//! nest-seed household --config seed.yaml --dry-run
//!
//! # Write the same records to JSON Lines files
//! nest-seed export --config seed.yaml --output-dir out/
//! ```

pub mod commands;

pub use commands::validate::{ValidateArgs, ValidationReport};
