//! Common types and utilities for nest-seed populators.
//!
//! This crate provides shared argument types used across all
//! seed-populate-* crates (REST, JSONL).

pub mod args;

pub use args::CommonPopulateArgs;
