//! Error type for generator operations.

use chrono::NaiveDate;
use seed_core::{ConfigError, RecordError};

/// Error type for generator operations.
///
/// Every variant is a configuration problem detected before the first record
/// is produced, except [`GeneratorError::Record`], which would indicate a
/// broken generation rule.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Window end before window start
    #[error("Invalid window: end {end} is before start {start}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },

    /// Window start would precede the earliest representable date
    #[error("Window of {days} days before {end} is out of range")]
    WindowOutOfRange { end: NaiveDate, days: u32 },

    /// Weighted choice over no items
    #[error("Weighted choice needs at least one item")]
    EmptyChoice,

    /// Weighted choice whose weights sum to zero
    #[error("Weighted choice needs at least one non-zero weight")]
    ZeroWeight,

    /// Weights the sampler rejects for another reason
    #[error("Invalid weights: {0}")]
    InvalidWeights(rand::distributions::WeightedError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Record construction error
    #[error("Record error: {0}")]
    Record(#[from] RecordError),
}
