//! Sampling helpers shared by the record generators.
//!
//! Every helper takes the RNG by `&mut R` so a single seeded RNG drives a
//! whole run and the output is reproducible.

pub mod numeric;
pub mod time;
pub mod uuid;
pub mod weighted;

pub use weighted::WeightedChoice;
