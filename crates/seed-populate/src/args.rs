//! Common CLI argument definitions shared by all populators.

use clap::Args;
use seed_core::SeedConfig;
use std::path::PathBuf;

/// Common arguments shared by all populators.
///
/// Values given on the command line override the ones in the config file.
#[derive(Args, Clone, Debug)]
pub struct CommonPopulateArgs {
    /// Path to seed config YAML file
    #[arg(long, short = 'c', env = "SEED_CONFIG")]
    pub config: PathBuf,

    /// Days of history to generate before today
    #[arg(long)]
    pub days: Option<u32>,

    /// Records per create request
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause between requests in milliseconds
    #[arg(long)]
    pub pause_ms: Option<u64>,

    /// Dry-run mode: generate and validate without any network I/O
    #[arg(long)]
    pub dry_run: bool,
}

impl CommonPopulateArgs {
    /// Apply command-line overrides to a loaded config.
    pub fn apply_to(&self, config: &mut SeedConfig) {
        if let Some(days) = self.days {
            config.window_days = days;
        }
        if let Some(batch_size) = self.batch_size {
            config.batch_size = batch_size;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(pause_ms) = self.pause_ms {
            config.pause_ms = pause_ms;
        }
    }
}
