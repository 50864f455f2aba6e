//! CLI argument definitions for the JSONL export target.

use clap::Args;
use seed_populate::CommonPopulateArgs;
use std::path::PathBuf;

/// JSONL-specific export arguments.
#[derive(Args, Clone, Debug)]
pub struct JsonlExportArgs {
    /// Output directory for JSONL files (one file per table)
    #[arg(long, short = 'o')]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}
