//! `validate`: show the category tables and everything suspicious about them.

use anyhow::Context;
use clap::Args;
use seed_core::{CategoryWarning, SeedConfig};
use std::path::PathBuf;

#[derive(Args, Clone, Debug)]
pub struct ValidateArgs {
    /// Path to seed config YAML file
    #[arg(long, short = 'c', env = "SEED_CONFIG")]
    pub config: PathBuf,

    /// Second config whose category identifiers should agree with this one
    #[arg(long)]
    pub compare: Option<PathBuf>,
}

/// Findings of a validate run.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub audit: Vec<CategoryWarning>,
    pub drift: Vec<CategoryWarning>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.audit.is_empty() && self.drift.is_empty()
    }
}

pub fn validate_config(
    config: &SeedConfig,
    other: Option<&SeedConfig>,
) -> ValidationReport {
    ValidationReport {
        audit: config.audit(),
        drift: other
            .map(|other| config.categories.drift_against(&other.categories))
            .unwrap_or_default(),
    }
}

/// Print the tables and findings. Findings are reported, not treated as failures.
pub fn run_validate(args: ValidateArgs) -> anyhow::Result<ValidationReport> {
    let config = SeedConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load seed config from {:?}", args.config))?;
    let other = match &args.compare {
        Some(path) => Some(
            SeedConfig::from_file(path)
                .with_context(|| format!("Failed to load comparison config from {path:?}"))?,
        ),
        None => None,
    };

    for (table, category_table) in config.categories.tables() {
        println!("{table} ({} entries)", category_table.len());
        for (name, id) in category_table.iter() {
            println!("  {name:<14} {id}");
        }
    }
    println!(
        "subjects: {}, members: {}, activity types: {}, household: {}",
        config.subjects.len(),
        config.members.names.len(),
        config.activity_types.len(),
        if config.household.is_some() { "yes" } else { "no" }
    );

    let report = validate_config(&config, other.as_ref());
    for warning in report.audit.iter().chain(&report.drift) {
        tracing::warn!("{}", warning);
    }
    if report.is_clean() {
        tracing::info!("No category problems found");
    } else {
        tracing::info!(
            "{} audit finding(s), {} drifted identifier(s)",
            report.audit.len(),
            report.drift.len()
        );
    }

    Ok(report)
}
