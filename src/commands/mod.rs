//! Command handlers.
//!
//! Each subcommand loads the seed config, applies command-line overrides,
//! validates everything it needs before any I/O, generates its records and
//! hands them to a populate target.

pub mod catalog;
pub mod export;
pub mod household;
pub mod logs;
pub mod members;
pub mod validate;

use anyhow::Context;
use seed_core::SeedConfig;
use seed_populate::CommonPopulateArgs;
use seed_populate_rest::{
    mask_api_key, BatchSubmitter, PopulateMetrics, RestClient, RestConnectionArgs, SubmitOutcome,
};
use std::time::Duration;

/// Table receiving activity log records.
pub const LOGS_TABLE: &str = "logs";

/// Load the config file named by `common`, apply its overrides and fix the
/// seed for the rest of the run.
pub fn load_config(common: &CommonPopulateArgs) -> anyhow::Result<SeedConfig> {
    let mut config = SeedConfig::from_file(&common.config)
        .with_context(|| format!("Failed to load seed config from {:?}", common.config))?;
    common.apply_to(&mut config);
    pin_seed(&mut config);
    log_audit(&config);
    Ok(config)
}

/// Log suspicious category identifiers. Never fails.
pub fn log_audit(config: &SeedConfig) {
    for warning in config.audit() {
        tracing::warn!("Category table: {}", warning);
    }
}

/// Keep the configured seed, or draw a fresh one and log it so the run can be
/// replayed. The result is written back so every generator in the run shares it.
pub fn pin_seed(config: &mut SeedConfig) -> u64 {
    let seed = match config.seed {
        Some(seed) => {
            tracing::info!("Using seed {}", seed);
            seed
        }
        None => {
            let seed = rand::random::<u64>();
            tracing::info!("No seed configured, using {} (pass --seed {} to replay)", seed, seed);
            seed
        }
    };
    config.seed = Some(seed);
    seed
}

/// The seed fixed for this run by [`pin_seed`].
pub fn run_seed(config: &SeedConfig) -> anyhow::Result<u64> {
    config
        .seed
        .context("No seed fixed for this run; load the config with load_config or set `seed`")
}

/// Build a batch submitter against the configured backend.
pub fn rest_submitter(
    connection: &RestConnectionArgs,
    config: &SeedConfig,
) -> anyhow::Result<BatchSubmitter<RestClient>> {
    let client = rest_client(connection)?;
    let submitter = BatchSubmitter::new(client, config.batch_size)
        .context("Invalid batch configuration")?
        .with_pause(Duration::from_millis(config.pause_ms));
    Ok(submitter)
}

pub fn rest_client(connection: &RestConnectionArgs) -> anyhow::Result<RestClient> {
    let client = connection
        .build_client()
        .context("Failed to set up the REST client")?;
    tracing::info!(
        "Backend: {} (key {})",
        client.base_url(),
        mask_api_key(connection.api_key.as_deref().unwrap_or_default())
    );
    Ok(client)
}

/// Turn a halted run into an error naming the failed batch.
pub fn ensure_completed(table: &str, outcome: SubmitOutcome) -> anyhow::Result<PopulateMetrics> {
    match outcome {
        SubmitOutcome::Completed(metrics) => Ok(metrics),
        SubmitOutcome::Halted {
            failed_batch,
            metrics,
            error,
        } => Err(anyhow::Error::new(error).context(format!(
            "Submission to '{table}' stopped at batch {failed_batch}/{} after {} records",
            metrics.total_batches, metrics.records_submitted
        ))),
    }
}
