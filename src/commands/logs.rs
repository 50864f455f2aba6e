//! `logs`: back-dated activity records for every configured subject.

use super::{ensure_completed, load_config, run_seed, rest_submitter, LOGS_TABLE};
use anyhow::Context;
use chrono::NaiveDate;
use seed_core::{SeedConfig, SyntheticRecord};
use seed_generator::generators::time::trailing_window;
use seed_generator::{ActivityCategories, ActivityGenerator};
use seed_populate_rest::RestPopulateArgs;

/// Generate the activity history ending at `today`.
pub fn generate_logs(config: &SeedConfig, today: NaiveDate) -> anyhow::Result<Vec<SyntheticRecord>> {
    config
        .validate_logs(&ActivityCategories::REQUIRED)
        .context("Seed config cannot drive activity log generation")?;

    let seed = run_seed(config)?;
    let (start, end) = trailing_window(today, config.window_days)?;
    let mut generator = ActivityGenerator::new(&config.categories.activities, seed)?;

    tracing::info!(
        "Generating activity logs for {} subject(s) from {} to {}",
        config.subjects.len(),
        start,
        end
    );
    let records = generator.generate_for_subjects(&config.subjects, start, end)?;
    tracing::info!("Generated {} records", records.len());
    Ok(records)
}

pub async fn run_logs(args: RestPopulateArgs, today: NaiveDate) -> anyhow::Result<()> {
    let config = load_config(&args.common)?;
    let records = generate_logs(&config, today)?;

    if args.common.dry_run {
        tracing::info!(
            "[DRY-RUN] Would submit {} records to '{}' in batches of {}",
            records.len(),
            LOGS_TABLE,
            config.batch_size
        );
        return Ok(());
    }

    let submitter = rest_submitter(&args.connection, &config)?;
    let outcome = submitter.submit(LOGS_TABLE, &records).await;
    let metrics = ensure_completed(LOGS_TABLE, outcome)?;

    tracing::info!(
        "Done: {} records in {} batches ({:?})",
        metrics.records_submitted,
        metrics.batch_count,
        metrics.total_duration
    );
    Ok(())
}
