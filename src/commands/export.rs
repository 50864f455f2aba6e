//! `export`: write generated records to JSON Lines instead of the backend.

use super::household::generate_household;
use super::logs::generate_logs;
use super::{load_config, run_seed, LOGS_TABLE};
use anyhow::Context;
use chrono::NaiveDate;
use seed_populate_jsonl::{JsonlExportArgs, JsonlWriter};

/// Export activity logs, plus the household tables when a household is configured.
///
/// Returns the seed every table was generated from.
pub fn run_export(args: JsonlExportArgs, today: NaiveDate) -> anyhow::Result<u64> {
    let config = load_config(&args.common)?;
    let seed = run_seed(&config)?;
    let records = generate_logs(&config, today)?;
    let mut sections = match config.household {
        Some(_) => generate_household(&config, today)?
            .into_sections()
            .context("Failed to serialize household rows")?,
        None => {
            tracing::info!("No household configured, exporting activity logs only");
            Vec::new()
        }
    };

    // Household baby logs share the logs file with the activity history
    let mut log_rows = records
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to serialize activity logs")?;
    if let Some(index) = sections.iter().position(|(table, _)| *table == LOGS_TABLE) {
        let (_, baby_logs) = sections.remove(index);
        log_rows.extend(baby_logs);
    }

    if args.common.dry_run {
        tracing::info!(
            "[DRY-RUN] Would write {} rows to {:?}",
            log_rows.len(),
            args.output_dir.join(format!("{LOGS_TABLE}.jsonl"))
        );
        for (table, rows) in &sections {
            tracing::info!(
                "[DRY-RUN] Would write {} rows to {:?}",
                rows.len(),
                args.output_dir.join(format!("{table}.jsonl"))
            );
        }
        return Ok(seed);
    }

    let writer = JsonlWriter::new(&args.output_dir)
        .with_context(|| format!("Failed to create output directory {:?}", args.output_dir))?;

    let metrics = writer
        .write(LOGS_TABLE, &log_rows)
        .with_context(|| format!("Failed to write JSONL for '{LOGS_TABLE}'"))?;
    tracing::info!(
        "Exported '{}': {} rows in {:?}",
        LOGS_TABLE,
        metrics.rows_written,
        metrics.total_duration
    );

    for (table, rows) in &sections {
        let metrics = writer
            .write(table, rows)
            .with_context(|| format!("Failed to write JSONL for '{table}'"))?;
        tracing::info!("Exported '{}': {} rows", table, metrics.rows_written);
    }

    Ok(seed)
}
