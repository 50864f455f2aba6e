//! `household`: finance, device, note, task and calendar rows for one household,
//! plus baby logs when the household names a child.

use super::{ensure_completed, load_config, run_seed, rest_submitter};
use anyhow::Context;
use chrono::NaiveDate;
use seed_core::{HouseholdDataset, SeedConfig};
use seed_generator::HouseholdGenerator;
use seed_populate_rest::RestPopulateArgs;

pub fn generate_household(config: &SeedConfig, today: NaiveDate) -> anyhow::Result<HouseholdDataset> {
    let household = config
        .validate_household(
            &HouseholdGenerator::REQUIRED_FINANCE,
            &HouseholdGenerator::REQUIRED_CALENDAR,
            &HouseholdGenerator::REQUIRED_ACTIVITIES,
        )
        .context("Seed config cannot drive household generation")?;

    let seed = run_seed(config)?;
    let mut generator = HouseholdGenerator::new(
        household,
        &config.categories.finance,
        &config.categories.calendar,
        &config.categories.activities,
        seed,
    )?;

    tracing::info!("Generating household data for {}", household.id);
    let dataset = generator.generate(today)?;
    tracing::info!("Generated {} household rows", dataset.len());
    Ok(dataset)
}

/// Submit each section to its own table, accounts first. A halted section
/// stops the run before any later section is sent.
pub async fn run_household(args: RestPopulateArgs, today: NaiveDate) -> anyhow::Result<()> {
    let config = load_config(&args.common)?;
    let sections = generate_household(&config, today)?
        .into_sections()
        .context("Failed to serialize household rows")?;

    if args.common.dry_run {
        for (table, rows) in &sections {
            tracing::info!("[DRY-RUN] Would submit {} rows to '{}'", rows.len(), table);
        }
        return Ok(());
    }

    let submitter = rest_submitter(&args.connection, &config)?;
    for (table, rows) in &sections {
        let outcome = submitter.submit(table, rows).await;
        ensure_completed(table, outcome)?;
    }

    tracing::info!("Household data seeded into {} tables", sections.len());
    Ok(())
}
