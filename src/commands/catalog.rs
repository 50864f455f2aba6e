//! `catalog`: upsert the configured activity type definitions.

use super::{load_config, rest_client};
use anyhow::Context;
use seed_populate_rest::{CatalogSeeder, RestPopulateArgs, ACTIVITY_TYPES_TABLE};

pub async fn run_catalog(args: RestPopulateArgs) -> anyhow::Result<()> {
    let config = load_config(&args.common)?;
    config
        .validate_catalog()
        .context("Seed config has nothing to upsert")?;

    if args.common.dry_run {
        for definition in &config.activity_types {
            tracing::info!(
                "[DRY-RUN] Would upsert '{}' into '{}'",
                definition.name,
                ACTIVITY_TYPES_TABLE
            );
        }
        return Ok(());
    }

    let seeder = CatalogSeeder::new(rest_client(&args.connection)?);
    let report = seeder.upsert_all(&config.activity_types).await;

    if !report.failed.is_empty() {
        let names: Vec<&str> = report.failed.iter().map(|(name, _)| name.as_str()).collect();
        tracing::warn!("Failed to upsert: {}", names.join(", "));
    }
    Ok(())
}
