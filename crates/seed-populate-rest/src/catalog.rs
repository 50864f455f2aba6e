//! Upsert of activity type definitions.

use crate::client::CatalogStore;
use crate::error::SinkError;
use seed_core::ActivityTypeDefinition;
use tracing::{info, warn};

/// Table holding activity type definitions.
pub const ACTIVITY_TYPES_TABLE: &str = "activity_types";

#[derive(Debug, Default)]
pub struct CatalogReport {
    pub inserted: Vec<String>,
    pub updated: Vec<String>,
    pub failed: Vec<(String, SinkError)>,
}

impl CatalogReport {
    pub fn succeeded(&self) -> usize {
        self.inserted.len() + self.updated.len()
    }
}

pub struct CatalogSeeder<C> {
    store: C,
    table: String,
}

impl<C: CatalogStore> CatalogSeeder<C> {
    pub fn new(store: C) -> Self {
        Self {
            store,
            table: ACTIVITY_TYPES_TABLE.to_string(),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn store(&self) -> &C {
        &self.store
    }

    /// Update existing definitions by name and insert the rest.
    ///
    /// A failed definition is recorded in the report; the others still run.
    pub async fn upsert_all(&self, definitions: &[ActivityTypeDefinition]) -> CatalogReport {
        let mut report = CatalogReport::default();

        for definition in definitions {
            match self.upsert(definition).await {
                Ok(true) => {
                    info!("Updated {}", definition.name);
                    report.updated.push(definition.name.clone());
                }
                Ok(false) => {
                    info!("Inserted {}", definition.name);
                    report.inserted.push(definition.name.clone());
                }
                Err(e) => {
                    warn!("Error processing {}: {}", definition.name, e);
                    report.failed.push((definition.name.clone(), e));
                }
            }
        }

        info!(
            "Activity types: {} inserted, {} updated, {} failed",
            report.inserted.len(),
            report.updated.len(),
            report.failed.len()
        );
        report
    }

    /// Returns `true` when an existing row was updated.
    async fn upsert(&self, definition: &ActivityTypeDefinition) -> Result<bool, SinkError> {
        let row = serde_json::to_value(definition)?;
        match self.store.find_id(&self.table, &definition.name).await? {
            Some(id) => {
                self.store.update(&self.table, &id, &row).await?;
                Ok(true)
            }
            None => {
                self.store.insert(&self.table, &row).await?;
                Ok(false)
            }
        }
    }
}
