//! Seed configuration loaded from YAML.
//!
//! The configuration holds everything that is tied to a particular backend
//! deployment: the subjects records are attached to, the symbolic-name to
//! identifier tables for each category enumeration, the household the
//! household records belong to, and the generation window and batching
//! parameters.
//!
//! Identifiers are opaque strings. They are never discovered at runtime, so a
//! wrong identifier only shows up as a rejected request. [`SeedConfig::audit`]
//! and [`CategoryTables::drift_against`] report suspicious tables without
//! changing them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A category table needed by the command has no entries
    #[error("Category table '{0}' is empty")]
    EmptyCategoryTable(String),

    /// A symbolic category name is not mapped
    #[error("Category '{name}' not found in table '{table}'")]
    MissingCategory { table: String, name: String },

    /// Batch size must be at least one
    #[error("Batch size must be at least 1")]
    InvalidBatchSize,

    /// Generation window longer than the seeder supports
    #[error("Window of {0} days exceeds the maximum of {max} days", max = SeedConfig::MAX_WINDOW_DAYS)]
    InvalidWindow(u32),

    /// No subjects to attach activity records to
    #[error("No subjects configured")]
    NoSubjects,

    /// Household records need a household and a creating user
    #[error("No household configured")]
    MissingHousehold,

    /// No member names to sign up
    #[error("No member names configured")]
    NoMembers,

    /// No activity type definitions to upsert
    #[error("No activity type definitions configured")]
    NoActivityTypes,
}

// ============================================================================
// Category Tables
// ============================================================================

/// Mapping from symbolic category name to opaque identifier.
///
/// Names are matched case-insensitively: `FORMULA` and `formula` are the same
/// entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct CategoryTable {
    entries: BTreeMap<String, String>,
}

impl From<BTreeMap<String, String>> for CategoryTable {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(name, id)| (name.to_lowercase(), id))
                .collect(),
        }
    }
}

impl From<CategoryTable> for BTreeMap<String, String> {
    fn from(table: CategoryTable) -> Self {
        table.entries
    }
}

impl<const N: usize> From<[(&str, &str); N]> for CategoryTable {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .iter()
            .map(|(name, id)| (name.to_string(), id.to_string()))
            .collect::<BTreeMap<_, _>>()
            .into()
    }
}

impl CategoryTable {
    /// Look up the identifier for a symbolic name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Look up the identifier for a symbolic name, failing with
    /// [`ConfigError::MissingCategory`] (labelled with `table`) if it is not mapped.
    pub fn require(&self, table: &str, name: &str) -> Result<&str, ConfigError> {
        self.get(name).ok_or_else(|| ConfigError::MissingCategory {
            table: table.to_string(),
            name: name.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, id)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, i)| (n.as_str(), i.as_str()))
    }
}

/// The category tables known to the seeder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTables {
    /// Activity types for log records
    #[serde(default)]
    pub activities: CategoryTable,

    /// Finance transaction categories
    #[serde(default)]
    pub finance: CategoryTable,

    /// Calendar event categories
    #[serde(default)]
    pub calendar: CategoryTable,
}

impl CategoryTables {
    pub const ACTIVITIES: &'static str = "activities";
    pub const FINANCE: &'static str = "finance";
    pub const CALENDAR: &'static str = "calendar";

    /// Iterate `(table name, table)` pairs.
    pub fn tables(&self) -> [(&'static str, &CategoryTable); 3] {
        [
            (Self::ACTIVITIES, &self.activities),
            (Self::FINANCE, &self.finance),
            (Self::CALENDAR, &self.calendar),
        ]
    }

    /// Check that `table` exists, is non-empty and maps every name in `names`.
    pub fn require_all(&self, table: &str, names: &[&str]) -> Result<(), ConfigError> {
        let category_table = self
            .tables()
            .into_iter()
            .find(|(t, _)| *t == table)
            .map(|(_, ct)| ct)
            .ok_or_else(|| ConfigError::EmptyCategoryTable(table.to_string()))?;

        if category_table.is_empty() {
            return Err(ConfigError::EmptyCategoryTable(table.to_string()));
        }

        for name in names {
            if category_table.get(name).is_none() {
                return Err(ConfigError::MissingCategory {
                    table: table.to_string(),
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Compare against another set of tables (e.g. from a config for another
    /// environment) and report every symbolic name mapped to different
    /// identifiers.
    pub fn drift_against(&self, other: &CategoryTables) -> Vec<CategoryWarning> {
        let mut warnings = Vec::new();
        for ((table, ours), (_, theirs)) in self.tables().into_iter().zip(other.tables()) {
            for (name, id) in ours.iter() {
                if let Some(other_id) = theirs.get(name) {
                    if other_id != id {
                        warnings.push(CategoryWarning::Drift {
                            table: table.to_string(),
                            name: name.to_string(),
                            ours: id.to_string(),
                            theirs: other_id.to_string(),
                        });
                    }
                }
            }
        }
        warnings
    }
}

/// A suspicious category mapping. Reported, never corrected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryWarning {
    /// Identifier is not a well-formed UUID
    MalformedId {
        table: String,
        name: String,
        id: String,
    },

    /// One identifier mapped from several names in the same table
    SharedId {
        table: String,
        id: String,
        names: Vec<String>,
    },

    /// Same symbolic name mapped to different identifiers in two configs
    Drift {
        table: String,
        name: String,
        ours: String,
        theirs: String,
    },
}

impl fmt::Display for CategoryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedId { table, name, id } => {
                write!(f, "{table}.{name}: identifier '{id}' is not a valid UUID")
            }
            Self::SharedId { table, id, names } => {
                write!(f, "{table}: identifier '{id}' is shared by {}", names.join(", "))
            }
            Self::Drift {
                table,
                name,
                ours,
                theirs,
            } => write!(f, "{table}.{name}: '{ours}' here but '{theirs}' in the other config"),
        }
    }
}

// ============================================================================
// Seed Configuration
// ============================================================================

/// A subject (child) that activity records are attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// The household and user that household records are created for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdRef {
    pub id: String,
    pub user_id: String,

    /// Child whose fixed-schedule feeding and sleep logs join the household data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_id: Option<String>,
}

/// Test member accounts to sign up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembersConfig {
    #[serde(default)]
    pub names: Vec<String>,

    #[serde(default = "default_password")]
    pub default_password: String,

    #[serde(default = "default_email_domain")]
    pub email_domain: String,

    #[serde(default = "default_role")]
    pub role: String,
}

impl Default for MembersConfig {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            default_password: default_password(),
            email_domain: default_email_domain(),
            role: default_role(),
        }
    }
}

/// An activity type row upserted by the catalog command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityTypeDefinition {
    pub name: String,
    pub icon_name: String,
    pub color_theme: String,
    pub category: String,
}

fn default_version() -> u32 {
    1
}

fn default_window_days() -> u32 {
    180
}

fn default_batch_size() -> usize {
    200
}

fn default_pause_ms() -> u64 {
    100
}

fn default_password() -> String {
    "Password123!".to_string()
}

fn default_email_domain() -> String {
    "example.com".to_string()
}

fn default_role() -> String {
    "member".to_string()
}

/// Full seed configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Config version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Seed for deterministic generation; `None` seeds from entropy
    #[serde(default)]
    pub seed: Option<u64>,

    /// Number of days before today covered by generated history
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Records per create request
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Pause between requests, in milliseconds
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,

    #[serde(default)]
    pub subjects: Vec<Subject>,

    #[serde(default)]
    pub categories: CategoryTables,

    #[serde(default)]
    pub household: Option<HouseholdRef>,

    #[serde(default)]
    pub members: MembersConfig,

    #[serde(default)]
    pub activity_types: Vec<ActivityTypeDefinition>,
}

impl SeedConfig {
    /// Longest history window accepted, about a century.
    pub const MAX_WINDOW_DAYS: u32 = 36_525;

    /// Load config from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse config from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    fn validate_batching(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize);
        }
        Ok(())
    }

    /// Check everything activity log generation needs.
    pub fn validate_logs(&self, required: &[&str]) -> Result<(), ConfigError> {
        self.validate_batching()?;
        if self.window_days > Self::MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidWindow(self.window_days));
        }
        if self.subjects.is_empty() {
            return Err(ConfigError::NoSubjects);
        }
        self.categories.require_all(CategoryTables::ACTIVITIES, required)
    }

    /// Check everything household generation needs, returning the household.
    /// `activities` is only checked when the household names a child.
    pub fn validate_household(
        &self,
        finance: &[&str],
        calendar: &[&str],
        activities: &[&str],
    ) -> Result<&HouseholdRef, ConfigError> {
        self.validate_batching()?;
        let household = self.household.as_ref().ok_or(ConfigError::MissingHousehold)?;
        self.categories.require_all(CategoryTables::FINANCE, finance)?;
        self.categories.require_all(CategoryTables::CALENDAR, calendar)?;
        if household.child_id.is_some() {
            self.categories.require_all(CategoryTables::ACTIVITIES, activities)?;
        }
        Ok(household)
    }

    pub fn validate_members(&self) -> Result<(), ConfigError> {
        if self.members.names.is_empty() {
            return Err(ConfigError::NoMembers);
        }
        Ok(())
    }

    pub fn validate_catalog(&self) -> Result<(), ConfigError> {
        if self.activity_types.is_empty() {
            return Err(ConfigError::NoActivityTypes);
        }
        Ok(())
    }

    /// Report malformed and shared identifiers in every category table.
    pub fn audit(&self) -> Vec<CategoryWarning> {
        let mut warnings = Vec::new();

        for (table, category_table) in self.categories.tables() {
            let mut by_id: BTreeMap<&str, Vec<String>> = BTreeMap::new();

            for (name, id) in category_table.iter() {
                if uuid::Uuid::parse_str(id).is_err() {
                    warnings.push(CategoryWarning::MalformedId {
                        table: table.to_string(),
                        name: name.to_string(),
                        id: id.to_string(),
                    });
                }
                by_id.entry(id).or_default().push(name.to_string());
            }

            for (id, names) in by_id {
                if names.len() > 1 {
                    warnings.push(CategoryWarning::SharedId {
                        table: table.to_string(),
                        id: id.to_string(),
                        names,
                    });
                }
            }
        }

        warnings
    }
}
