//! Household records: finance, devices, notes, tasks, calendar events and the
//! household child's baby logs.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::{RecordError, SyntheticRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Checking,
    Savings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceAccount {
    pub id: Uuid,
    pub household_id: String,
    pub created_by: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    pub balance: i64,
    pub currency: String,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceTransaction {
    pub id: Uuid,
    pub household_id: String,
    pub created_by: String,
    pub account_id: Uuid,
    pub category_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: i64,
    pub date: NaiveDate,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeDevice {
    pub id: Uuid,
    pub household_id: String,
    pub created_by: String,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub model_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub household_id: String,
    pub created_by: String,
    pub title: String,
    pub content: String,
    pub is_pinned: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub household_id: String,
    pub created_by: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

/// A calendar entry. The end is always after the start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    id: Uuid,
    household_id: String,
    created_by: String,
    title: String,
    description: String,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    category_id: String,
}

impl CalendarEvent {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        household_id: &str,
        created_by: &str,
        title: &str,
        description: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        category_id: &str,
    ) -> Result<Self, RecordError> {
        if end <= start {
            return Err(RecordError::EmptyInterval { start, end });
        }
        Ok(Self {
            id,
            household_id: household_id.to_string(),
            created_by: created_by.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            start_time: start,
            end_time: end,
            category_id: category_id.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveDateTime {
        self.end_time
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }
}

/// Everything generated for one household, grouped by destination table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HouseholdDataset {
    pub accounts: Vec<FinanceAccount>,
    pub transactions: Vec<FinanceTransaction>,
    pub devices: Vec<HomeDevice>,
    pub notes: Vec<Note>,
    pub tasks: Vec<Task>,
    pub events: Vec<CalendarEvent>,
    pub baby_logs: Vec<SyntheticRecord>,
}

impl HouseholdDataset {
    /// Destination tables in submission order. Accounts come before the
    /// transactions that reference them.
    pub const TABLES: [&'static str; 7] = [
        "finance_accounts",
        "finance_transactions",
        "home_devices",
        "notes",
        "tasks",
        "events",
        "logs",
    ];

    pub fn len(&self) -> usize {
        self.accounts.len()
            + self.transactions.len()
            + self.devices.len()
            + self.notes.len()
            + self.tasks.len()
            + self.events.len()
            + self.baby_logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize each section into `(table, rows)` pairs, in [`Self::TABLES`] order.
    pub fn into_sections(
        self,
    ) -> Result<Vec<(&'static str, Vec<serde_json::Value>)>, serde_json::Error> {
        fn rows<T: Serialize>(items: Vec<T>) -> Result<Vec<serde_json::Value>, serde_json::Error> {
            items.into_iter().map(serde_json::to_value).collect()
        }

        Ok(vec![
            (Self::TABLES[0], rows(self.accounts)?),
            (Self::TABLES[1], rows(self.transactions)?),
            (Self::TABLES[2], rows(self.devices)?),
            (Self::TABLES[3], rows(self.notes)?),
            (Self::TABLES[4], rows(self.tasks)?),
            (Self::TABLES[5], rows(self.events)?),
            (Self::TABLES[6], rows(self.baby_logs)?),
        ])
    }
}
