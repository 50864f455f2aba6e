//! Household record generator.
//!
//! Generates a month of finance history plus a fixed set of devices, notes,
//! tasks and calendar events for one household. When the household names a
//! child, two weeks of fixed-schedule feeding and sleep logs are added. Dates
//! are relative to the `today` passed to [`HouseholdGenerator::generate`].

use crate::error::GeneratorError;
use crate::generators::numeric::int_in;
use crate::generators::uuid::generate_uuid_v4;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seed_core::{
    AccountKind, CalendarEvent, CategoryTable, CategoryTables, FinanceAccount, FinanceTransaction,
    HomeDevice, HouseholdDataset, HouseholdRef, Note, Priority, SyntheticRecord, Task,
    TransactionKind,
};

/// Days of transaction history, counting today.
pub const TRANSACTION_DAYS: i64 = 30;

pub const SALARY_AMOUNT: i64 = 60_000;
pub const LUNCH_RANGE: (i64, i64) = (100, 500);
pub const SHOPPING_RANGE: (i64, i64) = (500, 2_000);
pub const SHOPPING_PROBABILITY: f64 = 0.5;
pub const CURRENCY: &str = "TWD";

/// Days of baby logs, counting today.
pub const BABY_LOG_DAYS: i64 = 14;
pub const FEED_HOURS: [u32; 6] = [2, 6, 10, 14, 18, 22];
/// Feeds start this many minutes past the hour, at most.
pub const FEED_MAX_MINUTE: i64 = 30;
pub const FEED_VOLUMES_ML: [u32; 3] = [120, 150, 180];
/// Night sleep runs from this hour to `NIGHT_WAKE_HOUR` the next morning.
pub const NIGHT_SLEEP_HOUR: u32 = 20;
pub const NIGHT_WAKE_HOUR: u32 = 7;
pub const NAP_HOURS: [u32; 2] = [10, 14];
pub const NAP_MINUTES: i64 = 90;

const DEVICES: [(&str, &str, &str, &str); 4] = [
    ("Smart Fridge", "appliances", "Samsung", "RF28"),
    ("Living Room TV", "electronics", "Sony", "Bravia"),
    ("Air Purifier", "electronics", "Dyson", "Pure Cool"),
    ("Baby Monitor", "baby", "Nanit", "Pro"),
];

const NOTES: [(&str, &str, bool); 3] = [
    ("Grocery List", "Milk, Eggs, Bread, Diapers", true),
    ("Travel Plan", "Flight at 10 AM, Hotel booked at Hilton", false),
    ("Meeting Notes", "Discuss Q1 Roadmap and Budget", false),
];

/// Title, description, priority, due in N days
const TASKS: [(&str, &str, Priority, Option<i64>); 4] = [
    ("Buy Diapers", "Size 3, Huggies", Priority::High, Some(1)),
    ("Schedule Pediatrician", "Checkup at 6 months", Priority::Medium, Some(3)),
    ("Pay Utility Bills", "Water and Electricity", Priority::High, Some(5)),
    ("Clean Baby Room", "Vacuum and organize toys", Priority::Low, None),
];

/// Calendar categories the fixed events are filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCategory {
    Family,
    Work,
}

impl CalendarCategory {
    pub const ALL: [Self; 2] = [Self::Family, Self::Work];

    /// Name of the category in the calendar table.
    pub fn name(self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Work => "work",
        }
    }
}

/// Title, description, day offset, start hour, end hour, calendar category
const EVENTS: [(&str, &str, i64, u32, u32, CalendarCategory); 3] = [
    ("Family Dinner", "At Grandmas house", 0, 18, 20, CalendarCategory::Family),
    ("Project Deadline", "Submit final report", 2, 9, 10, CalendarCategory::Work),
    ("Baby Swimming", "First lesson", 1, 14, 15, CalendarCategory::Family),
];

/// Resolved finance and calendar identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HouseholdCategories {
    food: String,
    shopping: String,
    salary: String,
    family: String,
    work: String,
}

impl HouseholdCategories {
    fn calendar(&self, category: CalendarCategory) -> &str {
        match category {
            CalendarCategory::Family => &self.family,
            CalendarCategory::Work => &self.work,
        }
    }
}

/// The household child and the activity identifiers its logs use.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BabyLogTarget {
    child_id: String,
    formula: String,
    sleep: String,
}

/// Household generator driven by one seeded RNG.
pub struct HouseholdGenerator {
    household: HouseholdRef,
    categories: HouseholdCategories,
    baby: Option<BabyLogTarget>,
    rng: StdRng,
}

impl HouseholdGenerator {
    /// Finance category names the generator needs.
    pub const REQUIRED_FINANCE: [&'static str; 3] = ["food", "shopping", "salary"];

    /// Calendar category names the generator needs.
    pub const REQUIRED_CALENDAR: [&'static str; 2] = ["family", "work"];

    /// Activity names the baby logs need when the household names a child.
    pub const REQUIRED_ACTIVITIES: [&'static str; 2] = ["formula", "sleep"];

    pub fn new(
        household: &HouseholdRef,
        finance: &CategoryTable,
        calendar: &CategoryTable,
        activities: &CategoryTable,
        seed: u64,
    ) -> Result<Self, GeneratorError> {
        let fin = |name: &str| {
            finance
                .require(CategoryTables::FINANCE, name)
                .map(str::to_string)
        };
        let cal = |name: &str| {
            calendar
                .require(CategoryTables::CALENDAR, name)
                .map(str::to_string)
        };

        let categories = HouseholdCategories {
            food: fin("food")?,
            shopping: fin("shopping")?,
            salary: fin("salary")?,
            family: cal(CalendarCategory::Family.name())?,
            work: cal(CalendarCategory::Work.name())?,
        };

        let baby = match &household.child_id {
            Some(child_id) => {
                let act = |name: &str| {
                    activities
                        .require(CategoryTables::ACTIVITIES, name)
                        .map(str::to_string)
                };
                Some(BabyLogTarget {
                    child_id: child_id.clone(),
                    formula: act("formula")?,
                    sleep: act("sleep")?,
                })
            }
            None => None,
        };

        Ok(Self {
            household: household.clone(),
            categories,
            baby,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Generate the full household dataset as of `today`.
    pub fn generate(&mut self, today: NaiveDate) -> Result<HouseholdDataset, GeneratorError> {
        let checking = self.account("Checking Account", AccountKind::Checking, 50_000, "#3b82f6");
        let savings = self.account("Savings Account", AccountKind::Savings, 120_000, "#10b981");
        let transactions = self.transactions(checking.id, today);

        let devices = DEVICES
            .iter()
            .map(|(name, category, brand, model)| HomeDevice {
                id: generate_uuid_v4(&mut self.rng),
                household_id: self.household.id.clone(),
                created_by: self.household.user_id.clone(),
                name: name.to_string(),
                category: category.to_string(),
                brand: brand.to_string(),
                model_number: model.to_string(),
            })
            .collect();

        let notes = NOTES
            .iter()
            .map(|(title, content, pinned)| Note {
                id: generate_uuid_v4(&mut self.rng),
                household_id: self.household.id.clone(),
                created_by: self.household.user_id.clone(),
                title: title.to_string(),
                content: content.to_string(),
                is_pinned: *pinned,
            })
            .collect();

        let tasks = TASKS
            .iter()
            .map(|(title, description, priority, due_in)| Task {
                id: generate_uuid_v4(&mut self.rng),
                household_id: self.household.id.clone(),
                created_by: self.household.user_id.clone(),
                title: title.to_string(),
                description: description.to_string(),
                priority: *priority,
                due_date: due_in.map(|days| today + Duration::days(days)),
            })
            .collect();

        let mut events = Vec::with_capacity(EVENTS.len());
        for (title, description, offset, from_h, to_h, category) in EVENTS {
            let day = today + Duration::days(offset);
            events.push(CalendarEvent::new(
                generate_uuid_v4(&mut self.rng),
                &self.household.id,
                &self.household.user_id,
                title,
                description,
                at_hour(day, from_h),
                at_hour(day, to_h),
                self.categories.calendar(category),
            )?);
        }

        let baby_logs = match self.baby.clone() {
            Some(target) => self.baby_logs(&target, today)?,
            None => Vec::new(),
        };

        Ok(HouseholdDataset {
            accounts: vec![checking, savings],
            transactions,
            devices,
            notes,
            tasks,
            events,
            baby_logs,
        })
    }

    /// Six formula feeds, a night's sleep and two naps for each of the last
    /// [`BABY_LOG_DAYS`] days.
    fn baby_logs(
        &mut self,
        target: &BabyLogTarget,
        today: NaiveDate,
    ) -> Result<Vec<SyntheticRecord>, GeneratorError> {
        let per_day = FEED_HOURS.len() + 1 + NAP_HOURS.len();
        let mut logs = Vec::with_capacity(BABY_LOG_DAYS as usize * per_day);

        for offset in 0..BABY_LOG_DAYS {
            let date = today - Duration::days(offset);

            for hour in FEED_HOURS {
                let minute = int_in(&mut self.rng, 0, FEED_MAX_MINUTE);
                let at = at_hour(date, hour) + Duration::minutes(minute);
                let volume = FEED_VOLUMES_ML[self.rng.gen_range(0..FEED_VOLUMES_ML.len())];
                logs.push(SyntheticRecord::measured(
                    generate_uuid_v4(&mut self.rng),
                    &target.child_id,
                    &target.formula,
                    at,
                    f64::from(volume),
                    "ml",
                )?);
            }

            logs.push(SyntheticRecord::interval(
                generate_uuid_v4(&mut self.rng),
                &target.child_id,
                &target.sleep,
                at_hour(date, NIGHT_SLEEP_HOUR),
                at_hour(date + Duration::days(1), NIGHT_WAKE_HOUR),
            )?);

            for hour in NAP_HOURS {
                let start = at_hour(date, hour);
                logs.push(SyntheticRecord::interval(
                    generate_uuid_v4(&mut self.rng),
                    &target.child_id,
                    &target.sleep,
                    start,
                    start + Duration::minutes(NAP_MINUTES),
                )?);
            }
        }

        Ok(logs)
    }

    fn account(&mut self, name: &str, kind: AccountKind, balance: i64, color: &str) -> FinanceAccount {
        FinanceAccount {
            id: generate_uuid_v4(&mut self.rng),
            household_id: self.household.id.clone(),
            created_by: self.household.user_id.clone(),
            name: name.to_string(),
            kind,
            balance,
            currency: CURRENCY.to_string(),
            color: color.to_string(),
        }
    }

    fn transactions(&mut self, account_id: uuid::Uuid, today: NaiveDate) -> Vec<FinanceTransaction> {
        let mut transactions = Vec::new();

        for offset in 0..TRANSACTION_DAYS {
            let date = today - Duration::days(offset);

            if date.day() == 1 {
                let salary = self.categories.salary.clone();
                transactions.push(self.transaction(
                    account_id,
                    salary,
                    TransactionKind::Income,
                    SALARY_AMOUNT,
                    date,
                    "Monthly Salary",
                ));
            }

            let lunch = int_in(&mut self.rng, LUNCH_RANGE.0, LUNCH_RANGE.1);
            let food = self.categories.food.clone();
            transactions.push(self.transaction(
                account_id,
                food,
                TransactionKind::Expense,
                lunch,
                date,
                "Lunch",
            ));

            if self.rng.gen_bool(SHOPPING_PROBABILITY) {
                let amount = int_in(&mut self.rng, SHOPPING_RANGE.0, SHOPPING_RANGE.1);
                let shopping = self.categories.shopping.clone();
                transactions.push(self.transaction(
                    account_id,
                    shopping,
                    TransactionKind::Expense,
                    amount,
                    date,
                    "Shopping",
                ));
            }
        }

        transactions
    }

    fn transaction(
        &mut self,
        account_id: uuid::Uuid,
        category_id: String,
        kind: TransactionKind,
        amount: i64,
        date: NaiveDate,
        description: &str,
    ) -> FinanceTransaction {
        FinanceTransaction {
            id: generate_uuid_v4(&mut self.rng),
            household_id: self.household.id.clone(),
            created_by: self.household.user_id.clone(),
            account_id,
            category_id,
            kind,
            amount,
            date,
            description: description.to_string(),
        }
    }
}

fn at_hour(day: NaiveDate, hour: u32) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN) + Duration::hours(i64::from(hour))
}
