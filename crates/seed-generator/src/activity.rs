//! Activity log generator.
//!
//! Produces a day-by-day history of feeding, diaper, sleep and temperature
//! records for one subject. Within a day records are emitted in a fixed
//! order: feedings, diapers, night sleep, naps, temperature.

use crate::error::GeneratorError;
use crate::generators::numeric::one_decimal_in;
use crate::generators::time::{days_inclusive, random_minutes, TimeOfDayRange};
use crate::generators::uuid::generate_uuid_v4;
use crate::generators::WeightedChoice;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seed_core::{CategoryTable, CategoryTables, Subject, SyntheticRecord};
use std::ops::RangeInclusive;

/// Per-day generation rules.
pub struct DayPlan;

impl DayPlan {
    pub const FEEDINGS: RangeInclusive<u32> = 6..=8;
    pub const FEEDING_VOLUMES_ML: [u32; 4] = [90, 120, 150, 180];
    pub const FEEDING_UNIT: &'static str = "ml";

    pub const DIAPERS: RangeInclusive<u32> = 6..=8;
    /// Relative weights of pee and poop
    pub const DIAPER_WEIGHTS: (u32, u32) = (2, 1);

    pub const NIGHT_START: TimeOfDayRange = TimeOfDayRange::hm(19, 0, 21, 30);
    pub const NIGHT_MINUTES: RangeInclusive<i64> = 480..=600;

    pub const NAPS: RangeInclusive<u32> = 2..=3;
    pub const NAP_START: TimeOfDayRange = TimeOfDayRange::hm(8, 0, 18, 0);
    pub const NAP_MINUTES: RangeInclusive<i64> = 45..=120;

    pub const TEMPERATURE_PROBABILITY: f64 = 0.2;
    pub const TEMPERATURE_TIME: TimeOfDayRange = TimeOfDayRange::hm(8, 0, 21, 0);
    pub const TEMPERATURE_CELSIUS: (f64, f64) = (36.5, 37.5);
    pub const TEMPERATURE_UNIT: &'static str = "°C";

    /// Fewest records a single day can produce.
    pub const MIN_RECORDS: u32 =
        *Self::FEEDINGS.start() + *Self::DIAPERS.start() + 1 + *Self::NAPS.start();

    /// Most records a single day can produce.
    pub const MAX_RECORDS: u32 =
        *Self::FEEDINGS.end() + *Self::DIAPERS.end() + 1 + *Self::NAPS.end() + 1;
}

/// Resolved activity type identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCategories {
    pub formula: String,
    pub breast: String,
    pub pee: String,
    pub poop: String,
    pub sleep: String,
    pub temperature: String,
}

impl ActivityCategories {
    /// Symbolic names every activity table must map.
    pub const REQUIRED: [&'static str; 6] =
        ["formula", "breast", "pee", "poop", "sleep", "temperature"];

    pub fn from_table(table: &CategoryTable) -> Result<Self, GeneratorError> {
        let label = CategoryTables::ACTIVITIES;
        if table.is_empty() {
            return Err(seed_core::ConfigError::EmptyCategoryTable(label.to_string()).into());
        }
        let id = |name: &str| table.require(label, name).map(str::to_string);
        Ok(Self {
            formula: id("formula")?,
            breast: id("breast")?,
            pee: id("pee")?,
            poop: id("poop")?,
            sleep: id("sleep")?,
            temperature: id("temperature")?,
        })
    }
}

/// Activity log generator driven by one seeded RNG.
pub struct ActivityGenerator {
    categories: ActivityCategories,
    feeding_kind: WeightedChoice<String>,
    feeding_volume: WeightedChoice<u32>,
    diaper_kind: WeightedChoice<String>,
    rng: StdRng,
}

impl ActivityGenerator {
    /// Create a generator for the given activity table.
    ///
    /// Fails if the table is empty or lacks any of
    /// [`ActivityCategories::REQUIRED`].
    pub fn new(table: &CategoryTable, seed: u64) -> Result<Self, GeneratorError> {
        let categories = ActivityCategories::from_table(table)?;

        let feeding_kind =
            WeightedChoice::uniform([categories.formula.clone(), categories.breast.clone()])?;
        let feeding_volume = WeightedChoice::uniform(DayPlan::FEEDING_VOLUMES_ML)?;
        let (pee, poop) = DayPlan::DIAPER_WEIGHTS;
        let diaper_kind = WeightedChoice::new([
            (categories.pee.clone(), pee),
            (categories.poop.clone(), poop),
        ])?;

        Ok(Self {
            categories,
            feeding_kind,
            feeding_volume,
            diaper_kind,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn categories(&self) -> &ActivityCategories {
        &self.categories
    }

    /// Generate every day in `[start, end]` for one subject.
    pub fn generate(
        &mut self,
        subject_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<SyntheticRecord>, GeneratorError> {
        if end < start {
            return Err(GeneratorError::InvalidWindow { start, end });
        }

        let days = (end - start).num_days() as usize + 1;
        let mut records = Vec::with_capacity(days * DayPlan::MAX_RECORDS as usize);
        for day in days_inclusive(start, end) {
            self.generate_day(subject_id, day, &mut records)?;
        }
        Ok(records)
    }

    /// Generate the window for several subjects, one after another.
    pub fn generate_for_subjects(
        &mut self,
        subjects: &[Subject],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<SyntheticRecord>, GeneratorError> {
        if end < start {
            return Err(GeneratorError::InvalidWindow { start, end });
        }

        let mut records = Vec::new();
        for subject in subjects {
            records.extend(self.generate(&subject.id, start, end)?);
        }
        Ok(records)
    }

    /// Append one day of records for `subject_id` to `out`.
    pub fn generate_day(
        &mut self,
        subject_id: &str,
        day: NaiveDate,
        out: &mut Vec<SyntheticRecord>,
    ) -> Result<(), GeneratorError> {
        let rng = &mut self.rng;

        for _ in 0..rng.gen_range(DayPlan::FEEDINGS) {
            let at = TimeOfDayRange::WHOLE_DAY.sample(rng, day);
            let category = self.feeding_kind.sample(rng).clone();
            let volume = *self.feeding_volume.sample(rng);
            let id = generate_uuid_v4(rng);
            out.push(SyntheticRecord::measured(
                id,
                subject_id,
                &category,
                at,
                f64::from(volume),
                DayPlan::FEEDING_UNIT,
            )?);
        }

        for _ in 0..rng.gen_range(DayPlan::DIAPERS) {
            let at = TimeOfDayRange::WHOLE_DAY.sample(rng, day);
            let category = self.diaper_kind.sample(rng).clone();
            let id = generate_uuid_v4(rng);
            out.push(SyntheticRecord::instant(id, subject_id, &category, at));
        }

        let sleep = self.categories.sleep.as_str();

        let night_start = DayPlan::NIGHT_START.sample(rng, day);
        let night_end = night_start
            + random_minutes(
                rng,
                *DayPlan::NIGHT_MINUTES.start(),
                *DayPlan::NIGHT_MINUTES.end(),
            );
        let id = generate_uuid_v4(rng);
        out.push(SyntheticRecord::interval(
            id,
            subject_id,
            sleep,
            night_start,
            night_end,
        )?);

        for _ in 0..rng.gen_range(DayPlan::NAPS) {
            let nap_start = DayPlan::NAP_START.sample(rng, day);
            let nap_end = nap_start
                + random_minutes(rng, *DayPlan::NAP_MINUTES.start(), *DayPlan::NAP_MINUTES.end());
            let id = generate_uuid_v4(rng);
            out.push(SyntheticRecord::interval(
                id, subject_id, sleep, nap_start, nap_end,
            )?);
        }

        if rng.gen_bool(DayPlan::TEMPERATURE_PROBABILITY) {
            let at = DayPlan::TEMPERATURE_TIME.sample(rng, day);
            let (lo, hi) = DayPlan::TEMPERATURE_CELSIUS;
            let celsius = one_decimal_in(rng, lo, hi);
            let id = generate_uuid_v4(rng);
            out.push(SyntheticRecord::measured(
                id,
                subject_id,
                &self.categories.temperature,
                at,
                celsius,
                DayPlan::TEMPERATURE_UNIT,
            )?);
        }

        Ok(())
    }
}
