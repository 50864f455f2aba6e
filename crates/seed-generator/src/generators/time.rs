//! Time-of-day and duration generators.

use crate::error::GeneratorError;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rand::Rng;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A half-open range of times of day, `[start, end)`, at minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDayRange {
    start: u32,
    end: u32,
}

impl TimeOfDayRange {
    /// Midnight to midnight.
    pub const WHOLE_DAY: Self = Self {
        start: 0,
        end: MINUTES_PER_DAY,
    };

    /// `[from_h:from_m, to_h:to_m)`. Panics at compile time (in const
    /// contexts) if the range is empty or runs past midnight.
    pub const fn hm(from_h: u32, from_m: u32, to_h: u32, to_m: u32) -> Self {
        let start = from_h * 60 + from_m;
        let end = to_h * 60 + to_m;
        assert!(start < end && end <= MINUTES_PER_DAY);
        Self { start, end }
    }

    /// Whether `time` (truncated to the minute) falls in the range.
    pub fn contains(&self, time: NaiveTime) -> bool {
        let minute = time.num_seconds_from_midnight() / 60;
        (self.start..self.end).contains(&minute)
    }

    /// Random minute of `day` inside the range.
    pub fn sample<R: Rng>(&self, rng: &mut R, day: NaiveDate) -> NaiveDateTime {
        let minute = rng.gen_range(self.start..self.end);
        day.and_time(NaiveTime::MIN) + Duration::minutes(i64::from(minute))
    }
}

/// Random whole-minute duration in `[min_minutes, max_minutes]`.
pub fn random_minutes<R: Rng>(rng: &mut R, min_minutes: i64, max_minutes: i64) -> Duration {
    Duration::minutes(rng.gen_range(min_minutes..=max_minutes))
}

/// Every day from `start` to `end`, both inclusive. Empty if `end < start`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

/// The `[end - days, end]` window used for back-dated history.
///
/// Fails instead of wrapping when the start would fall before the earliest
/// representable date.
pub fn trailing_window(
    end: NaiveDate,
    days: u32,
) -> Result<(NaiveDate, NaiveDate), GeneratorError> {
    let start = end
        .checked_sub_signed(Duration::days(i64::from(days)))
        .ok_or(GeneratorError::WindowOutOfRange { end, days })?;
    Ok((start, end))
}
