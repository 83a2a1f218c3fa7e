//! Deadline countdown calculation.
//!
//! # Responsibility
//! - Resolve the upcoming weekly deadline instant from a wall-clock "now".
//! - Report the remaining whole hours as a non-negative integer.
//!
//! # Invariants
//! - The deadline is recomputed on every call; nothing is cached or stored.
//! - When "now" falls on the deadline weekday, the deadline resolves to the
//!   current day, even after the deadline hour has passed.
//! - The hour count is total over all inputs; no error paths exist.

use chrono::{Datelike, Days, Local, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Weekday of the recurring editorial deadline.
pub const DEADLINE_WEEKDAY: Weekday = Weekday::Fri;
/// Local wall-clock hour of the recurring editorial deadline.
pub const DEADLINE_HOUR: u32 = 15;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Wall-clock source injected into render calls.
///
/// Production hosts use [`SystemClock`]; tests supply fixed instants.
pub trait Clock {
    /// Returns the current wall-clock time in the server's local time zone.
    fn now_local(&self) -> NaiveDateTime;
}

/// [`Clock`] backed by the real local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Strategy for rounding the raw hour difference to a whole hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Half-hour marks round away from zero: 0.5 -> 1, 1.5 -> 2.
    HalfAwayFromZero,
    /// Half-hour marks round to the nearest even hour: 0.5 -> 0, 1.5 -> 2.
    HalfToEven,
}

impl Default for Rounding {
    fn default() -> Self {
        Self::HalfAwayFromZero
    }
}

impl Rounding {
    /// Stable string id used in configuration payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HalfAwayFromZero => "half_away_from_zero",
            Self::HalfToEven => "half_to_even",
        }
    }
}

/// Computes whole hours remaining until the upcoming deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeadlineCalculator {
    rounding: Rounding,
}

impl DeadlineCalculator {
    /// Creates a calculator with the default rounding strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with an explicit rounding strategy.
    pub fn with_rounding(rounding: Rounding) -> Self {
        Self { rounding }
    }

    /// Returns the active rounding strategy.
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Returns whole hours between `now` and the upcoming deadline.
    ///
    /// # Contract
    /// - The raw difference is rounded per the configured [`Rounding`].
    /// - The result is always non-negative: a deadline that already passed
    ///   on the current weekday surfaces as a positive hour count, not zero.
    pub fn hours_until_deadline(&self, now: NaiveDateTime) -> u64 {
        let deadline = upcoming_deadline(now);
        let raw_hours =
            deadline.signed_duration_since(now).num_seconds() as f64 / SECONDS_PER_HOUR;
        let rounded = match self.rounding {
            Rounding::HalfAwayFromZero => raw_hours.round(),
            Rounding::HalfToEven => raw_hours.round_ties_even(),
        };
        (rounded as i64).unsigned_abs()
    }
}

/// Resolves the upcoming deadline instant for `now`.
///
/// The deadline date is the current day when `now` falls on
/// [`DEADLINE_WEEKDAY`], otherwise the next future occurrence of that
/// weekday. The time of day is always [`DEADLINE_HOUR`]:00:00.
pub fn upcoming_deadline(now: NaiveDateTime) -> NaiveDateTime {
    let today = now.weekday().num_days_from_monday();
    let target = DEADLINE_WEEKDAY.num_days_from_monday();
    let days_ahead = u64::from((target + 7 - today) % 7);
    let date = now
        .date()
        .checked_add_days(Days::new(days_ahead))
        .unwrap_or_else(|| now.date());
    date.and_time(deadline_time())
}

fn deadline_time() -> NaiveTime {
    NaiveTime::from_hms_opt(DEADLINE_HOUR, 0, 0).unwrap_or(NaiveTime::MIN)
}
