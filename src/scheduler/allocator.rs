//! Day-bucket allocation.
//!
//! Spreads a task's estimated hours across weekdays as a lazy, finite
//! sequence of `(date, hours)` buckets. The allocator walks one calendar
//! day at a time from the start date through the due date inclusive,
//! skipping Saturdays and Sundays, and caps each weekday at
//! `max(weekly_hours / 5, 0.5)` so a tiny weekly budget still makes
//! forward progress.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

/// Tolerance below which remaining hours count as fully allocated.
pub const HOURS_EPS: f64 = 1e-6;

/// Floor for the per-weekday cap, in hours.
pub const MIN_DAILY_HOURS: f64 = 0.5;

/// Per-weekday hour cap derived from a weekly budget.
pub fn daily_cap(weekly_hours: f64) -> f64 {
    (weekly_hours / 5.0).max(MIN_DAILY_HOURS)
}

/// Whether a date falls on a working day (Monday through Friday).
pub fn is_weekday(date: NaiveDate) -> bool {
    date.weekday().num_days_from_monday() < 5
}

/// Lazy sequence of `(date, hours)` allocations for one task.
///
/// Finite: ends once the hours are exhausted (within [`HOURS_EPS`]) or the
/// due date is passed. Yields nothing when the window holds no weekday or
/// the total is non-positive; the planner handles that case with a forced
/// due-date allocation. Clone before iterating to restart.
#[derive(Debug, Clone)]
pub struct DayBuckets {
    cursor: NaiveDate,
    due: NaiveDate,
    remaining: f64,
    cap: f64,
}

impl DayBuckets {
    /// Creates an allocator for `total_hours` of work between `start` and
    /// `due` (dates inclusive) under a weekly budget.
    pub fn new(
        total_hours: f64,
        start: NaiveDateTime,
        due: NaiveDateTime,
        weekly_hours: f64,
    ) -> Self {
        Self {
            cursor: start.date(),
            due: due.date(),
            remaining: total_hours,
            cap: daily_cap(weekly_hours),
        }
    }

    /// Hours not yet allocated.
    pub fn remaining_hours(&self) -> f64 {
        self.remaining
    }
}

impl Iterator for DayBuckets {
    type Item = (NaiveDate, f64);

    fn next(&mut self) -> Option<(NaiveDate, f64)> {
        while self.remaining > HOURS_EPS && self.cursor <= self.due {
            let day = self.cursor;
            self.cursor = day.checked_add_days(Days::new(1))?;
            if is_weekday(day) {
                let hours = self.cap.min(self.remaining);
                self.remaining -= hours;
                return Some((day, hours));
            }
        }
        None
    }
}
