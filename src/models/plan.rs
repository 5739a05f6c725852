//! Plan (solution) model.
//!
//! A plan is the complete output of one scheduling run: an ordered list of
//! calendar events (one per task-day allocation) plus one summary row per
//! task. Rows are a pure projection of a task and its allocations.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::CalendarEvent;

/// Per-task summary of a scheduling run.
///
/// Exactly one row exists per input task, even when the task received no
/// allocations — such a row carries empty dates instead of being dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Task name.
    pub name: String,
    /// Estimated hours, as declared on the task.
    pub hours: f64,
    /// Date of the first allocation, if any.
    pub first_day: Option<NaiveDate>,
    /// Date of the last allocation, if any.
    pub last_day: Option<NaiveDate>,
    /// Task rationale.
    pub notes: String,
}

/// A complete schedule: calendar events plus per-task rows.
///
/// Events keep allocation order (task by task, day by day); rows keep
/// dependency order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Calendar events, one per (task, allocation day) pair.
    pub events: Vec<CalendarEvent>,
    /// One summary row per task.
    pub rows: Vec<ScheduleRow>,
}

impl Plan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn add_event(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }

    /// Appends a row.
    pub fn add_row(&mut self, row: ScheduleRow) {
        self.rows.push(row);
    }

    /// Finds the row for a task by name.
    pub fn row(&self, name: &str) -> Option<&ScheduleRow> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// Sum of estimated hours across all rows.
    pub fn total_hours(&self) -> f64 {
        self.rows.iter().map(|r| r.hours).sum()
    }

    /// Earliest allocation date across all rows.
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.rows.iter().filter_map(|r| r.first_day).min()
    }

    /// Latest allocation date across all rows.
    pub fn last_day(&self) -> Option<NaiveDate> {
        self.rows.iter().filter_map(|r| r.last_day).max()
    }

    /// End of the latest event, if any.
    pub fn last_event_end(&self) -> Option<NaiveDateTime> {
        self.events.iter().map(|e| e.end).max()
    }

    /// Number of events.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Number of rows (= number of scheduled tasks).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
