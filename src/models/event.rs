//! Calendar event model.
//!
//! One event per (task, allocation day) pair, produced by the planner and
//! consumed by the calendar serializer. Times are naive local wall-clock
//! values; time zones are out of scope.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A time-boxed calendar record derived from one allocation.
///
/// Invariant: `end > start`. The planner guarantees this by giving every
/// allocation a strictly positive duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Event start (naive local time).
    pub start: NaiveDateTime,
    /// Event end (naive local time), strictly after `start`.
    pub end: NaiveDateTime,
    /// One-line label, e.g. `"[2.0h] Draft intro"`.
    pub summary: String,
    /// Task rationale. Newlines are flattened at serialization time.
    pub description: String,
    /// Stable identifier. Generated at serialization time when `None`.
    pub uid: Option<String>,
}

impl CalendarEvent {
    /// Creates an event without a UID (one is generated at serialization).
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        summary: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            summary: summary.into(),
            description: description.into(),
            uid: None,
        }
    }

    /// Sets an explicit UID.
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Event duration in hours.
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 3_600_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 6)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_event_builder() {
        let ev = CalendarEvent::new(at(10, 0), at(12, 30), "[2.5h] Draft", "First pass")
            .with_uid("abc-123");

        assert_eq!(ev.summary, "[2.5h] Draft");
        assert_eq!(ev.description, "First pass");
        assert_eq!(ev.uid.as_deref(), Some("abc-123"));
        assert!(ev.end > ev.start);
    }

    #[test]
    fn test_duration_hours() {
        let ev = CalendarEvent::new(at(10, 0), at(12, 30), "x", "");
        assert!((ev.duration_hours() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_uid_defaults_to_none() {
        let ev = CalendarEvent::new(at(10, 0), at(11, 0), "x", "");
        assert!(ev.uid.is_none());
    }
}
