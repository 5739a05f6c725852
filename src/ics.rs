//! Minimal iCalendar serialization.
//!
//! Renders a list of events into a single flat VCALENDAR document: fixed
//! header/footer framing one VEVENT block per event, in input order. Local
//! times are written naively (no TZID, no UTC conversion) and the only
//! text treatment is flattening embedded newlines in descriptions —
//! downstream consumers are assumed tolerant. Line folding and full
//! RFC 5545 escaping are out of scope.
//!
//! # Reference
//! RFC 5545, "Internet Calendaring and Scheduling Core Object Specification"

use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;

use crate::models::CalendarEvent;

/// Timestamp layout shared by DTSTAMP/DTSTART/DTEND.
const DT_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Serializer for a named calendar.
///
/// One writer produces one document; the generation timestamp (DTSTAMP)
/// is taken once and shared by every event block.
#[derive(Debug, Clone)]
pub struct CalendarWriter {
    name: String,
    prod_id: String,
}

impl CalendarWriter {
    /// Creates a writer with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prod_id: "-//dayplan//EN".into(),
        }
    }

    /// Overrides the PRODID line.
    pub fn with_prod_id(mut self, prod_id: impl Into<String>) -> Self {
        self.prod_id = prod_id.into();
        self
    }

    /// Serializes the events, stamped with the current UTC time.
    pub fn write(&self, events: &[CalendarEvent]) -> String {
        self.write_at(events, Utc::now().naive_utc())
    }

    /// Serializes the events with an explicit generation timestamp.
    ///
    /// Deterministic given event UIDs; [`write`](Self::write) delegates
    /// here.
    pub fn write_at(&self, events: &[CalendarEvent], generated_at: NaiveDateTime) -> String {
        let stamp = generated_at.format(DT_FORMAT);
        let mut lines: Vec<String> = vec![
            "BEGIN:VCALENDAR".into(),
            "VERSION:2.0".into(),
            format!("PRODID:{}", self.prod_id),
            format!("X-WR-CALNAME:{}", self.name),
        ];

        for event in events {
            let uid = event
                .uid
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string());
            lines.push("BEGIN:VEVENT".into());
            lines.push(format!("UID:{uid}"));
            lines.push(format!("DTSTAMP:{stamp}Z"));
            lines.push(format!("DTSTART:{}", event.start.format(DT_FORMAT)));
            lines.push(format!("DTEND:{}", event.end.format(DT_FORMAT)));
            lines.push(format!("SUMMARY:{}", event.summary));
            lines.push(format!(
                "DESCRIPTION:{}",
                event.description.replace("\r\n", " ").replace('\n', " ")
            ));
            lines.push("END:VEVENT".into());
        }

        lines.push("END:VCALENDAR".into());
        lines.join("\n")
    }
}
