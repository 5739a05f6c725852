//! Deadline-driven task planning.
//!
//! Turns an unordered batch of tasks — each with an estimated effort in
//! hours and optional named prerequisites — into a weekday-only, day-by-day
//! schedule bounded by a start instant, a due instant, and a weekly hours
//! budget, then renders the result as calendar events, a CSV table, or a
//! Markdown summary.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `CalendarEvent`, `ScheduleRow`, `Plan`
//! - **`ingest`**: Normalizes loosely-typed JSON task records into `Task` values
//! - **`order`**: Dependency ordering with an input-order fallback on cycles
//! - **`validation`**: Advisory batch diagnostics (duplicates, cycles, dangling refs)
//! - **`scheduler`**: `DayBuckets` weekday allocator, `GreedyPlanner`, `PlanKpi`
//! - **`ics`**: Minimal single-file iCalendar serialization
//! - **`report`**: CSV and Markdown rendering of a finished plan
//!
//! # Pipeline
//!
//! raw records → `ingest` → `order` → `scheduler` → `Plan` → `ics` / `report`
//!
//! The crate is purely sequential and reentrant: one scheduling run owns
//! all of its state (a running cursor plus a completion-instant map) and
//! discards it afterwards. Degradations are explicit policy, not errors:
//! cyclic graphs schedule in input order, unknown dependency names count as
//! satisfied at plan start, and a task whose window holds no weekday is
//! forced onto the due date rather than dropped.
//!
//! All times are naive local wall-clock values; time zones are out of scope.

pub mod ics;
pub mod ingest;
pub mod models;
pub mod order;
pub mod report;
pub mod scheduler;
pub mod validation;
