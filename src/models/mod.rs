//! Planning domain models.
//!
//! Core data types for one planning run: the input [`Task`], the output
//! [`CalendarEvent`] and [`ScheduleRow`], and the [`Plan`] container that
//! holds a complete result. All times are naive local wall-clock values
//! (`chrono` naive types); time-zone handling is out of scope.

mod event;
mod plan;
mod task;

pub use event::CalendarEvent;
pub use plan::{Plan, ScheduleRow};
pub use task::{Task, MAX_NAME_CHARS};

pub(crate) use task::clip_name;
