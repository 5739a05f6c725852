//! Task model.
//!
//! A task is the unit of plannable work: an estimated effort in hours plus
//! optional named prerequisites. Tasks are normalized once at ingest and are
//! immutable afterwards — scheduling state (completion instants, the running
//! cursor) lives inside the planner for the duration of one run, never on
//! the task itself.

use serde::{Deserialize, Serialize};

/// Maximum stored length of a task name, in characters.
pub const MAX_NAME_CHARS: usize = 120;

/// A unit of plannable work.
///
/// The name is the task's identity within a plan: entries in `depends_on`
/// are matched against other tasks' names by exact string comparison. A
/// reference that matches no task in the batch is kept as written but has
/// no ordering effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Task name (trimmed, at most [`MAX_NAME_CHARS`] characters).
    pub name: String,
    /// Free-text rationale. May be empty.
    pub why: String,
    /// Estimated effort in hours.
    pub hours: f64,
    /// Names of tasks that must complete before this one starts.
    pub depends_on: Vec<String>,
}

impl Task {
    /// Creates a task with a 1.0 h default estimate and no dependencies.
    ///
    /// The name is trimmed and truncated to [`MAX_NAME_CHARS`] characters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: clip_name(&name.into()),
            why: String::new(),
            hours: 1.0,
            depends_on: Vec::new(),
        }
    }

    /// Sets the rationale text.
    pub fn with_why(mut self, why: impl Into<String>) -> Self {
        self.why = why.into();
        self
    }

    /// Sets the estimated hours.
    pub fn with_hours(mut self, hours: f64) -> Self {
        self.hours = hours;
        self
    }

    /// Adds a dependency by task name.
    pub fn with_dependency(mut self, name: impl Into<String>) -> Self {
        self.depends_on.push(name.into());
        self
    }

    /// Whether this task declares any dependencies.
    pub fn has_dependencies(&self) -> bool {
        !self.depends_on.is_empty()
    }
}

/// Trims and truncates a raw name to [`MAX_NAME_CHARS`] characters.
pub(crate) fn clip_name(raw: &str) -> String {
    raw.trim().chars().take(MAX_NAME_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new("Draft intro")
            .with_why("Sets up the argument")
            .with_hours(2.5)
            .with_dependency("Collect sources");

        assert_eq!(task.name, "Draft intro");
        assert_eq!(task.why, "Sets up the argument");
        assert_eq!(task.hours, 2.5);
        assert_eq!(task.depends_on, vec!["Collect sources"]);
        assert!(task.has_dependencies());
    }

    #[test]
    fn test_task_defaults() {
        let task = Task::new("Outline");
        assert_eq!(task.hours, 1.0);
        assert!(task.why.is_empty());
        assert!(!task.has_dependencies());
    }

    #[test]
    fn test_name_trimmed_and_truncated() {
        let task = Task::new("  padded  ");
        assert_eq!(task.name, "padded");

        let long = "x".repeat(500);
        let task = Task::new(long);
        assert_eq!(task.name.chars().count(), MAX_NAME_CHARS);
    }

    #[test]
    fn test_truncation_is_char_safe() {
        // Multi-byte characters must not be split mid-codepoint.
        let long: String = "é".repeat(200);
        let task = Task::new(long);
        assert_eq!(task.name.chars().count(), MAX_NAME_CHARS);
        assert!(task.name.chars().all(|c| c == 'é'));
    }
}
