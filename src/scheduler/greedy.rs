//! Greedy forward planner.
//!
//! Walks the task batch in dependency order and assigns each task its
//! day-bucket allocations, tracking a running cursor and a per-task
//! completion map so dependents never begin before their prerequisites
//! finish. Tasks are laid out strictly sequentially, never overlapped,
//! even when the dependency graph would allow overlap — a deliberate
//! simplification for a single-person schedule.

use std::collections::HashMap;

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::models::{CalendarEvent, Plan, ScheduleRow, Task};
use crate::order::dependency_order;

use super::allocator::{DayBuckets, HOURS_EPS};

/// Default first working hour of a day.
pub const DEFAULT_DAY_START_HOUR: u32 = 10;

/// Default hour at which a day's work counts as finished.
pub const DEFAULT_DAY_END_HOUR: u32 = 18;

/// Duration of the degraded allocation for a non-positive estimate, in hours.
const MIN_BLOCK_HOURS: f64 = 0.25;

/// Greedy sequential planner.
///
/// Builder-configurable work-day boundaries; events start at the day-start
/// hour and a task counts as complete at the day-end hour of its last
/// allocated day.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use dayplan::models::Task;
/// use dayplan::scheduler::GreedyPlanner;
///
/// let tasks = vec![
///     Task::new("Draft").with_hours(2.0),
///     Task::new("Revise").with_hours(3.0).with_dependency("Draft"),
/// ];
/// let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let due = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap().and_hms_opt(17, 0, 0).unwrap();
///
/// let plan = GreedyPlanner::new().plan(&tasks, start, due, 10.0);
/// assert_eq!(plan.row_count(), 2);
/// assert!(plan.row("Revise").unwrap().first_day >= plan.row("Draft").unwrap().last_day);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyPlanner {
    day_start: NaiveTime,
    day_end: NaiveTime,
}

impl GreedyPlanner {
    /// Creates a planner with the default 10:00–18:00 working day.
    pub fn new() -> Self {
        Self {
            day_start: on_the_hour(DEFAULT_DAY_START_HOUR),
            day_end: on_the_hour(DEFAULT_DAY_END_HOUR),
        }
    }

    /// Sets the hour (0–23) at which daily event blocks begin.
    pub fn with_day_start(mut self, hour: u32) -> Self {
        self.day_start = on_the_hour(hour);
        self
    }

    /// Sets the hour (0–23) marking a day's work as finished.
    pub fn with_day_end(mut self, hour: u32) -> Self {
        self.day_end = on_the_hour(hour);
        self
    }

    /// Schedules the batch between `start` and `due` under a weekly budget.
    ///
    /// Tasks are visited in dependency order (input order when the graph is
    /// cyclic). Each task's earliest start is the later of the running
    /// cursor and the latest completion instant among its resolvable
    /// dependencies; unknown or unscheduled dependencies count as satisfied
    /// at `start`. A task whose window yields no weekday allocation is
    /// forced onto the due date with all of its hours — the plan may then
    /// exceed the daily cap, but no task is ever dropped.
    pub fn plan(
        &self,
        tasks: &[Task],
        start: NaiveDateTime,
        due: NaiveDateTime,
        weekly_hours: f64,
    ) -> Plan {
        let mut plan = Plan::new();
        let mut completed: HashMap<&str, NaiveDateTime> = HashMap::new();
        let mut cursor = start;

        for index in dependency_order(tasks) {
            let task = &tasks[index];

            let deps_done = task
                .depends_on
                .iter()
                .filter_map(|dep| completed.get(dep.as_str()).copied())
                .fold(start, NaiveDateTime::max);
            let task_start = cursor.max(deps_done);

            let mut blocks: Vec<_> =
                DayBuckets::new(task.hours, task_start, due, weekly_hours).collect();
            if blocks.is_empty() {
                // Out of weekdays (or nothing to allocate): force a single
                // same-day block on the due date rather than drop the task.
                let hours = if task.hours > HOURS_EPS {
                    task.hours
                } else {
                    MIN_BLOCK_HOURS
                };
                blocks.push((due.date(), hours));
            }

            let mut first_day = None;
            let mut last_day = None;
            for &(day, hours) in &blocks {
                let block_start = day.and_time(self.day_start);
                let block_end = block_start + hours_duration(hours);
                plan.add_event(CalendarEvent::new(
                    block_start,
                    block_end,
                    format!("[{hours:.1}h] {}", task.name),
                    if task.why.is_empty() { "Task" } else { task.why.as_str() },
                ));
                first_day.get_or_insert(day);
                last_day = Some(day);
            }

            if let Some(day) = last_day {
                let done = day.and_time(self.day_end);
                completed.insert(task.name.as_str(), done);
                cursor = done;
            }

            plan.add_row(ScheduleRow {
                name: task.name.clone(),
                hours: task.hours,
                first_day,
                last_day,
                notes: task.why.clone(),
            });
        }

        plan
    }
}

impl Default for GreedyPlanner {
    fn default() -> Self {
        Self::new()
    }
}

fn on_the_hour(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour.min(23), 0, 0).unwrap_or(NaiveTime::MIN)
}

fn hours_duration(hours: f64) -> Duration {
    Duration::milliseconds((hours * 3_600_000.0).round() as i64)
}
