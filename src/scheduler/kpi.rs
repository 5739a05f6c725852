//! Plan summary metrics.
//!
//! Condenses a finished [`Plan`] into the handful of numbers a caller
//! shows next to the schedule: scheduled load, date span, busiest day,
//! and whether everything lands before the due instant.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::Plan;

use super::allocator::daily_cap;

/// Headline metrics for one plan.
#[derive(Debug, Clone)]
pub struct PlanKpi {
    /// Hours actually placed on the calendar (sum of event durations).
    /// May be less than the estimated total when the window overflowed.
    pub scheduled_hours: f64,
    /// Sum of task estimates.
    pub estimated_hours: f64,
    /// Number of tasks.
    pub task_count: usize,
    /// Number of calendar events.
    pub event_count: usize,
    /// First scheduled date.
    pub first_day: Option<NaiveDate>,
    /// Last scheduled date.
    pub last_day: Option<NaiveDate>,
    /// Calendar days from first to last scheduled date, inclusive.
    pub span_days: i64,
    /// Largest single-day load in hours.
    pub peak_day_hours: f64,
    /// Whether the last event ends at or before the due instant.
    pub finishes_by_due: bool,
}

impl PlanKpi {
    /// Computes metrics from a plan and the run's due instant.
    pub fn calculate(plan: &Plan, due: NaiveDateTime) -> Self {
        let mut by_day: HashMap<NaiveDate, f64> = HashMap::new();
        let mut scheduled_hours = 0.0;
        for event in &plan.events {
            let hours = event.duration_hours();
            scheduled_hours += hours;
            *by_day.entry(event.start.date()).or_insert(0.0) += hours;
        }

        let first_day = plan.first_day();
        let last_day = plan.last_day();
        let span_days = match (first_day, last_day) {
            (Some(first), Some(last)) => (last - first).num_days() + 1,
            _ => 0,
        };

        Self {
            scheduled_hours,
            estimated_hours: plan.total_hours(),
            task_count: plan.row_count(),
            event_count: plan.event_count(),
            first_day,
            last_day,
            span_days,
            peak_day_hours: by_day.values().copied().fold(0.0, f64::max),
            finishes_by_due: plan.last_event_end().map_or(true, |end| end <= due),
        }
    }

    /// Whether no day exceeds the cap derived from the weekly budget.
    pub fn within_daily_cap(&self, weekly_hours: f64) -> bool {
        self.peak_day_hours <= daily_cap(weekly_hours) + 1e-9
    }
}
