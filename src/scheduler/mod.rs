//! Greedy scheduling and plan metrics.
//!
//! # Algorithm
//!
//! [`GreedyPlanner`] walks the batch in dependency order and feeds each
//! task through [`DayBuckets`], a lazy weekday allocator capped at
//! `max(weekly_hours / 5, 0.5)` hours per day. The result is best-effort,
//! not optimal: cycles degrade to input order and infeasible windows
//! degrade to a forced due-date block, so every task always appears in the
//! output.
//!
//! [`PlanKpi`] condenses a finished plan into headline numbers.

pub mod allocator;
mod greedy;
mod kpi;

pub use allocator::{daily_cap, is_weekday, DayBuckets, HOURS_EPS, MIN_DAILY_HOURS};
pub use greedy::{GreedyPlanner, DEFAULT_DAY_END_HOUR, DEFAULT_DAY_START_HOUR};
pub use kpi::PlanKpi;
