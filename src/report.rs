//! Tabular and narrative plan rendering.
//!
//! Projects a finished [`Plan`] into the two text surfaces downstream
//! consumers write to disk: a delimited table of schedule rows and a
//! Markdown summary. Both are pure string builders over the plan.

use chrono::NaiveDate;
use std::fmt::Write;

use crate::models::Plan;

/// Header of the schedule table.
pub const CSV_HEADER: &str = "Task,Est. Hours,Start,End,Notes";

/// Renders the plan rows as a CSV table.
///
/// One line per schedule row under [`CSV_HEADER`]; hours are formatted to
/// one decimal and missing dates render as empty fields. Fields containing
/// commas, quotes, or newlines are quoted RFC 4180 style.
pub fn csv_rows(plan: &Plan) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for row in &plan.rows {
        let line = [
            csv_field(&row.name),
            csv_field(&format!("{:.1}", row.hours)),
            csv_field(&date_field(row.first_day)),
            csv_field(&date_field(row.last_day)),
            csv_field(&row.notes),
        ]
        .join(",");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Renders the plan as a Markdown summary.
///
/// Title, due date, weekly budget, estimated total, one bullet per task
/// with its date range, and an optional Assumptions section.
pub fn markdown_summary(
    title: &str,
    due: NaiveDate,
    weekly_hours: f64,
    plan: &Plan,
    assumptions: &str,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Plan: {title}");
    let _ = writeln!(out, "- Due: {due}");
    let _ = writeln!(out, "- Hours/week: {weekly_hours}");
    let _ = writeln!(out, "- Estimated total hours: {:.1}", plan.total_hours());
    out.push('\n');
    out.push_str("## Tasks\n");
    for row in &plan.rows {
        let _ = writeln!(
            out,
            "- **{}** — {:.1}h ({} → {})",
            row.name,
            row.hours,
            date_field(row.first_day),
            date_field(row.last_day),
        );
    }
    if !assumptions.is_empty() {
        out.push('\n');
        out.push_str("## Assumptions\n");
        out.push_str(assumptions);
        out.push('\n');
    }
    out
}

fn date_field(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleRow;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn sample_plan() -> Plan {
        let mut plan = Plan::new();
        plan.add_row(ScheduleRow {
            name: "Collect sources".into(),
            hours: 2.0,
            first_day: Some(day(6)),
            last_day: Some(day(7)),
            notes: "ground the essay".into(),
        });
        plan.add_row(ScheduleRow {
            name: "Draft, revise".into(),
            hours: 3.5,
            first_day: Some(day(8)),
            last_day: Some(day(10)),
            notes: "say \"why\"".into(),
        });
        plan
    }

    #[test]
    fn test_csv_header_and_rows() {
        let csv = csv_rows(&sample_plan());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "Collect sources,2.0,2025-01-06,2025-01-07,ground the essay"
        );
    }

    #[test]
    fn test_csv_quoting() {
        let csv = csv_rows(&sample_plan());
        // Comma in the name and quotes in the notes are escaped.
        assert!(csv.contains("\"Draft, revise\""));
        assert!(csv.contains("\"say \"\"why\"\"\""));
    }

    #[test]
    fn test_csv_empty_dates() {
        let mut plan = Plan::new();
        plan.add_row(ScheduleRow {
            name: "orphan".into(),
            hours: 1.0,
            first_day: None,
            last_day: None,
            notes: String::new(),
        });
        let csv = csv_rows(&plan);
        assert!(csv.lines().nth(1).unwrap().contains("orphan,1.0,,,"));
    }

    #[test]
    fn test_markdown_summary() {
        let md = markdown_summary("Essay", day(17), 10.0, &sample_plan(), "weekday work only");

        assert!(md.starts_with("# Plan: Essay\n"));
        assert!(md.contains("- Due: 2025-01-17"));
        assert!(md.contains("- Hours/week: 10"));
        assert!(md.contains("- Estimated total hours: 5.5"));
        assert!(md.contains("- **Collect sources** — 2.0h (2025-01-06 → 2025-01-07)"));
        assert!(md.contains("## Assumptions\nweekday work only"));
    }

    #[test]
    fn test_markdown_without_assumptions() {
        let md = markdown_summary("Essay", day(17), 10.0, &sample_plan(), "");
        assert!(!md.contains("## Assumptions"));
    }
}
