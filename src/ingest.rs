//! Task batch ingest.
//!
//! Normalizes loosely-typed task records (JSON from an upstream
//! task-breakdown generator) into well-formed [`Task`] values. The
//! normalization rules are total: missing optional fields fall back to
//! defaults (`why = ""`, `hours = 1.0`, `depends_on = []`) and a record is
//! only excluded when it lacks a usable name. The single hard failure is
//! structural — input that is not a list of record-like objects at all.

use serde_json::Value;
use thiserror::Error;

use crate::models::{clip_name, Task};

/// Errors raised while interpreting raw task input.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The response text contains no `{...}` block to parse.
    #[error("no JSON object found in response text")]
    NoJsonObject,
    /// The extracted block is not valid JSON.
    #[error("malformed JSON in task payload: {0}")]
    Json(#[from] serde_json::Error),
    /// The task collection is not a list of record-like objects.
    #[error("expected a list of task records, found {found}")]
    NotATaskList {
        /// JSON type name of the offending value.
        found: &'static str,
    },
}

/// A normalized task batch.
///
/// `warnings` lists records that were excluded (one entry per record with
/// no usable name); their presence never fails the batch.
#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    /// Normalized tasks, in input order.
    pub tasks: Vec<Task>,
    /// Human-readable notes about excluded records.
    pub warnings: Vec<String>,
}

/// Normalizes a JSON array of task-like records.
///
/// Each record may miss any optional field; defaults are substituted per
/// the rules above. Dependency entries are coerced to strings and
/// de-duplicated preserving first occurrence. A record whose name is empty
/// after trimming is excluded and reported in
/// [`NormalizedBatch::warnings`].
///
/// # Errors
/// [`IngestError::NotATaskList`] when `raw` is not an array, or when an
/// element is not an object.
pub fn normalize_records(raw: &Value) -> Result<NormalizedBatch, IngestError> {
    let records = raw.as_array().ok_or(IngestError::NotATaskList {
        found: json_type_name(raw),
    })?;

    let mut batch = NormalizedBatch::default();
    for (index, record) in records.iter().enumerate() {
        let Some(fields) = record.as_object() else {
            return Err(IngestError::NotATaskList {
                found: json_type_name(record),
            });
        };

        let name = clip_name(fields.get("name").and_then(Value::as_str).unwrap_or(""));
        if name.is_empty() {
            batch
                .warnings
                .push(format!("record {index}: no usable name, excluded"));
            continue;
        }

        let why = fields
            .get("why")
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string();

        let mut depends_on: Vec<String> = Vec::new();
        if let Some(deps) = fields.get("depends_on").and_then(Value::as_array) {
            for dep in deps {
                let dep = match dep {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                if !depends_on.contains(&dep) {
                    depends_on.push(dep);
                }
            }
        }

        let mut task = Task::new(name)
            .with_why(why)
            .with_hours(parse_hours(fields.get("hours")));
        task.depends_on = depends_on;
        batch.tasks.push(task);
    }

    Ok(batch)
}

/// Extracts and normalizes a task batch from free-form generator output.
///
/// Generators often wrap their JSON in code fences or commentary, so this
/// takes the outermost `{...}` span of the text, parses it, and reads the
/// `tasks` array (missing → empty batch) and the optional `assumptions`
/// string.
///
/// # Errors
/// [`IngestError::NoJsonObject`] when no braced span exists,
/// [`IngestError::Json`] when the span is not valid JSON, and the
/// structural errors of [`normalize_records`].
pub fn parse_plan_response(text: &str) -> Result<(NormalizedBatch, String), IngestError> {
    let open = text.find('{').ok_or(IngestError::NoJsonObject)?;
    let close = text
        .rfind('}')
        .filter(|&c| c > open)
        .ok_or(IngestError::NoJsonObject)?;

    let payload: Value = serde_json::from_str(&text[open..=close])?;
    let empty = Value::Array(Vec::new());
    let batch = normalize_records(payload.get("tasks").unwrap_or(&empty))?;
    let assumptions = payload
        .get("assumptions")
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim()
        .to_string();

    Ok((batch, assumptions))
}

/// Coerces an hours field to a finite f64, defaulting to 1.0.
///
/// Accepts JSON numbers and numeric strings. Values that do not parse, or
/// parse to a non-finite number, fall back to the default; zero and
/// negative estimates pass through (the planner degrades them to a minimal
/// allocation).
fn parse_hours(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(h) if h.is_finite() => h,
        _ => 1.0,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
