//! Batch diagnostics.
//!
//! Structural checks over a normalized task batch, reported before
//! scheduling. Detects:
//! - Duplicate task names
//! - Dependencies naming no task in the batch
//! - Self-dependencies
//! - Dependency cycles
//! - Non-positive hour estimates
//!
//! Advisory only: the planner never requires a clean pass. Cycles degrade
//! to input-order scheduling and dangling references count as satisfied at
//! plan start, so these diagnostics exist to tell the caller the plan is
//! best-effort rather than to stop it.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4

use std::collections::{HashMap, HashSet};

use crate::models::Task;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Diagnostic category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of batch diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share a name; dependency lookups resolve to the later one.
    DuplicateName,
    /// A dependency names no task in the batch.
    DanglingDependency,
    /// A task depends on itself.
    SelfDependency,
    /// The dependency graph contains a cycle.
    CyclicDependency,
    /// A task's estimate is zero or negative.
    NonPositiveHours,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks a task batch for scheduling hazards.
///
/// Returns `Ok(())` when the batch is clean, or every detected issue at
/// once. None of the reported conditions is fatal to the planner.
pub fn check_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for task in tasks {
        if !names.insert(task.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("duplicate task name: {}", task.name),
            ));
        }
        if task.hours <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveHours,
                format!("task '{}' has a non-positive estimate ({} h)", task.name, task.hours),
            ));
        }
    }

    for task in tasks {
        for dep in &task.depends_on {
            if dep == &task.name {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfDependency,
                    format!("task '{}' depends on itself", task.name),
                ));
            } else if !names.contains(dep.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DanglingDependency,
                    format!("task '{}' depends on unknown task '{dep}'", task.name),
                ));
            }
        }
    }

    if let Some(cycle_err) = detect_cycle(tasks) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects a dependency cycle via DFS.
///
/// Edges run dependency → dependent; finding a node already on the
/// recursion stack means a back edge, hence a cycle.
fn detect_cycle(tasks: &[Task]) -> Option<ValidationError> {
    let known: HashSet<&str> = tasks.iter().map(|t| t.name.as_str()).collect();
    let mut adjacent: HashMap<&str, Vec<&str>> = HashMap::new();
    for task in tasks {
        for dep in &task.depends_on {
            if known.contains(dep.as_str()) {
                adjacent
                    .entry(dep.as_str())
                    .or_default()
                    .push(task.name.as_str());
            }
        }
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();
    for &name in &known {
        if !visited.contains(name) && has_cycle_dfs(name, &adjacent, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!("dependency cycle detected involving task '{name}'"),
            ));
        }
    }
    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adjacent: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(next_nodes) = adjacent.get(node) {
        for &next in next_nodes {
            if in_stack.contains(next) {
                return true; // Back edge
            }
            if !visited.contains(next) && has_cycle_dfs(next, adjacent, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(name: &str, deps: &[&str]) -> Task {
        let mut t = Task::new(name).with_hours(1.0);
        t.depends_on = deps.iter().map(|d| d.to_string()).collect();
        t
    }

    #[test]
    fn test_clean_batch() {
        let tasks = vec![
            task("research", &[]),
            task("draft", &["research"]),
            task("revise", &["draft"]),
        ];
        assert!(check_tasks(&tasks).is_ok());
    }

    #[test]
    fn test_duplicate_name() {
        let tasks = vec![task("a", &[]), task("a", &[])];
        let errors = check_tasks(&tasks).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateName));
    }

    #[test]
    fn test_dangling_dependency() {
        let tasks = vec![task("a", &["ghost"])];
        let errors = check_tasks(&tasks).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DanglingDependency
                && e.message.contains("ghost")));
    }

    #[test]
    fn test_self_dependency() {
        let tasks = vec![task("a", &["a"])];
        let errors = check_tasks(&tasks).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::SelfDependency));
    }

    #[test]
    fn test_cycle_detected() {
        let tasks = vec![task("a", &["c"]), task("b", &["a"]), task("c", &["b"])];
        let errors = check_tasks(&tasks).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CyclicDependency));
    }

    #[test]
    fn test_chain_is_not_a_cycle() {
        let tasks = vec![task("a", &[]), task("b", &["a"]), task("c", &["b"])];
        assert!(check_tasks(&tasks).is_ok());
    }

    #[test]
    fn test_non_positive_hours() {
        let tasks = vec![task("a", &[]).with_hours(0.0), task("b", &[]).with_hours(-1.0)];
        let errors = check_tasks(&tasks).unwrap_err();
        let count = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::NonPositiveHours)
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let tasks = vec![
            task("a", &["ghost"]).with_hours(0.0),
            task("a", &[]),
        ];
        let errors = check_tasks(&tasks).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
