//! Dependency ordering.
//!
//! Produces a dependency-respecting permutation of a task batch via Kahn's
//! algorithm with a FIFO work queue, so ties keep input order. When the
//! dependency graph contains a cycle the orderer deliberately degrades to
//! the identity permutation — callers treat dependency order as
//! best-effort, never as a failure.
//!
//! # Reference
//! Kahn (1962), "Topological sorting of large networks", CACM 5(11)

use std::collections::{HashMap, HashSet, VecDeque};

use crate::models::Task;

/// Returns task indices in dependency order.
///
/// For every task and every entry in its `depends_on` that names another
/// task in the batch, the named task appears strictly earlier. Dependencies
/// naming no task in the batch are ignored. Among tasks that become ready
/// at the same step, input order is preserved (stable FIFO queue).
///
/// If the graph is cyclic the full ordering is abandoned and the identity
/// permutation is returned instead; the result always has exactly
/// `tasks.len()` entries.
pub fn dependency_order(tasks: &[Task]) -> Vec<usize> {
    let known: HashSet<&str> = tasks.iter().map(|t| t.name.as_str()).collect();

    // In-degree counts each distinct resolvable dependency once, so a name
    // listed twice cannot wedge the queue.
    let mut indegree: Vec<i32> = tasks
        .iter()
        .map(|t| {
            let mut seen = HashSet::new();
            t.depends_on
                .iter()
                .filter(|d| known.contains(d.as_str()) && seen.insert(d.as_str()))
                .count() as i32
        })
        .collect();

    let mut queue: VecDeque<usize> = (0..tasks.len()).filter(|&i| indegree[i] == 0).collect();
    let mut order = Vec::with_capacity(tasks.len());

    while let Some(index) = queue.pop_front() {
        order.push(index);
        let done = tasks[index].name.as_str();
        for (other, task) in tasks.iter().enumerate() {
            if task.depends_on.iter().any(|d| d == done) {
                indegree[other] -= 1;
                if indegree[other] == 0 {
                    queue.push_back(other);
                }
            }
        }
    }

    if order.len() == tasks.len() {
        order
    } else {
        // Cycle (or duplicate names feeding one): fall back to input order.
        (0..tasks.len()).collect()
    }
}

/// Returns the tasks themselves in dependency order.
///
/// Convenience wrapper over [`dependency_order`] with the same cycle
/// fallback.
pub fn order_tasks(tasks: &[Task]) -> Vec<&Task> {
    dependency_order(tasks).into_iter().map(|i| &tasks[i]).collect()
}

/// Builds the name → task lookup table used to resolve dependencies.
///
/// A total view of the batch: later duplicates overwrite earlier ones,
/// matching the "last write wins" lookup semantics of the plan graph.
pub fn task_lookup(tasks: &[Task]) -> HashMap<&str, &Task> {
    tasks.iter().map(|t| (t.name.as_str(), t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(name: &str, deps: &[&str]) -> Task {
        let mut t = Task::new(name);
        t.depends_on = deps.iter().map(|d| d.to_string()).collect();
        t
    }

    fn names(tasks: &[Task], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| tasks[i].name.clone()).collect()
    }

    #[test]
    fn test_chain_ordered() {
        let tasks = vec![task("C", &["B"]), task("B", &["A"]), task("A", &[])];
        let order = dependency_order(&tasks);
        assert_eq!(names(&tasks, &order), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_dependencies_precede_dependents() {
        let tasks = vec![
            task("publish", &["review", "layout"]),
            task("draft", &[]),
            task("review", &["draft"]),
            task("layout", &["draft"]),
            task("research", &[]),
        ];
        let order = dependency_order(&tasks);
        assert_eq!(order.len(), tasks.len());

        let position: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(pos, &i)| (tasks[i].name.as_str(), pos))
            .collect();
        for t in &tasks {
            for dep in &t.depends_on {
                assert!(position[dep.as_str()] < position[t.name.as_str()]);
            }
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        // All independent: result must be the identity.
        let tasks = vec![task("x", &[]), task("y", &[]), task("z", &[])];
        assert_eq!(dependency_order(&tasks), vec![0, 1, 2]);
    }

    #[test]
    fn test_cycle_falls_back_to_input_order() {
        let tasks = vec![task("A", &["B"]), task("B", &["A"]), task("C", &[])];
        let order = dependency_order(&tasks);
        assert_eq!(order, vec![0, 1, 2]);
        assert_eq!(order.len(), tasks.len());
    }

    #[test]
    fn test_self_dependency_falls_back() {
        let tasks = vec![task("A", &["A"]), task("B", &[])];
        assert_eq!(dependency_order(&tasks), vec![0, 1]);
    }

    #[test]
    fn test_dangling_dependency_ignored() {
        let tasks = vec![task("A", &["nonexistent"]), task("B", &["A"])];
        let order = dependency_order(&tasks);
        assert_eq!(names(&tasks, &order), vec!["A", "B"]);
    }

    #[test]
    fn test_duplicate_dependency_entry() {
        let tasks = vec![task("A", &[]), task("B", &["A", "A"])];
        let order = dependency_order(&tasks);
        assert_eq!(names(&tasks, &order), vec!["A", "B"]);
    }

    #[test]
    fn test_order_tasks_wrapper() {
        let tasks = vec![task("B", &["A"]), task("A", &[])];
        let ordered = order_tasks(&tasks);
        assert_eq!(ordered[0].name, "A");
        assert_eq!(ordered[1].name, "B");
    }

    #[test]
    fn test_task_lookup_last_write_wins() {
        let tasks = vec![
            task("dup", &[]).with_hours(1.0),
            task("dup", &[]).with_hours(9.0),
        ];
        let lookup = task_lookup(&tasks);
        assert_eq!(lookup["dup"].hours, 9.0);
    }

    #[test]
    fn test_empty_batch() {
        assert!(dependency_order(&[]).is_empty());
    }
}
