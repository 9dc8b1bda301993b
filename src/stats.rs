// Aggregate statistics derived from the full task collection

use crate::models::{Priority, Task};
use serde::{Deserialize, Serialize};

/// Dashboard overview numbers, recomputed on demand from the canonical
/// task sequence rather than stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    /// High-priority tasks still pending. Completed high-priority work
    /// intentionally drops out of this count.
    pub high_priority_tasks: usize,
    /// Completed-task ratio as a rounded integer percentage. Cosmetic; not
    /// a measure of actual security posture.
    pub security_score: u8,
}

impl DashboardStats {
    /// Compute stats over the full collection, ignoring any view filter.
    pub fn compute(tasks: &[Task]) -> Self {
        let total_tasks = tasks.len();
        let completed_tasks = tasks.iter().filter(|t| t.is_completed()).count();
        let high_priority_tasks = tasks
            .iter()
            .filter(|t| t.priority == Priority::High && !t.is_completed())
            .count();

        // max(total, 1) keeps the empty collection at score 0
        let security_score =
            ((completed_tasks as f64 / total_tasks.max(1) as f64) * 100.0).round() as u8;

        Self {
            total_tasks,
            completed_tasks,
            high_priority_tasks,
            security_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    fn task(priority: Priority, status: TaskStatus) -> Task {
        Task {
            id: format!("task-{}", crate::models::now_ms()),
            title: "Test".to_string(),
            description: String::new(),
            priority,
            status,
            created_at: 1000,
        }
    }

    #[test]
    fn test_empty_collection_scores_zero() {
        let stats = DashboardStats::compute(&[]);
        assert_eq!(stats.total_tasks, 0);
        assert_eq!(stats.completed_tasks, 0);
        assert_eq!(stats.high_priority_tasks, 0);
        assert_eq!(stats.security_score, 0);
    }

    #[test]
    fn test_all_completed_scores_hundred() {
        let tasks = vec![
            task(Priority::Low, TaskStatus::Completed),
            task(Priority::High, TaskStatus::Completed),
        ];
        let stats = DashboardStats::compute(&tasks);
        assert_eq!(stats.security_score, 100);
    }

    #[test]
    fn test_score_rounds_to_nearest_integer() {
        // 1/3 -> 33.33 -> 33, 2/3 -> 66.67 -> 67
        let tasks = vec![
            task(Priority::Medium, TaskStatus::Completed),
            task(Priority::Medium, TaskStatus::Pending),
            task(Priority::Medium, TaskStatus::Pending),
        ];
        assert_eq!(DashboardStats::compute(&tasks).security_score, 33);

        let tasks = vec![
            task(Priority::Medium, TaskStatus::Completed),
            task(Priority::Medium, TaskStatus::Completed),
            task(Priority::Medium, TaskStatus::Pending),
        ];
        assert_eq!(DashboardStats::compute(&tasks).security_score, 67);
    }

    #[test]
    fn test_high_priority_counts_only_pending() {
        let tasks = vec![
            task(Priority::High, TaskStatus::Pending),
            task(Priority::High, TaskStatus::Completed),
            task(Priority::Medium, TaskStatus::Pending),
        ];
        let stats = DashboardStats::compute(&tasks);
        assert_eq!(stats.high_priority_tasks, 1);
        // Completed counts every status hit regardless of priority
        assert_eq!(stats.completed_tasks, 1);
    }
}
