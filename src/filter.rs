// Status-based view filtering for the task list

use crate::models::{Task, TaskStatus};
use eyre::{Report, eyre};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// View selector narrowing displayed tasks by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    /// Whether a task belongs to this filter's view
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => task.status == TaskStatus::Pending,
            StatusFilter::Completed => task.status == TaskStatus::Completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Pending => "pending",
            StatusFilter::Completed => "completed",
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "pending" => Ok(StatusFilter::Pending),
            "completed" => Ok(StatusFilter::Completed),
            other => Err(eyre!(
                "Unknown filter: {} (expected all|pending|completed)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn task_with_status(status: TaskStatus) -> Task {
        Task {
            id: "task-1".to_string(),
            title: "Test".to_string(),
            description: String::new(),
            priority: Priority::Medium,
            status,
            created_at: 1000,
        }
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(StatusFilter::default(), StatusFilter::All);
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(StatusFilter::All.matches(&task_with_status(TaskStatus::Pending)));
        assert!(StatusFilter::All.matches(&task_with_status(TaskStatus::Completed)));
    }

    #[test]
    fn test_status_filters_match_only_their_status() {
        let pending = task_with_status(TaskStatus::Pending);
        let completed = task_with_status(TaskStatus::Completed);

        assert!(StatusFilter::Pending.matches(&pending));
        assert!(!StatusFilter::Pending.matches(&completed));
        assert!(StatusFilter::Completed.matches(&completed));
        assert!(!StatusFilter::Completed.matches(&pending));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!("Pending".parse::<StatusFilter>().unwrap(), StatusFilter::Pending);
        assert_eq!(
            "completed".parse::<StatusFilter>().unwrap(),
            StatusFilter::Completed
        );
        assert!("done".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(StatusFilter::All.to_string(), "all");
        assert_eq!(StatusFilter::Pending.to_string(), "pending");
        assert_eq!(StatusFilter::Completed.to_string(), "completed");
    }
}
