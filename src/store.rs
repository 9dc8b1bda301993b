// In-memory task store with derived views and statistics

use crate::filter::StatusFilter;
use crate::models::{Priority, Task, TaskDraft, TaskStatus, now_ms};
use crate::stats::DashboardStats;
use tracing::debug;
use uuid::Uuid;

/// Session-local task collection, newest first, plus the transient view
/// filter and the in-progress draft.
///
/// Every operation is a total function over the current state: invalid
/// input and unknown ids are silent no-ops, never errors. The store is
/// owned by the single session that created it and holds nothing outside
/// its own fields.
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: StatusFilter,
    draft: TaskDraft,
}

impl TaskStore {
    /// Create an empty store with the default filter and a blank draft.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            filter: StatusFilter::default(),
            draft: TaskDraft::default(),
        }
    }

    /// Create a store pre-populated with the three startup tasks.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.tasks = vec![
            Task {
                id: Uuid::now_v7().to_string(),
                title: "Implement SQL Injection Protection".to_string(),
                description: "Add parameterized queries to all database interactions".to_string(),
                priority: Priority::High,
                status: TaskStatus::Completed,
                created_at: now_ms(),
            },
            Task {
                id: Uuid::now_v7().to_string(),
                title: "Enable CSRF Token Validation".to_string(),
                description: "Implement CSRF tokens on all forms and state-changing operations"
                    .to_string(),
                priority: Priority::High,
                status: TaskStatus::Pending,
                created_at: now_ms(),
            },
            Task {
                id: Uuid::now_v7().to_string(),
                title: "Add Input Sanitization".to_string(),
                description: "Implement comprehensive input validation and sanitization"
                    .to_string(),
                priority: Priority::Medium,
                status: TaskStatus::Pending,
                created_at: now_ms(),
            },
        ];
        store
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Add a new task from a draft, prepending it to the collection.
    ///
    /// A draft whose title trims to empty is silently ignored and leaves
    /// the store unchanged, including the stored draft. On success the
    /// stored draft is reset to its default and the new task's id is
    /// returned.
    pub fn add_task(&mut self, draft: TaskDraft) -> Option<String> {
        if draft.title.trim().is_empty() {
            debug!("Ignoring task submission with blank title");
            return None;
        }

        let task = Task {
            id: Uuid::now_v7().to_string(),
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            status: TaskStatus::Pending,
            created_at: now_ms(),
        };
        let id = task.id.clone();

        debug!(id = %id, title = %task.title, "Added task");
        self.tasks.insert(0, task);
        self.draft = TaskDraft::default();

        Some(id)
    }

    /// Submit the store-owned draft through `add_task`.
    pub fn submit_draft(&mut self) -> Option<String> {
        let draft = std::mem::take(&mut self.draft);
        if draft.title.trim().is_empty() {
            // Keep the user's partial input when the title is blank
            debug!("Ignoring draft submission with blank title");
            self.draft = draft;
            return None;
        }
        self.add_task(draft)
    }

    /// Flip a task between pending and completed.
    ///
    /// Unknown ids are expected (a stale view racing a deletion) and are
    /// ignored. Returns whether a task matched.
    pub fn toggle_task(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.status = task.status.toggled();
                debug!(id, status = task.status.as_str(), "Toggled task");
                true
            }
            None => {
                debug!(id, "Toggle for unknown task id, ignoring");
                false
            }
        }
    }

    /// Remove a task from the collection. Unknown ids are ignored.
    pub fn delete_task(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() < before;
        if removed {
            debug!(id, "Deleted task");
        } else {
            debug!(id, "Delete for unknown task id, ignoring");
        }
        removed
    }

    /// Set the transient view filter.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        debug!(filter = filter.as_str(), "Set filter");
        self.filter = filter;
    }

    // ========================================================================
    // Derived views
    // ========================================================================

    /// Tasks matching the current filter, in collection order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filter.matches(t)).collect()
    }

    /// How many tasks a given filter would show. Used for the filter tabs.
    pub fn count_matching(&self, filter: StatusFilter) -> usize {
        self.tasks.iter().filter(|t| filter.matches(t)).count()
    }

    /// Overview statistics over the full collection, not the filtered view.
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(&self.tasks)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.draft
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
