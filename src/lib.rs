// securetask - In-memory secure task manager with a terminal dashboard

pub mod filter;
pub mod models;
pub mod render;
pub mod stats;
pub mod store;

// Re-export main types for convenience
pub use filter::StatusFilter;
pub use models::{Priority, Task, TaskDraft, TaskStatus, now_ms};
pub use stats::DashboardStats;
pub use store::TaskStore;
