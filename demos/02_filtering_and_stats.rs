//! Example 02: Filtering and Statistics
//!
//! This example demonstrates the status filter views and how the
//! overview numbers are derived from the full collection, never the
//! filtered one.
//!
//! Run with: cargo run --example 02_filtering_and_stats

use eyre::Result;
use securetask::{Priority, StatusFilter, TaskDraft, TaskStore};

fn main() -> Result<()> {
    println!("Secure Task Manager Filtering Example");
    println!("=====================================\n");

    let mut store = TaskStore::new();

    // Create sample tasks
    println!("Creating sample tasks...\n");
    let drafts = vec![
        TaskDraft::new("Pin TLS certificates", "Mobile clients only", Priority::High),
        TaskDraft::new("Review dependency audit", "cargo audit findings", Priority::Medium),
        TaskDraft::new("Rotate signing keys", "", Priority::High),
        TaskDraft::new("Archive old audit logs", "Everything before Q2", Priority::Low),
    ];
    for draft in drafts {
        let title = draft.title.clone();
        if let Some(id) = store.add_task(draft) {
            println!("  Created: {} - {}", id, title);
        }
    }

    // Complete two of them
    let ids: Vec<String> = store.tasks().iter().map(|t| t.id.clone()).collect();
    store.toggle_task(&ids[1]);
    store.toggle_task(&ids[3]);
    println!();

    // View counts per filter
    println!("1. View counts:");
    for filter in [StatusFilter::All, StatusFilter::Pending, StatusFilter::Completed] {
        println!("   {} -> {} tasks", filter, store.count_matching(filter));
    }
    println!();

    // Pending view, newest first
    println!("2. Pending view (newest first):");
    store.set_filter(StatusFilter::Pending);
    for task in store.visible_tasks() {
        println!("   - {} ({})", task.title, task.priority.as_str());
    }
    println!();

    // Stats always cover the full collection
    println!("3. Stats while the completed view is active:");
    store.set_filter(StatusFilter::Completed);
    let stats = store.stats();
    println!("   Total: {}", stats.total_tasks);
    println!("   Completed: {}", stats.completed_tasks);
    println!("   High priority still pending: {}", stats.high_priority_tasks);
    println!("   Security score: {}%", stats.security_score);

    println!("\nExample complete!");
    Ok(())
}
