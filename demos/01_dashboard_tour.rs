//! Example 01: Dashboard Tour
//!
//! This example walks the seeded dashboard through a full session:
//! add a task, complete it, delete a pending one, and watch the
//! security score move.
//!
//! Run with: cargo run --example 01_dashboard_tour

use eyre::{Result, eyre};
use securetask::{Priority, TaskDraft, TaskStore, render};

fn main() -> Result<()> {
    println!("Secure Task Manager Dashboard Tour");
    println!("==================================\n");

    // Start from the three seeded tasks (2 pending, 1 completed)
    let mut store = TaskStore::seeded();
    println!("1. Seeded dashboard (score 33%):");
    println!("{}", render::dashboard(&store));

    // Add a task: 1 of 4 completed, score drops to 25
    println!("2. Adding a new task...");
    let id = store
        .add_task(TaskDraft::new(
            "Enforce Content Security Policy",
            "Add CSP headers to every response",
            Priority::High,
        ))
        .ok_or_else(|| eyre!("Seed draft unexpectedly rejected"))?;
    println!("   Added task {}", id);
    println!("   Score is now {}%\n", store.stats().security_score);

    // Complete it: 2 of 4, score 50
    println!("3. Completing the new task...");
    store.toggle_task(&id);
    println!("   Score is now {}%\n", store.stats().security_score);

    // Delete a pending task: 2 of 3, score 67
    println!("4. Deleting one pending task...");
    let pending_id = store
        .tasks()
        .iter()
        .find(|t| !t.is_completed())
        .map(|t| t.id.clone())
        .ok_or_else(|| eyre!("Expected a pending task"))?;
    store.delete_task(&pending_id);
    println!("   Score is now {}%\n", store.stats().security_score);

    println!("5. Final dashboard:");
    println!("{}", render::dashboard(&store));

    println!("Example complete!");
    Ok(())
}
