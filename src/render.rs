// Terminal rendering for the dashboard. Read-only over the store.

use crate::filter::StatusFilter;
use crate::models::{Priority, Task};
use crate::stats::DashboardStats;
use crate::store::TaskStore;
use colored::{ColoredString, Colorize};
use std::fmt::Write;

const APP_TITLE: &str = "Secure Task Manager";
const APP_SUBTITLE: &str = "OWASP Security Implementation Dashboard";
const WIDTH: usize = 72;

/// Render the full dashboard: header, integration notice, overview cards,
/// draft form, filter tabs, task list and status footer.
pub fn dashboard(store: &TaskStore) -> String {
    let stats = store.stats();
    let mut out = String::new();

    let _ = writeln!(out, "{}", "=".repeat(WIDTH));
    let _ = writeln!(out, "{}  {}", APP_TITLE.bold(), score_badge(stats.security_score));
    let _ = writeln!(out, "{}", APP_SUBTITLE.dimmed());

    let _ = writeln!(out, "{}", section("Backend Integration Required"));
    let _ = writeln!(
        out,
        "This dashboard demonstrates OWASP security practices but requires\n\
         backend integration for full authentication, database operations,\n\
         and complete security implementations.  {}",
        badge_warning("Setup Needed")
    );
    let _ = writeln!(out, "  * Secure Database  * Authentication API  * Security Headers");

    let _ = writeln!(out, "{}", section("Overview"));
    let _ = writeln!(out, "{}", overview_line(&stats));

    let _ = writeln!(out, "{}", section("Add Security Task"));
    let draft = store.draft();
    let title = if draft.title.is_empty() { "(empty)" } else { &draft.title };
    let _ = writeln!(out, "Title: {}  Priority: {}", title, draft.priority.as_str());
    if !draft.description.is_empty() {
        let _ = writeln!(out, "Description: {}", draft.description);
    }

    let _ = writeln!(out, "{}", section("Tasks"));
    let _ = writeln!(out, "{}", filter_tabs(store));
    let visible = store.visible_tasks();
    if visible.is_empty() {
        let _ = writeln!(out, "  (no {} tasks)", store.filter());
    } else {
        for (i, task) in visible.iter().enumerate() {
            let _ = writeln!(out, "{}", task_row(i + 1, task));
        }
    }

    let _ = writeln!(out, "{}", section("Status"));
    let _ = writeln!(
        out,
        "HTTPS Enabled | Secure Headers | Encrypted Storage  {}",
        badge_secure("System Secure")
    );
    let _ = writeln!(out, "{}", "=".repeat(WIDTH));

    out
}

/// One-line overview, the terminal rendition of the four stat cards.
pub fn overview_line(stats: &DashboardStats) -> String {
    format!(
        "Total Tasks: {}  |  Completed: {}  |  High Priority: {}  |  Score: {}%",
        stats.total_tasks,
        stats.completed_tasks.to_string().green(),
        stats.high_priority_tasks.to_string().yellow(),
        stats.security_score,
    )
}

/// Filter tabs with per-view counts; the active tab is bracketed.
pub fn filter_tabs(store: &TaskStore) -> String {
    let mut tabs = Vec::new();
    for filter in [StatusFilter::All, StatusFilter::Pending, StatusFilter::Completed] {
        let label = format!("{} ({})", filter, store.count_matching(filter));
        if filter == store.filter() {
            tabs.push(format!("[{}]", label.bold()));
        } else {
            tabs.push(format!(" {} ", label.dimmed()));
        }
    }
    tabs.join("  ")
}

/// A single task entry: numbered title with badges, then description and
/// creation date.
pub fn task_row(index: usize, task: &Task) -> String {
    let title = if task.is_completed() {
        task.title.strikethrough().dimmed()
    } else {
        task.title.normal()
    };

    let mut row = format!("  {}. {} {}", index, title, priority_badge(task.priority));
    if task.is_completed() {
        let _ = write!(row, " {}", badge_secure("Completed"));
    }
    if !task.description.is_empty() {
        let _ = write!(row, "\n     {}", task.description.dimmed());
    }
    let _ = write!(row, "\n     Created: {}", created_date(task.created_at).dimmed());
    row
}

fn section(title: &str) -> String {
    let head = format!("-- {} ", title);
    format!("\n{}{}", head, "-".repeat(WIDTH.saturating_sub(head.len())))
}

fn created_date(ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Score badge banded like the security levels: >= 80 secure, >= 50
/// warning, below that danger.
fn score_badge(score: u8) -> ColoredString {
    let label = format!("[Security Score: {}%]", score);
    match score {
        80..=100 => label.green().bold(),
        50..=79 => label.yellow().bold(),
        _ => label.red().bold(),
    }
}

fn priority_badge(priority: Priority) -> ColoredString {
    match priority {
        Priority::High => "[high]".red(),
        Priority::Medium => "[medium]".yellow(),
        Priority::Low => "[low]".cyan(),
    }
}

fn badge_secure(text: &str) -> ColoredString {
    format!("[{}]", text).green()
}

fn badge_warning(text: &str) -> ColoredString {
    format!("[{}]", text).yellow()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskDraft;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_dashboard_shows_header_and_score() {
        plain();
        let store = TaskStore::seeded();
        let out = dashboard(&store);

        assert!(out.contains("Secure Task Manager"));
        assert!(out.contains("[Security Score: 33%]"));
        assert!(out.contains("Backend Integration Required"));
        assert!(out.contains("System Secure"));
    }

    #[test]
    fn test_dashboard_lists_visible_tasks_with_badges() {
        plain();
        let mut store = TaskStore::seeded();
        let out = dashboard(&store);

        assert!(out.contains("Implement SQL Injection Protection"));
        assert!(out.contains("[high]"));
        assert!(out.contains("[Completed]"));
        assert!(out.contains("all (3)"));
        assert!(out.contains("pending (2)"));
        assert!(out.contains("completed (1)"));

        store.set_filter(StatusFilter::Completed);
        let out = dashboard(&store);
        assert!(out.contains("Implement SQL Injection Protection"));
        assert!(!out.contains("Enable CSRF Token Validation"));
    }

    #[test]
    fn test_dashboard_shows_empty_view_hint() {
        plain();
        let mut store = TaskStore::new();
        store.set_filter(StatusFilter::Completed);
        let out = dashboard(&store);
        assert!(out.contains("(no completed tasks)"));
    }

    #[test]
    fn test_dashboard_shows_draft_form() {
        plain();
        let mut store = TaskStore::new();
        let out = dashboard(&store);
        assert!(out.contains("Title: (empty)  Priority: medium"));

        *store.draft_mut() = TaskDraft::new("Patch OpenSSL", "CVE backlog", crate::models::Priority::High);
        let out = dashboard(&store);
        assert!(out.contains("Title: Patch OpenSSL  Priority: high"));
        assert!(out.contains("Description: CVE backlog"));
    }

    #[test]
    fn test_overview_line_tracks_stats() {
        plain();
        let store = TaskStore::seeded();
        let line = overview_line(&store.stats());
        assert!(line.contains("Total Tasks: 3"));
        assert!(line.contains("Completed: 1"));
        assert!(line.contains("High Priority: 1"));
        assert!(line.contains("Score: 33%"));
    }

    #[test]
    fn test_created_date_formats_epoch_millis() {
        // 2024-01-15T00:00:00Z
        assert_eq!(created_date(1_705_276_800_000), "2024-01-15");
    }
}
