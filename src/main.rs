use clap::Parser;
use eyre::{Context, Result, eyre};
use securetask::{Priority, StatusFilter, TaskStore, render};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "securetask")]
#[command(about = "Secure task manager dashboard for the terminal")]
#[command(version)]
struct Cli {
    /// Start with an empty store instead of the seeded dashboard
    #[arg(long)]
    empty: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// What the command loop should do after a command ran.
enum Outcome {
    Redraw,
    Quiet,
    Quit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so they never interleave with the dashboard
    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut store = if cli.empty {
        TaskStore::new()
    } else {
        TaskStore::seeded()
    };

    println!("{}", render::dashboard(&store));
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().wrap_err("Failed to flush prompt")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .wrap_err("Failed to read command")?;
        if read == 0 {
            break; // EOF
        }

        match run_command(&mut store, line.trim())? {
            Outcome::Redraw => println!("{}", render::dashboard(&store)),
            Outcome::Quiet => {}
            Outcome::Quit => break,
        }
    }

    Ok(())
}

fn run_command(store: &mut TaskStore, line: &str) -> Result<Outcome> {
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    let outcome = match cmd {
        "" => Outcome::Quiet,
        "help" => {
            print_help();
            Outcome::Quiet
        }
        "quit" | "exit" => Outcome::Quit,
        "title" => {
            store.draft_mut().title = rest.to_string();
            Outcome::Redraw
        }
        "desc" => {
            store.draft_mut().description = rest.to_string();
            Outcome::Redraw
        }
        "priority" => match rest.parse::<Priority>() {
            Ok(priority) => {
                store.draft_mut().priority = priority;
                Outcome::Redraw
            }
            Err(e) => hint(e),
        },
        "add" => {
            if store.submit_draft().is_some() {
                Outcome::Redraw
            } else {
                hint(eyre!("A task needs a title first (try: title <text>)"))
            }
        }
        "toggle" => match resolve_visible(store, rest) {
            Ok(id) => {
                store.toggle_task(&id);
                Outcome::Redraw
            }
            Err(e) => hint(e),
        },
        "delete" => match resolve_visible(store, rest) {
            Ok(id) => {
                store.delete_task(&id);
                Outcome::Redraw
            }
            Err(e) => hint(e),
        },
        "filter" => match rest.parse::<StatusFilter>() {
            Ok(filter) => {
                store.set_filter(filter);
                Outcome::Redraw
            }
            Err(e) => hint(e),
        },
        "json" => {
            // Snapshot for wiring up a real backend later
            let snapshot = serde_json::json!({
                "tasks": store.tasks(),
                "stats": store.stats(),
                "filter": store.filter(),
            });
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            Outcome::Quiet
        }
        other => hint(eyre!("Unknown command: {} (try: help)", other)),
    };

    Ok(outcome)
}

/// Resolve a 1-based position in the currently visible list to a task id.
fn resolve_visible(store: &TaskStore, arg: &str) -> Result<String> {
    let n: usize = arg
        .parse()
        .map_err(|_| eyre!("Expected a task number, got: {:?}", arg))?;
    n.checked_sub(1)
        .and_then(|i| store.visible_tasks().get(i).map(|t| t.id.clone()))
        .ok_or_else(|| eyre!("No task {} in the current view", n))
}

fn hint(e: eyre::Report) -> Outcome {
    println!("{}", e);
    Outcome::Quiet
}

fn print_help() {
    println!("Commands:");
    println!("  title <text>                     set the draft title");
    println!("  desc <text>                      set the draft description");
    println!("  priority <low|medium|high>       set the draft priority");
    println!("  add                              submit the draft as a new task");
    println!("  toggle <n>                       toggle task n in the current view");
    println!("  delete <n>                       delete task n in the current view");
    println!("  filter <all|pending|completed>   switch the task view");
    println!("  json                             print a JSON snapshot");
    println!("  help | quit");
}
