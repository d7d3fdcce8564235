//! Command-line front end for a board stored in a directory.
//!
//! Usage:
//!
//! ```text
//! taskboard --data-dir <dir> show
//! taskboard --data-dir <dir> add "Write release notes" --subtask Draft --subtask Review
//! taskboard --data-dir <dir> drop <task-id> target-in-progress-table
//! taskboard --data-dir <dir> move <task-id> done-category
//! taskboard --data-dir <dir> toggle <task-id> <subtask-id>
//! taskboard --data-dir <dir> delete <task-id>
//! taskboard --data-dir <dir> clear
//! ```
//!
//! Every command loads the board, applies one operation, flushes and prints
//! the rendered board.

use std::io::{IsTerminal, Write};
use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use mockable::DefaultClock;
use taskboard::board::{
    adapters::{file::JsonFileBoardStore, render::TemplateRenderer},
    domain::{
        ContainerKey, ContainerTarget, ParsePriorityError, Priority, SubtaskId, TaskId,
        TransferOutcome,
    },
    services::{BoardService, CreateTaskRequest},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type CliService = BoardService<JsonFileBoardStore, TemplateRenderer, DefaultClock>;

#[derive(Debug, Parser)]
#[command(name = "taskboard", about = "Kanban task board")]
struct Cli {
    /// Directory holding the board file.
    #[arg(long, default_value = ".taskboard")]
    data_dir: Utf8PathBuf,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease log verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    quiet: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the board.
    Show,
    /// Create a task.
    Add {
        /// Task title.
        title: String,
        /// Caller-assigned task identifier.
        #[arg(long)]
        id: Option<String>,
        /// Task description.
        #[arg(long, default_value = "")]
        description: String,
        /// Display category.
        #[arg(long, default_value = "")]
        category: String,
        /// Task urgency: low, medium or urgent.
        #[arg(long, value_parser = parse_priority, default_value = "medium")]
        priority: Priority,
        /// Due date.
        #[arg(long, default_value = "")]
        due: String,
        /// Subtask label (repeatable).
        #[arg(long = "subtask")]
        subtasks: Vec<String>,
        /// Starting container identifier.
        #[arg(long, value_parser = parse_container)]
        container: Option<ContainerKey>,
    },
    /// Move a task to the container under a drop zone.
    Drop {
        /// Task identifier.
        task_id: String,
        /// Drop-zone identifier, e.g. `target-done-table`.
        target: String,
    },
    /// Move a task by category selection.
    Move {
        /// Task identifier.
        task_id: String,
        /// Category identifier, e.g. `in-progress-category`.
        category: String,
    },
    /// Flip a subtask's completion flag.
    Toggle {
        /// Task identifier.
        task_id: String,
        /// Subtask identifier.
        subtask_id: String,
    },
    /// Delete a task.
    Delete {
        /// Task identifier.
        task_id: String,
    },
    /// Delete every task.
    Clear,
}

fn parse_priority(value: &str) -> Result<Priority, ParsePriorityError> {
    Priority::try_from(value)
}

fn parse_container(value: &str) -> Result<ContainerKey, String> {
    ContainerTarget::resolve(value)
        .key()
        .ok_or_else(|| format!("unknown container: {value}"))
}

fn init_tracing(verbose: u8, quiet: u8) -> Result<(), BoxError> {
    let default_level = match (quiet, verbose) {
        (2.., _) => "error",
        (1, _) => "warn",
        (0, 3..) => "trace",
        (0, 2) => "debug",
        (0, 1) => "info",
        (0, 0) => "warn",
    };
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }
    Ok(())
}

async fn run(service: &mut CliService, command: Command) -> Result<String, BoxError> {
    let message = match command {
        Command::Show => String::new(),
        Command::Add {
            title,
            id,
            description,
            category,
            priority,
            due,
            subtasks,
            container,
        } => {
            let mut request = CreateTaskRequest::new(title)
                .with_description(description)
                .with_category(category)
                .with_priority(priority)
                .with_created_at(due)
                .with_subtasks(subtasks);
            if let Some(raw_id) = id {
                request = request.with_id(raw_id);
            }
            if let Some(key) = container {
                request = request.in_container(key);
            }
            let task = service.create_task(request).await?;
            format!("created {}", task.id())
        }
        Command::Drop { task_id, target } => {
            let outcome = service.drop_task(&TaskId::parse(task_id)?, &target).await?;
            describe(&outcome)
        }
        Command::Move { task_id, category } => {
            let outcome = service
                .move_to_category(&TaskId::parse(task_id)?, &category)
                .await?;
            describe(&outcome)
        }
        Command::Toggle {
            task_id,
            subtask_id,
        } => {
            let completed = service
                .toggle_subtask(&TaskId::parse(task_id)?, &SubtaskId::from(subtask_id.as_str()))
                .await?;
            format!("subtask {subtask_id} completed: {completed}")
        }
        Command::Delete { task_id } => {
            let removed = service.delete_task(&TaskId::parse(task_id)?).await?;
            format!("deleted {}", removed.id())
        }
        Command::Clear => {
            service.clear_all().await;
            "board cleared".to_owned()
        }
    };
    if let Some(err) = service.last_flush_error() {
        return Err(format!("board changed in memory but was not saved: {err}").into());
    }
    Ok(message)
}

fn describe(outcome: &TransferOutcome) -> String {
    match outcome {
        TransferOutcome::Moved { task_id, to, .. } => format!("moved {task_id} to {}", to.title()),
        TransferOutcome::AlreadyInPlace { task_id, container } => {
            format!("{task_id} already in {}", container.title())
        }
        TransferOutcome::Ignored => "unknown container, nothing changed".to_owned(),
    }
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet)?;

    let store = Arc::new(JsonFileBoardStore::new(cli.data_dir));
    let renderer = Arc::new(TemplateRenderer::new());
    let mut service = BoardService::new(store, Arc::clone(&renderer), Arc::new(DefaultClock));
    service.load().await;

    let message = run(&mut service, cli.command).await?;
    let mut stdout = std::io::stdout().lock();
    if !message.is_empty() {
        writeln!(stdout, "{message}")?;
    }
    if let Some(output) = renderer.last_output() {
        write!(stdout, "{output}")?;
    }
    Ok(())
}
