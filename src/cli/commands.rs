use std::path::PathBuf;

use clap::{Args, ColorChoice, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tl",
    about = concat!("taskledger v", env!("CARGO_PKG_VERSION"), " - tasks, undo history and a completed backlog"),
    long_about = "Reads one command per line from standard input. Type `help` for the command list.",
    version
)]
pub struct Cli {
    /// Print each reply as a JSON object
    #[arg(long)]
    pub json: bool,

    /// Config file (default: $TASKLEDGER_CONFIG, then ~/.config/taskledger/config.toml)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// One line of session input
#[derive(Parser, Debug)]
#[command(
    name = "tl",
    no_binary_name = true,
    disable_version_flag = true,
    color = ColorChoice::Never,
    help_template = "{subcommands}"
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Add a task to the end of the list
    Add(AddArgs),
    /// Replace the task at a list position
    Edit(EditArgs),
    /// Delete the task at a list position
    Delete(PositionArgs),
    /// Mark the task at a list position complete
    Complete(PositionArgs),
    /// Replay the last add, edit or delete
    Undo,
    /// Show the last recorded action
    Peek,
    /// Remove the oldest completed task
    Dequeue,
    /// List open tasks
    List,
    /// List completed tasks, oldest first
    Completed,
    /// Search open tasks by name or due date
    Search(SearchArgs),
    /// Check whether a date is valid YYYY-MM-DD
    CheckDate(CheckDateArgs),
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Task name
    #[arg(allow_hyphen_values = true)]
    pub name: String,
    /// Due date (YYYY-MM-DD)
    pub due: String,
    /// High, Medium or Low
    pub priority: String,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// List position (1-based)
    pub position: usize,
    /// New name
    #[arg(long, allow_hyphen_values = true)]
    pub name: Option<String>,
    /// New due date
    #[arg(long)]
    pub due: Option<String>,
    /// New priority
    #[arg(long)]
    pub priority: Option<String>,
}

#[derive(Args, Debug)]
pub struct PositionArgs {
    /// List position (1-based)
    pub position: usize,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Keyword; several words are joined with single spaces
    #[arg(required = true, num_args = 1..)]
    pub keyword: Vec<String>,
    /// Return every task containing the keyword
    #[arg(short, long, conflicts_with = "first")]
    pub all: bool,
    /// Return the first task equal to the keyword
    #[arg(short, long)]
    pub first: bool,
}

#[derive(Args, Debug)]
pub struct CheckDateArgs {
    pub text: String,
}
