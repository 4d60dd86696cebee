use std::io::{self, BufRead, IsTerminal, Write};

use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;

use crate::cli::commands::*;
use crate::cli::input::{self, InputError};
use crate::cli::output::{self, Reply, positioned, unpositioned};
use crate::io::config_io;
use crate::model::config::{Config, SearchMode};
use crate::ops::ledger::TaskLedger;
use crate::util::date::is_valid_date;

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Load config, then run a session over stdin/stdout until EOF or `quit`.
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config(cli.config.as_deref())?;
    let json = cli.json || config.output.json;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut session = Session::new(config, json);
    run_session(&mut session, stdin.lock(), io::stdout().lock(), interactive)?;
    Ok(())
}

/// Feed lines from `input` to the session, writing each reply to `out`.
/// The prompt is printed only when `interactive` is set.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut out: W,
    interactive: bool,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        if interactive {
            write!(out, "{}", session.config.session.prompt)?;
            out.flush()?;
        }
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let Some(reply) = session.execute(&line) else {
            continue;
        };
        out.write_all(session.render(&reply).as_bytes())?;
        if reply.quit {
            break;
        }
    }
    out.flush()
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The command session: owns the one ledger for this process and turns
/// command lines into ledger calls and replies.
pub struct Session {
    ledger: TaskLedger,
    config: Config,
    json: bool,
}

impl Session {
    pub fn new(config: Config, json: bool) -> Self {
        Session {
            ledger: TaskLedger::new(),
            config,
            json,
        }
    }

    pub fn ledger(&self) -> &TaskLedger {
        &self.ledger
    }

    pub fn render(&self, reply: &Reply) -> String {
        output::render(reply, self.json, self.config.output.name_width)
    }

    /// Execute one line of input. Blank lines and `#` comments yield `None`.
    pub fn execute(&mut self, line: &str) -> Option<Reply> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        let words = match shell_words::split(trimmed) {
            Ok(words) => words,
            Err(e) => return Some(Reply::error(e.to_string())),
        };
        let reply = match SessionLine::try_parse_from(words) {
            Ok(parsed) => self.dispatch(parsed.command),
            Err(e) => parse_error_reply(e),
        };
        Some(reply)
    }

    fn dispatch(&mut self, command: SessionCommand) -> Reply {
        debug!(?command, "dispatch");
        let result = match command {
            SessionCommand::Add(args) => self.cmd_add(args),
            SessionCommand::Edit(args) => self.cmd_edit(args),
            SessionCommand::Delete(args) => self.cmd_delete(args),
            SessionCommand::Complete(args) => self.cmd_complete(args),
            SessionCommand::Undo => Ok(self.cmd_undo()),
            SessionCommand::Peek => Ok(self.cmd_peek()),
            SessionCommand::Dequeue => Ok(self.cmd_dequeue()),
            SessionCommand::List => Ok(self.cmd_list()),
            SessionCommand::Completed => Ok(self.cmd_completed()),
            SessionCommand::Search(args) => self.cmd_search(args),
            SessionCommand::CheckDate(args) => Ok(cmd_check_date(args)),
            SessionCommand::Quit => Ok(Reply::quit()),
        };
        result.unwrap_or_else(|e| {
            debug!(error = %e, "input rejected");
            Reply::error(e.to_string())
        })
    }

    // -----------------------------------------------------------------------
    // Write commands
    // -----------------------------------------------------------------------

    fn cmd_add(&mut self, args: AddArgs) -> Result<Reply, InputError> {
        let task = input::build_task(&args.name, &args.due, &args.priority)?;
        self.ledger.add(task.clone());
        Ok(Reply::message(format!("Added: {task}")).with_task(task))
    }

    fn cmd_edit(&mut self, args: EditArgs) -> Result<Reply, InputError> {
        let old = input::task_at(self.ledger.active(), args.position)?.clone();
        let new = input::build_edit(
            &old,
            args.name.as_deref(),
            args.due.as_deref(),
            args.priority.as_deref(),
        )?;
        if self.ledger.edit(&old, new.clone()) {
            Ok(Reply::message(format!("Edited: {new}")).with_task(new))
        } else {
            Ok(Reply::message("No matching task."))
        }
    }

    fn cmd_delete(&mut self, args: PositionArgs) -> Result<Reply, InputError> {
        let task = input::task_at(self.ledger.active(), args.position)?.clone();
        self.ledger.delete(&task);
        Ok(Reply::message(format!("Deleted: {task}")).with_task(task))
    }

    fn cmd_complete(&mut self, args: PositionArgs) -> Result<Reply, InputError> {
        let task = input::task_at(self.ledger.active(), args.position)?.clone();
        self.ledger.complete(&task);
        Ok(Reply::message(format!("Task completed (enqueued): {task}")).with_task(task))
    }

    fn cmd_undo(&mut self) -> Reply {
        match self.ledger.undo() {
            Some(task) => Reply::message(format!("Undid: {task}")).with_task(task),
            None => Reply::message("Nothing to undo."),
        }
    }

    fn cmd_dequeue(&mut self) -> Reply {
        match self.ledger.dequeue_completed() {
            Some(task) => {
                Reply::message(format!("Removed oldest completed: {task}")).with_task(task)
            }
            None => Reply::message("No completed tasks to dequeue."),
        }
    }

    // -----------------------------------------------------------------------
    // Read commands
    // -----------------------------------------------------------------------

    fn cmd_peek(&self) -> Reply {
        match self.ledger.peek_last_action() {
            Some(task) => Reply::message(format!("Last action: {task}")).with_task(task.clone()),
            None => Reply::message("Stack is empty."),
        }
    }

    fn cmd_list(&self) -> Reply {
        let active = self.ledger.active();
        if active.is_empty() {
            return Reply::message("No tasks.").with_tasks(Vec::new());
        }
        Reply::ok().with_tasks(positioned(active.iter().enumerate()))
    }

    fn cmd_completed(&self) -> Reply {
        if self.ledger.completed().len() == 0 {
            return Reply::message("No completed tasks yet!").with_tasks(Vec::new());
        }
        Reply::message("Completed Tasks:").with_tasks(unpositioned(self.ledger.completed()))
    }

    fn cmd_search(&self, args: SearchArgs) -> Result<Reply, InputError> {
        let keyword = args.keyword.join(" ");
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(InputError::EmptyKeyword);
        }
        let mode = if args.all {
            SearchMode::All
        } else if args.first {
            SearchMode::First
        } else {
            self.config.search.mode
        };

        let reply = match mode {
            SearchMode::First => match self.ledger.search(keyword) {
                Some(task) => Reply::message(format!("Task found: {task}")).with_task(task.clone()),
                None => Reply::message("No matching task."),
            },
            SearchMode::All => {
                let hits = self.ledger.search_all(keyword);
                if hits.is_empty() {
                    Reply::message("No matching task.").with_tasks(Vec::new())
                } else {
                    // Report list positions so hits can be edited or completed
                    let active = self.ledger.active();
                    let entries = active
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| hits.iter().any(|hit| std::ptr::eq(*hit, *t)));
                    let noun = if hits.len() == 1 { "task" } else { "tasks" };
                    Reply::message(format!("Found {} {noun}:", hits.len()))
                        .with_tasks(positioned(entries))
                }
            }
        };
        Ok(reply)
    }
}

fn cmd_check_date(args: CheckDateArgs) -> Reply {
    if is_valid_date(&args.text) {
        Reply::message(format!("Valid date: {}", args.text))
    } else {
        Reply::message(InputError::InvalidDate(args.text).to_string())
    }
}

/// Turn a clap parse failure into a reply. `help` output is a normal reply;
/// anything else keeps only clap's first line.
fn parse_error_reply(e: clap::Error) -> Reply {
    let rendered = e.render().to_string();
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            Reply::message(rendered.trim_end())
        }
        _ => {
            let first = rendered.lines().next().unwrap_or_default();
            Reply::error(first.trim_start_matches("error: "))
        }
    }
}
