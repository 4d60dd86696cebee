use crate::model::task::{Priority, PriorityParseError, Task};
use crate::util::date::is_valid_date;

/// Rejected user input. Nothing reaches the ledger when one of these is raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("All fields required!")]
    MissingField,
    #[error("Invalid date format! Use YYYY-MM-DD.")]
    InvalidDate(String),
    #[error("{0}")]
    InvalidPriority(#[from] PriorityParseError),
    #[error("No task at position {0}.")]
    NoSuchPosition(usize),
    #[error("Enter a keyword to search.")]
    EmptyKeyword,
}

/// Build a task from raw field text: fields are trimmed and must be
/// non-empty, the date must be valid, and the priority is normalized to
/// its canonical form.
pub fn build_task(name: &str, due: &str, priority: &str) -> Result<Task, InputError> {
    let (name, due, priority) = (name.trim(), due.trim(), priority.trim());
    if name.is_empty() || due.is_empty() || priority.is_empty() {
        return Err(InputError::MissingField);
    }
    if !is_valid_date(due) {
        return Err(InputError::InvalidDate(due.to_string()));
    }
    let priority: Priority = priority.parse()?;
    Ok(Task::new(name, due, priority))
}

/// Build the replacement for `old`, taking each field from the override when
/// one is given.
pub fn build_edit(
    old: &Task,
    name: Option<&str>,
    due: Option<&str>,
    priority: Option<&str>,
) -> Result<Task, InputError> {
    let priority_text = old.priority.to_string();
    build_task(
        name.unwrap_or(&old.name),
        due.unwrap_or(&old.due_date),
        priority.unwrap_or(&priority_text),
    )
}

/// Resolve a 1-based list position to the task shown there.
pub fn task_at(tasks: &[Task], position: usize) -> Result<&Task, InputError> {
    position
        .checked_sub(1)
        .and_then(|i| tasks.get(i))
        .ok_or(InputError::NoSuchPosition(position))
}
