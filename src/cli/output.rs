use serde::Serialize;

use crate::model::task::Task;
use crate::util::unicode::fit_to_width;

// ---------------------------------------------------------------------------
// Reply structs
// ---------------------------------------------------------------------------

/// The result of one session command, rendered as text or JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Reply {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<TaskEntry>>,
    /// Set by `quit`; not part of the output
    #[serde(skip)]
    pub quit: bool,
}

/// A task in a listing. Active tasks carry their 1-based list position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    #[serde(flatten)]
    pub task: Task,
}

impl Reply {
    pub fn ok() -> Self {
        Reply {
            ok: true,
            ..Default::default()
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Reply {
            ok: true,
            message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Reply {
            ok: false,
            message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn quit() -> Self {
        Reply {
            ok: true,
            quit: true,
            ..Default::default()
        }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.task = Some(task);
        self
    }

    pub fn with_tasks(mut self, tasks: Vec<TaskEntry>) -> Self {
        self.tasks = Some(tasks);
        self
    }
}

/// Entries for active tasks, numbered from 1
pub fn positioned<'a>(tasks: impl IntoIterator<Item = (usize, &'a Task)>) -> Vec<TaskEntry> {
    tasks
        .into_iter()
        .map(|(index, task)| TaskEntry {
            position: Some(index + 1),
            task: task.clone(),
        })
        .collect()
}

/// Entries without positions (completed backlog)
pub fn unpositioned<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<TaskEntry> {
    tasks
        .into_iter()
        .map(|task| TaskEntry {
            position: None,
            task: task.clone(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render a reply. Returns an empty string when there is nothing to print.
pub fn render(reply: &Reply, json: bool, name_width: usize) -> String {
    if reply.quit {
        return String::new();
    }
    if json {
        // A struct of strings and bools always serializes
        return serde_json::to_string(reply).unwrap_or_default() + "\n";
    }
    render_text(reply, name_width)
}

fn render_text(reply: &Reply, name_width: usize) -> String {
    let mut out = String::new();
    if let Some(message) = &reply.message {
        if !reply.ok {
            out.push_str("error: ");
        }
        out.push_str(message);
        out.push('\n');
    }
    for entry in reply.tasks.iter().flatten() {
        out.push_str(&format_entry(entry, name_width));
        out.push('\n');
    }
    out
}

/// One listing line: a padded table row for active tasks, a bullet for
/// completed ones.
pub fn format_entry(entry: &TaskEntry, name_width: usize) -> String {
    match entry.position {
        Some(position) => format!(
            "{:>3}. {}  {}  {}",
            position,
            fit_to_width(&entry.task.name, name_width),
            entry.task.due_date,
            entry.task.priority
        ),
        None => format!("- {}", entry.task),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Priority;
    use insta::assert_snapshot;

    fn tasks() -> Vec<Task> {
        vec![
            Task::new("Write report", "2025-01-10", Priority::High),
            Task::new("Buy milk", "2025-01-05", Priority::Low),
        ]
    }

    #[test]
    fn render_list_table() {
        let t = tasks();
        let reply = Reply::ok().with_tasks(positioned(t.iter().enumerate()));
        assert_eq!(
            render(&reply, false, 12),
            "  1. Write report  2025-01-10  High\n  2. Buy milk      2025-01-05  Low\n"
        );
    }

    #[test]
    fn render_truncates_long_names() {
        let t = vec![Task::new("A rather long task name", "2025-03-01", Priority::Medium)];
        let reply = Reply::ok().with_tasks(positioned(t.iter().enumerate()));
        assert_eq!(
            render(&reply, false, 8),
            "  1. A rathe\u{2026}  2025-03-01  Medium\n"
        );
    }

    #[test]
    fn render_completed_bullets() {
        let t = tasks();
        let reply = Reply::message("Completed Tasks:").with_tasks(unpositioned(&t));
        assert_snapshot!(render(&reply, false, 40).trim_end(), @r"
        Completed Tasks:
        - Write report (Due: 2025-01-10, Priority: High)
        - Buy milk (Due: 2025-01-05, Priority: Low)
        ");
    }

    #[test]
    fn render_error_text() {
        let reply = Reply::error("All fields required!");
        assert_eq!(render(&reply, false, 40), "error: All fields required!\n");
    }

    #[test]
    fn render_quit_is_silent() {
        assert_eq!(render(&Reply::quit(), false, 40), "");
        assert_eq!(render(&Reply::quit(), true, 40), "");
    }

    #[test]
    fn render_json_with_task() {
        let reply = Reply::message("Added").with_task(tasks().remove(1));
        assert_eq!(
            render(&reply, true, 40),
            r#"{"ok":true,"message":"Added","task":{"name":"Buy milk","due_date":"2025-01-05","priority":"Low"}}"#
                .to_string()
                + "\n"
        );
    }

    #[test]
    fn render_json_listing_flattens_entries() {
        let t = tasks();
        let reply = Reply::ok().with_tasks(positioned(t.iter().enumerate().skip(1)));
        let value: serde_json::Value =
            serde_json::from_str(&render(&reply, true, 40)).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["tasks"][0]["position"], 2);
        assert_eq!(value["tasks"][0]["name"], "Buy milk");
        assert_eq!(value["tasks"][0]["priority"], "Low");
    }
}
