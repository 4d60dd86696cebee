//! The task ledger: active tasks, the action history consumed by undo, and
//! the backlog of completed tasks.
//!
//! Tasks have no identifier. Every operation that targets a task acts on the
//! first value-equal occurrence in the active list.

use std::collections::VecDeque;

use tracing::debug;

use crate::model::task::Task;
use crate::ops::search;
use crate::util::date;

/// Owns the active tasks, the action history (LIFO) and the completed
/// backlog (FIFO). A task in the backlog has always been removed from the
/// active list first.
#[derive(Debug, Clone, Default)]
pub struct TaskLedger {
    active: Vec<Task>,
    history: Vec<Task>,
    completed: VecDeque<Task>,
}

impl TaskLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `task` to the active list and record it in the history.
    pub fn add(&mut self, task: Task) {
        self.history.push(task.clone());
        self.active.push(task);
        debug!(active = self.active.len(), history = self.history.len(), "add");
    }

    /// Replace the first occurrence of `old` with `new`, in place, and record
    /// `new` in the history. Returns false (and records nothing) if `old` is
    /// not in the active list.
    pub fn edit(&mut self, old: &Task, new: Task) -> bool {
        let Some(index) = self.position(old) else {
            debug!("edit: no matching task");
            return false;
        };
        self.history.push(new.clone());
        self.active[index] = new;
        debug!(index, history = self.history.len(), "edit");
        true
    }

    /// Remove the first occurrence of `task` and record it in the history.
    ///
    /// The history entry is pushed even when nothing was removed. Returns
    /// whether an occurrence was removed.
    pub fn delete(&mut self, task: &Task) -> bool {
        let removed = self.remove_first(task);
        self.history.push(task.clone());
        debug!(removed, active = self.active.len(), history = self.history.len(), "delete");
        removed
    }

    /// Remove the first occurrence of `task` and enqueue it on the completed
    /// backlog. The task is enqueued even when it was not active. The history
    /// is left alone, so completion cannot be undone.
    pub fn complete(&mut self, task: &Task) -> bool {
        let removed = self.remove_first(task);
        self.completed.push_back(task.clone());
        debug!(removed, active = self.active.len(), completed = self.completed.len(), "complete");
        removed
    }

    /// Pop the newest history entry and append it to the active list if no
    /// equal task is active.
    ///
    /// This replays the history entry rather than reversing the operation:
    /// undoing an add or an edit finds the task already present and changes
    /// nothing, undoing a delete puts the task back at the end of the list.
    /// Returns the popped entry, `None` when the history is empty.
    pub fn undo(&mut self) -> Option<Task> {
        let last = self.history.pop()?;
        let restored = !self.active.contains(&last);
        if restored {
            self.active.push(last.clone());
        }
        debug!(restored, history = self.history.len(), "undo");
        Some(last)
    }

    /// Newest history entry, if any.
    pub fn peek_last_action(&self) -> Option<&Task> {
        self.history.last()
    }

    /// Remove and return the oldest completed task.
    pub fn dequeue_completed(&mut self) -> Option<Task> {
        let task = self.completed.pop_front();
        debug!(found = task.is_some(), completed = self.completed.len(), "dequeue");
        task
    }

    /// First active task whose name or due date equals `keyword`, ignoring case.
    pub fn search(&self, keyword: &str) -> Option<&Task> {
        search::find_first(&self.active, keyword)
    }

    /// Every active task whose name or due date contains `keyword`, ignoring case.
    pub fn search_all(&self, keyword: &str) -> Vec<&Task> {
        search::find_all(&self.active, keyword)
    }

    /// See [`date::is_valid_date`].
    pub fn is_valid_date(text: &str) -> bool {
        date::is_valid_date(text)
    }

    /// Active tasks in display order
    pub fn active(&self) -> &[Task] {
        &self.active
    }

    /// Completed backlog, oldest first
    pub fn completed(&self) -> impl ExactSizeIterator<Item = &Task> + '_ {
        self.completed.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn position(&self, task: &Task) -> Option<usize> {
        self.active.iter().position(|t| t == task)
    }

    fn remove_first(&mut self, task: &Task) -> bool {
        match self.position(task) {
            Some(index) => {
                self.active.remove(index);
                true
            }
            None => false,
        }
    }
}
