use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Task priority, one of three fixed levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Canonical capitalization used for display and serialization
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when priority text is not one of High, Medium or Low
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid priority '{0}': expected High, Medium or Low")]
pub struct PriorityParseError(pub String);

impl FromStr for Priority {
    type Err = PriorityParseError;

    /// Case-insensitive match against the three levels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("high") {
            Ok(Priority::High)
        } else if trimmed.eq_ignore_ascii_case("medium") {
            Ok(Priority::Medium)
        } else if trimmed.eq_ignore_ascii_case("low") {
            Ok(Priority::Low)
        } else {
            Err(PriorityParseError(s.to_string()))
        }
    }
}

/// A task record. Two tasks with the same fields are the same task as far as
/// the ledger is concerned; there is no separate identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    /// Due date in `YYYY-MM-DD` form
    pub due_date: String,
    pub priority: Priority,
}

impl Task {
    pub fn new(name: impl Into<String>, due_date: impl Into<String>, priority: Priority) -> Self {
        Task {
            name: name.into(),
            due_date: due_date.into(),
            priority,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Due: {}, Priority: {})",
            self.name, self.due_date, self.priority
        )
    }
}
