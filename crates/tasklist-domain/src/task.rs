use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a task, unique for the lifetime of the store that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Callers are expected to pass already-trimmed, non-empty text.
    pub(crate) fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at: Utc::now(),
        }
    }

    pub(crate) fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    pub(crate) fn update_text(&mut self, text: String) {
        self.text = text;
    }
}

/// Trim `raw`, returning `None` when nothing is left.
pub(crate) fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
