use serde::{Deserialize, Serialize};

use super::{OwnerId, TaskId};

/// One to-do entry.
///
/// `title` is stored as given. Locally created tasks are trimmed before they
/// get here; edited titles may keep surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub owner_id: OwnerId,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>, owner_id: OwnerId) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
            owner_id,
        }
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Flip the completion flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
