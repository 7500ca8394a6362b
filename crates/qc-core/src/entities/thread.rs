use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Comment;
use crate::enums::{ActionStatus, Author, Priority, ThreadStatus};

/// A discussion/finding attached to a business rule.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Thread {
    pub id: String,
    pub rule_id: String,
    pub title: String,
    pub status: ThreadStatus,
    pub action_status: ActionStatus,
    pub priority: Priority,
    /// SLA due date.
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Thread {
    /// Most recent comment written by `author`. Ties keep the earlier entry.
    #[must_use]
    pub fn latest_comment_by(&self, author: Author) -> Option<&Comment> {
        self.comments
            .iter()
            .filter(|comment| comment.author == author)
            .fold(None, |latest: Option<&Comment>, comment| match latest {
                Some(current) if current.timestamp >= comment.timestamp => Some(current),
                _ => Some(comment),
            })
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.comments.iter().filter(|comment| !comment.is_read).count()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.status, ThreadStatus::Open)
    }
}
