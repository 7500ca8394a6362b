//! The command surface: every way the board can change.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ActionStatus, Author, Priority, RuleStatus, Severity};

/// A comment to attach when a thread is created.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewComment {
    pub text: String,
    pub author: Author,
}

/// A mutation request. Commands are journaled verbatim and replayed in order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    AddRule {
        module_name: String,
        description: String,
        severity: Severity,
    },
    AddThread {
        rule_id: String,
        title: String,
        #[serde(default)]
        first_comment: Option<NewComment>,
    },
    AddComment {
        thread_id: String,
        text: String,
        author: Author,
    },
    SetActionStatus {
        thread_id: String,
        action_status: ActionStatus,
    },
    SetPriority {
        thread_id: String,
        priority: Priority,
    },
    ToggleThread {
        thread_id: String,
    },
    SetRuleStatus {
        rule_id: String,
        status: RuleStatus,
    },
    MarkRuleNa {
        rule_id: String,
        reason: String,
    },
    MarkThreadRead {
        thread_id: String,
    },
}

impl Command {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddRule { .. } => "add_rule",
            Self::AddThread { .. } => "add_thread",
            Self::AddComment { .. } => "add_comment",
            Self::SetActionStatus { .. } => "set_action_status",
            Self::SetPriority { .. } => "set_priority",
            Self::ToggleThread { .. } => "toggle_thread",
            Self::SetRuleStatus { .. } => "set_rule_status",
            Self::MarkRuleNa { .. } => "mark_rule_na",
            Self::MarkThreadRead { .. } => "mark_thread_read",
        }
    }
}

/// What a successfully applied command changed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum Change {
    RuleCreated { rule_id: String },
    ThreadCreated { thread_id: String, comment_id: Option<String> },
    CommentAdded { thread_id: String, comment_id: String },
    ThreadUpdated { thread_id: String },
    RuleUpdated { rule_id: String },
    /// The command carried empty input and was ignored.
    Unchanged,
}

impl Change {
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}
