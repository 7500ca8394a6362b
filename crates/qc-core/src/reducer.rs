//! Apply commands to a board.
//!
//! Every command either succeeds completely (including the rollup it
//! triggers) or returns an error and leaves the board untouched. Required
//! text that is empty after trimming turns the command into a no-op.

use chrono::{DateTime, Utc};

use crate::board::Board;
use crate::command::{Change, Command, NewComment};
use crate::entities::{BusinessRule, Comment, Thread};
use crate::enums::{ActionStatus, Author, Priority, RuleStatus, Severity, ThreadStatus};
use crate::errors::CoreError;
use crate::ids::{PREFIX_COMMENT, PREFIX_RULE, PREFIX_THREAD, next_id};
use crate::rollup::set_rule_status;

/// Trimmed text, or `None` when nothing is left.
fn clean(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Pure form of [`Board::apply`].
///
/// # Errors
///
/// Returns the same errors as [`Board::apply`].
pub fn reduce(board: &Board, command: &Command, at: DateTime<Utc>) -> Result<(Board, Change), CoreError> {
    let mut next = board.clone();
    let change = next.apply(command, at)?;
    Ok((next, change))
}

impl Board {
    /// Apply `command` at time `at`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` when the command names an unknown rule
    /// or thread, and `CoreError::Validation` when ID or rule numbering is
    /// exhausted. The board is unchanged in both cases.
    pub fn apply(&mut self, command: &Command, at: DateTime<Utc>) -> Result<Change, CoreError> {
        let change = match command {
            Command::AddRule {
                module_name,
                description,
                severity,
            } => self.add_rule(module_name, description, *severity, at)?,
            Command::AddThread {
                rule_id,
                title,
                first_comment,
            } => self.add_thread(rule_id, title, first_comment.as_ref(), at)?,
            Command::AddComment {
                thread_id,
                text,
                author,
            } => self.add_comment(thread_id, text, *author, at)?,
            Command::SetActionStatus {
                thread_id,
                action_status,
            } => self.set_action_status(thread_id, *action_status, at)?,
            Command::SetPriority {
                thread_id,
                priority,
            } => self.set_priority(thread_id, *priority, at)?,
            Command::ToggleThread { thread_id } => self.toggle_thread(thread_id, at)?,
            Command::SetRuleStatus { rule_id, status } => {
                self.override_rule_status(rule_id, *status, at)?
            }
            Command::MarkRuleNa { rule_id, reason } => self.mark_rule_na(rule_id, reason, at)?,
            Command::MarkThreadRead { thread_id } => self.mark_thread_read(thread_id)?,
        };

        if change.is_unchanged() {
            tracing::warn!(command = command.name(), "ignoring command with empty text");
        } else {
            tracing::debug!(command = command.name(), ?change, "applied command");
        }
        Ok(change)
    }

    fn add_rule(
        &mut self,
        module_name: &str,
        description: &str,
        severity: Severity,
        at: DateTime<Utc>,
    ) -> Result<Change, CoreError> {
        let (Some(module_name), Some(description)) = (clean(module_name), clean(description))
        else {
            return Ok(Change::Unchanged);
        };

        let id = next_id(PREFIX_RULE, self.rules.iter().map(|r| r.id.as_str()))?;
        let rule_no = self.next_rule_no()?;
        self.rules.push(BusinessRule {
            id: id.clone(),
            rule_no,
            description,
            module_name,
            category: None,
            qc_comment: None,
            sm_comment: None,
            status: RuleStatus::Open,
            severity,
            is_na: false,
            na_reason: None,
            has_passed_no_comments: false,
            created_at: at,
            updated_at: at,
        });
        Ok(Change::RuleCreated { rule_id: id })
    }

    fn add_thread(
        &mut self,
        rule_id: &str,
        title: &str,
        first_comment: Option<&NewComment>,
        at: DateTime<Utc>,
    ) -> Result<Change, CoreError> {
        if self.rule(rule_id).is_none() {
            return Err(CoreError::rule_not_found(rule_id));
        }
        let Some(title) = clean(title) else {
            return Ok(Change::Unchanged);
        };

        let thread_id = next_id(PREFIX_THREAD, self.threads.iter().map(|t| t.id.as_str()))?;
        let priority = Priority::P2;
        let mut thread = Thread {
            id: thread_id.clone(),
            rule_id: rule_id.to_string(),
            title,
            status: ThreadStatus::Open,
            action_status: ActionStatus::ActionRequired,
            priority,
            due_date: at + priority.sla(),
            created_at: at,
            updated_at: at,
            comments: Vec::new(),
        };

        let comment_id = match first_comment.and_then(|c| clean(&c.text).map(|text| (text, c.author))) {
            Some((text, author)) => {
                let id = self.next_comment_id()?;
                thread.comments.push(Comment {
                    id: id.clone(),
                    thread_id: thread_id.clone(),
                    text,
                    author,
                    timestamp: at,
                    is_read: false,
                });
                Some(id)
            }
            None => None,
        };

        self.threads.push(thread);
        self.roll_up(rule_id, at);
        Ok(Change::ThreadCreated {
            thread_id,
            comment_id,
        })
    }

    fn add_comment(
        &mut self,
        thread_id: &str,
        text: &str,
        author: Author,
        at: DateTime<Utc>,
    ) -> Result<Change, CoreError> {
        if self.thread(thread_id).is_none() {
            return Err(CoreError::thread_not_found(thread_id));
        }
        let Some(text) = clean(text) else {
            return Ok(Change::Unchanged);
        };

        let comment_id = self.next_comment_id()?;
        let thread = self
            .thread_mut(thread_id)
            .ok_or_else(|| CoreError::thread_not_found(thread_id))?;
        thread.comments.push(Comment {
            id: comment_id.clone(),
            thread_id: thread_id.to_string(),
            text,
            author,
            timestamp: at,
            is_read: false,
        });
        thread.updated_at = at;
        let rule_id = thread.rule_id.clone();
        self.refresh_pass_marker(&rule_id, at);
        Ok(Change::CommentAdded {
            thread_id: thread_id.to_string(),
            comment_id,
        })
    }

    /// A passing rule's `has_passed_no_comments` follows its comment count.
    /// The status itself is left alone.
    fn refresh_pass_marker(&mut self, rule_id: &str, at: DateTime<Utc>) {
        let silent = self.comment_count_for_rule(rule_id) == 0;
        if let Some(rule) = self
            .rule_mut(rule_id)
            .filter(|rule| rule.status == RuleStatus::Pass)
        {
            set_rule_status(rule, RuleStatus::Pass, silent, at);
        }
    }

    fn set_action_status(
        &mut self,
        thread_id: &str,
        action_status: ActionStatus,
        at: DateTime<Utc>,
    ) -> Result<Change, CoreError> {
        let thread = self
            .thread_mut(thread_id)
            .ok_or_else(|| CoreError::thread_not_found(thread_id))?;
        thread.action_status = action_status;
        thread.updated_at = at;
        let rule_id = thread.rule_id.clone();
        self.roll_up(&rule_id, at);
        Ok(Change::ThreadUpdated {
            thread_id: thread_id.to_string(),
        })
    }

    fn set_priority(
        &mut self,
        thread_id: &str,
        priority: Priority,
        at: DateTime<Utc>,
    ) -> Result<Change, CoreError> {
        let thread = self
            .thread_mut(thread_id)
            .ok_or_else(|| CoreError::thread_not_found(thread_id))?;
        thread.priority = priority;
        thread.updated_at = at;
        Ok(Change::ThreadUpdated {
            thread_id: thread_id.to_string(),
        })
    }

    fn toggle_thread(&mut self, thread_id: &str, at: DateTime<Utc>) -> Result<Change, CoreError> {
        let thread = self
            .thread_mut(thread_id)
            .ok_or_else(|| CoreError::thread_not_found(thread_id))?;
        thread.status = thread.status.toggled();
        thread.updated_at = at;
        let rule_id = thread.rule_id.clone();
        self.roll_up(&rule_id, at);
        Ok(Change::ThreadUpdated {
            thread_id: thread_id.to_string(),
        })
    }

    fn override_rule_status(
        &mut self,
        rule_id: &str,
        status: RuleStatus,
        at: DateTime<Utc>,
    ) -> Result<Change, CoreError> {
        let silent = self.comment_count_for_rule(rule_id) == 0;
        let rule = self
            .rule_mut(rule_id)
            .ok_or_else(|| CoreError::rule_not_found(rule_id))?;
        let marker = status == RuleStatus::Pass && silent;
        set_rule_status(rule, status, marker, at);
        Ok(Change::RuleUpdated {
            rule_id: rule_id.to_string(),
        })
    }

    fn mark_rule_na(
        &mut self,
        rule_id: &str,
        reason: &str,
        at: DateTime<Utc>,
    ) -> Result<Change, CoreError> {
        let rule = self
            .rule_mut(rule_id)
            .ok_or_else(|| CoreError::rule_not_found(rule_id))?;
        let Some(reason) = clean(reason) else {
            return Ok(Change::Unchanged);
        };
        rule.na_reason = Some(reason);
        rule.is_na = true;
        rule.status = RuleStatus::NotApplicable;
        rule.has_passed_no_comments = false;
        rule.updated_at = at;
        Ok(Change::RuleUpdated {
            rule_id: rule_id.to_string(),
        })
    }

    fn mark_thread_read(&mut self, thread_id: &str) -> Result<Change, CoreError> {
        let thread = self
            .thread_mut(thread_id)
            .ok_or_else(|| CoreError::thread_not_found(thread_id))?;
        for comment in &mut thread.comments {
            comment.is_read = true;
        }
        Ok(Change::ThreadUpdated {
            thread_id: thread_id.to_string(),
        })
    }

    fn next_comment_id(&self) -> Result<String, CoreError> {
        next_id(PREFIX_COMMENT, self.comments().map(|c| c.id.as_str()))
    }
}
