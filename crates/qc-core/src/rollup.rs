//! Derive a rule's status from the action statuses of its threads.
//!
//! - no threads: status unchanged
//! - any thread in `error`: `fail`
//! - every thread acceptable: `pass`, flagged when no thread has a comment
//! - otherwise: status unchanged

use chrono::{DateTime, Utc};

use crate::board::Board;
use crate::entities::{BusinessRule, Thread};
use crate::enums::{ActionClass, RuleStatus};

/// Outcome of evaluating one rule's threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rollup {
    Unchanged,
    Fail,
    Pass { has_passed_no_comments: bool },
}

#[must_use]
pub fn evaluate<'a>(threads: impl IntoIterator<Item = &'a Thread>) -> Rollup {
    let mut any = false;
    let mut all_acceptable = true;
    let mut comments = 0usize;
    for thread in threads {
        any = true;
        match thread.action_status.class() {
            ActionClass::Dominant => return Rollup::Fail,
            ActionClass::Intermediate => all_acceptable = false,
            ActionClass::Acceptable => {}
        }
        comments += thread.comments.len();
    }

    if !any || !all_acceptable {
        return Rollup::Unchanged;
    }
    Rollup::Pass {
        has_passed_no_comments: comments == 0,
    }
}

/// Write a status onto a rule, touching `updated_at` only on a real change.
///
/// Leaving `not_applicable` clears the N/A marker and reason.
pub(crate) fn set_rule_status(
    rule: &mut BusinessRule,
    status: RuleStatus,
    has_passed_no_comments: bool,
    at: DateTime<Utc>,
) -> bool {
    let is_na = status == RuleStatus::NotApplicable;
    let na_reason = if is_na { rule.na_reason.clone() } else { None };
    let changed = rule.status != status
        || rule.has_passed_no_comments != has_passed_no_comments
        || rule.is_na != is_na
        || rule.na_reason != na_reason;
    if changed {
        rule.status = status;
        rule.has_passed_no_comments = has_passed_no_comments;
        rule.is_na = is_na;
        rule.na_reason = na_reason;
        rule.updated_at = at;
    }
    changed
}

impl Board {
    /// Re-derive the status of `rule_id`. Returns whether the rule changed.
    pub fn roll_up(&mut self, rule_id: &str, at: DateTime<Utc>) -> bool {
        let outcome = evaluate(self.threads.iter().filter(|t| t.rule_id == rule_id));
        let Some(rule) = self.rule_mut(rule_id) else {
            return false;
        };
        let changed = match outcome {
            Rollup::Unchanged => false,
            Rollup::Fail => set_rule_status(rule, RuleStatus::Fail, false, at),
            Rollup::Pass {
                has_passed_no_comments,
            } => set_rule_status(rule, RuleStatus::Pass, has_passed_no_comments, at),
        };
        if changed {
            tracing::debug!(rule_id, status = %rule.status, "rollup changed rule status");
        }
        changed
    }
}
