//! CLI response types returned as JSON by `qcl` commands.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::command::Change;
use crate::entities::{BusinessRule, Thread};
use crate::enums::Author;
use crate::sla::{SlaInfo, UrgencyInfo, sla_info, urgency_info};

/// A rule with its thread and comment counts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RuleView {
    #[serde(flatten)]
    pub rule: BusinessRule,
    pub thread_count: u32,
    pub comment_count: u32,
}

impl RuleView {
    #[must_use]
    pub fn build(board: &Board, rule: &BusinessRule) -> Self {
        Self {
            rule: rule.clone(),
            thread_count: count(board.threads_for_rule(&rule.id).count()),
            comment_count: count(board.comment_count_for_rule(&rule.id)),
        }
    }
}

/// A thread with derived SLA, urgency, and comment facts as of `now`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThreadView {
    #[serde(flatten)]
    pub thread: Thread,
    pub sla: SlaInfo,
    pub urgency: UrgencyInfo,
    pub unread_count: u32,
    pub latest_qc_comment: Option<String>,
    pub latest_sm_comment: Option<String>,
}

impl ThreadView {
    #[must_use]
    pub fn build(thread: &Thread, now: DateTime<Utc>) -> Self {
        Self {
            thread: thread.clone(),
            sla: sla_info(thread, now),
            urgency: urgency_info(thread, now),
            unread_count: count(thread.unread_count()),
            latest_qc_comment: thread.latest_comment_by(Author::Qc).map(|c| c.text.clone()),
            latest_sm_comment: thread.latest_comment_by(Author::Sm).map(|c| c.text.clone()),
        }
    }
}

/// Rules of one module.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ModuleRules {
    pub module_name: String,
    pub rules: Vec<RuleView>,
}

/// Response from `qcl rule list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RuleListResponse {
    pub modules: Vec<ModuleRules>,
    pub total: u32,
}

/// Response from `qcl rule get`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RuleDetailResponse {
    pub rule: RuleView,
    pub threads: Vec<ThreadView>,
}

/// Response from `qcl thread list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThreadListResponse {
    pub rule_id: String,
    pub threads: Vec<ThreadView>,
    pub total: u32,
}

/// Response from every mutating command.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CommandResponse {
    pub changes: Vec<Change>,
    pub rule: Option<BusinessRule>,
    pub thread: Option<Thread>,
}

/// Response from `qcl export`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportResponse {
    pub path: String,
    pub rows: u32,
}

/// Response from `qcl init`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InitResponse {
    pub journal: String,
    pub seeded: bool,
    pub rules: u32,
    pub threads: u32,
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::enums::UrgencyLevel;
    use crate::seed::mock_board;

    #[test]
    fn thread_view_derives_comment_facts() {
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
        let board = mock_board(now);
        let view = ThreadView::build(board.thread("thread-1").unwrap(), now);
        assert_eq!(view.unread_count, 1);
        assert_eq!(
            view.latest_sm_comment.as_deref(),
            Some("Working on emergency helmet order. Should arrive by Friday.")
        );
        assert!(view.latest_qc_comment.unwrap().starts_with("URGENT"));
        // P1, last touched four days ago.
        assert_eq!(view.urgency.level, UrgencyLevel::Critical);
        assert_eq!(view.urgency.overdue_days, 3);
    }

    #[test]
    fn thread_view_flattens_thread() {
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
        let board = mock_board(now);
        let view = ThreadView::build(board.thread("thread-3").unwrap(), now);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], "thread-3");
        assert_eq!(json["action_status"], "non_error");
        assert_eq!(json["sla"]["is_overdue"], false);
    }

    #[test]
    fn rule_view_counts() {
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
        let board = mock_board(now);
        let view = RuleView::build(&board, board.rule("rule-5").unwrap());
        assert_eq!(view.thread_count, 2);
        assert_eq!(view.comment_count, 2);
    }
}
