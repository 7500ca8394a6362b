use qc_core::board::Board;
use qc_core::command::Change;
use qc_core::responses::CommandResponse;

/// The entity a command was aimed at, before its changes are known.
#[derive(Clone, Copy, Debug)]
pub enum Target<'a> {
    New,
    Rule(&'a str),
    Thread(&'a str),
}

/// Build the response for applied `changes`, attaching the touched rule and
/// thread as they now stand. A thread brings its parent rule along.
#[must_use]
pub fn command_response(board: &Board, changes: Vec<Change>, target: Target<'_>) -> CommandResponse {
    let (mut rule_id, mut thread_id) = match target {
        Target::New => (None, None),
        Target::Rule(id) => (Some(id.to_string()), None),
        Target::Thread(id) => (None, Some(id.to_string())),
    };
    for change in &changes {
        match change {
            Change::RuleCreated { rule_id: id } | Change::RuleUpdated { rule_id: id } => {
                rule_id = Some(id.clone());
            }
            Change::ThreadCreated { thread_id: id, .. }
            | Change::CommentAdded { thread_id: id, .. }
            | Change::ThreadUpdated { thread_id: id } => thread_id = Some(id.clone()),
            Change::Unchanged => {}
        }
    }

    let thread = thread_id.as_deref().and_then(|id| board.thread(id));
    let rule = match rule_id.as_deref() {
        Some(id) => board.rule(id),
        None => thread.and_then(|t| board.rule(&t.rule_id)),
    };
    CommandResponse {
        changes,
        rule: rule.cloned(),
        thread: thread.cloned(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use qc_core::command::Change;
    use qc_core::seed::mock_board;

    use super::{Target, command_response};

    #[test]
    fn thread_change_brings_parent_rule() {
        let board = mock_board(Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap());
        let response = command_response(
            &board,
            vec![Change::ThreadUpdated {
                thread_id: "thread-3".into(),
            }],
            Target::New,
        );
        assert_eq!(response.thread.map(|t| t.id).as_deref(), Some("thread-3"));
        assert_eq!(response.rule.map(|r| r.id).as_deref(), Some("rule-2"));
    }

    #[test]
    fn unchanged_keeps_target() {
        let board = mock_board(Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap());
        let response = command_response(&board, vec![Change::Unchanged], Target::Rule("rule-5"));
        assert!(response.thread.is_none());
        assert_eq!(response.rule.map(|r| r.id).as_deref(), Some("rule-5"));
    }
}
