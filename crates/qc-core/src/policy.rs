//! Interactive close/reopen rules layered over the raw command surface.
//!
//! `ToggleThread` itself is symmetric. These checks are what the CLI runs
//! before issuing it. The CLI never issues it to reopen.

use crate::command::Command;
use crate::entities::Thread;
use crate::enums::{Author, ThreadStatus};
use crate::errors::CoreError;

pub const CLOSURE_PREFIX: &str = "[Thread Closed]";

fn rejected(thread: &Thread, to: ThreadStatus) -> CoreError {
    CoreError::InvalidTransition {
        entity_type: "thread".to_string(),
        id: thread.id.clone(),
        from: thread.status.to_string(),
        to: to.to_string(),
    }
}

/// Whether `thread` may be closed right now.
///
/// # Errors
///
/// `InvalidTransition` when the thread is already closed, `Validation` when
/// its action status is not terminal.
pub fn ensure_closable(thread: &Thread) -> Result<(), CoreError> {
    if !thread.status.can_transition_to(ThreadStatus::Closed) {
        return Err(rejected(thread, ThreadStatus::Closed));
    }
    if !thread.action_status.is_terminal() {
        return Err(CoreError::Validation(format!(
            "thread {} cannot be closed while its action status is {}",
            thread.id,
            thread.action_status.label()
        )));
    }
    Ok(())
}

/// Commands that close `thread`, preceded by a QC closure note when given.
///
/// # Errors
///
/// Same as [`ensure_closable`].
pub fn close_commands(thread: &Thread, note: Option<&str>) -> Result<Vec<Command>, CoreError> {
    ensure_closable(thread)?;
    let mut commands = Vec::with_capacity(2);
    if let Some(note) = note.map(str::trim).filter(|n| !n.is_empty()) {
        commands.push(Command::AddComment {
            thread_id: thread.id.clone(),
            text: closure_comment_text(note),
            author: Author::Qc,
        });
    }
    commands.push(Command::ToggleThread {
        thread_id: thread.id.clone(),
    });
    Ok(commands)
}

#[must_use]
pub fn closure_comment_text(note: &str) -> String {
    format!("{CLOSURE_PREFIX} {}", note.trim())
}

/// Closed threads are final, so a reopen request is always refused.
///
/// `InvalidTransition` for a closed thread, `Validation` for one that is
/// already open.
#[must_use]
pub fn reopen_rejection(thread: &Thread) -> CoreError {
    match thread.status {
        ThreadStatus::Closed => rejected(thread, ThreadStatus::Open),
        ThreadStatus::Open => CoreError::Validation(format!("thread {} is already open", thread.id)),
    }
}

/// Action status and priority are read-only on a closed thread.
///
/// # Errors
///
/// `Validation` when the thread is closed.
pub fn ensure_editable(thread: &Thread) -> Result<(), CoreError> {
    if thread.is_open() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "thread {} is closed; closed threads cannot be reopened or edited",
            thread.id
        )))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::enums::{ActionStatus, Priority};

    fn thread(status: ThreadStatus, action_status: ActionStatus) -> Thread {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        Thread {
            id: "thread-4".to_string(),
            rule_id: "rule-2".to_string(),
            title: "Forklift horn".to_string(),
            status,
            action_status,
            priority: Priority::P1,
            due_date: now,
            created_at: now,
            updated_at: now,
            comments: Vec::new(),
        }
    }

    #[test]
    fn only_terminal_threads_close() {
        for status in ActionStatus::ALL {
            let result = ensure_closable(&thread(ThreadStatus::Open, status));
            assert_eq!(result.is_ok(), status.is_terminal(), "{status}");
        }
    }

    #[test]
    fn close_with_note_comments_first() {
        let t = thread(ThreadStatus::Open, ActionStatus::NonError);
        let commands = close_commands(&t, Some("  Horn replaced ")).unwrap();
        assert_eq!(
            commands,
            vec![
                Command::AddComment {
                    thread_id: "thread-4".into(),
                    text: "[Thread Closed] Horn replaced".into(),
                    author: Author::Qc,
                },
                Command::ToggleThread {
                    thread_id: "thread-4".into()
                },
            ]
        );
    }

    #[test]
    fn close_without_note_only_toggles() {
        let t = thread(ThreadStatus::Open, ActionStatus::Error);
        let commands = close_commands(&t, Some("   ")).unwrap();
        assert_eq!(commands.len(), 1);
    }

    #[test]
    fn closed_threads_stay_closed() {
        let t = thread(ThreadStatus::Closed, ActionStatus::Error);
        assert!(matches!(
            close_commands(&t, None),
            Err(CoreError::InvalidTransition { .. })
        ));
        assert!(matches!(reopen_rejection(&t), CoreError::InvalidTransition { .. }));
        assert!(ensure_editable(&t).is_err());
        assert!(ensure_editable(&thread(ThreadStatus::Open, ActionStatus::Error)).is_ok());
    }

    #[test]
    fn reopening_an_open_thread_is_a_validation_error() {
        let t = thread(ThreadStatus::Open, ActionStatus::InProgress);
        assert!(matches!(reopen_rejection(&t), CoreError::Validation(_)));
    }
}
