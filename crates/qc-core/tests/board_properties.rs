//! Board-level behavior: rollup, filtering, ordering, and export rows.

use chrono::{DateTime, Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use qc_core::board::Board;
use qc_core::command::{Change, Command};
use qc_core::entities::Thread;
use qc_core::enums::*;
use qc_core::export::{DateFormat, export_rows};
use qc_core::filter::{FilterState, ThreadScope, sort_open_first, visible_rules, visible_threads};
use qc_core::seed::mock_board;
use rstest::rstest;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

fn add_rule(board: &mut Board, module: &str, description: &str) -> String {
    match board
        .apply(
            &Command::AddRule {
                module_name: module.into(),
                description: description.into(),
                severity: Severity::Major,
            },
            t0(),
        )
        .unwrap()
    {
        Change::RuleCreated { rule_id } => rule_id,
        other => panic!("unexpected change {other:?}"),
    }
}

fn add_thread(board: &mut Board, rule_id: &str, title: &str) -> String {
    match board
        .apply(
            &Command::AddThread {
                rule_id: rule_id.into(),
                title: title.into(),
                first_comment: None,
            },
            t0(),
        )
        .unwrap()
    {
        Change::ThreadCreated { thread_id, .. } => thread_id,
        other => panic!("unexpected change {other:?}"),
    }
}

fn set_action(board: &mut Board, thread_id: &str, action_status: ActionStatus) {
    board
        .apply(
            &Command::SetActionStatus {
                thread_id: thread_id.into(),
                action_status,
            },
            t0(),
        )
        .unwrap();
}

fn add_comment(board: &mut Board, thread_id: &str, text: &str) {
    board
        .apply(
            &Command::AddComment {
                thread_id: thread_id.into(),
                text: text.into(),
                author: Author::Sm,
            },
            t0(),
        )
        .unwrap();
}

/// Marker holds exactly when the rule has no comments at all.
fn assert_marker_matches_comments(board: &Board, rule_id: &str) {
    let rule = board.rule(rule_id).unwrap();
    assert_eq!(
        rule.has_passed_no_comments,
        board.comment_count_for_rule(rule_id) == 0
    );
}

/// One rule carrying one thread per given action status. All threads exist
/// before any status is set, so the outcome depends on the final set only.
fn rule_with_threads(statuses: &[ActionStatus]) -> Board {
    let mut board = Board::new();
    let rule_id = add_rule(&mut board, "Warehouse Safety Checks", "Racking is anchored");
    let thread_ids: Vec<String> = (0..statuses.len())
        .map(|n| add_thread(&mut board, &rule_id, &format!("Bay {n}")))
        .collect();
    for (thread_id, status) in thread_ids.iter().zip(statuses) {
        set_action(&mut board, thread_id, *status);
    }
    board
}

// ---------------------------------------------------------------------------
// Rollup
// ---------------------------------------------------------------------------

#[rstest]
#[case(&[ActionStatus::Error], RuleStatus::Fail)]
#[case(&[ActionStatus::NonError, ActionStatus::Error], RuleStatus::Fail)]
#[case(&[ActionStatus::ActionRequired, ActionStatus::Error, ActionStatus::MereObservation], RuleStatus::Fail)]
#[case(&[ActionStatus::NonError, ActionStatus::MereObservation], RuleStatus::Pass)]
#[case(&[ActionStatus::NonError, ActionStatus::InProgress], RuleStatus::Open)]
#[case(&[ActionStatus::OnHold], RuleStatus::Open)]
fn rollup_outcomes(#[case] statuses: &[ActionStatus], #[case] expected: RuleStatus) {
    let board = rule_with_threads(statuses);
    assert_eq!(board.rule("rule-1").unwrap().status, expected);
}

#[test]
fn error_wins_regardless_of_thread_status() {
    let mut board = rule_with_threads(&[ActionStatus::NonError, ActionStatus::Error]);
    board
        .apply(
            &Command::ToggleThread {
                thread_id: "thread-2".into(),
            },
            t0(),
        )
        .unwrap();
    assert_eq!(board.thread("thread-2").unwrap().status, ThreadStatus::Closed);
    assert_eq!(board.rule("rule-1").unwrap().status, RuleStatus::Fail);
}

#[test]
fn pass_marker_tracks_comments() {
    let mut board = rule_with_threads(&[ActionStatus::NonError, ActionStatus::MereObservation]);
    assert!(board.rule("rule-1").unwrap().has_passed_no_comments);

    add_comment(&mut board, "thread-1", "Anchors torqued");
    let rule = board.rule("rule-1").unwrap();
    assert_eq!(rule.status, RuleStatus::Pass);
    assert!(!rule.has_passed_no_comments);
    assert_marker_matches_comments(&board, "rule-1");
}

#[test]
fn comment_after_manual_pass_clears_marker() {
    let mut board = Board::new();
    let rule_id = add_rule(&mut board, "Quality Control", "Batch records signed");
    let thread_id = add_thread(&mut board, &rule_id, "Night shift sheet");
    board
        .apply(
            &Command::SetRuleStatus {
                rule_id: rule_id.clone(),
                status: RuleStatus::Pass,
            },
            t0(),
        )
        .unwrap();
    assert!(board.rule(&rule_id).unwrap().has_passed_no_comments);

    add_comment(&mut board, &thread_id, "Signed off by supervisor");
    let rule = board.rule(&rule_id).unwrap();
    assert_eq!(rule.status, RuleStatus::Pass);
    assert!(!rule.has_passed_no_comments);
    assert_marker_matches_comments(&board, &rule_id);
}

#[test]
fn comment_leaves_non_passing_rules_alone() {
    let mut board = rule_with_threads(&[ActionStatus::Error]);
    let before = board.rule("rule-1").unwrap().clone();
    add_comment(&mut board, "thread-1", "Racking bolt sheared");
    assert_eq!(board.rule("rule-1").unwrap(), &before);
}

#[test]
fn rollup_is_idempotent() {
    let mut board = rule_with_threads(&[ActionStatus::NonError, ActionStatus::Error]);
    let later = t0() + Duration::hours(2);
    let before = board.clone();
    assert!(!board.roll_up("rule-1", later));
    assert!(!board.roll_up("rule-1", later));
    assert_eq!(board, before);
}

#[test]
fn rollup_only_touches_affected_rule() {
    let mut board = Board::new();
    let a = add_rule(&mut board, "Quality Control", "Scales calibrated");
    let b = add_rule(&mut board, "Quality Control", "Samples sealed");
    let thread = add_thread(&mut board, &a, "Scale 4 drift");
    set_action(&mut board, &thread, ActionStatus::Error);
    assert_eq!(board.rule(&a).unwrap().status, RuleStatus::Fail);
    assert_eq!(board.rule(&b).unwrap().status, RuleStatus::Open);
}

#[test]
fn intermediate_does_not_regress_pass() {
    let mut board = rule_with_threads(&[ActionStatus::NonError]);
    assert_eq!(board.rule("rule-1").unwrap().status, RuleStatus::Pass);
    set_action(&mut board, "thread-1", ActionStatus::InProgress);
    assert_eq!(board.rule("rule-1").unwrap().status, RuleStatus::Pass);
}

// ---------------------------------------------------------------------------
// Filtering and ordering
// ---------------------------------------------------------------------------

fn thread(id: &str, status: ThreadStatus) -> Thread {
    Thread {
        id: id.to_string(),
        rule_id: "rule-1".to_string(),
        title: id.to_uppercase(),
        status,
        action_status: ActionStatus::ActionRequired,
        priority: Priority::P2,
        due_date: t0(),
        created_at: t0(),
        updated_at: t0(),
        comments: Vec::new(),
    }
}

#[test]
fn open_threads_sort_first_stably() {
    let threads = [
        thread("t1", ThreadStatus::Closed),
        thread("t2", ThreadStatus::Open),
        thread("t3", ThreadStatus::Open),
        thread("t4", ThreadStatus::Closed),
    ];
    let mut refs: Vec<&Thread> = threads.iter().collect();
    sort_open_first(&mut refs);
    let ids: Vec<&str> = refs.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t2", "t3", "t1", "t4"]);
}

#[test]
fn rule_scope_orders_open_first() {
    let board = mock_board(t0());
    let threads = visible_threads(&board, &FilterState::default(), &ThreadScope::Rule("rule-2".into()));
    let ids: Vec<&str> = threads.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["thread-3", "thread-4"]);
}

fn visible_ids(board: &Board, filter: &FilterState) -> Vec<String> {
    visible_rules(board, filter)
        .into_iter()
        .map(|r| r.id.clone())
        .collect()
}

#[test]
fn filter_composition_is_order_independent() {
    let board = mock_board(t0());
    let title = "Exit pathway inspection".to_string();

    let mut a = FilterState::default();
    a.set_module(Some("Warehouse Safety Checks".into()));
    a.status_mut().select(RuleStatus::Pass);
    a.thread_title_mut().select(title.clone());

    let mut b = FilterState::default();
    b.set_module(Some("Warehouse Safety Checks".into()));
    b.thread_title_mut().select(title.clone());
    b.status_mut().select(RuleStatus::Pass);

    assert_eq!(a, b);
    assert_eq!(visible_ids(&board, &a), vec!["rule-2"]);

    // The combined filter is the intersection of each dimension on its own.
    let mut module_only = FilterState::default();
    module_only.set_module(Some("Warehouse Safety Checks".into()));
    let mut status_only = FilterState::default();
    status_only.status_mut().select(RuleStatus::Pass);
    let mut title_only = FilterState::default();
    title_only.thread_title_mut().select(title);

    let singles = [
        visible_ids(&board, &module_only),
        visible_ids(&board, &status_only),
        visible_ids(&board, &title_only),
    ];
    let intersection: Vec<String> = singles[0]
        .iter()
        .filter(|id| singles[1].contains(id) && singles[2].contains(id))
        .cloned()
        .collect();
    assert_eq!(visible_ids(&board, &a), intersection);
}

#[test]
fn selecting_module_resets_business_rules() {
    let board = mock_board(t0());
    let mut filter = FilterState::default();
    let description = board.rule("rule-6").unwrap().description.clone();
    filter.update_business_rule(|s| s.select(description));
    assert_eq!(visible_ids(&board, &filter), vec!["rule-6"]);

    filter.set_module(Some("Equipment Management".into()));
    assert!(filter.business_rule().is_all());
    assert_eq!(visible_ids(&board, &filter), vec!["rule-4", "rule-5"]);
}

#[test]
fn thread_filters_do_not_depend_on_rule_filters() {
    let board = mock_board(t0());
    let mut filter = FilterState::default();
    filter.set_module(Some("Quality Control".into()));
    filter.thread_status_mut().select(ThreadStatus::Closed);
    let threads = visible_threads(&board, &filter, &ThreadScope::Rule("rule-1".into()));
    let ids: Vec<&str> = threads.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["thread-2"]);
}

// ---------------------------------------------------------------------------
// Commands and export
// ---------------------------------------------------------------------------

#[test]
fn new_thread_due_in_three_days() {
    let mut board = Board::new();
    let rule = add_rule(&mut board, "Environmental Controls", "Humidity logged");
    let thread_id = add_thread(&mut board, &rule, "Sensor 2 offline");
    let thread = board.thread(&thread_id).unwrap();
    assert_eq!(thread.due_date.timestamp() - thread.created_at.timestamp(), 259_200);
}

#[test]
fn export_one_placeholder_plus_two_threads() {
    let mut board = Board::new();
    let empty = add_rule(&mut board, "Warehouse Safety Checks", "Floor markings visible");
    let busy = add_rule(&mut board, "Warehouse Safety Checks", "Pallets wrapped");
    add_thread(&mut board, &busy, "Loose wrap aisle 3");
    add_thread(&mut board, &busy, "Torn wrap aisle 9");

    let rows = export_rows(&board, &FilterState::default(), &DateFormat::default(), &Utc);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].description, board.rule(&empty).unwrap().description);
    assert_eq!(rows[0].thread_title, "N/A");
    assert_eq!(rows[0].thread_created_at, "N/A");
    assert_eq!(rows[1].thread_title, "Loose wrap aisle 3");
    assert_eq!(rows[2].thread_title, "Torn wrap aisle 9");
    assert!(rows.iter().all(|r| r.status == "Open"));
}

#[test]
fn replaying_same_commands_yields_same_board() {
    let commands = vec![
        Command::AddRule {
            module_name: "Quality Control".into(),
            description: "Metal detector tested".into(),
            severity: Severity::Critical,
        },
        Command::AddThread {
            rule_id: "rule-1".into(),
            title: "Test wand missing".into(),
            first_comment: None,
        },
        Command::AddComment {
            thread_id: "thread-1".into(),
            text: "Ordered a replacement".into(),
            author: Author::Sm,
        },
        Command::SetActionStatus {
            thread_id: "thread-1".into(),
            action_status: ActionStatus::MereObservation,
        },
    ];
    let run = || {
        let mut board = Board::new();
        for (n, command) in commands.iter().enumerate() {
            let at = t0() + Duration::minutes(i64::try_from(n).unwrap());
            board.apply(command, at).unwrap();
        }
        board
    };
    assert_eq!(run(), run());
}
