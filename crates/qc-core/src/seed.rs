//! The built-in demo board written by `qcl init`.
//!
//! Rule dates are fixed. Thread and comment dates are relative to the
//! moment the board is seeded: creation/comment times lie `n` days in the
//! past and due dates `n` days in the future. Rule statuses are re-derived
//! from the seeded threads before the board is returned.

use chrono::{DateTime, Duration, Utc};

use crate::board::Board;
use crate::entities::{BusinessRule, Comment, Thread};
use crate::enums::{ActionStatus, Author, Priority, RuleStatus, Severity, ThreadStatus};

struct RuleSeed {
    module: &'static str,
    description: &'static str,
    category: &'static str,
    qc: &'static str,
    sm: &'static str,
    status: RuleStatus,
    severity: Severity,
    /// Unix seconds.
    created: i64,
}

struct ThreadSeed {
    rule_no: u32,
    title: &'static str,
    status: ThreadStatus,
    action_status: ActionStatus,
    priority: Priority,
    days: i64,
    updated_days: i64,
    comments: &'static [CommentSeed],
}

struct CommentSeed {
    author: Author,
    days: i64,
    is_read: bool,
    text: &'static str,
}

const WAREHOUSE: &str = "Warehouse Safety Checks";
const EQUIPMENT: &str = "Equipment Management";
const QUALITY: &str = "Quality Control";
const ENVIRONMENT: &str = "Environmental Controls";

const RULES: [RuleSeed; 8] = [
    RuleSeed {
        module: WAREHOUSE,
        description: "All warehouse personnel must wear safety helmets at all times",
        category: "Safety Compliance",
        qc: "Helmet compliance is critical for safety",
        sm: "Ensure helmets are properly fitted and maintained",
        status: RuleStatus::Fail,
        severity: Severity::Critical,
        created: 1_705_305_600, // 2024-01-15T08:00:00Z
    },
    RuleSeed {
        module: WAREHOUSE,
        description: "Emergency exits must remain unobstructed at all times",
        category: "Emergency Procedures",
        qc: "Exit pathways are clear and marked",
        sm: "Regular inspections scheduled",
        status: RuleStatus::Pass,
        severity: Severity::Major,
        created: 1_705_486_500, // 2024-01-17T10:15:00Z
    },
    RuleSeed {
        module: WAREHOUSE,
        description: "Loading dock safety protocols must be followed",
        category: "Loading Operations",
        qc: "Loading procedures need standardization",
        sm: "Safety barriers installed and maintained",
        status: RuleStatus::Fail,
        severity: Severity::Major,
        created: 1_705_674_600, // 2024-01-19T14:30:00Z
    },
    RuleSeed {
        module: EQUIPMENT,
        description: "Forklift operators must complete safety training annually",
        category: "Training Requirements",
        qc: "Training records need to be updated",
        sm: "Annual training scheduled for all operators",
        status: RuleStatus::Pass,
        severity: Severity::Major,
        created: 1_705_741_200, // 2024-01-20T09:00:00Z
    },
    RuleSeed {
        module: EQUIPMENT,
        description: "All electrical equipment must be inspected monthly",
        category: "Maintenance Schedule",
        qc: "Monthly inspections are up to date",
        sm: "Electrical safety protocols implemented",
        status: RuleStatus::Pass,
        severity: Severity::Critical,
        created: 1_705_836_600, // 2024-01-21T11:30:00Z
    },
    RuleSeed {
        module: QUALITY,
        description: "Product labeling must be accurate and visible",
        category: "Data Accuracy",
        qc: "Labeling standards need improvement",
        sm: "New labeling system implemented",
        status: RuleStatus::Fail,
        severity: Severity::Significant,
        created: 1_705_932_900, // 2024-01-22T14:15:00Z
    },
    RuleSeed {
        module: QUALITY,
        description: "Quality control sampling procedures must be followed",
        category: "Sampling Procedures",
        qc: "Sampling procedures are standardized",
        sm: "QC protocols updated and documented",
        status: RuleStatus::Pass,
        severity: Severity::Major,
        created: 1_706_028_300, // 2024-01-23T16:45:00Z
    },
    RuleSeed {
        module: ENVIRONMENT,
        description: "Temperature logs must be maintained for cold storage",
        category: "Temperature Monitoring",
        qc: "Temperature monitoring system operational",
        sm: "Automated logging system installed",
        status: RuleStatus::Pass,
        severity: Severity::Critical,
        created: 1_706_085_000, // 2024-01-24T08:30:00Z
    },
];

const THREADS: [ThreadSeed; 12] = [
    ThreadSeed {
        rule_no: 1,
        title: "Helmet compliance issues",
        status: ThreadStatus::Open,
        action_status: ActionStatus::NonError,
        priority: Priority::P1,
        days: 5,
        updated_days: 4,
        comments: &[
            CommentSeed {
                author: Author::Qc,
                days: 5,
                is_read: false,
                text: "URGENT: Multiple safety violations found. Need immediate action.",
            },
            CommentSeed {
                author: Author::Sm,
                days: 4,
                is_read: true,
                text: "Working on emergency helmet order. Should arrive by Friday.",
            },
        ],
    },
    ThreadSeed {
        rule_no: 1,
        title: "Helmet training completion",
        status: ThreadStatus::Closed,
        action_status: ActionStatus::NonError,
        priority: Priority::P2,
        days: 3,
        updated_days: 3,
        comments: &[CommentSeed {
            author: Author::Sm,
            days: 3,
            is_read: true,
            text: "Training completed successfully for all personnel.",
        }],
    },
    ThreadSeed {
        rule_no: 2,
        title: "Exit pathway inspection",
        status: ThreadStatus::Open,
        action_status: ActionStatus::NonError,
        priority: Priority::P2,
        days: 2,
        updated_days: 2,
        comments: &[CommentSeed {
            author: Author::Qc,
            days: 2,
            is_read: false,
            text: "Exit pathways are clear and properly marked.",
        }],
    },
    ThreadSeed {
        rule_no: 2,
        title: "Emergency lighting check",
        status: ThreadStatus::Closed,
        action_status: ActionStatus::MereObservation,
        priority: Priority::P3,
        days: 1,
        updated_days: 1,
        comments: &[CommentSeed {
            author: Author::Sm,
            days: 1,
            is_read: true,
            text: "Emergency lighting is functioning properly.",
        }],
    },
    ThreadSeed {
        rule_no: 3,
        title: "Loading dock safety violations",
        status: ThreadStatus::Open,
        action_status: ActionStatus::Error,
        priority: Priority::P1,
        days: 6,
        updated_days: 6,
        comments: &[CommentSeed {
            author: Author::Qc,
            days: 6,
            is_read: false,
            text: "Multiple safety violations found at loading dock.",
        }],
    },
    ThreadSeed {
        rule_no: 3,
        title: "Forklift operator training",
        status: ThreadStatus::Closed,
        action_status: ActionStatus::Error,
        priority: Priority::P2,
        days: 7,
        updated_days: 7,
        comments: &[CommentSeed {
            author: Author::Qc,
            days: 7,
            is_read: false,
            text: "Training requirements not met by several operators.",
        }],
    },
    ThreadSeed {
        rule_no: 4,
        title: "Forklift training records update",
        status: ThreadStatus::Open,
        action_status: ActionStatus::NonError,
        priority: Priority::P2,
        days: 3,
        updated_days: 3,
        comments: &[CommentSeed {
            author: Author::Sm,
            days: 3,
            is_read: true,
            text: "Training records have been updated successfully.",
        }],
    },
    ThreadSeed {
        rule_no: 5,
        title: "Electrical equipment inspection",
        status: ThreadStatus::Closed,
        action_status: ActionStatus::NonError,
        priority: Priority::P1,
        days: 2,
        updated_days: 2,
        comments: &[CommentSeed {
            author: Author::Qc,
            days: 2,
            is_read: true,
            text: "Monthly electrical inspection completed successfully.",
        }],
    },
    ThreadSeed {
        rule_no: 5,
        title: "Electrical safety protocol review",
        status: ThreadStatus::Open,
        action_status: ActionStatus::MereObservation,
        priority: Priority::P3,
        days: 1,
        updated_days: 1,
        comments: &[CommentSeed {
            author: Author::Sm,
            days: 1,
            is_read: true,
            text: "Safety protocols are being reviewed and updated.",
        }],
    },
    ThreadSeed {
        rule_no: 6,
        title: "Product labeling accuracy issues",
        status: ThreadStatus::Open,
        action_status: ActionStatus::Error,
        priority: Priority::P1,
        days: 4,
        updated_days: 4,
        comments: &[CommentSeed {
            author: Author::Qc,
            days: 4,
            is_read: false,
            text: "Multiple products found with incorrect or missing labels.",
        }],
    },
    ThreadSeed {
        rule_no: 7,
        title: "QC sampling procedure implementation",
        status: ThreadStatus::Closed,
        action_status: ActionStatus::NonError,
        priority: Priority::P2,
        days: 2,
        updated_days: 2,
        comments: &[CommentSeed {
            author: Author::Sm,
            days: 2,
            is_read: true,
            text: "New sampling procedures implemented successfully.",
        }],
    },
    ThreadSeed {
        rule_no: 8,
        title: "Temperature monitoring system check",
        status: ThreadStatus::Open,
        action_status: ActionStatus::NonError,
        priority: Priority::P2,
        days: 1,
        updated_days: 1,
        comments: &[CommentSeed {
            author: Author::Qc,
            days: 1,
            is_read: true,
            text: "Temperature monitoring system is functioning correctly.",
        }],
    },
];

/// Build the demo board as of `now`.
#[must_use]
pub fn mock_board(now: DateTime<Utc>) -> Board {
    let rules = RULES
        .iter()
        .zip(1u32..)
        .map(|(seed, rule_no)| {
            let created_at = DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(seed.created);
            BusinessRule {
                id: format!("rule-{rule_no}"),
                rule_no,
                description: seed.description.to_string(),
                module_name: seed.module.to_string(),
                category: Some(seed.category.to_string()),
                qc_comment: Some(seed.qc.to_string()),
                sm_comment: Some(seed.sm.to_string()),
                status: seed.status,
                severity: seed.severity,
                is_na: false,
                na_reason: None,
                has_passed_no_comments: false,
                created_at,
                updated_at: created_at,
            }
        })
        .collect();

    let mut comment_no = 0u32;
    let threads = THREADS
        .iter()
        .zip(1u32..)
        .map(|(seed, thread_no)| {
            let id = format!("thread-{thread_no}");
            let comments = seed
                .comments
                .iter()
                .map(|c| {
                    comment_no += 1;
                    Comment {
                        id: format!("comment-{comment_no}"),
                        thread_id: id.clone(),
                        text: c.text.to_string(),
                        author: c.author,
                        timestamp: now - Duration::days(c.days),
                        is_read: c.is_read,
                    }
                })
                .collect();
            Thread {
                rule_id: format!("rule-{}", seed.rule_no),
                title: seed.title.to_string(),
                status: seed.status,
                action_status: seed.action_status,
                priority: seed.priority,
                due_date: now + Duration::days(seed.days),
                created_at: now - Duration::days(seed.days),
                updated_at: now - Duration::days(seed.updated_days),
                comments,
                id,
            }
        })
        .collect();

    let mut board = Board { rules, threads };
    let rule_ids: Vec<String> = board.rules.iter().map(|r| r.id.clone()).collect();
    for rule_id in &rule_ids {
        board.roll_up(rule_id, now);
    }
    board
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn seed_shape() {
        let board = mock_board(Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap());
        assert_eq!(board.rules.len(), 8);
        assert_eq!(board.threads.len(), 12);
        assert_eq!(board.comments().count(), 13);
        assert_eq!(board.module_names().len(), 4);
    }

    #[test]
    fn seeded_statuses_are_rolled_up() {
        let board = mock_board(Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap());
        let statuses: Vec<RuleStatus> = board.rules.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                RuleStatus::Pass,
                RuleStatus::Pass,
                RuleStatus::Fail,
                RuleStatus::Pass,
                RuleStatus::Pass,
                RuleStatus::Fail,
                RuleStatus::Pass,
                RuleStatus::Pass,
            ]
        );
        assert!(board.rules.iter().all(|r| !r.has_passed_no_comments));
    }

    #[test]
    fn seed_dates_are_relative() {
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
        let board = mock_board(now);
        let thread = board.thread("thread-1").unwrap();
        assert_eq!(thread.created_at, now - Duration::days(5));
        assert_eq!(thread.updated_at, now - Duration::days(4));
        assert_eq!(thread.due_date, now + Duration::days(5));
        assert_eq!(
            board.rule("rule-1").unwrap().created_at,
            Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap()
        );
    }
}
