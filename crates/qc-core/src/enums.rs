//! Status enums, priorities, and roles for the QC board.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `as_str()` returns the serialized form; `label()` returns the human-facing
//! label used by table output and the spreadsheet export.

use chrono::Duration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// RuleStatus
// ---------------------------------------------------------------------------

/// Status of a business rule. Derived by the rollup or set manually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RuleStatus {
    Pass,
    Fail,
    Open,
    #[serde(alias = "na", alias = "n/a")]
    NotApplicable,
}

impl RuleStatus {
    pub const ALL: [Self; 4] = [Self::Pass, Self::Fail, Self::Open, Self::NotApplicable];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Open => "open",
            Self::NotApplicable => "not_applicable",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
            Self::Open => "Open",
            Self::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Issue severity attached to a business rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Major,
    Significant,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Major => "major",
            Self::Significant => "significant",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Major => "Major",
            Self::Significant => "Significant",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ThreadStatus
// ---------------------------------------------------------------------------

/// Open/closed state of a discussion thread.
///
/// ```text
/// open → closed
/// ```
///
/// The data layer toggles in both directions ([`ThreadStatus::toggled`]);
/// `allowed_next_states()` encodes the one-way policy applied to user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ThreadStatus {
    Open,
    Closed,
}

impl ThreadStatus {
    pub const ALL: [Self; 2] = [Self::Open, Self::Closed];

    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Open => &[Self::Closed],
            Self::Closed => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Sort key for thread lists: open threads first.
    #[must_use]
    pub const fn sort_rank(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Closed => 1,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for ThreadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ActionStatus
// ---------------------------------------------------------------------------

/// How a thread's action status feeds the rule rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActionClass {
    /// Work still pending; blocks both rollup outcomes.
    Intermediate,
    /// Resolved without a defect.
    Acceptable,
    /// Resolved as a defect; forces the rule to `Fail`.
    Dominant,
}

/// Classification of a thread's finding.
///
/// ```text
/// action_required ─┬→ in_progress ─┬→ non_error
///                  └→ on_hold     ─┤→ mere_observation
///                                  └→ error
/// ```
///
/// Any value may be set from any other; the diagram shows the usual flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    ActionRequired,
    InProgress,
    OnHold,
    #[serde(alias = "no_error")]
    NonError,
    MereObservation,
    Error,
}

impl ActionStatus {
    pub const ALL: [Self; 6] = [
        Self::ActionRequired,
        Self::InProgress,
        Self::OnHold,
        Self::NonError,
        Self::MereObservation,
        Self::Error,
    ];

    #[must_use]
    pub const fn class(self) -> ActionClass {
        match self {
            Self::ActionRequired | Self::InProgress | Self::OnHold => ActionClass::Intermediate,
            Self::NonError | Self::MereObservation => ActionClass::Acceptable,
            Self::Error => ActionClass::Dominant,
        }
    }

    /// Whether the thread carrying this status may be closed.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self.class(), ActionClass::Intermediate)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ActionRequired => "action_required",
            Self::InProgress => "in_progress",
            Self::OnHold => "on_hold",
            Self::NonError => "non_error",
            Self::MereObservation => "mere_observation",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ActionRequired => "Action Required",
            Self::InProgress => "In Progress",
            Self::OnHold => "On Hold",
            Self::NonError => "Non-Error",
            Self::MereObservation => "Mere Observation",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Thread priority. Each level carries an SLA window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    P1,
    P2,
    P3,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::P1, Self::P2, Self::P3];

    /// SLA window in whole days.
    #[must_use]
    pub const fn sla_days(self) -> i64 {
        match self {
            Self::P1 => 1,
            Self::P2 => 3,
            Self::P3 => 7,
        }
    }

    #[must_use]
    pub fn sla(self) -> Duration {
        Duration::days(self.sla_days())
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::P1 => "p1",
            Self::P2 => "p2",
            Self::P3 => "p3",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
        }
    }

    /// Long label shown next to priority pickers.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::P1 => "P1 - Severe",
            Self::P2 => "P2 - Moderate",
            Self::P3 => "P3 - Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Author
// ---------------------------------------------------------------------------

/// Role that wrote a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    Qc,
    Sm,
}

impl Author {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Qc => "qc",
            Self::Sm => "sm",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Qc => "QC",
            Self::Sm => "SM",
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UrgencyLevel
// ---------------------------------------------------------------------------

/// Urgency of a thread, derived from priority and time since last update.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl UrgencyLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(rule_status_na, RuleStatus, RuleStatus::NotApplicable, "not_applicable");
    test_serde_roundtrip!(rule_status_pass, RuleStatus, RuleStatus::Pass, "pass");
    test_serde_roundtrip!(
        action_mere_observation,
        ActionStatus,
        ActionStatus::MereObservation,
        "mere_observation"
    );
    test_serde_roundtrip!(priority_p2, Priority, Priority::P2, "p2");
    test_serde_roundtrip!(author_sm, Author, Author::Sm, "sm");

    #[test]
    fn as_str_matches_serde() {
        for status in ActionStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        for status in RuleStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn legacy_no_error_alias_parses_as_non_error() {
        let status: ActionStatus = serde_json::from_str("\"no_error\"").unwrap();
        assert_eq!(status, ActionStatus::NonError);
    }

    #[test]
    fn na_aliases_parse() {
        for raw in ["\"na\"", "\"n/a\""] {
            let status: RuleStatus = serde_json::from_str(raw).unwrap();
            assert_eq!(status, RuleStatus::NotApplicable);
        }
    }

    #[test]
    fn action_classes() {
        assert_eq!(ActionStatus::Error.class(), ActionClass::Dominant);
        assert_eq!(ActionStatus::NonError.class(), ActionClass::Acceptable);
        assert_eq!(ActionStatus::MereObservation.class(), ActionClass::Acceptable);
        for status in [
            ActionStatus::ActionRequired,
            ActionStatus::InProgress,
            ActionStatus::OnHold,
        ] {
            assert_eq!(status.class(), ActionClass::Intermediate);
            assert!(!status.is_terminal());
        }
    }

    #[test]
    fn sla_windows() {
        assert_eq!(Priority::P1.sla_days(), 1);
        assert_eq!(Priority::P2.sla().num_seconds(), 259_200);
        assert_eq!(Priority::P3.sla_days(), 7);
    }

    #[test]
    fn thread_status_policy_is_one_way() {
        assert!(ThreadStatus::Open.can_transition_to(ThreadStatus::Closed));
        assert!(!ThreadStatus::Closed.can_transition_to(ThreadStatus::Open));
        assert_eq!(ThreadStatus::Closed.toggled(), ThreadStatus::Open);
    }

    #[test]
    fn labels() {
        assert_eq!(RuleStatus::NotApplicable.label(), "N/A");
        assert_eq!(ActionStatus::NonError.label(), "Non-Error");
        assert_eq!(Author::Qc.label(), "QC");
        assert_eq!(Priority::P1.description(), "P1 - Severe");
    }

    #[test]
    fn urgency_orders_by_severity() {
        assert!(UrgencyLevel::Critical > UrgencyLevel::High);
        assert!(UrgencyLevel::Medium > UrgencyLevel::Low);
    }
}
