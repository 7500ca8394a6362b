use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{RuleStatus, Severity};

/// A checklist business requirement being audited.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BusinessRule {
    pub id: String,
    /// Display ordinal, unique within a board.
    pub rule_no: u32,
    pub description: String,
    pub module_name: String,
    /// Short business-rule category label (e.g. "Safety Compliance").
    pub category: Option<String>,
    pub qc_comment: Option<String>,
    pub sm_comment: Option<String>,
    pub status: RuleStatus,
    pub severity: Severity,
    #[serde(default)]
    pub is_na: bool,
    pub na_reason: Option<String>,
    /// Set when the rule passed with no comment on any of its threads.
    #[serde(default)]
    pub has_passed_no_comments: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
