//! SLA and urgency figures derived from a thread's dates and priority.

use chrono::{DateTime, Duration, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Thread;
use crate::enums::{ActionStatus, Priority, UrgencyLevel};

const DAY_MS: i64 = 86_400_000;

fn floor_days(delta: Duration) -> i64 {
    delta.num_milliseconds().div_euclid(DAY_MS)
}

fn ceil_days(delta: Duration) -> i64 {
    -(-delta.num_milliseconds()).div_euclid(DAY_MS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SlaInfo {
    pub days_until_due: i64,
    pub days_since_created: i64,
    pub is_overdue: bool,
    pub overdue_days: i64,
}

#[must_use]
pub fn sla_info(thread: &Thread, now: DateTime<Utc>) -> SlaInfo {
    let is_overdue = now > thread.due_date;
    SlaInfo {
        days_until_due: ceil_days(thread.due_date - now),
        days_since_created: floor_days(now - thread.created_at),
        is_overdue,
        overdue_days: if is_overdue {
            ceil_days(now - thread.due_date)
        } else {
            0
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UrgencyInfo {
    pub level: UrgencyLevel,
    pub days_since_update: i64,
    pub overdue_days: i64,
    pub is_overdue: bool,
}

/// Urgency from time since the last update, measured against the SLA.
#[must_use]
pub fn urgency_info(thread: &Thread, now: DateTime<Utc>) -> UrgencyInfo {
    let days = floor_days(now - thread.updated_at);
    let sla = thread.priority.sla_days();
    let overdue_days = (days - sla).max(0);

    let mut level = match thread.priority {
        Priority::P1 if days > 1 => UrgencyLevel::Critical,
        Priority::P1 => UrgencyLevel::High,
        Priority::P2 if days > 3 => UrgencyLevel::High,
        Priority::P2 => UrgencyLevel::Medium,
        Priority::P3 if days > 7 => UrgencyLevel::Medium,
        Priority::P3 => UrgencyLevel::Low,
    };
    if thread.action_status == ActionStatus::ActionRequired && overdue_days > 0 {
        level = UrgencyLevel::Critical;
    }

    UrgencyInfo {
        level,
        days_since_update: days,
        overdue_days,
        is_overdue: overdue_days > 0,
    }
}
