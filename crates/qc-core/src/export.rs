//! Flatten the filtered board into spreadsheet rows.
//!
//! One row per visible thread of each visible rule, or a single placeholder
//! row (thread columns `N/A`) for a visible rule with no visible threads.
//! Writing the rows to a workbook lives in `qc-export`.

use std::fmt::Display;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::entities::{BusinessRule, Thread};
use crate::errors::CoreError;
use crate::filter::{FilterState, ThreadScope, visible_rules, visible_threads};

pub const SHEET_NAME: &str = "QC Data";

pub const NOT_AVAILABLE: &str = "N/A";

pub const EXPORT_HEADERS: [&str; 10] = [
    "Module Name",
    "Rule No",
    "Business Rule Description",
    "Status",
    "Created At",
    "Thread Title",
    "Thread Status",
    "Action Status",
    "Priority",
    "Thread Created At",
];

/// Column widths in characters, aligned with [`EXPORT_HEADERS`].
pub const COLUMN_WIDTHS: [f64; 10] = [20.0, 10.0, 40.0, 15.0, 12.0, 30.0, 15.0, 20.0, 10.0, 12.0];

pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// A validated strftime pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat(String);

impl DateFormat {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the pattern has an unknown
    /// specifier.
    pub fn parse(pattern: &str) -> Result<Self, CoreError> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(CoreError::Validation(format!(
                "invalid date format: {pattern}"
            )));
        }
        Ok(Self(pattern.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn render<Tz: TimeZone>(&self, at: DateTime<Utc>, tz: &Tz) -> String
    where
        Tz::Offset: Display,
    {
        at.with_timezone(tz).format(&self.0).to_string()
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self(DEFAULT_DATE_FORMAT.to_string())
    }
}

/// A spreadsheet cell value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Text(&'a str),
    Number(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub module_name: String,
    pub rule_no: u32,
    pub description: String,
    pub status: String,
    pub created_at: String,
    pub thread_title: String,
    pub thread_status: String,
    pub action_status: String,
    pub priority: String,
    pub thread_created_at: String,
}

impl ExportRow {
    /// Cell values in header order.
    #[must_use]
    pub fn cells(&self) -> [CellValue<'_>; 10] {
        [
            CellValue::Text(&self.module_name),
            CellValue::Number(f64::from(self.rule_no)),
            CellValue::Text(&self.description),
            CellValue::Text(&self.status),
            CellValue::Text(&self.created_at),
            CellValue::Text(&self.thread_title),
            CellValue::Text(&self.thread_status),
            CellValue::Text(&self.action_status),
            CellValue::Text(&self.priority),
            CellValue::Text(&self.thread_created_at),
        ]
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.thread_title == NOT_AVAILABLE && self.thread_created_at == NOT_AVAILABLE
    }
}

struct RowBuilder<'f, Tz> {
    format: &'f DateFormat,
    tz: &'f Tz,
}

impl<Tz: TimeZone> RowBuilder<'_, Tz>
where
    Tz::Offset: Display,
{
    fn base(&self, rule: &BusinessRule) -> ExportRow {
        ExportRow {
            module_name: rule.module_name.clone(),
            rule_no: rule.rule_no,
            description: rule.description.clone(),
            status: rule.status.label().to_string(),
            created_at: self.format.render(rule.created_at, self.tz),
            thread_title: NOT_AVAILABLE.to_string(),
            thread_status: NOT_AVAILABLE.to_string(),
            action_status: NOT_AVAILABLE.to_string(),
            priority: NOT_AVAILABLE.to_string(),
            thread_created_at: NOT_AVAILABLE.to_string(),
        }
    }

    fn with_thread(&self, rule: &BusinessRule, thread: &Thread) -> ExportRow {
        ExportRow {
            thread_title: thread.title.clone(),
            thread_status: thread.status.label().to_string(),
            action_status: thread.action_status.label().to_string(),
            priority: thread.priority.label().to_string(),
            thread_created_at: self.format.render(thread.created_at, self.tz),
            ..self.base(rule)
        }
    }
}

/// Build export rows for the filtered board, rendering dates in `tz`.
#[must_use]
pub fn export_rows<Tz: TimeZone>(
    board: &Board,
    filter: &FilterState,
    format: &DateFormat,
    tz: &Tz,
) -> Vec<ExportRow>
where
    Tz::Offset: Display,
{
    let builder = RowBuilder { format, tz };
    let mut rows = Vec::new();
    for rule in visible_rules(board, filter) {
        let threads = visible_threads(board, filter, &ThreadScope::Rule(rule.id.clone()));
        if threads.is_empty() {
            rows.push(builder.base(rule));
        } else {
            rows.extend(threads.into_iter().map(|t| builder.with_thread(rule, t)));
        }
    }
    rows
}

#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("QC_Export_{}.xlsx", date.format("%Y-%m-%d"))
}
