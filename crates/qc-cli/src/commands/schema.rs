use qc_core::board::Board;
use qc_core::command::{Change, Command};
use qc_core::entities::{BusinessRule, Comment, Thread};
use qc_core::filter::{FilterOptions, FilterState};
use qc_core::responses::{
    CommandResponse, ExportResponse, InitResponse, RuleDetailResponse, RuleListResponse,
    RuleView, ThreadListResponse, ThreadView,
};
use qc_core::trail::JournalEntry;
use schemars::schema_for;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Names accepted by `qcl schema`.
pub const SCHEMA_NAMES: &[&str] = &[
    "board",
    "rule",
    "thread",
    "comment",
    "command",
    "change",
    "journal_entry",
    "filter_state",
    "filter_options",
    "rule_view",
    "thread_view",
    "rule_list",
    "rule_detail",
    "thread_list",
    "command_response",
    "export_response",
    "init_response",
];

/// Handle `qcl schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(schema) = schema_value(&args.type_name)? else {
        anyhow::bail!(
            "unknown schema type '{}' (expected one of: {})",
            args.type_name,
            SCHEMA_NAMES.join(", ")
        );
    };
    output(&schema, flags.format)
}

fn schema_value(name: &str) -> anyhow::Result<Option<Value>> {
    let schema = match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "board" => schema_for!(Board),
        "rule" => schema_for!(BusinessRule),
        "thread" => schema_for!(Thread),
        "comment" => schema_for!(Comment),
        "command" => schema_for!(Command),
        "change" => schema_for!(Change),
        "journal_entry" => schema_for!(JournalEntry),
        "filter_state" => schema_for!(FilterState),
        "filter_options" => schema_for!(FilterOptions),
        "rule_view" => schema_for!(RuleView),
        "thread_view" => schema_for!(ThreadView),
        "rule_list" => schema_for!(RuleListResponse),
        "rule_detail" => schema_for!(RuleDetailResponse),
        "thread_list" => schema_for!(ThreadListResponse),
        "command_response" => schema_for!(CommandResponse),
        "export_response" => schema_for!(ExportResponse),
        "init_response" => schema_for!(InitResponse),
        _ => return Ok(None),
    };
    Ok(Some(serde_json::to_value(schema)?))
}
