use chrono::Utc;
use qc_core::enums::ThreadStatus;
use qc_core::filter::{FilterState, Selection, ThreadScope, visible_threads};
use qc_core::responses::{ThreadListResponse, ThreadView};

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::lookup::require_rule;
use crate::commands::shared::parse::parse_all;
use crate::context::AppContext;
use crate::output::output_rows;

pub fn run(
    rule_id: &str,
    thread_status: &[String],
    title: &[String],
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let board = ctx.store.board();
    let rule = require_rule(board, rule_id)?;

    let mut filter = FilterState::default();
    *filter.thread_status_mut() =
        Selection::from_values(parse_all::<ThreadStatus>(thread_status, "thread status")?);
    *filter.thread_title_mut() = Selection::from_values(title.iter().cloned());

    let mut threads = visible_threads(board, &filter, &ThreadScope::Rule(rule.id.clone()));
    let total = u32::try_from(threads.len())?;
    threads.truncate(effective_limit(flags.limit, ctx.config.general.default_limit));

    let now = Utc::now();
    output_rows(
        &ThreadListResponse {
            rule_id: rule.id.clone(),
            threads: threads
                .into_iter()
                .map(|thread| ThreadView::build(thread, now))
                .collect(),
            total,
        },
        flags.format,
    )
}
