use chrono::Utc;
use qc_core::filter::{FilterState, ThreadScope, visible_threads};
use qc_core::responses::{RuleDetailResponse, RuleView, ThreadView};

use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::require_rule;
use crate::context::AppContext;
use crate::output::output_rows;

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let board = ctx.store.board();
    let rule = require_rule(board, id)?;
    let now = Utc::now();

    let threads = visible_threads(
        board,
        &FilterState::default(),
        &ThreadScope::Rule(rule.id.clone()),
    )
    .into_iter()
    .map(|thread| ThreadView::build(thread, now))
    .collect();

    output_rows(
        &RuleDetailResponse {
            rule: RuleView::build(board, rule),
            threads,
        },
        flags.format,
    )
}
