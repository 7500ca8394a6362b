use chrono::Utc;
use qc_core::filter::{FilterState, ThreadScope, visible_threads};
use qc_core::responses::ThreadView;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let board = ctx.store.board();
    let threads = visible_threads(
        board,
        &FilterState::default(),
        &ThreadScope::Thread(id.to_string()),
    );
    let Some(thread) = threads.first() else {
        anyhow::bail!("thread '{id}' not found");
    };
    output(&ThreadView::build(thread, Utc::now()), flags.format)
}
