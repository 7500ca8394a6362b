use qc_core::policy::reopen_rejection;

use crate::commands::shared::lookup::require_thread;
use crate::context::AppContext;

/// Always fails: closed threads cannot be reopened.
pub fn run(id: &str, ctx: &AppContext) -> anyhow::Result<()> {
    let thread = require_thread(ctx.store.board(), id)?;
    Err(reopen_rejection(thread).into())
}
