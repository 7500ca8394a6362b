use chrono::Utc;
use qc_core::policy::close_commands;

use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::require_thread;
use crate::commands::shared::respond::{Target, command_response};
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    id: &str,
    note: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let commands = close_commands(require_thread(ctx.store.board(), id)?, note)?;
    let changes = ctx.store.execute_all(&commands, Utc::now())?;
    output(
        &command_response(ctx.store.board(), changes, Target::Thread(id)),
        flags.format,
    )
}
