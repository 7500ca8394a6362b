use qc_core::command::Command;
use qc_core::enums::Priority;
use qc_core::policy::ensure_editable;

use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::require_thread;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::respond::{Target, command_response};
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    id: &str,
    priority: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let priority = parse_enum::<Priority>(priority, "priority")?;
    ensure_editable(require_thread(ctx.store.board(), id)?)?;

    let change = ctx.store.execute(&Command::SetPriority {
        thread_id: id.to_string(),
        priority,
    })?;
    output(
        &command_response(ctx.store.board(), vec![change], Target::Thread(id)),
        flags.format,
    )
}
