use qc_core::command::Command;

use crate::cli::GlobalFlags;
use crate::commands::shared::respond::{Target, command_response};
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let change = ctx.store.execute(&Command::MarkThreadRead {
        thread_id: id.to_string(),
    })?;
    output(
        &command_response(ctx.store.board(), vec![change], Target::Thread(id)),
        flags.format,
    )
}
