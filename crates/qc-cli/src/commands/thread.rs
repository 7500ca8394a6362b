mod add;
mod close;
mod get;
mod list;
mod read;
mod reopen;
mod set_action;
mod set_priority;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ThreadCommands;
use crate::context::AppContext;

/// Handle `qcl thread`.
pub fn handle(
    action: &ThreadCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ThreadCommands::Add {
            rule,
            title,
            comment,
            author,
        } => add::run(
            add::Params {
                rule_id: rule,
                title,
                comment: comment.as_deref(),
                author,
            },
            ctx,
            flags,
        ),
        ThreadCommands::List {
            rule,
            thread_status,
            title,
        } => list::run(rule, thread_status, title, ctx, flags),
        ThreadCommands::Get { id } => get::run(id, ctx, flags),
        ThreadCommands::SetAction { id, status } => set_action::run(id, status, ctx, flags),
        ThreadCommands::SetPriority { id, priority } => {
            set_priority::run(id, priority, ctx, flags)
        }
        ThreadCommands::Close { id, note } => close::run(id, note.as_deref(), ctx, flags),
        ThreadCommands::Reopen { id } => reopen::run(id, ctx),
        ThreadCommands::Read { id } => read::run(id, ctx, flags),
    }
}
