mod add;
mod get;
mod list;
mod mark_na;
mod set_status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RuleCommands;
use crate::context::AppContext;

/// Handle `qcl rule`.
pub fn handle(action: &RuleCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        RuleCommands::Add {
            module,
            description,
            severity,
        } => add::run(module, description, severity, ctx, flags),
        RuleCommands::List { filter } => list::run(filter, ctx, flags),
        RuleCommands::Get { id } => get::run(id, ctx, flags),
        RuleCommands::SetStatus { id, status } => set_status::run(id, status, ctx, flags),
        RuleCommands::MarkNa { id, reason } => mark_na::run(id, reason, ctx, flags),
    }
}
