use qc_core::command::Command;

use crate::cli::GlobalFlags;
use crate::commands::shared::respond::{Target, command_response};
use crate::commands::shared::text::require_text;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, reason: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let command = Command::MarkRuleNa {
        rule_id: id.to_string(),
        reason: require_text(reason, "reason")?.to_string(),
    };
    let change = ctx.store.execute(&command)?;
    output(
        &command_response(ctx.store.board(), vec![change], Target::Rule(id)),
        flags.format,
    )
}
