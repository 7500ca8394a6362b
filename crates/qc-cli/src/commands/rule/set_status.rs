use qc_core::command::Command;
use qc_core::enums::RuleStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::respond::{Target, command_response};
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, status: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let command = Command::SetRuleStatus {
        rule_id: id.to_string(),
        status: parse_enum::<RuleStatus>(status, "status")?,
    };
    let change = ctx.store.execute(&command)?;
    output(
        &command_response(ctx.store.board(), vec![change], Target::Rule(id)),
        flags.format,
    )
}
