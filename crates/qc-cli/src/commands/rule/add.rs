use qc_core::command::Command;
use qc_core::enums::Severity;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::respond::{Target, command_response};
use crate::commands::shared::text::require_text;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    module: &str,
    description: &str,
    severity: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let command = Command::AddRule {
        module_name: require_text(module, "module")?.to_string(),
        description: require_text(description, "description")?.to_string(),
        severity: parse_enum::<Severity>(severity, "severity")?,
    };
    let change = ctx.store.execute(&command)?;
    output(
        &command_response(ctx.store.board(), vec![change], Target::New),
        flags.format,
    )
}
