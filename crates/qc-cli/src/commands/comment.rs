use qc_core::command::Command;
use qc_core::enums::Author;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CommentCommands;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::respond::{Target, command_response};
use crate::commands::shared::text::require_text;
use crate::context::AppContext;
use crate::output::output;

/// Handle `qcl comment`.
pub fn handle(
    action: &CommentCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CommentCommands::Add {
            thread,
            text,
            author,
        } => {
            let command = Command::AddComment {
                thread_id: thread.clone(),
                text: require_text(text, "text")?.to_string(),
                author: parse_enum::<Author>(author, "author")?,
            };
            let change = ctx.store.execute(&command)?;
            output(
                &command_response(ctx.store.board(), vec![change], Target::Thread(thread)),
                flags.format,
            )
        }
    }
}
