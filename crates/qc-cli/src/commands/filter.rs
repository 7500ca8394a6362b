use qc_core::filter::options;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FilterCommands;
use crate::commands::shared::filter_args::build_filter;
use crate::context::AppContext;
use crate::output::output;

/// Handle `qcl filter`.
pub fn handle(action: &FilterCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        FilterCommands::Options { filter } => {
            let filter = build_filter(filter, &ctx.config)?;
            output(&options(ctx.store.board(), &filter), flags.format)
        }
    }
}
