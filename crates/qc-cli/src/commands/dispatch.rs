use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Rule { action } => commands::rule::handle(&action, ctx, flags),
        Commands::Thread { action } => commands::thread::handle(&action, ctx, flags),
        Commands::Comment { action } => commands::comment::handle(&action, ctx, flags),
        Commands::Filter { action } => commands::filter::handle(&action, ctx, flags),
        Commands::Export(args) => commands::export::handle(&args, ctx, flags),
        Commands::Init(_) | Commands::Schema(_) => {
            unreachable!("init/schema are pre-dispatched in main")
        }
    }
}
