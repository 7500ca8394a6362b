use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    CommentCommands, FilterArgs, FilterCommands, RuleCommands, ThreadCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create the .qclist journal for a project.
    Init(InitArgs),
    /// Business rules.
    Rule {
        #[command(subcommand)]
        action: RuleCommands,
    },
    /// Threads raised against a rule.
    Thread {
        #[command(subcommand)]
        action: ThreadCommands,
    },
    /// Thread comments.
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },
    /// Filter dimensions.
    Filter {
        #[command(subcommand)]
        action: FilterCommands,
    },
    /// Export the filtered board to a spreadsheet.
    Export(ExportArgs),
    /// Print the JSON schema of a response or entity type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Start with an empty board even when `board.seed_on_init` is set.
    #[arg(long)]
    pub empty: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Directory for the workbook (defaults to `export.output_dir`).
    #[arg(long)]
    pub output_dir: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name, e.g. `board`, `thread`, `rule-list`.
    pub type_name: String,
}
