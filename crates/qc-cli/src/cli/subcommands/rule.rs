use clap::Subcommand;

use super::FilterArgs;

/// Business rule commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RuleCommands {
    /// Add a rule to a module.
    Add {
        #[arg(long)]
        module: String,
        #[arg(long)]
        description: String,
        /// critical, major, significant
        #[arg(long, default_value = "major")]
        severity: String,
    },
    /// List visible rules grouped by module.
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Get a rule with its threads.
    Get { id: String },
    /// Override a rule's status.
    SetStatus {
        id: String,
        /// pass, fail, open, na
        #[arg(long)]
        status: String,
    },
    /// Mark a rule as not applicable.
    MarkNa {
        id: String,
        #[arg(long)]
        reason: String,
    },
}
