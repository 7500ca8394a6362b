use clap::Subcommand;

/// Comment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CommentCommands {
    /// Add a comment to a thread.
    Add {
        #[arg(long)]
        thread: String,
        #[arg(long)]
        text: String,
        /// qc, sm
        #[arg(long, default_value = "qc")]
        author: String,
    },
}
