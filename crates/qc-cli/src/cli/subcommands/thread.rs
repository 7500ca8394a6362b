use clap::Subcommand;

/// Thread commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ThreadCommands {
    /// Raise a thread against a rule.
    Add {
        #[arg(long)]
        rule: String,
        #[arg(long)]
        title: String,
        /// Opening comment.
        #[arg(long)]
        comment: Option<String>,
        /// Author of the opening comment: qc, sm
        #[arg(long, default_value = "qc")]
        author: String,
    },
    /// List a rule's threads, open first.
    List {
        #[arg(long)]
        rule: String,
        /// open, closed (repeatable)
        #[arg(long = "thread-status")]
        thread_status: Vec<String>,
        /// Thread title (repeatable)
        #[arg(long)]
        title: Vec<String>,
    },
    /// Get a thread with its comments.
    Get { id: String },
    /// Set the action status of an open thread.
    SetAction {
        id: String,
        /// action-required, in-progress, on-hold, non-error, mere-observation, error
        #[arg(long)]
        status: String,
    },
    /// Set the priority of an open thread.
    SetPriority {
        id: String,
        /// p1, p2, p3
        #[arg(long)]
        priority: String,
    },
    /// Close a thread whose action status is final.
    Close {
        id: String,
        /// Closure note, recorded as a QC comment.
        #[arg(long)]
        note: Option<String>,
    },
    /// Reopen a closed thread.
    Reopen { id: String },
    /// Mark every comment of a thread as read.
    Read { id: String },
}
