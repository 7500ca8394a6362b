use clap::{Args, Subcommand};

/// Filter commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FilterCommands {
    /// Show the values offered for each filter dimension.
    Options {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// The five filter dimensions. Repeat a flag to select several values;
/// omit it to select all.
#[derive(Clone, Debug, Default, Args)]
pub struct FilterArgs {
    /// Module name (defaults to `general.default_module`)
    #[arg(long)]
    pub module: Option<String>,
    /// Select every module, ignoring `general.default_module`
    #[arg(long, conflicts_with = "module")]
    pub all_modules: bool,
    /// Rule status: pass, fail, open, na
    #[arg(long)]
    pub status: Vec<String>,
    /// Business rule description
    #[arg(long = "business-rule")]
    pub business_rule: Vec<String>,
    /// Thread title
    #[arg(long)]
    pub title: Vec<String>,
    /// Thread status: open, closed
    #[arg(long = "thread-status")]
    pub thread_status: Vec<String>,
}
