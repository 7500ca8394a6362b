#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod context;
mod output;
mod ui;

const LOG_ENV: &str = "QCLIST_LOG";

fn main() {
    if let Err(error) = run() {
        eprintln!("qcl error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;
    ui::init(&flags);

    match cli.command {
        cli::Commands::Init(args) => commands::init::handle(&args, &flags),
        cli::Commands::Schema(args) => commands::schema::handle(&args, &flags),
        command => {
            let root = context::resolve_project_root(flags.project.as_deref())?;
            let mut ctx = context::AppContext::open(root)?;
            commands::dispatch::dispatch(command, &mut ctx, &flags)
        }
    }
}

/// Logs go to stderr so stdout stays parseable. `QCLIST_LOG` overrides the
/// level picked by `--quiet`/`--verbose`.
fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let fallback = match (flags.quiet, flags.verbose) {
        (true, _) => "error",
        (false, true) => "debug",
        (false, false) => "warn",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!("cannot install log subscriber: {error}"))
}
