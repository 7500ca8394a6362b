use anyhow::Context;
use chrono::Utc;
use qc_config::STATE_DIR;
use qc_core::responses::InitResponse;
use qc_core::seed::mock_board;
use qc_store::BoardStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::context::{init_root, load_config};
use crate::output::output;

/// Handle `qcl init`.
pub fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let root = init_root(flags.project.as_deref())?;
    let config = load_config(&root)?;
    let seeded = config.board.seed_on_init && !args.empty;
    let now = Utc::now();
    let store = BoardStore::init(&root.join(STATE_DIR), seeded.then(|| mock_board(now)), now)
        .context("failed to initialize board")?;

    let board = store.board();
    output(
        &InitResponse {
            journal: store.journal_path().display().to_string(),
            seeded,
            rules: u32::try_from(board.rules.len())?,
            threads: u32::try_from(board.threads.len())?,
        },
        flags.format,
    )
}
