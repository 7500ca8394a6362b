use std::path::{Path, PathBuf};

use anyhow::Context;
use qc_config::{QcConfig, STATE_DIR};
use qc_store::BoardStore;

/// Project configuration and the replayed board, opened once per invocation.
pub struct AppContext {
    pub project_root: PathBuf,
    pub config: QcConfig,
    pub store: BoardStore,
}

impl AppContext {
    pub fn open(project_root: PathBuf) -> anyhow::Result<Self> {
        let config = load_config(&project_root)?;
        let state_dir = project_root.join(STATE_DIR);
        let store = BoardStore::open(&state_dir)
            .with_context(|| format!("failed to open board in {}", state_dir.display()))?;
        tracing::debug!(root = %project_root.display(), "opened project");

        Ok(Self {
            project_root,
            config,
            store,
        })
    }
}

pub fn load_config(project_root: &Path) -> anyhow::Result<QcConfig> {
    QcConfig::load_for_project_with_dotenv(project_root)
        .context("failed to load qclist configuration")
}
