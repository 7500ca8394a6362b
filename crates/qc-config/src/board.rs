use serde::{Deserialize, Serialize};

const fn default_seed_on_init() -> bool {
    true
}

/// Board bootstrap settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoardConfig {
    /// Whether `qcl init` writes the demo board as the first journal entry.
    #[serde(default = "default_seed_on_init")]
    pub seed_on_init: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            seed_on_init: default_seed_on_init(),
        }
    }
}
