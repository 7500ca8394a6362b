//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Module preselected by list commands. Empty means all modules.
    #[serde(default)]
    pub default_module: String,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl GeneralConfig {
    /// The configured module filter, `None` for all modules.
    #[must_use]
    pub fn module_filter(&self) -> Option<String> {
        let module = self.default_module.trim();
        (!module.is_empty()).then(|| module.to_string())
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_module: String::new(),
            default_limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(config.default_module.is_empty());
        assert_eq!(config.module_filter(), None);
        assert_eq!(config.default_limit, 20);
    }

    #[test]
    fn blank_module_means_all() {
        let config = GeneralConfig {
            default_module: "  ".to_string(),
            ..GeneralConfig::default()
        };
        assert_eq!(config.module_filter(), None);
    }
}
