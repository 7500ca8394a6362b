//! Spreadsheet export configuration.

use qc_core::export::{DEFAULT_DATE_FORMAT, DateFormat};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Directory the workbook is written to, relative to the project root.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// strftime pattern for date cells, rendered in local time.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl ExportConfig {
    /// Parse `date_format`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unknown strftime specifier.
    pub fn date_format(&self) -> Result<DateFormat, ConfigError> {
        DateFormat::parse(&self.date_format).map_err(|e| ConfigError::InvalidValue {
            field: "export.date_format".to_string(),
            reason: e.to_string(),
        })
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            date_format: default_date_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format_parses() {
        let config = ExportConfig::default();
        assert_eq!(config.output_dir, ".");
        assert_eq!(config.date_format().unwrap().as_str(), "%-m/%-d/%Y");
    }

    #[test]
    fn bad_format_is_rejected() {
        let config = ExportConfig {
            date_format: "%Y-%Q".to_string(),
            ..ExportConfig::default()
        };
        let err = config.date_format().unwrap_err();
        assert!(err.to_string().contains("export.date_format"));
    }
}
