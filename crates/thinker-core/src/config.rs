//! Application configuration model.

use crate::thought::{DEFAULT_CATEGORY, Priority};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "thoughts.json";

/// User configuration, usually read from `config.toml`.
///
/// Every field is optional in the file; missing fields take their defaults.
///
/// ```toml
/// data_file = "notes/thoughts.json"
/// export_dir = "notes/exports"
/// default_category = "ideas"
/// default_priority = 4
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ThinkerConfig {
    /// Where sessions are persisted
    pub data_file: PathBuf,
    /// Directory that exports are written into
    pub export_dir: PathBuf,
    /// Category for new thoughts when none is given
    pub default_category: String,
    /// Priority for new thoughts when none is given (clamped to 1..=5)
    pub default_priority: i64,
}

impl Default for ThinkerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            export_dir: PathBuf::from("."),
            default_category: DEFAULT_CATEGORY.to_string(),
            default_priority: i64::from(Priority::default().value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ThinkerConfig = toml::from_str("default_priority = 5").unwrap();
        assert_eq!(config.default_priority, 5);
        assert_eq!(config.default_category, "general");
        assert_eq!(config.data_file, PathBuf::from("thoughts.json"));
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: ThinkerConfig = toml::from_str("").unwrap();
        assert_eq!(config, ThinkerConfig::default());
    }
}
