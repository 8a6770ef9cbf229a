//! Search-space configuration
//!
//! ```json
//! {
//!     "blocks_to_use": ["TUNABLE_CONVOLUTION", "FLATTEN"],
//!     "strict": true
//! }
//! ```
//!
//! Both fields are optional. Without `blocks_to_use` every registered kind
//! contributes; with `strict` a selection naming an unregistered kind is
//! rejected instead of logged.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::search_space::BlockSelection;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSpaceConfig {
    /// Names of the block kinds to include; `None` includes all
    pub blocks_to_use: Option<Vec<String>>,
    /// Reject selections naming unregistered kinds
    pub strict: bool,
}

impl SearchSpaceConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn selection(&self) -> BlockSelection {
        BlockSelection::from(self.blocks_to_use.clone())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SearchSpaceConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SearchSpaceConfig::default());
        assert_eq!(config.selection(), BlockSelection::All);
    }

    #[test]
    fn test_parse_selection() {
        let config = SearchSpaceConfig::from_json_str(
            r#"{"blocks_to_use": ["FLATTEN", "LSTM_64"], "strict": true}"#,
        )
        .unwrap();

        assert!(config.strict);
        assert_eq!(config.selection(), BlockSelection::only(["LSTM_64", "FLATTEN"]));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = SearchSpaceConfig::from_json_str(r#"{"blocks": []}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"blocks_to_use": ["FLATTEN"]}}"#).unwrap();

        let config = SearchSpaceConfig::from_file(file.path()).unwrap();
        assert_eq!(config.blocks_to_use, Some(vec!["FLATTEN".to_string()]));
        assert!(!config.strict);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SearchSpaceConfig::from_file(dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
