//! Corpus location configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Root of the corpus export (contains `bills/` and `legislators/`).
    #[serde(default)]
    pub root: PathBuf,

    /// Two-letter state code used under `bills/` (e.g., `tx`).
    #[serde(default)]
    pub state: String,
}

impl CorpusConfig {
    /// Check that the corpus can be located.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root.as_os_str().is_empty() {
            return Err(ConfigError::NotConfigured {
                field: "corpus.root".into(),
            });
        }
        if self.state.trim().is_empty() {
            return Err(ConfigError::NotConfigured {
                field: "corpus.state".into(),
            });
        }
        if self.state.contains(['/', '\\']) || self.state.contains("..") {
            return Err(ConfigError::InvalidValue {
                field: "corpus.state".into(),
                reason: format!("'{}' is not a state code", self.state),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = CorpusConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { field }) if field == "corpus.root"
        ));
    }

    #[test]
    fn missing_state_is_reported() {
        let config = CorpusConfig {
            root: "/data/openstates".into(),
            state: "  ".into(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { field }) if field == "corpus.state"
        ));
    }

    #[test]
    fn state_with_path_separator_is_rejected() {
        let config = CorpusConfig {
            root: "/data/openstates".into(),
            state: "../tx".into(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn root_and_state_validate() {
        let config = CorpusConfig {
            root: "/data/openstates".into(),
            state: "tx".into(),
        };
        assert!(config.validate().is_ok());
    }
}
