//! Analysis parameters.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default share of one party a vote block needs to count as partisan.
const fn default_threshold() -> f64 {
    0.9
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Id of the legislator under analysis (e.g., `TXL000484`).
    #[serde(default)]
    pub legislator_id: String,

    /// Minimum party share, in `(0, 1]`, for a vote block to be partisan.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Party whose position is measured. Defaults to the legislator's own.
    #[serde(default)]
    pub party: Option<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            legislator_id: String::new(),
            threshold: default_threshold(),
            party: None,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.legislator_id.trim().is_empty() {
            return Err(ConfigError::NotConfigured {
                field: "analysis.legislator_id".into(),
            });
        }
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "analysis.threshold".into(),
                reason: format!("{} is outside (0, 1]", self.threshold),
            });
        }
        if self.party.as_deref().is_some_and(|party| party.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "analysis.party".into(),
                reason: "party name is empty".into(),
            });
        }
        Ok(())
    }
}
