//! # whip-config
//!
//! Layered configuration loading for whip using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Command-line overrides ([`ConfigOverrides`])
//! 2. Environment variables (`WHIP_*` prefix, `__` as separator)
//! 3. An explicit config file, or project-level `.whip/config.toml`
//! 4. User-level `~/.config/whip/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `WHIP_CORPUS__ROOT` -> `corpus.root`,
//! `WHIP_ANALYSIS__THRESHOLD` -> `analysis.threshold`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use whip_config::WhipConfig;
//!
//! let config = WhipConfig::load(None).expect("config");
//! config.validate().expect("valid config");
//! println!("corpus: {}", config.corpus.root.display());
//! ```

mod analysis;
mod corpus;
mod error;

pub use analysis::AnalysisConfig;
pub use corpus::CorpusConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WhipConfig {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Values supplied on the command line. `None` leaves the layered value alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub root: Option<PathBuf>,
    pub state: Option<String>,
    pub legislator_id: Option<String>,
    pub threshold: Option<f64>,
    pub party: Option<String>,
}

impl ConfigOverrides {
    /// Merge every set override on top of `figment`.
    #[must_use]
    pub fn apply(&self, mut figment: Figment) -> Figment {
        if let Some(root) = &self.root {
            figment = figment.merge(Serialized::default("corpus.root", root));
        }
        if let Some(state) = &self.state {
            figment = figment.merge(Serialized::default("corpus.state", state));
        }
        if let Some(id) = &self.legislator_id {
            figment = figment.merge(Serialized::default("analysis.legislator_id", id));
        }
        if let Some(threshold) = self.threshold {
            figment = figment.merge(Serialized::default("analysis.threshold", threshold));
        }
        if let Some(party) = &self.party {
            figment = figment.merge(Serialized::default("analysis.party", party));
        }
        figment
    }
}

impl WhipConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; the binary loads it before calling this.
    /// `config_file` replaces the project-local `.whip/config.toml` when given.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(config_file).extract().map_err(ConfigError::from)
    }

    /// Load configuration with command-line overrides applied last.
    pub fn load_with_overrides(
        config_file: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        overrides
            .apply(Self::figment(config_file))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain (without command-line overrides).
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Explicit file, else project-local config
        match config_file {
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                let local_path = PathBuf::from(".whip/config.toml");
                if local_path.exists() {
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        // Layer 3: Environment variables
        figment.merge(Env::prefixed("WHIP_").split("__"))
    }

    /// Check every section for missing or out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.corpus.validate()?;
        self.analysis.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("whip").join("config.toml"))
    }
}
