use anyhow::Context;
use whip_config::{ConfigOverrides, WhipConfig};

use crate::cli::GlobalFlags;
use crate::config_warnings;

/// Load `.env`, layer config sources under the command-line overrides, and validate.
pub fn load_config(flags: &GlobalFlags, overrides: &ConfigOverrides) -> anyhow::Result<WhipConfig> {
    dotenvy::dotenv().ok();

    let config = WhipConfig::load_with_overrides(flags.config.as_deref(), overrides)
        .context("failed to load configuration")?;
    config_warnings::warn_unconfigured(&config);

    config.validate().context("invalid configuration")?;
    tracing::debug!(
        root = %config.corpus.root.display(),
        state = %config.corpus.state,
        legislator = %config.analysis.legislator_id,
        threshold = config.analysis.threshold,
        "configuration loaded"
    );
    Ok(config)
}
