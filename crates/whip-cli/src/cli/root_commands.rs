use std::path::PathBuf;

use clap::{Args, Subcommand};
use whip_config::ConfigOverrides;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Report partisan bills where the legislator voted against their party.
    Report(ReportArgs),
    /// List the sessions a legislator served.
    Sessions(SessionsArgs),
    /// Print the JSON Schema of the report.
    Schema,
}

/// Which corpus and legislator to read. Unset flags fall back to config.
#[derive(Clone, Debug, Default, Args)]
pub struct TargetArgs {
    /// Corpus root containing `bills/` and `legislators/`
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// State code under `bills/` (e.g., tx)
    #[arg(long)]
    pub state: Option<String>,

    /// Legislator id (e.g., TXL000484)
    #[arg(long)]
    pub legislator: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Minimum party share, in (0, 1], for a vote block to count as partisan
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Measure this party's position instead of the legislator's own
    #[arg(long)]
    pub party: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SessionsArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

impl TargetArgs {
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            root: self.root.clone(),
            state: self.state.clone(),
            legislator_id: self.legislator.clone(),
            ..Default::default()
        }
    }
}

impl ReportArgs {
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            threshold: self.threshold,
            party: self.party.clone(),
            ..self.target.overrides()
        }
    }
}
