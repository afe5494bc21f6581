use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `whip` binary.
#[derive(Debug, Parser)]
#[command(
    name = "whip",
    version,
    about = "whip - party-line votes on partisan bills"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json, table, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of .whip/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}
