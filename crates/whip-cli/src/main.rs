use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod config_warnings;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("whip error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;

    commands::dispatch::dispatch(&cli.command, &flags).await
}

/// Log level used when `WHIP_LOG` is unset. `--quiet` wins over `--verbose`.
const fn default_level(flags: &cli::GlobalFlags) -> &'static str {
    if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    }
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("WHIP_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level(flags)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
