use anyhow::Context;
use whip_analysis::AnalysisPipeline;
use whip_core::responses::SessionsResponse;

use crate::bootstrap;
use crate::cli::root_commands::SessionsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Handle `whip sessions`.
pub async fn handle(args: &SessionsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config(flags, &args.target.overrides())?;
    let pipeline = AnalysisPipeline::new(&config);

    let (legislator, sessions) = pipeline
        .sessions()
        .await
        .context("failed to resolve sessions")?;
    let response = SessionsResponse {
        legislator_id: config.analysis.legislator_id.clone(),
        party: legislator.party.to_string(),
        sessions,
    };

    if flags.format == OutputFormat::Text {
        for session in &response.sessions {
            println!("{session}");
        }
        return Ok(());
    }
    output::output(&response, flags.format)
}
