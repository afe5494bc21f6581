use anyhow::Context;
use serde::Serialize;
use whip_analysis::AnalysisPipeline;
use whip_core::enums::VotePosition;
use whip_core::responses::ContradictionReport;

use crate::bootstrap;
use crate::cli::root_commands::ReportArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// One table row per assessed bill.
#[derive(Debug, Serialize)]
struct FindingRow<'a> {
    bill_id: &'a str,
    session: &'a str,
    chamber: &'a str,
    party_position: VotePosition,
    cast: VotePosition,
    contradicted: bool,
}

/// Handle `whip report`.
pub async fn handle(args: &ReportArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config(flags, &args.overrides())?;
    let pipeline = AnalysisPipeline::new(&config);

    let report = pipeline.run().await.with_context(|| {
        format!(
            "analysis failed for legislator {}",
            config.analysis.legislator_id
        )
    })?;
    tracing::info!(
        legislator = %report.legislator_id,
        contradictions = report.contradiction_count(),
        bills = report.findings.len(),
        "report ready"
    );

    match flags.format {
        OutputFormat::Text => {
            println!("{}", output::report_text(&report));
            Ok(())
        }
        OutputFormat::Table => output::output(&finding_rows(&report), flags.format),
        OutputFormat::Json | OutputFormat::Raw => output::output(&report, flags.format),
    }
}

fn finding_rows(report: &ContradictionReport) -> Vec<FindingRow<'_>> {
    report
        .findings
        .iter()
        .map(|finding| FindingRow {
            bill_id: &finding.bill_id,
            session: &finding.session.session,
            chamber: &finding.session.chamber,
            party_position: finding.party_position,
            cast: finding.cast,
            contradicted: finding.contradicted,
        })
        .collect()
}
