use schemars::schema_for;
use whip_core::responses::ContradictionReport;

use crate::cli::{GlobalFlags, OutputFormat};

/// Handle `whip schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_for!(ContradictionReport);
    let rendered = match flags.format {
        OutputFormat::Raw => serde_json::to_string(&schema)?,
        OutputFormat::Text | OutputFormat::Json | OutputFormat::Table => {
            serde_json::to_string_pretty(&schema)?
        }
    };
    println!("{rendered}");
    Ok(())
}
