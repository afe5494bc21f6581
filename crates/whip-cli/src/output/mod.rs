use serde::Serialize;
use serde_json::Value;
use whip_core::responses::ContradictionReport;

use crate::cli::OutputFormat;

pub mod table;

const SEPARATOR: &str = "----------------------------------------";

/// Render a serializable response to a string in the requested format.
///
/// `Text` has no generic rendering and falls back to pretty JSON.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json | OutputFormat::Text => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// The bill → contradiction mapping between separator lines, sorted by bill id.
#[must_use]
pub fn report_text(report: &ContradictionReport) -> String {
    let mut lines = Vec::with_capacity(report.contradictions.len() + 2);
    lines.push(SEPARATOR.to_string());
    if report.contradictions.is_empty() {
        lines.push("(no partisan bills voted on)".to_string());
    }
    lines.extend(
        report
            .contradictions
            .iter()
            .map(|(bill_id, contradicted)| format!("{bill_id}: {contradicted}")),
    );
    lines.push(SEPARATOR.to_string());
    lines.join("\n")
}

fn table_options() -> table::TableOptions {
    table::TableOptions {
        max_width: std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse().ok()),
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, table_options()))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, table_options()))
        }
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, table_options());
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    headers.sort();

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
