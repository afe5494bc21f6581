//! Runs the `whip` binary against a corpus on disk.

use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;

const TARGET: &str = "TXL000484";

fn write(root: &Path, relative: &str, document: &Value) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().expect("path has parent")).expect("dirs create");
    std::fs::write(path, document.to_string()).expect("file writes");
}

fn legislator(root: &Path, id: &str, party: &str) {
    write(
        root,
        &format!("legislators/{id}"),
        &json!({"leg_id": id, "party": party, "chamber": "house", "roles": [{"term": "85R"}]}),
    );
}

/// Nine Republicans vote yes on `HB 1`; the target Republican votes no.
fn corpus() -> TempDir {
    let temp = TempDir::new().expect("tempdir should create");
    let root = temp.path();
    legislator(root, TARGET, "Republican");

    let yes: Vec<Value> = (1..=9)
        .map(|n| {
            let id = format!("TXR{n:03}");
            legislator(root, &id, "Republican");
            json!({"leg_id": id})
        })
        .collect();
    write(
        root,
        "bills/tx/85R/house/TXB00001",
        &json!({"bill_id": "HB 1", "votes": [{"yes_votes": yes, "no_votes": [{"leg_id": TARGET}]}]}),
    );
    temp
}

fn whip(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_whip"))
        .args(args)
        .current_dir(cwd)
        .env("HOME", cwd)
        .env("XDG_CONFIG_HOME", cwd)
        .env_remove("WHIP_LOG")
        .env_remove("WHIP_CORPUS__ROOT")
        .env_remove("WHIP_CORPUS__STATE")
        .env_remove("WHIP_ANALYSIS__LEGISLATOR_ID")
        .env_remove("WHIP_ANALYSIS__THRESHOLD")
        .env_remove("WHIP_ANALYSIS__PARTY")
        .output()
        .expect("whip binary runs")
}

fn report_args<'a>(root: &'a str, legislator: &'a str) -> Vec<&'a str> {
    vec![
        "report",
        "--root",
        root,
        "--state",
        "tx",
        "--legislator",
        legislator,
    ]
}

#[test]
fn text_report_lists_contradictions_between_separators() {
    let corpus = corpus();
    let root = corpus.path().to_str().expect("utf-8 path");

    let out = whip(corpus.path(), &report_args(root, TARGET));
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).expect("utf-8 stdout");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "HB 1: true");
    assert!(lines[0].starts_with("---"));
    assert_eq!(lines[0], lines[2]);
}

#[test]
fn json_report_carries_findings() {
    let corpus = corpus();
    let root = corpus.path().to_str().expect("utf-8 path");

    let mut args = report_args(root, TARGET);
    args.extend(["--format", "json"]);
    let out = whip(corpus.path(), &args);
    assert_eq!(out.status.code(), Some(0));

    let report: Value = serde_json::from_slice(&out.stdout).expect("stdout is json");
    assert_eq!(report["contradictions"], json!({"HB 1": true}));
    assert_eq!(report["party"], "Republican");
    assert_eq!(report["findings"][0]["party_position"], "yes");
    assert_eq!(report["findings"][0]["cast"], "no");
}

#[test]
fn config_file_supplies_the_corpus() {
    let corpus = corpus();
    let config = corpus.path().join("whip.toml");
    std::fs::write(
        &config,
        format!(
            "[corpus]\nroot = {:?}\nstate = \"tx\"\n\n[analysis]\nlegislator_id = \"{TARGET}\"\n",
            corpus.path().to_str().expect("utf-8 path")
        ),
    )
    .expect("config writes");

    let out = whip(
        corpus.path(),
        &["sessions", "--config", config.to_str().expect("utf-8 path")],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "85R/house");
}

#[test]
fn dotenv_file_supplies_the_legislator() {
    let corpus = corpus();
    let root = corpus.path().to_str().expect("utf-8 path");
    std::fs::write(
        corpus.path().join(".env"),
        format!("WHIP_ANALYSIS__LEGISLATOR_ID={TARGET}\n"),
    )
    .expect(".env writes");

    let out = whip(corpus.path(), &["sessions", "--root", root, "--state", "tx"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "85R/house");
}

#[test]
fn missing_legislator_exits_with_error() {
    let corpus = corpus();
    let root = corpus.path().to_str().expect("utf-8 path");

    let out = whip(corpus.path(), &report_args(root, "TXL999999"));
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("whip error"));
}

#[test]
fn missing_legislator_id_is_a_config_error() {
    let corpus = corpus();
    let root = corpus.path().to_str().expect("utf-8 path");

    let out = whip(corpus.path(), &["report", "--root", root, "--state", "tx"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("analysis.legislator_id"));
}

#[test]
fn schema_describes_the_report() {
    let temp = TempDir::new().expect("tempdir should create");
    let out = whip(temp.path(), &["schema"]);
    assert!(out.status.success());

    let schema: Value = serde_json::from_slice(&out.stdout).expect("stdout is json");
    assert_eq!(schema["title"], "ContradictionReport");
    assert!(schema["properties"]["contradictions"].is_object());
}
