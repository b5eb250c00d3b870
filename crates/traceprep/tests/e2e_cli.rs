use std::path::Path;
use std::process::{Command, Output};

use traceprep_core::model::record::TraceRecord;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_traceprep")
}

// Point TRACEPREP_CONFIG at a path that does not exist so a developer's real
// config file cannot leak into the run.
fn cmd(temp: &Path) -> Command {
    let mut command = Command::new(bin());
    command.env("TRACEPREP_CONFIG", temp.join("no-config.toml"));
    for (key, _) in std::env::vars() {
        if key.starts_with("TRACEPREP_") && key != "TRACEPREP_CONFIG" {
            command.env_remove(&key);
        }
    }
    command
}

fn run_synth(temp: &Path, out: &Path, seed: u64) -> Output {
    cmd(temp)
        .arg("synth")
        .arg("--hosts")
        .arg("app-1,app-2")
        .arg("--ports")
        .arg("80,8080")
        .arg("--count")
        .arg("25")
        .arg("--seed")
        .arg(seed.to_string())
        .arg("--out")
        .arg(out)
        .output()
        .expect("spawn traceprep synth")
}

#[test]
fn synth_writes_requested_records() {
    let temp = tempfile::tempdir().unwrap();
    let out_path = temp.path().join("data.yaml");

    let out = run_synth(temp.path(), &out_path, 7);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let raw = std::fs::read_to_string(&out_path).unwrap();
    let records: Vec<TraceRecord> = serde_yaml::from_str(&raw).unwrap();
    assert_eq!(records.len(), 25);
    for record in &records {
        assert!(record.end >= record.start);
        assert!(record.start <= 120);
        assert!(record.end <= 180);
        let rest = record.host.strip_prefix("http://").unwrap();
        let (host, port) = rest.split_once(':').unwrap();
        assert!(matches!(host, "app-1" | "app-2"), "unknown host {host}");
        assert!(matches!(port, "80" | "8080"), "unknown port {port}");
        assert_eq!(record.method, "POST");
    }
}

#[test]
fn synth_is_deterministic_per_seed() {
    let temp = tempfile::tempdir().unwrap();
    let first = temp.path().join("a.yaml");
    let second = temp.path().join("b.yaml");

    assert!(run_synth(temp.path(), &first, 42).status.success());
    assert!(run_synth(temp.path(), &second, 42).status.success());

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn synth_without_hosts_fails() {
    let temp = tempfile::tempdir().unwrap();

    let out = cmd(temp.path())
        .arg("synth")
        .arg("--ports")
        .arg("80")
        .arg("--out")
        .arg(temp.path().join("data.yaml"))
        .output()
        .expect("spawn traceprep synth");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("hosts list is empty"), "stderr: {stderr}");
    assert!(!temp.path().join("data.yaml").exists());
}

#[test]
fn synth_json_summary_parses() {
    let temp = tempfile::tempdir().unwrap();
    let out_path = temp.path().join("data.yaml");

    let out = cmd(temp.path())
        .arg("--json")
        .arg("synth")
        .arg("--hosts")
        .arg("app-1")
        .arg("--ports")
        .arg("80")
        .arg("--count")
        .arg("5")
        .arg("--seed")
        .arg("1")
        .arg("--out")
        .arg(&out_path)
        .output()
        .expect("spawn traceprep synth");

    assert!(out.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(summary["records"], 5);
    assert_eq!(summary["out"], out_path.to_str().unwrap());
}

#[test]
fn extract_missing_input_fails() {
    let temp = tempfile::tempdir().unwrap();

    let out = cmd(temp.path())
        .arg("extract")
        .arg("--input")
        .arg(temp.path().join("missing.xlsx"))
        .arg("--out")
        .arg(temp.path().join("data.json"))
        .output()
        .expect("spawn traceprep extract");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("missing.xlsx"), "stderr: {stderr}");
}

#[test]
fn extract_rejects_unknown_sort_key() {
    let temp = tempfile::tempdir().unwrap();

    let out = cmd(temp.path())
        .arg("extract")
        .arg("--sort")
        .arg("duration")
        .output()
        .expect("spawn traceprep extract");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unknown sort key"), "stderr: {stderr}");
}
