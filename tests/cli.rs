use pretty_assertions::assert_eq;
use std::path::PathBuf;
use std::process::{Command, Output};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn preprocessor(args: &[PathBuf]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_preprocessor"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run preprocessor")
}

#[test]
fn no_files_prints_usage_to_stdout_and_succeeds() {
    let out = preprocessor(&[]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Usage: preprocessor"), "{stdout}");
}

#[test]
fn charts_are_written_as_one_json_array() {
    let out = preprocessor(&[data("line.csv"), data("range.csv")]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1], serde_json::Value::Null);
    assert_eq!(entries[0][0]["data"]["yAxis"]["max"], 30.0);
    assert_eq!(entries[2][0]["data"]["yAxis"]["max"], 30.0);
}

#[test]
fn failure_exits_nonzero_without_stdout() {
    let out = preprocessor(&[data("empty.csv")]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no rows could be parsed"), "{stderr}");
}

#[test]
fn brain_insights_region_combines_files() {
    let out = Command::new(env!("CARGO_BIN_EXE_brain-insights"))
        .arg(data("volume.csv"))
        .arg(data("iron.csv"))
        .args(["--region", "Left hippocampus"])
        .env_remove("RUST_LOG")
        .output()
        .expect("run brain-insights");
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["title"]["text"], "Left hippocampus");
    assert_eq!(json["series"].as_array().map(Vec::len), Some(3));
}
