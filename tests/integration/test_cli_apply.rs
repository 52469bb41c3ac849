use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const BIN: &str = "strmod";

/// Binary invocation isolated from the user's config files and STRMOD_* variables.
fn strmod(dir: &TempDir) -> Command {
    let config = dir.path().join("strmod.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }
    let mut cmd = Command::cargo_bin(BIN).expect("binary should build");
    for key in [
        "STRMOD_CONVERT_SLASHES",
        "STRMOD_TRIM_LINES",
        "STRMOD_OUTPUT_FORMAT",
        "STRMOD_OUTPUT_COPY",
        "STRMOD_LOG_LEVEL",
        "STRMOD_LOG_DIR",
        "STRMOD_LOG_CONSOLE",
        "RUST_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd.env("STRMOD_CONFIG", &config);
    cmd
}

#[test]
fn apply_literal_replacement() {
    let dir = TempDir::new().unwrap();
    strmod(&dir)
        .args(["apply", "a.b.c", "--find", ".", "--replace", "-"])
        .assert()
        .success()
        .stdout("a-b-c\n");
}

#[test]
fn apply_uses_default_slash_and_trim() {
    let dir = TempDir::new().unwrap();
    strmod(&dir)
        .args(["apply", "  C:\\Users\\me  "])
        .assert()
        .success()
        .stdout("C:/Users/me\n");
}

#[test]
fn apply_negated_toggles_keep_text() {
    let dir = TempDir::new().unwrap();
    strmod(&dir)
        .args(["apply", " a\\b ", "--no-trim", "--no-convert-slashes"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("No modifications selected"));
}

#[test]
fn apply_cut_marker_from_stdin() {
    let dir = TempDir::new().unwrap();
    strmod(&dir)
        .args(["apply", "--cut-marker", "web"])
        .write_stdin("  webFoo\\Bar  \nweb/web/app\nplain\n")
        .assert()
        .success()
        .stdout("Foo/Bar\n/web/app\nplain\n");
}

#[test]
fn apply_reads_input_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("paths.txt");
    fs::write(&input, "  hello  \n  world  ").unwrap();

    strmod(&dir)
        .args(["apply", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout("hello\nworld\n");
}

#[test]
fn apply_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    strmod(&dir)
        .args(["apply", "--input"])
        .arg(dir.path().join("missing.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read input file"));
}

#[test]
fn apply_empty_stdin_asks_for_a_value() {
    let dir = TempDir::new().unwrap();
    strmod(&dir)
        .args(["apply", "--find", "a", "--replace", "b"])
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Please enter a value"))
        .stderr(predicate::str::contains("hint: check TEXT"));
}

#[test]
fn apply_unpaired_replacement_names_both_flags() {
    let dir = TempDir::new().unwrap();
    strmod(&dir)
        .args(["apply", "abc", "--find", "a"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Both find and replace values are required for replacement",
        ))
        .stderr(predicate::str::contains("hint: check --find, --replace"));
}

#[test]
fn apply_cut_without_marker() {
    let dir = TempDir::new().unwrap();
    strmod(&dir)
        .args(["apply", "abc", "--cut"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Please specify where to end removal"));
}

#[test]
fn apply_json_success_report() {
    let dir = TempDir::new().unwrap();
    strmod(&dir)
        .args(["apply", "C:\\Users\\me", "--format", "json"])
        .assert()
        .success()
        .stdout("{\"status\":\"ok\",\"text\":\"C:/Users/me\"}\n");
}

#[test]
fn apply_json_invalid_report() {
    let dir = TempDir::new().unwrap();
    let output = strmod(&dir)
        .args(["apply", "abc", "--replace", "z", "--format", "json"])
        .output()
        .expect("should run");

    assert_eq!(output.status.code(), Some(2));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["status"], "invalid");
    assert_eq!(report["fields"], serde_json::json!(["find", "replace"]));
}

#[test]
fn apply_config_file_defaults_are_respected() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("strmod.toml"),
        "[defaults]\nconvert_slashes = false\ntrim_lines = false\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    strmod(&dir)
        .args(["apply", " a\\b ", "--trim"])
        .assert()
        .success()
        .stdout("{\"status\":\"ok\",\"text\":\"a\\\\b\"}\n");
}

#[test]
fn apply_explicit_config_flag() {
    let dir = TempDir::new().unwrap();
    let custom = dir.path().join("custom.toml");
    fs::write(&custom, "[defaults]\ntrim_lines = false\n").unwrap();

    strmod(&dir)
        .args(["apply", " x\\y ", "--config"])
        .arg(&custom)
        .assert()
        .success()
        .stdout(" x/y \n");
}

#[test]
fn apply_logs_summary_when_enabled() {
    let dir = TempDir::new().unwrap();
    strmod(&dir)
        .env("STRMOD_LOG_LEVEL", "info")
        .args(["apply", "x\\y"])
        .assert()
        .success()
        .stderr(predicate::str::contains("string replacement completed"));
}

#[test]
fn apply_writes_log_file() {
    let dir = TempDir::new().unwrap();
    let logs = dir.path().join("logs");
    strmod(&dir)
        .env("STRMOD_LOG_LEVEL", "info")
        .env("STRMOD_LOG_DIR", &logs)
        .env("STRMOD_LOG_CONSOLE", "none")
        .args(["apply", "abc", "--cut"])
        .assert()
        .code(2);

    let content = fs::read_to_string(logs.join("strmod.log")).unwrap();
    assert!(content.contains("Error: Please specify where to end removal"));
}

#[test]
fn config_command_prints_resolved_settings() {
    let dir = TempDir::new().unwrap();
    strmod(&dir)
        .env("STRMOD_TRIM_LINES", "false")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]"))
        .stdout(predicate::str::contains("trim_lines = false"))
        .stdout(predicate::str::contains("STRMOD_OUTPUT_FORMAT"));
}
