use assert_cmd::Command;
use predicates::prelude::*;

const BIN: &str = "strmod";

fn help_for(args: &[&str]) -> String {
    let output = Command::cargo_bin(BIN)
        .expect("binary should build")
        .args(args)
        .output()
        .expect("should run successfully");

    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn version_flag_prints_crate_version() {
    Command::cargo_bin(BIN)
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(strmod::VERSION));
}

#[test]
fn top_level_help_lists_commands() {
    let stdout = help_for(&["--help"]);
    assert!(stdout.contains("COMMANDS"));
    assert!(stdout.contains("apply"));
    assert!(stdout.contains("config"));
    assert!(stdout.contains("replace, cut, slashes, trim"));
}

#[test]
fn apply_help_groups_operations() {
    let stdout = help_for(&["apply", "--help"]);
    assert!(stdout.contains("Replacement"));
    assert!(stdout.contains("Line Operations"));
    assert!(stdout.contains("Output Options"));
    assert!(stdout.contains("--cut-marker"));
    assert!(stdout.contains("--no-convert-slashes"));
    assert!(stdout.contains("--no-trim"));
}

#[test]
fn apply_help_includes_examples() {
    let stdout = help_for(&["apply", "--help"]);
    assert!(stdout.contains("Examples:"));
    assert!(stdout.contains("strmod apply 'a.b.c' --find . --replace -"));
}

#[test]
fn text_and_input_conflict() {
    Command::cargo_bin(BIN)
        .unwrap()
        .args(["apply", "abc", "--input", "file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
