use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cargo_bin() -> Command {
    let mut cmd = Command::cargo_bin("bf").unwrap();
    cmd.env("BF_CONFIG", "/nonexistent/bf.toml")
        .env_remove("BF_STRATEGY")
        .env_remove("BF_EOF");
    cmd
}

fn program_file(content: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", content).unwrap();
    tf
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    cargo_bin()
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("expected exactly one argument").and(predicate::str::contains("Usage:")));
}

#[test]
fn two_paths_are_rejected() {
    let a = program_file("+.");
    let b = program_file("+.");
    cargo_bin()
        .arg(a.path())
        .arg(b.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty().not());
}

#[test]
fn missing_file_is_reported() {
    cargo_bin()
        .arg("/nonexistent/program.bf")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read program file"));
}

#[test]
fn help_goes_to_stderr_and_succeeds() {
    cargo_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn unknown_strategy_flag_value_is_rejected() {
    let tf = program_file("+.");
    cargo_bin()
        .args(["--strategy", "jit"])
        .arg(tf.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("jit"));
}

#[test]
fn both_strategies_produce_the_same_output() {
    let tf = program_file("++++++++[>++++++++<-]>+.+.<<");
    for strategy in ["naive", "rle"] {
        let assert = cargo_bin()
            .args(["--strategy", strategy])
            .arg(tf.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("instruction 27"));
        assert_eq!(assert.get_output().stdout, b"AB".to_vec(), "strategy {strategy}");
    }
}
