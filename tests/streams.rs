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
fn debug_logs_never_reach_stdout() {
    let tf = program_file("+++.");
    let assert = cargo_bin()
        .env("BF_LOG", "debug")
        .arg(tf.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("running 4 byte program"));
    assert_eq!(assert.get_output().stdout, vec![3]);
}

#[test]
fn stderr_only_for_error_messages() {
    let tf = program_file("+++.[");
    cargo_bin()
        .env_remove("BF_LOG")
        .arg(tf.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("unmatched").not())
        .stderr(predicate::str::contains("unmatched"));
}
