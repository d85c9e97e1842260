use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn csvd() -> Command {
    Command::cargo_bin("csvd").unwrap()
}

#[test]
fn converts_csv_to_html() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.csv");
    let output = dir.path().join("doc.html");
    fs::write(&input, "h1,Title\np,Body text").unwrap();

    csvd()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Conversion complete"));

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "<h1>Title</h1>\n<p>Body text</p>"
    );
}

#[test]
fn converts_tsv_with_type_flag() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.tsv");
    let output = dir.path().join("doc.html");
    fs::write(&input, "h1\tTitle").unwrap();

    csvd()
        .args(["--type", "tsv"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "<h1>Title</h1>");
}

#[test]
fn creates_missing_output_directories() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.csv");
    let output = dir.path().join("out/nested/doc.html");
    fs::write(&input, "p,text").unwrap();

    csvd().arg(&input).arg(&output).assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "<p>text</p>");
}

#[test]
fn missing_input_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("doc.html");

    csvd()
        .arg(dir.path().join("missing.csv"))
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn verbose_shows_detail() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.csv");
    let output = dir.path().join("doc.html");
    fs::write(&input, "p,text").unwrap();

    csvd()
        .arg("--verbose")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("KB"));
}

#[test]
fn missing_arguments_fail() {
    csvd().assert().failure();
}

#[test]
fn version_flag_prints_and_exits() {
    csvd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("csvd"));
}
