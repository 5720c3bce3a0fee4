mod common;

use assert_cmd::Command;
use predicates::str::contains;
use common::{read_rows, write_candidates, Fixture};

fn cmd() -> Command {
    Command::cargo_bin("adj-score").unwrap()
}

#[test]
fn default_paths_relative_to_working_dir() {
    let fixture = Fixture::new(&["walking", "running"]);
    cmd()
        .current_dir(&fixture.root)
        .env("HOME", &fixture.root)
        .arg("--offline")
        .assert()
        .success()
        .stdout(contains("[\"walking\", \"running\"]"))
        .stdout(contains("Word: walking"))
        .stdout(contains("Total occurrences of running: 4"))
        .stdout(contains("Occurrences of running before a noun: 1"))
        .stdout(contains("Adjectivalness: 0.25"));

    let rows = read_rows(&fixture.output);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], vec!["walking", "2", "1", "0.5"]);
}

#[test]
fn explicit_paths_and_tag() {
    let fixture = Fixture::new(&[]);
    let input = fixture.root.join("words.xlsx");
    let output = fixture.root.join("scores.xlsx");
    write_candidates(&input, "form", &["running"]);
    cmd()
        .arg("--input").arg(&input)
        .arg("--column").arg("form")
        .arg("--output").arg(&output)
        .arg("--corpus").arg(&fixture.brown)
        .arg("--noun-tag").arg("NN-TL")
        .arg("--offline")
        .assert()
        .success();
    assert_eq!(read_rows(&output)[1], vec!["running", "4", "1", "0.25"]);
}

#[test]
fn first_token_flag() {
    let fixture = Fixture::new(&["running"]);
    cmd()
        .current_dir(&fixture.root)
        .arg("--corpus").arg(&fixture.brown)
        .arg("--offline")
        .arg("--count-first-token")
        .assert()
        .success()
        .stdout(contains("Adjectivalness: 0.5"));
}

#[test]
fn missing_input_is_fatal() {
    let fixture = Fixture::new(&["running"]);
    cmd()
        .current_dir(&fixture.root)
        .arg("--input").arg("absent.xlsx")
        .arg("--corpus").arg(&fixture.brown)
        .arg("--offline")
        .assert()
        .failure()
        .stderr(contains("absent.xlsx"));
    assert!(!fixture.output.exists());
}

#[test]
fn offline_without_corpus_is_fatal() {
    let fixture = Fixture::new(&["running"]);
    cmd()
        .current_dir(&fixture.root)
        .arg("--corpus").arg(fixture.root.join("elsewhere"))
        .arg("--offline")
        .assert()
        .failure()
        .stderr(contains("downloading is disabled"));
}
