use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

fn write_file(path: &Path, contents: &str) {
    fs::write(path, contents).expect("write test file");
}

#[test]
fn reports_root_kind_for_file() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("input.json");
    write_file(&input, r#"{"a":1,"b":[true,false]}"#);

    cargo_bin_cmd!("fstjson")
        .arg(&input)
        .assert()
        .success()
        .stdout("ok: object\n")
        .stderr("");
}

#[test]
fn reads_stdin_when_no_path_given() {
    cargo_bin_cmd!("fstjson")
        .write_stdin(" [ 1 , 2 , 3 ] ")
        .assert()
        .success()
        .stdout("ok: array\n");

    cargo_bin_cmd!("fstjson")
        .arg("-")
        .write_stdin("null")
        .assert()
        .success()
        .stdout("ok: null\n");
}

#[test]
fn stats_report() {
    let expected = "ok: object\n\
                    values: 5\n  \
                    null: 0\n  \
                    bool: 2\n  \
                    number: 1\n  \
                    string: 0 (0 bytes)\n  \
                    array: 1\n  \
                    object: 1 (2 members)\n\
                    max depth: 2\n";

    cargo_bin_cmd!("fstjson")
        .arg("--stats")
        .write_stdin(r#"{"a":1,"b":[true,false]}"#)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn duplicate_members_are_all_counted() {
    cargo_bin_cmd!("fstjson")
        .arg("--stats")
        .write_stdin(r#"{"k":1,"x":2,"k":3}"#)
        .assert()
        .success()
        .stdout(contains("number: 3").and(contains("object: 1 (3 members)")));
}

#[test]
fn does_not_re_emit_json() {
    cargo_bin_cmd!("fstjson")
        .arg("--json")
        .write_stdin(r#"{"k":1,"x":2,"k":3}"#)
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("unexpected argument '--json'"));
}

#[test]
fn parse_error_exits_with_failure() {
    cargo_bin_cmd!("fstjson")
        .write_stdin(r#"{"a":1"#)
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(contains("ERROR  expected ',' or '}' at line 1, column 7"));
}

#[test]
fn error_location_spans_lines() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("broken.json");
    write_file(&input, "[\n  1,\n  2,\n]\n");

    cargo_bin_cmd!("fstjson")
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("invalid value").and(contains("line 4, column 1")));
}

#[test]
fn depth_limit_flags() {
    cargo_bin_cmd!("fstjson")
        .args(["--max-depth", "1"])
        .write_stdin("[[1]]")
        .assert()
        .failure()
        .stderr(contains("nesting depth limit exceeded"));

    let deep = format!("{}{}", "[".repeat(1_000), "]".repeat(1_000));
    cargo_bin_cmd!("fstjson")
        .write_stdin(deep.clone())
        .assert()
        .failure()
        .stderr(contains("nesting depth limit exceeded"));

    cargo_bin_cmd!("fstjson")
        .args(["--max-depth", "1000"])
        .write_stdin(deep)
        .assert()
        .success()
        .stdout("ok: array\n");
}

#[test]
fn depth_limit_cannot_be_disabled() {
    cargo_bin_cmd!("fstjson")
        .arg("--no-depth-limit")
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(contains("unexpected argument '--no-depth-limit'"));
}

#[test]
fn overflow_policy_flag() {
    cargo_bin_cmd!("fstjson")
        .write_stdin("1e400")
        .assert()
        .success()
        .stdout("ok: number\n");

    cargo_bin_cmd!("fstjson")
        .arg("--reject-overflow")
        .write_stdin("1e400")
        .assert()
        .failure()
        .stderr(contains("number out of range"));
}

#[test]
fn missing_file_reports_error() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("missing.json");

    cargo_bin_cmd!("fstjson")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(contains("ERROR  "));
}
