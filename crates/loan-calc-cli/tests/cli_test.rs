use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn loancalc() -> Command {
    Command::cargo_bin("loancalc").unwrap()
}

#[test]
fn test_payment_defaults_minimal() {
    loancalc()
        .args(["payment", "--output", "minimal"])
        .assert()
        .success()
        .stdout("$103.64\n");
}

#[test]
fn test_payment_from_flags() {
    loancalc()
        .args([
            "payment", "--amount", "200000", "--years", "30", "--rate", "6", "--output", "minimal",
        ])
        .assert()
        .success()
        .stdout("$1199.10\n");
}

#[test]
fn test_payment_json_envelope() {
    loancalc()
        .arg("payment")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""display": "$103.64""#))
        .stdout(predicate::str::contains(r#""methodology""#))
        .stdout(predicate::str::contains(r#""warnings": []"#));
}

#[test]
fn test_zero_rate_is_reported_not_rejected() {
    loancalc()
        .args(["payment", "--rate", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""display": "$NaN""#))
        .stdout(predicate::str::contains(r#""payment": null"#))
        .stdout(predicate::str::contains("Zero interest rate"));
}

#[test]
fn test_non_numeric_flag_renders_nan() {
    loancalc()
        .args(["payment", "--amount", "lots", "--output", "minimal"])
        .assert()
        .success()
        .stdout("$NaN\n");
}

#[test]
fn test_negative_rate_flag_is_accepted() {
    loancalc()
        .args(["payment", "--rate", "-1", "--output", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("$"))
        .stdout(predicate::str::contains("NaN").not());
}

#[test]
fn test_payment_reads_piped_json() {
    loancalc()
        .args(["payment", "--output", "minimal"])
        .write_stdin(r#"{"amount": 200000, "years": "30", "rate": 6}"#)
        .assert()
        .success()
        .stdout("$1199.10\n");
}

#[test]
fn test_flags_override_input_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"amount": 200000, "years": 30, "rate": 6}}"#).unwrap();

    loancalc()
        .args(["payment", "--output", "minimal", "--amount", "10000", "--years", "10", "--rate", "4.5"])
        .arg("--input")
        .arg(file.path())
        .assert()
        .success()
        .stdout("$103.64\n");
}

#[test]
fn test_session_without_submissions_has_start_entry() {
    loancalc()
        .arg("session")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""count": 1"#))
        .stdout(predicate::str::contains(r#""display": "$103.64""#));
}

#[test]
fn test_session_replays_submissions_in_order() {
    let assert = loancalc()
        .args(["session", "--input", "tests/fixtures/submissions.json", "--output", "csv"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5, "header + start + 3 submissions: {stdout}");
    assert!(lines[0].contains("display"));
    assert!(lines[1].contains("$103.64"));
    assert!(lines[2].contains("$1199.10"));
    assert!(lines[3].contains("$NaN"));
    assert!(lines[4].contains("10.9"));
}

#[test]
fn test_session_minimal_prints_latest() {
    loancalc()
        .args(["session", "--input", "tests/fixtures/submissions.json", "--output", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("$"))
        .stdout(predicate::str::contains("NaN").not());
}

#[test]
fn test_session_rejects_non_array_input() {
    loancalc()
        .args(["session", "--input", "tests/fixtures/not_an_array.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON array of submissions"));
}

#[test]
fn test_missing_input_file() {
    loancalc()
        .args(["payment", "--input", "tests/fixtures/does_not_exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_version() {
    loancalc()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("loancalc "));
}
