use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

use cli_helpers::{base_cmd, fixture, read_report, report_json};

fn setup_work_dir() -> TempDir {
    TempDir::new().expect("failed to create temp work dir")
}

#[test]
fn report_written_to_output_txt() {
    let work = setup_work_dir();
    let value = report_json(&work, "basic_ledger.csv", &["-d", "2020-02-15"]).unwrap();

    assert_eq!(value["date"], "2020/02/15");
    assert_eq!(value["cash_raised"].as_f64(), Some(1600.0));
    assert_eq!(value["total_number_of_shares"], 150);
    assert_eq!(value["ownership"][0]["investor"], "alice");
    assert_eq!(value["ownership"][1]["investor"], "bob");

    let alice = value["ownership"][0]["ownsership"].as_f64().unwrap();
    let bob = value["ownership"][1]["ownsership"].as_f64().unwrap();
    assert!((alice - 66.67).abs() < 0.01);
    assert!((bob - 33.33).abs() < 0.01);
}

#[test]
fn month_cutoff_uses_last_day() {
    let work = setup_work_dir();
    let value = report_json(&work, "basic_ledger.csv", &["--date", "2020-03"]).unwrap();
    assert_eq!(value["date"], "2020/03/31");
    assert_eq!(value["total_number_of_shares"], 175);
}

#[test]
fn default_cutoff_is_today() {
    let work = setup_work_dir();
    let value = report_json(&work, "seed_round.csv", &[]).unwrap();
    let today = chrono::Local::now().date_naive().format("%Y/%m/%d").to_string();
    assert_eq!(value["date"], today.as_str());
    assert_eq!(value["total_number_of_shares"], 17500);
}

#[test]
fn custom_output_path() {
    let work = setup_work_dir();
    let out = work.path().join("reports").join("cap.json");

    let mut cmd = base_cmd(&work);
    cmd.arg(fixture("basic_ledger.csv"))
        .arg("-d")
        .arg("2020-12-31")
        .arg("-o")
        .arg(&out);
    cmd.assert().success();

    let value = read_report(&out).unwrap();
    assert_eq!(value["total_number_of_shares"], 175);
    assert!(!work.path().join("output.txt").exists());
}

#[test]
fn stdout_prints_json_and_writes_no_file() {
    let work = setup_work_dir();

    let mut cmd = base_cmd(&work);
    cmd.arg(fixture("basic_ledger.csv"))
        .arg("-d")
        .arg("2020-02-15")
        .arg("--stdout");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""total_number_of_shares":150"#))
        .stdout(predicate::str::contains(r#""ownsership""#));

    assert!(!work.path().join("output.txt").exists());
}

#[test]
fn table_without_color_when_requested() {
    let work = setup_work_dir();

    let mut cmd = base_cmd(&work);
    cmd.arg(fixture("seed_round.csv"))
        .arg("-d")
        .arg("2018-12-31")
        .arg("--table")
        .arg("--no-color");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Sandy Lerner"))
        .stdout(predicate::str::contains("$23,500.00"))
        .stdout(predicate::str::contains("33.33%"))
        .stdout(predicate::str::contains("\u{001b}[").not());

    assert!(work.path().join("output.txt").exists());
}

#[test]
fn cutoff_before_first_purchase_fails() {
    let work = setup_work_dir();

    let mut cmd = base_cmd(&work);
    cmd.arg(fixture("basic_ledger.csv")).arg("-d").arg("2019-12-31");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no shares issued"));

    assert!(!work.path().join("output.txt").exists());
}

#[test]
fn config_can_report_zero_ownership() {
    let work = setup_work_dir();
    let config = work.path().join("captable.toml");
    std::fs::write(&config, "zero_shares = \"report-zero\"\npretty = true\n").unwrap();

    let mut cmd = base_cmd(&work);
    cmd.arg(fixture("basic_ledger.csv"))
        .arg("-d")
        .arg("2019-12-31")
        .arg("--config")
        .arg(&config);
    cmd.assert().success();

    let text = std::fs::read_to_string(work.path().join("output.txt")).unwrap();
    assert!(text.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["total_number_of_shares"], 0);
    assert_eq!(value["ownership"][1]["ownsership"].as_f64(), Some(0.0));
}

#[test]
fn malformed_record_fails_without_report() {
    let work = setup_work_dir();

    let mut cmd = base_cmd(&work);
    cmd.arg(fixture("malformed_shares.csv"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("record 2"))
        .stderr(predicate::str::contains("fifty"));

    assert!(!work.path().join("output.txt").exists());
}

#[test]
fn invalid_date_flag_is_rejected() {
    let work = setup_work_dir();

    let mut cmd = base_cmd(&work);
    cmd.arg(fixture("basic_ledger.csv")).arg("-d").arg("2020-13-40");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn missing_input_file_fails() {
    let work = setup_work_dir();

    let mut cmd = base_cmd(&work);
    cmd.arg(work.path().join("nope.csv"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open"));
}
