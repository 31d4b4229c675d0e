use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn tsconv() -> Command {
    let mut cmd = Command::cargo_bin("tsconv").unwrap();
    cmd.env("XDG_CONFIG_HOME", std::env::temp_dir().join("tsconv-cli-tests-no-config"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn converts_seconds_to_a_date() {
    tsconv()
        .args(["--tz", "UTC", "--lang", "en", "1700000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result：2023-11-14 22:13:20"))
        .stdout(predicate::str::contains("Milliseconds：1700000000000"))
        .stdout(predicate::str::contains("UTC：2023-11-14 22:13:20 UTC"));
}

#[test]
fn converts_a_date_to_seconds() {
    tsconv()
        .args([
            "--mode",
            "date",
            "--output-unit",
            "seconds",
            "--tz",
            "Asia/Shanghai",
            "--lang",
            "en",
            "2023-01-01 12:00:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Result：1672545600\n"))
        .stdout(predicate::str::contains("Zoned time：2023-01-01 12:00:00"));
}

#[test]
fn failure_prints_placeholders_and_exits_nonzero() {
    tsconv()
        .args(["--mode", "date", "not-a-date"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("结果：无法识别的时间格式"))
        .stdout(predicate::str::contains("秒级时间戳：-"));
}

#[test]
fn json_output_is_tagged() {
    let output = tsconv()
        .args(["--json", "--tz", "UTC", "--unit", "millis", "-1500"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "converted");
    assert_eq!(value["epoch_millis"], -1500);
    assert_eq!(value["epoch_seconds"], -2);
    assert_eq!(value["utc_string"], "1969-12-31 23:59:58 UTC");
}

#[test]
fn blank_input_prints_nothing() {
    tsconv().arg("   ").assert().success().stdout("");
}

#[test]
fn no_input_converts_now_in_millis() {
    let before = chrono::Utc::now().timestamp_millis();
    let output = tsconv().args(["--json", "--tz", "UTC"]).output().unwrap();
    let after = chrono::Utc::now().timestamp_millis();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let millis = value["epoch_millis"].as_i64().unwrap();
    assert!(millis >= before - 1000 && millis <= after + 1000);
}

#[test]
fn unknown_timezone_still_reports_epoch_fields() {
    tsconv()
        .args(["--tz", "Nowhere/Special", "--lang", "en", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Result：formatting error: unknown timezone Nowhere/Special",
        ))
        .stdout(predicate::str::contains("Seconds：0"));
}

#[test]
fn explicit_config_file_sets_defaults() {
    let path = std::env::temp_dir().join(format!("tsconv-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"timezone": "Asia/Tokyo", "language": "en"}"#).unwrap();
    tsconv()
        .arg("--config")
        .arg(&path)
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::str::contains("Result：1970-01-01 09:00:00"));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn malformed_config_is_an_error() {
    let path = std::env::temp_dir().join(format!("tsconv-bad-config-{}.json", std::process::id()));
    std::fs::write(&path, "{ not json").unwrap();
    tsconv()
        .arg("--config")
        .arg(&path)
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn interactive_session_reads_commands() {
    tsconv()
        .args(["-i", "--tz", "UTC", "--lang", "en"])
        .write_stdin(":unit auto\n1700000000\n:mode date\n2024-01-01\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Result：2023-11-14 22:13:20"))
        .stdout(predicate::str::contains("Result：1704067200000"));
}
