//! End-to-end tests for the `reel` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

fn reel() -> Command {
    let mut cmd = Command::cargo_bin("reel").unwrap();
    cmd.env_remove("REEL_LOG")
        .env_remove("RUST_LOG")
        .env_remove("REEL_LOG_FORMAT");
    cmd
}

fn invalid_data(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("invalid.json");
    let mut data: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(demo("application.json")).unwrap()).unwrap();
    data["email"] = "ayse@".into();
    data["agreeTerms"] = false.into();
    fs::write(&path, data.to_string()).unwrap();
    path
}

#[test]
fn check_accepts_the_sample_application() {
    reel()
        .args(["check"])
        .arg(demo("application.toml"))
        .arg(demo("application.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("ok     fullName"))
        .stdout(predicate::str::contains("application is valid"));
}

#[test]
fn check_reports_first_error_per_field() {
    let dir = tempfile::tempdir().unwrap();
    reel()
        .arg("check")
        .arg(demo("application.toml"))
        .arg(invalid_data(&dir))
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "error  email: Geçerli bir email adresi giriniz",
        ))
        .stdout(predicate::str::contains(
            "error  agreeTerms: Şartları kabul etmelisiniz",
        ))
        .stdout(predicate::str::contains("2 invalid field(s)"));
}

#[test]
fn check_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let output = reel()
        .arg("check")
        .arg(demo("application.toml"))
        .arg(invalid_data(&dir))
        .arg("--json")
        .output()
        .unwrap();

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let email = report
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["field"] == "email")
        .unwrap();
    assert_eq!(email["valid"], false);
    assert_eq!(email["code"], "email");
}

#[test]
fn submit_success_prints_notice() {
    reel()
        .arg("submit")
        .arg(demo("application.toml"))
        .arg(demo("application.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("[success] Başvurunuz başarıyla alındı!"));
}

#[test]
fn rejected_submit_keeps_a_draft() {
    let dir = tempfile::tempdir().unwrap();
    let drafts = dir.path().join("drafts.json");

    reel()
        .arg("submit")
        .arg(demo("application.toml"))
        .arg(demo("application.json"))
        .args(["--reject", "registration closed", "--drafts"])
        .arg(&drafts)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[error] Bir hata oluştu."))
        .stdout(predicate::str::contains("draft saved"))
        .stderr(predicate::str::contains("registration closed"));

    let stored: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&drafts).unwrap()).unwrap();
    assert_eq!(stored["application"]["fullName"], "Ayşe Yılmaz");

    reel()
        .arg("submit")
        .arg(demo("application.toml"))
        .arg(demo("application.json"))
        .arg("--drafts")
        .arg(&drafts)
        .assert()
        .success()
        .stdout(predicate::str::contains("draft cleared"));
}

#[test]
fn invalid_submit_is_not_sent() {
    let dir = tempfile::tempdir().unwrap();
    reel()
        .arg("submit")
        .arg(demo("application.toml"))
        .arg(invalid_data(&dir))
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "[error] Lütfen tüm alanları doğru şekilde doldurunuz.",
        ));
}

#[test]
fn env_overrides_submit_timeout() {
    reel()
        .env("REEL_CONFIG__SUBMIT_TIMEOUT_MS", "20")
        .arg("submit")
        .arg(demo("application.toml"))
        .arg(demo("application.json"))
        .args(["--delay-ms", "2000"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("timed out"));
}

#[test]
fn format_phone_groups_digits() {
    reel()
        .args(["format-phone", "5321234567"])
        .assert()
        .success()
        .stdout("0532 123 45 67\n");
}

#[test]
fn counter_reports_level() {
    reel()
        .args(["counter", "10", "abcdefghi"])
        .assert()
        .success()
        .stdout("9/10 critical\n");
}

#[test]
fn missing_schema_exits_with_usage_error() {
    reel()
        .args(["check", "nope.toml", "nope.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("schema file not found"));
}
