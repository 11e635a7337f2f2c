//! Headless `scan` command: output formats and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

fn phishguard_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_phishguard"))
}

fn scan_json(url: &str) -> serde_json::Value {
    let output = phishguard_cmd().args(["scan", url, "--json"]).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("valid JSON")
}

#[test]
fn trusted_site_text_report() {
    phishguard_cmd()
        .args(["scan", "https://github.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score:  10/10"))
        .stdout(predicate::str::contains("Highly Trustworthy Site"))
        .stdout(predicate::str::contains("• No flaws detected — looks safe!"));
}

#[test]
fn insecure_prize_site_json_report() {
    let value = scan_json("http://free-prize-now.com");
    assert_eq!(value["score"], 2);
    assert_eq!(value["status"], "Phishing Suspected");
    assert_eq!(
        value["flaws"],
        serde_json::json!([
            "Insecure connection — HTTPS not used.",
            "Suspicious keyword found: free",
            "Suspicious keyword found: prize"
        ])
    );
}

#[test]
fn empty_url_is_moderately_suspicious() {
    let value = scan_json("");
    assert_eq!(value["url"], "");
    assert_eq!(value["score"], 5);
    assert_eq!(value["status"], "Moderately Suspicious");
    assert_eq!(value["flaws"], serde_json::json!(["Insecure connection — HTTPS not used."]));
}

#[test]
fn plain_https_site_is_trustworthy() {
    let value = scan_json("https://example.org");
    assert_eq!(value["score"], 8);
    assert_eq!(value["status"], "Trustworthy Site");
}

#[test]
fn scan_without_url_is_a_usage_error() {
    phishguard_cmd()
        .arg("scan")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("URL"));
}
