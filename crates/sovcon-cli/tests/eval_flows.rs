use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn sovcon_cmd() -> Command {
    Command::cargo_bin("sovcon").unwrap()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn eval_prints_metrics_and_writes_the_audit_trail() {
    let dir = tempfile::tempdir().unwrap();
    let audit = dir.path().join("artifacts").join("audit.csv");

    sovcon_cmd()
        .args([
            "eval",
            "--runs",
            "3",
            "--seed",
            "7",
            "--audit-out",
            path_str(&audit),
            "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fairness (DI):"))
        .stdout(predicate::str::contains("Latency: p50"));

    let csv = std::fs::read_to_string(&audit).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("time,actor,action,resource,outcome"));
    // 3 seed events + 3 runs.
    assert_eq!(lines.count(), 6);
    assert!(csv.contains("\"RUN_EVAL\""));
    assert!(csv.contains("\"svc-eval@console\""));
}

#[test]
fn eval_rejects_zero_runs() {
    sovcon_cmd()
        .args(["eval", "--runs", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value '0'"));
}

#[test]
fn eval_is_reproducible_for_a_fixed_seed() {
    let run = || {
        sovcon_cmd()
            .args(["eval", "--runs", "2", "--seed", "11"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn audit_export_jsonl_contains_the_seed_events() {
    sovcon_cmd()
        .args(["audit", "export", "--format", "jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kb:limit-kartu-kredit"))
        .stdout(predicate::str::contains("\"action\":\"FILTER\""));
}

#[test]
fn fair_scores_the_seed_policy_at_full_marks() {
    sovcon_cmd()
        .arg("fair")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 1.0"));
}
