mod common;
use common::*;

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

/// Process the sample log into a JSON summary and return its path.
fn summary_json(name: &str) -> (String, String) {
    let log = write_log(name, &sample_log());
    let cfg = default_config(name);
    let out = temp_path(&format!("{name}_summary"), "json");

    rat()
        .args(["--config", &cfg, "process", &log, "--json", &out, "--force", "--no-stats"])
        .assert()
        .success();

    (out, cfg)
}

#[test]
fn test_search_by_employee() {
    let (json, cfg) = summary_json("search_emp");

    rat()
        .args(["--config", &cfg, "search", &json, "--emp", "E001"])
        .assert()
        .success()
        .stdout(contains("Found 2 record(s)"))
        .stdout(contains("Date: 2023-11-15"))
        .stdout(contains("Date: 2023-11-16"))
        .stdout(contains("E002").not());
}

#[test]
fn test_search_by_employee_and_date() {
    let (json, cfg) = summary_json("search_emp_date");

    rat()
        .args([
            "--config", &cfg, "search", &json, "--emp", "E002", "--date", "2023-11-15",
        ])
        .assert()
        .success()
        .stdout(contains("Found 1 record(s)"))
        .stdout(contains("First Punch: 09:31"))
        .stdout(contains("Late Entry: true"));
}

#[test]
fn test_search_no_match() {
    let (json, cfg) = summary_json("search_none");

    rat()
        .args(["--config", &cfg, "search", &json, "--emp", "E999"])
        .assert()
        .success()
        .stdout(contains("No records found."));
}

#[test]
fn test_search_rejects_bad_date() {
    let (json, cfg) = summary_json("search_bad_date");

    rat()
        .args(["--config", &cfg, "search", &json, "--date", "15/11/2023"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_search_missing_summary() {
    let cfg = default_config("search_missing");
    let missing = temp_path("search_missing_summary", "json");

    rat()
        .args(["--config", &cfg, "search", &missing])
        .assert()
        .failure()
        .stderr(contains("File not found"));
}
