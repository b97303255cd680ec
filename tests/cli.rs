//! End-to-end tests for the `spendwise` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE_CSV: &str = "\
date,description,amount,type
2024-01-15,Lunch at restaurant,45.00,EXPENSE
2024-01-16,Uber ride,20.00,EXPENSE
2024-01-10,Monthly rent,950.00,EXPENSE
2024-01-20,Grocery market,220.00,EXPENSE
2024-01-05,Salary,3000.00,INCOME
";

/// Command isolated from the user's config directory and environment
fn spendwise(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendwise").unwrap();
    cmd.env("SPENDWISE_CONFIG_DIR", config_dir.path())
        .env_remove("SPENDWISE_CONFIG")
        .env_remove("SPENDWISE_LOCALE")
        .env_remove("PORT")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn categorize_prints_matching_category() {
    let dir = TempDir::new().unwrap();

    spendwise(&dir)
        .args(["categorize", "Lunch at the restaurant", "Something unusual"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Lunch at the restaurant\" → Food"))
        .stdout(predicate::str::contains("\"Something unusual\" → Others"));
}

#[test]
fn categorize_reports_type_mismatch() {
    let dir = TempDir::new().unwrap();

    spendwise(&dir)
        .args(["categorize", "Monthly salary", "--type", "expense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary ✗ EXPENSE not allowed"));
}

#[test]
fn categorize_requires_a_description() {
    let dir = TempDir::new().unwrap();

    spendwise(&dir).arg("categorize").assert().failure();
}

#[test]
fn categories_lists_defaults_in_order() {
    let dir = TempDir::new().unwrap();

    spendwise(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Extra Income"));
}

#[test]
fn categories_come_from_settings_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"categories": [{"name": "Pets", "keywords": ["vet"], "allowedTypes": ["EXPENSE"]}]}"#,
    )
    .unwrap();

    spendwise(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pets"))
        .stdout(predicate::str::contains("Food").not());
}

#[test]
fn analyze_csv_as_text() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("january.csv");
    fs::write(&csv, SAMPLE_CSV).unwrap();

    spendwise(&dir)
        .arg("analyze")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 5 transaction(s)"))
        .stdout(predicate::str::contains("R$ 3.000,00"))
        .stdout(predicate::str::contains("R$ 1.235,00"))
        .stdout(predicate::str::contains("R$ 1.765,00"))
        .stdout(predicate::str::contains("🥇 Housing"));
}

#[test]
fn analyze_csv_as_json_with_period() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("january.csv");
    fs::write(&csv, SAMPLE_CSV).unwrap();

    let output = spendwise(&dir)
        .arg("analyze")
        .arg(&csv)
        .args(["--start", "2024-01-12", "--end", "2024-01-31", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["totalIncome"], 0.0);
    assert_eq!(json["totalExpenses"], 285.0);
    assert_eq!(json["topExpenses"][0]["category"], "Food");
}

#[test]
fn analyze_reversed_period_fails() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("january.csv");
    fs::write(&csv, SAMPLE_CSV).unwrap();

    spendwise(&dir)
        .arg("analyze")
        .arg(&csv)
        .args(["--start", "2024-02-01", "--end", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period"));
}

#[test]
fn analyze_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    spendwise(&dir)
        .args(["analyze", "does-not-exist.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open"));
}

#[test]
fn demo_runs() {
    let dir = TempDir::new().unwrap();

    spendwise(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Automatic categorization"))
        .stdout(predicate::str::contains("does not allow transaction type 'EXPENSE'"))
        .stdout(predicate::str::contains("/analysis"));
}

#[test]
fn english_locale_from_environment() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("january.csv");
    fs::write(&csv, SAMPLE_CSV).unwrap();

    spendwise(&dir)
        .env("SPENDWISE_LOCALE", "en-US")
        .arg("analyze")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("$1,765.00"));
}

#[test]
fn config_init_writes_settings_file() {
    let dir = TempDir::new().unwrap();

    spendwise(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("no (defaults)"));

    spendwise(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let written = fs::read_to_string(dir.path().join("config.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["server"]["port"], 3000);
    assert_eq!(json["locale"], "pt-BR");

    spendwise(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded from file: yes"));
}
