//! End-to-end tests for the `budget` binary

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use budget_tracker::models::Money;

fn budget(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_TRACKER_DATA_DIR", dir.path());
    cmd
}

/// Account and savings balance from the last ledger row
fn current_balances(dir: &Path) -> (Money, Money) {
    let text = std::fs::read_to_string(dir.join("data").join("balances_data.csv")).unwrap();
    let last = text.lines().last().unwrap();
    let cells: Vec<&str> = last.split(',').collect();
    (Money::parse(cells[1]).unwrap(), Money::parse(cells[2]).unwrap())
}

#[test]
fn first_run_generates_sample_data() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("balances")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Account Balance:"))
        .stderr(predicate::str::contains("generated 100 sample rows"));

    assert!(dir.path().join("data").join("budget_data.csv").exists());
    assert!(dir.path().join("data").join("balances_data.csv").exists());

    budget(&dir)
        .arg("balances")
        .assert()
        .success()
        .stderr(predicate::str::contains("generated").not());
}

#[test]
fn add_appends_expense_and_debits_account() {
    let dir = TempDir::new().unwrap();
    budget(&dir).arg("balances").assert().success();
    let (account_before, savings_before) = current_balances(dir.path());

    budget(&dir)
        .args(["add", "-y", "2024", "-d", "2024-03-15", "-c", "Food", "-a", "12.34"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense for 'Food' added successfully!"));

    let (account_after, savings_after) = current_balances(dir.path());
    assert_eq!(account_after, account_before - Money::from_cents(1_234));
    assert_eq!(savings_after, savings_before);

    budget(&dir)
        .args(["list", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-15"))
        .stdout(predicate::str::contains("12.34"))
        .stdout(predicate::str::contains("Showing 1 of 101 expenses"));
}

#[test]
fn savings_expense_moves_money_into_savings() {
    let dir = TempDir::new().unwrap();
    budget(&dir).arg("balances").assert().success();
    let (account_before, savings_before) = current_balances(dir.path());

    budget(&dir)
        .args(["add", "-c", "Savings", "-a", "200"])
        .assert()
        .success();

    let (account_after, savings_after) = current_balances(dir.path());
    assert_eq!(account_after, account_before - Money::from_cents(20_000));
    assert_eq!(savings_after, savings_before + Money::from_cents(20_000));
}

#[test]
fn invalid_expense_is_rejected_without_writing() {
    let dir = TempDir::new().unwrap();
    budget(&dir).arg("balances").assert().success();
    let expenses_file = dir.path().join("data").join("budget_data.csv");
    let before = std::fs::read_to_string(&expenses_file).unwrap();
    let balances_before = current_balances(dir.path());

    budget(&dir)
        .args(["add", "-c", "Groceries", "-a", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Groceries"));

    budget(&dir)
        .args(["add", "-c", "Food", "-a", "ten pounds"])
        .assert()
        .failure();

    budget(&dir)
        .args(["add", "-d", "15/03/2024", "-c", "Food", "-a", "10"])
        .assert()
        .failure();

    assert_eq!(std::fs::read_to_string(&expenses_file).unwrap(), before);
    assert_eq!(current_balances(dir.path()), balances_before);
}

#[test]
fn breakdown_for_a_month() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "-y", "1999", "-d", "1999-06-01", "-c", "Housing", "-a", "30"])
        .assert()
        .success();
    budget(&dir)
        .args(["add", "-y", "1999", "-d", "1999-06-20", "-c", "Food", "-a", "10"])
        .assert()
        .success();

    budget(&dir)
        .args(["breakdown", "--month", "1999-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spending by Category for 1999-06"))
        .stdout(predicate::str::contains("75.0%"))
        .stdout(predicate::str::contains("25.0%"));

    budget(&dir)
        .args(["breakdown", "--month", "1999-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded for 1999-07."));

    budget(&dir)
        .args(["breakdown", "--month", "June"])
        .assert()
        .failure();
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("budget_data.csv"))
        .stdout(predicate::str::contains("balances_data.csv"));
}

#[test]
fn activity_log_records_sample_and_submit() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "-c", "Transport", "-a", "3.20"])
        .assert()
        .success();

    budget(&dir)
        .arg("activity")
        .assert()
        .success()
        .stdout(predicate::str::contains("SAMPLE"))
        .stdout(predicate::str::contains("EXPENSE"))
        .stdout(predicate::str::contains("BALANCE"));

    budget(&dir)
        .args(["activity", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BALANCE"))
        .stdout(predicate::str::contains("Showing 1 of 4 entries"));
}

#[test]
fn first_run_writes_default_settings() {
    let dir = TempDir::new().unwrap();

    budget(&dir).arg("config").assert().success();

    let settings = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(settings.contains("\"max_display_rows\": 10"));
}

#[test]
fn unrenderable_date_format_fails_at_startup() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"date_format": "%Y-%m-%d %H"}"#,
    )
    .unwrap();

    budget(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("date_format"));
}

#[test]
fn amount_too_large_for_the_balance_is_rejected() {
    let dir = TempDir::new().unwrap();
    budget(&dir).arg("balances").assert().success();
    let expenses_file = dir.path().join("data").join("budget_data.csv");

    budget(&dir)
        .args(["add", "-c", "Food", "-a", "92233720368547758"])
        .assert()
        .success();
    let before = std::fs::read_to_string(&expenses_file).unwrap();
    let balances_before = current_balances(dir.path());

    budget(&dir)
        .args(["add", "-c", "Food", "-a", "92233720368547758"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));

    assert_eq!(std::fs::read_to_string(&expenses_file).unwrap(), before);
    assert_eq!(current_balances(dir.path()), balances_before);

    budget(&dir).arg("breakdown").assert().success();
}
