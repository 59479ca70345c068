//! E2E tests for the assess, slabs and schema commands

use std::process::Command;

/// Spec example: monthly salary 80,000, everything else zero.
/// Old regime 94,500 vs new regime 43,500 - new wins, saving 51,000.
#[test]
fn assess_salaried_example() {
    let output = Command::new("cargo")
        .args(["run", "--", "assess", "-i", "tests/data/salaried.json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("TAX ASSESSMENT"));
    assert!(stdout.contains("OLD REGIME"));
    assert!(stdout.contains("NEW REGIME"));
    assert!(stdout.contains("New Regime is cheaper"));
    assert!(stdout.contains("51,000.00"));
}

/// JSON output carries the full assessment record
#[test]
fn assess_json_output() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "assess",
            "-i",
            "tests/data/salaried.json",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("\"taxable_old\""));
    assert!(stdout.contains("\"taxable_new\""));
    assert!(stdout.contains("94500.00"));
    assert!(stdout.contains("43500.00"));
    assert!(stdout.contains("\"cheaper_regime\": \"New\""));
}

/// CSV output includes slab rows and the 87A rebate line
#[test]
fn assess_csv_output_with_rebate() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "assess",
            "-i",
            "tests/data/rebate.json",
            "--csv",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("regime,component,range_from,range_to,rate_pct,tax"));
    assert!(stdout.contains("Old Regime,Slab"));
    assert!(stdout.contains("87A Rebate"));
}

/// Capital gains are taxed flat and shown separately
#[test]
fn assess_with_capital_gains() {
    let output = Command::new("cargo")
        .args(["run", "--", "assess", "-i", "tests/data/capital_gains.json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    // 15% of 200,000 + 10% of 200,000 above the exemption
    assert!(stdout.contains("CAPITAL GAINS TAX"));
    assert!(stdout.contains("50,000.00"));
}

/// Negative raw entries are rejected at the input boundary
#[test]
fn negative_input_rejected() {
    let output = Command::new("cargo")
        .args(["run", "--", "assess", "-i", "tests/data/negative.json"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must not be negative"));
}

/// Slab tables render from the same static data the calculators use
#[test]
fn slabs_command() {
    let output = Command::new("cargo")
        .args(["run", "--", "slabs"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("Old Regime slabs"));
    assert!(stdout.contains("New Regime slabs"));
    assert!(stdout.contains("Income Range"));
    assert!(stdout.contains("Nil"));
    assert!(stdout.contains("30%"));
    assert!(stdout.contains("Sec 87A rebate"));
}

/// Senior slab table honours the higher exemption
#[test]
fn slabs_senior() {
    let output = Command::new("cargo")
        .args(["run", "--", "slabs", "--regime", "old", "--age", "senior"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Up to ₹3,00,000"));
}

/// Schema command documents the input record
#[test]
fn schema_fields() {
    let output = Command::new("cargo")
        .args(["run", "--", "schema", "fields"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("salary_monthly"));
    assert!(stdout.contains("deduction_80c"));
    assert!(stdout.contains("taxpayer.residency"));
}

#[test]
fn schema_json_schema() {
    let output = Command::new("cargo")
        .args(["run", "--", "schema", "json-schema"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("TaxReturnInput"));
    assert!(stdout.contains("salary_monthly"));
}

/// Example record from the schema command parses back as valid input
#[test]
fn schema_example_round_trips() {
    let example = Command::new("cargo")
        .args(["run", "--", "schema", "example"])
        .output()
        .expect("Failed to execute command");
    assert!(example.status.success(), "Command failed: {:?}", example);

    let dir = std::env::temp_dir().join("taxin_schema_example.json");
    std::fs::write(&dir, &example.stdout).expect("write example");

    let output = Command::new("cargo")
        .args(["run", "--", "assess", "-i"])
        .arg(&dir)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("is cheaper"));
}
