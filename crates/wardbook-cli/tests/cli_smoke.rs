//! End-to-end smoke tests for the `wb` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wb(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wb").unwrap();
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

fn seed(data_dir: &TempDir) {
    wb(data_dir)
        .args([
            "cda",
            "register",
            "Phase 1 CDA",
            "--ward",
            "Ward C1",
            "--lg",
            "Lagos Island LGA",
            "--date",
            "2023-01-01",
        ])
        .assert()
        .success();

    wb(data_dir)
        .args([
            "street",
            "register",
            "Ahmadu Bello Avenue",
            "--cda",
            "Phase 1 CDA",
            "--ward",
            "Ward C1",
            "--date",
            "2023-03-15",
        ])
        .assert()
        .success();
}

fn first_street_id(data_dir: &TempDir) -> String {
    let output = wb(data_dir)
        .args(["--format", "json", "street", "list"])
        .output()
        .unwrap();
    let streets: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    streets[0]["id"].to_string()
}

#[test]
fn registers_and_lists_a_cda() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    wb(&data_dir)
        .args(["cda", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 CDA(s)"));

    let output = wb(&data_dir)
        .args(["--format", "json", "cda", "list"])
        .output()
        .unwrap();
    let cdas: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(cdas[0]["name"], "Phase 1 CDA");
    assert_eq!(cdas[0]["ward"], "Ward C1");
    assert_eq!(cdas[0]["streetCount"], 0);
}

#[test]
fn property_registration_updates_street_counts() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);
    let street_id = first_street_id(&data_dir);

    wb(&data_dir)
        .args([
            "property",
            "register",
            "--street",
            street_id.as_str(),
            "--number",
            "15A",
            "--type",
            "House",
            "--owner",
            "John Adebayo",
            "--shops",
            "2",
        ])
        .assert()
        .success();

    let output = wb(&data_dir)
        .args(["--format", "json", "street", "list"])
        .output()
        .unwrap();
    let streets: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(streets[0]["propertyCount"]["houses"], 1);
    assert_eq!(streets[0]["propertyCount"]["shops"], 2);
}

#[test]
fn deleting_the_cda_cascades() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);
    let street_id = first_street_id(&data_dir);

    wb(&data_dir)
        .args([
            "property", "register", "--street", street_id.as_str(), "--number", "1", "--type", "Shop",
            "--owner", "Amina",
        ])
        .assert()
        .success();

    let output = wb(&data_dir)
        .args(["--format", "json", "cda", "list"])
        .output()
        .unwrap();
    let cdas: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let cda_id = cdas[0]["id"].to_string();

    wb(&data_dir)
        .args(["cda", "delete", cda_id.as_str(), "--yes"])
        .assert()
        .success();

    wb(&data_dir)
        .args(["street", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 street(s)"));
    wb(&data_dir)
        .args(["property", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 propert(ies)"));
}

#[test]
fn directory_groups_by_ward() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    wb(&data_dir)
        .args(["directory", "--ward", "Ward C1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("== Ward C1 =="))
        .stdout(predicate::str::contains("Phase 1 CDA (1 street(s)"))
        .stdout(predicate::str::contains("Showing 1 of 1 CDA(s)"));
}

#[test]
fn prune_reports_when_nothing_is_orphaned() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    wb(&data_dir)
        .args(["prune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No orphaned properties"));
}

#[test]
fn rejects_properties_on_unknown_streets() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    wb(&data_dir)
        .args([
            "property", "register", "--street", "424242", "--number", "1", "--type", "House",
            "--owner", "Nobody",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("street 424242 not found"));
}

#[test]
fn exports_the_cda_report_as_csv() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    let csv_path = data_dir.path().join("cdas.csv");
    wb(&data_dir)
        .args(["report", "cdas", "--csv"])
        .arg(&csv_path)
        .assert()
        .success();

    let text = std::fs::read_to_string(&csv_path).unwrap();
    assert!(text.contains("CDA Name"));
    assert!(text.contains("Phase 1 CDA"));
}
