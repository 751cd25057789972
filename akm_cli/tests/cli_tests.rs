//! Integration tests for the thermokinetic CLI.
//!
//! These exercise the binary end to end: config isolation via
//! XDG_CONFIG_HOME, JSON excursion input files, and both report formats.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Command with config lookup isolated to the test dir
fn cli(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("thermokinetic").expect("Failed to find binary");
    cmd.env("XDG_CONFIG_HOME", home.join("config"));
    cmd
}

fn write_excursions(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, json).expect("Failed to write excursion file");
    path
}

#[test]
fn test_products_lists_registered_profiles() {
    let temp = setup_test_dir();

    cli(temp.path())
        .arg("products")
        .assert()
        .success()
        .stdout(predicate::str::contains("mrna_vaccine"))
        .stdout(predicate::str::contains("insulin"))
        .stdout(predicate::str::contains("Biologic / Monoclonal Antibody"));
}

#[test]
fn test_evaluate_cold_chain_intact() {
    let temp = setup_test_dir();
    let input = write_excursions(
        temp.path(),
        "excursions.json",
        r#"[{"temperature_celsius": -20.0, "duration_hours": 24.0}]"#,
    );

    cli(temp.path())
        .arg("evaluate")
        .arg("--product")
        .arg("mrna_vaccine")
        .arg("--input")
        .arg(&input)
        .arg("--as-of")
        .arg("2026-08-23")
        .assert()
        .success()
        .stdout(predicate::str::contains("mRNA Vaccine"))
        .stdout(predicate::str::contains("SAFE"));
}

#[test]
fn test_evaluate_json_output() {
    let temp = setup_test_dir();
    let input = write_excursions(
        temp.path(),
        "excursions.json",
        r#"[{"temperature_celsius": 25.0, "duration_hours": 10.0}]"#,
    );

    let output = cli(temp.path())
        .arg("evaluate")
        .arg("--product")
        .arg("mrna_vaccine")
        .arg("--input")
        .arg(&input)
        .arg("--shipment-id")
        .arg("SHIP-TEST-1")
        .arg("--as-of")
        .arg("2026-08-23")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout is not valid JSON");

    assert_eq!(report["shipment_correlation_id"], "SHIP-TEST-1");
    assert_eq!(report["product_label"], "mRNA Vaccine");
    assert_eq!(report["excursion_segments"], 1);
    assert_eq!(report["total_exposure_hours"], 10.0);
    assert_eq!(report["mean_kinetic_temperature_celsius"], 25.0);
    assert!(report["cumulative_kinetic_exposure_index"]
        .as_str()
        .unwrap()
        .contains('e'));
    assert!(report["potency_remaining_percent"].as_f64().unwrap() > 99.0);
    assert_eq!(report["status"]["code"], "SAFE");
}

#[test]
fn test_unknown_product_rejected() {
    let temp = setup_test_dir();
    let input = write_excursions(
        temp.path(),
        "excursions.json",
        r#"[{"temperature_celsius": 5.0, "duration_hours": 1.0}]"#,
    );

    cli(temp.path())
        .arg("evaluate")
        .arg("--product")
        .arg("aspirin")
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown product type"));
}

#[test]
fn test_segment_count_limit_enforced() {
    let temp = setup_test_dir();
    let segment = r#"{"temperature_celsius": 5.0, "duration_hours": 1.0}"#;
    let json = format!("[{}]", vec![segment; 51].join(","));
    let input = write_excursions(temp.path(), "excursions.json", &json);

    cli(temp.path())
        .arg("evaluate")
        .arg("--product")
        .arg("insulin")
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("51 segments"));
}

#[test]
fn test_out_of_range_temperature_rejected() {
    let temp = setup_test_dir();
    let input = write_excursions(
        temp.path(),
        "excursions.json",
        r#"[{"temperature_celsius": 75.0, "duration_hours": 1.0}]"#,
    );

    cli(temp.path())
        .arg("evaluate")
        .arg("--product")
        .arg("biologic")
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("temperature"));
}

#[test]
fn test_custom_profile_from_config_file() {
    let temp = setup_test_dir();
    let config_path = temp.path().join("custom.toml");
    fs::write(
        &config_path,
        r#"
[[profiles.custom]]
key = "insulin"
label = "Insulin (site-validated)"
activation_energy_j_per_mol = 65000.0
pre_exponential_factor_per_hour = 4.2e9
reference_temp_kelvin = 277.15
potency_threshold_percent = 95.0
nominal_shelf_life_days = 365
"#,
    )
    .unwrap();

    cli(temp.path())
        .arg("products")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Insulin (site-validated)"));
}

#[test]
fn test_invalid_config_profile_fails_fast() {
    let temp = setup_test_dir();
    let config_path = temp.path().join("broken.toml");
    fs::write(
        &config_path,
        r#"
[[profiles.custom]]
key = "insulin"
label = "Broken"
activation_energy_j_per_mol = -1.0
pre_exponential_factor_per_hour = 4.2e9
reference_temp_kelvin = 277.15
potency_threshold_percent = 95.0
nominal_shelf_life_days = 365
"#,
    )
    .unwrap();

    cli(temp.path())
        .arg("products")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("activation energy"));
}

#[test]
fn test_default_command_lists_products() {
    let temp = setup_test_dir();

    cli(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered product profiles"));
}
