//! Binary-level CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn medmatch() -> Command {
    Command::cargo_bin("medmatch").unwrap()
}

#[test]
fn test_predict_requires_symptoms() {
    medmatch()
        .arg("predict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one symptom"));
}

#[test]
fn test_predict_text_output() {
    medmatch()
        .args(["predict", "fever", "body aches", "fatigue"])
        .args(["--dataset", "/nonexistent/forces-seed.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Influenza"))
        .stdout(predicate::str::contains("100.00%"));
}

#[test]
fn test_predict_json_output_is_valid_json() {
    let output = medmatch()
        .args(["predict", "fever", "--format", "json"])
        .args(["--dataset", "/nonexistent/forces-seed.csv"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(parsed["diseases"].as_array().is_some());
    assert!(parsed["processing_time"].is_number());
}

#[test]
fn test_predict_unmatched_gets_advisory() {
    medmatch()
        .args(["predict", "glowing toes"])
        .args(["--dataset", "/nonexistent/forces-seed.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("General Health Consultation"))
        .stdout(predicate::str::contains("Symptomatic Care"));
}

#[test]
fn test_predict_from_stdin() {
    medmatch()
        .args(["predict", "--input", "-"])
        .args(["--dataset", "/nonexistent/forces-seed.csv"])
        .write_stdin("headache, sensitivity to light\nnausea")
        .assert()
        .success()
        .stdout(predicate::str::contains("Migraine"));
}

#[test]
fn test_predict_tsv_output() {
    medmatch()
        .args(["predict", "fever", "--format", "tsv"])
        .args(["--dataset", "/nonexistent/forces-seed.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rank\tname\tconfidence"));
}

#[test]
fn test_dataset_list_seed_table() {
    medmatch()
        .args(["dataset", "list"])
        .args(["--dataset", "/nonexistent/forces-seed.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Common Cold"))
        .stdout(predicate::str::contains("12 diseases"));
}

#[test]
fn test_dataset_show_unknown_name_fails() {
    medmatch()
        .args(["dataset", "show", "Dragon Pox"])
        .args(["--dataset", "/nonexistent/forces-seed.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no disease named"));
}

#[test]
fn test_dataset_export_json() {
    let output = medmatch()
        .args(["dataset", "export"])
        .args(["--dataset", "/nonexistent/forces-seed.csv"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["diseases"].as_array().unwrap().len(), 12);
    assert!(parsed["version"].is_string());
}

#[test]
fn test_predict_with_custom_dataset_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::with_suffix(".csv").unwrap();
    writeln!(file, "Disease,Symptom_1,Symptom_2,Description,Treatment").unwrap();
    writeln!(file, "Scurvy,bleeding gums,fatigue,Vitamin C deficiency,Citrus fruit").unwrap();

    medmatch()
        .args(["predict", "bleeding gums"])
        .arg("--dataset")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Scurvy"));
}
