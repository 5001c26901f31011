//! End-to-end tests of the docverify binary.

use assert_cmd::cargo;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn docverify_cmd() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("docverify"));
    cmd.env_remove("DOCVERIFY_SEED")
        .env_remove("DOCVERIFY_FORMAT")
        .env_remove("DOCVERIFY_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn write_upload(dir: &Path, name: &str, bytes: usize) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, vec![b'x'; bytes]).expect("write upload");
    path
}

fn json_stdout(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("parse json output")
}

#[test]
fn test_version_command() {
    docverify_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("docverify "));
}

#[test]
fn test_list_all_types() {
    docverify_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("bank_statement"))
        .stdout(predicate::str::contains("tax_record"))
        .stdout(predicate::str::contains("Employer Verification"));
}

#[test]
fn test_list_unknown_type_is_runtime_error() {
    docverify_cmd()
        .args(["list", "--type", "passport"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_missing_file_is_runtime_error() {
    let dir = TempDir::new().unwrap();
    docverify_cmd()
        .arg("validate")
        .arg(dir.path().join("missing.pdf"))
        .args(["--type", "payslip"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_oversized_file_is_runtime_error() {
    let dir = TempDir::new().unwrap();
    let file = write_upload(dir.path(), "big.pdf", 64);
    docverify_cmd()
        .arg("validate")
        .arg(&file)
        .args(["--type", "irp", "--max-file-size", "16"])
        .assert()
        .code(3);
}

#[test]
fn test_bad_arguments_exit_code() {
    docverify_cmd().args(["validate", "--type", "irp"]).assert().code(3);
}

#[test]
fn test_unknown_type_rejected_with_exit_one() {
    let dir = TempDir::new().unwrap();
    let file = write_upload(dir.path(), "doc.pdf", 10);

    let output = docverify_cmd()
        .arg("validate")
        .arg(&file)
        .args(["--type", "passport", "--format", "json", "--seed", "1"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let value = json_stdout(&output);
    let result = &value["results"][0];
    assert_eq!(result["is_valid"], false);
    assert_eq!(result["risk_score"], 100);
    assert_eq!(result["anomalies"][0], "Unknown document type");
    assert_eq!(result["recommendations"][0], "Please select a valid document type");
}

#[test]
fn test_exit_code_matches_verdicts() {
    let dir = TempDir::new().unwrap();
    let files: Vec<_> = (0..4)
        .map(|i| write_upload(dir.path(), &format!("stmt{}.pdf", i), 10))
        .collect();

    let output = docverify_cmd()
        .arg("validate")
        .args(&files)
        .args(["--type", "bank_statement", "--format", "json", "--seed", "7"])
        .output()
        .unwrap();

    let value = json_stdout(&output.stdout);
    let any_invalid = value["results"]
        .as_array()
        .unwrap()
        .iter()
        .any(|r| r["is_valid"] == false);
    let expected = if any_invalid { 1 } else { 0 };
    assert_eq!(output.status.code(), Some(expected));
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let dir = TempDir::new().unwrap();
    let file = write_upload(dir.path(), "tax.pdf", 10);

    let run = || {
        let output = docverify_cmd()
            .arg("validate")
            .arg(&file)
            .args(["--type", "tax_record", "--format", "json"])
            .env("DOCVERIFY_SEED", "2024")
            .output()
            .unwrap();
        let value = json_stdout(&output.stdout);
        let result = &value["results"][0];
        (
            result["checks"].clone(),
            result["risk_score"].clone(),
            result["recommendations"].clone(),
        )
    };

    assert_eq!(run(), run());
}

#[test]
fn test_customer_details_and_metadata() {
    let dir = TempDir::new().unwrap();
    let file = write_upload(dir.path(), "ppsn.pdf", 10);

    let output = docverify_cmd()
        .arg("validate")
        .arg(&file)
        .args([
            "--type",
            "PPSN",
            "--customer-name",
            "Niamh Byrne",
            "--customer-id",
            "C-88",
            "--meta",
            "branch=Galway",
            "--format",
            "json",
            "--seed",
            "3",
        ])
        .output()
        .unwrap();

    let value = json_stdout(&output.stdout);
    let document = &value["results"][0]["document"];
    assert_eq!(document["document_type"], "ppsn");
    assert_eq!(document["customer_name"], "Niamh Byrne");
    assert_eq!(document["customer_id"], "C-88");
    assert_eq!(document["metadata"]["branch"], "Galway");
}

#[test]
fn test_upload_dir_receives_copy() {
    let src = TempDir::new().unwrap();
    let uploads = TempDir::new().unwrap();
    let file = write_upload(src.path(), "slip.pdf", 10);
    let target = uploads.path().join("store");

    docverify_cmd()
        .arg("validate")
        .arg(&file)
        .args(["--type", "payslip", "--seed", "9", "--no-color"])
        .arg("--upload-dir")
        .arg(&target)
        .assert()
        .stdout(predicate::str::contains("RECOMMENDATIONS"));

    assert!(target.join("slip.pdf").is_file());
}

#[test]
fn test_upload_inside_upload_dir_is_not_truncated() {
    let dir = TempDir::new().unwrap();
    let uploads = dir.path().join("uploads");
    std::fs::create_dir_all(&uploads).unwrap();
    let file = write_upload(&uploads, "slip.pdf", 32);

    docverify_cmd()
        .arg("validate")
        .arg(&file)
        .args(["--type", "payslip", "--seed", "9"])
        .arg("--upload-dir")
        .arg(&uploads)
        .assert()
        .stdout(predicate::str::contains("RECOMMENDATIONS"));

    assert_eq!(std::fs::metadata(&file).unwrap().len(), 32);
}

#[test]
fn test_same_file_name_in_batch_is_runtime_error() {
    let dir = TempDir::new().unwrap();
    let x = dir.path().join("x");
    let y = dir.path().join("y");
    std::fs::create_dir_all(&x).unwrap();
    std::fs::create_dir_all(&y).unwrap();
    let first = write_upload(&x, "s.pdf", 10);
    let second = write_upload(&y, "s.pdf", 20);

    docverify_cmd()
        .arg("validate")
        .arg(&first)
        .arg(&second)
        .args(["--type", "bank_statement"])
        .arg("--upload-dir")
        .arg(dir.path().join("up"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("would both be stored as s.pdf"));
}

#[test]
fn test_config_file_sets_format() {
    let dir = TempDir::new().unwrap();
    let file = write_upload(dir.path(), "irp.pdf", 10);
    let config = dir.path().join("docverify.toml");
    std::fs::write(&config, "format = \"junit\"\nrandom_seed = 5\n").unwrap();

    docverify_cmd()
        .arg("validate")
        .arg(&file)
        .args(["--type", "irp"])
        .arg("--config")
        .arg(&config)
        .assert()
        .stdout(predicate::str::starts_with("<?xml"));
}

#[test]
fn test_invalid_config_is_runtime_error() {
    let dir = TempDir::new().unwrap();
    let file = write_upload(dir.path(), "irp.pdf", 10);
    let config = dir.path().join("docverify.toml");
    std::fs::write(&config, "colour = true\n").unwrap();

    docverify_cmd()
        .arg("validate")
        .arg(&file)
        .args(["--type", "irp"])
        .arg("--config")
        .arg(&config)
        .assert()
        .code(3);
}
