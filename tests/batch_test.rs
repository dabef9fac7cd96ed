use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

#[test]
fn test_batch_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("paystrat"));
    cmd.arg("--input").arg("tests/fixtures/orders.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("method,amount,fee"))
        .stdout(predicate::str::contains("creditcard,100.0,2.0"))
        .stdout(predicate::str::contains("paypal,100.0,3.0"))
        .stdout(predicate::str::contains("banktransfer,100.0,2.0"))
        .stdout(predicate::str::contains("creditcard,0.0,0.0"))
        // Status lines stay off stdout
        .stdout(predicate::str::contains("Processing").not())
        .stderr(predicate::str::contains("Processing via PayPal"));

    Ok(())
}

#[test]
fn test_batch_skips_bad_rows() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "method, amount").unwrap();
    writeln!(csv, "bitcoin, 100").unwrap();
    writeln!(csv, "paypal, not-a-number").unwrap();
    writeln!(csv, "banktransfer, 10").unwrap();

    let mut cmd = Command::new(cargo_bin!("paystrat"));
    cmd.arg("--input").arg(csv.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("banktransfer,10.0,2.0"))
        .stdout(predicate::str::contains("bitcoin").not())
        .stderr(predicate::str::contains("Error processing order 1"))
        .stderr(predicate::str::contains("Error processing order 2"));
}

#[test]
fn test_batch_json_output() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "method, amount").unwrap();
    writeln!(csv, "creditcard, 100").unwrap();

    let mut cmd = Command::new(cargo_bin!("paystrat"));
    cmd.arg("--input").arg(csv.path()).arg("--json");

    cmd.assert().success().stdout(predicate::str::contains(
        r#"{"method":"creditcard","amount":100.0,"fee":2.0}"#,
    ));
}

#[test]
fn test_batch_custom_fee_schedule() {
    let mut fees = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(fees, "bank_transfer_fixed = 5.0").unwrap();

    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "method, amount").unwrap();
    writeln!(csv, "banktransfer, 100").unwrap();
    writeln!(csv, "creditcard, 100").unwrap();

    let mut cmd = Command::new(cargo_bin!("paystrat"));
    cmd.arg("--input")
        .arg(csv.path())
        .arg("--fees")
        .arg(fees.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("banktransfer,100.0,5.0"))
        .stdout(predicate::str::contains("creditcard,100.0,2.0"));
}

#[test]
fn test_missing_input_file_fails() {
    let mut cmd = Command::new(cargo_bin!("paystrat"));
    cmd.arg("--input").arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}
