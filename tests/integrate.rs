use std::{fs::File, io::Read};

use account_auth_state::csv::StepStatus;
use assert_cmd::Command;

fn executable() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

fn read_summary(reader: impl Read) -> anyhow::Result<Vec<StepStatus>> {
    let mut b = csv::ReaderBuilder::new();
    b.trim(csv::Trim::All);
    let mut rdr = b.from_reader(reader);

    let mut steps = Vec::new();
    for status in rdr.deserialize() {
        let status: StepStatus = status?;
        steps.push(status);
    }

    Ok(steps)
}

fn expected(test_no: u32) -> Vec<StepStatus> {
    let out_file = format!("./tests/csvs/out{test_no}.csv");
    read_summary(File::open(out_file).unwrap()).unwrap()
}

#[test]
fn walkthrough_script() {
    let out = executable()
        .arg("./tests/csvs/in1.csv")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let out = read_summary(out.as_slice()).unwrap();
    assert_eq!(out, expected(1));
}

#[test]
fn builtin_walkthrough_without_script() {
    let out = executable()
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let out = read_summary(out.as_slice()).unwrap();
    assert_eq!(out, expected(1));
}

#[test]
fn custom_account_skips_bad_rows() {
    let out = executable()
        .args([
            "--balance",
            "500.00",
            "--password",
            "secret",
            "--reset-code",
            "0000",
            "./tests/csvs/in2.csv",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let out = read_summary(out.as_slice()).unwrap();
    assert_eq!(out, expected(2));
}

#[test]
fn negative_opening_balance_is_refused() {
    executable().arg("--balance=-1").assert().failure();
}

#[test]
fn missing_script_fails() {
    executable()
        .arg("./tests/csvs/does_not_exist.csv")
        .assert()
        .failure();
}

#[test]
fn unknown_action_aborts_after_printing_applied_rows() {
    let assert = executable().arg("./tests/csvs/in3.csv").assert().failure();

    let out = read_summary(assert.get_output().stdout.as_slice()).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0], expected(3)[0]);
}

#[test]
fn opening_state_is_logged() {
    let output = executable()
        .env("RUST_LOG", "info")
        .arg("./tests/csvs/in4.csv")
        .assert()
        .success()
        .get_output()
        .clone();

    let stderr = String::from_utf8(output.stderr).unwrap();
    let opened = stderr
        .lines()
        .find(|l| l.contains("account opened"))
        .expect("no account opened log line");
    assert!(opened.contains("LoggedOut"));
    assert!(opened.contains("5000"));

    let out = read_summary(output.stdout.as_slice()).unwrap();
    assert_eq!(out, expected(4));
}
