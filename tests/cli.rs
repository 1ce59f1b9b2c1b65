use std::fs;
use std::process::{Command, Output};

use rstest::rstest;
use tempfile::TempDir;

/// Runs the binary with an empty home directory so no user config is picked up.
fn bill(home: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bill"))
        .args(args)
        .env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run bill")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[rstest]
#[case(&["100"], "100")]
#[case(&["-s", "10,10,10", "-n", "3"], "10")]
#[case(&["50", "-s", "10,10", "-n", "2"], "60")]
#[case(&["--splits", "10", "--splits", "20"], "30")]
#[case(&["12.5"], "12.5")]
#[case(&["1000000"], "1e+06")]
#[case(&["-s", "10", "-n", "0"], "+Inf")]
#[case(&["-s", "10", "-n", "-2"], "-5")]
#[case(&["-s", "-5,3"], "-2")]
#[case(&["0x1p4"], "16")]
fn prints_amount_owed(#[case] args: &[&str], #[case] expected: &str) {
    let home = TempDir::new().unwrap();
    let output = bill(&home, args);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), format!("The amount to pay is:  {}\n", expected));
}

#[test]
fn missing_input_fails_validation() {
    let home = TempDir::new().unwrap();
    let output = bill(&home, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains(
        "Please provide a principal amount or list of items to split for the bill"
    ));
}

#[rstest]
#[case("abc", "invalid syntax")]
#[case("1e50", "value out of range")]
fn malformed_principal_is_fatal(#[case] principal: &str, #[case] reason: &str) {
    let home = TempDir::new().unwrap();
    let output = bill(&home, &[principal, "-s", "10"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains(reason));
}

#[test]
fn malformed_split_exits_with_one() {
    let home = TempDir::new().unwrap();
    let output = bill(&home, &["-s", "10,ten"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
}

#[rstest]
#[case("1e50")]
#[case("10,-1e39")]
fn split_beyond_f32_exits_with_one(#[case] splits: &str) {
    let home = TempDir::new().unwrap();
    let output = bill(&home, &["-s", splits]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("value out of range"));
}

#[test]
fn help_exits_successfully() {
    let home = TempDir::new().unwrap();
    let output = bill(&home, &["--help"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("--numPeople"));
    assert!(stdout(&output).contains("or num_people from the config file"));
}

#[test]
fn default_config_supplies_num_people() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".bill.toml"), "num_people = 4\n").unwrap();

    let output = bill(&home, &["-s", "8"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "The amount to pay is:  2\n");

    let output = bill(&home, &["-s", "8", "-n", "2"]);
    assert_eq!(stdout(&output), "The amount to pay is:  4\n");
}

#[test]
fn explicit_config_is_used() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    fs::write(&config, "num_people = 5\n").unwrap();

    let output = bill(
        &home,
        &["-s", "10", "--config", config.to_str().unwrap()],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "The amount to pay is:  2\n");
}

#[test]
fn broken_config_is_an_error() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".bill.toml"), "num_people = [").unwrap();

    let output = bill(&home, &["100"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Failed to parse the config file"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let home = TempDir::new().unwrap();
    let output = bill(&home, &["100", "--config", "/nonexistent/bill.toml"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to open config file"));
}

#[test]
fn completions_skip_validation() {
    let home = TempDir::new().unwrap();
    let output = bill(&home, &["--completions", "bash"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("--splits"));
}
