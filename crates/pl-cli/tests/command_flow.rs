//! End-to-end tests for the `pl` binary.
//!
//! Spawns the built binary with piped stdin/stdout and checks the full
//! pipeline: read lines, validate, execute, print responses.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::TempDir;

fn pl_binary() -> String {
    env!("CARGO_BIN_EXE_pl").to_string()
}

/// Builds a command with config lookups isolated to a temp home.
fn pl_command(home: &TempDir) -> Command {
    let mut command = Command::new(pl_binary());
    command
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("PL_DEBUG")
        .env_remove("RUST_LOG");
    command
}

fn run_with_stdin(mut command: Command, input: &str) -> std::process::Output {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn pl");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().expect("failed to wait for pl")
}

const SCENARIO: &str = "create_parking_lot 6\n\
                        park KA-01-HH-1234\n\
                        park KA-01-HH-9999\n\
                        park KA-01-BB-0001\n\
                        leave KA-01-HH-9999 4\n\
                        park KA-01-P-333\n\
                        status\n\
                        leave DL-12-AA-9999 2\n";

const SCENARIO_OUTPUT: &str = "Created parking lot with 6 slots\n\
                               Allocated slot number: 1\n\
                               Allocated slot number: 2\n\
                               Allocated slot number: 3\n\
                               Registration number KA-01-HH-9999 with Slot Number 2 free with Charge $30\n\
                               Allocated slot number: 2\n\
                               Slot No.\tRegistration No.\n\
                               1\tKA-01-HH-1234\n\
                               2\tKA-01-P-333\n\
                               3\tKA-01-BB-0001\n\
                               Registration number DL-12-AA-9999 not found\n";

#[test]
fn scenario_from_stdin_prints_exact_responses() {
    let home = TempDir::new().unwrap();
    let output = run_with_stdin(pl_command(&home), SCENARIO);

    assert!(
        output.status.success(),
        "pl should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), SCENARIO_OUTPUT);
}

#[test]
fn scenario_from_file_matches_stdin_behavior() {
    let home = TempDir::new().unwrap();
    let input_path = home.path().join("commands.txt");
    std::fs::write(&input_path, SCENARIO).unwrap();

    let output = pl_command(&home)
        .arg(&input_path)
        .output()
        .expect("failed to run pl");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), SCENARIO_OUTPUT);
}

#[test]
fn debug_diagnostics_stay_on_stderr() {
    let home = TempDir::new().unwrap();
    let mut command = pl_command(&home);
    command.env("PL_DEBUG", "true");

    let input = "create_parking_lot 2\nvalet KA-01-HH-1234\npark KA-01-HH-1234\n";
    let output = run_with_stdin(command, input);

    assert!(output.status.success());
    // Primary output is unaffected by the skipped line and by logging.
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Created parking lot with 2 slots\nAllocated slot number: 1\n"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unknown command"),
        "stderr should carry the diagnostic: {stderr}"
    );
}

#[test]
fn malformed_lines_are_silent_without_debug() {
    let home = TempDir::new().unwrap();
    let input = "create_parking_lot 2\npark\nleave KA-01-HH-1234 zero\nstatus\n";
    let output = run_with_stdin(pl_command(&home), input);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Created parking lot with 2 slots\nSlot No.\tRegistration No.\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn missing_input_file_fails_the_run() {
    let home = TempDir::new().unwrap();
    let output = pl_command(&home)
        .arg(home.path().join("does-not-exist.txt"))
        .output()
        .expect("failed to run pl");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to open input file"), "{stderr}");
}
