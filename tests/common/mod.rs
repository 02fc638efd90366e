//! Common test utilities for black-box CLI tests.
//!
//! Each test file is compiled as a separate crate, so not all functions
//! are used in every test file.
#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Output};

/// Returns the path to the `lox` binary built by cargo.
pub fn lox_binary() -> String {
    env!("CARGO_BIN_EXE_lox").to_string()
}

/// The result of invoking the CLI: captured stdout, stderr, and exit code.
pub struct CliResult {
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
}

/// Writes `source` to a temp file and invokes `lox <mode> <file>`.
pub fn run_mode(mode: &str, source: &str) -> CliResult {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    file.write_all(source.as_bytes()).expect("failed to write source");

    let output = Command::new(lox_binary())
        .arg(mode)
        .arg(file.path())
        .output()
        .expect("failed to run lox binary");

    to_cli_result(output)
}

/// Invokes the binary with raw arguments, bypassing the temp-file/mode
/// convenience wrapper — used for CLI-misuse tests.
pub fn run_raw(args: &[&str]) -> CliResult {
    let output = Command::new(lox_binary())
        .args(args)
        .output()
        .expect("failed to run lox binary");

    to_cli_result(output)
}

fn to_cli_result(output: Output) -> CliResult {
    CliResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        code: output.status.code().expect("process terminated by signal"),
    }
}
