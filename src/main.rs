//! The Lox tree-walking interpreter CLI.
//!
//! Dispatches to one of four modes (`tokenize`, `parse`, `evaluate`, `run`),
//! each exposing a successive stage of the interpreter pipeline, and exits
//! with the stage-specific exit code the selected mode produces.

use clap::{Arg, Command};

mod diagnostics;
mod driver;

const USAGE: &str = "Usage: lox <tokenize|parse|evaluate|run> <filename>";

/// Entry point for the interpreter CLI.
///
/// Argument count and mode-name validation are done by hand rather than
/// through clap's own error formatting: the exact `Usage: ...` and
/// `Unknown command: ...` stderr text is mandated, and clap's matcher
/// errors don't reproduce that text byte-for-byte.
fn main() {
    let matches = Command::new("lox")
        .about("A tree-walking interpreter for Lox")
        .arg(Arg::new("mode").required(false))
        .arg(Arg::new("filename").required(false))
        .get_matches();

    let mode = matches.get_one::<String>("mode");
    let filename = matches.get_one::<String>("filename");

    let (mode, filename) = match (mode, filename) {
        (Some(mode), Some(filename)) => (mode, filename),
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let source = std::fs::read_to_string(filename).unwrap_or_else(|error| {
        eprintln!("Failed to read file '{}': {}", filename, error);
        std::process::exit(1);
    });

    let exit_code = match mode.as_str() {
        "tokenize" => driver::tokenize(&source),
        "parse" => driver::parse(&source),
        "evaluate" => driver::evaluate(&source),
        "run" => driver::run(&source),
        other => {
            eprintln!("Unknown command: {}", other);
            std::process::exit(1);
        }
    };

    std::process::exit(exit_code);
}
