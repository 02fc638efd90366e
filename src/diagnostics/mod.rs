//! Stderr formatting for the three runtime error kinds (spec.md §7).
//!
//! This is the single place that knows the exact wire format of each
//! error kind, mirroring the grounding crate's `diagnostics::report_error`
//! dispatch-by-error-variant shape. Unlike the grounding crate, this does
//! not use `ariadne` for rendering: spec.md mandates exact literal stderr
//! lines (`[line L] Error: ...`), and each error type's own `Display` impl
//! already produces that line verbatim, so there is no span-rendering work
//! left for this module to do — it just owns *where* errors get printed.

use lox::interpreter::RuntimeError;
use lox::lexer::LexError;
use lox::parser::ParseError;

/// Prints every lexical error accumulated during a scan, one per line.
///
/// The scanner does not stop at the first bad character, so `tokenize`
/// mode may report several of these before exiting.
pub fn report_lex_errors(errors: &[LexError]) {
    for error in errors {
        eprintln!("{}", error);
    }
}

/// Prints a single parse error. Parsing stops at the first syntax error
/// whether the entry point is a lone expression (`parse`, `evaluate`
/// modes) or a statement list (`run` mode), so there is only ever one to
/// report.
pub fn report_parse_error(error: &ParseError) {
    eprintln!("{}", error);
}

/// Prints a single runtime error. Execution stops immediately on the
/// first one.
pub fn report_runtime_error(error: &RuntimeError) {
    eprintln!("{}", error);
}
