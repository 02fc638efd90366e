//! Unit tests for the interpreter.

use super::*;
use crate::ast::{Expr, Stmt, Value};
use crate::lexer::Lexer;
use crate::parser::Parser;


/// Parses a single expression from source, panicking on lexer/parser error.
pub(super) fn parse_expr(source: &str) -> Expr {
    let (tokens, errors) = Lexer::new(source).scan_tokens();
    assert!(errors.is_empty(), "unexpected lexical errors in {:?}", source);
    Parser::new(tokens)
        .parse_expression()
        .unwrap_or_else(|e| panic!("failed to parse expression {:?}: {}", source, e))
}

/// Evaluates a single expression and panics on a runtime error.
pub(super) fn eval(source: &str) -> Value {
    let expr = parse_expr(source);
    Interpreter::new()
        .evaluate(&expr)
        .unwrap_or_else(|e| panic!("runtime error evaluating {:?}: {}", source, e))
}

/// Evaluates a single expression and returns the runtime error, panicking
/// if evaluation succeeds.
pub(super) fn eval_error(source: &str) -> RuntimeError {
    let expr = parse_expr(source);
    match Interpreter::new().evaluate(&expr) {
        Ok(value) => panic!("expected runtime error for {:?}, got {:?}", source, value),
        Err(e) => e,
    }
}

/// Parses a full statement list from source, panicking on lexer/parser error.
pub(super) fn parse_statements(source: &str) -> Vec<Stmt> {
    let (tokens, lex_errors) = Lexer::new(source).scan_tokens();
    assert!(lex_errors.is_empty(), "unexpected lexical errors in {:?}", source);
    Parser::new(tokens)
        .parse_program()
        .unwrap_or_else(|errs| panic!("failed to parse program {:?}: {:?}", source, errs))
}

/// Runs a full program and returns its accumulated `print` output.
pub(super) fn run(source: &str) -> String {
    let statements = parse_statements(source);
    let mut interpreter = Interpreter::new();
    interpreter
        .run(&statements)
        .unwrap_or_else(|e| panic!("runtime error running {:?}: {}", source, e));
    interpreter.output().to_string()
}

/// Runs a full program and returns the runtime error, panicking if the
/// program runs to completion.
pub(super) fn run_error(source: &str) -> RuntimeError {
    let statements = parse_statements(source);
    let mut interpreter = Interpreter::new();
    match interpreter.run(&statements) {
        Ok(()) => panic!("expected runtime error running {:?}", source),
        Err(e) => e,
    }
}
