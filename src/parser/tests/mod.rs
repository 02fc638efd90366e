//! Unit tests for parsing.
//!
//! Tests are organized by parser component:
//! - [`expr`]: Expression parsing and precedence/associativity
//! - [`stmt`]: Statement parsing (`var`, `print`, blocks, expression statements)
//! - [`errors`]: Error detection and message quality
//! - [`helpers`]: Parser utilities and edge cases

use super::*;
use crate::ast::pretty::print_expr;
use crate::ast::{Expr, Stmt};
use crate::lexer::Lexer;

mod helpers;

/// Parses a single expression from source, panicking on lexer/parser error.
pub(super) fn parse_expr(source: &str) -> Expr {
    let (tokens, errors) = Lexer::new(source).scan_tokens();
    assert!(errors.is_empty(), "unexpected lexical errors for {:?}", source);
    Parser::new(tokens)
        .parse_expression()
        .unwrap_or_else(|e| panic!("failed to parse expression {:?}: {}", source, e))
}

/// Parses a single expression and returns its S-expression pretty-print.
pub(super) fn parse_and_print(source: &str) -> String {
    print_expr(&parse_expr(source))
}

/// Parses a single expression and returns the parse error.
pub(super) fn parse_expr_error(source: &str) -> ParseError {
    let (tokens, errors) = Lexer::new(source).scan_tokens();
    assert!(errors.is_empty(), "unexpected lexical errors for {:?}", source);
    match Parser::new(tokens).parse_expression() {
        Ok(expr) => panic!("expected parse error for {:?}, got {:?}", source, expr.kind),
        Err(e) => e,
    }
}

/// Parses a full statement list from source, panicking on lexer/parser error.
pub(super) fn parse_statements(source: &str) -> Vec<Stmt> {
    let (tokens, errors) = Lexer::new(source).scan_tokens();
    assert!(errors.is_empty(), "unexpected lexical errors for {:?}", source);
    Parser::new(tokens)
        .parse_program()
        .unwrap_or_else(|e| panic!("failed to parse program {:?}: {}", source, e))
}

/// Parses a full statement list and returns the first parse error.
pub(super) fn parse_statements_error(source: &str) -> ParseError {
    let (tokens, errors) = Lexer::new(source).scan_tokens();
    assert!(errors.is_empty(), "unexpected lexical errors for {:?}", source);
    match Parser::new(tokens).parse_program() {
        Ok(stmts) => panic!("expected a parse error for {:?}, got {} statements", source, stmts.len()),
        Err(e) => e,
    }
}
