//! Unit tests for the lexer module.

use super::*;
use crate::token::TokenKind;

/// Tokenizes input and returns only the kinds, panicking on lexical error.
pub(super) fn tokenize_kinds(input: &str) -> Vec<TokenKind> {
    let (tokens, errors) = Lexer::new(input).scan_tokens();
    assert!(
        errors.is_empty(),
        "unexpected lexical errors for {:?}: {:?}",
        input,
        errors.iter().map(|e| e.to_string()).collect::<Vec<_>>()
    );
    tokens.into_iter().map(|t| t.kind).collect()
}

/// Tokenizes input and returns the accumulated lexical errors.
pub(super) fn tokenize_errors(input: &str) -> Vec<LexError> {
    Lexer::new(input).scan_tokens().1
}
