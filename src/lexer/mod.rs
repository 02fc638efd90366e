//! Lexical analyzer for the Lox programming language.
//!
//! This module provides the [`Lexer`] struct which converts source code text
//! into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer performs the following tasks:
//! - Scans the input character by character
//! - Recognizes identifiers, reserved words, literals, and punctuation
//! - Tracks source positions for error reporting
//! - Skips whitespace and line comments
//!
//! Unlike a typical recoverable scanner, [`Lexer::scan_tokens`] never stops
//! at the first bad character: it accumulates every [`LexError`] it
//! encounters and keeps going, so `tokenize` mode can still report every
//! valid token alongside every lexical error in one pass.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for lexical analysis
//! - `cursor` - Position tracking and character navigation
//! - `skip` - Whitespace and comment handling
//! - `tokens` - Token recognition and reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod error;
mod skip;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::LexError;

use crate::token::{Span, Token, TokenKind};

/// A lexical analyzer that tokenizes Lox source code.
///
/// The `Lexer` maintains its position within the input and tracks line/
/// column numbers for error reporting. It is designed to be used once per
/// source file, via [`Lexer::scan_tokens`].
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scans the entire input, returning every token produced alongside
    /// every lexical error encountered, in source order.
    ///
    /// The returned token vector always ends with a single [`TokenKind::Eof`]
    /// token, even when errors occurred. Scanning does not stop at the
    /// first error: it accumulates errors and keeps tokenizing the rest of
    /// the input.
    pub fn scan_tokens(mut self) -> (Vec<Token>, Vec<LexError>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        loop {
            self.skip_whitespace_and_comments();

            if self.is_eof() {
                break;
            }

            match self.scan_token() {
                Ok(token) => tokens.push(token),
                Err(err) => errors.push(err),
            }
        }

        let eof_span = Span::new(self.pos, self.pos, self.line, self.column);
        tokens.push(Token::new(TokenKind::Eof, "", eof_span));

        (tokens, errors)
    }
}
