//! Parse error types.

use crate::token::Span;

/// An error that occurred during parsing.
///
/// `Display` reproduces the parser's exact stderr line. When the error
/// token is the synthetic end-of-file token, the location reads
/// `at end` instead of quoting its (empty) lexeme.
#[derive(Debug)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
    pub lexeme: String,
    pub at_end: bool,
}

impl ParseError {
    pub(super) fn new(message: impl Into<String>, span: Span, lexeme: impl Into<String>, at_end: bool) -> Self {
        ParseError {
            message: message.into(),
            span,
            lexeme: lexeme.into(),
            at_end,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.at_end {
            write!(f, "[line {}] Error at end: {}.", self.span.line, self.message)
        } else {
            write!(
                f,
                "[line {}] Error at '{}': {}.",
                self.span.line, self.lexeme, self.message
            )
        }
    }
}

impl std::error::Error for ParseError {}
