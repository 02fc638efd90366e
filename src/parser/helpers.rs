//! Parser helper methods for token navigation and basic operations.

use super::Parser;
use super::error::ParseError;
use crate::token::{Span, Token, TokenKind};

impl Parser {
    /// Returns a reference to the current token.
    pub(super) fn current(&self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the kind of the current token.
    pub(super) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Returns the span of the current token.
    pub(super) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_eof(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Advances to the next token.
    ///
    /// Does nothing if already at `Eof`.
    pub(super) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Expects the current token to match `expected`, advances past it, and
    /// returns the consumed token's lexeme.
    pub(super) fn consume(&mut self, expected: &TokenKind, message: &str) -> Result<String, ParseError> {
        if self.current_kind() == expected {
            let lexeme = self.current().lexeme.clone();
            self.advance();
            Ok(lexeme)
        } else {
            Err(self.error_at_current(message))
        }
    }

    /// Builds a [`ParseError`] anchored at the current token.
    pub(super) fn error_at_current(&self, message: &str) -> ParseError {
        let at_end = self.is_eof();
        ParseError::new(
            message,
            self.current_span(),
            self.current().lexeme.clone(),
            at_end,
        )
    }
}
