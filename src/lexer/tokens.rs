//! Token reading and recognition for the lexer.

use super::Lexer;
use super::error::LexError;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Reads and returns the next token from the input, assuming whitespace
    /// and comments have already been skipped.
    pub(super) fn scan_token(&mut self) -> Result<Token, LexError> {
        let c = self
            .current_char()
            .expect("scan_token called at end of input");

        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        let kind = match c {
            '(' => self.simple(TokenKind::LeftParen),
            ')' => self.simple(TokenKind::RightParen),
            '{' => self.simple(TokenKind::LeftBrace),
            '}' => self.simple(TokenKind::RightBrace),
            '*' => self.simple(TokenKind::Star),
            '.' => self.simple(TokenKind::Dot),
            ',' => self.simple(TokenKind::Comma),
            '+' => self.simple(TokenKind::Plus),
            '-' => self.simple(TokenKind::Minus),
            ';' => self.simple(TokenKind::Semicolon),
            '/' => self.simple(TokenKind::Slash),
            '=' => {
                self.advance();
                if self.advance_if('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                }
            }
            '!' => {
                self.advance();
                if self.advance_if('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                }
            }
            '<' => {
                self.advance();
                if self.advance_if('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                }
            }
            '>' => {
                self.advance();
                if self.advance_if('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                }
            }
            '"' => {
                let span = Span::new(start_pos, start_pos, start_line, start_column);
                return self.read_string(span);
            }
            _ if c.is_ascii_digit() => return self.read_number(start_pos, start_line, start_column),
            _ if c.is_ascii_alphabetic() || c == '_' => {
                return Ok(self.read_identifier_or_keyword(start_pos, start_line, start_column));
            }
            _ => {
                self.advance();
                let span = Span::new(start_pos, self.pos, start_line, start_column);
                return Err(LexError::unexpected_character(c, span));
            }
        };

        let span = Span::new(start_pos, self.pos, start_line, start_column);
        let lexeme = self.input[start_pos..self.pos].to_string();
        Ok(Token::new(kind, lexeme, span))
    }

    /// Consumes a single-character token and returns its kind, leaving span
    /// and lexeme construction to the caller (which may have already
    /// advanced further for two-char operators).
    fn simple(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Reads a string literal. `open_span` is a zero-width span at the
    /// opening quote, used to report unterminated strings.
    ///
    /// Lox strings are not escape-processed (no `\n`, `\"`, etc.) and may
    /// span multiple physical lines; only reaching end-of-input before the
    /// closing quote is an error.
    fn read_string(&mut self, open_span: Span) -> Result<Token, LexError> {
        let start_pos = open_span.start;
        self.advance(); // consume opening quote

        loop {
            match self.current_char() {
                Some('"') => {
                    self.advance(); // consume closing quote
                    let span = Span::new(
                        start_pos,
                        self.pos,
                        open_span.line,
                        open_span.column,
                    );
                    let lexeme = self.input[start_pos..self.pos].to_string();
                    let value = self.input[start_pos + 1..self.pos - 1].to_string();
                    return Ok(Token::new(TokenKind::StringLiteral(value), lexeme, span));
                }
                Some(_) => self.advance(),
                None => {
                    let span = Span::new(start_pos, self.pos, open_span.line, open_span.column);
                    return Err(LexError::unterminated_string(span));
                }
            }
        }
    }

    /// Reads a number literal: a run of digits, optionally followed by a
    /// `.` and a further run of digits — but only when that `.` is
    /// immediately followed by a digit, so a trailing `.` or a second `.`
    /// (as in member-access-style `1.2.3`) is left for the next token.
    fn read_number(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Result<Token, LexError> {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.current_char() == Some('.') && self.peek_next_char().is_some_and(|c| c.is_ascii_digit())
        {
            self.advance(); // consume '.'
            while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let lexeme = self.input[start_pos..self.pos].to_string();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        let value: f64 = lexeme.parse().expect("number lexeme must parse as f64");
        Ok(Token::new(TokenKind::Number(value), lexeme, span))
    }

    /// Reads an identifier, returning the matching reserved-word token kind
    /// if the lexeme is one of Lox's 16 keywords.
    fn read_identifier_or_keyword(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let lexeme = self.input[start_pos..self.pos].to_string();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        let kind = TokenKind::keyword(&lexeme).unwrap_or(TokenKind::Identifier);
        Token::new(kind, lexeme, span)
    }
}
