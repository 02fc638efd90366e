//! Statement parsing.
//!
//! ```text
//! program     → declaration* EOF
//! declaration → varDecl | statement
//! varDecl     → "var" IDENTIFIER ( "=" expression )? ";"
//! statement   → exprStmt | printStmt | block
//! exprStmt    → expression ";"
//! printStmt   → "print" expression ";"
//! block       → "{" declaration* "}"
//! ```

use super::Parser;
use super::error::ParseError;
use crate::ast::{Stmt, StmtKind};
use crate::token::{Span, TokenKind};

impl Parser {
    /// Entry point for `run` mode: parses the whole token stream as a
    /// sequence of top-level declarations/statements.
    ///
    /// Stops at the first malformed declaration; no error recovery or
    /// synchronization is attempted, matching how a single bad expression
    /// is handled in `parse`/`evaluate` mode.
    pub fn parse_program(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();

        while !self.is_eof() {
            statements.push(self.parse_declaration()?);
        }

        Ok(statements)
    }

    fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        if matches!(self.current_kind(), TokenKind::Var) {
            self.parse_var_declaration()
        } else {
            self.parse_statement()
        }
    }

    fn parse_var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.advance(); // consume 'var'

        let name = self.current().lexeme.clone();
        self.consume(&TokenKind::Identifier, "Expect variable name")?;

        let initializer = if matches!(self.current_kind(), TokenKind::Equal) {
            self.advance();
            Some(self.parse_expression()?)
        } else {
            None
        };

        let end_span = self.current_span();
        self.consume(&TokenKind::Semicolon, "Expect ';' after variable declaration")?;

        let span = Span::new(start_span.start, end_span.end, start_span.line, start_span.column);
        Ok(Stmt::new(StmtKind::Var { name, initializer }, span))
    }

    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::Print => self.parse_print_statement(),
            TokenKind::LeftBrace => self.parse_block(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_print_statement(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.advance(); // consume 'print'
        let value = self.parse_expression()?;
        let end_span = self.current_span();
        self.consume(&TokenKind::Semicolon, "Expect ';' after value")?;
        let span = Span::new(start_span.start, end_span.end, start_span.line, start_span.column);
        Ok(Stmt::new(StmtKind::Print(value), span))
    }

    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        let expr = self.parse_expression()?;
        let end_span = self.current_span();
        self.consume(&TokenKind::Semicolon, "Expect ';' after expression")?;
        let span = Span::new(start_span.start, end_span.end, start_span.line, start_span.column);
        Ok(Stmt::new(StmtKind::Expr(expr), span))
    }

    fn parse_block(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.advance(); // consume '{'

        let mut statements = Vec::new();
        while !matches!(self.current_kind(), TokenKind::RightBrace) && !self.is_eof() {
            statements.push(self.parse_declaration()?);
        }

        let end_span = self.current_span();
        self.consume(&TokenKind::RightBrace, "Expect '}' after block")?;

        let span = Span::new(start_span.start, end_span.end, start_span.line, start_span.column);
        Ok(Stmt::new(StmtKind::Block(statements), span))
    }
}
