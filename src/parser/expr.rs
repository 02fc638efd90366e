//! Expression parsing using precedence climbing.
//!
//! Implements the textbook Lox expression grammar, from loosest to
//! tightest binding:
//!
//! ```text
//! expression → assignment
//! assignment → IDENTIFIER "=" assignment | equality
//! equality   → comparison ( ( "!=" | "==" ) comparison )*
//! comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term       → factor ( ( "-" | "+" ) factor )*
//! factor     → unary ( ( "/" | "*" ) unary )*
//! unary      → ( "!" | "-" ) unary | primary
//! primary    → NUMBER | STRING | "true" | "false" | "nil"
//!            | "(" expression ")" | IDENTIFIER
//! ```

use super::Parser;
use super::error::ParseError;
use crate::ast::{BinaryOperator, Expr, ExprKind, UnaryOperator, Value};
use crate::token::{Span, TokenKind};

fn binary_op(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Subtract),
        TokenKind::Slash => Some(BinaryOperator::Divide),
        TokenKind::Star => Some(BinaryOperator::Multiply),
        _ => None,
    }
}

fn span_over(left: Span, right: Span) -> Span {
    Span::new(left.start, right.end, left.line, left.column)
}

impl Parser {
    /// Entry point for `parse`/`evaluate` modes: a single expression.
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_equality()?;

        if matches!(self.current_kind(), TokenKind::Equal) {
            let equals_span = self.current_span();
            self.advance();
            let value = self.parse_assignment()?;

            return match expr.kind {
                ExprKind::Variable(name) => {
                    let span = span_over(expr.span, value.span);
                    Ok(Expr::new(
                        ExprKind::Assign {
                            name,
                            value: Box::new(value),
                        },
                        span,
                    ))
                }
                _ => Err(ParseError::new(
                    "Invalid assignment target",
                    equals_span,
                    "=",
                    false,
                )),
            };
        }

        Ok(expr)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::parse_comparison, &[TokenKind::BangEqual, TokenKind::EqualEqual])
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(
            Self::parse_term,
            &[
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
            ],
        )
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::parse_factor, &[TokenKind::Plus, TokenKind::Minus])
    }

    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::parse_unary, &[TokenKind::Slash, TokenKind::Star])
    }

    /// Parses one left-associative binary precedence level: a `next` operand
    /// followed by zero or more `(operator next)` pairs, where `operator` is
    /// one of `kinds`.
    fn parse_binary_level(
        &mut self,
        next: fn(&mut Self) -> Result<Expr, ParseError>,
        kinds: &[TokenKind],
    ) -> Result<Expr, ParseError> {
        let mut left = next(self)?;

        while kinds.contains(self.current_kind()) {
            let op = binary_op(self.current_kind()).expect("kinds only contains binary operators");
            self.advance();
            let right = next(self)?;
            let span = span_over(left.span, right.span);
            left = Expr::new(
                ExprKind::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.current_kind() {
            TokenKind::Bang => UnaryOperator::Not,
            TokenKind::Minus => UnaryOperator::Negate,
            _ => return self.parse_primary(),
        };
        let start_span = self.current_span();
        self.advance();
        let operand = self.parse_unary()?;
        let span = span_over(start_span, operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let span = self.current_span();

        match self.current_kind().clone() {
            TokenKind::False => {
                self.advance();
                Ok(Expr::new(ExprKind::Literal(Value::Bool(false)), span))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::new(ExprKind::Literal(Value::Bool(true)), span))
            }
            TokenKind::Nil => {
                self.advance();
                Ok(Expr::new(ExprKind::Literal(Value::Nil), span))
            }
            TokenKind::Number(value) => {
                self.advance();
                Ok(Expr::new(ExprKind::Literal(Value::Number(value)), span))
            }
            TokenKind::StringLiteral(value) => {
                self.advance();
                Ok(Expr::new(ExprKind::Literal(Value::String(value)), span))
            }
            TokenKind::Identifier => {
                let name = self.current().lexeme.clone();
                self.advance();
                Ok(Expr::new(ExprKind::Variable(name), span))
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expression()?;
                let close_span = self.current_span();
                self.consume(&TokenKind::RightParen, "Expect ')' after expression")?;
                let span = span_over(span, close_span);
                Ok(Expr::new(ExprKind::Grouping(Box::new(inner)), span))
            }
            _ => Err(self.error_at_current("Expect expression")),
        }
    }
}
