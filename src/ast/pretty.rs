//! S-expression pretty-printing for `parse` mode.
//!
//! This is deliberately distinct from [`super::Value`]'s `Display`: the
//! pretty-printer always shows a trailing `.0` on integral number literals
//! (`1.0`, not `1`), matching the textbook Lox AST printer, while runtime
//! value printing (`print` statements, `evaluate` mode) never does.

use super::expr::{Expr, ExprKind};
use super::value::Value;
use crate::token::format_number_literal;

/// Renders an expression as a fully-parenthesized S-expression.
pub fn print_expr(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Literal(value) => print_literal(value),
        ExprKind::Grouping(inner) => parenthesize("group", &[inner]),
        ExprKind::Unary { op, operand } => parenthesize(unary_lexeme(*op), &[operand]),
        ExprKind::Binary { left, op, right } => {
            parenthesize(binary_lexeme(*op), &[left, right])
        }
        ExprKind::Variable(name) => name.clone(),
        ExprKind::Assign { name, value } => {
            format!("(= {} {})", name, print_expr(value))
        }
    }
}

fn print_literal(value: &Value) -> String {
    match value {
        Value::Nil => "nil".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number_literal(*n),
        Value::String(s) => s.clone(),
    }
}

fn unary_lexeme(op: super::expr::UnaryOperator) -> &'static str {
    use super::expr::UnaryOperator::*;
    match op {
        Negate => "-",
        Not => "!",
    }
}

fn binary_lexeme(op: super::expr::BinaryOperator) -> &'static str {
    use super::expr::BinaryOperator::*;
    match op {
        Add => "+",
        Subtract => "-",
        Multiply => "*",
        Divide => "/",
        Less => "<",
        LessEqual => "<=",
        Greater => ">",
        GreaterEqual => ">=",
        Equal => "==",
        NotEqual => "!=",
    }
}

fn parenthesize(name: &str, exprs: &[&Expr]) -> String {
    let mut out = String::from("(");
    out.push_str(name);
    for expr in exprs {
        out.push(' ');
        out.push_str(&print_expr(expr));
    }
    out.push(')');
    out
}
