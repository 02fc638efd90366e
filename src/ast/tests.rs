//! Unit tests for AST nodes and the pretty-printer.

use super::*;
use crate::token::Span;

fn dummy_span() -> Span {
    Span::new(0, 0, 1, 1)
}

fn lit(value: Value) -> Expr {
    Expr::new(ExprKind::Literal(value), dummy_span())
}

#[test]
fn test_expr_literal_number() {
    let expr = lit(Value::Number(42.0));
    assert!(matches!(expr.kind, ExprKind::Literal(Value::Number(n)) if n == 42.0));
}

#[test]
fn test_expr_variable() {
    let expr = Expr::new(ExprKind::Variable("x".to_string()), dummy_span());
    assert!(matches!(expr.kind, ExprKind::Variable(ref s) if s == "x"));
}

#[test]
fn test_expr_assign() {
    let expr = Expr::new(
        ExprKind::Assign {
            name: "x".to_string(),
            value: Box::new(lit(Value::Number(1.0))),
        },
        dummy_span(),
    );
    match expr.kind {
        ExprKind::Assign { name, value } => {
            assert_eq!(name, "x");
            assert!(matches!(value.kind, ExprKind::Literal(Value::Number(n)) if n == 1.0));
        }
        _ => panic!("expected Assign"),
    }
}

#[test]
fn test_stmt_var_without_initializer() {
    let stmt = Stmt::new(
        StmtKind::Var {
            name: "x".to_string(),
            initializer: None,
        },
        dummy_span(),
    );
    match stmt.kind {
        StmtKind::Var { name, initializer } => {
            assert_eq!(name, "x");
            assert!(initializer.is_none());
        }
        _ => panic!("expected Var"),
    }
}

#[test]
fn test_stmt_block() {
    let stmt = Stmt::new(
        StmtKind::Block(vec![Stmt::new(StmtKind::Expr(lit(Value::Nil)), dummy_span())]),
        dummy_span(),
    );
    match stmt.kind {
        StmtKind::Block(stmts) => assert_eq!(stmts.len(), 1),
        _ => panic!("expected Block"),
    }
}

#[test]
fn test_value_truthiness() {
    assert!(!Value::Nil.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(Value::Number(0.0).is_truthy());
    assert!(Value::String(String::new()).is_truthy());
}

#[test]
fn test_value_display_no_trailing_point_zero() {
    assert_eq!(Value::Number(42.0).to_string(), "42");
    assert_eq!(Value::Number(1.5).to_string(), "1.5");
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(Value::Bool(true).to_string(), "true");
}

#[test]
fn test_pretty_print_literal_has_trailing_point_zero() {
    assert_eq!(pretty::print_expr(&lit(Value::Number(42.0))), "42.0");
}

#[test]
fn test_pretty_print_binary_expr() {
    let expr = Expr::new(
        ExprKind::Binary {
            left: Box::new(lit(Value::Number(1.0))),
            op: BinaryOperator::Add,
            right: Box::new(lit(Value::Number(2.0))),
        },
        dummy_span(),
    );
    assert_eq!(pretty::print_expr(&expr), "(+ 1.0 2.0)");
}

#[test]
fn test_pretty_print_grouping() {
    let expr = Expr::new(
        ExprKind::Grouping(Box::new(lit(Value::Number(3.0)))),
        dummy_span(),
    );
    assert_eq!(pretty::print_expr(&expr), "(group 3.0)");
}

#[test]
fn test_pretty_print_unary_negate() {
    let expr = Expr::new(
        ExprKind::Unary {
            op: UnaryOperator::Negate,
            operand: Box::new(lit(Value::Number(5.0))),
        },
        dummy_span(),
    );
    assert_eq!(pretty::print_expr(&expr), "(- 5.0)");
}

#[test]
fn test_pretty_print_nested_expression() {
    // (1 + 2) * 3
    let expr = Expr::new(
        ExprKind::Binary {
            left: Box::new(Expr::new(
                ExprKind::Grouping(Box::new(Expr::new(
                    ExprKind::Binary {
                        left: Box::new(lit(Value::Number(1.0))),
                        op: BinaryOperator::Add,
                        right: Box::new(lit(Value::Number(2.0))),
                    },
                    dummy_span(),
                ))),
                dummy_span(),
            )),
            op: BinaryOperator::Multiply,
            right: Box::new(lit(Value::Number(3.0))),
        },
        dummy_span(),
    );
    assert_eq!(pretty::print_expr(&expr), "(* (group (+ 1.0 2.0)) 3.0)");
}

#[test]
fn test_pretty_print_string_literal_has_no_quotes() {
    assert_eq!(
        pretty::print_expr(&lit(Value::String("hello".to_string()))),
        "hello"
    );
}
