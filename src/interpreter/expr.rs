//! Expression evaluation.

use super::Interpreter;
use super::error::RuntimeError;
use crate::ast::{BinaryOperator, Expr, ExprKind, UnaryOperator, Value};

impl Interpreter {
    /// Evaluates an expression to a runtime [`Value`].
    pub(super) fn eval_expr(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match &expr.kind {
            ExprKind::Literal(value) => Ok(value.clone()),
            ExprKind::Grouping(inner) => self.eval_expr(inner),
            ExprKind::Unary { op, operand } => self.eval_unary(*op, operand),
            ExprKind::Binary { left, op, right } => self.eval_binary(*op, left, right),
            ExprKind::Variable(name) => self.environment.get(name),
            ExprKind::Assign { name, value } => {
                let value = self.eval_expr(value)?;
                self.environment.assign(name, value.clone())?;
                Ok(value)
            }
        }
    }

    fn eval_unary(&mut self, op: UnaryOperator, operand: &Expr) -> Result<Value, RuntimeError> {
        let value = self.eval_expr(operand)?;
        match op {
            UnaryOperator::Negate => match value {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::operand_must_be_a_number()),
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }

    /// Evaluates a binary expression, left operand first (source order).
    fn eval_binary(
        &mut self,
        op: BinaryOperator,
        left: &Expr,
        right: &Expr,
    ) -> Result<Value, RuntimeError> {
        let left = self.eval_expr(left)?;
        let right = self.eval_expr(right)?;

        use BinaryOperator::*;
        match op {
            Equal => Ok(Value::Bool(values_equal(&left, &right))),
            NotEqual => Ok(Value::Bool(!values_equal(&left, &right))),
            Add => match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::String(a), Value::String(b)) => Ok(Value::String(a + &b)),
                _ => Err(RuntimeError::operands_must_be_numbers_or_strings()),
            },
            Subtract => numeric_binary(left, right, |a, b| Value::Number(a - b)),
            Multiply => numeric_binary(left, right, |a, b| Value::Number(a * b)),
            Divide => numeric_binary(left, right, |a, b| Value::Number(a / b)),
            Less => numeric_binary(left, right, |a, b| Value::Bool(a < b)),
            LessEqual => numeric_binary(left, right, |a, b| Value::Bool(a <= b)),
            Greater => numeric_binary(left, right, |a, b| Value::Bool(a > b)),
            GreaterEqual => numeric_binary(left, right, |a, b| Value::Bool(a >= b)),
        }
    }
}

/// Lox equality: values of different runtime types are never equal; `nil`
/// equals only `nil`.
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Nil, Value::Nil) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}

fn numeric_binary(
    left: Value,
    right: Value,
    f: impl FnOnce(f64, f64) -> Value,
) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(f(a, b)),
        _ => Err(RuntimeError::operands_must_be_numbers()),
    }
}
