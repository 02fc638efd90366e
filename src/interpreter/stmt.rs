//! Statement execution.

use super::Interpreter;
use super::error::RuntimeError;
use crate::ast::{Stmt, StmtKind};

impl Interpreter {
    /// Executes a single statement, writing `print` output to `self.out`.
    pub(super) fn exec_stmt(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        match &stmt.kind {
            StmtKind::Expr(expr) => {
                self.eval_expr(expr)?;
                Ok(())
            }
            StmtKind::Print(expr) => {
                let value = self.eval_expr(expr)?;
                self.out.push_str(&value.to_string());
                self.out.push('\n');
                Ok(())
            }
            StmtKind::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.eval_expr(expr)?,
                    None => crate::ast::Value::Nil,
                };
                self.environment.define(name, value);
                Ok(())
            }
            StmtKind::Block(statements) => self.exec_block(statements),
        }
    }

    /// Executes a block in a fresh nested scope, restoring the exact set
    /// of enclosing scopes on exit (including on error propagation).
    fn exec_block(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        self.environment.push_scope();
        let result = statements.iter().try_for_each(|stmt| self.exec_stmt(stmt));
        self.environment.pop_scope();
        result
    }
}
