//! Tree-walking evaluator for the Lox programming language.
//!
//! This module provides the [`Interpreter`] struct, which evaluates a
//! parsed [`crate::ast::Expr`] or executes a sequence of
//! [`crate::ast::Stmt`] against a lexically-scoped [`Environment`].
//!
//! # Overview
//!
//! This takes the structural place the grounding crate's `codegen` module
//! held (the stage that consumes the AST and "does something" with it),
//! generalized from "emit LLVM IR" to "produce a runtime [`crate::ast::Value`]".
//! The same expr/stmt file split and the same scope-stack idiom for
//! variable bindings are reused; the target is a bare [`crate::ast::Value`]
//! rather than an LLVM alloca.
//!
//! # Module Structure
//!
//! - [`environment`] - Lexically-scoped variable bindings
//! - [`error`] - Runtime error types
//! - `expr` - Expression evaluation
//! - `stmt` - Statement execution
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::ast`] - Defines the `Expr`/`Stmt`/`Value` types this module consumes
//! * [`crate::driver`] - Drives the interpreter for each CLI mode

mod environment;
mod error;
mod expr;
mod stmt;

#[cfg(test)]
mod tests;

pub use environment::Environment;
pub use error::{RuntimeError, RuntimeErrorKind};

use crate::ast::{Expr, Stmt, Value};

/// A tree-walking evaluator over the Lox AST.
///
/// `print` statement output is accumulated into an internal buffer rather
/// than written directly to stdout, so the driver can format or test it
/// without capturing process-wide output.
pub struct Interpreter {
    environment: Environment,
    out: String,
}

impl Interpreter {
    /// Creates a fresh interpreter with an empty global scope.
    pub fn new() -> Self {
        Interpreter {
            environment: Environment::new(),
            out: String::new(),
        }
    }

    /// Evaluates a single expression and returns its value.
    ///
    /// Evaluating a pure expression never mutates the environment beyond
    /// what the expression itself specifies (e.g. an `Assign` sub-expression
    /// still assigns); there is no hidden state.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        self.eval_expr(expr)
    }

    /// Executes a sequence of top-level statements in order, in the
    /// interpreter's global scope.
    pub fn run(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        statements.iter().try_for_each(|stmt| self.exec_stmt(stmt))
    }

    /// Returns the `print` output accumulated so far.
    pub fn output(&self) -> &str {
        &self.out
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}
