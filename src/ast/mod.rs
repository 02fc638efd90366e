//! Abstract Syntax Tree definitions for the Lox programming language.
//!
//! This module defines the data structures that represent parsed Lox
//! programs. The AST is produced by the [`crate::parser`] and consumed by
//! the [`crate::interpreter`].
//!
//! # Structure
//!
//! - [`Expr`] — expressions (literals, grouping, unary/binary operators,
//!   variable references, assignment)
//! - [`Stmt`] — statements (expression statements, `print`, `var`
//!   declarations, blocks)
//! - [`Value`] — the dynamically-typed runtime values expressions evaluate to
//!
//! Each AST node includes source location information
//! ([`Span`](crate::token::Span)) for error reporting.
//!
//! # Module Structure
//!
//! - [`expr`] - Expression nodes and kinds
//! - [`stmt`] - Statement nodes and kinds
//! - [`value`] - Runtime value representation
//! - [`pretty`] - S-expression pretty-printer used by `parse` mode
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::interpreter`] - Evaluates the AST

mod expr;
mod stmt;
mod value;

pub mod pretty;

#[cfg(test)]
mod tests;

pub use expr::{BinaryOperator, Expr, ExprKind, UnaryOperator};
pub use stmt::{Stmt, StmtKind};
pub use value::Value;
