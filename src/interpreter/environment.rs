//! Lexically-scoped variable bindings for the interpreter.

use std::collections::HashMap;

use super::error::RuntimeError;
use crate::ast::Value;

/// A stack of scope frames mapping names to values.
///
/// Grounded on the same idiom the grounding crate's code generator uses
/// for its own variable scopes (`enter_variable_scope`/
/// `exit_variable_scope`/`define_variable_in_current_scope`/reverse-scope
/// lookup), generalized from an LLVM alloca binding to a bare [`Value`].
///
/// Lookup walks innermost (last) to outermost (first) frame; declaration
/// always inserts into the innermost frame, shadowing any outer binding of
/// the same name.
pub struct Environment {
    scopes: Vec<HashMap<String, Value>>,
}

impl Environment {
    /// Creates a new environment with a single (global) scope.
    pub fn new() -> Self {
        Environment {
            scopes: vec![HashMap::new()],
        }
    }

    /// Pushes a fresh, empty scope onto the stack.
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Pops the innermost scope.
    ///
    /// # Panics
    ///
    /// Panics if called with no scope to pop (the global scope is never
    /// popped by well-formed block execution).
    pub fn pop_scope(&mut self) {
        self.scopes
            .pop()
            .expect("pop_scope called with no scope on the stack");
    }

    /// Binds `name` to `value` in the innermost scope, overwriting any
    /// existing binding of the same name in that scope (redeclaration).
    pub fn define(&mut self, name: &str, value: Value) {
        self.scopes
            .last_mut()
            .expect("environment always has at least the global scope")
            .insert(name.to_string(), value);
    }

    /// Reads `name`, walking from the innermost scope outward.
    pub fn get(&self, name: &str) -> Result<Value, RuntimeError> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
            .cloned()
            .ok_or_else(|| RuntimeError::undefined_variable(name))
    }

    /// Mutates the innermost scope that already contains `name`.
    ///
    /// Returns an `Undefined variable` error if `name` is not declared in
    /// any scope; assignment never creates a new binding.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), RuntimeError> {
        for scope in self.scopes.iter_mut().rev() {
            if scope.contains_key(name) {
                scope.insert(name.to_string(), value);
                return Ok(());
            }
        }
        Err(RuntimeError::undefined_variable(name))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}
