//! Runtime error types produced while evaluating a Lox program.

/// The kind of runtime error, for structured matching independent of the
/// message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// A unary or binary operator received an operand of the wrong type.
    TypeMismatch,
    /// A variable was referenced, or assigned to, before it was declared
    /// in any enclosing scope.
    UndefinedVariable,
}

/// An error that occurred while evaluating an expression or executing a
/// statement.
///
/// Unlike [`crate::parser::ParseError`], `RuntimeError` carries no source
/// span: spec.md's runtime messages (`Operand must be a number.`,
/// `Undefined variable 'x'.`) have no location prefix (see §4.4, §8
/// scenario 5), so there is nothing to attach.
#[derive(Debug)]
pub struct RuntimeError {
    message: String,
    kind: RuntimeErrorKind,
}

impl RuntimeError {
    pub(super) fn new(kind: RuntimeErrorKind, message: impl Into<String>) -> Self {
        RuntimeError {
            message: message.into(),
            kind,
        }
    }

    pub(super) fn operands_must_be_numbers() -> Self {
        RuntimeError::new(RuntimeErrorKind::TypeMismatch, "Operands must be numbers.")
    }

    pub(super) fn operands_must_be_numbers_or_strings() -> Self {
        RuntimeError::new(
            RuntimeErrorKind::TypeMismatch,
            "Operands must be two numbers or two strings.",
        )
    }

    pub(super) fn operand_must_be_a_number() -> Self {
        RuntimeError::new(RuntimeErrorKind::TypeMismatch, "Operand must be a number.")
    }

    pub(super) fn undefined_variable(name: &str) -> Self {
        RuntimeError::new(
            RuntimeErrorKind::UndefinedVariable,
            format!("Undefined variable '{}'.", name),
        )
    }

    /// The human-readable message, exactly as it appears on stderr.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The structured error kind, for callers that want to match on it
    /// rather than the message text.
    pub fn kind(&self) -> RuntimeErrorKind {
        self.kind
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RuntimeError {}
