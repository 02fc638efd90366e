//! The Lox tree-walking interpreter library.
//!
//! This library provides the core components of the interpreter: lexical
//! analysis, parsing into an abstract syntax tree, and direct tree-walking
//! evaluation.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`ast`] - Abstract Syntax Tree definitions and pretty-printing
//! - [`parser`] - Recursive descent parser
//! - [`interpreter`] - Tree-walking evaluator and lexically-scoped environment
//!
//! # Example
//!
//! ```
//! use lox::lexer::Lexer;
//! use lox::parser::Parser;
//! use lox::interpreter::Interpreter;
//!
//! let source = "print 1 + 2 * 3;";
//!
//! let (tokens, errors) = Lexer::new(source).scan_tokens();
//! assert!(errors.is_empty());
//!
//! let statements = Parser::new(tokens).parse_program().expect("parse error");
//!
//! let mut interpreter = Interpreter::new();
//! interpreter.run(&statements).expect("runtime error");
//! assert_eq!(interpreter.output(), "7\n");
//! ```

pub mod ast;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod token;
