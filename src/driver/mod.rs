//! Mode dispatch: `tokenize`/`parse`/`evaluate`/`run`, each wiring the
//! scanner, parser, and interpreter stages together and producing stdout
//! text plus an exit code — mirroring the grounding crate's
//! `driver::build`/`driver::run` shape, minus the compile-and-link
//! pipeline this spec has no use for.

use lox::ast::pretty::print_expr;
use lox::interpreter::Interpreter;
use lox::lexer::Lexer;
use lox::parser::Parser;
use lox::token::Token;

use crate::diagnostics;

/// Formats a single token the way `tokenize` mode prints it:
/// `KIND LEXEME LITERAL`, where `LITERAL` is `null` for tokens that carry
/// none.
fn token_line(token: &Token) -> String {
    format!("{} {} {}", token.kind, token.lexeme, token.literal_text())
}

/// `tokenize` mode: prints one line per token, always ending with the
/// trailing `EOF  null` line, then exits 65 if any lexical error occurred.
pub fn tokenize(source: &str) -> i32 {
    let (tokens, errors) = Lexer::new(source).scan_tokens();

    for token in &tokens {
        println!("{}", token_line(token));
    }

    if errors.is_empty() {
        0
    } else {
        diagnostics::report_lex_errors(&errors);
        65
    }
}

/// `parse` mode: prints the S-expression form of a single parsed
/// expression.
pub fn parse(source: &str) -> i32 {
    let (tokens, lex_errors) = Lexer::new(source).scan_tokens();
    if !lex_errors.is_empty() {
        diagnostics::report_lex_errors(&lex_errors);
        return 65;
    }

    match Parser::new(tokens).parse_expression() {
        Ok(expr) => {
            println!("{}", print_expr(&expr));
            0
        }
        Err(error) => {
            diagnostics::report_parse_error(&error);
            65
        }
    }
}

/// `evaluate` mode: prints the Lox representation of a single expression's
/// value.
pub fn evaluate(source: &str) -> i32 {
    let (tokens, lex_errors) = Lexer::new(source).scan_tokens();
    if !lex_errors.is_empty() {
        diagnostics::report_lex_errors(&lex_errors);
        return 65;
    }

    let expr = match Parser::new(tokens).parse_expression() {
        Ok(expr) => expr,
        Err(error) => {
            diagnostics::report_parse_error(&error);
            return 65;
        }
    };

    match Interpreter::new().evaluate(&expr) {
        Ok(value) => {
            println!("{}", value);
            0
        }
        Err(error) => {
            diagnostics::report_runtime_error(&error);
            70
        }
    }
}

/// `run` mode: executes a sequence of statements in order, printing
/// accumulated `print` output even when a runtime error cuts execution
/// short partway through.
pub fn run(source: &str) -> i32 {
    let (tokens, lex_errors) = Lexer::new(source).scan_tokens();
    if !lex_errors.is_empty() {
        diagnostics::report_lex_errors(&lex_errors);
        return 65;
    }

    let statements = match Parser::new(tokens).parse_program() {
        Ok(statements) => statements,
        Err(error) => {
            diagnostics::report_parse_error(&error);
            return 65;
        }
    };

    let mut interpreter = Interpreter::new();
    let result = interpreter.run(&statements);
    print!("{}", interpreter.output());

    match result {
        Ok(()) => 0,
        Err(error) => {
            diagnostics::report_runtime_error(&error);
            70
        }
    }
}
