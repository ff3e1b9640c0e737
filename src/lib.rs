//! # gaby
//!
//! gaby is an interpreter for the Gaby programming language, a small
//! dynamically-typed scripting language with Spanish keywords. Source text is
//! tokenized, parsed into an abstract syntax tree, and executed by walking
//! that tree against a chain of lexical scopes, with first-class functions,
//! classes with single inheritance, and mixed integer/decimal arithmetic.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::{ParseError, ParseErrors},
    interpreter::{
        evaluator::core::Context,
        lexer::Lexer,
        parser::core::Parser,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// the syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node types for all language constructs.
/// - Attaches the originating token to every node for error reporting.
/// - Pretty-prints nodes for debugging and function display.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. Parse errors carry line and column; runtime errors
/// carry the Spanish prose the driver shows to the user.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Renders every error as its user-facing message.
/// - Integrates with the standard error traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the builtin table to provide a complete runtime for
/// Gaby programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Provides entry points for interpreting source text.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses source text into a program.
///
/// The parser never aborts; it accumulates diagnostics instead. When any
/// were recorded the program must not be evaluated, so this function returns
/// them in place of the tree.
///
/// # Errors
/// Returns every syntax problem found, each rendered as
/// `línea L, columna C: …`.
///
/// # Examples
/// ```
/// let program = gaby::parse("guarda x = 2 + 3").unwrap();
/// assert_eq!(program.statements.len(), 1);
///
/// assert!(gaby::parse("guarda = 2").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, Vec<ParseError>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if parser.errors().is_empty() {
        Ok(program)
    } else {
        Err(parser.into_errors())
    }
}

/// Parses and evaluates source text in the given context.
///
/// Returns the value of the program's last statement, so callers like the
/// REPL can print it. The context keeps its bindings between calls.
///
/// # Errors
/// Returns the collected parse errors (as one [`ParseErrors`] value) or the
/// first runtime error.
///
/// # Examples
/// ```
/// use gaby::interpreter::{evaluator::core::Context, value::core::Value};
///
/// let mut context = Context::new();
/// let result = gaby::run_source("guarda x = 2 + 3 * 4\nx", &mut context).unwrap();
/// assert_eq!(result, Value::Integer(14));
///
/// // 'z' is not defined.
/// assert!(gaby::run_source("z + 1", &mut context).is_err());
/// ```
pub fn run_source(source: &str,
                  context: &mut Context)
                  -> Result<Value, Box<dyn std::error::Error>> {
    let program = parse(source).map_err(ParseErrors)?;
    context.eval_program(&program).map_err(Into::into)
}
