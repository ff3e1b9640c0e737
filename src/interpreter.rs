/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST against a chain of scopes, evaluates
/// expressions and statements, dispatches calls and method lookups, and
/// produces runtime values. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, driving control flow and closures.
/// - Manages variable scopes, classes, instances and the builtin table.
/// - Reports runtime errors such as division by zero or unknown identifiers.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a meaningful language element such as a number, an
/// identifier, an operator, a delimiter, or one of the Spanish keywords. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme and
///   source location.
/// - Handles numeric and string literals, both comment styles, and the
///   compound-assignment operators.
/// - Surfaces unknown bytes as `Illegal` tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of statements and
/// expressions, using Pratt-style operator-precedence parsing.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Accumulates syntax diagnostics with line and column instead of aborting.
/// - Covers functions, classes, collections, control flow and assignment.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all value variants used during execution (integers,
/// decimals, booleans, strings, arrays, hashes, functions, classes and
/// instances), the hash-key representation, and the scope arena the
/// evaluator resolves names against.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported variants.
/// - Implements truthiness, identity equality and display formatting.
/// - Provides the scope arena with handle-based environments.
pub mod value;
