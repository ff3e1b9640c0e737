/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine: the runtime context with its scope
/// arena, statement and expression dispatch, control flow, assignment, and
/// sentinel propagation.
pub mod core;

/// Prefix operator evaluation logic.
///
/// Implements the two unary operations, logical NOT (`!`) and arithmetic
/// negation (`-`).
pub mod prefix;

/// Binary operator evaluation logic.
///
/// Handles all infix operations: integer, decimal and string tables, numeric
/// promotion, equality with its identity fallback, and the short-circuiting
/// `y`/`o` words.
pub mod infix;

/// Function evaluation.
///
/// Handles calls to user-defined functions (closure scopes, positional
/// binding, return unwrapping) and dispatch into the builtin table.
pub mod function;

/// Collection evaluation.
///
/// Builds hash literals and evaluates index accesses on arrays and hashes.
pub mod index;

/// Object evaluation.
///
/// Dot access and method binding, class literal evaluation, and `nuevo`
/// construction.
pub mod object;

/// The builtin function table.
///
/// Declares the table the evaluator consults when an identifier is bound in
/// no scope, along with the arity checks applied before a builtin runs.
pub mod builtin;
