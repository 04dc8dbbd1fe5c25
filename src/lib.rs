//! # confex
//!
//! confex compiles a small declarative configuration language into a plain
//! key/value document. Sources declare constants, nested structs, strings,
//! numbers and postfix arithmetic expressions over the constants; the result
//! is a tree of numbers, strings and objects ready to be written as JSON.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    compiler::{evaluator::evaluate, lexer::tokenize, parser::parse, value::Document},
    error::Error,
};

/// Defines the structure of parsed sources.
///
/// This module declares the `Ast`, `ConstDeclaration` and `Node` types that
/// represent a source text as a tree. The AST is built by the parser and only
/// read by the evaluator.
///
/// # Responsibilities
/// - Keeps constant declarations in source order, apart from the root struct.
/// - Models every value form as one variant of a closed enum.
/// - Preserves field order of structs.
pub mod ast;
/// Runs the three pipeline stages.
///
/// This module ties together lexing, parsing, evaluation and the value types
/// the pipeline produces. Each stage runs to completion or fails before the
/// next one starts.
///
/// # Responsibilities
/// - Tokenizes source text.
/// - Parses tokens into an `Ast`.
/// - Evaluates the `Ast` into a `Document`.
pub mod compiler;
/// Provides error types for every stage.
///
/// This module defines one error family per stage plus an umbrella type used
/// by [`compile`] and the command line tool. Errors carry the offending text
/// and, where the stage knows it, the byte offset in the source.
///
/// # Responsibilities
/// - Defines `LexError`, `ParseError` and `EvalError`.
/// - Wraps them (and I/O failures) in `Error` with an exit code per family.
pub mod error;
/// General helpers that do not belong to a single stage.
pub mod util;

/// Compiles source text into a document.
///
/// This runs the lexer, the parser and the evaluator in sequence. The first
/// error aborts compilation; there is no partial output.
///
/// # Errors
/// Returns the lexing, parsing or evaluation error that stopped the pipeline.
///
/// # Examples
/// ```
/// use confex::{
///     compile,
///     compiler::value::Value,
///     error::{Error, EvalError},
/// };
///
/// let source = r#"
///     <# game character #>
///     BASE := 20;
///     struct {
///         Mana = .[ BASE 10 * ].;
///         Name = "Mage";
///     }
/// "#;
/// let document = compile(source).unwrap();
/// assert_eq!(document["Mana"], Value::Number(200.0));
///
/// // `B` is not declared yet when `A` is resolved.
/// assert!(matches!(compile("A := .[ B 1 + ].; B := 2; struct {}"),
///                  Err(Error::Eval(EvalError::UndefinedConstant { .. }))));
/// ```
pub fn compile(source: &str) -> Result<Document, Error> {
    let tokens = tokenize(source)?;
    let ast = parse(&tokens)?;
    Ok(evaluate(&ast)?)
}
