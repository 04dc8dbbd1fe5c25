/// Program-level parsing.
///
/// Entry point of the parser: constant declarations, the root struct and the
/// checks around them.
pub mod core;

/// Value parsing.
///
/// Handles everything that may appear right of `:=` or `=`: numbers, strings,
/// constant references, nested structs and expressions.
pub mod value;

/// Constant-expression parsing.
///
/// Consumes the `.[ ... ].` token triple and splits its body into postfix
/// tokens for the evaluator.
pub mod expression;

/// Shared helpers for consuming expected tokens.
pub mod utils;

pub use self::core::{ParseResult, parse};
