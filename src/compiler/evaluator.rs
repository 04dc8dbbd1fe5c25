/// Core evaluation logic and the constant environment.
///
/// Resolves constant declarations in order, then walks the root struct and
/// turns every node into a value.
pub mod core;

/// Postfix expression evaluation.
///
/// Runs the operand stack machine behind `.[ ... ].` expressions, including
/// operator lookup and the arithmetic domain checks.
pub mod expression;

pub use self::core::{Context, EvalResult, evaluate};
