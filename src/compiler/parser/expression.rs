use std::iter::Peekable;

use crate::{
    ast::Node,
    compiler::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, utils::expect},
    },
};

/// Characters that end an operand and are emitted as tokens of their own.
pub const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '(', ')'];

/// Parses a constant expression `.[ ... ].`.
///
/// The body is split with [`split_expression`] and stored unevaluated.
///
/// # Errors
/// Returns a `ParseError` if the opener, body or closer token is missing.
pub fn parse_const_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::StartExpr, "'.['")?;
    let content = expect(tokens, TokenKind::ExprContent, "expression body")?;
    expect(tokens, TokenKind::EndExpr, "'].'")?;

    Ok(Node::ConstExpression(split_expression(&content.text)))
}

/// Splits an expression body into postfix tokens.
///
/// Whitespace separates tokens and is dropped. Each of `+ - * / ( )` ends the
/// current token and becomes a token itself. Every other run of characters is
/// one token, such as a constant name, a number or the words `mod` and `sqrt`.
///
/// # Example
/// ```
/// use confex::compiler::parser::expression::split_expression;
///
/// assert_eq!(split_expression("BASE 10*  2 sqrt"),
///            ["BASE", "10", "*", "2", "sqrt"]);
/// assert_eq!(split_expression("1.5e-3"), ["1.5e", "-", "3"]);
/// ```
#[must_use]
pub fn split_expression(content: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();

    for c in content.chars() {
        let is_operator = OPERATOR_CHARS.contains(&c);

        if c.is_whitespace() || is_operator {
            if !current.is_empty() {
                parts.push(std::mem::take(&mut current));
            }
            if is_operator {
                parts.push(c.to_string());
            }
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        parts.push(current);
    }

    parts
}
