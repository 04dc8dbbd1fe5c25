use std::iter::Peekable;

use crate::{
    compiler::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
    error::ParseError,
};

/// Consumes the next token and checks that it has the given kind.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `kind`: The required token kind.
/// - `expected`: Human-readable description used in the error message.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token has another kind,
/// - the input ends unexpectedly.
pub(in crate::compiler::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                 kind: TokenKind,
                                                 expected: &str)
                                                 -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == kind => Ok(token),
        Some(token) => Err(unexpected(expected, token)),
        None => Err(ParseError::UnexpectedEndOfInput { expected: expected.to_string() }),
    }
}

/// Builds an `UnexpectedToken` error for `token`.
pub(in crate::compiler::parser) fn unexpected(expected: &str, token: &Token) -> ParseError {
    ParseError::UnexpectedToken { expected: expected.to_string(),
                                  found:    token.kind,
                                  text:     token.text.clone(),
                                  position: token.position, }
}
