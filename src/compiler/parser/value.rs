use std::iter::Peekable;

use crate::{
    ast::{Fields, Node},
    compiler::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            expression::parse_const_expression,
            utils::{expect, unexpected},
        },
    },
    error::ParseError,
};

/// Parses a value.
///
/// The kind of the current token decides what is parsed:
/// - `NUMBER`: a numeric literal, always stored as a double.
/// - `STRING`: a string literal with quotes stripped and escapes applied.
/// - `IDENTIFIER`: an unresolved constant reference.
/// - `struct`: a nested struct.
/// - `.[`: a constant expression.
///
/// Grammar:
/// ```text
///     value := NUMBER | STRING | IDENTIFIER | struct | const_expr
/// ```
///
/// # Errors
/// - `UnexpectedToken` for any other token kind.
/// - `UnexpectedEndOfInput` if no token is left.
pub fn parse_value<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(ParseError::UnexpectedEndOfInput { expected: "a value".to_string() });
    };

    match token.kind {
        TokenKind::Number => {
            tokens.next();
            parse_number(token).map(Node::Number)
        },
        TokenKind::String => {
            tokens.next();
            Ok(Node::String(unescape(strip_quotes(&token.text))))
        },
        TokenKind::Identifier => {
            tokens.next();
            Ok(Node::Identifier(token.text.clone()))
        },
        TokenKind::StructKeyword => parse_struct(tokens).map(Node::Struct),
        TokenKind::StartExpr => parse_const_expression(tokens),
        _ => Err(unexpected("a value", token)),
    }
}

/// Parses a struct of the form `struct { Name = value, ... }`.
///
/// Each field may be followed by a single `,` or `;`. An empty struct is
/// accepted. When a field name repeats, the later value replaces the earlier
/// one but the field keeps its first position.
///
/// Grammar:
/// ```text
///     struct := "struct" "{" (field ("," | ";")?)* "}"
///     field  := IDENTIFIER "=" value
/// ```
///
/// # Errors
/// Returns a `ParseError` if:
/// - `struct` or `{` is missing,
/// - a field name or `=` is missing,
/// - a value fails to parse,
/// - the input ends before `}`.
pub fn parse_struct<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Fields>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::StructKeyword, "'struct'")?;
    expect(tokens, TokenKind::LBrace, "'{'")?;

    let mut fields = Fields::new();

    loop {
        match tokens.peek() {
            Some(Token { kind: TokenKind::RBrace,
                         .. }) => {
                tokens.next();
                break;
            },
            Some(_) => {
                let name = expect(tokens, TokenKind::Identifier, "field name or '}'")?;
                expect(tokens, TokenKind::Equals, "'='")?;
                let value = parse_value(tokens)?;

                fields.insert(name.text.clone(), value);

                if let Some(Token { kind: TokenKind::Comma | TokenKind::Semicolon,
                                    .. }) = tokens.peek()
                {
                    tokens.next();
                }
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: "'}'".to_string() });
            },
        }
    }

    Ok(fields)
}

fn parse_number(token: &Token) -> ParseResult<f64> {
    token.text
         .parse()
         .map_err(|_| ParseError::InvalidNumber { text:     token.text.clone(),
                                                  position: token.position, })
}

fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(text)
}

/// Applies the two string escapes, `\"` and `\\`.
///
/// Any other backslash sequence is kept as written.
///
/// # Example
/// ```
/// use confex::compiler::parser::value::unescape;
///
/// assert_eq!(unescape(r#"Hello \"World\""#), r#"Hello "World""#);
/// assert_eq!(unescape(r"C:\\temp\n"), r"C:\temp\n");
/// ```
#[must_use]
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(escaped @ ('"' | '\\')) => out.push(escaped),
            Some(other) => {
                out.push('\\');
                out.push(other);
            },
            None => out.push('\\'),
        }
    }

    out
}
