use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Ast, ConstDeclaration},
    compiler::{
        lexer::{Token, TokenKind},
        parser::{
            utils::expect,
            value::{parse_struct, parse_value},
        },
    },
    error::ParseError,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// This is the entry point of the parser. A program is any number of constant
/// declarations followed by exactly one root struct, and nothing after it.
///
/// Grammar: `program := const_decl* struct`
///
/// # Parameters
/// - `tokens`: The token sequence produced by the lexer.
///
/// # Returns
/// The constant declarations in source order and the root struct's fields.
///
/// # Errors
/// - `MissingRootStruct` if the declarations are not followed by `struct`.
/// - `TrailingContent` if any token follows the root struct.
/// - Propagates any error from declaration or struct parsing.
///
/// # Example
/// ```
/// use confex::{
///     ast::Node,
///     compiler::{lexer::tokenize, parser::parse},
/// };
///
/// let tokens = tokenize("MAX := 10; struct { Limit = MAX }").unwrap();
/// let ast = parse(&tokens).unwrap();
///
/// assert_eq!(ast.consts[0].name, "MAX");
/// assert_eq!(ast.root["Limit"], Node::Identifier("MAX".to_string()));
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Ast> {
    let mut iter = tokens.iter().peekable();

    let consts = parse_const_declarations(&mut iter)?;

    let root = match iter.peek() {
        Some(Token { kind: TokenKind::StructKeyword,
                     .. }) => parse_struct(&mut iter)?,
        Some(token) => {
            return Err(ParseError::MissingRootStruct { found: Some((token.kind,
                                                                    token.position)) });
        },
        None => return Err(ParseError::MissingRootStruct { found: None }),
    };

    if let Some(token) = iter.next() {
        return Err(ParseError::TrailingContent { kind:     token.kind,
                                                 text:     token.text.clone(),
                                                 position: token.position, });
    }

    debug!(consts = consts.len(), fields = root.len(), "parsed program");
    Ok(Ast { consts, root })
}

/// Parses the leading constant declarations.
///
/// A leading identifier starts a declaration only if the token right after it
/// is `:=`. Otherwise no tokens are consumed and the list ends there.
fn parse_const_declarations<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<ConstDeclaration>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut consts = Vec::new();

    while let Some(Token { kind: TokenKind::Identifier,
                           .. }) = tokens.peek()
    {
        let mut lookahead = tokens.clone();
        lookahead.next();

        match lookahead.peek() {
            Some(Token { kind: TokenKind::ColonEquals,
                         .. }) => consts.push(parse_const_declaration(tokens)?),
            _ => break,
        }
    }

    Ok(consts)
}

/// Parses a single constant declaration.
///
/// Grammar: `const_decl := IDENTIFIER ":=" value ";"`
fn parse_const_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ConstDeclaration>
    where I: Iterator<Item = &'a Token> + Clone
{
    let name = expect(tokens, TokenKind::Identifier, "constant name")?;
    expect(tokens, TokenKind::ColonEquals, "':='")?;
    let value = parse_value(tokens)?;
    expect(tokens, TokenKind::Semicolon, "';'")?;

    Ok(ConstDeclaration { name: name.text.clone(),
                          value })
}
