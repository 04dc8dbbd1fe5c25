use logos::Logos;
use tracing::{debug, trace};

use crate::error::LexError;

/// Opens a block comment.
pub const COMMENT_OPEN: &str = "<#";
/// Closes a block comment.
pub const COMMENT_CLOSE: &str = "#>";
/// Opens an embedded constant expression.
pub const EXPR_OPEN: &str = ".[";
/// Closes an embedded constant expression.
pub const EXPR_CLOSE: &str = "].";

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// The kind of a lexical token.
///
/// The fixed-width patterns are matched by `logos`. The three expression
/// kinds carry no pattern: they are produced by the expression scan in
/// [`tokenize`], never by the pattern table.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Double-quoted string literal such as `"Hello \"World\""`. Only `\"` and
    /// `\\` are escapes.
    #[regex(r#""([^"\\]|\\.)*""#)]
    String,
    /// `struct`
    #[token("struct")]
    StructKeyword,
    /// Names such as `Port` or `_Base`; they must start with an uppercase
    /// letter or an underscore.
    #[regex(r"[_A-Z][_a-zA-Z0-9]*")]
    Identifier,
    /// Numeric literal tokens, such as `42`, `-7`, `3.14`, `5.` or `2.1e-10`.
    #[regex(r"[+-]?[0-9]+\.?[0-9]*([eE][+-]?[0-9]+)?")]
    Number,
    /// `:=`
    #[token(":=")]
    ColonEquals,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `.[`
    StartExpr,
    /// The raw, trimmed body between `.[` and `].`.
    ExprContent,
    /// `].`
    EndExpr,
}

/// A token together with its source text and byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// The matched source text. String tokens keep their quotes and escapes.
    pub text:     String,
    /// Byte offset of the first character of the token.
    pub position: usize,
}

impl Token {
    /// Creates a token from its kind, text and offset.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self { kind,
               text: text.into(),
               position }
    }
}

/// Splits source text into tokens.
///
/// Scanning runs left to right. At every position whitespace is skipped, then
/// a `<#` comment is skipped up to its `#>`, then a `.[` expression is cut out
/// up to its `].`, and only otherwise the fixed token patterns are tried.
///
/// # Errors
/// - `UnterminatedComment` if a `<#` has no closing `#>`.
/// - `UnterminatedExpression` if a `.[` has no closing `].`.
/// - `UnexpectedCharacter` if no pattern matches at some position.
///
/// # Example
/// ```
/// use confex::compiler::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("<# port #> Port := 8080;").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::ColonEquals,
///             TokenKind::Number,
///             TokenKind::Semicolon]);
/// assert_eq!(tokens[0].position, 11);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < source.len() {
        let rest = &source[pos..];

        let trimmed = rest.trim_start_matches(is_whitespace);
        if trimmed.len() != rest.len() {
            pos += rest.len() - trimmed.len();
            continue;
        }

        if rest.starts_with(COMMENT_OPEN) {
            pos = skip_comment(source, pos)?;
            continue;
        }

        if rest.starts_with(EXPR_OPEN) {
            pos = extract_expression(source, pos, &mut tokens)?;
            continue;
        }

        let mut lexer = TokenKind::lexer(rest);
        if let Some(Ok(kind)) = lexer.next()
           && !(kind == TokenKind::StructKeyword && continues_word(lexer.remainder()))
        {
            trace!(?kind, text = lexer.slice(), position = pos, "token");
            tokens.push(Token::new(kind, lexer.slice(), pos));
            pos += lexer.span().end;
        } else {
            return Err(LexError::UnexpectedCharacter { character: rest.chars()
                                                                      .next()
                                                                      .unwrap_or_default(),
                                                       position:  pos, });
        }
    }

    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// `struct` is a keyword only when no identifier character follows it, so
/// `structB` is rejected rather than split.
fn continues_word(remainder: &str) -> bool {
    remainder.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_')
}

const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Skips a block comment starting at `start` and returns the offset just past
/// its closing marker. Comments do not nest.
fn skip_comment(source: &str, start: usize) -> LexResult<usize> {
    let body = start + COMMENT_OPEN.len();

    source[body..].find(COMMENT_CLOSE)
                  .map(|offset| body + offset + COMMENT_CLOSE.len())
                  .ok_or(LexError::UnterminatedComment { position: start })
}

/// Cuts out the expression starting at `start`, pushes its opener, content and
/// closer tokens, and returns the offset just past the closer.
///
/// The body is not tokenized here; the parser splits it later.
fn extract_expression(source: &str, start: usize, tokens: &mut Vec<Token>) -> LexResult<usize> {
    let content_start = start + EXPR_OPEN.len();
    let end = source[content_start..].find(EXPR_CLOSE)
                                     .map(|offset| content_start + offset)
                                     .ok_or(LexError::UnterminatedExpression { position: start })?;

    let content = source[content_start..end].trim();
    trace!(content, position = start, "expression");

    tokens.push(Token::new(TokenKind::StartExpr, EXPR_OPEN, start));
    tokens.push(Token::new(TokenKind::ExprContent, content, content_start));
    tokens.push(Token::new(TokenKind::EndExpr, EXPR_CLOSE, end));

    Ok(end + EXPR_CLOSE.len())
}
