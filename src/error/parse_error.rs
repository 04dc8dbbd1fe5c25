use crate::compiler::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building the syntax tree.
pub enum ParseError {
    /// Found a token of the wrong kind.
    UnexpectedToken {
        /// What the grammar required at this point.
        expected: String,
        /// The kind of token actually found.
        found:    TokenKind,
        /// The source text of the token.
        text:     String,
        /// Byte offset of the token.
        position: usize,
    },
    /// The token stream ended while more input was required.
    UnexpectedEndOfInput {
        /// What the grammar required at this point.
        expected: String,
    },
    /// The constant declarations are not followed by `struct`.
    MissingRootStruct {
        /// The token found instead, or `None` at end of input.
        found: Option<(TokenKind, usize)>,
    },
    /// Tokens remain after the root struct was closed.
    TrailingContent {
        /// The kind of the first extra token.
        kind:     TokenKind,
        /// The source text of the first extra token.
        text:     String,
        /// Byte offset of the first extra token.
        position: usize,
    },
    /// A number token could not be converted to a double.
    InvalidNumber {
        /// The source text of the literal.
        text:     String,
        /// Byte offset of the literal.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error points at, if there is one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::TrailingContent { position, .. }
            | Self::InvalidNumber { position, .. } => Some(*position),
            Self::MissingRootStruct { found: Some((_, position)) } => Some(*position),
            Self::MissingRootStruct { found: None } | Self::UnexpectedEndOfInput { .. } => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    text,
                                    position, } => write!(f,
                                                          "Error at position {position}: Expected {expected}, found {found:?} '{text}'."),

            Self::UnexpectedEndOfInput { expected } => {
                write!(f, "Error at end of input: Expected {expected}.")
            },

            Self::MissingRootStruct { found: Some((kind, position)) } => write!(f,
                                                                                "Error at position {position}: Expected root struct, found {kind:?}. Format: struct {{ ... }}"),

            Self::MissingRootStruct { found: None } => write!(f,
                                                              "Error at end of input: Expected root struct. Format: struct {{ ... }}"),

            Self::TrailingContent { kind, text, position } => write!(f,
                                                                     "Error at position {position}: Unexpected content after root struct: {kind:?} '{text}'."),

            Self::InvalidNumber { text, position } => {
                write!(f, "Error at position {position}: Invalid number literal '{text}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
