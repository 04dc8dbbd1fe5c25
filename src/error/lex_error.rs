#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// A `<#` comment opener has no matching `#>`.
    UnterminatedComment {
        /// Byte offset of the comment opener.
        position: usize,
    },
    /// A `.[` expression opener has no matching `].`.
    UnterminatedExpression {
        /// Byte offset of the expression opener.
        position: usize,
    },
    /// No token pattern matches the text at this position.
    UnexpectedCharacter {
        /// The first character that could not be tokenized.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
}

impl LexError {
    /// Returns the byte offset the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnterminatedComment { position }
            | Self::UnterminatedExpression { position }
            | Self::UnexpectedCharacter { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedComment { position } => {
                write!(f, "Error at position {position}: Unterminated comment, expected '#>'.")
            },
            Self::UnterminatedExpression { position } => write!(f,
                                                                "Error at position {position}: Unterminated expression, expected '].'."),
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Error at position {position}: Unexpected character '{character}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
