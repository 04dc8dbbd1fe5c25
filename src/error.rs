/// Lexing errors.
///
/// Raised while the source text is split into tokens: unterminated comments or
/// expressions and characters that start no token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while the token stream is turned into
/// a syntax tree, such as unexpected tokens, a missing root struct or trailing
/// content after it.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types raised while constants are resolved and
/// expressions are computed, including the arithmetic domain errors.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

#[derive(Debug)]
/// Any failure produced by the compilation pipeline or its file handling.
pub enum Error {
    /// The source text could not be tokenized.
    Lex(LexError),
    /// The token stream does not follow the grammar.
    Parse(ParseError),
    /// The syntax tree could not be evaluated.
    Eval(EvalError),
    /// Reading the source or writing the document failed.
    Io(std::io::Error),
}

impl Error {
    /// Returns the process exit code used for this error family.
    ///
    /// # Example
    /// ```
    /// use confex::{compile, error::Error};
    ///
    /// let err = compile("struct { A = .[ 1 0 / ]. }").unwrap_err();
    /// assert!(matches!(err, Error::Eval(_)));
    /// assert_eq!(err.exit_code(), 4);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Lex(_) => 2,
            Self::Parse(_) => 3,
            Self::Eval(_) => 4,
        }
    }

    /// Returns the byte offset in the source text the error points at, if
    /// there is one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.position()),
            Self::Parse(e) => e.position(),
            Self::Eval(_) | Self::Io(_) => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "Syntax error: {e}"),
            Self::Parse(e) => write!(f, "Syntax error: {e}"),
            Self::Eval(e) => write!(f, "Processing error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
