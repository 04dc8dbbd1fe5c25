/// The lexer splits source text into tokens.
///
/// The lexer reads the raw source text and produces the token sequence the
/// parser works on. Comments are dropped here and expression bodies are cut
/// out whole.
///
/// # Responsibilities
/// - Converts source text into tokens with kind, text and byte offset.
/// - Skips whitespace and `<# ... #>` comments.
/// - Reports unterminated regions and unmatched characters.
pub mod lexer;
/// The parser builds the syntax tree from tokens.
///
/// # Responsibilities
/// - Separates constant declarations from the root struct.
/// - Builds struct, literal, reference and expression nodes.
/// - Reports grammar violations with the offending token and offset.
pub mod parser;
/// The evaluator turns a syntax tree into a document.
///
/// # Responsibilities
/// - Resolves constants in declaration order.
/// - Evaluates postfix expressions on an operand stack.
/// - Reports undefined names and arithmetic domain errors.
pub mod evaluator;
/// Output values and constant values.
pub mod value;
