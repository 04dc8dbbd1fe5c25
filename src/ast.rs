use indexmap::IndexMap;

/// Fields of a struct in source order.
///
/// A repeated field name keeps the position of its first occurrence and takes
/// the value of its last one.
pub type Fields = IndexMap<String, Node>;

/// The parsed form of a whole source text.
///
/// Constant declarations are kept apart from the root struct because they are
/// evaluated first and strictly in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Ast {
    /// Constant declarations in source order.
    pub consts: Vec<ConstDeclaration>,
    /// The root struct. The parser never produces an `Ast` without one.
    pub root:   Fields,
}

/// A top-level `NAME := value;` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstDeclaration {
    /// Name of the constant.
    pub name:  String,
    /// The unevaluated value.
    pub value: Node,
}

/// An abstract syntax tree node in value position.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A nested `struct { ... }`.
    Struct(Fields),
    /// A numeric literal.
    Number(f64),
    /// A string literal with quotes removed and escapes applied.
    String(String),
    /// A reference to a constant, resolved during evaluation.
    Identifier(String),
    /// The body of a `.[ ... ].` expression split into postfix tokens,
    /// evaluated lazily.
    ConstExpression(Vec<String>),
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Fields> for Node {
    fn from(fields: Fields) -> Self {
        Self::Struct(fields)
    }
}
