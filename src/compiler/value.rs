use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// The evaluated output: field name to value, in source order.
pub type Document = IndexMap<String, Value>;

/// An evaluated value in the output document.
///
/// Serializes untagged, so a document turns directly into a JSON object of
/// numbers, strings and nested objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A double precision number. Integer literals are numbers too.
    Number(f64),
    /// A string.
    String(String),
    /// A nested struct.
    Object(Document),
}

/// The value of a declared constant.
///
/// Constants are scalars only; a struct can never be bound to a name.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    /// A numeric constant, usable inside expressions.
    Number(f64),
    /// A string constant, usable only as a whole field value.
    String(String),
}

impl Value {
    /// Returns the number if this value is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string slice if this value is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the nested document if this value is an object.
    #[must_use]
    pub const fn as_object(&self) -> Option<&Document> {
        match self {
            Self::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Converts the value into a constant, or `None` for an object.
    #[must_use]
    pub fn into_constant(self) -> Option<Constant> {
        match self {
            Self::Number(n) => Some(Constant::Number(n)),
            Self::String(s) => Some(Constant::String(s)),
            Self::Object(_) => None,
        }
    }
}

impl From<Constant> for Value {
    fn from(constant: Constant) -> Self {
        match constant {
            Constant::Number(n) => Self::Number(n),
            Constant::String(s) => Self::String(s),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Document> for Value {
    fn from(v: Document) -> Self {
        Self::Object(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Object(fields) => {
                write!(f, "{{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name:?}: {value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}
