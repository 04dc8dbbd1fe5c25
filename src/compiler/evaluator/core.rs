use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    ast::{Ast, ConstDeclaration, Fields, Node},
    compiler::value::{Constant, Document, Value},
    error::EvalError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a syntax tree into a document.
///
/// Constant declarations are resolved first, strictly in source order, then the
/// root struct is evaluated against them. The tree itself is only read.
///
/// # Errors
/// Returns the first `EvalError` raised by a declaration or a field.
///
/// # Example
/// ```
/// use confex::compiler::{evaluator::evaluate, lexer::tokenize, parser::parse, value::Value};
///
/// let tokens = tokenize(r#"BASE := 20; struct { Mana = .[ BASE 10 * ].; Name = "Mage"; }"#).unwrap();
/// let document = evaluate(&parse(&tokens).unwrap()).unwrap();
///
/// assert_eq!(document["Mana"], Value::Number(200.0));
/// assert_eq!(document["Name"], Value::from("Mage"));
/// ```
pub fn evaluate(ast: &Ast) -> EvalResult<Document> {
    let mut context = Context::new();
    context.define_constants(&ast.consts)?;

    let document = context.eval_struct(&ast.root)?;
    debug!(constants = context.constants.len(),
           fields = document.len(),
           "evaluated document");

    Ok(document)
}

/// Stores the constant environment of one evaluation.
///
/// Constants are added one declaration at a time, so a declaration can only
/// see the ones before it. Once the declarations are processed the context is
/// only read.
#[derive(Debug, Default)]
pub struct Context {
    /// A mapping from constant names to their resolved values.
    pub constants: HashMap<String, Constant>,
}

impl Context {
    /// Creates a context with no constants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves constant declarations in order and adds each one to the
    /// environment before the next is processed.
    ///
    /// A later declaration with the same name replaces the earlier value.
    ///
    /// # Errors
    /// - `NonScalarConstant` if a declaration's value is a struct.
    /// - Any error raised while resolving a declaration's value.
    pub fn define_constants(&mut self, consts: &[ConstDeclaration]) -> EvalResult<()> {
        for ConstDeclaration { name, value } in consts {
            let constant = self.eval_node(value)?
                               .into_constant()
                               .ok_or_else(|| EvalError::NonScalarConstant { name: name.clone() })?;

            trace!(constant = %name, value = ?constant, "defined constant");
            self.constants.insert(name.clone(), constant);
        }
        Ok(())
    }

    /// Looks up a constant by name.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<&Constant> {
        self.constants.get(name)
    }

    /// Evaluates a single node.
    ///
    /// Literals evaluate to themselves, structs recursively, identifiers to the
    /// constant they name and expressions through the stack machine.
    ///
    /// # Errors
    /// - `UndefinedConstant` if an identifier names no known constant.
    /// - Any error raised by a nested struct or an expression.
    pub fn eval_node(&self, node: &Node) -> EvalResult<Value> {
        match node {
            Node::Number(n) => Ok(Value::Number(*n)),
            Node::String(s) => Ok(Value::String(s.clone())),
            Node::Struct(fields) => self.eval_struct(fields).map(Value::Object),
            Node::Identifier(name) => self.constant(name)
                                          .cloned()
                                          .map(Value::from)
                                          .ok_or_else(|| EvalError::UndefinedConstant { name:
                                                                                            name.clone() }),
            Node::ConstExpression(tokens) => self.eval_expression(tokens).map(Value::Number),
        }
    }

    /// Evaluates every field of a struct, keeping the field order.
    ///
    /// # Errors
    /// Returns the first error raised by any field.
    pub fn eval_struct(&self, fields: &Fields) -> EvalResult<Document> {
        fields.iter()
              .map(|(name, node)| Ok((name.clone(), self.eval_node(node)?)))
              .collect()
    }
}
