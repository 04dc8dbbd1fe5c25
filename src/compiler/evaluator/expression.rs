use crate::{
    compiler::{evaluator::core::{Context, EvalResult}, value::Constant},
    error::EvalError,
};

/// An operator understood by the expression stack machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `mod`, floored like the sign of the divisor.
    Mod,
    /// `sqrt`
    Sqrt,
}

impl Operator {
    /// Maps an expression token to its operator.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "mod" => Some(Self::Mod),
            "sqrt" => Some(Self::Sqrt),
            _ => None,
        }
    }

    /// The token that spells this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "mod",
            Self::Sqrt => "sqrt",
        }
    }

    /// How many operands the operator pops.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Sqrt => 1,
            _ => 2,
        }
    }

    /// Applies the operator to its operands, left operand first.
    ///
    /// # Errors
    /// - `DivisionByZero` for `/` or `mod` with a zero right operand.
    /// - `NegativeSqrt` for `sqrt` of a negative number.
    ///
    /// # Example
    /// ```
    /// use confex::compiler::evaluator::expression::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(&[10.0, 4.0]).unwrap(), 6.0);
    /// assert_eq!(Operator::Mod.apply(&[-5.0, 3.0]).unwrap(), 1.0);
    /// assert!(Operator::Div.apply(&[1.0, 0.0]).is_err());
    /// ```
    pub fn apply(self, operands: &[f64]) -> EvalResult<f64> {
        match (self, operands) {
            (Self::Sqrt, &[a]) => {
                if a < 0.0 {
                    return Err(EvalError::NegativeSqrt { operand: a });
                }
                Ok(a.sqrt())
            },
            (Self::Add, &[a, b]) => Ok(a + b),
            (Self::Sub, &[a, b]) => Ok(a - b),
            (Self::Mul, &[a, b]) => Ok(a * b),
            (Self::Div | Self::Mod, &[_, b]) if b == 0.0 => {
                Err(EvalError::DivisionByZero { operator: self.symbol().to_string() })
            },
            (Self::Div, &[a, b]) => Ok(a / b),
            (Self::Mod, &[a, b]) => Ok(floored_mod(a, b)),
            _ => Err(EvalError::StackUnderflow { operator:  self.symbol().to_string(),
                                                 required:  self.arity(),
                                                 available: operands.len(), }),
        }
    }
}

impl Context {
    /// Evaluates a postfix expression with a single operand stack.
    ///
    /// Tokens are processed left to right:
    /// - a numeric literal is pushed,
    /// - a known numeric constant is pushed,
    /// - an operator pops its operands (the top of the stack is the right
    ///   operand) and pushes the result.
    ///
    /// Exactly one value must be left on the stack at the end.
    ///
    /// # Errors
    /// - `NonNumericConstant` if a string constant is used as an operand.
    /// - `UndefinedConstant` if a token spelled like a constant name is not
    ///   declared (yet).
    /// - `UnknownExpressionToken` for anything that is neither a number, a
    ///   constant nor an operator.
    /// - `StackUnderflow` if an operator lacks operands.
    /// - `MalformedExpression` if the final stack does not hold one value.
    /// - `DivisionByZero` and `NegativeSqrt` from the operators.
    ///
    /// # Example
    /// ```
    /// use confex::compiler::evaluator::Context;
    ///
    /// let ctx = Context::new();
    /// let tokens = ["4", "sqrt", "3", "*"].map(String::from);
    ///
    /// assert_eq!(ctx.eval_expression(&tokens).unwrap(), 6.0);
    /// ```
    pub fn eval_expression(&self, tokens: &[String]) -> EvalResult<f64> {
        let mut stack: Vec<f64> = Vec::new();

        for token in tokens {
            if let Some(n) = parse_numeric(token) {
                stack.push(n);
                continue;
            }

            match self.constant(token) {
                Some(Constant::Number(n)) => {
                    stack.push(*n);
                    continue;
                },
                Some(Constant::String(_)) => {
                    return Err(EvalError::NonNumericConstant { name: token.clone() });
                },
                None => {},
            }

            let Some(op) = Operator::from_token(token) else {
                if is_constant_name(token) {
                    return Err(EvalError::UndefinedConstant { name: token.clone() });
                }
                return Err(EvalError::UnknownExpressionToken { token: token.clone() });
            };

            let arity = op.arity();
            if stack.len() < arity {
                return Err(EvalError::StackUnderflow { operator:  token.clone(),
                                                       required:  arity,
                                                       available: stack.len(), });
            }

            let operands = stack.split_off(stack.len() - arity);
            stack.push(op.apply(&operands)?);
        }

        match stack.as_slice() {
            &[result] => Ok(result),
            _ => Err(EvalError::MalformedExpression { remaining: stack.len() }),
        }
    }
}

/// Parses an expression token as a numeric literal.
///
/// Only tokens that start like a number count, so words such as `inf` or `nan`
/// are never treated as literals.
fn parse_numeric(token: &str) -> Option<f64> {
    if !token.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    token.parse().ok()
}

/// Whether a token is spelled like a constant name: an uppercase letter or
/// underscore followed by letters, digits or underscores.
fn is_constant_name(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase() || c == '_')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Remainder whose sign follows the divisor.
fn floored_mod(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) { r + b } else { r }
}
