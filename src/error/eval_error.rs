#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating a syntax tree.
pub enum EvalError {
    /// A name was used before (or without) being declared as a constant.
    UndefinedConstant {
        /// The constant name.
        name: String,
    },
    /// A constant declaration resolved to a struct.
    NonScalarConstant {
        /// The constant name.
        name: String,
    },
    /// A string constant was used as an operand inside an expression.
    NonNumericConstant {
        /// The constant name.
        name: String,
    },
    /// An expression token is neither a number, a constant nor an operator.
    UnknownExpressionToken {
        /// The offending token.
        token: String,
    },
    /// An operator found fewer operands on the stack than it needs.
    StackUnderflow {
        /// The operator being applied.
        operator:  String,
        /// How many operands the operator pops.
        required:  usize,
        /// How many operands were on the stack.
        available: usize,
    },
    /// The expression did not leave exactly one value on the stack.
    MalformedExpression {
        /// Number of values left on the stack.
        remaining: usize,
    },
    /// The right operand of `/` or `mod` was zero.
    DivisionByZero {
        /// The operator being applied.
        operator: String,
    },
    /// `sqrt` was applied to a negative number.
    NegativeSqrt {
        /// The negative operand.
        operand: f64,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedConstant { name } => write!(f, "Undefined constant '{name}'."),
            Self::NonScalarConstant { name } => {
                write!(f, "Constant '{name}' must be a number or string.")
            },
            Self::NonNumericConstant { name } => {
                write!(f, "Constant '{name}' used in expression must be a number.")
            },
            Self::UnknownExpressionToken { token } => {
                write!(f, "Unknown token in expression: '{token}'.")
            },
            Self::StackUnderflow { operator,
                                   required,
                                   available, } => write!(f,
                                                          "Not enough operands for operator '{operator}': needs {required}, found {available}."),
            Self::MalformedExpression { remaining } => write!(f,
                                                              "Invalid expression: expected 1 value on stack, got {remaining}."),
            Self::DivisionByZero { operator } => {
                write!(f, "Division by zero in expression (operator '{operator}').")
            },
            Self::NegativeSqrt { operand } => {
                write!(f, "Cannot take the square root of negative number {operand}.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
