use crate::interpreter::token::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reducing a postfix sequence.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The dividend.
        dividend: i64,
    },
    /// The result does not fit in 64 bits.
    Overflow {
        /// Left operand.
        left:  i64,
        /// The operator applied.
        op:    Operator,
        /// Right operand.
        right: i64,
    },
    /// An operator found fewer than two operands on the stack.
    StackUnderflow {
        /// The operator that could not be applied.
        op: Operator,
    },
    /// More than one value was left once every token was consumed.
    DanglingOperands {
        /// How many values were left.
        count: usize,
    },
    /// A variable disappeared between tokenizing and evaluating.
    UnknownVariable {
        /// The variable name.
        name: String,
    },
    /// A parenthesis or operator where a value was required.
    NotAnOperand {
        /// The token, rendered.
        token: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { dividend } => write!(f, "Division by zero: {dividend} / 0."),
            Self::Overflow { left, op, right } => {
                write!(f, "Integer overflow while computing {left} {op} {right}.")
            },
            Self::StackUnderflow { op } => {
                write!(f, "Invalid expression: '{op}' is missing an operand.")
            },
            Self::DanglingOperands { count } => {
                write!(f, "Invalid expression: {count} values left without an operator.")
            },
            Self::UnknownVariable { name } => write!(f, "Unknown variable '{name}'."),
            Self::NotAnOperand { token } => {
                write!(f, "Invalid expression: '{token}' is not a value.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
