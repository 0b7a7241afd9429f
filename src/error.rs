/// Parsing errors.
///
/// Defines the errors raised while splitting an expression into tokens,
/// reordering it into postfix form, or reading an assignment statement.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while reducing a postfix sequence: division by
/// zero, overflow, and operand stack mismatches.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure reported by the evaluator facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The line could not be read as an expression or assignment.
    Parse(ParseError),
    /// The expression was read but could not be reduced.
    Runtime(RuntimeError),
}

impl CalcError {
    /// Returns `true` for every malformed-input failure.
    ///
    /// Only arithmetic faults (`DivisionByZero`, `Overflow`) are not invalid
    /// expressions; operand stack mismatches count as malformed input.
    #[must_use]
    pub const fn is_invalid_expression(&self) -> bool {
        !matches!(self,
                  Self::Runtime(RuntimeError::DivisionByZero { .. }
                                | RuntimeError::Overflow { .. }))
    }

    /// The piece of input the error is about, if it has one.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        match self {
            Self::Parse(e) => e.fragment(),
            Self::Runtime(RuntimeError::UnknownVariable { name }) => Some(name),
            Self::Runtime(RuntimeError::NotAnOperand { token }) => Some(token),
            Self::Runtime(_) => None,
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
