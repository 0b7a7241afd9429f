#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading an expression or an
/// assignment, before any arithmetic happens.
pub enum ParseError {
    /// A word that is not a number, a known variable, an operator or a
    /// parenthesised operand.
    UnexpectedWord {
        /// The offending word as typed.
        word: String,
    },
    /// A name that looks like a variable but has never been assigned.
    UnknownVariable {
        /// The variable name.
        name: String,
    },
    /// A run of signs mixing `+` and `-`, such as `+-`.
    MixedSignRun {
        /// The run as typed.
        run: String,
    },
    /// The number of `(` and `)` differs.
    UnbalancedParentheses {
        /// The whole expression.
        expression: String,
    },
    /// A parenthesis with no partner at the point it was reached.
    MisplacedParenthesis {
        /// The expression rendered from its tokens.
        fragment: String,
    },
    /// The statement is not of the form `name = value`.
    InvalidAssignment {
        /// The statement as typed.
        statement: String,
    },
    /// An integer literal outside the 64-bit range.
    LiteralTooLarge {
        /// The literal as typed.
        literal: String,
    },
    /// Nothing to evaluate.
    EmptyExpression,
}

impl ParseError {
    /// The piece of input the error is about, if it has one.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        match self {
            Self::UnexpectedWord { word } => Some(word),
            Self::UnknownVariable { name } => Some(name),
            Self::MixedSignRun { run } => Some(run),
            Self::UnbalancedParentheses { expression } => Some(expression),
            Self::MisplacedParenthesis { fragment } => Some(fragment),
            Self::InvalidAssignment { statement } => Some(statement),
            Self::LiteralTooLarge { literal } => Some(literal),
            Self::EmptyExpression => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedWord { word } => write!(f, "Invalid expression: unexpected '{word}'."),
            Self::UnknownVariable { name } => write!(f, "Unknown variable '{name}'."),
            Self::MixedSignRun { run } => {
                write!(f, "Invalid expression: cannot mix '+' and '-' in '{run}'.")
            },
            Self::UnbalancedParentheses { expression } => {
                write!(f, "Invalid expression: unbalanced parentheses in '{expression}'.")
            },
            Self::MisplacedParenthesis { fragment } => {
                write!(f, "Invalid expression: misplaced parenthesis in '{fragment}'.")
            },
            Self::InvalidAssignment { statement } => {
                write!(f, "Invalid assignment: '{statement}'.")
            },
            Self::LiteralTooLarge { literal } => write!(f, "Literal '{literal}' is too large."),
            Self::EmptyExpression => write!(f, "Invalid expression: nothing to evaluate."),
        }
    }
}

impl std::error::Error for ParseError {}
