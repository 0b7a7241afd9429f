/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl Operator {
    /// Returns `true` for the sign operators `+` and `-`.
    #[must_use]
    pub const fn is_sign(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// A classified unit of an expression.
///
/// Every word of the input is classified exactly once by the tokenizer. The
/// converter and the postfix evaluator only ever match on these variants and
/// never look at the source text again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An integer literal, sign already applied.
    Number(i64),
    /// A reference to a variable known at tokenization time.
    Identifier(String),
    /// One of `+ - * /`.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl Token {
    /// Returns `true` for tokens that resolve to a value.
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Identifier(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}

/// Renders a token sequence the way it would be typed, one space apart.
///
/// # Example
/// ```
/// use tally::interpreter::token::{Operator, Token, render};
///
/// let tokens = [Token::Number(1), Token::Operator(Operator::Add), Token::Number(2)];
/// assert_eq!(render(&tokens), "1 + 2");
/// ```
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
