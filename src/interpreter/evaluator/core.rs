use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    error::{CalcError, ParseError, RuntimeError},
    interpreter::{
        evaluator::postfix::{eval_postfix, resolve},
        lexer::tokenize,
        parser::to_postfix,
        precedence::PrecedenceTable,
        store::VariableStore,
    },
};

/// Result type used by the postfix evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Result type returned by the [`Evaluator`] facade.
pub type CalcResult<T> = Result<T, CalcError>;

lazy_static! {
    static ref ASSIGNMENT: Regex =
        Regex::new(r"^[a-zA-Z]+\s*=\s*-?[a-zA-Z0-9]+$").expect("assignment pattern is valid");
    static ref VARIABLE: Regex = Regex::new(r"^[a-zA-Z]+$").expect("variable pattern is valid");
    static ref LITERAL: Regex = Regex::new(r"^-?[0-9]+$").expect("literal pattern is valid");
}

/// Evaluates integer expressions against a set of variables.
///
/// `Evaluator` owns both the variable store and the precedence table, so
/// separate instances never share state.
///
/// ## Usage
///
/// An `Evaluator` is created once per session and fed one line at a time:
/// assignments through [`Evaluator::assign`], expressions through
/// [`Evaluator::evaluate`].
///
/// ```
/// use tally::interpreter::evaluator::core::Evaluator;
///
/// let mut evaluator = Evaluator::new();
/// evaluator.assign("x = 5").unwrap();
///
/// assert_eq!(evaluator.evaluate("x * 2").unwrap(), 10);
/// assert_eq!(evaluator.get_value("x"), Some(5));
/// assert_eq!(evaluator.get_value("y"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    variables:  VariableStore,
    precedence: PrecedenceTable,
}

impl Evaluator {
    /// Creates an evaluator with no variables and the default precedence
    /// table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_precedence(PrecedenceTable::DEFAULT)
    }

    /// Creates an evaluator with no variables and the given precedence table.
    #[must_use]
    pub fn with_precedence(precedence: PrecedenceTable) -> Self {
        Self { variables: VariableStore::new(),
               precedence }
    }

    /// Evaluates an expression.
    ///
    /// The line is tokenized, reordered into postfix form and reduced. A line
    /// made of a single token is resolved directly.
    ///
    /// # Errors
    /// Any [`ParseError`] from reading the expression, or any
    /// [`RuntimeError`] from reducing it. An empty line is an
    /// `EmptyExpression`.
    pub fn evaluate(&self, expression: &str) -> CalcResult<i64> {
        let tokens = tokenize(expression, &self.variables)?;

        match tokens.as_slice() {
            [] => Err(ParseError::EmptyExpression.into()),
            [single] => Ok(resolve(single, &self.variables)?),
            _ => {
                let postfix = to_postfix(&tokens, &self.precedence)?;
                Ok(eval_postfix(&postfix, &self.variables)?)
            },
        }
    }

    /// Stores the value of an assignment statement such as `n = 12`,
    /// `n = -3` or `n = m`.
    ///
    /// The statement must be a name made of letters, `=`, and either an
    /// integer literal with an optional `-` or the name of an existing
    /// variable. Whitespace around the parts is ignored. On failure the store
    /// is left as it was.
    ///
    /// # Errors
    /// - `InvalidAssignment` if the statement does not have that shape.
    /// - `UnknownVariable` if the right side names an unassigned variable.
    /// - `LiteralTooLarge` if the right side does not fit in an `i64`.
    pub fn assign(&mut self, statement: &str) -> CalcResult<()> {
        let statement = statement.trim();
        let invalid = || ParseError::InvalidAssignment { statement: statement.to_string() };

        if !ASSIGNMENT.is_match(statement) {
            return Err(invalid().into());
        }
        let Some((name, value)) = statement.split_once('=') else {
            return Err(invalid().into());
        };
        let (name, value) = (name.trim(), value.trim());

        let resolved = if LITERAL.is_match(value) {
            value.parse::<i64>()
                 .map_err(|_| ParseError::LiteralTooLarge { literal: value.to_string() })?
        } else if VARIABLE.is_match(value) {
            self.variables
                .get(value)
                .ok_or_else(|| ParseError::UnknownVariable { name: value.to_string() })?
        } else {
            return Err(invalid().into());
        };

        if self.variables.set(name, resolved).is_some() {
            log::info!("reassigned {name} = {resolved}");
        } else {
            log::info!("assigned {name} = {resolved}");
        }
        Ok(())
    }

    /// Returns `true` if `text` is a bare variable reference: one or more
    /// ASCII letters and nothing else.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::evaluator::core::Evaluator;
    ///
    /// assert!(Evaluator::is_variable("count"));
    /// assert!(!Evaluator::is_variable("count + 1"));
    /// assert!(!Evaluator::is_variable("x1"));
    /// ```
    #[must_use]
    pub fn is_variable(text: &str) -> bool {
        VARIABLE.is_match(text)
    }

    /// Returns the value stored under `name`, if any.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<i64> {
        self.variables.get(name)
    }

    /// The variables assigned so far.
    #[must_use]
    pub const fn variables(&self) -> &VariableStore {
        &self.variables
    }

    /// The precedence table this evaluator was built with.
    #[must_use]
    pub const fn precedence(&self) -> &PrecedenceTable {
        &self.precedence
    }
}
