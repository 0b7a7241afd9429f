/// The evaluator module reduces token sequences to integers.
///
/// It owns the calculator state (variables and precedence) and chains the
/// tokenizer, the converter and the postfix stack machine together.
///
/// # Responsibilities
/// - Evaluates expressions and stores assignments.
/// - Performs checked integer arithmetic.
/// - Reports division by zero, overflow and malformed postfix input.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// Splits a line on whitespace and classifies each word into numbers,
/// variable references, operators and parentheses, folding runs of signs.
///
/// # Responsibilities
/// - Lexes each word into pieces with `logos`.
/// - Rejects words that are not operands, operators or parentheses.
/// - Checks that parentheses are balanced.
pub mod lexer;
/// The parser module reorders tokens into postfix form.
///
/// Implements the shunting-yard algorithm driven by a [`PrecedenceTable`].
///
/// [`PrecedenceTable`]: precedence::PrecedenceTable
pub mod parser;
/// Operator ranking used by the parser.
pub mod precedence;
/// Variable storage.
pub mod store;
/// Token types shared by every stage.
pub mod token;
