/// Checked integer arithmetic.
///
/// Applies `+ - * /` to two operands, reporting division by zero and
/// overflow instead of panicking or wrapping.
pub mod arithmetic;

/// The evaluator facade.
///
/// Holds the variable store and precedence table, and exposes `evaluate`,
/// `assign`, `is_variable` and `get_value`.
pub mod core;

/// Postfix reduction.
///
/// A single left-to-right pass over a postfix sequence with an operand stack.
pub mod postfix;
