use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, token::Operator},
};

/// Applies a binary operator to two integers.
///
/// Division truncates toward zero. Every operation is checked: a zero divisor
/// is a `DivisionByZero`, and a result outside the `i64` range (including
/// `i64::MIN / -1`) is an `Overflow`. Nothing wraps.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand, the one pushed first.
/// - `right`: Right operand.
///
/// # Example
/// ```
/// use tally::{
///     error::RuntimeError,
///     interpreter::{evaluator::arithmetic::apply, token::Operator},
/// };
///
/// assert_eq!(apply(Operator::Div, -7, 2).unwrap(), -3);
/// assert!(matches!(apply(Operator::Div, 1, 0),
///                  Err(RuntimeError::DivisionByZero { dividend: 1 })));
/// ```
pub fn apply(op: Operator, left: i64, right: i64) -> EvalResult<i64> {
    if op == Operator::Div && right == 0 {
        return Err(RuntimeError::DivisionByZero { dividend: left });
    }

    let result = match op {
        Operator::Add => left.checked_add(right),
        Operator::Sub => left.checked_sub(right),
        Operator::Mul => left.checked_mul(right),
        Operator::Div => left.checked_div(right),
    };

    result.ok_or(RuntimeError::Overflow { left, op, right })
}
