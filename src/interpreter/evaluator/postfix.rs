use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{arithmetic::apply, core::EvalResult},
        store::VariableStore,
        token::Token,
    },
};

/// Resolves an operand token to its value.
///
/// # Errors
/// - `UnknownVariable` if an identifier is not in `variables`.
/// - `NotAnOperand` for operators and parentheses.
pub fn resolve(token: &Token, variables: &VariableStore) -> EvalResult<i64> {
    match token {
        Token::Number(n) => Ok(*n),
        Token::Identifier(name) => {
            variables.get(name)
                     .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone() })
        },
        other => Err(RuntimeError::NotAnOperand { token: other.to_string() }),
    }
}

/// Reduces a postfix sequence to a single integer.
///
/// Operands are resolved and pushed. An operator pops the right operand, then
/// the left one, and pushes `left op right`. Exactly one value must remain
/// once the sequence is consumed.
///
/// # Errors
/// - `StackUnderflow` if an operator finds fewer than two values.
/// - `DanglingOperands` if more than one value is left over, or none at all.
/// - `NotAnOperand` if a parenthesis is present.
/// - Arithmetic errors from [`apply`].
///
/// # Example
/// ```
/// use tally::interpreter::{
///     evaluator::postfix::eval_postfix,
///     store::VariableStore,
///     token::{Operator, Token},
/// };
///
/// let mut variables = VariableStore::new();
/// variables.set("n", 10);
///
/// // n 4 - 3 *  ==  (n - 4) * 3
/// let postfix = [Token::Identifier("n".to_string()),
///                Token::Number(4),
///                Token::Operator(Operator::Sub),
///                Token::Number(3),
///                Token::Operator(Operator::Mul)];
///
/// assert_eq!(eval_postfix(&postfix, &variables).unwrap(), 18);
/// ```
pub fn eval_postfix(tokens: &[Token], variables: &VariableStore) -> EvalResult<i64> {
    let mut operands: Vec<i64> = Vec::new();

    for token in tokens {
        if let Token::Operator(op) = token {
            let (Some(right), Some(left)) = (operands.pop(), operands.pop()) else {
                return Err(RuntimeError::StackUnderflow { op: *op });
            };
            let value = apply(*op, left, right)?;
            log::debug!("{left} {op} {right} = {value}");
            operands.push(value);
        } else {
            operands.push(resolve(token, variables)?);
        }
    }

    match operands.as_slice() {
        [value] => Ok(*value),
        rest => Err(RuntimeError::DanglingOperands { count: rest.len() }),
    }
}
