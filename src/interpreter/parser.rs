use crate::{
    error::ParseError,
    interpreter::{
        lexer::ParseResult,
        precedence::PrecedenceTable,
        token::{Operator, Token, render},
    },
};

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Operator(Operator),
    Paren,
}

/// Reorders an infix token sequence into postfix (Reverse Polish) order.
///
/// This is the shunting-yard algorithm with an explicit operator stack:
///
/// - operands go straight to the output;
/// - `(` is pushed;
/// - `)` pops operators to the output until the matching `(`, which is
///   discarded;
/// - an operator is pushed onto an empty stack, onto a `(`, or onto an
///   operator it ranks strictly above. Otherwise operators are popped while
///   the top of the stack is an operator that does not rank strictly below
///   it, and then it is pushed. Equal ranks therefore reduce left to right.
/// - at the end every remaining operator is popped.
///
/// The output holds only operands and operators.
///
/// # Errors
/// `MisplacedParenthesis` if a `)` has no open `(` before it, or if a `(` is
/// never closed.
///
/// # Example
/// ```
/// use tally::interpreter::{
///     parser::to_postfix,
///     precedence::PrecedenceTable,
///     token::{Operator, Token, render},
/// };
///
/// let infix = [Token::LeftParen,
///              Token::Number(2),
///              Token::Operator(Operator::Add),
///              Token::Number(3),
///              Token::RightParen,
///              Token::Operator(Operator::Mul),
///              Token::Number(4)];
///
/// let postfix = to_postfix(&infix, &PrecedenceTable::DEFAULT).unwrap();
/// assert_eq!(render(&postfix), "2 3 + 4 *");
/// ```
pub fn to_postfix(tokens: &[Token], precedence: &PrecedenceTable) -> ParseResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();

    let misplaced = || ParseError::MisplacedParenthesis { fragment: render(tokens) };

    for token in tokens {
        match token {
            Token::Number(_) | Token::Identifier(_) => output.push(token.clone()),
            Token::LeftParen => stack.push(Pending::Paren),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Pending::Operator(op)) => output.push(Token::Operator(op)),
                    Some(Pending::Paren) => break,
                    None => return Err(misplaced()),
                }
            },
            Token::Operator(op) => {
                match stack.last() {
                    None | Some(Pending::Paren) => {},
                    Some(Pending::Operator(top)) if precedence.binds_tighter(*op, *top) => {},
                    Some(Pending::Operator(_)) => {
                        while let Some(Pending::Operator(top)) = stack.last().copied()
                              && !precedence.binds_looser(top, *op)
                        {
                            stack.pop();
                            output.push(Token::Operator(top));
                        }
                    },
                }
                stack.push(Pending::Operator(*op));
            },
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(Token::Operator(op)),
            Pending::Paren => return Err(misplaced()),
        }
    }

    log::debug!("postfix: {}", render(&output));
    Ok(output)
}
