use pretty_assertions::assert_eq;
use tally::{
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::{arithmetic::apply, postfix::eval_postfix},
        lexer::tokenize,
        parser::to_postfix,
        precedence::PrecedenceTable,
        store::VariableStore,
        token::{Operator, Token, render},
    },
};

fn convert_with(src: &str, table: PrecedenceTable) -> String {
    let tokens = tokenize(src, &VariableStore::new()).unwrap();
    render(&to_postfix(&tokens, &table).unwrap())
}

fn convert(src: &str) -> String {
    convert_with(src, PrecedenceTable::DEFAULT)
}

#[test]
fn equal_ranks_are_emitted_left_to_right() {
    assert_eq!(convert("1 - 2 + 3"), "1 2 - 3 +");
    assert_eq!(convert("1 + 2 - 3 + 4"), "1 2 + 3 - 4 +");
    assert_eq!(convert("8 / 4 / 2"), "8 4 / 2 /");
}

#[test]
fn higher_ranks_are_emitted_first() {
    assert_eq!(convert("2 + 3 * 4"), "2 3 4 * +");
    assert_eq!(convert("2 * 3 + 4"), "2 3 * 4 +");
    assert_eq!(convert("3 * 5 / 2"), "3 5 2 / *");
    assert_eq!(convert("8 / 2 * 2"), "8 2 / 2 *");
}

#[test]
fn standard_table_treats_multiplication_and_division_alike() {
    assert_eq!(convert_with("3 * 5 / 2", PrecedenceTable::STANDARD), "3 5 * 2 /");
    assert_eq!(convert_with("2 + 3 * 4", PrecedenceTable::STANDARD), "2 3 4 * +");
}

#[test]
fn parentheses_are_dropped_after_grouping() {
    assert_eq!(convert("(2 + 3) * 4"), "2 3 + 4 *");
    assert_eq!(convert("2 * (3 + 4) * 5"), "2 3 4 + * 5 *");
    assert_eq!(convert("((1))"), "1");
    assert_eq!(convert("1 - (2 - (3 - 4))"), "1 2 3 4 - - -");
}

#[test]
fn custom_tables_change_grouping() {
    // Addition above multiplication.
    let table = PrecedenceTable::new(2, 1, 1);
    assert_eq!(convert_with("2 * 3 + 4", table), "2 3 4 + *");
}

#[test]
fn stray_parentheses_are_rejected() {
    let closing_first = [Token::RightParen, Token::Number(1), Token::LeftParen];
    assert!(matches!(to_postfix(&closing_first, &PrecedenceTable::DEFAULT),
                     Err(ParseError::MisplacedParenthesis { ref fragment }) if fragment == ") 1 ("));

    let never_closed = [Token::LeftParen, Token::Number(1)];
    assert!(matches!(to_postfix(&never_closed, &PrecedenceTable::DEFAULT),
                     Err(ParseError::MisplacedParenthesis { .. })));
}

#[test]
fn postfix_reduces_with_left_operand_pushed_first() {
    let postfix = [Token::Number(10),
                   Token::Number(4),
                   Token::Operator(Operator::Sub),
                   Token::Number(2),
                   Token::Operator(Operator::Div)];
    assert_eq!(eval_postfix(&postfix, &VariableStore::new()).unwrap(), 3);
}

#[test]
fn postfix_resolves_variables() {
    let mut variables = VariableStore::new();
    variables.set("w", 6);
    let postfix = [Token::Identifier("w".to_string()),
                   Token::Identifier("w".to_string()),
                   Token::Operator(Operator::Mul)];
    assert_eq!(eval_postfix(&postfix, &variables).unwrap(), 36);

    let missing = [Token::Identifier("v".to_string())];
    assert_eq!(eval_postfix(&missing, &variables).unwrap_err(),
               RuntimeError::UnknownVariable { name: "v".to_string() });
}

#[test]
fn postfix_stack_mismatches_are_errors() {
    let variables = VariableStore::new();

    let underflow = [Token::Number(1), Token::Operator(Operator::Add)];
    assert_eq!(eval_postfix(&underflow, &variables).unwrap_err(),
               RuntimeError::StackUnderflow { op: Operator::Add });

    let dangling = [Token::Number(1), Token::Number(2), Token::Number(3), Token::Operator(Operator::Mul)];
    assert_eq!(eval_postfix(&dangling, &variables).unwrap_err(),
               RuntimeError::DanglingOperands { count: 2 });

    let paren = [Token::Number(1), Token::LeftParen];
    assert_eq!(eval_postfix(&paren, &variables).unwrap_err(),
               RuntimeError::NotAnOperand { token: "(".to_string() });
}

#[test]
fn arithmetic_is_checked() {
    assert_eq!(apply(Operator::Add, 2, 3).unwrap(), 5);
    assert_eq!(apply(Operator::Sub, 2, 3).unwrap(), -1);
    assert_eq!(apply(Operator::Mul, -4, 3).unwrap(), -12);
    assert_eq!(apply(Operator::Div, 7, -2).unwrap(), -3);

    assert_eq!(apply(Operator::Div, 3, 0).unwrap_err(),
               RuntimeError::DivisionByZero { dividend: 3 });
    assert_eq!(apply(Operator::Div, i64::MIN, -1).unwrap_err(),
               RuntimeError::Overflow { left:  i64::MIN,
                                        op:    Operator::Div,
                                        right: -1, });
    assert!(matches!(apply(Operator::Mul, i64::MAX, 2),
                     Err(RuntimeError::Overflow { .. })));
}
