use std::iter::repeat_n;

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        store::VariableStore,
        token::{Operator, Token, render},
    },
};

/// Result type used while reading expressions.
pub type ParseResult<T> = Result<T, ParseError>;

/// A lexical piece of a single whitespace-separated word.
///
/// Words are lexed independently: `(12` yields `LParen` then `Digits`, and
/// the tokenizer decides from the sequence of pieces whether the word as a
/// whole is acceptable.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Piece {
    /// A run of decimal digits, such as `42`.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Digits(String),
    /// A run of ASCII letters; a variable name such as `total`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Name(String),
    /// A run of signs such as `-`, `---` or `++`.
    #[regex(r"[+\-]+", |lex| lex.slice().to_string())]
    Signs(String),
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Splits an expression into tokens.
///
/// The expression is split on whitespace and each word is classified on its
/// own:
///
/// - a lone run of `+` or `-` is folded to a single sign (see
///   [`fold_signs`]); if it directly follows another `+` or `-` it replaces
///   that operator;
/// - a lone `*`, `/`, `(` or `)` passes through;
/// - otherwise the word must be an operand (an integer literal or a name in
///   `variables`), optionally preceded by a sign run, wrapped in any number of
///   leading `(` and trailing `)`.
///
/// A sign run glued to an operand is a binary operator when it follows a
/// value (`5 ---3` is `5 - 3`) and the operand's own sign otherwise (`-3`,
/// `2 * -3`). A negated variable expands to `( -1 * name )`.
///
/// # Errors
/// - `UnexpectedWord` for any word that fits none of the shapes above.
/// - `UnknownVariable` for a name that is not in `variables`.
/// - `MixedSignRun` for runs such as `+-`.
/// - `LiteralTooLarge` for literals outside the `i64` range.
/// - `UnbalancedParentheses` if the counts of `(` and `)` differ.
///
/// # Example
/// ```
/// use tally::interpreter::{
///     lexer::tokenize,
///     store::VariableStore,
///     token::{Operator, Token},
/// };
///
/// let mut variables = VariableStore::new();
/// variables.set("x", 3);
///
/// let tokens = tokenize("(x --- 2)", &variables).unwrap();
/// assert_eq!(tokens,
///            vec![Token::LeftParen,
///                 Token::Identifier("x".to_string()),
///                 Token::Operator(Operator::Sub),
///                 Token::Number(2),
///                 Token::RightParen]);
/// ```
pub fn tokenize(expression: &str, variables: &VariableStore) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();

    for word in expression.split_whitespace() {
        push_word(word, variables, &mut tokens)?;
    }

    let opened = tokens.iter().filter(|t| **t == Token::LeftParen).count();
    let closed = tokens.iter().filter(|t| **t == Token::RightParen).count();
    if opened != closed {
        return Err(ParseError::UnbalancedParentheses { expression: expression.to_string() });
    }

    log::debug!("tokens: {}", render(&tokens));
    Ok(tokens)
}

/// Folds a run of signs into the operator it stands for.
///
/// Repeated `-` is successive negation, so an odd run is `-` and an even run
/// is `+`. Any run of `+` is `+`.
///
/// # Errors
/// `MixedSignRun` if the run contains both `+` and `-`, and `UnexpectedWord`
/// if it is empty or contains anything else.
///
/// # Example
/// ```
/// use tally::interpreter::{lexer::fold_signs, token::Operator};
///
/// assert_eq!(fold_signs("-").unwrap(), Operator::Sub);
/// assert_eq!(fold_signs("--").unwrap(), Operator::Add);
/// assert_eq!(fold_signs("---").unwrap(), Operator::Sub);
/// assert_eq!(fold_signs("+++").unwrap(), Operator::Add);
/// assert!(fold_signs("+-").is_err());
/// ```
pub fn fold_signs(run: &str) -> ParseResult<Operator> {
    if run.is_empty() || !run.chars().all(|c| c == '+' || c == '-') {
        return Err(ParseError::UnexpectedWord { word: run.to_string() });
    }

    let minus = run.chars().filter(|&c| c == '-').count();
    if minus > 0 && minus < run.len() {
        return Err(ParseError::MixedSignRun { run: run.to_string() });
    }

    Ok(if minus % 2 == 1 { Operator::Sub } else { Operator::Add })
}

fn lex_word(word: &str) -> ParseResult<Vec<Piece>> {
    Piece::lexer(word).collect::<Result<Vec<_>, _>>()
                      .map_err(|()| ParseError::UnexpectedWord { word: word.to_string() })
}

fn push_word(word: &str, variables: &VariableStore, tokens: &mut Vec<Token>) -> ParseResult<()> {
    let pieces = lex_word(word)?;

    match pieces.as_slice() {
        [Piece::Signs(run)] => push_sign_run(run, tokens)?,
        [Piece::Star] => tokens.push(Token::Operator(Operator::Mul)),
        [Piece::Slash] => tokens.push(Token::Operator(Operator::Div)),
        [Piece::LParen] => tokens.push(Token::LeftParen),
        [Piece::RParen] => tokens.push(Token::RightParen),
        _ => push_operand_word(word, &pieces, variables, tokens)?,
    }

    Ok(())
}

fn push_sign_run(run: &str, tokens: &mut Vec<Token>) -> ParseResult<()> {
    let op = fold_signs(run)?;

    if let Some(Token::Operator(previous)) = tokens.last_mut()
       && previous.is_sign()
    {
        log::debug!("'{run}' replaces the pending '{previous}'");
        *previous = op;
    } else {
        tokens.push(Token::Operator(op));
    }

    Ok(())
}

/// Handles `(`* `signs`? operand `)`*.
fn push_operand_word(word: &str,
                     pieces: &[Piece],
                     variables: &VariableStore,
                     tokens: &mut Vec<Token>)
                     -> ParseResult<()> {
    let unexpected = || ParseError::UnexpectedWord { word: word.to_string() };

    let opening = pieces.iter().take_while(|p| **p == Piece::LParen).count();
    let closing = pieces[opening..].iter()
                                   .rev()
                                   .take_while(|p| **p == Piece::RParen)
                                   .count();
    let core = &pieces[opening..pieces.len() - closing];

    let (mut sign, operand) = match core {
        [operand] => (None, operand),
        [Piece::Signs(run), operand] => (Some(fold_signs(run)?), operand),
        _ => return Err(unexpected()),
    };

    tokens.extend(repeat_n(Token::LeftParen, opening));

    if let Some(op) = sign
       && follows_operand(tokens)
    {
        tokens.push(Token::Operator(op));
        sign = None;
    }
    let negate = sign == Some(Operator::Sub);

    match operand {
        Piece::Digits(digits) => {
            let value = parse_literal(word, digits)?;
            tokens.push(Token::Number(if negate { -value } else { value }));
        },
        Piece::Name(name) => {
            if !variables.contains(name) {
                return Err(ParseError::UnknownVariable { name: name.clone() });
            }
            if negate {
                tokens.extend([Token::LeftParen,
                               Token::Number(-1),
                               Token::Operator(Operator::Mul),
                               Token::Identifier(name.clone()),
                               Token::RightParen]);
            } else {
                tokens.push(Token::Identifier(name.clone()));
            }
        },
        _ => return Err(unexpected()),
    }

    tokens.extend(repeat_n(Token::RightParen, closing));
    Ok(())
}

/// `true` when the next sign would be a binary operator.
fn follows_operand(tokens: &[Token]) -> bool {
    matches!(tokens.last(),
             Some(Token::Number(_) | Token::Identifier(_) | Token::RightParen))
}

fn parse_literal(word: &str, digits: &str) -> ParseResult<i64> {
    digits.parse()
          .map_err(|_| ParseError::LiteralTooLarge { literal: word.to_string() })
}
