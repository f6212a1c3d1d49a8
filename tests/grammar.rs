//! Whole grammars run end to end: an arithmetic expression language over
//! bytes and a small token language

use pint::ascii::{i64, lexeme, padded};
use pint::cut::cut;
use pint::lazy::lazy;
use pint::literal::{literal, text};
use pint::prelude::*;
use pint::primitive::one_of;
use pint::separated_list::separated_by1;
use pint::{
    Atomic, BoxedParser, Cursor, Failure, GrammarError, RunConfig, RunError, boxed, from_fn, run,
    run_with_config,
};
use rstest::rstest;

fn apply(acc: i64, (op, value): (u8, i64)) -> i64 {
    match op {
        b'+' => acc + value,
        b'-' => acc - value,
        b'*' => acc * value,
        _ => acc / value,
    }
}

// expr := term (("+" | "-") term)*
fn expr<'code>() -> BoxedParser<'code, 'code, u8, i64> {
    boxed(
        term()
            .and(lexeme(one_of(b"+-")).and(term()).many())
            .map(|(first, rest)| rest.into_iter().fold(first, apply)),
    )
}

// term := factor (("*" | "/") factor)*
fn term<'code>() -> BoxedParser<'code, 'code, u8, i64> {
    boxed(
        factor()
            .and(lexeme(one_of(b"*/")).and(factor()).many())
            .map(|(first, rest)| rest.into_iter().fold(first, apply)),
    )
}

// factor := number | "(" expr ")"
fn factor<'code>() -> BoxedParser<'code, 'code, u8, i64> {
    let number = lexeme(i64()).label("number");
    let group = lexeme(text("("))
        .ignore_then(cut(lazy(expr)))
        .then_ignore(cut(lexeme(text(")"))));
    boxed(number.or(group))
}

fn program<'code>() -> impl Parser<'code, Element = u8, Output = i64> {
    padded(expr())
}

#[rstest]
#[case("1", 1)]
#[case("1 + 2 * 3", 7)]
#[case("(1 + 2) * 3", 9)]
#[case("10 / 2 - 3", 2)]
#[case("-4 * (2 + -1)", -4)]
#[case(" ( ( 7 ) ) ", 7)]
#[case("2*3*4", 24)]
fn test_arithmetic(#[case] input: &str, #[case] expected: i64) {
    assert_eq!(run(&program(), input).unwrap(), expected);
}

#[test]
fn test_unclosed_group_is_committed() {
    let error = run(&program(), "(1 + 2").unwrap_err();
    assert!(error.is_committed());

    // An operator could also continue the expression at the same offset
    let error = error.parse_error().unwrap();
    assert_eq!(error.position(), 6);
    assert_eq!(
        error.expected().collect::<Vec<_>>(),
        vec!["\")\"", "one of \"*/\"", "one of \"+-\""]
    );
}

#[test]
fn test_empty_group_is_committed() {
    let error = run(&program(), "()").unwrap_err();
    assert!(error.is_committed());

    let error = error.parse_error().unwrap();
    assert_eq!(error.position(), 1);
    assert_eq!(error.expected().collect::<Vec<_>>(), vec!["\"(\"", "number"]);
}

#[rstest]
#[case("1 2", 2)]
#[case("(3) 4", 4)]
fn test_trailing_input(#[case] input: &str, #[case] position: usize) {
    let error = run(&program(), input).unwrap_err();
    assert!(!error.is_committed());

    let error = error.parse_error().unwrap();
    assert_eq!(error.position(), position);
    assert_eq!(
        error.expected().collect::<Vec<_>>(),
        vec!["end of input", "one of \"*/\"", "one of \"+-\""]
    );
}

#[test]
fn test_missing_operand_beats_trailing_input() {
    let error = run(&program(), "1 + ").unwrap_err();
    assert!(!error.is_committed());

    // The operator loop stopped at the missing operand, past where the
    // expression ended
    let error = error.parse_error().unwrap();
    assert_eq!(error.position(), 4);
    assert_eq!(error.expected().collect::<Vec<_>>(), vec!["\"(\"", "number"]);
}

#[test]
fn test_empty_input() {
    let error = run(&program(), "").unwrap_err();
    let error = error.parse_error().unwrap();

    assert_eq!(error.position(), 0);
    assert_eq!(error.expected().collect::<Vec<_>>(), vec!["\"(\"", "number"]);
}

#[test]
fn test_nesting_within_limit() {
    let config = RunConfig::default().with_max_depth(4);
    assert_eq!(run_with_config(&program(), "((((1))))", config).unwrap(), 1);
}

#[test]
fn test_nesting_past_limit() {
    let config = RunConfig::default().with_max_depth(4);
    let error = run_with_config(&program(), "((((((1))))))", config).unwrap_err();

    assert!(matches!(
        error,
        RunError::Grammar(GrammarError::RecursionLimit { limit: 4, position: 5 })
    ));
}

#[test]
fn test_deep_nesting_with_default_limit() {
    let depth = 50;
    let input = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(run(&program(), &input).unwrap(), 1);
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Num(i64),
    Plus,
}

impl Atomic for Token {}

const PLUS: &[Token] = &[Token::Plus];

fn number<'code>() -> impl Parser<'code, Element = Token, Output = i64> {
    from_fn(|cursor: Cursor<'code, Token>| match cursor.peek() {
        Some(Token::Num(n)) => Ok((*n, cursor.advance(1)?)),
        _ => Err(Failure::expected(cursor.location(), "number")),
    })
}

fn sum<'code>() -> impl Parser<'code, Element = Token, Output = i64> {
    separated_by1(number(), literal(PLUS)).map(|values| values.into_iter().sum::<i64>())
}

#[test]
fn test_token_sum() {
    let tokens = [Token::Num(1), Token::Plus, Token::Num(2), Token::Plus, Token::Num(39)];
    assert_eq!(run(&sum(), &tokens[..]).unwrap(), 42);
}

#[test]
fn test_token_dangling_plus() {
    let tokens = [Token::Num(1), Token::Plus, Token::Plus];
    let error = run(&sum(), &tokens[..]).unwrap_err();

    assert_eq!(error.parse_error().unwrap().position(), 2);
    assert_eq!(error.to_string(), "error at offset 2: expected number");
}

#[test]
fn test_token_empty() {
    let tokens: Vec<Token> = Vec::new();
    let error = run(&sum(), &tokens).unwrap_err();

    assert_eq!(error.to_string(), "error at offset 0: expected number");
}
