use crate::and::AndExt;
use crate::parser::Parser;
use crate::primitive::{satisfy, take_while};

fn is_whitespace(b: &u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Parser that matches a single ASCII whitespace character (space, tab, newline, carriage return)
pub fn whitespace<'code>() -> impl Parser<'code, Element = u8, Output = u8> {
    satisfy(is_whitespace, "whitespace")
}

/// Parser that skips zero or more whitespace characters, returning them
pub fn whitespace0<'code>() -> impl Parser<'code, Element = u8, Output = &'code [u8]> {
    take_while(is_whitespace)
}

/// Wrap a token parser so it also consumes the whitespace that follows it
pub fn lexeme<'code, P>(parser: P) -> impl Parser<'code, Element = u8, Output = P::Output>
where
    P: Parser<'code, Element = u8>,
{
    parser.then_ignore(whitespace0())
}

/// Wrap a parser so it skips whitespace on both sides
pub fn padded<'code, P>(parser: P) -> impl Parser<'code, Element = u8, Output = P::Output>
where
    P: Parser<'code, Element = u8>,
{
    whitespace0().ignore_then(parser).then_ignore(whitespace0())
}
