use crate::atomic::{Atomic, describe};
use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{ParseResult, Parser};

/// Parser that matches an exact sequence of elements
///
/// Yields the matched part of the input, not a copy of the pattern.
///
/// ```
/// use pint::{Cursor, Parser, literal::literal};
///
/// let data = b"let x";
/// let (keyword, cursor) = literal(b"let").parse(Cursor::new(data)).unwrap();
/// assert_eq!(keyword, b"let");
/// assert_eq!(cursor.position(), 3);
/// ```
pub struct Literal<'s, T> {
    expected: &'s [T],
}

impl<'s, T> Literal<'s, T> {
    pub fn new(expected: &'s [T]) -> Self {
        Literal { expected }
    }
}

impl<'code, T> Parser<'code> for Literal<'_, T>
where
    T: Atomic + 'code,
{
    type Element = T;
    type Output = &'code [T];

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, &'code [T]> {
        let rest = cursor.rest();
        let matched = rest
            .iter()
            .zip(self.expected)
            .take_while(|(found, wanted)| found == wanted)
            .count();

        if matched < self.expected.len() {
            // Report at the first element that differs, or where input ran out
            let at = cursor.advance(matched)?;
            return Err(Failure::expected(at.location(), describe(self.expected)));
        }

        let end = cursor.advance(matched)?;
        Ok((cursor.slice(cursor.position(), end.position())?, end))
    }
}

/// Match `expected` exactly
pub fn literal<T>(expected: &[T]) -> Literal<'_, T> {
    Literal::new(expected)
}

/// Match the UTF-8 bytes of `expected` against byte input
pub fn text(expected: &str) -> Literal<'_, u8> {
    Literal::new(expected.as_bytes())
}
