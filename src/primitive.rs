use crate::atomic::{Atomic, describe};
use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::marker::PhantomData;

pub(crate) const END_OF_INPUT: &str = "end of input";

/// Parser that consumes and returns a single element of any kind
pub struct AnyParser<T> {
    _element: PhantomData<fn(&T)>,
}

/// Convenience function to create an AnyParser
pub fn any<T>() -> AnyParser<T> {
    AnyParser {
        _element: PhantomData,
    }
}

impl<'code, T> Parser<'code> for AnyParser<T>
where
    T: Atomic + Clone + 'code,
{
    type Element = T;
    type Output = T;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, T> {
        match cursor.peek() {
            Some(element) => Ok((element.clone(), cursor.advance(1)?)),
            None => Err(Failure::expected(cursor.location(), "any element")),
        }
    }
}

/// Parser that matches a single element satisfying a predicate
pub struct Satisfy<F, T> {
    predicate: F,
    label: Cow<'static, str>,
    _element: PhantomData<fn(&T)>,
}

impl<'code, F, T> Parser<'code> for Satisfy<F, T>
where
    T: Atomic + Clone + 'code,
    F: Fn(&T) -> bool,
{
    type Element = T;
    type Output = T;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, T> {
        match cursor.peek() {
            Some(element) if (self.predicate)(element) => {
                Ok((element.clone(), cursor.advance(1)?))
            }
            _ => Err(Failure::expected(cursor.location(), self.label.clone())),
        }
    }
}

/// Match one element for which `predicate` holds
///
/// On mismatch, including at end of input, the failure is recoverable and
/// expects `label`.
pub fn satisfy<T, F>(predicate: F, label: impl Into<Cow<'static, str>>) -> Satisfy<F, T>
where
    F: Fn(&T) -> bool,
{
    Satisfy {
        predicate,
        label: label.into(),
        _element: PhantomData,
    }
}

/// Parser that matches one element of (or not of) a set
pub struct OneOf<'s, T> {
    set: &'s [T],
    negate: bool,
    label: Cow<'static, str>,
}

impl<'code, T> Parser<'code> for OneOf<'_, T>
where
    T: Atomic + Clone + 'code,
{
    type Element = T;
    type Output = T;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, T> {
        match cursor.peek() {
            Some(element) if self.set.contains(element) != self.negate => {
                Ok((element.clone(), cursor.advance(1)?))
            }
            _ => Err(Failure::expected(cursor.location(), self.label.clone())),
        }
    }
}

/// Match one element contained in `set`
pub fn one_of<T: Atomic>(set: &[T]) -> OneOf<'_, T> {
    OneOf {
        set,
        negate: false,
        label: format!("one of {}", describe(set)).into(),
    }
}

/// Match one element not contained in `set`
pub fn none_of<T: Atomic>(set: &[T]) -> OneOf<'_, T> {
    OneOf {
        set,
        negate: true,
        label: format!("none of {}", describe(set)).into(),
    }
}

/// Parser that consumes exactly `count` elements
pub struct Take<T> {
    count: usize,
    _element: PhantomData<fn(&T)>,
}

impl<'code, T> Parser<'code> for Take<T>
where
    T: Atomic + 'code,
{
    type Element = T;
    type Output = &'code [T];

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, &'code [T]> {
        if cursor.remaining() < self.count {
            let label = format!("{} more elements", self.count);
            return Err(Failure::expected(cursor.location(), label));
        }
        let end = cursor.advance(self.count)?;
        Ok((cursor.slice(cursor.position(), end.position())?, end))
    }
}

/// Consume exactly `count` elements and return them as a slice of the input
pub fn take<T>(count: usize) -> Take<T> {
    Take {
        count,
        _element: PhantomData,
    }
}

/// Parser that consumes elements while a predicate holds
pub struct TakeWhile<F, T> {
    predicate: F,
    /// `Some` when at least one element is required
    label: Option<Cow<'static, str>>,
    _element: PhantomData<fn(&T)>,
}

impl<'code, F, T> Parser<'code> for TakeWhile<F, T>
where
    T: Atomic + 'code,
    F: Fn(&T) -> bool,
{
    type Element = T;
    type Output = &'code [T];

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, &'code [T]> {
        let count = cursor
            .rest()
            .iter()
            .take_while(|element| (self.predicate)(element))
            .count();

        if count == 0 {
            if let Some(label) = &self.label {
                return Err(Failure::expected(cursor.location(), label.clone()));
            }
        }

        let end = cursor.advance(count)?;
        Ok((cursor.slice(cursor.position(), end.position())?, end))
    }
}

/// Consume zero or more elements satisfying `predicate`
pub fn take_while<T, F>(predicate: F) -> TakeWhile<F, T>
where
    F: Fn(&T) -> bool,
{
    TakeWhile {
        predicate,
        label: None,
        _element: PhantomData,
    }
}

/// Consume one or more elements satisfying `predicate`
pub fn take_while1<T, F>(predicate: F, label: impl Into<Cow<'static, str>>) -> TakeWhile<F, T>
where
    F: Fn(&T) -> bool,
{
    TakeWhile {
        predicate,
        label: Some(label.into()),
        _element: PhantomData,
    }
}

/// Parser that only succeeds at the end of input
pub struct EndOfInput<T> {
    _element: PhantomData<fn(&T)>,
}

impl<'code, T> Parser<'code> for EndOfInput<T>
where
    T: Atomic + 'code,
{
    type Element = T;
    type Output = ();

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, ()> {
        if cursor.is_eof() {
            Ok(((), cursor))
        } else {
            Err(Failure::expected(cursor.location(), END_OF_INPUT))
        }
    }
}

pub fn end_of_input<T>() -> EndOfInput<T> {
    EndOfInput {
        _element: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_labels<T: Atomic>(failure: &Failure<'_, T>) -> Vec<String> {
        failure
            .parse_error()
            .unwrap()
            .expected()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_any() {
        let data = b"ab";
        let (value, cursor) = any().parse(Cursor::new(data)).unwrap();
        assert_eq!(value, b'a');
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_any_at_eof() {
        let data = b"";
        let failure = any::<u8>().parse(Cursor::new(data)).unwrap_err();
        assert!(failure.is_recoverable());
        assert_eq!(expected_labels(&failure), vec!["any element"]);
    }

    #[test]
    fn test_satisfy_success() {
        let data = b"7x";
        let parser = satisfy(|b: &u8| b.is_ascii_digit(), "digit");

        let (digit, cursor) = parser.parse(Cursor::new(data)).unwrap();
        assert_eq!(digit, b'7');
        assert_eq!(cursor.peek(), Some(&b'x'));
    }

    #[test]
    fn test_satisfy_failure_does_not_consume() {
        let data = b"x7";
        let parser = satisfy(|b: &u8| b.is_ascii_digit(), "digit");

        let failure = parser.parse(Cursor::new(data)).unwrap_err();
        assert!(failure.is_recoverable());
        assert_eq!(failure.parse_error().unwrap().position(), 0);
        assert_eq!(expected_labels(&failure), vec!["digit"]);
    }

    #[test]
    fn test_satisfy_at_eof() {
        let data = b"";
        let parser = satisfy(|b: &u8| b.is_ascii_digit(), "digit");

        let failure = parser.parse(Cursor::new(data)).unwrap_err();
        assert!(failure.is_recoverable());
        assert_eq!(expected_labels(&failure), vec!["digit"]);
    }

    #[test]
    fn test_satisfy_chars() {
        let data: Vec<char> = "λx".chars().collect();
        let parser = satisfy(|c: &char| c.is_alphabetic(), "letter");

        let (letter, cursor) = parser.parse(Cursor::new(&data)).unwrap();
        assert_eq!(letter, 'λ');
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_one_of() {
        let data = b"+1";
        let parser = one_of(b"+-");

        let (sign, cursor) = parser.parse(Cursor::new(data)).unwrap();
        assert_eq!(sign, b'+');

        let failure = parser.parse(cursor).unwrap_err();
        assert_eq!(expected_labels(&failure), vec!["one of \"+-\""]);
    }

    #[test]
    fn test_none_of() {
        let data = b"a\"";
        let parser = none_of(b"\"");

        let (value, cursor) = parser.parse(Cursor::new(data)).unwrap();
        assert_eq!(value, b'a');
        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_take() {
        let data = b"abcd";
        let (taken, cursor) = take(3).parse(Cursor::new(data)).unwrap();
        assert_eq!(taken, b"abc");
        assert_eq!(cursor.position(), 3);

        let failure = take::<u8>(2).parse(cursor).unwrap_err();
        assert!(failure.is_recoverable());
        assert_eq!(expected_labels(&failure), vec!["2 more elements"]);
    }

    #[test]
    fn test_take_while() {
        let data = b"123abc";
        let parser = take_while(|b: &u8| b.is_ascii_digit());

        let (digits, cursor) = parser.parse(Cursor::new(data)).unwrap();
        assert_eq!(digits, b"123");

        // Zero matches is still a success
        let (none, after) = parser.parse(cursor).unwrap();
        assert_eq!(none, b"");
        assert_eq!(after.position(), 3);
    }

    #[test]
    fn test_take_while1_requires_one() {
        let data = b"abc";
        let parser = take_while1(|b: &u8| b.is_ascii_digit(), "digits");

        let failure = parser.parse(Cursor::new(data)).unwrap_err();
        assert_eq!(expected_labels(&failure), vec!["digits"]);
    }

    #[test]
    fn test_end_of_input() {
        let data = b"a";
        let cursor = Cursor::new(data);

        let failure = end_of_input().parse(cursor).unwrap_err();
        assert!(failure.is_recoverable());
        assert_eq!(expected_labels(&failure), vec![END_OF_INPUT]);

        let at_end = cursor.advance(1).unwrap();
        let ((), after) = end_of_input().parse(at_end).unwrap();
        assert!(after.is_eof());
    }
}
