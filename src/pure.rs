use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::{Failure, ParseError};
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that succeeds without consuming anything
pub struct Pure<V, T> {
    value: V,
    _element: PhantomData<fn(&T)>,
}

impl<'code, V, T> Parser<'code> for Pure<V, T>
where
    T: Atomic + 'code,
    V: Clone,
{
    type Element = T;
    type Output = V;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, V> {
        Ok((self.value.clone(), cursor))
    }
}

/// Always succeed with a clone of `value`
pub fn pure<T, V: Clone>(value: V) -> Pure<V, T> {
    Pure {
        value,
        _element: PhantomData,
    }
}

enum Reason {
    Expected(Cow<'static, str>),
    Message(Cow<'static, str>),
}

/// Parser that always fails recoverably at the current position
pub struct Fail<O, T> {
    reason: Reason,
    _marker: PhantomData<fn(&T) -> O>,
}

impl<'code, O, T> Parser<'code> for Fail<O, T>
where
    T: Atomic + 'code,
{
    type Element = T;
    type Output = O;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, O> {
        let error = match &self.reason {
            Reason::Expected(label) => ParseError::expecting(cursor.location(), label.clone()),
            Reason::Message(message) => ParseError::custom(cursor.location(), message.clone()),
        };
        Err(Failure::Recoverable(error))
    }
}

/// Always fail, expecting `label`
pub fn fail<T, O>(label: impl Into<Cow<'static, str>>) -> Fail<O, T> {
    Fail {
        reason: Reason::Expected(label.into()),
        _marker: PhantomData,
    }
}

/// Always fail with a free-form message and no expectation
pub fn unexpected<T, O>(message: impl Into<Cow<'static, str>>) -> Fail<O, T> {
    Fail {
        reason: Reason::Message(message.into()),
        _marker: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_consumes_nothing() {
        let data = b"abc";
        let cursor = Cursor::new(data).advance(1).unwrap();

        let (value, after) = pure(42).parse(cursor).unwrap();
        assert_eq!(value, 42);
        assert_eq!(after.position(), 1);
    }

    #[test]
    fn test_pure_is_reusable() {
        let data = b"";
        let parser = pure(String::from("x"));

        let (first, _) = parser.parse(Cursor::new(data)).unwrap();
        let (second, _) = parser.parse(Cursor::new(data)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fail() {
        let data = b"abc";
        let cursor = Cursor::new(data).advance(2).unwrap();

        let failure = fail::<u8, ()>("body").parse(cursor).unwrap_err();
        assert!(failure.is_recoverable());
        let error = failure.parse_error().unwrap();
        assert_eq!(error.position(), 2);
        assert_eq!(error.expected().collect::<Vec<_>>(), vec!["body"]);
        assert_eq!(error.message(), None);
    }

    #[test]
    fn test_unexpected_carries_message() {
        let data = b"abc";
        let failure = unexpected::<u8, ()>("reserved word")
            .parse(Cursor::new(data))
            .unwrap_err();

        let error = failure.parse_error().unwrap();
        assert_eq!(error.message(), Some("reserved word"));
        assert_eq!(error.expected().count(), 0);
    }
}
