use crate::cursor::Cursor;
use crate::parser::{HintedResult, ParseResult, Parser, merge_hints, unhinted};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. This is due
/// to Rust's lack of variadic generics. The destructuring pattern is explicit
/// about the parsing order.
///
/// Example:
/// ```
/// use pint::ascii::u64;
/// use pint::literal::text;
/// use pint::prelude::*;
/// use pint::Cursor;
///
/// let data = b"123.456";
/// let (((int_part, _), frac_part), cursor) = u64()
///     .and(text("."))
///     .and(u64())
///     .parse(Cursor::new(data)).unwrap();
/// assert_eq!(int_part, 123);
/// assert_eq!(frac_part, 456);
/// assert!(cursor.is_eof());
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Element = P1::Element>,
{
    type Element = P1::Element;
    type Output = (P1::Output, P2::Output);

    fn parse(
        &self,
        cursor: Cursor<'code, P1::Element>,
    ) -> ParseResult<'code, P1::Element, Self::Output> {
        unhinted(self.parse_hinted(cursor))
    }

    fn parse_hinted(
        &self,
        cursor: Cursor<'code, P1::Element>,
    ) -> HintedResult<'code, P1::Element, Self::Output> {
        let (result1, cursor, hint1) = self.parser1.parse_hinted(cursor)?;
        let (result2, cursor, hint2) = match self.parser2.parse_hinted(cursor) {
            Ok(success) => success,
            Err(failure) => return Err(failure.merge_hint(hint1)),
        };
        Ok(((result1, result2), cursor, merge_hints(hint1, hint2, cursor)))
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Element = P1::Element>,
{
    And::new(parser1, parser2)
}

/// Sequence two parsers and keep only the second result
pub struct Preceded<P1, P2> {
    prefix: P1,
    parser: P2,
}

impl<'code, P1, P2> Parser<'code> for Preceded<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Element = P1::Element>,
{
    type Element = P1::Element;
    type Output = P2::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, P1::Element>,
    ) -> ParseResult<'code, P1::Element, P2::Output> {
        unhinted(self.parse_hinted(cursor))
    }

    fn parse_hinted(
        &self,
        cursor: Cursor<'code, P1::Element>,
    ) -> HintedResult<'code, P1::Element, P2::Output> {
        let (_, cursor, hint1) = self.prefix.parse_hinted(cursor)?;
        let (value, cursor, hint2) = match self.parser.parse_hinted(cursor) {
            Ok(success) => success,
            Err(failure) => return Err(failure.merge_hint(hint1)),
        };
        Ok((value, cursor, merge_hints(hint1, hint2, cursor)))
    }
}

pub fn preceded<'code, P1, P2>(prefix: P1, parser: P2) -> Preceded<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Element = P1::Element>,
{
    Preceded { prefix, parser }
}

/// Sequence two parsers and keep only the first result
pub struct Terminated<P1, P2> {
    parser: P1,
    suffix: P2,
}

impl<'code, P1, P2> Parser<'code> for Terminated<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Element = P1::Element>,
{
    type Element = P1::Element;
    type Output = P1::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, P1::Element>,
    ) -> ParseResult<'code, P1::Element, P1::Output> {
        unhinted(self.parse_hinted(cursor))
    }

    fn parse_hinted(
        &self,
        cursor: Cursor<'code, P1::Element>,
    ) -> HintedResult<'code, P1::Element, P1::Output> {
        let (value, cursor, hint1) = self.parser.parse_hinted(cursor)?;
        let (_, cursor, hint2) = match self.suffix.parse_hinted(cursor) {
            Ok(success) => success,
            Err(failure) => return Err(failure.merge_hint(hint1)),
        };
        Ok((value, cursor, merge_hints(hint1, hint2, cursor)))
    }
}

pub fn terminated<'code, P1, P2>(parser: P1, suffix: P2) -> Terminated<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Element = P1::Element>,
{
    Terminated { parser, suffix }
}

/// Extension trait to add .and(), .then_ignore() and .ignore_then() to parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code, Element = Self::Element>,
    {
        And::new(self, other)
    }

    /// Parse `other` after `self`, keeping only this parser's value
    fn then_ignore<P>(self, other: P) -> Terminated<Self, P>
    where
        P: Parser<'code, Element = Self::Element>,
    {
        terminated(self, other)
    }

    /// Parse `other` after `self`, keeping only `other`'s value
    fn ignore_then<P>(self, other: P) -> Preceded<Self, P>
    where
        P: Parser<'code, Element = Self::Element>,
    {
        preceded(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
