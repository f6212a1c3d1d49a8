use crate::cursor::Cursor;
use crate::error::{Failure, ParseError};
use crate::parser::{HintedResult, ParseResult, Parser, unhinted};
use std::borrow::Cow;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Element = P::Element;
    type Output = U;

    fn parse(&self, cursor: Cursor<'code, P::Element>) -> ParseResult<'code, P::Element, U> {
        unhinted(self.parse_hinted(cursor))
    }

    fn parse_hinted(
        &self,
        cursor: Cursor<'code, P::Element>,
    ) -> HintedResult<'code, P::Element, U> {
        let (value, cursor, hint) = self.parser.parse_hinted(cursor)?;
        Ok(((self.mapper)(value), cursor, hint))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Parser combinator whose mapping function may reject the value
///
/// A rejection is a recoverable failure at the position where the inner
/// parser started, carrying the returned message.
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        TryMap { parser, mapper }
    }
}

impl<'code, P, F, U, E> Parser<'code> for TryMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Result<U, E>,
    E: Into<Cow<'static, str>>,
{
    type Element = P::Element;
    type Output = U;

    fn parse(&self, cursor: Cursor<'code, P::Element>) -> ParseResult<'code, P::Element, U> {
        unhinted(self.parse_hinted(cursor))
    }

    fn parse_hinted(
        &self,
        cursor: Cursor<'code, P::Element>,
    ) -> HintedResult<'code, P::Element, U> {
        let (value, after, hint) = self.parser.parse_hinted(cursor)?;
        match (self.mapper)(value) {
            Ok(mapped) => Ok((mapped, after, hint)),
            Err(message) => {
                let rejected = Failure::Recoverable(ParseError::custom(cursor.location(), message));
                Err(rejected.merge_hint(hint))
            }
        }
    }
}

pub fn try_map<'code, P, F, U, E>(parser: P, mapper: F) -> TryMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Result<U, E>,
    E: Into<Cow<'static, str>>,
{
    TryMap::new(parser, mapper)
}

/// Extension trait to add .map() and .try_map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn try_map<F, U, E>(self, mapper: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, E>,
        E: Into<Cow<'static, str>>,
    {
        TryMap::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
