use crate::cursor::Cursor;
use crate::error::{Failure, ParseError};
use crate::parser::{HintedResult, ParseResult, Parser, merge_hints, unhinted};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Only a recoverable failure of the first parser lets the second one run,
/// from the same cursor. When both fail, the errors are merged so the one
/// that got furthest into the input is reported; at the same position their
/// expectations are combined.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Element = P1::Element, Output = P1::Output>,
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
        match self.parser1.parse_hinted(cursor) {
            // The first branch's error stays relevant when the second succeeds
            Err(Failure::Recoverable(first)) => match self.parser2.parse_hinted(cursor) {
                Ok((value, end, hint)) => Ok((value, end, merge_hints(Some(first), hint, end))),
                Err(failure) => Err(failure.merge_earlier(first)),
            },
            result => result,
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Element = Self::Element, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Element = P1::Element, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}

/// Alternation over any number of parsers of one type
///
/// Behaves like a chain of [`or`]. Parsers of different types can be mixed by
/// [`boxed`](crate::parser::boxed) them first.
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<'code, P> Parser<'code> for Choice<P>
where
    P: Parser<'code>,
{
    type Element = P::Element;
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, P::Element>,
    ) -> ParseResult<'code, P::Element, P::Output> {
        unhinted(self.parse_hinted(cursor))
    }

    fn parse_hinted(
        &self,
        cursor: Cursor<'code, P::Element>,
    ) -> HintedResult<'code, P::Element, P::Output> {
        let mut error: Option<ParseError<'code, P::Element>> = None;

        for parser in &self.parsers {
            match parser.parse_hinted(cursor) {
                Err(Failure::Recoverable(current)) => {
                    error = Some(match error {
                        Some(earlier) => earlier.merge(current),
                        None => current,
                    });
                }
                Err(failure) => {
                    return Err(match error {
                        Some(earlier) => failure.merge_earlier(earlier),
                        None => failure,
                    });
                }
                Ok((value, end, hint)) => return Ok((value, end, merge_hints(error, hint, end))),
            }
        }

        Err(Failure::Recoverable(
            error.unwrap_or_else(|| ParseError::new(cursor.location())),
        ))
    }
}

/// Try each parser in order and return the first success
///
/// An empty choice always fails recoverably.
pub fn choice<'code, P>(parsers: impl IntoIterator<Item = P>) -> Choice<P>
where
    P: Parser<'code>,
{
    Choice {
        parsers: parsers.into_iter().collect(),
    }
}
