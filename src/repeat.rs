use crate::cursor::Cursor;
use crate::error::{Failure, GrammarError, ParseError};
use crate::many::collect;
use crate::parser::{HintedResult, ParseResult, Parser, unhinted};

/// Parser combinator that matches between `min` and `max` occurrences
///
/// `max` of `None` leaves the count unbounded. The repetition stops as soon as
/// `max` values were collected, even if more would match.
pub struct Repeat<P> {
    parser: P,
    min: usize,
    max: Option<usize>,
}

impl<P> Repeat<P> {
    pub fn new(parser: P, min: usize, max: Option<usize>) -> Self {
        Repeat { parser, min, max }
    }
}

impl<'code, P> Parser<'code> for Repeat<P>
where
    P: Parser<'code>,
{
    type Element = P::Element;
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        cursor: Cursor<'code, P::Element>,
    ) -> ParseResult<'code, P::Element, Self::Output> {
        unhinted(self.parse_hinted(cursor))
    }

    fn parse_hinted(
        &self,
        cursor: Cursor<'code, P::Element>,
    ) -> HintedResult<'code, P::Element, Self::Output> {
        if let Some(max) = self.max {
            if max < self.min {
                return Err(GrammarError::InvalidRepetition { min: self.min, max }.into());
            }
        }

        let (values, end, hint) = collect(&self.parser, cursor, self.max)?;
        if values.len() < self.min {
            let error = hint.unwrap_or_else(|| ParseError::new(end.location()));
            return Err(Failure::Recoverable(error));
        }
        Ok((values, end, hint))
    }
}

/// Match `parser` at least `min` and at most `max` times
pub fn repeat<'code, P>(parser: P, min: usize, max: Option<usize>) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(parser, min, max)
}

/// Match `parser` exactly `count` times
pub fn count<'code, P>(parser: P, count: usize) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(parser, count, Some(count))
}

pub trait RepeatExt<'code>: Parser<'code> + Sized {
    fn repeat(self, min: usize, max: Option<usize>) -> Repeat<Self> {
        Repeat::new(self, min, max)
    }
}

impl<'code, P> RepeatExt<'code> for P where P: Parser<'code> {}
