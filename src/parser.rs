use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::{Failure, ParseError};
use std::marker::PhantomData;

/// Outcome of a single parser invocation
///
/// `Ok((value, cursor))` carries the cursor after consumption.
pub type ParseResult<'code, T, O> = Result<(O, Cursor<'code, T>), Failure<'code, T>>;

/// The furthest recoverable error a successful parse stepped over
pub type Hint<'code, T> = Option<ParseError<'code, T>>;

/// Outcome of [`Parser::parse_hinted`]: a success also carries its [`Hint`]
pub type HintedResult<'code, T, O> =
    Result<(O, Cursor<'code, T>, Hint<'code, T>), Failure<'code, T>>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    /// The type of input elements this parser reads
    type Element: Atomic + 'code;
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the advanced cursor on success. Parsers
    /// hold no mutable state: the same cursor always gives the same result.
    fn parse(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> ParseResult<'code, Self::Element, Self::Output>;

    /// Like [`parse`](Parser::parse), but a success keeps the furthest
    /// recoverable error met on the way
    ///
    /// Repetitions, `optional` and alternation succeed by stopping at a
    /// recoverable failure. That failure can lie further into the input than
    /// whatever fails next, so sequencing combinators merge the hint into the
    /// next failure instead of dropping it.
    fn parse_hinted(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> HintedResult<'code, Self::Element, Self::Output> {
        self.parse(cursor).map(|(value, cursor)| (value, cursor, None))
    }
}

/// Drop the hint of a hinted success
pub(crate) fn unhinted<'code, T: Atomic, O>(
    result: HintedResult<'code, T, O>,
) -> ParseResult<'code, T, O> {
    result.map(|(value, cursor, _)| (value, cursor))
}

/// Combine the hints of two consecutive parsers that ended at `cursor`
///
/// A hint behind `cursor` can never be the furthest error of what follows,
/// so it is dropped.
pub(crate) fn merge_hints<'code, T>(
    earlier: Hint<'code, T>,
    later: Hint<'code, T>,
    cursor: Cursor<'code, T>,
) -> Hint<'code, T> {
    let merged = match (earlier, later) {
        (Some(earlier), Some(later)) => Some(earlier.merge(later)),
        (earlier, later) => earlier.or(later),
    };
    merged.filter(|hint| hint.position() >= cursor.position())
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Element = P::Element;
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> ParseResult<'code, Self::Element, Self::Output> {
        (**self).parse(cursor)
    }

    fn parse_hinted(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> HintedResult<'code, Self::Element, Self::Output> {
        (**self).parse_hinted(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Element = P::Element;
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> ParseResult<'code, Self::Element, Self::Output> {
        (**self).parse(cursor)
    }

    fn parse_hinted(
        &self,
        cursor: Cursor<'code, Self::Element>,
    ) -> HintedResult<'code, Self::Element, Self::Output> {
        (**self).parse_hinted(cursor)
    }
}

/// A type-erased parser, for grammars whose combinator types get unwieldy or
/// that need several differently-built parsers in one collection
pub type BoxedParser<'a, 'code, T, O> = Box<dyn Parser<'code, Element = T, Output = O> + 'a>;

/// Erase the concrete type of a parser
pub fn boxed<'a, 'code, P>(parser: P) -> BoxedParser<'a, 'code, P::Element, P::Output>
where
    P: Parser<'code> + 'a,
{
    Box::new(parser)
}

/// Parser backed by a plain function or closure
pub struct FromFn<F, T> {
    function: F,
    _element: PhantomData<fn(&T)>,
}

impl<'code, F, T, O> Parser<'code> for FromFn<F, T>
where
    T: Atomic + 'code,
    F: Fn(Cursor<'code, T>) -> ParseResult<'code, T, O>,
{
    type Element = T;
    type Output = O;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, O> {
        (self.function)(cursor)
    }
}

/// Build a parser from a function over cursors
///
/// Useful for one-off parsers that would be awkward to express with
/// combinators.
pub fn from_fn<'code, F, T, O>(function: F) -> FromFn<F, T>
where
    T: Atomic + 'code,
    F: Fn(Cursor<'code, T>) -> ParseResult<'code, T, O>,
{
    FromFn {
        function,
        _element: PhantomData,
    }
}
