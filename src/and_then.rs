use crate::cursor::Cursor;
use crate::parser::{HintedResult, ParseResult, Parser, merge_hints, unhinted};

/// Parser combinator that picks the next parser based on the value of the first
///
/// This is monadic bind: `f` receives the first value and returns the parser
/// that continues from where the first one stopped.
pub struct AndThen<P, F> {
    parser: P,
    f: F,
}

impl<P, F> AndThen<P, F> {
    pub fn new(parser: P, f: F) -> Self {
        AndThen { parser, f }
    }
}

impl<'code, P, F, Q> Parser<'code> for AndThen<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code, Element = P::Element>,
{
    type Element = P::Element;
    type Output = Q::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, P::Element>,
    ) -> ParseResult<'code, P::Element, Q::Output> {
        unhinted(self.parse_hinted(cursor))
    }

    fn parse_hinted(
        &self,
        cursor: Cursor<'code, P::Element>,
    ) -> HintedResult<'code, P::Element, Q::Output> {
        let (value, cursor, hint) = self.parser.parse_hinted(cursor)?;
        match (self.f)(value).parse_hinted(cursor) {
            Ok((value, end, next_hint)) => Ok((value, end, merge_hints(hint, next_hint, end))),
            Err(failure) => Err(failure.merge_hint(hint)),
        }
    }
}

pub fn and_then<'code, P, F, Q>(parser: P, f: F) -> AndThen<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code, Element = P::Element>,
{
    AndThen::new(parser, f)
}

/// Extension trait to add .and_then() method support for parsers
pub trait AndThenExt<'code>: Parser<'code> + Sized {
    fn and_then<F, Q>(self, f: F) -> AndThen<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code, Element = Self::Element>,
    {
        AndThen::new(self, f)
    }
}

impl<'code, P> AndThenExt<'code> for P where P: Parser<'code> {}
