use crate::cursor::Cursor;
use crate::parser::{HintedResult, ParseResult, Parser, unhinted};

/// Parser combinator that runs the inner parser without consuming input
///
/// On success the value is returned with the original cursor. Failures are
/// returned unchanged.
pub struct Lookahead<P> {
    parser: P,
}

impl<P> Lookahead<P> {
    pub fn new(parser: P) -> Self {
        Lookahead { parser }
    }
}

impl<'code, P> Parser<'code> for Lookahead<P>
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
        let (value, _, hint) = self.parser.parse_hinted(cursor)?;
        Ok((value, cursor, hint))
    }
}

pub fn lookahead<'code, P>(parser: P) -> Lookahead<P>
where
    P: Parser<'code>,
{
    Lookahead::new(parser)
}

pub trait LookaheadExt<'code>: Parser<'code> + Sized {
    fn lookahead(self) -> Lookahead<Self> {
        Lookahead::new(self)
    }
}

impl<'code, P> LookaheadExt<'code> for P where P: Parser<'code> {}
