use crate::cursor::Cursor;
use crate::parser::{HintedResult, ParseResult, Parser, unhinted};

/// Parser combinator that commits to the current branch
///
/// A recoverable failure of the inner parser becomes a committed one, so no
/// enclosing [`or`](crate::or::or), [`optional`](crate::optional::optional)
/// or repetition will backtrack past it. Place it after the part of a rule
/// that identifies the rule, e.g. after a keyword.
pub struct Cut<P> {
    parser: P,
}

impl<P> Cut<P> {
    pub fn new(parser: P) -> Self {
        Cut { parser }
    }
}

impl<'code, P> Parser<'code> for Cut<P>
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
        self.parser
            .parse_hinted(cursor)
            .map_err(|failure| failure.commit())
    }
}

pub fn cut<'code, P>(parser: P) -> Cut<P>
where
    P: Parser<'code>,
{
    Cut::new(parser)
}

/// Extension trait to add .cut() method support for parsers
pub trait CutExt<'code>: Parser<'code> + Sized {
    fn cut(self) -> Cut<Self> {
        Cut::new(self)
    }
}

impl<'code, P> CutExt<'code> for P where P: Parser<'code> {}
