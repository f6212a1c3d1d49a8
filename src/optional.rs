use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{HintedResult, ParseResult, Parser, unhinted};

/// Parser combinator that makes the inner parser optional
///
/// A recoverable failure becomes `None` and leaves the cursor where it was.
/// The failure is kept as the hint, so a parser that fails next can still
/// report it. Committed and fatal failures still propagate.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Element = P::Element;
    type Output = Option<P::Output>;

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
        match self.parser.parse_hinted(cursor) {
            Ok((value, cursor, hint)) => Ok((Some(value), cursor, hint)),
            Err(Failure::Recoverable(error)) => Ok((None, cursor, Some(error))),
            Err(failure) => Err(failure),
        }
    }
}

pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}
