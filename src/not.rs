use crate::cursor::Cursor;
use crate::error::{Failure, ParseError};
use crate::parser::{ParseResult, Parser};

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails recoverably at the current
/// position, and fails recoverably if it succeeds. Never consumes any input.
/// Committed and fatal failures of the inner parser are passed on.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'code, P> Parser<'code> for Not<P>
where
    P: Parser<'code>,
{
    type Element = P::Element;
    type Output = ();

    fn parse(&self, cursor: Cursor<'code, P::Element>) -> ParseResult<'code, P::Element, ()> {
        match self.parser.parse(cursor) {
            Ok(_) => Err(Failure::Recoverable(ParseError::custom(
                cursor.location(),
                "unexpected match",
            ))),
            Err(Failure::Recoverable(_)) => Ok(((), cursor)),
            Err(failure) => Err(failure),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not_followed_by<'code, P>(parser: P) -> Not<P>
where
    P: Parser<'code>,
{
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt<'code>: Parser<'code> + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<'code, P> NotExt<'code> for P where P: Parser<'code> {}
