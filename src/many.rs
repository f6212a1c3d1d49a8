use crate::cursor::Cursor;
use crate::error::{Failure, GrammarError, ParseError};
use crate::parser::{Hint, HintedResult, ParseResult, Parser, merge_hints, unhinted};

/// Values collected by a repetition, the cursor after the last success and
/// the hint, which includes the recoverable failure that ended the loop
pub(crate) type Collected<'code, T, O> = (Vec<O>, Cursor<'code, T>, Hint<'code, T>);

/// Apply `parser` until it fails recoverably or `max` values were collected
///
/// A success that consumed nothing would loop forever and is reported as
/// [`GrammarError::ZeroProgress`]. Committed and fatal failures abort.
pub(crate) fn collect<'code, P>(
    parser: &P,
    mut cursor: Cursor<'code, P::Element>,
    max: Option<usize>,
) -> Result<Collected<'code, P::Element, P::Output>, Failure<'code, P::Element>>
where
    P: Parser<'code>,
{
    let mut values = Vec::new();
    let mut hint = None;

    while max.is_none_or(|max| values.len() < max) {
        match parser.parse_hinted(cursor) {
            Ok((value, next, body_hint)) => {
                if next.position() == cursor.position() {
                    tracing::warn!(
                        position = cursor.position(),
                        "repetition body succeeded without consuming input"
                    );
                    return Err(GrammarError::ZeroProgress {
                        position: cursor.position(),
                    }
                    .into());
                }
                values.push(value);
                cursor = next;
                hint = merge_hints(hint, body_hint, cursor);
            }
            Err(Failure::Recoverable(error)) => {
                return Ok((values, cursor, merge_hints(hint, Some(error), cursor)));
            }
            Err(failure) => return Err(failure.merge_hint(hint)),
        }
    }

    Ok((values, cursor, hint))
}

/// Parser combinator that matches zero or more occurrences of the given parser
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
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
        collect(&self.parser, cursor, None)
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
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
        let (values, end, hint) = collect(&self.parser, cursor, None)?;
        if values.is_empty() {
            let error = hint.unwrap_or_else(|| ParseError::new(cursor.location()));
            return Err(Failure::Recoverable(error));
        }
        Ok((values, end, hint))
    }
}

pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}

/// Extension trait to add .many() and .many1() method support for parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }

    fn many1(self) -> Many1<Self> {
        Many1::new(self)
    }
}

impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}
