use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{HintedResult, ParseResult, Parser, unhinted};
use std::borrow::Cow;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value is a recoverable failure at the position where the inner
/// parser started, expecting `label`.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
    label: Cow<'static, str>,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F, label: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            label,
        }
    }
}

impl<'code, P, F> Parser<'code> for FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
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
        let (value, new_cursor, hint) = self.parser.parse_hinted(cursor)?;

        if (self.predicate)(&value) {
            Ok((value, new_cursor, hint))
        } else {
            Err(Failure::expected(cursor.location(), self.label.clone()).merge_hint(hint))
        }
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt<'code>: Parser<'code> {
    fn filter<F>(self, predicate: F, label: impl Into<Cow<'static, str>>) -> FilterParser<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate, label.into())
    }
}

impl<'code, P: Parser<'code>> FilterExt<'code> for P {}

/// Convenience function to create a filtered parser
pub fn filter<'code, P, F>(
    parser: P,
    predicate: F,
    label: impl Into<Cow<'static, str>>,
) -> FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate, label.into())
}
