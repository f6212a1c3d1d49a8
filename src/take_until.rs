use crate::cursor::Cursor;
use crate::error::GrammarError;
use crate::parser::{HintedResult, ParseResult, Parser, merge_hints, unhinted};

/// Parser that repeatedly applies another parser until a predicate is satisfied
///
/// The value that satisfies the predicate is not consumed. Reaching the end
/// of input also stops the loop; any failure of the inner parser before that
/// propagates.
pub struct TakeUntilParser<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> TakeUntilParser<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Self { parser, predicate }
    }
}

impl<'code, P, F> Parser<'code> for TakeUntilParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
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
        let mut result = Vec::new();
        let mut current = cursor;
        let mut hint = None;

        while !current.is_eof() {
            let (item, next, item_hint) = match self.parser.parse_hinted(current) {
                Ok(success) => success,
                Err(failure) => return Err(failure.merge_hint(hint)),
            };
            if (self.predicate)(&item) {
                hint = merge_hints(hint, item_hint, current);
                break;
            }
            if next.position() == current.position() {
                tracing::warn!(
                    position = current.position(),
                    "take_until item succeeded without consuming input"
                );
                return Err(GrammarError::ZeroProgress {
                    position: current.position(),
                }
                .into());
            }
            result.push(item);
            current = next;
            hint = merge_hints(hint, item_hint, current);
        }

        Ok((result, current, hint))
    }
}

/// Convenience function to create a TakeUntilParser
pub fn take_until<'code, P, F>(parser: P, predicate: F) -> TakeUntilParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    TakeUntilParser::new(parser, predicate)
}
