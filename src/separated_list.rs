use crate::cursor::Cursor;
use crate::error::{Failure, GrammarError};
use crate::parser::{HintedResult, ParseResult, Parser, merge_hints, unhinted};

/// Parser combinator that matches a list of items separated by a parser
///
/// Returns the item values in order; separator values are discarded.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!["a", "b", "c"]`
/// - `""` → `vec![]` (unless at least one item is required)
///
/// # Note
/// - A trailing separator that is not followed by an item is left unconsumed
/// - Committed failures in either the item or the separator propagate
/// - Does not handle whitespace automatically
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
    at_least_one: bool,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS, at_least_one: bool) -> Self {
        SeparatedList {
            parser,
            separator,
            at_least_one,
        }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code, Element = P::Element>,
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
        let mut results = Vec::new();

        let (mut cursor, mut hint) = match self.parser.parse_hinted(cursor) {
            Ok((value, next, hint)) => {
                results.push(value);
                (next, hint)
            }
            Err(Failure::Recoverable(error)) if !self.at_least_one => {
                return Ok((results, cursor, Some(error)));
            }
            Err(failure) => return Err(failure),
        };

        loop {
            let (after_separator, separator_hint) = match self.separator.parse_hinted(cursor) {
                Ok((_, next, separator_hint)) => (next, separator_hint),
                Err(Failure::Recoverable(error)) => {
                    hint = merge_hints(hint, Some(error), cursor);
                    break;
                }
                Err(failure) => return Err(failure.merge_hint(hint)),
            };

            match self.parser.parse_hinted(after_separator) {
                Ok((value, next, item_hint)) => {
                    if next.position() == cursor.position() {
                        tracing::warn!(
                            position = cursor.position(),
                            "separated list made no progress"
                        );
                        return Err(GrammarError::ZeroProgress {
                            position: cursor.position(),
                        }
                        .into());
                    }
                    results.push(value);
                    cursor = next;
                    hint = merge_hints(hint, separator_hint, cursor);
                    hint = merge_hints(hint, item_hint, cursor);
                }
                // Leave the dangling separator for an outer parser
                Err(Failure::Recoverable(error)) => {
                    let hint = merge_hints(hint, separator_hint, cursor);
                    return Ok((results, cursor, merge_hints(hint, Some(error), cursor)));
                }
                Err(failure) => {
                    let hint = merge_hints(hint, separator_hint, cursor);
                    return Err(failure.merge_hint(hint));
                }
            }
        }

        Ok((results, cursor, hint))
    }
}

/// Zero or more `parser` items separated by `separator`
pub fn separated_by<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code, Element = P::Element>,
{
    SeparatedList::new(parser, separator, false)
}

/// One or more `parser` items separated by `separator`
pub fn separated_by1<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code, Element = P::Element>,
{
    SeparatedList::new(parser, separator, true)
}

pub trait SeparatedListExt<'code>: Parser<'code> + Sized {
    fn separated_by<PS>(self, separator: PS) -> SeparatedList<Self, PS>
    where
        PS: Parser<'code, Element = Self::Element>,
    {
        separated_by(self, separator)
    }

    fn separated_by1<PS>(self, separator: PS) -> SeparatedList<Self, PS>
    where
        PS: Parser<'code, Element = Self::Element>,
    {
        separated_by1(self, separator)
    }
}

impl<'code, P: Parser<'code>> SeparatedListExt<'code> for P {}
