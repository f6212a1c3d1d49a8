use crate::cursor::Cursor;
use crate::parser::{HintedResult, ParseResult, Parser, merge_hints, unhinted};

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open + content + close` and returns just the `content` value with
/// the delimiters discarded. It does not handle whitespace automatically and
/// does not commit after `open`; wrap `content` or `close` in
/// [`cut`](crate::cut::cut) for sharper errors.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code, Element = P1::Element>,
    P3: Parser<'code, Element = P1::Element>,
{
    type Element = P1::Element;
    type Output = P2::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, P1::Element>,
    ) -> ParseResult<'code, P1::Element, P2::Output> {
        unhinted(self.parse_hinted(cursor))
    }

    fn parse_hinted(
        &self,
        cursor: Cursor<'code, P1::Element>,
    ) -> HintedResult<'code, P1::Element, P2::Output> {
        let (_, cursor, hint) = self.open.parse_hinted(cursor)?;
        let (content, cursor, content_hint) = match self.content.parse_hinted(cursor) {
            Ok(success) => success,
            Err(failure) => return Err(failure.merge_hint(hint)),
        };
        let hint = merge_hints(hint, content_hint, cursor);
        let (_, cursor, close_hint) = match self.close.parse_hinted(cursor) {
            Ok(success) => success,
            Err(failure) => return Err(failure.merge_hint(hint)),
        };
        Ok((content, cursor, merge_hints(hint, close_hint, cursor)))
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code, Element = P1::Element>,
    P3: Parser<'code, Element = P1::Element>,
{
    Between::new(open, content, close)
}
