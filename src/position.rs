use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::parser::{HintedResult, ParseResult, Parser, unhinted};

/// The half-open range `start..end` of elements a parser matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code, T: Atomic = u8> {
    pub source: &'code [T],
    pub start: usize,
    pub end: usize,
}

impl<'code, T: Atomic> Span<'code, T> {
    pub fn new(source: &'code [T], start: usize, end: usize) -> Self {
        Span { source, start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The matched elements. A span that does not fit its source yields an
    /// empty slice.
    pub fn slice(&self) -> &'code [T] {
        self.source.get(self.start..self.end).unwrap_or_default()
    }

    pub fn as_string(&self) -> String {
        T::format_slice(self.slice())
    }
}

/// Pairs the output of a parser with the span it matched
pub struct Position<P> {
    parser: P,
}

impl<P> Position<P> {
    pub fn new(parser: P) -> Self {
        Position { parser }
    }
}

impl<'code, P> Parser<'code> for Position<P>
where
    P: Parser<'code>,
{
    type Element = P::Element;
    type Output = (P::Output, Span<'code, P::Element>);

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
        let (output, new_cursor, hint) = self.parser.parse_hinted(cursor)?;
        let span = Span::new(cursor.source(), cursor.position(), new_cursor.position());
        Ok(((output, span), new_cursor, hint))
    }
}

/// A parser combinator that yields the consumed input instead of the value
pub struct Recognize<P> {
    parser: P,
}

impl<P> Recognize<P> {
    pub fn new(parser: P) -> Self {
        Recognize { parser }
    }
}

impl<'code, P> Parser<'code> for Recognize<P>
where
    P: Parser<'code>,
{
    type Element = P::Element;
    type Output = &'code [P::Element];

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
        let (_, new_cursor, hint) = self.parser.parse_hinted(cursor)?;
        let matched = cursor.slice(cursor.position(), new_cursor.position())?;
        Ok((matched, new_cursor, hint))
    }
}

pub trait PositionExt<'code>: Parser<'code> + Sized {
    /// Attach the matched span to the output
    fn with_position(self) -> Position<Self> {
        Position::new(self)
    }

    /// Return the slice of input this parser consumed
    fn recognize(self) -> Recognize<Self> {
        Recognize::new(self)
    }
}

impl<'code, P> PositionExt<'code> for P where P: Parser<'code> {}

pub fn with_position<'code, P>(parser: P) -> Position<P>
where
    P: Parser<'code>,
{
    Position::new(parser)
}

pub fn recognize<'code, P>(parser: P) -> Recognize<P>
where
    P: Parser<'code>,
{
    Recognize::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::ascii::u64;
    use crate::literal::text;
    use crate::many::many1;

    #[test]
    fn test_span_measures() {
        let source = b"let x";
        let whole = Span::new(source, 0, 3);
        assert_eq!((whole.len(), whole.slice()), (3, &b"let"[..]));
        assert_eq!(whole.as_string(), "let");

        let blank = Span::new(source, 4, 4);
        assert!(blank.is_empty());
        assert!(blank.slice().is_empty());
    }

    #[test]
    fn test_span_out_of_range() {
        let span = Span::new(b"hi", 1, 9);
        assert!(span.slice().is_empty());
    }

    #[test]
    fn test_consecutive_spans() {
        let input = b"ifelse";
        let cursor = Cursor::new(input);

        let ((keyword, first), cursor) = text("if").with_position().parse(cursor).unwrap();
        assert_eq!(keyword, b"if");
        assert_eq!((first.start, first.end), (0, 2));

        let ((_, second), _) = with_position(text("else")).parse(cursor).unwrap();
        assert_eq!(second, Span::new(input, 2, 6));
        assert_eq!(second.as_string(), "else");
    }

    #[test]
    fn test_position_over_tokens() {
        let data = ['x', 'y', 'z'];
        let parser = many1(crate::primitive::any::<char>()).with_position();

        let ((chars, span), _) = parser.parse(Cursor::new(&data)).unwrap();
        assert_eq!(chars.len(), 3);
        assert_eq!(span.len(), 3);
        assert_eq!(span.as_string(), "xyz");
    }

    #[test]
    fn test_recognize() {
        let data = b"12.5rest";
        let parser = u64().and(text(".")).and(u64()).recognize();

        let (matched, cursor) = parser.parse(Cursor::new(data)).unwrap();
        assert_eq!(matched, b"12.5");
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_failure_passes_through() {
        let failure = recognize(text("a")).parse(Cursor::new(b"b")).unwrap_err();
        assert!(failure.is_recoverable());
    }
}
