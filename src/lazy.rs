use crate::cursor::Cursor;
use crate::parser::{HintedResult, ParseResult, Parser, unhinted};

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
///
/// Each invocation enters one level of recursion on the cursor. Exceeding the
/// configured depth aborts the run with
/// [`GrammarError::RecursionLimit`](crate::GrammarError::RecursionLimit).
///
/// ```
/// use pint::prelude::*;
/// use pint::{BoxedParser, Cursor, boxed, lazy::lazy, literal::text};
///
/// // nested := "(" nested ")" | ""
/// fn nested<'code>() -> BoxedParser<'code, 'code, u8, usize> {
///     boxed(
///         text("(")
///             .ignore_then(lazy(nested))
///             .then_ignore(text(")"))
///             .map(|depth| depth + 1)
///             .or(pint::pure::pure(0)),
///     )
/// }
///
/// let data = b"((()))";
/// let (depth, cursor) = nested().parse(Cursor::new(data)).unwrap();
/// assert_eq!(depth, 3);
/// assert!(cursor.is_eof());
/// ```
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
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
        let inner = cursor.descend()?;
        let (value, end, hint) = (self.factory)().parse_hinted(inner)?;
        Ok((value, end.with_depth(cursor.depth()), hint))
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::error::{Failure, GrammarError};
    use crate::literal::text;
    use crate::many::many;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::parser::{BoxedParser, boxed};
    use crate::pure::pure;

    fn nested<'code>() -> BoxedParser<'code, 'code, u8, usize> {
        boxed(
            text("[")
                .ignore_then(lazy(nested))
                .then_ignore(text("]"))
                .map(|depth| depth + 1)
                .or(pure(0)),
        )
    }

    #[test]
    fn test_lazy_basic() {
        let data = b"aaaa";
        let (output, remaining) = lazy(|| text("a")).parse(Cursor::new(data)).unwrap();

        assert_eq!(output, b"a");
        assert_eq!(remaining.position(), 1);
    }

    #[test]
    fn test_lazy_with_many() {
        let data = b"aaaa";
        let (output, remaining) = lazy(|| many(text("a"))).parse(Cursor::new(data)).unwrap();

        assert_eq!(output.len(), 4);
        assert_eq!(remaining.position(), 4);
    }

    #[test]
    fn test_depth_restored_after_success() {
        let data = b"[[]]";
        let (depth, cursor) = lazy(nested).parse(Cursor::new(data)).unwrap();

        assert_eq!(depth, 2);
        assert_eq!(cursor.depth(), 0);
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_recursion_limit() {
        let data = b"[[[[[[]]]]]]";
        let cursor = Cursor::new(data).with_max_depth(3);

        let failure = lazy(nested).parse(cursor).unwrap_err();
        assert!(matches!(
            failure,
            Failure::Fatal(GrammarError::RecursionLimit { limit: 3, position: 3 })
        ));
    }

    #[test]
    fn test_within_limit() {
        let data = b"[[]]";
        let cursor = Cursor::new(data).with_max_depth(3);

        let (depth, _) = lazy(nested).parse(cursor).unwrap();
        assert_eq!(depth, 2);
    }
}
