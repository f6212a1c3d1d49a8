use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{HintedResult, ParseResult, Parser, unhinted};
use std::borrow::Cow;

/// Parser combinator that names what the inner parser accepts
///
/// When the inner parser fails recoverably without getting past its starting
/// position, its expectations are replaced by `label`, so `expected digit`
/// becomes `expected number`. Failures further into the input and committed
/// failures keep their detail. A hint at the starting position is relabeled
/// the same way.
pub struct Label<P> {
    parser: P,
    label: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, label: Cow<'static, str>) -> Self {
        Label { parser, label }
    }
}

impl<'code, P> Parser<'code> for Label<P>
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
        let start = cursor.position();
        match self.parser.parse_hinted(cursor) {
            Ok((value, end, hint)) => {
                let hint = hint.map(|error| {
                    if error.position() == start {
                        error.relabel(self.label.clone())
                    } else {
                        error
                    }
                });
                Ok((value, end, hint))
            }
            Err(Failure::Recoverable(error)) if error.position() == start => {
                Err(Failure::Recoverable(error.relabel(self.label.clone())))
            }
            Err(failure) => Err(failure),
        }
    }
}

pub fn label<'code, P>(parser: P, label: impl Into<Cow<'static, str>>) -> Label<P>
where
    P: Parser<'code>,
{
    Label::new(parser, label.into())
}

/// Parser combinator that records which rule an error happened in
///
/// Every non-fatal failure of the inner parser gets `name` pushed onto its
/// context stack. Rendered errors read `(while parsing outer > inner)`.
pub struct Context<P> {
    parser: P,
    name: Cow<'static, str>,
}

impl<P> Context<P> {
    pub fn new(parser: P, name: Cow<'static, str>) -> Self {
        Context { parser, name }
    }
}

impl<'code, P> Parser<'code> for Context<P>
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
        let (value, end, hint) = self
            .parser
            .parse_hinted(cursor)
            .map_err(|failure| failure.map_error(|error| error.in_context(self.name.clone())))?;
        Ok((value, end, hint.map(|error| error.in_context(self.name.clone()))))
    }
}

pub fn context<'code, P>(parser: P, name: impl Into<Cow<'static, str>>) -> Context<P>
where
    P: Parser<'code>,
{
    Context::new(parser, name.into())
}

/// Extension trait to add .label() and .context() method support for parsers
pub trait LabelExt<'code>: Parser<'code> + Sized {
    fn label(self, label: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, label.into())
    }

    fn context(self, name: impl Into<Cow<'static, str>>) -> Context<Self> {
        Context::new(self, name.into())
    }
}

impl<'code, P> LabelExt<'code> for P where P: Parser<'code> {}
