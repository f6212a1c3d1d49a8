use crate::and::terminated;
use crate::atomic::Atomic;
use crate::config::RunConfig;
use crate::cursor::Cursor;
use crate::error::{Failure, GrammarError, ParseError};
use crate::parser::Parser;
use crate::primitive::end_of_input;

/// The single error a run ends with
#[derive(Debug, thiserror::Error)]
pub enum RunError<'code, T: Atomic> {
    /// The input does not match the grammar
    #[error("{error}")]
    Syntax {
        error: ParseError<'code, T>,
        /// Whether the failure happened past a cut
        committed: bool,
    },
    /// The grammar is broken or a resource limit was hit
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

impl<'code, T: Atomic> RunError<'code, T> {
    pub fn parse_error(&self) -> Option<&ParseError<'code, T>> {
        match self {
            RunError::Syntax { error, .. } => Some(error),
            RunError::Grammar(_) => None,
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, RunError::Syntax { committed: true, .. })
    }
}

impl<'code, T: Atomic> From<Failure<'code, T>> for RunError<'code, T> {
    fn from(failure: Failure<'code, T>) -> Self {
        match failure {
            Failure::Recoverable(error) => RunError::Syntax {
                error,
                committed: false,
            },
            Failure::Committed(error) => RunError::Syntax {
                error,
                committed: true,
            },
            Failure::Fatal(error) => RunError::Grammar(error),
        }
    }
}

fn report<'code, T: Atomic>(failure: Failure<'code, T>) -> RunError<'code, T> {
    match &failure {
        Failure::Fatal(error) => tracing::warn!(%error, "grammar error aborted the run"),
        Failure::Recoverable(error) | Failure::Committed(error) => tracing::debug!(
            position = error.position(),
            committed = failure.is_committed(),
            "input rejected"
        ),
    }
    failure.into()
}

/// Parse the whole of `input`
///
/// Input left over after `parser` succeeds is a syntax error expecting
/// `end of input` at the first unconsumed element.
///
/// ```
/// use pint::ascii::u64;
/// use pint::{literal::text, prelude::*, run};
///
/// let sum = u64().then_ignore(text("+")).and(u64()).map(|(a, b)| a + b);
/// assert_eq!(run(&sum, "2+3").unwrap(), 5);
///
/// let error = run(&sum, "2+3!").unwrap_err();
/// let first_line = error.to_string().lines().next().map(str::to_string);
/// assert_eq!(
///     first_line.as_deref(),
///     Some("error at line 1, column 4: expected end of input")
/// );
/// ```
pub fn run<'code, P, I>(
    parser: &P,
    input: &'code I,
) -> Result<P::Output, RunError<'code, P::Element>>
where
    P: Parser<'code> + ?Sized,
    I: AsRef<[P::Element]> + ?Sized,
{
    run_with_config(parser, input, RunConfig::default())
}

pub fn run_with_config<'code, P, I>(
    parser: &P,
    input: &'code I,
    config: RunConfig,
) -> Result<P::Output, RunError<'code, P::Element>>
where
    P: Parser<'code> + ?Sized,
    I: AsRef<[P::Element]> + ?Sized,
{
    let data = input.as_ref();
    let span = tracing::trace_span!("pint::run", input_len = data.len());
    let _enter = span.enter();

    let cursor = Cursor::new(data).with_max_depth(config.max_depth);
    match terminated(parser, end_of_input()).parse(cursor) {
        Ok((value, _)) => {
            tracing::trace!(consumed = data.len(), "input accepted");
            Ok(value)
        }
        Err(failure) => Err(report(failure)),
    }
}

/// Parse a prefix of `input`, returning the value and where parsing stopped
pub fn run_prefix<'code, P, I>(
    parser: &P,
    input: &'code I,
) -> Result<(P::Output, Cursor<'code, P::Element>), RunError<'code, P::Element>>
where
    P: Parser<'code> + ?Sized,
    I: AsRef<[P::Element]> + ?Sized,
{
    run_prefix_with_config(parser, input, RunConfig::default())
}

pub fn run_prefix_with_config<'code, P, I>(
    parser: &P,
    input: &'code I,
    config: RunConfig,
) -> Result<(P::Output, Cursor<'code, P::Element>), RunError<'code, P::Element>>
where
    P: Parser<'code> + ?Sized,
    I: AsRef<[P::Element]> + ?Sized,
{
    let data = input.as_ref();
    let span = tracing::trace_span!("pint::run_prefix", input_len = data.len());
    let _enter = span.enter();

    let cursor = Cursor::new(data).with_max_depth(config.max_depth);
    match parser.parse(cursor) {
        Ok((value, end)) => {
            tracing::trace!(consumed = end.position(), "prefix accepted");
            Ok((value, end))
        }
        Err(failure) => Err(report(failure)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::ascii::u64;
    use crate::cut::cut;
    use crate::filter::FilterExt;
    use crate::lazy::lazy;
    use crate::literal::text;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::parser::{BoxedParser, boxed};
    use crate::pure::{fail, pure};

    #[derive(Debug, Clone, PartialEq)]
    enum Token {
        Num(u64),
        Plus,
    }

    impl Atomic for Token {}

    fn nested<'code>() -> BoxedParser<'code, 'code, u8, usize> {
        boxed(
            text("(")
                .ignore_then(lazy(nested))
                .then_ignore(text(")"))
                .map(|depth| depth + 1)
                .or(pure(0)),
        )
    }

    #[test]
    fn test_run_whole_input() {
        let value = run(&u64(), "123").unwrap();
        assert_eq!(value, 123);
    }

    #[test]
    fn test_run_accepts_byte_strings_and_vectors() {
        assert_eq!(run(&u64(), b"7").unwrap(), 7);
        let input = b"8".to_vec();
        assert_eq!(run(&u64(), &input).unwrap(), 8);
    }

    #[test]
    fn test_trailing_input() {
        let error = run(&u64(), "12ab").unwrap_err();
        assert!(!error.is_committed());

        let error = error.parse_error().unwrap();
        assert_eq!(error.position(), 2);
        assert_eq!(error.expected().collect::<Vec<_>>(), vec!["end of input"]);
    }

    #[test]
    fn test_empty_input_rejected_by_non_empty_grammar() {
        let error = run(&text("a"), "").unwrap_err();
        assert_eq!(error.parse_error().unwrap().position(), 0);
    }

    #[test]
    fn test_committed_flag() {
        let parser = text("if").and(cut(fail::<u8, &[u8]>("body")));
        let error = run(&parser, "if").unwrap_err();

        assert!(error.is_committed());
        assert_eq!(error.parse_error().unwrap().position(), 2);
    }

    #[test]
    fn test_run_prefix() {
        let (value, cursor) = run_prefix(&u64(), "12ab").unwrap();
        assert_eq!(value, 12);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.rest(), b"ab");
    }

    #[test]
    fn test_recursion_limit_from_config() {
        let parser = nested();
        let config = RunConfig::default().with_max_depth(2);

        assert_eq!(run_with_config(&parser, "(())", config).unwrap(), 2);

        let error = run_with_config(&parser, "((()))", config).unwrap_err();
        assert!(matches!(
            error,
            RunError::Grammar(GrammarError::RecursionLimit { limit: 2, .. })
        ));
        assert!(error.parse_error().is_none());
    }

    #[test]
    fn test_prefix_with_config() {
        let config = RunConfig::default().with_max_depth(1);
        let error = run_prefix_with_config(&nested(), "((", config).unwrap_err();
        assert!(matches!(error, RunError::Grammar(_)));
    }

    #[test]
    fn test_token_input() {
        let number = crate::primitive::any::<Token>()
            .filter(|t| matches!(t, Token::Num(_)), "number");
        let tokens = [Token::Num(1), Token::Plus];

        let error = run(&number, &tokens[..]).unwrap_err();
        assert_eq!(error.to_string(), "error at offset 1: expected end of input");
    }
}
