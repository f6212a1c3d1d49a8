use crate::atomic::Atomic;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt;

/// An engine invariant was violated
///
/// These are never parse outcomes: they mean the grammar itself is broken
/// (a repetition that can match nothing, a primitive that moved the cursor out
/// of range) or a resource limit was hit. No combinator recovers from them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("repetition body succeeded without consuming input at offset {position}")]
    ZeroProgress { position: usize },
    #[error("cursor moved to offset {offset} past the end of input (length {len})")]
    CursorOutOfRange { offset: usize, len: usize },
    #[error("slice {start}..{end} is outside the input (length {len})")]
    SliceOutOfRange { start: usize, end: usize, len: usize },
    #[error("recursion depth limit of {limit} exceeded at offset {position}")]
    RecursionLimit { limit: usize, position: usize },
    #[error("invalid repetition bounds: at least {min}, at most {max}")]
    InvalidRepetition { min: usize, max: usize },
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    /// 1-based, counted in elements
    pub column: usize,
}

/// A position in a borrowed input, kept together with the input so the
/// location can be rendered as line and column later
pub struct CodeLoc<'code, T> {
    code: &'code [T],
    /// The position in `code` where the cursor encountered an error
    loc: usize,
}

impl<T> Clone for CodeLoc<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CodeLoc<'_, T> {}

impl<T> fmt::Debug for CodeLoc<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeLoc")
            .field("loc", &self.loc)
            .field("len", &self.code.len())
            .finish()
    }
}

impl<'code, T> CodeLoc<'code, T> {
    pub fn new(code: &'code [T], loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    pub fn source(&self) -> &'code [T] {
        self.code
    }
}

impl<T: Atomic> CodeLoc<'_, T> {
    /// Calculate line number and column of the location
    ///
    /// Columns count elements, not rendered characters: a multi-byte UTF-8
    /// sequence in a byte input advances the column by its byte length. The
    /// caret under a context line is placed by rendered characters instead.
    pub fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, element) in self.code.iter().enumerate().take(self.loc) {
            if element.is_newline() {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            column: self.loc - line_start + 1,
        }
    }

    /// Get lines of context around the error position
    /// Returns up to 2 lines before the error line, the error line itself and
    /// a pointer line under the error column
    fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let mut lines = Vec::new();

        for (index, line) in self.code.split(|e| e.is_newline()).enumerate() {
            let number = index + 1;
            if number + 2 < pos.line {
                continue;
            }
            if number > pos.line {
                break;
            }

            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, T::format_slice(line)));

            if number == pos.line {
                // The line is rendered as text, so the caret moves by rendered
                // characters rather than by elements
                let before = line.get(..pos.column - 1).unwrap_or(line);
                let pointer_offset = prefix.len() + T::format_slice(before).chars().count();
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

/// A structured parse failure: where it happened and what would have been
/// accepted there
///
/// Errors from competing alternatives are combined with [`ParseError::merge`],
/// which keeps whichever error got furthest into the input.
pub struct ParseError<'code, T> {
    loc: CodeLoc<'code, T>,
    expected: BTreeSet<Cow<'static, str>>,
    message: Option<Cow<'static, str>>,
    context: Vec<Cow<'static, str>>,
}

impl<T> Clone for ParseError<'_, T> {
    fn clone(&self) -> Self {
        Self {
            loc: self.loc,
            expected: self.expected.clone(),
            message: self.message.clone(),
            context: self.context.clone(),
        }
    }
}

impl<T> fmt::Debug for ParseError<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseError")
            .field("position", &self.loc.position())
            .field("expected", &self.expected)
            .field("message", &self.message)
            .field("context", &self.context)
            .finish()
    }
}

impl<'code, T> ParseError<'code, T> {
    /// An error with no expectation or message attached yet
    pub fn new(loc: CodeLoc<'code, T>) -> Self {
        ParseError {
            loc,
            expected: BTreeSet::new(),
            message: None,
            context: Vec::new(),
        }
    }

    /// An error expecting `label` at `loc`
    pub fn expecting(loc: CodeLoc<'code, T>, label: impl Into<Cow<'static, str>>) -> Self {
        let mut error = Self::new(loc);
        error.expected.insert(label.into());
        error
    }

    /// An error carrying a free-form message instead of an expectation
    pub fn custom(loc: CodeLoc<'code, T>, message: impl Into<Cow<'static, str>>) -> Self {
        let mut error = Self::new(loc);
        error.message = Some(message.into());
        error
    }

    pub fn position(&self) -> usize {
        self.loc.position()
    }

    pub fn location(&self) -> CodeLoc<'code, T> {
        self.loc
    }

    /// Expected labels, sorted and de-duplicated
    pub fn expected(&self) -> impl Iterator<Item = &str> + '_ {
        self.expected.iter().map(|label| label.as_ref())
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Context labels, outermost first
    pub fn context(&self) -> impl Iterator<Item = &str> + '_ {
        self.context.iter().map(|label| label.as_ref())
    }

    /// Combine with the error of a competing branch
    ///
    /// The error at the greater position wins outright. At the same position
    /// the expected sets are unioned; the message and context of `self` are
    /// kept when present, otherwise those of `other` are taken.
    pub fn merge(self, other: Self) -> Self {
        match self.position().cmp(&other.position()) {
            Ordering::Greater => self,
            Ordering::Less => other,
            Ordering::Equal => {
                let mut merged = self;
                merged.expected.extend(other.expected);
                if merged.message.is_none() {
                    merged.message = other.message;
                }
                if merged.context.is_empty() {
                    merged.context = other.context;
                }
                merged
            }
        }
    }

    /// Replace every expectation with a single label
    pub fn relabel(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.expected.clear();
        self.expected.insert(label.into());
        self
    }

    /// Record that this error happened inside `label`
    pub fn in_context(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.context.insert(0, label.into());
        self
    }
}

impl<T: Atomic> ParseError<'_, T> {
    /// The first line of the rendered error, without source excerpt
    pub fn summary(&self) -> String {
        let mut summary = if T::TEXT {
            let pos = self.loc.readable_position();
            format!("error at line {}, column {}", pos.line, pos.column)
        } else {
            format!("error at offset {}", self.loc.position())
        };

        if !self.expected.is_empty() {
            summary.push_str(": expected ");
            summary.push_str(&join_labels(&self.expected));
        }
        if let Some(message) = &self.message {
            summary.push_str(": ");
            summary.push_str(message);
        }
        if self.expected.is_empty() && self.message.is_none() {
            summary.push_str(": unexpected input");
        }
        if !self.context.is_empty() {
            summary.push_str(" (while parsing ");
            summary.push_str(&self.context.join(" > "));
            summary.push(')');
        }
        summary
    }
}

fn join_labels(labels: &BTreeSet<Cow<'static, str>>) -> String {
    let labels: Vec<&str> = labels.iter().map(|label| label.as_ref()).collect();
    match labels.split_last() {
        None => String::new(),
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

impl<T: Atomic> fmt::Display for ParseError<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())?;
        if T::TEXT {
            for line in self.loc.context_lines() {
                write!(f, "\n{}", line)?;
            }
        }
        Ok(())
    }
}

impl<T: Atomic> Error for ParseError<'_, T> {}

/// The failure half of a parse result
///
/// Only `Recoverable` failures let an enclosing alternative try another
/// branch. `Committed` failures come from a [`cut`](crate::cut::cut) and
/// propagate to the top of the run; `Fatal` ones abort it.
#[derive(Debug, thiserror::Error)]
pub enum Failure<'code, T: Atomic> {
    #[error("{0}")]
    Recoverable(ParseError<'code, T>),
    #[error("{0}")]
    Committed(ParseError<'code, T>),
    #[error(transparent)]
    Fatal(#[from] GrammarError),
}

impl<'code, T: Atomic> Failure<'code, T> {
    /// Recoverable failure expecting `label` at `loc`
    pub fn expected(loc: CodeLoc<'code, T>, label: impl Into<Cow<'static, str>>) -> Self {
        Failure::Recoverable(ParseError::expecting(loc, label))
    }

    pub fn is_recoverable(&self) -> bool {
        matches!(self, Failure::Recoverable(_))
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, Failure::Committed(_))
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Failure::Fatal(_))
    }

    /// Re-tag a recoverable failure as committed
    pub fn commit(self) -> Self {
        match self {
            Failure::Recoverable(error) => Failure::Committed(error),
            other => other,
        }
    }

    pub fn parse_error(&self) -> Option<&ParseError<'code, T>> {
        match self {
            Failure::Recoverable(error) | Failure::Committed(error) => Some(error),
            Failure::Fatal(_) => None,
        }
    }

    /// Apply `f` to the parse error, keeping the committed flag
    pub fn map_error(self, f: impl FnOnce(ParseError<'code, T>) -> ParseError<'code, T>) -> Self {
        match self {
            Failure::Recoverable(error) => Failure::Recoverable(f(error)),
            Failure::Committed(error) => Failure::Committed(f(error)),
            fatal => fatal,
        }
    }

    /// Fold in the error of a branch that was tried before this one
    pub fn merge_earlier(self, earlier: ParseError<'code, T>) -> Self {
        self.map_error(|error| earlier.merge(error))
    }

    /// Fold in the hint left by the successful parser that ran before this one
    pub fn merge_hint(self, hint: Option<ParseError<'code, T>>) -> Self {
        match hint {
            Some(earlier) => self.merge_earlier(earlier),
            None => self,
        }
    }
}
