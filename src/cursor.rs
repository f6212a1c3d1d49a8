use crate::config::DEFAULT_MAX_DEPTH;
use crate::error::{CodeLoc, GrammarError};
use std::fmt;

/// Immutable position in a borrowed input sequence
///
/// A cursor is the source slice, an element offset into it and the current
/// recursion depth. It is `Copy`: advancing returns a new cursor and leaves the
/// original untouched, so backtracking is just reusing an earlier value.
///
/// The offset always lies in `0..=len`; `len` is the end of input.
pub struct Cursor<'code, T> {
    data: &'code [T],
    position: usize,
    depth: usize,
    max_depth: usize,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.data.len())
            .field("depth", &self.depth)
            .finish()
    }
}

impl<'code, T> Cursor<'code, T> {
    /// Create a cursor at the start of `data`
    pub fn new(data: &'code [T]) -> Self {
        Cursor {
            data,
            position: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Same cursor with a different recursion limit
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Cursor { max_depth, ..self }
    }

    /// The element at the current offset, `None` at end of input
    pub fn peek(&self) -> Option<&'code T> {
        self.data.get(self.position)
    }

    /// A new cursor `n` elements further on
    ///
    /// Moving past the end of input is a bug in the calling parser and is
    /// reported as [`GrammarError::CursorOutOfRange`].
    pub fn advance(self, n: usize) -> Result<Self, GrammarError> {
        if n > self.remaining() {
            return Err(GrammarError::CursorOutOfRange {
                offset: self.position.saturating_add(n),
                len: self.data.len(),
            });
        }
        Ok(Cursor {
            position: self.position + n,
            ..self
        })
    }

    /// Number of elements left before the end of input
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Zero-copy view of `start..end` of the whole input
    pub fn slice(&self, start: usize, end: usize) -> Result<&'code [T], GrammarError> {
        self.data
            .get(start..end)
            .ok_or(GrammarError::SliceOutOfRange {
                start,
                end,
                len: self.data.len(),
            })
    }

    /// The unconsumed rest of the input
    pub fn rest(&self) -> &'code [T] {
        &self.data[self.position..]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The complete input this cursor points into
    pub fn source(&self) -> &'code [T] {
        self.data
    }

    pub fn is_eof(&self) -> bool {
        self.position == self.data.len()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Enter one level of recursion
    pub fn descend(self) -> Result<Self, GrammarError> {
        if self.depth >= self.max_depth {
            tracing::warn!(
                limit = self.max_depth,
                position = self.position,
                "recursion limit reached"
            );
            return Err(GrammarError::RecursionLimit {
                limit: self.max_depth,
                position: self.position,
            });
        }
        Ok(Cursor {
            depth: self.depth + 1,
            ..self
        })
    }

    /// Same position, recursion depth reset to `depth`
    pub fn with_depth(self, depth: usize) -> Self {
        Cursor { depth, ..self }
    }

    /// The current position as an error location
    pub fn location(&self) -> CodeLoc<'code, T> {
        CodeLoc::new(self.data, self.position)
    }
}
