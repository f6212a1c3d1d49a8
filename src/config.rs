/// Default limit on nested [`lazy`](crate::lazy::lazy) invocations during one run
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration for a single parse run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Maximum recursion depth through deferred parsers (default: 256)
    ///
    /// Exceeding it aborts the run with
    /// [`GrammarError::RecursionLimit`](crate::GrammarError::RecursionLimit)
    /// instead of overflowing the stack on pathological input.
    pub max_depth: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RunConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
