/// Default maximum input length in bytes.
pub const MAX_INPUT_LEN: usize = 4096;
/// Default maximum parenthesis nesting depth.
pub const MAX_DEPTH: usize = 64;

/// Resource bounds applied to untrusted input.
///
/// Both bounds fail fast with a typed error. `max_depth` caps the parser's
/// recursion, which is the only part of the pipeline that recurses per
/// parenthesis. A chain of `n` operators builds a tree `n` nodes deep, but the
/// evaluator and every other tree walk use an explicit stack, so
/// `max_input_len` only bounds the amount of work, not stack usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Longest accepted source text, in bytes.
    pub max_input_len: usize,
    /// Deepest accepted nesting of `(`.
    pub max_depth:     usize,
}

impl Limits {
    /// Creates limits with explicit bounds.
    #[must_use]
    pub const fn new(max_input_len: usize, max_depth: usize) -> Self {
        Self { max_input_len,
               max_depth }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(MAX_INPUT_LEN, MAX_DEPTH)
    }
}
