use crate::constants::DEFAULT_MAX_DEPTH;

/// What to do with a number whose magnitude rounds to infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberOverflow {
    #[default]
    Accept,
    Reject,
}

#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Maximum container nesting; `None` removes the guard entirely.
    ///
    /// Parsing recurses once per nesting level, so without the guard a
    /// deep enough document overflows the thread stack and aborts the
    /// process. Only disable it for trusted input.
    pub max_depth: Option<usize>,
    pub number_overflow: NumberOverflow,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_number_overflow(mut self, number_overflow: NumberOverflow) -> Self {
        self.number_overflow = number_overflow;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            number_overflow: NumberOverflow::default(),
        }
    }
}
