/// A byte range `[start, end)` into the text handed to the parser.
///
/// Tokens store spans alongside their borrowed slices so callers can map any
/// token back to its exact source position, including tokens produced while
/// re-parsing the inner content of bold/italic/strike spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in bytes; an inverted span counts as empty.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}
