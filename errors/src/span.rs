/// Byte range into the expression text an error points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(
        start: usize,
        end: usize,
    ) -> Self {
        Self { start, end }
    }

    /// Span covering `len` bytes starting at `offset`.
    pub const fn at(
        offset: usize,
        len: usize,
    ) -> Self {
        Self::new(offset, offset + len)
    }

    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_basics() {
        let span = Span::new(10, 20);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
        assert!(Span::new(4, 4).is_empty());
    }

    #[test]
    fn span_at_offset() {
        assert_eq!(Span::at(4, 6), Span::new(4, 10));
    }

    #[test]
    fn span_conversions() {
        let span: Span = (5, 15).into();
        assert_eq!(span.start, 5);
        assert_eq!(span.end, 15);

        let span: Span = (0..10).into();
        assert_eq!(span.start, 0);
        assert_eq!(span.end, 10);

        let source: miette::SourceSpan = Span::new(3, 8).into();
        assert_eq!(source.offset(), 3);
        assert_eq!(source.len(), 5);
    }
}
