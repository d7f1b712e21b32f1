use serde::Serialize;
use swc_core::common::{BytePos, Span};

// -----------------------------------------------------------------------------
// Spans
// -----------------------------------------------------------------------------

/// Half-open byte range `[start, end)` into the original text of one source unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

impl SourceSpan {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn empty(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True when `offset` lies inside the span and is not one of its boundaries.
    pub const fn contains_strictly(&self, offset: usize) -> bool {
        self.start < offset && offset < self.end
    }
}

// -----------------------------------------------------------------------------
// Source text of a unit
// -----------------------------------------------------------------------------

/// The immutable original text of a source unit together with the position
/// SWC assigned to the first byte it parsed.
///
/// `leading` counts bytes at the front of `text` the parser never saw, such
/// as a byte-order mark.
#[derive(Debug, Clone, Copy)]
pub struct SourceText<'s> {
    text: &'s str,
    start_pos: BytePos,
    leading: usize,
}

impl<'s> SourceText<'s> {
    pub fn new(text: &'s str, start_pos: BytePos) -> Self {
        Self {
            text,
            start_pos,
            leading: 0,
        }
    }

    /// Text whose first `leading` bytes were stripped before parsing.
    pub fn with_leading(text: &'s str, start_pos: BytePos, leading: usize) -> Self {
        Self {
            text,
            start_pos,
            leading: leading.min(text.len()),
        }
    }

    pub fn text(&self) -> &'s str {
        self.text
    }

    /// Offset of the first parsed byte.
    pub fn body_start(&self) -> usize {
        self.leading
    }

    /// Converts an SWC span into a unit-relative range, clamped to the text.
    pub fn range(&self, span: Span) -> SourceSpan {
        SourceSpan::new(self.offset(span.lo), self.offset(span.hi))
    }

    fn offset(&self, pos: BytePos) -> usize {
        let rel = pos.0.saturating_sub(self.start_pos.0) as usize + self.leading;
        rel.min(self.text.len())
    }

    pub fn slice(&self, span: SourceSpan) -> &'s str {
        self.text.get(span.start..span.end).unwrap_or_default()
    }

    pub fn byte_at(&self, index: usize) -> Option<u8> {
        self.text.as_bytes().get(index).copied()
    }

    /// Range of a statement, widened over a directly following `;` when the
    /// parser's span stopped short of it.
    pub fn statement_range(&self, span: Span) -> SourceSpan {
        let range = self.range(span);
        if range.end > range.start && self.byte_at(range.end - 1) == Some(b';') {
            return range;
        }
        if self.byte_at(range.end) == Some(b';') {
            return SourceSpan::new(range.start, range.end + 1);
        }
        range
    }
}
