//! Text-splice buffer over the original source of one unit.
//!
//! Every operation is keyed by byte offsets into the immutable original text.
//! Operations are checked against each other when they are applied, so an
//! overlapping edit is rejected before it can corrupt the output.

use crate::source::SourceSpan;
use thiserror::Error;

/// A single edit against the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOperation {
    Remove(SourceSpan),
    Overwrite(SourceSpan, String),
    Insert(usize, String),
}

impl EditOperation {
    /// Range of original text consumed by the operation (empty for insertions).
    pub fn span(&self) -> SourceSpan {
        match self {
            Self::Remove(span) | Self::Overwrite(span, _) => *span,
            Self::Insert(at, _) => SourceSpan::empty(*at),
        }
    }

    fn replacement(&self) -> &str {
        match self {
            Self::Remove(_) => "",
            Self::Overwrite(_, text) | Self::Insert(_, text) => text,
        }
    }

    fn is_insert(&self) -> bool {
        matches!(self, Self::Insert(..))
    }

    /// Whether applying both `self` and `other` would touch the same bytes.
    pub fn conflicts_with(&self, other: &Self) -> bool {
        match (self.is_insert(), other.is_insert()) {
            (true, true) => false,
            (true, false) => other.span().contains_strictly(self.span().start),
            (false, true) => self.span().contains_strictly(other.span().start),
            (false, false) => self.span().overlaps(&other.span()),
        }
    }
}

/// Error raised when an edit violates the buffer's invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("edit {attempted:?} overlaps previously applied edit {existing:?}")]
    Overlapping {
        existing: SourceSpan,
        attempted: SourceSpan,
    },
    #[error("edit {span:?} out of bounds for source of length {source_len}")]
    OutOfBounds { span: SourceSpan, source_len: usize },
    #[error("edit {span:?} does not fall on character boundaries")]
    NotCharBoundary { span: SourceSpan },
}

/// Accumulates non-overlapping edits over `original` and renders the result.
#[derive(Debug, Clone)]
pub struct SpanEditor<'s> {
    original: &'s str,
    operations: Vec<EditOperation>,
}

impl<'s> SpanEditor<'s> {
    pub fn new(original: &'s str) -> Self {
        Self {
            original,
            operations: Vec::new(),
        }
    }

    pub fn operations(&self) -> &[EditOperation] {
        &self.operations
    }

    pub fn has_edits(&self) -> bool {
        !self.operations.is_empty()
    }

    pub fn remove(&mut self, start: usize, end: usize) -> Result<(), EditError> {
        self.apply(EditOperation::Remove(SourceSpan::new(start, end)))
    }

    pub fn overwrite(
        &mut self,
        start: usize,
        end: usize,
        text: impl Into<String>,
    ) -> Result<(), EditError> {
        self.apply(EditOperation::Overwrite(SourceSpan::new(start, end), text.into()))
    }

    pub fn insert(&mut self, at: usize, text: impl Into<String>) -> Result<(), EditError> {
        self.apply(EditOperation::Insert(at, text.into()))
    }

    /// Validates `op` against the source and every applied edit, then records it.
    pub fn apply(&mut self, op: EditOperation) -> Result<(), EditError> {
        let span = op.span();
        if span.start > span.end || span.end > self.original.len() {
            return Err(EditError::OutOfBounds {
                span,
                source_len: self.original.len(),
            });
        }
        if !self.original.is_char_boundary(span.start) || !self.original.is_char_boundary(span.end)
        {
            return Err(EditError::NotCharBoundary { span });
        }
        if let Some(existing) = self.operations.iter().find(|prev| prev.conflicts_with(&op)) {
            return Err(EditError::Overlapping {
                existing: existing.span(),
                attempted: span,
            });
        }
        self.operations.push(op);
        Ok(())
    }

    /// Splices every applied edit into the original text.
    pub fn render(&self) -> String {
        let mut ordered: Vec<(usize, &EditOperation)> = self.operations.iter().enumerate().collect();
        // insertions at an offset go before a ranged edit starting there; ties keep call order
        ordered.sort_by_key(|(seq, op)| (op.span().start, !op.is_insert(), *seq));

        let mut out = String::with_capacity(self.original.len());
        let mut cursor = 0;
        for (_, op) in ordered {
            let span = op.span();
            out.push_str(&self.original[cursor..span.start]);
            out.push_str(op.replacement());
            cursor = span.end;
        }
        out.push_str(&self.original[cursor..]);
        out
    }
}
