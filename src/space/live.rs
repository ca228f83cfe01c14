//! Documents that already exist, with the highlighters attached to them.

use crate::error::{InvalidRangeError, OutOfBoundsError};
use crate::model::{Annotation, HighlightAttributes, Span};

use super::{CoordinateSpace, MarkupModel};

/// An existing document together with the highlighters attached to it.
///
/// Offsets are byte offsets into `text`.
#[derive(Clone, Debug, Default)]
pub struct LiveSpace {
    text: String,
    markup: MarkupModel,
}

impl LiveSpace {
    /// Wraps a document that has no highlighters yet.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: MarkupModel::new(),
        }
    }

    /// A document of `len` spaces, for hosts that only track lengths.
    pub fn blank(len: usize) -> Self {
        Self::new(" ".repeat(len))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn markup(&self) -> &MarkupModel {
        &self.markup
    }

    /// Attaches a highlighter to the document. Same bounds rules as
    /// [`CoordinateSpace::materialize`].
    pub fn add_annotation(
        &mut self,
        span: Span,
        attributes: HighlightAttributes,
    ) -> Result<Annotation, OutOfBoundsError> {
        self.markup
            .materialize_within(self.text.len(), span, attributes)
    }
}

impl CoordinateSpace for LiveSpace {
    fn len(&self) -> usize {
        self.text.len()
    }

    fn query(&self, window: Span) -> Result<Vec<Annotation>, InvalidRangeError> {
        self.markup.query_within(self.text.len(), window)
    }

    fn materialize(
        &mut self,
        span: Span,
        attributes: HighlightAttributes,
    ) -> Result<Annotation, OutOfBoundsError> {
        self.add_annotation(span, attributes)
    }
}
