//! Highlighters and the records that describe where they move.

use serde::{Deserialize, Serialize};

use super::attributes::HighlightAttributes;
use super::ids::AnnotationId;
use super::span::Span;

/// A highlighter owned by a coordinate space.
///
/// The remapper only ever reads annotations and clones them; the owning
/// space is the single place that creates them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Identifier within the owning space.
    pub id: AnnotationId,

    /// Covered interval, half-open.
    pub span: Span,

    /// Everything about the highlighter except its position.
    pub attributes: HighlightAttributes,
}

impl Annotation {
    /// Creates a new annotation.
    pub fn new(id: impl Into<AnnotationId>, span: Span, attributes: HighlightAttributes) -> Self {
        Self {
            id: id.into(),
            span,
            attributes,
        }
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }
}

/// One of the two documents feeding a composed view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The left (base) document.
    A,
    /// The right (changed) document.
    B,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::A => "A",
            Side::B => "B",
        }
    }
}

/// Describes how a window of one source maps onto a window of the target.
///
/// The two spans need not have equal length. Offsets relative to
/// `source_span.start` are clamped to the source window and then added to
/// `dest_span.start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRecord {
    pub side: Side,
    pub source_span: Span,
    pub dest_span: Span,
}

impl MappingRecord {
    pub fn new(side: Side, source_span: Span, dest_span: Span) -> Self {
        Self {
            side,
            source_span,
            dest_span,
        }
    }

    /// The record mapping `[0, len)` onto itself.
    pub fn identity(side: Side, len: usize) -> Self {
        let span = Span::new(0, len);
        Self::new(side, span, span)
    }
}

/// A staged highlighter: the original it was read from plus its new position.
///
/// `span` is never empty. Zero-length and inverted results are dropped
/// before a `RelocatedAnnotation` is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelocatedAnnotation {
    pub original: Annotation,
    pub span: Span,
}

impl RelocatedAnnotation {
    /// The attribute bag that will be copied onto the materialized highlighter.
    pub fn attributes(&self) -> &HighlightAttributes {
        &self.original.attributes
    }
}
