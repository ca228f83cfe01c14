//! Interval store backing every coordinate space.

use crate::error::{InvalidRangeError, OutOfBoundsError};
use crate::model::{Annotation, AnnotationId, HighlightAttributes, Span};

/// The highlighters attached to one document, kept sorted by position.
///
/// Annotations are ordered by `(start, end, id)`. Overlap queries
/// binary-search for the first annotation starting at or past the window end
/// and then filter the candidates before it by intersection, so results come
/// out already sorted.
#[derive(Clone, Debug)]
pub struct MarkupModel {
    annotations: Vec<Annotation>,
    next_id: u64,
}

impl Default for MarkupModel {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self {
            annotations: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of highlighters in the model.
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Iterates over all highlighters in position order.
    pub fn iter(&self) -> std::slice::Iter<'_, Annotation> {
        self.annotations.iter()
    }

    /// Looks up a highlighter by id.
    pub fn get(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }

    /// Adds a highlighter with a freshly assigned id.
    ///
    /// No bounds checking happens here; the owning space is responsible
    /// for that.
    pub fn add(&mut self, span: Span, attributes: HighlightAttributes) -> Annotation {
        let annotation = Annotation::new(self.next_id, span, attributes);
        self.insert(annotation.clone());
        annotation
    }

    /// Inserts a highlighter that already carries an id.
    ///
    /// Later calls to [`add`](Self::add) never reuse an id at or below it.
    pub fn insert(&mut self, annotation: Annotation) {
        self.next_id = self.next_id.max(annotation.id.next().as_u64());
        let key = sort_key(&annotation);
        let index = self.annotations.partition_point(|a| sort_key(a) <= key);
        self.annotations.insert(index, annotation);
    }

    /// Removes a highlighter by id, returning it if present.
    pub fn remove(&mut self, id: AnnotationId) -> Option<Annotation> {
        let index = self.annotations.iter().position(|a| a.id == id)?;
        Some(self.annotations.remove(index))
    }

    /// Removes every highlighter. Ids keep counting up.
    pub fn clear(&mut self) {
        self.annotations.clear();
    }

    /// Iterates over highlighters sharing at least one offset with `window`.
    ///
    /// Intersection is half-open: a highlighter ending exactly at
    /// `window.start` or starting exactly at `window.end` is left out, and
    /// zero-length highlighters (or an empty window) match nothing.
    pub fn overlapping(&self, window: Span) -> impl Iterator<Item = &Annotation> + '_ {
        let upper = self
            .annotations
            .partition_point(|a| a.span.start < window.end);
        self.annotations[..upper]
            .iter()
            .filter(move |a| a.span.intersects(&window))
    }

    /// Snapshot of [`overlapping`](Self::overlapping) after validating the
    /// window against a space of length `len`.
    pub fn query_within(
        &self,
        len: usize,
        window: Span,
    ) -> Result<Vec<Annotation>, InvalidRangeError> {
        if !window.is_ordered() || window.end > len {
            return Err(InvalidRangeError::new(window, len));
        }
        Ok(self.overlapping(window).cloned().collect())
    }

    /// Adds a highlighter after checking `span` fits a space of length `len`.
    ///
    /// Zero-length spans are accepted as long as they sit inside the space.
    pub fn materialize_within(
        &mut self,
        len: usize,
        span: Span,
        attributes: HighlightAttributes,
    ) -> Result<Annotation, OutOfBoundsError> {
        if !span.is_ordered() || span.end > len {
            return Err(OutOfBoundsError::new(span, len));
        }
        Ok(self.add(span, attributes))
    }
}

impl<'a> IntoIterator for &'a MarkupModel {
    type Item = &'a Annotation;
    type IntoIter = std::slice::Iter<'a, Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn sort_key(annotation: &Annotation) -> (usize, usize, AnnotationId) {
    (annotation.span.start, annotation.span.end, annotation.id)
}
