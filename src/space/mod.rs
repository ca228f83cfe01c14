//! Coordinate spaces that own highlighters.
//!
//! A [`CoordinateSpace`] is anything with a known length that can answer
//! overlap queries and accept new highlighters. Two implementations ship
//! with the crate:
//!
//! - [`LiveSpace`]: an existing document and its markup.
//! - [`SyntheticSpace`]: a document composed from pieces of other documents,
//!   built with a [`Composer`].

mod live;
mod markup;
mod synthetic;

pub use live::LiveSpace;
pub use markup::MarkupModel;
pub use synthetic::{Composer, Piece, PieceOrigin, SyntheticSpace};

use crate::error::{InvalidRangeError, OutOfBoundsError};
use crate::model::{Annotation, HighlightAttributes, Span};

/// An addressable offset space carrying highlighters.
pub trait CoordinateSpace {
    /// Total length of the space. Valid offsets are `0..=len()`.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a snapshot of every highlighter intersecting `window`, sorted
    /// by start offset, then end offset.
    ///
    /// Intersection is half-open: highlighters that only touch a boundary
    /// of the window are not returned, nor are zero-length ones.
    ///
    /// # Errors
    ///
    /// [`InvalidRangeError`] if `window.start > window.end` or
    /// `window.end > self.len()`.
    fn query(&self, window: Span) -> Result<Vec<Annotation>, InvalidRangeError>;

    /// Creates a highlighter at `span` carrying `attributes`.
    ///
    /// # Errors
    ///
    /// [`OutOfBoundsError`] if the span is inverted or extends past the end
    /// of the space.
    fn materialize(
        &mut self,
        span: Span,
        attributes: HighlightAttributes,
    ) -> Result<Annotation, OutOfBoundsError>;
}
