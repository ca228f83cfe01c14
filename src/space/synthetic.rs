//! Documents composed from pieces of two source documents.
//!
//! A side-by-side diff collapsed into a single view is the typical case:
//! unchanged lines come from one side, deleted lines from the left, inserted
//! lines from the right. [`Composer`] assembles the text and, for every
//! piece copied from a source, emits the [`MappingRecord`] the remapper needs
//! to bring that source's highlighters along.

use serde::Serialize;

use crate::error::{InvalidRangeError, OutOfBoundsError};
use crate::model::{Annotation, HighlightAttributes, MappingRecord, Side, Span};

use super::{CoordinateSpace, MarkupModel};

/// Where the text of a piece came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceOrigin {
    /// Copied from a window of one source document.
    Source { side: Side, span: Span },
    /// Supplied directly while composing (separators, placeholders).
    Inserted,
}

/// One contiguous run of the composed text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Piece {
    pub origin: PieceOrigin,
    pub span: Span,
}

/// A composed document and the highlighters materialized into it.
#[derive(Clone, Debug, Default)]
pub struct SyntheticSpace {
    text: String,
    pieces: Vec<Piece>,
    markup: MarkupModel,
}

impl SyntheticSpace {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The pieces in document order. They tile the text without gaps.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn markup(&self) -> &MarkupModel {
        &self.markup
    }

    /// The piece containing `offset`, if any.
    pub fn piece_at(&self, offset: usize) -> Option<&Piece> {
        let index = self.pieces.partition_point(|p| p.span.end <= offset);
        self.pieces.get(index).filter(|p| p.span.contains(offset))
    }
}

impl CoordinateSpace for SyntheticSpace {
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
        self.markup
            .materialize_within(self.text.len(), span, attributes)
    }
}

/// Builds a [`SyntheticSpace`] piece by piece.
///
/// Empty pieces are ignored and produce no mapping record.
///
/// ```
/// use markremap::model::{Side, Span};
/// use markremap::space::Composer;
///
/// let mut composer = Composer::new("let a = 1;\n", "let a = 2;\n");
/// composer.push_left(Span::new(0, 11))?;
/// composer.push_right(Span::new(0, 11))?;
/// let (space, records) = composer.finish();
///
/// assert_eq!(space.text(), "let a = 1;\nlet a = 2;\n");
/// assert_eq!(records[1].side, Side::B);
/// assert_eq!(records[1].dest_span, Span::new(11, 22));
/// # Ok::<(), markremap::InvalidRangeError>(())
/// ```
#[derive(Debug)]
pub struct Composer<'a> {
    left: &'a str,
    right: &'a str,
    text: String,
    pieces: Vec<Piece>,
    records: Vec<MappingRecord>,
}

impl<'a> Composer<'a> {
    pub fn new(left: &'a str, right: &'a str) -> Self {
        Self {
            left,
            right,
            text: String::new(),
            pieces: Vec::new(),
            records: Vec::new(),
        }
    }

    /// Current length of the composed text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Appends `span` of the left document.
    pub fn push_left(&mut self, span: Span) -> Result<&mut Self, InvalidRangeError> {
        self.push_source(Side::A, span)
    }

    /// Appends `span` of the right document.
    pub fn push_right(&mut self, span: Span) -> Result<&mut Self, InvalidRangeError> {
        self.push_source(Side::B, span)
    }

    /// Appends `span` of the document on `side`.
    ///
    /// # Errors
    ///
    /// [`InvalidRangeError`] if the span is inverted, runs past the end of
    /// the source or splits a UTF-8 character.
    pub fn push_source(&mut self, side: Side, span: Span) -> Result<&mut Self, InvalidRangeError> {
        let source = match side {
            Side::A => self.left,
            Side::B => self.right,
        };
        let chunk = source
            .get(span.start..span.end)
            .ok_or_else(|| InvalidRangeError::new(span, source.len()))?;
        if chunk.is_empty() {
            return Ok(self);
        }

        let dest = Span::at(self.text.len(), chunk.len());
        self.text.push_str(chunk);
        self.pieces.push(Piece {
            origin: PieceOrigin::Source { side, span },
            span: dest,
        });
        self.records.push(MappingRecord::new(side, span, dest));
        Ok(self)
    }

    /// Appends literal text that has no source and carries no highlighters.
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        if !text.is_empty() {
            let dest = Span::at(self.text.len(), text.len());
            self.text.push_str(text);
            self.pieces.push(Piece {
                origin: PieceOrigin::Inserted,
                span: dest,
            });
        }
        self
    }

    /// Finishes composition, returning the space (with no highlighters yet)
    /// and the mapping records in the order the pieces were pushed.
    pub fn finish(self) -> (SyntheticSpace, Vec<MappingRecord>) {
        let space = SyntheticSpace {
            text: self.text,
            pieces: self.pieces,
            markup: MarkupModel::new(),
        };
        (space, self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_follow_pieces() {
        let mut composer = Composer::new("alpha\nbeta\n", "alpha\ngamma\n");
        composer
            .push_left(Span::new(0, 6))
            .unwrap()
            .push_left(Span::new(6, 11))
            .unwrap()
            .push_right(Span::new(6, 12))
            .unwrap();
        let (space, records) = composer.finish();

        assert_eq!(space.text(), "alpha\nbeta\ngamma\n");
        assert_eq!(
            records,
            vec![
                MappingRecord::new(Side::A, Span::new(0, 6), Span::new(0, 6)),
                MappingRecord::new(Side::A, Span::new(6, 11), Span::new(6, 11)),
                MappingRecord::new(Side::B, Span::new(6, 12), Span::new(11, 17)),
            ]
        );
        assert_eq!(space.pieces().len(), 3);
        assert!(space.markup().is_empty());
    }

    #[test]
    fn inserted_text_has_no_record() {
        let mut composer = Composer::new("left", "right");
        composer.push_text("--- separator ---\n");
        composer.push_right(Span::new(0, 5)).unwrap();
        let (space, records) = composer.finish();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].dest_span, Span::new(18, 23));
        assert_eq!(space.pieces()[0].origin, PieceOrigin::Inserted);
    }

    #[test]
    fn empty_pieces_are_ignored() {
        let mut composer = Composer::new("abc", "def");
        composer.push_left(Span::new(1, 1)).unwrap();
        composer.push_text("");
        assert!(composer.is_empty());
        let (space, records) = composer.finish();
        assert!(records.is_empty());
        assert!(space.pieces().is_empty());
    }

    #[test]
    fn rejects_out_of_range_and_split_characters() {
        let mut composer = Composer::new("abc", "héllo");
        assert_eq!(
            composer.push_left(Span::new(1, 4)).unwrap_err(),
            InvalidRangeError {
                start: 1,
                end: 4,
                len: 3
            }
        );
        // 'é' occupies bytes 1..3
        assert!(composer.push_right(Span::new(0, 2)).is_err());
        assert!(composer.push_right(Span::new(2, 1)).is_err());
        assert_eq!(composer.len(), 0);
    }

    #[test]
    fn piece_at_finds_owner() {
        let mut composer = Composer::new("aaaa", "bbbb");
        composer.push_left(Span::new(0, 4)).unwrap();
        composer.push_text("|");
        composer.push_right(Span::new(0, 4)).unwrap();
        let (space, _) = composer.finish();

        assert!(matches!(
            space.piece_at(0).map(|p| p.origin),
            Some(PieceOrigin::Source { side: Side::A, .. })
        ));
        assert_eq!(
            space.piece_at(4).map(|p| p.origin),
            Some(PieceOrigin::Inserted)
        );
        assert!(matches!(
            space.piece_at(8).map(|p| p.origin),
            Some(PieceOrigin::Source { side: Side::B, .. })
        ));
        assert!(space.piece_at(9).is_none());
    }
}
