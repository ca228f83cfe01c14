//! Relocating highlighters between coordinate spaces.
//!
//! Remapping happens in two phases:
//!
//! 1. **Staging**: [`remap_direct`] or [`remap_composed`] read highlighters
//!    from the sources, clip each one to its mapping window with
//!    [`clip_and_translate`] and collect the results in a [`RemapResult`].
//!    The sources are only borrowed for this phase.
//! 2. **Apply**: [`RemapResult::apply`] materializes every staged highlighter
//!    in a target space, carrying all of its attributes along.
//!
//! ```
//! use markremap::model::{HighlightAttributes, MappingRecord, Side, Span};
//! use markremap::remap::{remap_composed, Sources};
//! use markremap::space::{CoordinateSpace, LiveSpace};
//!
//! let mut source = LiveSpace::blank(40);
//! source.add_annotation(Span::new(0, 10), HighlightAttributes::on_layer(1))?;
//! source.add_annotation(Span::new(8, 20), HighlightAttributes::on_layer(2))?;
//!
//! let records = [MappingRecord::new(Side::A, Span::new(5, 15), Span::new(100, 110))];
//! let result = remap_composed(Sources::left_only(&source), &records)?;
//! assert_eq!(result.spans(), vec![Span::new(100, 105), Span::new(103, 110)]);
//!
//! let mut target = LiveSpace::blank(120);
//! let report = result.apply(&mut target);
//! assert_eq!(report.applied, 2);
//! assert_eq!(target.query(Span::new(0, 120))?.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod report;

pub use report::ApplyReport;

use std::fmt;

use tracing::{debug, trace, warn};

use crate::error::RemapError;
use crate::model::{Annotation, MappingRecord, RelocatedAnnotation, Side, Span};
use crate::space::{CoordinateSpace, LiveSpace};

/// Options for apply behavior.
#[derive(Clone, Debug, Default)]
pub struct ApplyOptions {
    /// If true, any skipped relocation makes apply return an error once the
    /// remaining relocations have been applied.
    pub strict: bool,
}

/// The source spaces feeding a composed remap, one per side.
///
/// A missing side is allowed; records naming it stage nothing.
#[derive(Clone, Copy, Default)]
pub struct Sources<'a> {
    pub a: Option<&'a dyn CoordinateSpace>,
    pub b: Option<&'a dyn CoordinateSpace>,
}

impl<'a> Sources<'a> {
    pub fn new(a: &'a dyn CoordinateSpace, b: &'a dyn CoordinateSpace) -> Self {
        Self {
            a: Some(a),
            b: Some(b),
        }
    }

    pub fn left_only(a: &'a dyn CoordinateSpace) -> Self {
        Self {
            a: Some(a),
            b: None,
        }
    }

    pub fn right_only(b: &'a dyn CoordinateSpace) -> Self {
        Self {
            a: None,
            b: Some(b),
        }
    }

    /// The space on `side`, if one was supplied.
    pub fn get(&self, side: Side) -> Option<&'a dyn CoordinateSpace> {
        match side {
            Side::A => self.a,
            Side::B => self.b,
        }
    }
}

impl fmt::Debug for Sources<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sources")
            .field("a_len", &self.a.map(|s| s.len()))
            .field("b_len", &self.b.map(|s| s.len()))
            .finish()
    }
}

/// Clips `annotation` to the record's source window and re-anchors the
/// overlap at the record's destination.
///
/// Returns `None` when the clipped overlap is empty, which covers disjoint
/// annotations, annotations that only touch a window boundary, zero-length
/// annotations and inverted source windows. Also `None` when the relocated
/// span would run past `usize::MAX`.
pub fn clip_and_translate(
    record: &MappingRecord,
    annotation: &Annotation,
) -> Option<RelocatedAnnotation> {
    let source = record.source_span;

    // An annotation ending before the window would have a negative relative end.
    if annotation.end() < source.start {
        return None;
    }
    let relative_start = annotation.start().saturating_sub(source.start);
    let relative_end = (annotation.end() - source.start).min(source.len());
    if relative_end <= relative_start {
        return None;
    }

    let span = Span::new(relative_start, relative_end).shifted(record.dest_span.start)?;
    Some(RelocatedAnnotation {
        original: annotation.clone(),
        span,
    })
}

/// Staged highlighters waiting to be applied to a target space.
///
/// Holds clones of the source highlighters, so later changes to the sources
/// do not affect what gets applied. Duplicates are kept: two highlighters
/// may legitimately land on the same interval.
#[derive(Clone, Debug, Default)]
pub struct RemapResult {
    staged: Vec<RelocatedAnnotation>,
    discarded: usize,
}

impl RemapResult {
    /// Number of staged relocations.
    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Number of queried highlighters dropped because their clipped overlap
    /// was empty.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Iterates over staged relocations in staging order.
    pub fn iter(&self) -> std::slice::Iter<'_, RelocatedAnnotation> {
        self.staged.iter()
    }

    /// The destination spans in staging order.
    pub fn spans(&self) -> Vec<Span> {
        self.staged.iter().map(|r| r.span).collect()
    }

    fn stage(&mut self, record: &MappingRecord, annotations: &[Annotation]) {
        for annotation in annotations {
            match clip_and_translate(record, annotation) {
                Some(relocated) => self.staged.push(relocated),
                None => {
                    trace!(
                        id = %annotation.id,
                        span = %annotation.span,
                        window = %record.source_span,
                        "empty overlap discarded"
                    );
                    self.discarded += 1;
                }
            }
        }
    }

    /// Materializes every staged highlighter in `target`.
    ///
    /// A relocation the target rejects is skipped and recorded in the
    /// report; the rest are still applied. Calling this twice adds every
    /// highlighter twice.
    pub fn apply<S>(&self, target: &mut S) -> ApplyReport
    where
        S: CoordinateSpace + ?Sized,
    {
        let mut report = ApplyReport::new(self.staged.len(), self.discarded);

        for relocated in &self.staged {
            match target.materialize(relocated.span, relocated.original.attributes.clone()) {
                Ok(_) => report.record_applied(),
                Err(err) => {
                    warn!(
                        id = %relocated.original.id,
                        span = %relocated.span,
                        target_len = target.len(),
                        "skipping highlighter: {}",
                        err
                    );
                    report.record_skipped(err);
                }
            }
        }

        debug!(
            staged = report.staged,
            applied = report.applied,
            skipped = report.skipped,
            "apply finished"
        );
        report
    }

    /// Like [`apply`](Self::apply), honoring `opts`.
    ///
    /// # Errors
    ///
    /// With `opts.strict`, [`RemapError::PartialApply`] if anything was
    /// skipped. The target still holds every highlighter that was accepted.
    pub fn apply_with<S>(
        &self,
        target: &mut S,
        opts: &ApplyOptions,
    ) -> Result<ApplyReport, RemapError>
    where
        S: CoordinateSpace + ?Sized,
    {
        let report = self.apply(target);
        if opts.strict && !report.is_complete() {
            return Err(RemapError::PartialApply {
                applied: report.applied,
                skipped: report.skipped,
                report,
            });
        }
        Ok(report)
    }

    /// Applies to a fresh [`LiveSpace`] over `text`, for callers that have
    /// no target markup yet.
    pub fn apply_to_new(&self, text: impl Into<String>) -> (LiveSpace, ApplyReport) {
        let mut target = LiveSpace::new(text);
        let report = self.apply(&mut target);
        (target, report)
    }
}

impl<'a> IntoIterator for &'a RemapResult {
    type Item = &'a RelocatedAnnotation;
    type IntoIter = std::slice::Iter<'a, RelocatedAnnotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Stages every highlighter of `source` at its current position.
///
/// Zero-length highlighters are dropped, as in any other remap.
pub fn remap_direct<S>(source: &S) -> Result<RemapResult, RemapError>
where
    S: CoordinateSpace + ?Sized,
{
    let len = source.len();
    let record = MappingRecord::identity(Side::A, len);
    let annotations = source.query(Span::new(0, len))?;

    let mut result = RemapResult::default();
    result.stage(&record, &annotations);

    debug!(
        staged = result.len(),
        discarded = result.discarded,
        "direct remap staged"
    );
    Ok(result)
}

/// Stages the highlighters selected by `records`, in record order.
///
/// # Errors
///
/// [`RemapError::InvalidRange`] from the first record whose source window
/// its space rejects. Nothing staged so far is returned in that case.
pub fn remap_composed(
    sources: Sources<'_>,
    records: &[MappingRecord],
) -> Result<RemapResult, RemapError> {
    let mut result = RemapResult::default();

    for record in records {
        let Some(space) = sources.get(record.side) else {
            debug!(side = record.side.as_str(), "no source for side, record skipped");
            continue;
        };
        let annotations = space.query(record.source_span)?;
        result.stage(record, &annotations);
    }

    debug!(
        records = records.len(),
        staged = result.len(),
        discarded = result.discarded,
        "composed remap staged"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HighlightAttributes;

    fn ann(id: u64, start: usize, end: usize) -> Annotation {
        Annotation::new(id, Span::new(start, end), HighlightAttributes::on_layer(id as i32))
    }

    fn record(source: (usize, usize), dest: (usize, usize)) -> MappingRecord {
        MappingRecord::new(
            Side::A,
            Span::new(source.0, source.1),
            Span::new(dest.0, dest.1),
        )
    }

    fn clipped(record: &MappingRecord, start: usize, end: usize) -> Option<Span> {
        clip_and_translate(record, &ann(1, start, end)).map(|r| r.span)
    }

    #[test]
    fn clip_partial_overlap_on_each_side() {
        let r = record((5, 15), (100, 110));
        assert_eq!(clipped(&r, 0, 10), Some(Span::new(100, 105)));
        assert_eq!(clipped(&r, 8, 20), Some(Span::new(103, 110)));
    }

    #[test]
    fn clip_containing_annotation_to_window() {
        let r = record((5, 15), (100, 110));
        assert_eq!(clipped(&r, 0, 50), Some(Span::new(100, 110)));
    }

    #[test]
    fn clip_inner_annotation_keeps_length() {
        let r = record((5, 15), (100, 110));
        assert_eq!(clipped(&r, 6, 9), Some(Span::new(101, 104)));
    }

    #[test]
    fn clip_discards_disjoint_and_touching() {
        let r = record((5, 15), (100, 110));
        assert_eq!(clipped(&r, 25, 30), None);
        assert_eq!(clipped(&r, 0, 3), None);
        assert_eq!(clipped(&r, 0, 5), None);
        assert_eq!(clipped(&r, 15, 20), None);
    }

    #[test]
    fn clip_discards_zero_length() {
        let r = record((0, 20), (0, 20));
        assert_eq!(clipped(&r, 5, 5), None);
        assert_eq!(clipped(&r, 0, 0), None);
    }

    #[test]
    fn clip_uses_source_length_when_dest_differs() {
        // Dest shorter than source: offsets still map one to one.
        let r = record((10, 20), (0, 4));
        assert_eq!(clipped(&r, 12, 30), Some(Span::new(2, 10)));
    }

    #[test]
    fn clip_destination_past_usize_max_stages_nothing() {
        let r = record((0, 10), (usize::MAX - 5, usize::MAX));
        assert_eq!(clipped(&r, 0, 10), None);
        assert_eq!(clipped(&r, 2, 8), None);
        // Still representable: ends exactly at usize::MAX.
        assert_eq!(clipped(&r, 0, 5), Some(Span::new(usize::MAX - 5, usize::MAX)));
    }

    #[test]
    fn stage_counts_overflowing_destination_as_discarded() {
        let r = record((0, 10), (usize::MAX - 5, usize::MAX));
        let mut result = RemapResult::default();
        result.stage(&r, &[ann(1, 0, 10), ann(2, 1, 3)]);
        assert_eq!(result.spans(), vec![Span::new(usize::MAX - 4, usize::MAX - 2)]);
        assert_eq!(result.discarded(), 1);
    }

    #[test]
    fn clip_with_inverted_window_stages_nothing() {
        let r = record((15, 5), (0, 10));
        assert_eq!(clipped(&r, 0, 30), None);
    }

    #[test]
    fn clip_keeps_original_for_attribute_copy() {
        let r = record((0, 10), (50, 60));
        let original = ann(9, 2, 4);
        let relocated = clip_and_translate(&r, &original).unwrap();
        assert_eq!(relocated.original, original);
        assert_eq!(relocated.attributes().layer, 9);
    }

    #[test]
    fn stage_counts_discards() {
        let r = record((5, 15), (100, 110));
        let mut result = RemapResult::default();
        result.stage(&r, &[ann(1, 0, 10), ann(2, 8, 20), ann(3, 25, 30), ann(4, 15, 16)]);
        assert_eq!(result.len(), 2);
        assert_eq!(result.discarded(), 2);
        assert_eq!((&result).into_iter().count(), 2);
    }

    #[test]
    fn missing_side_stages_nothing() {
        let mut right = LiveSpace::blank(10);
        right
            .add_annotation(Span::new(0, 10), HighlightAttributes::default())
            .unwrap();
        let records = [record((0, 10), (0, 10))];
        let result = remap_composed(Sources::right_only(&right), &records).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.discarded(), 0);
    }

    #[test]
    fn invalid_window_aborts_remap() {
        let left = LiveSpace::blank(10);
        let records = [record((0, 5), (0, 5)), record((4, 11), (5, 12))];
        let err = remap_composed(Sources::left_only(&left), &records).unwrap_err();
        assert!(matches!(err, RemapError::InvalidRange(ref e) if e.end == 11 && e.len == 10));
    }

    #[test]
    fn strict_apply_reports_partial_failure() {
        let mut source = LiveSpace::blank(20);
        source
            .add_annotation(Span::new(2, 4), HighlightAttributes::default())
            .unwrap();
        source
            .add_annotation(Span::new(12, 18), HighlightAttributes::default())
            .unwrap();
        let result = remap_direct(&source).unwrap();

        let mut target = LiveSpace::blank(10);
        let err = result
            .apply_with(&mut target, &ApplyOptions { strict: true })
            .unwrap_err();
        match err {
            RemapError::PartialApply {
                applied,
                skipped,
                report,
            } => {
                assert_eq!(applied, 1);
                assert_eq!(skipped, 1);
                assert_eq!(report.errors[0].span(), Span::new(12, 18));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(target.markup().len(), 1);

        let mut lenient = LiveSpace::blank(10);
        let report = result
            .apply_with(&mut lenient, &ApplyOptions::default())
            .unwrap();
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn apply_to_new_creates_target() {
        let mut source = LiveSpace::new("hello world");
        source
            .add_annotation(Span::new(6, 11), HighlightAttributes::on_layer(3))
            .unwrap();
        let (target, report) = remap_direct(&source).unwrap().apply_to_new("hello world");
        assert!(report.is_complete());
        assert_eq!(target.markup().iter().next().map(|a| a.span), Some(Span::new(6, 11)));
    }
}
