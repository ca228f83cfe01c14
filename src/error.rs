use serde::Serialize;
use thiserror::Error;

use crate::model::Span;
use crate::remap::ApplyReport;

/// Query bounds that do not describe a window of the space.
///
/// Raised when `start > end` or `end` exceeds the space length. This is a
/// caller bug and aborts the remap that triggered it.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[error("invalid range {start}..{end} for space of length {len}")]
pub struct InvalidRangeError {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

impl InvalidRangeError {
    pub fn new(span: Span, len: usize) -> Self {
        Self {
            start: span.start,
            end: span.end,
            len,
        }
    }
}

/// A target space refused to materialize a highlighter at the given span.
///
/// Recovered per item during apply: the item is skipped and the error is
/// recorded in the [`ApplyReport`].
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[error("span {start}..{end} is out of bounds for space of length {len}")]
pub struct OutOfBoundsError {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

impl OutOfBoundsError {
    pub fn new(span: Span, len: usize) -> Self {
        Self {
            start: span.start,
            end: span.end,
            len,
        }
    }

    /// The rejected span.
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// The main error type for remap operations.
///
/// Per-item [`OutOfBoundsError`]s are not part of it: apply recovers them and
/// only surfaces them through [`RemapError::PartialApply`] in strict mode.
#[derive(Debug, Error)]
pub enum RemapError {
    #[error(transparent)]
    InvalidRange(#[from] InvalidRangeError),

    #[error("Apply incomplete: {applied} highlighter(s) applied, {skipped} skipped")]
    PartialApply {
        applied: usize,
        skipped: usize,
        report: ApplyReport,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_message_names_bounds() {
        let err = InvalidRangeError::new(Span::new(9, 3), 20);
        assert_eq!(err.to_string(), "invalid range 9..3 for space of length 20");
    }

    #[test]
    fn invalid_range_converts_into_remap_error() {
        let err: RemapError = InvalidRangeError::new(Span::new(0, 12), 10).into();
        assert!(matches!(err, RemapError::InvalidRange(ref e) if e.end == 12));
        assert_eq!(err.to_string(), "invalid range 0..12 for space of length 10");
    }

    #[test]
    fn partial_apply_message_counts_items() {
        let oob = OutOfBoundsError::new(Span::new(5, 40), 30);
        assert_eq!(oob.to_string(), "span 5..40 is out of bounds for space of length 30");

        let err = RemapError::PartialApply {
            applied: 3,
            skipped: 1,
            report: ApplyReport::new(4, 0),
        };
        assert_eq!(err.to_string(), "Apply incomplete: 3 highlighter(s) applied, 1 skipped");
    }
}
