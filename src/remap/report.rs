//! Apply report types.
//!
//! Structured outcome of materializing staged highlighters, shaped like the
//! other reports in this crate: counts plus the individual failures.

use serde::Serialize;
use std::fmt;

use crate::error::OutOfBoundsError;

/// The result of applying a [`RemapResult`](super::RemapResult) to a target.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    /// Relocations that were staged and offered to the target.
    pub staged: usize,
    /// Highlighters the target accepted.
    pub applied: usize,
    /// Relocations the target rejected.
    pub skipped: usize,
    /// Empty overlaps dropped while staging. Informational only.
    pub discarded: usize,
    /// One entry per skipped relocation, in staging order.
    pub errors: Vec<OutOfBoundsError>,
}

impl ApplyReport {
    /// Creates an empty report for `staged` relocations.
    pub fn new(staged: usize, discarded: usize) -> Self {
        Self {
            staged,
            discarded,
            ..Default::default()
        }
    }

    pub(crate) fn record_applied(&mut self) {
        self.applied += 1;
    }

    pub(crate) fn record_skipped(&mut self, error: OutOfBoundsError) {
        self.skipped += 1;
        self.errors.push(error);
    }

    /// Returns true if every staged relocation made it into the target.
    pub fn is_complete(&self) -> bool {
        self.skipped == 0
    }
}

impl fmt::Display for ApplyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  {} staged, {} applied, {} skipped",
            self.staged, self.applied, self.skipped
        )?;

        if self.discarded > 0 {
            writeln!(f, "  {} empty overlap(s) discarded", self.discarded)?;
        }

        if !self.errors.is_empty() {
            writeln!(f)?;
            writeln!(f, "Skipped ({}):", self.errors.len())?;
            for error in &self.errors {
                writeln!(f, "  - {}", error)?;
            }
        }

        Ok(())
    }
}
