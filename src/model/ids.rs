//! Highlighter identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an annotation within the coordinate space that owns it.
///
/// Ids are only unique per space: a relocated annotation receives a fresh id
/// from its target space, never the id it had in its source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationId(pub u64);

impl AnnotationId {
    #[inline]
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The id a space hands out after this one. Saturates at `u64::MAX`.
    #[inline]
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for AnnotationId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
