//! Markremap: relocate range highlighters between documents.
//!
//! Given highlighters anchored to offsets in one or two source documents,
//! markremap produces equivalent highlighters anchored in a different
//! document, typically a synthetic one composed from pieces of the sources
//! (a unified diff view, for example). Every attribute of a highlighter is
//! carried over; only its position changes.
//!
//! # Modules
//!
//! - [`model`]: Spans, highlighters, their attribute bag and mapping records
//! - [`space`]: The [`CoordinateSpace`](space::CoordinateSpace) trait with
//!   live and synthetic implementations
//! - [`remap`]: Clip-and-translate, staging and apply
//! - [`error`]: Error types for remap operations
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (`debug` summaries, `trace` for each
//! discarded empty overlap, `warn` for each skipped highlighter) and leaves
//! subscriber setup to the host.

pub mod error;
pub mod model;
pub mod remap;
pub mod space;

pub use error::{InvalidRangeError, OutOfBoundsError, RemapError};
pub use remap::{
    clip_and_translate, remap_composed, remap_direct, ApplyOptions, ApplyReport, RemapResult,
    Sources,
};
