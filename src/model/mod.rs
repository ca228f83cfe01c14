//! Data model shared by coordinate spaces and the remapper.
//!
//! # Design Principles
//!
//! 1. **Opaque attributes**: [`HighlightAttributes`] is a plain aggregate
//!    that the remapper clones wholesale. It never inspects individual
//!    fields, so nothing can be dropped by accident.
//!
//! 2. **Permissive construction**: [`Span`] accepts inverted intervals so
//!    that query bounds are validated in one place, the coordinate space.
//!
//! # Example
//!
//! ```
//! use markremap::model::{Annotation, HighlightAttributes, MappingRecord, Side, Span};
//!
//! let ann = Annotation::new(1u64, Span::new(8, 20), HighlightAttributes::on_layer(5000));
//! let record = MappingRecord::new(Side::A, Span::new(5, 15), Span::new(100, 110));
//! assert!(ann.span.intersects(&record.source_span));
//! ```

mod annotation;
mod attributes;
mod ids;
mod span;

pub use annotation::{Annotation, MappingRecord, RelocatedAnnotation, Side};
pub use attributes::{
    Color, EffectType, FontStyle, HighlightAttributes, RendererRef, SeparatorPlacement,
    TargetArea, TextAttributes,
};
pub use ids::AnnotationId;
pub use span::Span;
