#![allow(dead_code)]

use markremap::model::{
    Color, HighlightAttributes, MappingRecord, RendererRef, SeparatorPlacement, Side, Span,
    TargetArea,
};
use markremap::space::LiveSpace;
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// A source space together with the spans it was seeded with.
#[derive(Clone, Debug)]
pub struct SeededSpace {
    pub space: LiveSpace,
    pub spans: Vec<Span>,
}

pub fn arb_attributes() -> BoxedStrategy<HighlightAttributes> {
    (
        -10i32..10_000,
        proptest::option::of("[a-z ]{1,16}"),
        proptest::option::of((any::<u8>(), any::<u8>(), any::<u8>())),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of("[a-z/]{1,12}"),
    )
        .prop_map(|(layer, tooltip, stripe, thin, lines, icon)| {
            let mut attrs = HighlightAttributes::on_layer(layer);
            attrs.error_stripe_tooltip = tooltip;
            attrs.error_stripe_mark_color = stripe.map(|(r, g, b)| Color::rgb(r, g, b));
            attrs.thin_error_stripe_mark = thin;
            if lines {
                attrs.target_area = TargetArea::LinesInRange;
                attrs.line_separator_placement = Some(SeparatorPlacement::Top);
            }
            attrs.gutter_icon_renderer = icon.map(RendererRef::new);
            attrs
        })
        .boxed()
}

/// A span inside `[0, len]`, possibly empty.
pub fn arb_span_within(len: usize) -> BoxedStrategy<Span> {
    (0..=len, 0..=len)
        .prop_map(|(a, b)| Span::new(a.min(b), a.max(b)))
        .boxed()
}

pub fn arb_space(max_len: usize, max_anns: usize) -> BoxedStrategy<SeededSpace> {
    assert!(max_len > 0, "max_len must be > 0");

    (1usize..=max_len)
        .prop_flat_map(move |len| {
            (
                Just(len),
                proptest::collection::vec((arb_span_within(len), arb_attributes()), 0..=max_anns),
            )
        })
        .prop_map(|(len, seeds)| {
            let mut space = LiveSpace::blank(len);
            let mut spans = Vec::with_capacity(seeds.len());
            for (span, attrs) in seeds {
                space
                    .add_annotation(span, attrs)
                    .expect("seed span is within bounds");
                spans.push(span);
            }
            SeededSpace { space, spans }
        })
        .boxed()
}

/// A mapping record whose source window lies inside `[0, source_len]`.
///
/// The destination length is drawn independently of the source length, so
/// it may be shorter, equal or longer.
pub fn arb_record(
    side: Side,
    source_len: usize,
    max_dest_start: usize,
) -> BoxedStrategy<MappingRecord> {
    (
        arb_span_within(source_len),
        0..=max_dest_start,
        0..=source_len * 2,
    )
        .prop_map(move |(source_span, dest_start, dest_len)| {
            MappingRecord::new(side, source_span, Span::at(dest_start, dest_len))
        })
        .boxed()
}

/// A mapping record whose destination starts close enough to `usize::MAX`
/// that some relocations cannot be represented.
pub fn arb_record_near_max(side: Side, source_len: usize) -> BoxedStrategy<MappingRecord> {
    (arb_span_within(source_len), 0..=source_len)
        .prop_map(move |(source_span, headroom)| {
            let dest_start = usize::MAX - headroom;
            MappingRecord::new(side, source_span, Span::new(dest_start, usize::MAX))
        })
        .boxed()
}
