//! The attribute bag carried by every highlighter.
//!
//! None of these values are interpreted by the remapper. They are copied
//! verbatim from a source highlighter onto its relocated counterpart, so a
//! field added here is carried over without touching the remap code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGB color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Decoration drawn under or around highlighted text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectType {
    LineUnderscore,
    WaveUnderscore,
    BoldLineUnderscore,
    BoldDottedLine,
    Boxed,
    RoundedBox,
    StrikeOut,
    SearchMatch,
}

/// Font style flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

/// Visual style applied to the highlighted text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_color: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_type: Option<EffectType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_stripe_color: Option<Color>,

    #[serde(default)]
    pub font_style: FontStyle,
}

/// Which part of the document a highlighter paints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetArea {
    /// Exactly the characters of the range.
    #[default]
    ExactRange,
    /// Every line the range touches, edge to edge.
    LinesInRange,
}

/// Where a line separator is drawn relative to the highlighted line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparatorPlacement {
    Top,
    Bottom,
}

/// Opaque handle to a host-side renderer, filter or icon.
///
/// The host decides what the string means; the remapper only clones it.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RendererRef(pub String);

impl RendererRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RendererRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RendererRef({:?})", self.0)
    }
}

/// Every visual and behavioral property of a highlighter except its position.
///
/// A plain aggregate of optional fields. Two highlighters with equal
/// attributes are indistinguishable apart from where they sit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighlightAttributes {
    /// Painting priority; higher layers draw over lower ones.
    #[serde(default)]
    pub layer: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_attributes: Option<TextAttributes>,

    #[serde(default)]
    pub target_area: TargetArea,

    /// Restricts which editors show the highlighter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_filter: Option<RendererRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_renderer: Option<RendererRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_stripe_mark_color: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_stripe_tooltip: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gutter_icon_renderer: Option<RendererRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_marker_renderer: Option<RendererRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_separator_color: Option<Color>,

    #[serde(default)]
    pub thin_error_stripe_mark: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_separator_placement: Option<SeparatorPlacement>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_separator_renderer: Option<RendererRef>,
}

impl HighlightAttributes {
    /// Creates attributes on the given layer with nothing else set.
    pub fn on_layer(layer: i32) -> Self {
        Self {
            layer,
            ..Default::default()
        }
    }

    /// Sets the text style.
    pub fn with_text_attributes(mut self, text_attributes: TextAttributes) -> Self {
        self.text_attributes = Some(text_attributes);
        self
    }

    /// Sets the painted target area.
    pub fn with_target_area(mut self, target_area: TargetArea) -> Self {
        self.target_area = target_area;
        self
    }

    /// Sets the error stripe tooltip.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.error_stripe_tooltip = Some(tooltip.into());
        self
    }

    /// Sets the error stripe mark color, optionally as a thin mark.
    pub fn with_error_stripe(mut self, color: Color, thin: bool) -> Self {
        self.error_stripe_mark_color = Some(color);
        self.thin_error_stripe_mark = thin;
        self
    }

    /// Sets the gutter icon renderer.
    pub fn with_gutter_icon(mut self, renderer: impl Into<String>) -> Self {
        self.gutter_icon_renderer = Some(RendererRef::new(renderer));
        self
    }

    /// Sets the line marker renderer.
    pub fn with_line_marker(mut self, renderer: impl Into<String>) -> Self {
        self.line_marker_renderer = Some(RendererRef::new(renderer));
        self
    }

    /// Sets the line separator color, placement and renderer together.
    pub fn with_line_separator(
        mut self,
        color: Color,
        placement: SeparatorPlacement,
        renderer: Option<RendererRef>,
    ) -> Self {
        self.line_separator_color = Some(color);
        self.line_separator_placement = Some(placement);
        self.line_separator_renderer = renderer;
        self
    }

    /// Sets the editor filter.
    pub fn with_editor_filter(mut self, filter: impl Into<String>) -> Self {
        self.editor_filter = Some(RendererRef::new(filter));
        self
    }

    /// Sets the custom renderer.
    pub fn with_custom_renderer(mut self, renderer: impl Into<String>) -> Self {
        self.custom_renderer = Some(RendererRef::new(renderer));
        self
    }
}
