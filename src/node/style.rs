//! Style - optional layout, visual and transform attributes.
//!
//! Every field is `None` until set; unset layout fields fall back to the flex
//! solver's defaults. Each `with_*` combinator returns a new `Style` with
//! exactly that field changed.
//!
//! # Example
//!
//! ```
//! use spark_ui::{FlexDirection, Rgba, Style, Transform};
//!
//! let style = Style::new()
//!     .with_size(120.0, 40.0)
//!     .with_flex_direction(FlexDirection::Row)
//!     .with_background(Rgba::BLUE)
//!     .with_border_radius(8.0)
//!     .with_transform(Transform::translate(4.0, 0.0));
//!
//! assert_eq!(style.width, Some(120.0));
//! assert_eq!(style.effective_border_radius(), Some(8.0));
//! ```

use crate::types::{AlignItems, Attr, Edges, FlexDirection, JustifyContent, PositionType, Rgba};

// =============================================================================
// Transform
// =============================================================================

/// A post-layout transform applied to a node's position.
///
/// Only translations move geometry. `Scale`, `ScaleXY` and `Rotate` are kept in
/// the tree so renderers can read them, but they contribute no offset.
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    Translate { x: f32, y: f32 },
    TranslateX(f32),
    TranslateY(f32),
    Scale(f32),
    ScaleXY { x: f32, y: f32 },
    /// Rotation in radians.
    Rotate(f32),
    /// Applied left to right.
    Compose(Vec<Transform>),
}

impl Transform {
    pub const fn translate(x: f32, y: f32) -> Self {
        Self::Translate { x, y }
    }

    /// Cumulative `(dx, dy)` translation of this transform.
    pub fn offset(&self) -> (f32, f32) {
        self.accumulate((0.0, 0.0))
    }

    fn accumulate(&self, (dx, dy): (f32, f32)) -> (f32, f32) {
        match self {
            Self::Translate { x, y } => (dx + x, dy + y),
            Self::TranslateX(x) => (dx + x, dy),
            Self::TranslateY(y) => (dx, dy + y),
            Self::Scale(_) | Self::ScaleXY { .. } | Self::Rotate(_) => (dx, dy),
            Self::Compose(list) => list.iter().fold((dx, dy), |acc, t| t.accumulate(acc)),
        }
    }

    /// Append `next` after this transform.
    pub fn then(self, next: Transform) -> Self {
        match self {
            Self::Compose(mut list) => {
                list.push(next);
                Self::Compose(list)
            }
            first => Self::Compose(vec![first, next]),
        }
    }
}

// =============================================================================
// Border
// =============================================================================

/// Resolved border paint for a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub color: Rgba,
    pub width: f32,
    pub radius: f32,
}

/// Largest radius that keeps a rounded rect of `width × height` well formed.
#[inline]
pub fn clamp_radius(radius: f32, width: f32, height: f32) -> f32 {
    radius.max(0.0).min(width.min(height) / 2.0)
}

// =============================================================================
// Style
// =============================================================================

/// Layout, paint and transform attributes of a node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    // Paint
    pub background: Option<Rgba>,
    pub border_color: Option<Rgba>,
    pub border_width: Option<f32>,
    /// Stored as requested; see [`Style::effective_border_radius`].
    pub border_radius: Option<f32>,
    pub text_color: Option<Rgba>,
    pub text_size: Option<f32>,
    pub text_attrs: Option<Attr>,

    // Box model
    pub padding: Option<Edges>,
    pub margin: Option<Edges>,
    pub width: Option<f32>,
    pub height: Option<f32>,

    // Positioning
    pub position_type: Option<PositionType>,
    pub x: Option<f32>,
    pub y: Option<f32>,

    // Flex container
    pub flex_direction: Option<FlexDirection>,
    pub justify_content: Option<JustifyContent>,
    pub align_items: Option<AlignItems>,
    pub gap: Option<f32>,

    // Flex item
    pub flex_grow: Option<f32>,
    pub flex_shrink: Option<f32>,
    pub flex_basis: Option<f32>,

    pub transform: Option<Transform>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    /// Border color and stroke width.
    pub fn with_border(mut self, color: Rgba, width: f32) -> Self {
        self.border_color = Some(color);
        self.border_width = Some(width);
        self
    }

    pub fn with_border_color(mut self, color: Rgba) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn with_border_width(mut self, width: f32) -> Self {
        self.border_width = Some(width);
        self
    }

    /// Corner radius. Clamped when the style is resolved, not here, so the
    /// order relative to [`Style::with_size`] does not matter.
    pub fn with_border_radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn with_text_color(mut self, color: Rgba) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = Some(size);
        self
    }

    pub fn with_text_attrs(mut self, attrs: Attr) -> Self {
        self.text_attrs = Some(attrs);
        self
    }

    /// Same padding on every edge.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = Some(Edges::all(padding));
        self
    }

    pub fn with_padding_edges(mut self, padding: Edges) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn with_margin(mut self, margin: Edges) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_size(self, width: f32, height: f32) -> Self {
        self.with_width(width).with_height(height)
    }

    pub fn with_position_type(mut self, position_type: PositionType) -> Self {
        self.position_type = Some(position_type);
        self
    }

    /// Shorthand for `with_position_type(PositionType::Absolute)`.
    pub fn absolute(self) -> Self {
        self.with_position_type(PositionType::Absolute)
    }

    pub fn with_x(mut self, x: f32) -> Self {
        self.x = Some(x);
        self
    }

    pub fn with_y(mut self, y: f32) -> Self {
        self.y = Some(y);
        self
    }

    pub fn with_flex_direction(mut self, direction: FlexDirection) -> Self {
        self.flex_direction = Some(direction);
        self
    }

    pub fn with_justify_content(mut self, justify: JustifyContent) -> Self {
        self.justify_content = Some(justify);
        self
    }

    pub fn with_align_items(mut self, align: AlignItems) -> Self {
        self.align_items = Some(align);
        self
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }

    pub fn with_flex_grow(mut self, grow: f32) -> Self {
        self.flex_grow = Some(grow);
        self
    }

    pub fn with_flex_shrink(mut self, shrink: f32) -> Self {
        self.flex_shrink = Some(shrink);
        self
    }

    pub fn with_flex_basis(mut self, basis: f32) -> Self {
        self.flex_basis = Some(basis);
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Position kind, defaulting to `Relative`.
    pub fn position(&self) -> PositionType {
        self.position_type.unwrap_or_default()
    }

    pub fn is_absolute(&self) -> bool {
        self.position() == PositionType::Absolute
    }

    /// Cumulative translation of the node's transform.
    pub fn transform_offset(&self) -> (f32, f32) {
        self.transform.as_ref().map_or((0.0, 0.0), Transform::offset)
    }

    /// Border radius after clamping against the explicit size.
    ///
    /// Clamps to half the smaller of width and height when both are set.
    /// Otherwise the requested radius is returned as is and the layout pass
    /// clamps it against the resolved bounds.
    pub fn effective_border_radius(&self) -> Option<f32> {
        let radius = self.border_radius?;
        Some(match (self.width, self.height) {
            (Some(w), Some(h)) => clamp_radius(radius, w, h),
            _ => radius.max(0.0),
        })
    }

    /// Border to paint, if any.
    ///
    /// A border needs a color and a positive width.
    pub fn border(&self) -> Option<Border> {
        let color = self.border_color?;
        let width = self.border_width.unwrap_or(1.0);
        if width <= 0.0 || color.is_transparent() {
            return None;
        }
        Some(Border {
            color,
            width,
            radius: self.effective_border_radius().unwrap_or(0.0),
        })
    }

    pub fn padding_or_zero(&self) -> Edges {
        self.padding.unwrap_or(Edges::ZERO)
    }
}
