//! Render primitives - the flat, ordered output consumed by a renderer.
//!
//! The list order is the paint order. A renderer must not reorder it:
//! a node's background precedes its children, and absolutely positioned
//! children come after their relative siblings so they paint on top.

use crate::node::{Paint, PathSegment};
use crate::types::{Attr, Bounds, Point, Rgba};

/// Shape tag of a render primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderShape {
    Rectangle,
    RoundedRectangle { radius: f32 },
    Ellipse,
    /// Segments in absolute pixel coordinates.
    Path(Vec<PathSegment>),
    /// Text drawn with its baseline starting at `baseline`.
    Text { content: String, baseline: Point },
}

/// How a render primitive is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderPaint {
    Fill(Rgba),
    Stroke { color: Rgba, width: f32 },
    FillAndStroke { fill: Rgba, stroke: Rgba, width: f32 },
    Text { color: Rgba, size: f32, attrs: Attr },
}

impl From<Paint> for RenderPaint {
    fn from(paint: Paint) -> Self {
        match paint {
            Paint::Fill(color) => Self::Fill(color),
            Paint::Stroke { color, width } => Self::Stroke { color, width },
            Paint::FillAndStroke { fill, stroke, width } => {
                Self::FillAndStroke { fill, stroke, width }
            }
        }
    }
}

/// One paint-ready record.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPrimitive {
    pub bounds: Bounds,
    pub shape: RenderShape,
    pub paint: RenderPaint,
}

impl RenderPrimitive {
    pub fn is_text(&self) -> bool {
        matches!(self.shape, RenderShape::Text { .. })
    }

    /// Text content, if this is a text primitive.
    pub fn text(&self) -> Option<&str> {
        match &self.shape {
            RenderShape::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}
