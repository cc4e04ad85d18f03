//! Canvas drawing primitives.
//!
//! Pure geometry plus a paint description. Coordinates are local to the
//! canvas node; the layout pass translates them into absolute space.

use crate::types::{Point, Rgba};

/// How a shape is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill(Rgba),
    Stroke { color: Rgba, width: f32 },
    FillAndStroke { fill: Rgba, stroke: Rgba, width: f32 },
}

impl Paint {
    /// Half the stroke width, i.e. how far paint reaches outside the geometry.
    fn stroke_overhang(&self) -> f32 {
        match self {
            Self::Fill(_) => 0.0,
            Self::Stroke { width, .. } | Self::FillAndStroke { width, .. } => width / 2.0,
        }
    }
}

/// One segment of a vector path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { ctrl: Point, to: Point },
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    Close,
}

impl PathSegment {
    fn translated(self, dx: f32, dy: f32) -> Self {
        match self {
            Self::MoveTo(p) => Self::MoveTo(p.offset(dx, dy)),
            Self::LineTo(p) => Self::LineTo(p.offset(dx, dy)),
            Self::QuadTo { ctrl, to } => Self::QuadTo {
                ctrl: ctrl.offset(dx, dy),
                to: to.offset(dx, dy),
            },
            Self::CubicTo { ctrl1, ctrl2, to } => Self::CubicTo {
                ctrl1: ctrl1.offset(dx, dy),
                ctrl2: ctrl2.offset(dx, dy),
                to: to.offset(dx, dy),
            },
            Self::Close => Self::Close,
        }
    }

    pub(crate) fn points(&self) -> impl Iterator<Item = Point> {
        let pts: [Option<Point>; 3] = match *self {
            Self::MoveTo(p) | Self::LineTo(p) => [Some(p), None, None],
            Self::QuadTo { ctrl, to } => [Some(ctrl), Some(to), None],
            Self::CubicTo { ctrl1, ctrl2, to } => [Some(ctrl1), Some(ctrl2), Some(to)],
            Self::Close => [None, None, None],
        };
        pts.into_iter().flatten()
    }
}

/// Shape geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle { x: f32, y: f32, width: f32, height: f32 },
    Ellipse { cx: f32, cy: f32, rx: f32, ry: f32 },
    Path(Vec<PathSegment>),
}

/// A shape and its paint, drawn inside a canvas node.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawPrimitive {
    pub shape: Shape,
    pub paint: Paint,
}

impl DrawPrimitive {
    pub fn rectangle(x: f32, y: f32, width: f32, height: f32, paint: Paint) -> Self {
        Self {
            shape: Shape::Rectangle { x, y, width, height },
            paint,
        }
    }

    pub fn ellipse(cx: f32, cy: f32, rx: f32, ry: f32, paint: Paint) -> Self {
        Self {
            shape: Shape::Ellipse { cx, cy, rx, ry },
            paint,
        }
    }

    pub fn path(segments: Vec<PathSegment>, paint: Paint) -> Self {
        Self {
            shape: Shape::Path(segments),
            paint,
        }
    }

    /// Copy of this primitive moved by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        let shape = match &self.shape {
            Shape::Rectangle { x, y, width, height } => Shape::Rectangle {
                x: x + dx,
                y: y + dy,
                width: *width,
                height: *height,
            },
            Shape::Ellipse { cx, cy, rx, ry } => Shape::Ellipse {
                cx: cx + dx,
                cy: cy + dy,
                rx: *rx,
                ry: *ry,
            },
            Shape::Path(segments) => {
                Shape::Path(segments.iter().map(|s| s.translated(dx, dy)).collect())
            }
        };
        Self {
            shape,
            paint: self.paint,
        }
    }

    /// Axis-aligned `(min_x, min_y, max_x, max_y)` including stroke overhang.
    ///
    /// Path extents use control points, which over-approximate curves.
    pub fn extent(&self) -> Option<(f32, f32, f32, f32)> {
        let pad = self.paint.stroke_overhang();
        let (min_x, min_y, max_x, max_y) = match &self.shape {
            Shape::Rectangle { x, y, width, height } => (*x, *y, x + width, y + height),
            Shape::Ellipse { cx, cy, rx, ry } => (cx - rx, cy - ry, cx + rx, cy + ry),
            Shape::Path(segments) => {
                let mut points = segments.iter().flat_map(PathSegment::points);
                let first = points.next()?;
                points.fold((first.x, first.y, first.x, first.y), |(a, b, c, d), p| {
                    (a.min(p.x), b.min(p.y), c.max(p.x), d.max(p.y))
                })
            }
        };
        Some((min_x - pad, min_y - pad, max_x + pad, max_y + pad))
    }
}

/// Width and height needed to show every primitive from the canvas origin.
pub fn content_extent(primitives: &[DrawPrimitive]) -> (f32, f32) {
    primitives
        .iter()
        .filter_map(DrawPrimitive::extent)
        .fold((0.0_f32, 0.0_f32), |(w, h), (_, _, max_x, max_y)| {
            (w.max(max_x), h.max(max_y))
        })
}
