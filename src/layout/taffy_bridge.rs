//! Taffy Bridge - Integration with the Taffy flex solver
//!
//! Converts node styles to Taffy styles, builds one solver tree per frame,
//! runs layout and reads the computed rectangles back in pixels.
//!
//! Only relative children are added to their parent's solver node.
//! Absolute children are built as detached solver roots of their own fixed
//! size, so their descendants still get flex layout while the absolute node
//! itself never takes space in the parent's flex box.

use std::collections::HashMap;

use taffy::{
    AlignItems as TaffyAlignItems, AvailableSpace, Dimension as TaffyDimension, Display,
    FlexDirection as TaffyFlexDirection, JustifyContent as TaffyJustifyContent,
    LengthPercentage, LengthPercentageAuto, NodeId, Position as TaffyPosition, Rect, Size,
    Style as TaffyStyle, TaffyTree,
};

use crate::config::LayoutConfig;
use crate::error::LayoutResult;
use crate::node::{Node, Style, content_extent};
use crate::types::{AlignItems, Edges, FlexDirection, JustifyContent};

use super::text_measure::TextMetrics;

// =============================================================================
// ENUM CONVERSIONS
// =============================================================================

fn to_taffy_flex_direction(dir: FlexDirection) -> TaffyFlexDirection {
    match dir {
        FlexDirection::Row => TaffyFlexDirection::Row,
        FlexDirection::Column => TaffyFlexDirection::Column,
        FlexDirection::RowReverse => TaffyFlexDirection::RowReverse,
        FlexDirection::ColumnReverse => TaffyFlexDirection::ColumnReverse,
    }
}

fn to_taffy_justify_content(justify: JustifyContent) -> TaffyJustifyContent {
    match justify {
        JustifyContent::FlexStart => TaffyJustifyContent::FlexStart,
        JustifyContent::Center => TaffyJustifyContent::Center,
        JustifyContent::FlexEnd => TaffyJustifyContent::FlexEnd,
        JustifyContent::SpaceBetween => TaffyJustifyContent::SpaceBetween,
        JustifyContent::SpaceAround => TaffyJustifyContent::SpaceAround,
        JustifyContent::SpaceEvenly => TaffyJustifyContent::SpaceEvenly,
    }
}

fn to_taffy_align_items(align: AlignItems) -> TaffyAlignItems {
    match align {
        AlignItems::Stretch => TaffyAlignItems::Stretch,
        AlignItems::FlexStart => TaffyAlignItems::FlexStart,
        AlignItems::Center => TaffyAlignItems::Center,
        AlignItems::FlexEnd => TaffyAlignItems::FlexEnd,
        AlignItems::Baseline => TaffyAlignItems::Baseline,
    }
}

// =============================================================================
// STYLE BUILDING
// =============================================================================

fn to_dimension(px: Option<f32>, config: &LayoutConfig) -> TaffyDimension {
    match px {
        Some(px) => TaffyDimension::Length(config.to_units(px)),
        None => TaffyDimension::Auto,
    }
}

fn to_inset(px: Option<f32>, config: &LayoutConfig) -> LengthPercentageAuto {
    match px {
        Some(px) => LengthPercentageAuto::Length(config.to_units(px)),
        None => LengthPercentageAuto::Auto,
    }
}

fn to_padding(edges: Edges, config: &LayoutConfig) -> Rect<LengthPercentage> {
    Rect {
        top: LengthPercentage::Length(config.to_units(edges.top)),
        right: LengthPercentage::Length(config.to_units(edges.right)),
        bottom: LengthPercentage::Length(config.to_units(edges.bottom)),
        left: LengthPercentage::Length(config.to_units(edges.left)),
    }
}

fn to_margin(edges: Edges, config: &LayoutConfig) -> Rect<LengthPercentageAuto> {
    Rect {
        top: LengthPercentageAuto::Length(config.to_units(edges.top)),
        right: LengthPercentageAuto::Length(config.to_units(edges.right)),
        bottom: LengthPercentageAuto::Length(config.to_units(edges.bottom)),
        left: LengthPercentageAuto::Length(config.to_units(edges.left)),
    }
}

/// Build a Taffy style for a relative node.
///
/// Unset fields keep Taffy's defaults. `x`/`y` become left/top insets.
pub(crate) fn build_style(style: &Style, config: &LayoutConfig) -> TaffyStyle {
    let defaults = TaffyStyle::default();

    TaffyStyle {
        display: Display::Flex,
        position: TaffyPosition::Relative,

        // Flex container properties
        flex_direction: style
            .flex_direction
            .map_or(defaults.flex_direction, to_taffy_flex_direction),
        justify_content: style.justify_content.map(to_taffy_justify_content),
        align_items: style.align_items.map(to_taffy_align_items),
        gap: match style.gap {
            Some(gap) => Size {
                width: LengthPercentage::Length(config.to_units(gap)),
                height: LengthPercentage::Length(config.to_units(gap)),
            },
            None => defaults.gap,
        },

        // Flex item properties
        flex_grow: style.flex_grow.unwrap_or(defaults.flex_grow),
        flex_shrink: style.flex_shrink.unwrap_or(defaults.flex_shrink),
        flex_basis: match style.flex_basis {
            Some(basis) => TaffyDimension::Length(config.to_units(basis)),
            None => defaults.flex_basis,
        },

        // Dimensions
        size: Size {
            width: to_dimension(style.width, config),
            height: to_dimension(style.height, config),
        },

        // Box model
        padding: style.padding.map_or(defaults.padding, |p| to_padding(p, config)),
        margin: style.margin.map_or(defaults.margin, |m| to_margin(m, config)),

        // Explicit offsets
        inset: Rect {
            left: to_inset(style.x, config),
            top: to_inset(style.y, config),
            right: LengthPercentageAuto::Auto,
            bottom: LengthPercentageAuto::Auto,
        },

        ..defaults
    }
}

/// Style of a top-level node: an unsized root fills the viewport.
fn build_root_style(style: &Style, config: &LayoutConfig) -> TaffyStyle {
    let mut taffy_style = build_style(style, config);
    taffy_style.size = Size {
        width: to_dimension(style.width.or(Some(config.viewport_width)), config),
        height: to_dimension(style.height.or(Some(config.viewport_height)), config),
    };
    taffy_style
}

/// Style of an absolutely positioned node's detached root.
///
/// Fixed to the explicit size (zero when unset); insets do not apply.
fn build_detached_style(style: &Style, config: &LayoutConfig) -> TaffyStyle {
    let mut taffy_style = build_style(style, config);
    taffy_style.size = Size {
        width: to_dimension(Some(style.width.unwrap_or(0.0)), config),
        height: to_dimension(Some(style.height.unwrap_or(0.0)), config),
    };
    taffy_style.inset = Rect {
        left: LengthPercentageAuto::Auto,
        top: LengthPercentageAuto::Auto,
        right: LengthPercentageAuto::Auto,
        bottom: LengthPercentageAuto::Auto,
    };
    taffy_style.margin = Rect {
        left: LengthPercentageAuto::Length(0.0),
        top: LengthPercentageAuto::Length(0.0),
        right: LengthPercentageAuto::Length(0.0),
        bottom: LengthPercentageAuto::Length(0.0),
    };
    taffy_style
}

// =============================================================================
// LEAF MEASUREMENT
// =============================================================================

/// Measure context attached to leaf solver nodes.
#[derive(Debug, Clone, Copy)]
pub(crate) enum LeafContext<'a> {
    Text { content: &'a str, metrics: TextMetrics },
    /// Pixel extent of the canvas primitives.
    Canvas { width: f32, height: f32 },
}

/// Measure a leaf in solver units.
fn measure_leaf(
    known_dimensions: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    context: Option<&mut LeafContext<'_>>,
    config: &LayoutConfig,
) -> Size<f32> {
    let Some(context) = context else {
        return Size::ZERO;
    };

    let (width_px, height_px) = match *context {
        LeafContext::Text { content, metrics } => {
            match (known_dimensions.width, available_space.width) {
                (Some(width), _) | (None, AvailableSpace::Definite(width)) => {
                    metrics.measure_wrapped(content, config.to_pixels(width))
                }
                (None, AvailableSpace::MinContent) => metrics.measure_min_content(content),
                (None, AvailableSpace::MaxContent) => metrics.measure(content),
            }
        }
        LeafContext::Canvas { width, height } => (width, height),
    };

    Size {
        width: known_dimensions.width.unwrap_or(config.to_units(width_px)),
        height: known_dimensions.height.unwrap_or(config.to_units(height_px)),
    }
}

// =============================================================================
// SOLVER TREE
// =============================================================================

/// Computed rectangle of a solver node, in pixels relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SolvedRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One frame's solver tree.
pub(crate) struct SolverTree<'a> {
    taffy: TaffyTree<LeafContext<'a>>,
    config: LayoutConfig,
    /// Top-level roots, laid out against the viewport.
    roots: Vec<NodeId>,
    /// Detached roots of absolute children, laid out at their own size.
    detached: Vec<NodeId>,
    /// Parent solver node → detached roots of its absolute children, in
    /// declaration order.
    absolute_children: HashMap<NodeId, Vec<NodeId>>,
}

impl<'a> SolverTree<'a> {
    pub(crate) fn new(config: LayoutConfig) -> Self {
        Self {
            taffy: TaffyTree::new(),
            config,
            roots: Vec::new(),
            detached: Vec::new(),
            absolute_children: HashMap::new(),
        }
    }

    /// Add a top-level node and its whole subtree.
    pub(crate) fn add_root<M>(&mut self, node: &'a Node<M>) -> LayoutResult<NodeId> {
        let style = node
            .style()
            .map(|s| build_root_style(s, &self.config))
            .unwrap_or_default();
        let id = self.build_node(node, style)?;
        self.roots.push(id);
        Ok(id)
    }

    fn build_node<M>(&mut self, node: &'a Node<M>, taffy_style: TaffyStyle) -> LayoutResult<NodeId> {
        match node {
            Node::View(_) => {
                let mut relative = Vec::new();
                let mut absolute = Vec::new();

                for child in node.layout_children() {
                    let Some(child_style) = child.style() else {
                        continue;
                    };
                    if child_style.is_absolute() {
                        absolute.push(self.build_detached(child)?);
                    } else {
                        let s = build_style(child_style, &self.config);
                        relative.push(self.build_node(child, s)?);
                    }
                }

                let id = self.taffy.new_with_children(taffy_style, &relative)?;
                if !absolute.is_empty() {
                    self.absolute_children.insert(id, absolute);
                }
                Ok(id)
            }
            Node::Text(text) => {
                let metrics = TextMetrics {
                    font_size: text.style.text_size.unwrap_or(self.config.default_font_size),
                    char_width_ratio: self.config.char_width_ratio,
                    line_height: self.config.line_height,
                };
                let context = LeafContext::Text {
                    content: &text.content,
                    metrics,
                };
                Ok(self.taffy.new_leaf_with_context(taffy_style, context)?)
            }
            Node::Canvas(canvas) => {
                let (width, height) = content_extent(&canvas.primitives);
                let context = LeafContext::Canvas { width, height };
                Ok(self.taffy.new_leaf_with_context(taffy_style, context)?)
            }
            Node::Fragment(_) | Node::Empty => Ok(self.taffy.new_leaf(TaffyStyle {
                display: Display::None,
                ..Default::default()
            })?),
        }
    }

    fn build_detached<M>(&mut self, node: &'a Node<M>) -> LayoutResult<NodeId> {
        let style = node
            .style()
            .map(|s| build_detached_style(s, &self.config))
            .unwrap_or_default();
        let id = self.build_node(node, style)?;
        self.detached.push(id);
        Ok(id)
    }

    /// Run the solver over every root.
    pub(crate) fn compute(&mut self) -> LayoutResult<()> {
        let config = self.config;
        let mut measure_fn = |known_dimensions: Size<Option<f32>>,
                              available_space: Size<AvailableSpace>,
                              _node_id: NodeId,
                              context: Option<&mut LeafContext<'a>>,
                              _style: &TaffyStyle| {
            measure_leaf(known_dimensions, available_space, context, &config)
        };

        let viewport = Size {
            width: AvailableSpace::Definite(config.to_units(config.viewport_width)),
            height: AvailableSpace::Definite(config.to_units(config.viewport_height)),
        };
        for &root in &self.roots {
            self.taffy.compute_layout_with_measure(root, viewport, &mut measure_fn)?;
        }

        for &root in &self.detached {
            let size = self.taffy.style(root)?.size;
            let available = Size {
                width: definite_or_zero(size.width),
                height: definite_or_zero(size.height),
            };
            self.taffy.compute_layout_with_measure(root, available, &mut measure_fn)?;
        }

        Ok(())
    }

    /// Computed rectangle of `id`, converted to pixels.
    pub(crate) fn rect(&self, id: NodeId) -> Option<SolvedRect> {
        let layout = self.taffy.layout(id).ok()?;
        Some(SolvedRect {
            x: self.config.to_pixels(layout.location.x),
            y: self.config.to_pixels(layout.location.y),
            width: self.config.to_pixels(layout.size.width),
            height: self.config.to_pixels(layout.size.height),
        })
    }

    /// Solver nodes of `id`'s relative children, in declaration order.
    pub(crate) fn relative_children(&self, id: NodeId) -> Vec<NodeId> {
        self.taffy.children(id).unwrap_or_default()
    }

    /// Detached roots of `id`'s absolute children, in declaration order.
    pub(crate) fn absolute_children(&self, id: NodeId) -> &[NodeId] {
        self.absolute_children.get(&id).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn roots(&self) -> &[NodeId] {
        &self.roots
    }
}

fn definite_or_zero(dim: TaffyDimension) -> AvailableSpace {
    match dim {
        TaffyDimension::Length(units) => AvailableSpace::Definite(units),
        _ => AvailableSpace::Definite(0.0),
    }
}
