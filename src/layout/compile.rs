//! Layout compilation: node tree → bounds tree + render primitives.
//!
//! One pass per frame:
//! 1. Build a solver tree (relative children only, absolute children as
//!    detached roots) and run it.
//! 2. Walk the node tree alongside the solved rectangles, resolving every
//!    View/Text/Canvas to absolute pixel bounds.
//! 3. Emit primitives in paint order while walking.

use taffy::NodeId;
use tracing::{debug, warn};

use crate::config::LayoutConfig;
use crate::error::LayoutResult;
use crate::node::{Node, PathSegment, Shape, Style, clamp_radius};
use crate::render::{RenderPaint, RenderPrimitive, RenderShape};
use crate::types::{Attr, Bounds, Point};

use super::taffy_bridge::{SolvedRect, SolverTree};
use super::text_measure::TextMetrics;
use super::types::{BoundsTree, CompiledFrame, NodeWithBounds, Path};

/// Lay out `root` and emit its primitives.
pub fn compile<'a, M>(root: &'a Node<M>, config: &LayoutConfig) -> LayoutResult<CompiledFrame<'a, M>> {
    run(root, config, true)
}

/// Lay out `root` without emitting primitives.
pub fn layout_bounds<'a, M>(root: &'a Node<M>, config: &LayoutConfig) -> LayoutResult<BoundsTree<'a, M>> {
    Ok(run(root, config, false)?.bounds)
}

/// Flat primitive list for `root`, in paint order.
pub fn render_primitives<M>(root: &Node<M>, config: &LayoutConfig) -> LayoutResult<Vec<RenderPrimitive>> {
    Ok(run(root, config, true)?.primitives)
}

fn run<'a, M>(root: &'a Node<M>, config: &LayoutConfig, emit: bool) -> LayoutResult<CompiledFrame<'a, M>> {
    config.validate()?;

    let top_level = match root {
        Node::Fragment(_) => root.layout_children(),
        Node::Empty => Vec::new(),
        _ => vec![root],
    };

    let mut solver = SolverTree::new(*config);
    for node in &top_level {
        solver.add_root(*node)?;
    }
    solver.compute()?;

    let mut compiler = Compiler {
        solver: &solver,
        config,
        emit,
        primitives: Vec::new(),
    };

    let roots: Vec<_> = top_level
        .iter()
        .zip(solver.roots())
        .enumerate()
        .map(|(index, (&node, &id))| {
            let rect = compiler.solved(id, &Path::root(index));
            let (dx, dy) = style_offset(node.style());
            let area = match rect {
                Some(r) => Area::new(r.x + dx, r.y + dy, r.width, r.height),
                None => Area::new(dx, dy, 0.0, 0.0),
            };
            compiler.place(node, rect.map(|_| id), area, Path::root(index))
        })
        .collect();

    let bounds = BoundsTree { roots };
    let primitives = compiler.primitives;

    debug!(
        nodes = bounds.node_count(),
        primitives = primitives.len(),
        viewport_width = config.viewport_width,
        viewport_height = config.viewport_height,
        "compiled frame"
    );

    Ok(CompiledFrame { bounds, primitives })
}

fn style_offset(style: Option<&Style>) -> (f32, f32) {
    style.map_or((0.0, 0.0), Style::transform_offset)
}

// =============================================================================
// Tree walk
// =============================================================================

/// Absolute rectangle of a node before clipping to the positive quadrant.
///
/// Descendants are positioned from this origin, so a parent translated
/// off-screen still carries its children along with it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Area {
    origin: Point,
    width: f32,
    height: f32,
}

impl Area {
    fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(self.origin.x, self.origin.y, self.width, self.height)
    }
}

struct Compiler<'s, 'a> {
    solver: &'s SolverTree<'a>,
    config: &'s LayoutConfig,
    emit: bool,
    primitives: Vec<RenderPrimitive>,
}

impl<'a> Compiler<'_, 'a> {
    fn solved(&self, id: NodeId, path: &Path) -> Option<SolvedRect> {
        let rect = self.solver.rect(id);
        if rect.is_none() {
            warn!(%path, "solver has no layout for node; using zero bounds");
        }
        rect
    }

    /// Resolve `node`'s subtree given its own absolute area.
    ///
    /// `solver_id` is `None` when the solver tree lost track of the node; the
    /// whole subtree then collapses to zero size at `area`'s origin.
    fn place<M>(
        &mut self,
        node: &'a Node<M>,
        solver_id: Option<NodeId>,
        area: Area,
        path: Path,
    ) -> NodeWithBounds<'a, M> {
        let bounds = area.bounds();
        if self.emit {
            self.emit_own(node, area.origin, bounds);
        }

        let children = match node {
            Node::View(_) => self.place_children(node, solver_id, area.origin, &path),
            _ => Vec::new(),
        };

        NodeWithBounds {
            node,
            bounds,
            children,
            path,
        }
    }

    fn place_children<M>(
        &mut self,
        node: &'a Node<M>,
        solver_id: Option<NodeId>,
        parent: Point,
        path: &Path,
    ) -> Vec<NodeWithBounds<'a, M>> {
        let children = node.layout_children();
        let relative_ids = solver_id.map(|id| self.solver.relative_children(id)).unwrap_or_default();
        let absolute_ids = solver_id
            .map(|id| self.solver.absolute_children(id).to_vec())
            .unwrap_or_default();

        let mut placed: Vec<Option<NodeWithBounds<'a, M>>> =
            std::iter::repeat_with(|| None).take(children.len()).collect();

        // Relative children first: they paint before absolute ones.
        let relative = children
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, child)| !child.style().is_some_and(Style::is_absolute));
        for (slot, (index, child)) in relative.enumerate() {
            let child_path = path.child(index);
            let (dx, dy) = style_offset(child.style());
            let solved = match relative_ids.get(slot) {
                Some(&id) => self.solved(id, &child_path).map(|rect| (id, rect)),
                None => {
                    warn!(path = %child_path, "no solver node for relative child; using zero bounds");
                    None
                }
            };
            let (id, area) = match solved {
                Some((id, rect)) => (
                    Some(id),
                    Area::new(
                        parent.x + rect.x + dx,
                        parent.y + rect.y + dy,
                        rect.width,
                        rect.height,
                    ),
                ),
                None => (None, Area::new(parent.x, parent.y, 0.0, 0.0)),
            };
            placed[index] = Some(self.place(child, id, area, child_path));
        }

        let absolute = children
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, child)| child.style().is_some_and(Style::is_absolute));
        for (slot, (index, child)) in absolute.enumerate() {
            let child_path = path.child(index);
            let (dx, dy) = style_offset(child.style());
            let (width, height) = child.style().map_or((0.0, 0.0), |s| {
                (s.width.unwrap_or(0.0), s.height.unwrap_or(0.0))
            });
            let area = Area::new(parent.x + dx, parent.y + dy, width, height);
            let id = absolute_ids.get(slot).copied();
            if id.is_none() {
                warn!(path = %child_path, "no solver root for absolute child; descendants get zero bounds");
            }
            placed[index] = Some(self.place(child, id, area, child_path));
        }

        placed.into_iter().flatten().collect()
    }

    // =========================================================================
    // Primitive emission
    // =========================================================================

    /// `origin` is the unclipped top-left corner that content is drawn from.
    fn emit_own<M>(&mut self, node: &Node<M>, origin: Point, bounds: Bounds) {
        let Some(style) = node.style() else {
            return;
        };

        if let Some(primitive) = box_primitive(style, bounds) {
            self.primitives.push(primitive);
        }

        match node {
            Node::Text(text) => {
                let primitive = self.text_primitive(&text.content, style, origin, bounds);
                self.primitives.push(primitive);
            }
            Node::Canvas(canvas) => {
                for primitive in &canvas.primitives {
                    let moved = primitive.translated(origin.x, origin.y);
                    self.primitives.push(canvas_primitive(moved.shape, moved.paint.into()));
                }
            }
            _ => {}
        }
    }

    fn text_primitive(&self, content: &str, style: &Style, origin: Point, bounds: Bounds) -> RenderPrimitive {
        let size = style.text_size.unwrap_or(self.config.default_font_size);
        let metrics = TextMetrics {
            font_size: size,
            char_width_ratio: self.config.char_width_ratio,
            line_height: self.config.line_height,
        };
        let padding = style.padding_or_zero();
        let baseline = Point::new(
            origin.x + padding.left,
            origin.y + padding.top + metrics.ascent(),
        );

        RenderPrimitive {
            bounds,
            shape: RenderShape::Text {
                content: content.to_string(),
                baseline,
            },
            paint: RenderPaint::Text {
                color: style.text_color.unwrap_or(self.config.default_text_color),
                size,
                attrs: style.text_attrs.unwrap_or(Attr::NONE),
            },
        }
    }
}

/// Background and/or border of a node as a single primitive.
fn box_primitive(style: &Style, bounds: Bounds) -> Option<RenderPrimitive> {
    let fill = style.background.filter(|c| !c.is_transparent());
    let border = style.border();

    let paint = match (fill, border) {
        (Some(fill), Some(border)) => RenderPaint::FillAndStroke {
            fill,
            stroke: border.color,
            width: border.width,
        },
        (Some(fill), None) => RenderPaint::Fill(fill),
        (None, Some(border)) => RenderPaint::Stroke {
            color: border.color,
            width: border.width,
        },
        (None, None) => return None,
    };

    let radius = clamp_radius(
        style.effective_border_radius().unwrap_or(0.0),
        bounds.width,
        bounds.height,
    );
    let shape = if radius > 0.0 {
        RenderShape::RoundedRectangle { radius }
    } else {
        RenderShape::Rectangle
    };

    Some(RenderPrimitive { bounds, shape, paint })
}

/// Canvas primitive already translated to absolute space.
fn canvas_primitive(shape: Shape, paint: RenderPaint) -> RenderPrimitive {
    match shape {
        Shape::Rectangle { x, y, width, height } => RenderPrimitive {
            bounds: Bounds::new(x, y, width, height),
            shape: RenderShape::Rectangle,
            paint,
        },
        Shape::Ellipse { cx, cy, rx, ry } => RenderPrimitive {
            bounds: Bounds::new(cx - rx, cy - ry, rx * 2.0, ry * 2.0),
            shape: RenderShape::Ellipse,
            paint,
        },
        Shape::Path(segments) => {
            let bounds = path_bounds(&segments);
            RenderPrimitive {
                bounds,
                shape: RenderShape::Path(segments),
                paint,
            }
        }
    }
}

fn path_bounds(segments: &[PathSegment]) -> Bounds {
    let mut points = segments.iter().flat_map(|s| s.points());
    let Some(first) = points.next() else {
        return Bounds::ZERO;
    };
    let (min_x, min_y, max_x, max_y) = points.fold(
        (first.x, first.y, first.x, first.y),
        |(a, b, c, d), p| (a.min(p.x), b.min(p.y), c.max(p.x), d.max(p.y)),
    );
    Bounds::new(min_x, min_y, max_x - min_x, max_y - min_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{DrawPrimitive, Paint, Transform};
    use crate::types::{FlexDirection, Rgba};

    fn setup() -> LayoutConfig {
        LayoutConfig::new(800.0, 600.0)
    }

    fn square(size: f32) -> Node<()> {
        Node::view(Style::new().with_size(size, size), vec![])
    }

    #[test]
    fn test_row_of_two_squares() {
        let root: Node<()> = Node::view(
            Style::new().with_flex_direction(FlexDirection::Row),
            vec![square(50.0), square(50.0)],
        );
        let tree = layout_bounds(&root, &setup()).unwrap();

        let root = &tree.roots[0];
        assert_eq!(root.bounds, Bounds::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(root.children[0].bounds, Bounds::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(root.children[1].bounds, Bounds::new(50.0, 0.0, 50.0, 50.0));
        assert_eq!(root.children[1].path, Path::new(vec![0, 1]));
    }

    #[test]
    fn test_absolute_child_uses_parent_origin_and_transform() {
        let root: Node<()> = Node::view(
            Style::new().with_padding(10.0),
            vec![Node::view(
                Style::new().with_size(200.0, 200.0).with_x(30.0).with_y(40.0),
                vec![Node::view(
                    Style::new()
                        .absolute()
                        .with_size(20.0, 20.0)
                        .with_transform(Transform::translate(50.0, 100.0)),
                    vec![],
                )],
            )],
        );
        let tree = layout_bounds(&root, &setup()).unwrap();

        let parent = &tree.roots[0].children[0];
        assert_eq!(parent.bounds, Bounds::new(40.0, 50.0, 200.0, 200.0));
        assert_eq!(
            parent.children[0].bounds,
            Bounds::new(parent.bounds.x + 50.0, parent.bounds.y + 100.0, 20.0, 20.0)
        );
    }

    #[test]
    fn test_absolute_child_defaults_to_zero_size() {
        let root: Node<()> = Node::view(Style::new(), vec![Node::view(Style::new().absolute(), vec![])]);
        let tree = layout_bounds(&root, &setup()).unwrap();
        assert_eq!(tree.roots[0].children[0].bounds, Bounds::ZERO);
    }

    #[test]
    fn test_absolute_child_ignores_siblings() {
        let overlay = || {
            Node::view(
                Style::new()
                    .absolute()
                    .with_size(20.0, 20.0)
                    .with_transform(Transform::translate(5.0, 5.0)),
                vec![],
            )
        };
        let few: Node<()> = Node::view(Style::new(), vec![square(50.0), overlay()]);
        let many: Node<()> = Node::view(
            Style::new(),
            vec![square(50.0), square(70.0), square(90.0), overlay()],
        );

        let few = layout_bounds(&few, &setup()).unwrap();
        let many = layout_bounds(&many, &setup()).unwrap();
        assert_eq!(few.roots[0].children[1].bounds, many.roots[0].children[3].bounds);
    }

    #[test]
    fn test_absolute_descendants_get_flex_layout() {
        let root: Node<()> = Node::view(
            Style::new(),
            vec![Node::view(
                Style::new()
                    .absolute()
                    .with_size(100.0, 100.0)
                    .with_flex_direction(FlexDirection::Row)
                    .with_transform(Transform::translate(10.0, 10.0)),
                vec![square(30.0), square(30.0)],
            )],
        );
        let tree = layout_bounds(&root, &setup()).unwrap();

        let overlay = &tree.roots[0].children[0];
        assert_eq!(overlay.children[1].bounds, Bounds::new(40.0, 10.0, 30.0, 30.0));
    }

    #[test]
    fn test_node_count_matches_layout_nodes() {
        let root: Node<()> = Node::view(
            Style::new(),
            vec![
                Node::fragment(vec![square(10.0), Node::empty(), Node::text("a", Style::new())]),
                Node::empty(),
                Node::canvas(Style::new(), vec![]),
                Node::view(Style::new().absolute(), vec![square(5.0)]),
            ],
        );
        let tree = layout_bounds(&root, &setup()).unwrap();
        assert_eq!(tree.node_count(), root.layout_node_count());
        assert_eq!(tree.node_count(), 6);
    }

    #[test]
    fn test_fragment_root_yields_forest() {
        let root: Node<()> = Node::fragment(vec![square(10.0), Node::empty(), square(20.0)]);
        let tree = layout_bounds(&root, &setup()).unwrap();

        assert_eq!(tree.roots.len(), 2);
        assert_eq!(tree.roots[1].path, Path::root(1));
        assert_eq!(tree.roots[1].bounds, Bounds::new(0.0, 0.0, 20.0, 20.0));
    }

    #[test]
    fn test_empty_root_has_no_bounds() {
        let root: Node<()> = Node::empty();
        let frame = compile(&root, &setup()).unwrap();
        assert!(frame.bounds.is_empty());
        assert!(frame.primitives.is_empty());
    }

    #[test]
    fn test_unit_scale_converts_to_pixels() {
        let root: Node<()> = Node::view(
            Style::new().with_flex_direction(FlexDirection::Row),
            vec![square(50.0), square(50.0)],
        );
        let tree = layout_bounds(&root, &setup().with_unit_scale(2.0)).unwrap();
        assert_eq!(tree.roots[0].children[1].bounds, Bounds::new(50.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let root = square(10.0);
        assert!(compile(&root, &LayoutConfig::new(-5.0, 10.0)).is_err());
        assert!(compile(&root, &setup().with_unit_scale(0.0)).is_err());
    }

    #[test]
    fn test_missing_solver_node_collapses_subtree() {
        let root: Node<()> = Node::view(Style::new(), vec![Node::view(Style::new(), vec![square(10.0)])]);
        let config = setup();
        let solver = SolverTree::new(config);
        let mut compiler = Compiler {
            solver: &solver,
            config: &config,
            emit: false,
            primitives: Vec::new(),
        };

        let placed = compiler.place(&root, None, Area::new(5.0, 5.0, 100.0, 100.0), Path::root(0));
        assert_eq!(placed.node_count(), 3);
        assert_eq!(placed.children[0].bounds, Bounds::empty_at(Point::new(5.0, 5.0)));
        assert_eq!(placed.children[0].children[0].bounds.width, 0.0);
    }

    #[test]
    fn test_extra_relative_child_without_solver_node() {
        let solved: Node<()> = Node::view(Style::new().with_size(100.0, 100.0), vec![square(10.0)]);
        let walked: Node<()> = Node::view(
            Style::new().with_size(100.0, 100.0),
            vec![square(10.0), Node::view(Style::new(), vec![square(4.0)])],
        );
        let config = setup();
        let mut solver = SolverTree::new(config);
        let id = solver.add_root(&solved).unwrap();
        solver.compute().unwrap();
        let mut compiler = Compiler {
            solver: &solver,
            config: &config,
            emit: false,
            primitives: Vec::new(),
        };

        let placed = compiler.place(&walked, Some(id), Area::new(7.0, 9.0, 100.0, 100.0), Path::root(0));
        assert_eq!(placed.node_count(), walked.layout_node_count());
        assert_eq!(placed.children[0].bounds, Bounds::new(7.0, 9.0, 10.0, 10.0));

        let extra = &placed.children[1];
        assert_eq!(extra.path, Path::new(vec![0, 1]));
        assert_eq!(extra.bounds, Bounds::empty_at(Point::new(7.0, 9.0)));
        assert_eq!(extra.children[0].bounds, Bounds::empty_at(Point::new(7.0, 9.0)));
    }

    #[test]
    fn test_negative_translate_keeps_descendants_in_place() {
        let root: Node<()> = Node::view(
            Style::new(),
            vec![Node::view(
                Style::new()
                    .with_size(50.0, 50.0)
                    .with_transform(Transform::translate(-20.0, 0.0)),
                vec![Node::view(Style::new().with_size(10.0, 10.0).with_x(30.0), vec![])],
            )],
        );
        let tree = layout_bounds(&root, &setup()).unwrap();

        let parent = &tree.roots[0].children[0];
        assert_eq!(parent.bounds, Bounds::new(0.0, 0.0, 30.0, 50.0));
        assert_eq!(parent.children[0].bounds, Bounds::new(10.0, 0.0, 10.0, 10.0));

        // Point in the clipped-off part of the parent hits nothing there.
        assert!(!parent.bounds.contains(Point::new(35.0, 5.0)));
    }

    #[test]
    fn test_negative_translate_partially_hides_child() {
        let root: Node<()> = Node::view(
            Style::new().with_background(Rgba::WHITE),
            vec![Node::view(
                Style::new()
                    .with_size(50.0, 50.0)
                    .with_transform(Transform::translate(-40.0, -5.0)),
                vec![Node::canvas(
                    Style::new().with_size(20.0, 20.0).with_x(30.0),
                    vec![DrawPrimitive::rectangle(0.0, 0.0, 4.0, 4.0, Paint::Fill(Rgba::RED))],
                )],
            )],
        );
        let frame = compile(&root, &setup()).unwrap();

        let canvas = &frame.bounds.roots[0].children[0].children[0];
        assert_eq!(canvas.bounds, Bounds::new(0.0, 0.0, 10.0, 15.0));
        // Drawing is anchored at the unclipped corner (-10, -5).
        assert_eq!(frame.primitives[1].bounds, Bounds::ZERO);
    }

    #[test]
    fn test_paint_order_background_relative_absolute() {
        let root: Node<()> = Node::view(
            Style::new().with_background(Rgba::WHITE),
            vec![
                Node::view(
                    Style::new().absolute().with_size(5.0, 5.0).with_background(Rgba::RED),
                    vec![],
                ),
                Node::view(Style::new().with_size(5.0, 5.0).with_background(Rgba::GREEN), vec![]),
            ],
        );
        let primitives = render_primitives(&root, &setup()).unwrap();
        let fills: Vec<_> = primitives.iter().map(|p| p.paint).collect();
        assert_eq!(
            fills,
            vec![
                RenderPaint::Fill(Rgba::WHITE),
                RenderPaint::Fill(Rgba::GREEN),
                RenderPaint::Fill(Rgba::RED),
            ]
        );
    }

    #[test]
    fn test_background_and_border_share_one_primitive() {
        let root: Node<()> = Node::view(
            Style::new()
                .with_size(40.0, 40.0)
                .with_background(Rgba::WHITE)
                .with_border(Rgba::BLACK, 2.0)
                .with_border_radius(1000.0),
            vec![],
        );
        let primitives = render_primitives(&root, &setup()).unwrap();

        assert_eq!(primitives.len(), 1);
        assert_eq!(primitives[0].shape, RenderShape::RoundedRectangle { radius: 20.0 });
        assert_eq!(
            primitives[0].paint,
            RenderPaint::FillAndStroke {
                fill: Rgba::WHITE,
                stroke: Rgba::BLACK,
                width: 2.0,
            }
        );
    }

    #[test]
    fn test_radius_clamped_against_resolved_bounds() {
        let root: Node<()> = Node::view(
            Style::new(),
            vec![Node::view(
                Style::new()
                    .with_height(10.0)
                    .with_flex_grow(1.0)
                    .with_border(Rgba::BLACK, 1.0)
                    .with_border_radius(50.0),
                vec![],
            )],
        );
        let primitives = render_primitives(&root, &setup()).unwrap();
        assert_eq!(primitives[0].shape, RenderShape::RoundedRectangle { radius: 5.0 });
    }

    #[test]
    fn test_no_primitive_without_paint() {
        let root = square(10.0);
        assert!(render_primitives(&root, &setup()).unwrap().is_empty());
    }

    #[test]
    fn test_canvas_primitives_are_translated() {
        let root: Node<()> = Node::view(
            Style::new().with_padding(10.0),
            vec![Node::canvas(
                Style::new().with_size(100.0, 100.0),
                vec![
                    DrawPrimitive::rectangle(5.0, 5.0, 10.0, 10.0, Paint::Fill(Rgba::RED)),
                    DrawPrimitive::ellipse(50.0, 50.0, 10.0, 5.0, Paint::Fill(Rgba::BLUE)),
                    DrawPrimitive::path(
                        vec![
                            PathSegment::MoveTo(Point::new(0.0, 0.0)),
                            PathSegment::LineTo(Point::new(20.0, 10.0)),
                        ],
                        Paint::Stroke { color: Rgba::BLACK, width: 1.0 },
                    ),
                ],
            )],
        );
        let primitives = render_primitives(&root, &setup()).unwrap();

        assert_eq!(primitives.len(), 3);
        assert_eq!(primitives[0].bounds, Bounds::new(15.0, 15.0, 10.0, 10.0));
        assert_eq!(primitives[1].shape, RenderShape::Ellipse);
        assert_eq!(primitives[1].bounds, Bounds::new(50.0, 55.0, 20.0, 10.0));
        assert_eq!(primitives[2].bounds, Bounds::new(10.0, 10.0, 20.0, 10.0));
        match &primitives[2].shape {
            RenderShape::Path(segments) => {
                assert_eq!(segments[1], PathSegment::LineTo(Point::new(30.0, 20.0)));
            }
            other => panic!("expected path, got {other:?}"),
        }
    }

    #[test]
    fn test_text_primitive() {
        let root: Node<()> = Node::view(
            Style::new().with_flex_direction(FlexDirection::Column),
            vec![
                square(20.0),
                Node::text(
                    "hi",
                    Style::new()
                        .with_padding(4.0)
                        .with_text_size(10.0)
                        .with_text_color(Rgba::RED)
                        .with_text_attrs(Attr::BOLD),
                ),
            ],
        );
        let config = setup().with_line_height(2.0);
        let primitives = render_primitives(&root, &config).unwrap();

        assert_eq!(primitives.len(), 1);
        let text = &primitives[0];
        assert_eq!(text.text(), Some("hi"));
        assert_eq!(text.bounds.y, 20.0);
        assert_eq!(
            text.shape,
            RenderShape::Text {
                content: "hi".to_string(),
                baseline: Point::new(4.0, 20.0 + 4.0 + 15.0),
            }
        );
        assert_eq!(
            text.paint,
            RenderPaint::Text {
                color: Rgba::RED,
                size: 10.0,
                attrs: Attr::BOLD,
            }
        );
    }

    #[test]
    fn test_text_uses_config_defaults() {
        let root: Node<()> = Node::text("x", Style::new());
        let config = setup()
            .with_default_font_size(12.0)
            .with_default_text_color(Rgba::BLUE);
        let primitives = render_primitives(&root, &config).unwrap();

        assert_eq!(
            primitives[0].paint,
            RenderPaint::Text {
                color: Rgba::BLUE,
                size: 12.0,
                attrs: Attr::NONE,
            }
        );
    }

    #[test]
    fn test_transform_offsets_relative_child() {
        let root: Node<()> = Node::view(
            Style::new(),
            vec![Node::view(
                Style::new()
                    .with_size(10.0, 10.0)
                    .with_transform(Transform::translate(3.0, 4.0)),
                vec![square(2.0)],
            )],
        );
        let tree = layout_bounds(&root, &setup()).unwrap();
        let moved = &tree.roots[0].children[0];
        assert_eq!(moved.bounds, Bounds::new(3.0, 4.0, 10.0, 10.0));
        assert_eq!(moved.children[0].bounds.origin(), Point::new(3.0, 4.0));
    }
}
