//! Mouse Module - Hit-testing and pointer event dispatch
//!
//! Finds the node under the pointer in a frame's bounds tree and invokes its
//! handlers. Hover is tracked as a [`Path`] owned by the caller and threaded
//! through by `&mut`; it is the only state that survives between frames.
//!
//! # API
//!
//! - `find_node_at_position` - Topmost node containing a point
//! - `find_node_by_path` - Resolve a path against the current tree
//! - `handle_node_event_with_bounds` - Run one node's handler for an event
//! - `handle_mouse_motion` - Enter/leave/move for a pointer move
//! - `handle_pointer_event` - Route any pointer event
//!
//! # Example
//!
//! ```
//! use spark_ui::layout::layout_bounds;
//! use spark_ui::state::mouse::{MouseButton, PointerEvent, handle_pointer_event};
//! use spark_ui::{LayoutConfig, Node, Style};
//!
//! let root: Node<&str> = Node::view(
//!     Style::new(),
//!     vec![Node::view(Style::new().with_size(50.0, 50.0), vec![]).on_click(|_| Some("clicked"))],
//! );
//! let tree = layout_bounds(&root, &LayoutConfig::default()).unwrap();
//!
//! let mut hovered = None;
//! let mut messages = Vec::new();
//! let event = PointerEvent::MouseDown { x: 10.0, y: 10.0, button: MouseButton::Left };
//! handle_pointer_event(&tree, &mut hovered, &mut |msg| messages.push(msg), &event);
//! assert_eq!(messages, vec!["clicked"]);
//! ```

use tracing::trace;

use crate::layout::{BoundsTree, NodeWithBounds, Path};
use crate::node::{ButtonInput, Node};
use crate::types::{Bounds, Point};

// =============================================================================
// TYPES
// =============================================================================

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Middle,
    Right,
}

/// Normalized pointer event in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    MouseDown { x: f32, y: f32, button: MouseButton },
    MouseUp { x: f32, y: f32, button: MouseButton },
    MouseMove { x: f32, y: f32 },
    MouseEnter { x: f32, y: f32 },
    MouseLeave { x: f32, y: f32 },
}

impl PointerEvent {
    /// Pointer position in window pixels.
    pub fn position(&self) -> Point {
        match *self {
            Self::MouseDown { x, y, .. }
            | Self::MouseUp { x, y, .. }
            | Self::MouseMove { x, y }
            | Self::MouseEnter { x, y }
            | Self::MouseLeave { x, y } => Point::new(x, y),
        }
    }
}

// =============================================================================
// HIT TESTING
// =============================================================================

/// Topmost node whose bounds contain `position`.
///
/// Later siblings paint over earlier ones, so children are searched in
/// reverse declaration order, and before their parent. Children are not
/// clipped to the parent's bounds.
pub fn find_node_at_position<'t, 'a, M>(
    position: Point,
    tree: &'t BoundsTree<'a, M>,
) -> Option<&'t NodeWithBounds<'a, M>> {
    tree.roots.iter().rev().find_map(|root| hit(root, position))
}

fn hit<'t, 'a, M>(node: &'t NodeWithBounds<'a, M>, position: Point) -> Option<&'t NodeWithBounds<'a, M>> {
    node.children
        .iter()
        .rev()
        .find_map(|child| hit(child, position))
        .or_else(|| node.bounds.contains(position).then_some(node))
}

/// Resolve `path` against `tree`. `None` once the tree no longer has a node
/// at that path.
pub fn find_node_by_path<'t, 'a, M>(
    path: &Path,
    tree: &'t BoundsTree<'a, M>,
) -> Option<&'t NodeWithBounds<'a, M>> {
    let (&first, rest) = path.indices().split_first()?;
    let mut node = tree.roots.get(first)?;
    for &index in rest {
        node = node.children.get(index)?;
    }
    Some(node)
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Run `node`'s handler for `event`, with coordinates made local to `bounds`.
///
/// At most one handler runs. A left-button `MouseDown` goes to `on_click`
/// when the node has one, otherwise to `on_mouse_down`. Text nodes only
/// respond to left-button clicks.
pub fn handle_node_event_with_bounds<M>(event: &PointerEvent, node: &Node<M>, bounds: Bounds) -> Option<M> {
    let local = bounds.to_local(event.position());

    if let Node::Text(text) = node {
        return match event {
            PointerEvent::MouseDown { button: MouseButton::Left, .. } => {
                text.on_click.as_ref().and_then(|on_click| on_click(local))
            }
            _ => None,
        };
    }

    let handlers = node.mouse_handlers()?;
    match *event {
        PointerEvent::MouseDown { button, .. } => {
            if let (MouseButton::Left, Some(on_click)) = (button, &handlers.on_click) {
                return on_click(local);
            }
            let on_down = handlers.on_mouse_down.as_ref()?;
            on_down(ButtonInput { position: local, button })
        }
        PointerEvent::MouseUp { button, .. } => {
            let on_up = handlers.on_mouse_up.as_ref()?;
            on_up(ButtonInput { position: local, button })
        }
        PointerEvent::MouseMove { .. } => handlers.on_mouse_move.as_ref()?(local),
        PointerEvent::MouseEnter { .. } => handlers.on_mouse_enter.as_ref()?(()),
        PointerEvent::MouseLeave { .. } => handlers.on_mouse_leave.as_ref()?(()),
    }
}

fn send<M>(
    event: &PointerEvent,
    target: &NodeWithBounds<'_, M>,
    dispatch: &mut impl FnMut(M),
) -> bool {
    match handle_node_event_with_bounds(event, target.node, target.bounds) {
        Some(msg) => {
            dispatch(msg);
            true
        }
        None => false,
    }
}

/// Handle a pointer move.
///
/// Only the position of `move_event` is read, so the pointer entering the
/// window can be passed in as well. When the topmost node changes: leave fires on the previously hovered node
/// (skipped if its path no longer resolves), then enter on the new one, and
/// `hovered` is updated. The move handler of the node under the pointer runs
/// last. Returns `true` if any handler produced a message.
pub fn handle_mouse_motion<M>(
    tree: &BoundsTree<'_, M>,
    hovered: &mut Option<Path>,
    dispatch: &mut impl FnMut(M),
    move_event: &PointerEvent,
) -> bool {
    let position = move_event.position();
    let Point { x, y } = position;
    let target = find_node_at_position(position, tree);
    let target_path = target.map(|node| &node.path);
    let mut handled = false;

    if target_path != hovered.as_ref() {
        if let Some(previous) = hovered.as_ref().and_then(|path| find_node_by_path(path, tree)) {
            trace!(path = %previous.path, "mouse leave");
            handled |= send(&PointerEvent::MouseLeave { x, y }, previous, dispatch);
        }
        if let Some(node) = target {
            trace!(path = %node.path, "mouse enter");
            handled |= send(&PointerEvent::MouseEnter { x, y }, node, dispatch);
        }
        *hovered = target_path.cloned();
    }

    if let Some(node) = target {
        handled |= send(&PointerEvent::MouseMove { x, y }, node, dispatch);
    }

    handled
}

/// Route one pointer event.
///
/// Moves (and the pointer entering the window) go through
/// [`handle_mouse_motion`]. Button events go to the topmost node only; they
/// do not bubble to ancestors. The pointer leaving the window ends the
/// current hover. Returns `true` if any handler produced a message.
pub fn handle_pointer_event<M>(
    tree: &BoundsTree<'_, M>,
    hovered: &mut Option<Path>,
    dispatch: &mut impl FnMut(M),
    event: &PointerEvent,
) -> bool {
    match *event {
        PointerEvent::MouseMove { .. } | PointerEvent::MouseEnter { .. } => {
            handle_mouse_motion(tree, hovered, dispatch, event)
        }
        PointerEvent::MouseDown { .. } | PointerEvent::MouseUp { .. } => {
            find_node_at_position(event.position(), tree)
                .is_some_and(|target| send(event, target, dispatch))
        }
        PointerEvent::MouseLeave { .. } => {
            let Some(path) = hovered.take() else {
                return false;
            };
            match find_node_by_path(&path, tree) {
                Some(previous) => {
                    trace!(path = %path, "mouse leave");
                    send(event, previous, dispatch)
                }
                None => false,
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
