//! Node tree - the declarative description of a frame's UI.
//!
//! A `Node<M>` is an immutable sum type parameterized by the message type `M`
//! its handlers produce. Only `View`, `Text` and `Canvas` take part in layout
//! and hit-testing. `Fragment` splices its children into the parent and
//! `Empty` contributes nothing.
//!
//! # Example
//!
//! ```
//! use spark_ui::{Node, Style};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Msg {
//!     Increment,
//! }
//!
//! let button: Node<Msg> = Node::view(
//!     Style::new().with_size(80.0, 24.0),
//!     vec![Node::text("+1", Style::new())],
//! )
//! .on_click(|_| Some(Msg::Increment));
//! ```

use std::fmt;
use std::rc::Rc;

use super::draw::DrawPrimitive;
use super::style::Style;
use crate::state::mouse::MouseButton;
use crate::types::Point;

// =============================================================================
// Handlers
// =============================================================================

/// An event handler. Returning `None` means "not consumed".
///
/// `Rc<dyn Fn>` so trees can be cloned and handlers wrapped by the message
/// mapper without taking ownership.
pub type Handler<E, M> = Rc<dyn Fn(E) -> Option<M>>;

/// Payload of button handlers, in node-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonInput {
    pub position: Point,
    pub button: MouseButton,
}

/// Pointer handlers shared by `View` and `Canvas`.
pub struct MouseHandlers<M> {
    /// Fires on left-button down over the node.
    pub on_click: Option<Handler<Point, M>>,
    pub on_mouse_down: Option<Handler<ButtonInput, M>>,
    pub on_mouse_up: Option<Handler<ButtonInput, M>>,
    pub on_mouse_move: Option<Handler<Point, M>>,
    pub on_mouse_enter: Option<Handler<(), M>>,
    pub on_mouse_leave: Option<Handler<(), M>>,
}

impl<M> MouseHandlers<M> {
    /// True when no handler is set.
    pub fn is_empty(&self) -> bool {
        self.on_click.is_none()
            && self.on_mouse_down.is_none()
            && self.on_mouse_up.is_none()
            && self.on_mouse_move.is_none()
            && self.on_mouse_enter.is_none()
            && self.on_mouse_leave.is_none()
    }
}

// Manual impls: a derive would require `M: Default` / `M: Clone`.
impl<M> Default for MouseHandlers<M> {
    fn default() -> Self {
        Self {
            on_click: None,
            on_mouse_down: None,
            on_mouse_up: None,
            on_mouse_move: None,
            on_mouse_enter: None,
            on_mouse_leave: None,
        }
    }
}

impl<M> Clone for MouseHandlers<M> {
    fn clone(&self) -> Self {
        Self {
            on_click: self.on_click.clone(),
            on_mouse_down: self.on_mouse_down.clone(),
            on_mouse_up: self.on_mouse_up.clone(),
            on_mouse_move: self.on_mouse_move.clone(),
            on_mouse_enter: self.on_mouse_enter.clone(),
            on_mouse_leave: self.on_mouse_leave.clone(),
        }
    }
}

impl<M> fmt::Debug for MouseHandlers<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for (name, present) in [
            ("on_click", self.on_click.is_some()),
            ("on_mouse_down", self.on_mouse_down.is_some()),
            ("on_mouse_up", self.on_mouse_up.is_some()),
            ("on_mouse_move", self.on_mouse_move.is_some()),
            ("on_mouse_enter", self.on_mouse_enter.is_some()),
            ("on_mouse_leave", self.on_mouse_leave.is_some()),
        ] {
            if present {
                set.entry(&name);
            }
        }
        set.finish()
    }
}

// =============================================================================
// Node variants
// =============================================================================

/// Container with flex layout.
pub struct View<M> {
    pub style: Style,
    pub children: Vec<Node<M>>,
    pub key: Option<String>,
    pub handlers: MouseHandlers<M>,
}

/// Text leaf.
pub struct Text<M> {
    pub content: String,
    pub style: Style,
    pub key: Option<String>,
    pub on_click: Option<Handler<Point, M>>,
}

/// Leaf that paints its own vector primitives.
pub struct Canvas<M> {
    pub primitives: Vec<DrawPrimitive>,
    pub style: Style,
    pub key: Option<String>,
    pub handlers: MouseHandlers<M>,
}

/// One element of the declarative UI tree.
pub enum Node<M> {
    View(View<M>),
    Text(Text<M>),
    Canvas(Canvas<M>),
    /// Structural grouping with no style or bounds of its own.
    Fragment(Vec<Node<M>>),
    Empty,
}

impl<M> Node<M> {
    pub fn view(style: Style, children: Vec<Node<M>>) -> Self {
        Self::View(View {
            style,
            children,
            key: None,
            handlers: MouseHandlers::default(),
        })
    }

    pub fn text(content: impl Into<String>, style: Style) -> Self {
        Self::Text(Text {
            content: content.into(),
            style,
            key: None,
            on_click: None,
        })
    }

    pub fn canvas(style: Style, primitives: Vec<DrawPrimitive>) -> Self {
        Self::Canvas(Canvas {
            primitives,
            style,
            key: None,
            handlers: MouseHandlers::default(),
        })
    }

    pub fn fragment(children: Vec<Node<M>>) -> Self {
        Self::Fragment(children)
    }

    pub fn empty() -> Self {
        Self::Empty
    }

    /// Whether this node receives bounds (View, Text, Canvas).
    pub fn participates_in_layout(&self) -> bool {
        matches!(self, Self::View(_) | Self::Text(_) | Self::Canvas(_))
    }

    pub fn style(&self) -> Option<&Style> {
        match self {
            Self::View(v) => Some(&v.style),
            Self::Text(t) => Some(&t.style),
            Self::Canvas(c) => Some(&c.style),
            Self::Fragment(_) | Self::Empty => None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            Self::View(v) => v.key.as_deref(),
            Self::Text(t) => t.key.as_deref(),
            Self::Canvas(c) => c.key.as_deref(),
            Self::Fragment(_) | Self::Empty => None,
        }
    }

    /// Declared children (only `View` and `Fragment` have any).
    pub fn children(&self) -> &[Node<M>] {
        match self {
            Self::View(v) => &v.children,
            Self::Fragment(children) => children,
            Self::Text(_) | Self::Canvas(_) | Self::Empty => &[],
        }
    }

    /// Pointer handlers of a `View` or `Canvas`.
    pub fn mouse_handlers(&self) -> Option<&MouseHandlers<M>> {
        match self {
            Self::View(v) => Some(&v.handlers),
            Self::Canvas(c) => Some(&c.handlers),
            _ => None,
        }
    }

    /// Children with fragments spliced in and `Empty` dropped.
    ///
    /// Paths in the bounds tree index into this list.
    pub fn layout_children(&self) -> Vec<&Node<M>> {
        let mut out = Vec::new();
        flatten_into(self.children(), &mut out);
        out
    }

    /// Number of View/Text/Canvas nodes in this subtree, including `self`.
    pub fn layout_node_count(&self) -> usize {
        let own = usize::from(self.participates_in_layout());
        own + self.children().iter().map(Node::layout_node_count).sum::<usize>()
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Replace the style. No-op on `Fragment` and `Empty`.
    pub fn with_style(mut self, style: Style) -> Self {
        match &mut self {
            Self::View(v) => v.style = style,
            Self::Text(t) => t.style = style,
            Self::Canvas(c) => c.style = style,
            Self::Fragment(_) | Self::Empty => {}
        }
        self
    }

    /// Set the key. No-op on `Fragment` and `Empty`.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        let key = Some(key.into());
        match &mut self {
            Self::View(v) => v.key = key,
            Self::Text(t) => t.key = key,
            Self::Canvas(c) => c.key = key,
            Self::Fragment(_) | Self::Empty => {}
        }
        self
    }

    /// Left-button-down handler. Supported by `View`, `Text` and `Canvas`.
    pub fn on_click(mut self, handler: impl Fn(Point) -> Option<M> + 'static) -> Self {
        let handler: Handler<Point, M> = Rc::new(handler);
        match &mut self {
            Self::View(View { handlers, .. }) | Self::Canvas(Canvas { handlers, .. }) => {
                handlers.on_click = Some(handler);
            }
            Self::Text(t) => t.on_click = Some(handler),
            Self::Fragment(_) | Self::Empty => {}
        }
        self
    }

    pub fn on_mouse_down(self, handler: impl Fn(ButtonInput) -> Option<M> + 'static) -> Self {
        self.with_handlers(|h| h.on_mouse_down = Some(Rc::new(handler)))
    }

    pub fn on_mouse_up(self, handler: impl Fn(ButtonInput) -> Option<M> + 'static) -> Self {
        self.with_handlers(|h| h.on_mouse_up = Some(Rc::new(handler)))
    }

    pub fn on_mouse_move(self, handler: impl Fn(Point) -> Option<M> + 'static) -> Self {
        self.with_handlers(|h| h.on_mouse_move = Some(Rc::new(handler)))
    }

    pub fn on_mouse_enter(self, handler: impl Fn(()) -> Option<M> + 'static) -> Self {
        self.with_handlers(|h| h.on_mouse_enter = Some(Rc::new(handler)))
    }

    pub fn on_mouse_leave(self, handler: impl Fn(()) -> Option<M> + 'static) -> Self {
        self.with_handlers(|h| h.on_mouse_leave = Some(Rc::new(handler)))
    }

    /// Mutate the handler set of a `View` or `Canvas`; other variants are
    /// returned unchanged.
    fn with_handlers(mut self, f: impl FnOnce(&mut MouseHandlers<M>)) -> Self {
        if let Self::View(View { handlers, .. }) | Self::Canvas(Canvas { handlers, .. }) =
            &mut self
        {
            f(handlers);
        }
        self
    }
}

fn flatten_into<'a, M>(children: &'a [Node<M>], out: &mut Vec<&'a Node<M>>) {
    for child in children {
        match child {
            Node::Fragment(inner) => flatten_into(inner, out),
            Node::Empty => {}
            node => out.push(node),
        }
    }
}

// =============================================================================
// Clone / Debug
// =============================================================================

impl<M> Clone for Node<M> {
    fn clone(&self) -> Self {
        match self {
            Self::View(v) => Self::View(View {
                style: v.style.clone(),
                children: v.children.clone(),
                key: v.key.clone(),
                handlers: v.handlers.clone(),
            }),
            Self::Text(t) => Self::Text(Text {
                content: t.content.clone(),
                style: t.style.clone(),
                key: t.key.clone(),
                on_click: t.on_click.clone(),
            }),
            Self::Canvas(c) => Self::Canvas(Canvas {
                primitives: c.primitives.clone(),
                style: c.style.clone(),
                key: c.key.clone(),
                handlers: c.handlers.clone(),
            }),
            Self::Fragment(children) => Self::Fragment(children.clone()),
            Self::Empty => Self::Empty,
        }
    }
}

impl<M> fmt::Debug for Node<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View(v) => f
                .debug_struct("View")
                .field("key", &v.key)
                .field("style", &v.style)
                .field("handlers", &v.handlers)
                .field("children", &v.children)
                .finish(),
            Self::Text(t) => f
                .debug_struct("Text")
                .field("key", &t.key)
                .field("content", &t.content)
                .field("style", &t.style)
                .field("on_click", &t.on_click.is_some())
                .finish(),
            Self::Canvas(c) => f
                .debug_struct("Canvas")
                .field("key", &c.key)
                .field("style", &c.style)
                .field("primitives", &c.primitives)
                .field("handlers", &c.handlers)
                .finish(),
            Self::Fragment(children) => f.debug_tuple("Fragment").field(children).finish(),
            Self::Empty => f.write_str("Empty"),
        }
    }
}
