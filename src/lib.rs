//! # spark-ui
//!
//! Declarative UI trees, flex layout and pointer hit-testing for Rust.
//!
//! ## Architecture
//!
//! Every frame the application builds a fresh `Node<M>` tree, where `M` is
//! the message type its handlers produce. The frame pipeline is:
//! ```text
//! Node Tree → layout::compile → Bounds Tree + RenderPrimitives
//!                                    ↓
//!        PointerEvent → state::mouse dispatch → Option<M>
//! ```
//!
//! Nothing is retained between frames except the hovered node's [`Path`],
//! which the runtime loop owns and passes back in by `&mut`.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, Point, Bounds, flex enums, etc.)
//! - [`node`] - Node tree, styles, draw primitives, message mapping
//! - [`layout`] - Taffy-backed layout compiler
//! - [`render`] - Paint-ready primitives emitted by the compiler
//! - [`state`] - Hit-testing, hover tracking, crossterm input conversion
//! - [`config`] - Per-frame layout settings
//! - [`error`] - Layout errors

pub mod config;
pub mod error;
pub mod layout;
pub mod node;
pub mod render;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::LayoutConfig;
pub use error::{LayoutError, LayoutResult};

pub use node::{
    Border, ButtonInput, DrawPrimitive, Handler, MouseHandlers, Node, Paint, PathSegment, Shape,
    Style, Transform, map_msg,
};

pub use layout::{
    BoundsTree, CompiledFrame, NodeWithBounds, Path, compile, layout_bounds, render_primitives,
};

pub use render::{RenderPaint, RenderPrimitive, RenderShape};

pub use state::{
    MouseButton, PointerEvent, find_node_at_position, find_node_by_path, handle_mouse_motion,
    handle_node_event_with_bounds, handle_pointer_event,
};
