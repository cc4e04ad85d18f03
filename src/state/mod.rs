//! State Module - Pointer input and dispatch
//!
//! - **Mouse** - Hit-testing, hover tracking, handler dispatch
//! - **Input** - crossterm event conversion

pub mod input;
pub mod mouse;

pub use input::{CellMetrics, InputEvent, convert_event, convert_mouse_event};
pub use mouse::{
    MouseButton, PointerEvent, find_node_at_position, find_node_by_path,
    handle_mouse_motion, handle_node_event_with_bounds, handle_pointer_event,
};
