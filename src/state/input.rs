//! Input Module - crossterm event conversion
//!
//! Bridges crossterm's event system with the pointer dispatch in
//! [`mouse`](super::mouse). Terminal cells are scaled to pixels with
//! [`CellMetrics`] so hit-testing works in the same space as layout.
//! Reading events and toggling mouse capture stay with the caller's event
//! loop; this module only converts what it is handed.
//!
//! # API
//!
//! - `convert_mouse_event` - Convert crossterm MouseEvent to a PointerEvent
//! - `convert_event` - Convert any crossterm Event to an InputEvent
//!
//! # Example
//!
//! ```ignore
//! use spark_ui::state::input::{convert_event, CellMetrics, InputEvent};
//! use spark_ui::state::mouse::handle_pointer_event;
//!
//! let metrics = CellMetrics::default();
//! // `event` comes from the application's own crossterm read loop.
//! if let InputEvent::Pointer(pointer) = convert_event(event, &metrics) {
//!     handle_pointer_event(&tree, &mut hovered, &mut |msg| queue.push(msg), &pointer);
//! }
//! ```

use crossterm::event::{
    Event as CrosstermEvent, MouseButton as CrosstermMouseButton,
    MouseEvent as CrosstermMouseEvent, MouseEventKind,
};

use super::mouse::{MouseButton, PointerEvent};

// =============================================================================
// CELL METRICS
// =============================================================================

/// Pixel size of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_width: 8.0,
            cell_height: 16.0,
        }
    }
}

impl CellMetrics {
    pub fn new(cell_width: f32, cell_height: f32) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }

    /// Pixel position of the center of cell `(column, row)`.
    pub fn cell_center(&self, column: u16, row: u16) -> (f32, f32) {
        (
            (f32::from(column) + 0.5) * self.cell_width,
            (f32::from(row) + 0.5) * self.cell_height,
        )
    }

    /// Pixel size of a `columns × rows` terminal.
    pub fn window_size(&self, columns: u16, rows: u16) -> (f32, f32) {
        (
            f32::from(columns) * self.cell_width,
            f32::from(rows) * self.cell_height,
        )
    }
}

// =============================================================================
// INPUT EVENT ENUM
// =============================================================================

/// Unified event type for the runtime loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer event in pixels
    Pointer(PointerEvent),
    /// Terminal resize, in pixels
    Resize { width: f32, height: f32 },
    /// No event or unhandled event type
    None,
}

// =============================================================================
// MOUSE EVENT CONVERSION
// =============================================================================

/// Convert a crossterm MouseEvent to a PointerEvent.
///
/// Drags become moves. Scrolling has no pointer counterpart and yields `None`.
pub fn convert_mouse_event(event: CrosstermMouseEvent, metrics: &CellMetrics) -> Option<PointerEvent> {
    let (x, y) = metrics.cell_center(event.column, event.row);
    match event.kind {
        MouseEventKind::Down(btn) => Some(PointerEvent::MouseDown {
            x,
            y,
            button: convert_mouse_button(btn),
        }),
        MouseEventKind::Up(btn) => Some(PointerEvent::MouseUp {
            x,
            y,
            button: convert_mouse_button(btn),
        }),
        MouseEventKind::Drag(_) | MouseEventKind::Moved => Some(PointerEvent::MouseMove { x, y }),
        MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => None,
    }
}

/// Convert crossterm MouseButton to our MouseButton
fn convert_mouse_button(btn: CrosstermMouseButton) -> MouseButton {
    match btn {
        CrosstermMouseButton::Left => MouseButton::Left,
        CrosstermMouseButton::Right => MouseButton::Right,
        CrosstermMouseButton::Middle => MouseButton::Middle,
    }
}

/// Convert any crossterm event.
pub fn convert_event(event: CrosstermEvent, metrics: &CellMetrics) -> InputEvent {
    match event {
        CrosstermEvent::Mouse(mouse) => {
            convert_mouse_event(mouse, metrics).map_or(InputEvent::None, InputEvent::Pointer)
        }
        CrosstermEvent::Resize(columns, rows) => {
            let (width, height) = metrics.window_size(columns, rows);
            InputEvent::Resize { width, height }
        }
        _ => InputEvent::None,
    }
}

// =============================================================================
// TESTS
// =============================================================================
