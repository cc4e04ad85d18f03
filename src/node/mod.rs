//! Node tree, styles and the message mapper.
//!
//! - [`Node`] - the declarative UI tree, generic over its message type
//! - [`Style`] / [`Transform`] - per-node attributes
//! - [`DrawPrimitive`] - canvas geometry
//! - [`map_msg`] - structure-preserving remap of handler messages

mod draw;
mod map;
mod style;
mod tree;

pub use draw::*;
pub use map::map_msg;
pub use style::*;
pub use tree::*;
