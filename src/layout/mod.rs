//! Layout Module
//!
//! Turns a frame's node tree into absolute pixel bounds and a flat list of
//! render primitives.
//!
//! # Architecture
//!
//! Flex layout is delegated to [Taffy](https://github.com/DioxusLabs/taffy).
//! The bridge:
//!
//! 1. Converts node styles → Taffy styles
//! 2. Builds a Taffy tree from relative children (absolute children become
//!    detached roots)
//! 3. Provides measure functions for text and canvas intrinsic sizing
//! 4. Reads computed rectangles back in pixels
//!
//! Transforms, absolute positioning and primitive emission happen on top of
//! the solver output in [`compile`].
//!
//! # Example
//!
//! ```
//! use spark_ui::layout::layout_bounds;
//! use spark_ui::{Bounds, LayoutConfig, Node, Style};
//!
//! let root: Node<()> = Node::view(
//!     Style::new(),
//!     vec![Node::view(Style::new().with_size(50.0, 50.0), vec![])],
//! );
//! let tree = layout_bounds(&root, &LayoutConfig::new(800.0, 600.0)).unwrap();
//! assert_eq!(tree.roots[0].children[0].bounds, Bounds::new(0.0, 0.0, 50.0, 50.0));
//! ```

mod compile;
mod taffy_bridge;
mod text_measure;
mod types;

pub use compile::{compile, layout_bounds, render_primitives};
pub use text_measure::{TextMetrics, char_columns, columns, wrapped_line_count};
pub use types::{BoundsTree, CompiledFrame, NodeWithBounds, Path};
