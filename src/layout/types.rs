//! Layout output types: paths, the bounds tree and a compiled frame.

use std::fmt;

use crate::node::Node;
use crate::render::RenderPrimitive;
use crate::types::Bounds;

// =============================================================================
// Path
// =============================================================================

/// Child indices from the root of a bounds tree down to one node.
///
/// The first index selects the root. Indices count layout children only
/// (fragments spliced in, `Empty` dropped). Paths are re-derived every frame
/// and only meaningful against a tree of the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path(Vec<usize>);

impl Path {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Path of the `index`-th root.
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    /// Path of this node's `index`-th child.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<usize>> for Path {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for index in &self.0 {
            write!(f, "/{index}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Bounds tree
// =============================================================================

/// A node together with its absolute bounds and laid-out children.
///
/// Borrows the node from the frame's node tree; both are dropped at the end
/// of the frame.
pub struct NodeWithBounds<'a, M> {
    pub node: &'a Node<M>,
    pub bounds: Bounds,
    /// In declaration order.
    pub children: Vec<NodeWithBounds<'a, M>>,
    pub path: Path,
}

impl<'a, M> NodeWithBounds<'a, M> {
    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(NodeWithBounds::node_count).sum::<usize>()
    }

    /// Depth-first pre-order walk over this subtree.
    pub fn walk(&self, visit: &mut impl FnMut(&NodeWithBounds<'a, M>)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

impl<M> fmt::Debug for NodeWithBounds<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeWithBounds")
            .field("path", &format_args!("{}", self.path))
            .field("key", &self.node.key())
            .field("bounds", &self.bounds)
            .field("children", &self.children)
            .finish()
    }
}

/// Bounds for every View/Text/Canvas node of a frame.
///
/// A forest: a `Fragment` at the top of the node tree yields several roots.
pub struct BoundsTree<'a, M> {
    pub roots: Vec<NodeWithBounds<'a, M>>,
}

impl<'a, M> BoundsTree<'a, M> {
    /// Total number of nodes with bounds.
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(NodeWithBounds::node_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Depth-first pre-order walk over every root.
    pub fn walk(&self, mut visit: impl FnMut(&NodeWithBounds<'a, M>)) {
        for root in &self.roots {
            root.walk(&mut visit);
        }
    }

    /// First node whose key matches.
    pub fn find_by_key(&self, key: &str) -> Option<&NodeWithBounds<'a, M>> {
        fn search<'t, 'a, M>(
            node: &'t NodeWithBounds<'a, M>,
            key: &str,
        ) -> Option<&'t NodeWithBounds<'a, M>> {
            if node.node.key() == Some(key) {
                return Some(node);
            }
            node.children.iter().find_map(|child| search(child, key))
        }
        self.roots.iter().find_map(|root| search(root, key))
    }
}

impl<M> fmt::Debug for BoundsTree<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundsTree").field("roots", &self.roots).finish()
    }
}

/// Everything the layout compiler produces for one frame.
pub struct CompiledFrame<'a, M> {
    pub bounds: BoundsTree<'a, M>,
    /// In paint order.
    pub primitives: Vec<RenderPrimitive>,
}

impl<M> fmt::Debug for CompiledFrame<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledFrame")
            .field("bounds", &self.bounds)
            .field("primitives", &self.primitives)
            .finish()
    }
}
