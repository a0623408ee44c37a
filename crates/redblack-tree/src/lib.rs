//! Red-black tree for redblack.
//!
//! Nodes live in an arena owned by the tree and refer to each other by
//! index, so parent links are plain lookups rather than aliasing pointers.
//! Insertion places the key as a red leaf and then runs the insertion fixup
//! until every red-black invariant holds again. Nodes are never
//! removed.
//!
//! ```
//! use redblack_tree::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! for key in [30, 15, 10] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.to_prefix_string(), " B15  R10  R30 ");
//! assert_eq!(tree.min(), Ok(&10));
//! assert!(tree.validate().is_ok());
//! ```

mod error;
mod fixup;
mod node;
mod rotate;
mod traverse;
mod validate;

pub use error::{InvariantViolation, Result, TreeError};
pub use fixup::{FixupCase, FixupStats};
pub use node::Color;
pub use traverse::{Entry, ParseOrderError, Traversal, TraversalOrder};

use node::{Arena, Node, NodeId, Side};
use std::fmt;

/// A red-black tree over ordered keys. Duplicate keys are kept.
pub struct RedBlackTree<T> {
    nodes: Arena<T>,
    root: Option<NodeId>,
    stats: FixupStats,
}

impl<T> RedBlackTree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            stats: FixupStats::default(),
        }
    }

    /// Create a tree holding a single black root.
    pub fn with_root(key: T) -> Self {
        let mut nodes = Arena::new();
        let root = nodes.push(Node::new(key, Color::Black, None));
        Self {
            nodes,
            root: Some(root),
            stats: FixupStats::default(),
        }
    }

    /// Number of stored keys, duplicates included.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Smallest key.
    pub fn min(&self) -> Result<&T> {
        self.extreme(Side::Left)
    }

    /// Largest key.
    pub fn max(&self) -> Result<&T> {
        self.extreme(Side::Right)
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.infix().map(|entry| entry.key)
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    /// Counts of fixup cases run by every insert so far.
    pub fn fixup_stats(&self) -> FixupStats {
        self.stats
    }

    fn extreme(&self, side: Side) -> Result<&T> {
        let mut current = self.root.ok_or(TreeError::EmptyTree)?;
        while let Some(next) = self.nodes[current][side] {
            current = next;
        }
        Ok(&self.nodes[current].key)
    }

    fn subtree_height(&self, id: Option<NodeId>) -> usize {
        match id {
            None => 0,
            Some(id) => {
                let node = &self.nodes[id];
                1 + self
                    .subtree_height(node.left)
                    .max(self.subtree_height(node.right))
            }
        }
    }

    /// Color of an optional node; a missing node is black.
    fn color_of(&self, id: Option<NodeId>) -> Color {
        id.map_or(Color::Black, |id| self.nodes[id].color)
    }

    /// Which side of its parent `id` hangs from, `None` for the root.
    fn side_of(&self, id: NodeId) -> Option<Side> {
        let parent = self.nodes[id].parent?;
        if self.nodes[parent].left == Some(id) {
            Some(Side::Left)
        } else if self.nodes[parent].right == Some(id) {
            Some(Side::Right)
        } else {
            None
        }
    }

    fn uncle_of(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.nodes[id].parent?;
        let side = self.side_of(parent)?;
        let grand_parent = self.nodes[parent].parent?;
        self.nodes[grand_parent][side.opposite()]
    }

    fn paint_root_black(&mut self) {
        if let Some(root) = self.root {
            self.nodes[root].color = Color::Black;
        }
    }
}

impl<T: Ord> RedBlackTree<T> {
    /// Insert a key and rebalance. Equal keys go to the right.
    pub fn insert(&mut self, key: T) {
        let node = self.attach(key);
        let parent = self.nodes[node].parent;
        if self.color_of(parent) == Color::Red {
            self.insert_fixup(node);
        }
    }

    pub fn contains(&self, key: &T) -> bool {
        self.find(key).is_some()
    }

    fn find(&self, key: &T) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match key.cmp(&node.key) {
                std::cmp::Ordering::Equal => return Some(id),
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Plain BST placement of a new red leaf.
    fn attach(&mut self, key: T) -> NodeId {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(id) = current {
            side = if key < self.nodes[id].key {
                Side::Left
            } else {
                Side::Right
            };
            parent = Some(id);
            current = self.nodes[id][side];
        }

        let node = self.nodes.push(Node::new(key, Color::Red, parent));
        match parent {
            Some(parent) => self.nodes[parent][side] = Some(node),
            None => self.root = Some(node),
        }
        self.paint_root_black();
        node
    }
}

impl<T: Clone> RedBlackTree<T> {
    fn copy_subtree(
        &self,
        source: Option<NodeId>,
        parent: Option<NodeId>,
        into: &mut Arena<T>,
    ) -> Option<NodeId> {
        let source = &self.nodes[source?];
        let id = into.push(Node::new(source.key.clone(), source.color, parent));
        let left = self.copy_subtree(source.left, Some(id), into);
        let right = self.copy_subtree(source.right, Some(id), into);
        into[id].left = left;
        into[id].right = right;
        Some(id)
    }
}

/// Deep copy: every node is duplicated into a fresh arena.
impl<T: Clone> Clone for RedBlackTree<T> {
    fn clone(&self) -> Self {
        let mut nodes = Arena::with_capacity(self.nodes.len());
        let root = self.copy_subtree(self.root, None, &mut nodes);
        Self {
            nodes,
            root,
            stats: self.stats,
        }
    }
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RedBlackTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for RedBlackTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = RedBlackTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for RedBlackTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
