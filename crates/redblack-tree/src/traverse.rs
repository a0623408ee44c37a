//! Lazy traversals and their token serialization.
//!
//! Every visited node renders as `" " + color + key + " "`, so adjacent
//! tokens are separated by two spaces.

use crate::RedBlackTree;
use crate::node::{Color, NodeId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

/// Depth-first visiting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    /// Left subtree, node, right subtree.
    Infix,
    /// Node, left subtree, right subtree.
    Prefix,
    /// Left subtree, right subtree, node.
    Postfix,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 3] = [
        TraversalOrder::Infix,
        TraversalOrder::Prefix,
        TraversalOrder::Postfix,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TraversalOrder::Infix => "infix",
            TraversalOrder::Prefix => "prefix",
            TraversalOrder::Postfix => "postfix",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown traversal order name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOrderError(String);

impl fmt::Display for ParseOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown traversal order '{}' (expected infix, prefix or postfix)",
            self.0
        )
    }
}

impl std::error::Error for ParseOrderError {}

impl FromStr for TraversalOrder {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "infix" | "inorder" | "in-order" => Ok(TraversalOrder::Infix),
            "prefix" | "preorder" | "pre-order" => Ok(TraversalOrder::Prefix),
            "postfix" | "postorder" | "post-order" => Ok(TraversalOrder::Postfix),
            _ => Err(ParseOrderError(s.to_string())),
        }
    }
}

/// A visited node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a, T> {
    pub color: Color,
    pub key: &'a T,
}

impl<T: fmt::Display> fmt::Display for Entry<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " {}{} ", self.color, self.key)
    }
}

#[derive(Debug, Clone, Copy)]
enum Visit {
    Expand(NodeId),
    Emit(NodeId),
}

/// Depth-first walk driven by an explicit stack.
pub struct Traversal<'a, T> {
    tree: &'a RedBlackTree<T>,
    order: TraversalOrder,
    stack: Vec<Visit>,
    remaining: usize,
}

impl<'a, T> Traversal<'a, T> {
    fn new(tree: &'a RedBlackTree<T>, order: TraversalOrder) -> Self {
        Self {
            tree,
            order,
            stack: tree.root.map(Visit::Expand).into_iter().collect(),
            remaining: tree.size(),
        }
    }

    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    fn expand(&mut self, child: Option<NodeId>) {
        if let Some(child) = child {
            self.stack.push(Visit::Expand(child));
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = Entry<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some(visit) = self.stack.pop() {
            match visit {
                Visit::Emit(id) => {
                    self.remaining = self.remaining.saturating_sub(1);
                    let node = &tree.nodes[id];
                    return Some(Entry {
                        color: node.color,
                        key: &node.key,
                    });
                }
                Visit::Expand(id) => {
                    let node = &tree.nodes[id];
                    // Pushed in reverse: the last push is visited first.
                    match self.order {
                        TraversalOrder::Prefix => {
                            self.expand(node.right);
                            self.expand(node.left);
                            self.stack.push(Visit::Emit(id));
                        }
                        TraversalOrder::Infix => {
                            self.expand(node.right);
                            self.stack.push(Visit::Emit(id));
                            self.expand(node.left);
                        }
                        TraversalOrder::Postfix => {
                            self.stack.push(Visit::Emit(id));
                            self.expand(node.right);
                            self.expand(node.left);
                        }
                    }
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Traversal<'_, T> {}

impl<T> FusedIterator for Traversal<'_, T> {}

impl<T> RedBlackTree<T> {
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, T> {
        Traversal::new(self, order)
    }

    pub fn infix(&self) -> Traversal<'_, T> {
        self.traverse(TraversalOrder::Infix)
    }

    pub fn prefix(&self) -> Traversal<'_, T> {
        self.traverse(TraversalOrder::Prefix)
    }

    pub fn postfix(&self) -> Traversal<'_, T> {
        self.traverse(TraversalOrder::Postfix)
    }
}

impl<T: fmt::Display> RedBlackTree<T> {
    /// Concatenated tokens in the given order; empty for an empty tree.
    pub fn to_order_string(&self, order: TraversalOrder) -> String {
        self.traverse(order).map(|entry| entry.to_string()).collect()
    }

    pub fn to_infix_string(&self) -> String {
        self.to_order_string(TraversalOrder::Infix)
    }

    pub fn to_prefix_string(&self) -> String {
        self.to_order_string(TraversalOrder::Prefix)
    }

    pub fn to_postfix_string(&self) -> String {
        self.to_order_string(TraversalOrder::Postfix)
    }
}
