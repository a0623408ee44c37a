use std::fmt;

/// A broken red-black or bookkeeping invariant found by
/// [`RedBlackTree::validate`](crate::RedBlackTree::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// An in-order walk produced a key smaller than its predecessor.
    OutOfOrder { position: usize },
    /// The root node is red.
    RedRoot,
    /// A red node has a red child.
    RedRedEdge { depth: usize },
    /// Two subtrees of one node disagree on black height.
    BlackHeightMismatch { left: usize, right: usize },
    /// A child's parent link does not point back at the node holding it.
    ParentLinkMismatch { depth: usize },
    /// The root has a parent link.
    RootHasParent,
    /// Some arena nodes cannot be reached from the root.
    UnreachableNodes { reachable: usize, stored: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::OutOfOrder { position } => {
                write!(f, "in-order key at position {} is out of order", position)
            }
            InvariantViolation::RedRoot => write!(f, "root is red"),
            InvariantViolation::RedRedEdge { depth } => {
                write!(f, "red node at depth {} has a red child", depth)
            }
            InvariantViolation::BlackHeightMismatch { left, right } => {
                write!(f, "black height mismatch: left {} vs right {}", left, right)
            }
            InvariantViolation::ParentLinkMismatch { depth } => {
                write!(f, "parent link of node at depth {} is inconsistent", depth)
            }
            InvariantViolation::RootHasParent => write!(f, "root has a parent link"),
            InvariantViolation::UnreachableNodes { reachable, stored } => write!(
                f,
                "{} of {} stored nodes are reachable from the root",
                reachable, stored
            ),
        }
    }
}

/// Tree errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// `min`/`max` on a tree with no nodes.
    EmptyTree,
    Invariant(InvariantViolation),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::EmptyTree => write!(f, "Tree is empty"),
            TreeError::Invariant(violation) => write!(f, "Invariant violated: {}", violation),
        }
    }
}

impl std::error::Error for TreeError {}

impl From<InvariantViolation> for TreeError {
    fn from(violation: InvariantViolation) -> Self {
        TreeError::Invariant(violation)
    }
}

/// Result type alias for tree operations
pub type Result<T> = std::result::Result<T, TreeError>;
