//! Invariant checks used by tests, the fuzzer and the CLI.

use crate::RedBlackTree;
use crate::error::{InvariantViolation, Result};
use crate::node::{Color, NodeId};

impl<T> RedBlackTree<T> {
    /// Links are mutual, the root is parentless and every node is reachable.
    pub(crate) fn check_structure(&self) -> Result<()> {
        let stored = self.nodes.len();
        let Some(root) = self.root else {
            return match stored {
                0 => Ok(()),
                _ => Err(InvariantViolation::UnreachableNodes {
                    reachable: 0,
                    stored,
                }
                .into()),
            };
        };
        if self.nodes[root].parent.is_some() {
            return Err(InvariantViolation::RootHasParent.into());
        }

        let mut seen = vec![false; stored];
        let mut stack = vec![(root, 0usize)];
        let mut reachable = 0;
        while let Some((id, depth)) = stack.pop() {
            // A node seen twice means two parents point at it.
            if std::mem::replace(&mut seen[id.index()], true) {
                return Err(InvariantViolation::ParentLinkMismatch { depth }.into());
            }
            reachable += 1;

            let node = &self.nodes[id];
            for child in [node.left, node.right].into_iter().flatten() {
                if self.nodes[child].parent != Some(id) {
                    return Err(InvariantViolation::ParentLinkMismatch { depth: depth + 1 }.into());
                }
                stack.push((child, depth + 1));
            }
        }

        if reachable != stored {
            return Err(InvariantViolation::UnreachableNodes { reachable, stored }.into());
        }
        Ok(())
    }

    /// Root is black, no red-red edge, uniform black height.
    fn check_colors(&self) -> Result<usize> {
        let Some(root) = self.root else {
            return Ok(0);
        };
        if self.nodes[root].color == Color::Red {
            return Err(InvariantViolation::RedRoot.into());
        }
        self.black_height(root, 0)
    }

    fn black_height(&self, id: NodeId, depth: usize) -> Result<usize> {
        let node = &self.nodes[id];
        if node.color == Color::Red
            && (self.color_of(node.left) == Color::Red || self.color_of(node.right) == Color::Red)
        {
            return Err(InvariantViolation::RedRedEdge { depth }.into());
        }

        let left = match node.left {
            Some(child) => self.black_height(child, depth + 1)?,
            None => 0,
        };
        let right = match node.right {
            Some(child) => self.black_height(child, depth + 1)?,
            None => 0,
        };
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { left, right }.into());
        }

        Ok(left + usize::from(node.color == Color::Black))
    }
}

impl<T: Ord> RedBlackTree<T> {
    /// Check every tree invariant and return the root's black height.
    ///
    /// Structure is checked first so the later walks cannot loop on a
    /// corrupted arena.
    pub fn validate(&self) -> Result<usize> {
        self.check_structure()?;
        self.check_order()?;
        self.check_colors()
    }

    fn check_order(&self) -> Result<()> {
        let mut previous: Option<&T> = None;
        for (position, key) in self.iter().enumerate() {
            if previous.is_some_and(|previous| key < previous) {
                return Err(InvariantViolation::OutOfOrder { position }.into());
            }
            previous = Some(key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::node::{Color, Node};
    use crate::{InvariantViolation, RedBlackTree, TreeError};

    fn tree_of(keys: &[i32]) -> RedBlackTree<i32> {
        keys.iter().copied().collect()
    }

    fn violation(tree: &RedBlackTree<i32>) -> InvariantViolation {
        match tree.validate() {
            Err(TreeError::Invariant(violation)) => violation,
            other => panic!("expected an invariant violation, got {:?}", other),
        }
    }

    #[test]
    fn valid_trees_report_black_height() {
        assert_eq!(RedBlackTree::<i32>::new().validate(), Ok(0));
        assert_eq!(RedBlackTree::with_root(1).validate(), Ok(1));
        assert_eq!(tree_of(&[30, 15, 45, 10]).validate(), Ok(2));
    }

    #[test]
    fn detects_red_root() {
        let mut tree = tree_of(&[30, 15]);
        let root = tree.root.unwrap();
        tree.nodes[root].color = Color::Red;
        assert_eq!(violation(&tree), InvariantViolation::RedRoot);
    }

    #[test]
    fn detects_red_red_edge() {
        let mut tree = tree_of(&[15, 10, 30, 13]);
        assert_eq!(tree.to_prefix_string(), " B15  B10  R13  B30 ");
        let ten = tree.find(&10).unwrap();
        tree.nodes[ten].color = Color::Red;
        assert_eq!(violation(&tree), InvariantViolation::RedRedEdge { depth: 1 });
    }

    #[test]
    fn detects_black_height_mismatch() {
        let mut tree = tree_of(&[30, 15, 45]);
        let fifteen = tree.find(&15).unwrap();
        tree.nodes[fifteen].color = Color::Black;
        assert_eq!(
            violation(&tree),
            InvariantViolation::BlackHeightMismatch { left: 1, right: 0 }
        );
    }

    #[test]
    fn detects_out_of_order_keys() {
        let mut tree = tree_of(&[30, 15, 45]);
        let fifteen = tree.find(&15).unwrap();
        tree.nodes[fifteen].key = 99;
        assert_eq!(
            violation(&tree),
            InvariantViolation::OutOfOrder { position: 1 }
        );
    }

    #[test]
    fn detects_broken_parent_link() {
        let mut tree = tree_of(&[30, 15, 45]);
        let fifteen = tree.find(&15).unwrap();
        let forty_five = tree.find(&45).unwrap();
        tree.nodes[fifteen].parent = Some(forty_five);
        assert_eq!(
            violation(&tree),
            InvariantViolation::ParentLinkMismatch { depth: 1 }
        );
    }

    #[test]
    fn detects_root_with_parent() {
        let mut tree = tree_of(&[30, 15]);
        let root = tree.root.unwrap();
        let fifteen = tree.find(&15).unwrap();
        tree.nodes[root].parent = Some(fifteen);
        assert_eq!(violation(&tree), InvariantViolation::RootHasParent);
    }

    #[test]
    fn detects_unreachable_nodes() {
        let mut tree = tree_of(&[30, 15]);
        tree.nodes.push(Node::new(7, Color::Red, None));
        assert_eq!(
            violation(&tree),
            InvariantViolation::UnreachableNodes {
                reachable: 2,
                stored: 3
            }
        );
    }
}
