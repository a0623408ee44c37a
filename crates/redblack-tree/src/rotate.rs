//! Rotation primitives. Rotations relink a constant number of nodes and
//! never touch colors.

use crate::RedBlackTree;
use crate::node::{NodeId, Side};

impl<T> RedBlackTree<T> {
    /// `pivot`'s right child takes its place; `pivot` becomes its left child.
    pub(crate) fn rotate_left(&mut self, pivot: NodeId) {
        self.rotate(pivot, Side::Left);
    }

    /// `pivot`'s left child takes its place; `pivot` becomes its right child.
    pub(crate) fn rotate_right(&mut self, pivot: NodeId) {
        self.rotate(pivot, Side::Right);
    }

    /// Move `pivot` down towards `towards`. The child on the opposite side
    /// must exist.
    fn rotate(&mut self, pivot: NodeId, towards: Side) {
        let Some(riser) = self.nodes[pivot][towards.opposite()] else {
            panic!(
                "rotation {:?} at node {:?} has no {:?} child to lift",
                towards,
                pivot,
                towards.opposite()
            );
        };

        // The riser's inner subtree changes hands.
        let inner = self.nodes[riser][towards];
        self.nodes[pivot][towards.opposite()] = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(pivot);
        }

        let parent = self.nodes[pivot].parent;
        let pivot_side = self.side_of(pivot);
        self.nodes[riser].parent = parent;
        match (parent, pivot_side) {
            (None, _) => self.root = Some(riser),
            (Some(parent), Some(side)) => self.nodes[parent][side] = Some(riser),
            (Some(_), None) => panic!("node {:?} is detached from its parent", pivot),
        }

        self.nodes[riser][towards] = Some(pivot);
        self.nodes[pivot].parent = Some(riser);
    }
}
