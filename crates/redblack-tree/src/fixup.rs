//! Insertion fixup.
//!
//! A freshly attached red node under a red parent breaks the "no red-red
//! edge" rule. Two remedies exist, chosen by the color of the uncle:
//!
//! * red uncle: parent and uncle turn black and the grandparent turns red.
//!   This keeps black heights intact but may create a new red-red edge two
//!   levels up, so the loop restarts at the grandparent.
//! * black (or missing) uncle: one or two rotations around the grandparent
//!   put a black node on top of two red children. This always finishes.
//!
//! Rotating shapes are named by the path from the grandparent down to the
//! new node.

use crate::RedBlackTree;
use crate::node::{Color, NodeId, Side};
use serde::{Deserialize, Serialize};

/// One fixup step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixupCase {
    /// Red uncle; colors flipped, no rotation.
    Recolor,
    /// Single right rotation at the grandparent.
    LeftLeft,
    /// Single left rotation at the grandparent.
    RightRight,
    /// Left rotation at the parent, then right rotation at the grandparent.
    LeftRight,
    /// Right rotation at the parent, then left rotation at the grandparent.
    RightLeft,
}

impl FixupCase {
    pub const ALL: [FixupCase; 5] = [
        FixupCase::Recolor,
        FixupCase::LeftLeft,
        FixupCase::RightRight,
        FixupCase::LeftRight,
        FixupCase::RightLeft,
    ];

    /// Rotations this step performs.
    pub fn rotations(self) -> u64 {
        match self {
            FixupCase::Recolor => 0,
            FixupCase::LeftLeft | FixupCase::RightRight => 1,
            FixupCase::LeftRight | FixupCase::RightLeft => 2,
        }
    }
}

/// Running tally of fixup steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixupStats {
    pub recolorings: u64,
    pub left_left: u64,
    pub right_right: u64,
    pub left_right: u64,
    pub right_left: u64,
}

impl FixupStats {
    pub fn count(&self, case: FixupCase) -> u64 {
        match case {
            FixupCase::Recolor => self.recolorings,
            FixupCase::LeftLeft => self.left_left,
            FixupCase::RightRight => self.right_right,
            FixupCase::LeftRight => self.left_right,
            FixupCase::RightLeft => self.right_left,
        }
    }

    pub fn rotations(&self) -> u64 {
        FixupCase::ALL
            .iter()
            .map(|&case| self.count(case) * case.rotations())
            .sum()
    }

    /// Fixups that ended in a rotation.
    pub fn restructurings(&self) -> u64 {
        self.left_left + self.right_right + self.left_right + self.right_left
    }

    fn record(&mut self, case: FixupCase) {
        let slot = match case {
            FixupCase::Recolor => &mut self.recolorings,
            FixupCase::LeftLeft => &mut self.left_left,
            FixupCase::RightRight => &mut self.right_right,
            FixupCase::LeftRight => &mut self.left_right,
            FixupCase::RightLeft => &mut self.right_left,
        };
        *slot += 1;
    }
}

impl<T> RedBlackTree<T> {
    /// Restore the invariants after `node` was attached under a red parent.
    pub(crate) fn insert_fixup(&mut self, mut node: NodeId) {
        loop {
            let Some(parent) = self.nodes[node].parent else {
                panic!("fixup started at {:?}, which has no parent", node);
            };
            let grand_parent = self.nodes[parent].parent;
            let red_uncle = self
                .uncle_of(node)
                .filter(|&uncle| self.nodes[uncle].color == Color::Red);

            let Some(uncle) = red_uncle else {
                self.restructure(node, parent, grand_parent);
                break;
            };

            self.nodes[parent].color = Color::Black;
            self.nodes[uncle].color = Color::Black;
            self.stats.record(FixupCase::Recolor);

            // The root keeps its black color.
            let Some(grand_parent) = grand_parent.filter(|&gp| Some(gp) != self.root) else {
                break;
            };
            self.nodes[grand_parent].color = Color::Red;
            if self.color_of(self.nodes[grand_parent].parent) != Color::Red {
                break;
            }
            node = grand_parent;
        }
        self.paint_root_black();
    }

    /// Black-uncle case. Terminal.
    fn restructure(&mut self, node: NodeId, parent: NodeId, grand_parent: Option<NodeId>) {
        if let Some(grand_parent) = grand_parent {
            self.nodes[grand_parent].color = Color::Red;
        }

        let case = match (grand_parent, self.side_of(parent), self.side_of(node)) {
            (Some(grand_parent), Some(Side::Left), Some(Side::Left)) => {
                self.rotate_right(grand_parent);
                self.nodes[parent].color = Color::Black;
                FixupCase::LeftLeft
            }
            (Some(grand_parent), Some(Side::Right), Some(Side::Right)) => {
                self.rotate_left(grand_parent);
                self.nodes[parent].color = Color::Black;
                FixupCase::RightRight
            }
            (Some(grand_parent), Some(Side::Left), Some(Side::Right)) => {
                self.rotate_left(parent);
                self.rotate_right(grand_parent);
                self.nodes[node].color = Color::Black;
                self.nodes[parent].color = Color::Red;
                FixupCase::LeftRight
            }
            (Some(grand_parent), Some(Side::Right), Some(Side::Left)) => {
                self.rotate_right(parent);
                self.rotate_left(grand_parent);
                self.nodes[node].color = Color::Black;
                self.nodes[parent].color = Color::Red;
                FixupCase::RightLeft
            }
            (grand_parent, parent_side, node_side) => panic!(
                "impossible fixup configuration: grandparent {:?}, parent side {:?}, node side {:?}",
                grand_parent, parent_side, node_side
            ),
        };
        self.stats.record(case);
    }
}
