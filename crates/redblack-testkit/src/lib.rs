//! Shared fixtures for redblack tests.
//!
//! Keeping the scenario table and key strategies here lets the tree, config
//! and CLI tests agree on the same expected strings.

pub mod bdd;
pub mod proptest;
pub mod scenarios;

#[cfg(test)]
mod bdd_tests;

pub use scenarios::{
    COPY_SCENARIO, INSERTION_SCENARIOS, InsertionScenario, SEARCH_SCENARIO,
    TO_STRINGS_SCENARIO, TraversalScenario,
};

use redblack_tree::RedBlackTree;
use std::fmt::Debug;

/// Build a tree by inserting `keys` in order.
pub fn tree_of(keys: &[i64]) -> RedBlackTree<i64> {
    keys.iter().copied().collect()
}

/// Insert `keys` one at a time, validating after every insert.
///
/// The error names the failing step so a shrunk proptest case reads well.
pub fn build_checked<T, I>(keys: I) -> Result<RedBlackTree<T>, String>
where
    T: Ord + Debug,
    I: IntoIterator<Item = T>,
{
    let mut tree = RedBlackTree::new();
    for (step, key) in keys.into_iter().enumerate() {
        let shown = format!("{:?}", key);
        tree.insert(key);
        if let Err(err) = tree.validate() {
            return Err(format!("insert #{} ({}) broke the tree: {}", step, shown, err));
        }
        if tree.size() != step + 1 {
            return Err(format!(
                "insert #{} ({}) left size {}, expected {}",
                step,
                shown,
                tree.size(),
                step + 1
            ));
        }
    }
    Ok(tree)
}

/// `floor(2 * log2(n + 1))`, the height ceiling for `n` keys.
pub fn height_bound(n: usize) -> usize {
    (2.0 * ((n + 1) as f64).log2()).floor() as usize
}

/// Sorted copy of `keys`.
pub fn sorted<T: Ord + Clone>(keys: &[T]) -> Vec<T> {
    let mut keys = keys.to_vec();
    keys.sort();
    keys
}
