//! Reusable key-sequence strategies.

use proptest::prelude::*;
use redblack_tree::TraversalOrder;

// ============================================================================
// Keys
// ============================================================================

/// Keys from a narrow range, so sequences repeat values often.
pub fn strategy_key() -> impl Strategy<Value = i64> {
    -500i64..500
}

/// Keys from the full `i64` range.
pub fn strategy_wide_key() -> impl Strategy<Value = i64> {
    any::<i64>()
}

// ============================================================================
// Sequences
// ============================================================================

/// Insertion sequences, duplicates likely.
pub fn strategy_keys() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(strategy_key(), 0..256)
}

/// Distinct keys in random insertion order.
pub fn strategy_distinct_keys() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(strategy_wide_key(), 0..256)
        .prop_map(|keys| keys.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// Sorted runs, the degenerate input for an unbalanced search tree.
pub fn strategy_ascending_keys() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(strategy_key(), 0..512).prop_map(|mut keys| {
        keys.sort();
        keys
    })
}

/// Disjoint `(inserted, absent)` key sets; `inserted` is never empty.
pub fn strategy_split_keys() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    prop::collection::btree_set(strategy_wide_key(), 2..256)
        .prop_map(|keys| keys.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
        .prop_flat_map(|keys| {
            let len = keys.len();
            (Just(keys), 1..len)
        })
        .prop_map(|(keys, split)| {
            let (inserted, absent) = keys.split_at(split);
            (inserted.to_vec(), absent.to_vec())
        })
}

// ============================================================================
// Traversals
// ============================================================================

pub fn strategy_traversal_order() -> impl Strategy<Value = TraversalOrder> {
    prop::sample::select(TraversalOrder::ALL.to_vec())
}
