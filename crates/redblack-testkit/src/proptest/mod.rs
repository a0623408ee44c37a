//! Proptest strategies for redblack property-based testing.

pub mod strategies;

pub use strategies::{
    strategy_ascending_keys, strategy_distinct_keys, strategy_key, strategy_keys,
    strategy_split_keys, strategy_traversal_order, strategy_wide_key,
};
