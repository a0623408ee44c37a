//! Fuzz harness for tree insertion
//!
//! Every 4 input bytes become one little-endian `i32` key. The tree must
//! validate after every insert and iterate in sorted order at the end.

#![no_main]

use libfuzzer_sys::fuzz_target;
use redblack_tree::RedBlackTree;

fuzz_target!(|data: &[u8]| {
    let keys: Vec<i32> = data
        .chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    let mut tree = RedBlackTree::new();
    for (step, &key) in keys.iter().enumerate() {
        tree.insert(key);
        if let Err(err) = tree.validate() {
            panic!("insert #{} ({}) broke the tree: {}", step, key, err);
        }
        assert!(tree.contains(&key));
    }

    assert_eq!(tree.size(), keys.len());
    let walked: Vec<i32> = tree.iter().copied().collect();
    let mut expected = keys.clone();
    expected.sort();
    assert_eq!(walked, expected);

    let copy = tree.clone();
    assert_eq!(copy.to_prefix_string(), tree.to_prefix_string());
});
