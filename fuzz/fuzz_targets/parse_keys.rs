//! Fuzz harness for key-file parsing
//!
//! Arbitrary text must either parse or fail cleanly; parsed keys must build a
//! valid tree.

#![no_main]

use libfuzzer_sys::fuzz_target;
use redblack_config::parse_keys;
use redblack_tree::RedBlackTree;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(keys) = parse_keys(input) {
        let tree: RedBlackTree<i64> = keys.iter().copied().collect();
        assert_eq!(tree.size(), keys.len());
        assert!(tree.validate().is_ok());
    }
});
