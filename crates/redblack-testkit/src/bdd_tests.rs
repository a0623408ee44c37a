use crate::bdd::{Scenario, ScenarioContext};
use crate::bdd::assertions::*;
use crate::{COPY_SCENARIO, SEARCH_SCENARIO, TO_STRINGS_SCENARIO, tree_of};
use redblack_tree::{RedBlackTree, TraversalOrder, TreeError};

#[test]
fn copy_is_independent_of_its_source() {
    Scenario::new("Copying a tree")
        .given("a tree built from the copy fixture", |ctx| {
            ctx.trees
                .insert("source".into(), tree_of(COPY_SCENARIO.keys));
        })
        .when("the tree is copied", |ctx| {
            let source = assert_present(ctx.tree("source"), "source tree")?;
            let copy = source.clone();
            ctx.strings
                .insert("copied_prefix".into(), copy.to_prefix_string());
            ctx.trees.insert("copy".into(), copy);
            Ok(())
        })
        .when("200 is inserted into the source", |ctx| {
            let source = assert_present(ctx.tree_mut("source"), "source tree")?;
            source.insert(200);
            Ok(())
        })
        .then("the copy kept the fixture serialization", |ctx| {
            let copy = assert_present(ctx.tree("copy"), "copy")?;
            assert_eq(copy.to_prefix_string().as_str(), COPY_SCENARIO.prefix, "copy prefix")?;
            assert_eq(ctx.string("copied_prefix"), Some(COPY_SCENARIO.prefix), "prefix at copy time")?;
            assert_false(copy.contains(&200), "copy contains 200")
        })
        .then("the source changed", |ctx| {
            let source = assert_present(ctx.tree("source"), "source tree")?;
            let copy = assert_present(ctx.tree("copy"), "copy")?;
            assert_true(source.contains(&200), "source contains 200")?;
            assert_eq(source.size(), copy.size() + 1, "source size")?;
            for order in TraversalOrder::ALL {
                if source.to_order_string(order) == copy.to_order_string(order) {
                    return Err(format!("{} strings should differ after the insert", order));
                }
            }
            assert_valid(source, "source").map(|_| ())
        })
        .run()
        .expect("scenario should pass");
}

#[test]
fn bounds_of_an_empty_tree_fail() {
    Scenario::new("Bounds of an empty tree")
        .given("an empty tree", |ctx| {
            ctx.trees.insert("empty".into(), RedBlackTree::new());
        })
        .when("min and max are requested", |ctx| {
            let tree = assert_present(ctx.tree("empty"), "empty tree")?;
            let min = tree.min().map(|_| ()).unwrap_err();
            let max = tree.max().map(|_| ()).unwrap_err();
            ctx.flags
                .insert("min_empty".into(), min == TreeError::EmptyTree);
            ctx.flags
                .insert("max_empty".into(), max == TreeError::EmptyTree);
            ctx.strings.insert("message".into(), min.to_string());
            Ok(())
        })
        .then("both report an empty tree", |ctx| {
            assert_eq(ctx.flag("min_empty"), Some(true), "min error")?;
            assert_eq(ctx.flag("max_empty"), Some(true), "max error")?;
            assert_eq(ctx.string("message"), Some("Tree is empty"), "error message")
        })
        .run()
        .expect("scenario should pass");
}

#[test]
fn duplicate_keys_are_all_kept() {
    Scenario::new("Inserting duplicates")
        .given("a key list with repeats", |ctx| {
            ctx.keys.insert("keys".into(), vec![7, 3, 7, 7, 3, 9]);
        })
        .when("every key is inserted", |ctx| {
            let keys = assert_present(ctx.keys("keys"), "keys")?.to_vec();
            let tree = tree_of(&keys);
            ctx.numbers.insert("size".into(), tree.size() as u64);
            ctx.trees.insert("tree".into(), tree);
            Ok(())
        })
        .then("size counts every insert", |ctx| {
            assert_eq(ctx.number("size"), Some(6), "size")
        })
        .then("in-order keys keep the repeats", |ctx| {
            let tree = assert_present(ctx.tree("tree"), "tree")?;
            let keys: Vec<i64> = tree.iter().copied().collect();
            assert_eq(keys, vec![3, 3, 7, 7, 7, 9], "in-order keys")?;
            assert_valid(tree, "tree").map(|_| ())
        })
        .run()
        .expect("scenario should pass");
}

#[test]
fn seeded_context_extends_a_prebuilt_tree() {
    let ctx = ScenarioContext::new()
        .with_tree("tree", tree_of(SEARCH_SCENARIO.keys))
        .with_keys("extra", &[60, 44]);

    Scenario::new("Extending a seeded tree")
        .given("the seeded tree lacks the extra keys", |ctx| {
            let tree = ctx.tree("tree").expect("seeded tree");
            assert!(!tree.contains(&60) && !tree.contains(&44));
        })
        .when("the extra keys are inserted", |ctx| {
            let extra = assert_present(ctx.keys("extra"), "extra keys")?.to_vec();
            let tree = assert_present(ctx.tree_mut("tree"), "tree")?;
            tree.extend(extra);
            Ok(())
        })
        .then("the tree holds both the fixture and the extra keys", |ctx| {
            let tree = assert_present(ctx.tree("tree"), "tree")?;
            assert_eq(tree.size(), SEARCH_SCENARIO.keys.len() + 2, "size")?;
            assert_true(tree.contains(&60), "contains 60")?;
            assert_true(tree.contains(&2234), "contains 2234")?;
            assert_valid(tree, "tree").map(|_| ())
        })
        .run_with(ctx)
        .expect("scenario should pass");
}

#[test]
fn unseeded_run_has_no_tree() {
    let err = Scenario::new("Reading a tree that was never seeded")
        .then("the tree is present", |ctx| {
            assert_present(ctx.tree("tree"), "tree").map(|_| ())
        })
        .run()
        .unwrap_err();
    assert!(err.contains("tree"));
}

#[test]
fn serializations_of_the_to_strings_fixture() {
    Scenario::new("Serializing a tree three ways")
        .given("the to-strings fixture", |ctx| {
            ctx.trees
                .insert("tree".into(), tree_of(TO_STRINGS_SCENARIO.keys));
        })
        .then("each order renders its expected string", |ctx| {
            let tree = assert_present(ctx.tree("tree"), "tree")?;
            assert_eq(tree.to_infix_string().as_str(), TO_STRINGS_SCENARIO.infix, "infix")?;
            assert_eq(tree.to_prefix_string().as_str(), TO_STRINGS_SCENARIO.prefix, "prefix")?;
            assert_eq(tree.to_postfix_string().as_str(), TO_STRINGS_SCENARIO.postfix, "postfix")
        })
        .run()
        .expect("scenario should pass");
}

#[test]
fn failing_step_reports_its_message() {
    let result = Scenario::new("A scenario that fails")
        .given("an empty tree", |ctx| {
            ctx.trees.insert("tree".into(), RedBlackTree::new());
        })
        .then("the tree holds a key", |ctx| {
            let tree = assert_present(ctx.tree("tree"), "tree")?;
            assert_true(tree.contains(&1), "tree contains 1")
        })
        .run();
    assert_eq!(
        result,
        Err("Expected tree contains 1 to be true, but was false".to_string())
    );
}
