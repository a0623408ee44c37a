//! BDD-style testing helpers for redblack.
//!
//! Given/When/Then scenarios carry named trees and key lists through a
//! shared context.

use redblack_tree::RedBlackTree;
use std::collections::HashMap;

/// A BDD scenario context that carries state through Given/When/Then steps.
#[derive(Debug, Default)]
pub struct ScenarioContext {
    /// Trees under test, by name
    pub trees: HashMap<String, RedBlackTree<i64>>,
    /// Key lists to insert or look up
    pub keys: HashMap<String, Vec<i64>>,
    /// Captured strings (serializations, error messages)
    pub strings: HashMap<String, String>,
    /// Numeric values (sizes, heights)
    pub numbers: HashMap<String, u64>,
    /// Boolean flags
    pub flags: HashMap<String, bool>,
}

impl ScenarioContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys(mut self, name: &str, keys: &[i64]) -> Self {
        self.keys.insert(name.to_string(), keys.to_vec());
        self
    }

    pub fn with_tree(mut self, name: &str, tree: RedBlackTree<i64>) -> Self {
        self.trees.insert(name.to_string(), tree);
        self
    }

    pub fn tree(&self, name: &str) -> Option<&RedBlackTree<i64>> {
        self.trees.get(name)
    }

    pub fn tree_mut(&mut self, name: &str) -> Option<&mut RedBlackTree<i64>> {
        self.trees.get_mut(name)
    }

    pub fn keys(&self, name: &str) -> Option<&[i64]> {
        self.keys.get(name).map(|keys| keys.as_slice())
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(|s| s.as_str())
    }

    pub fn number(&self, key: &str) -> Option<u64> {
        self.numbers.get(key).copied()
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.flags.get(key).copied()
    }
}

/// Step definition types for BDD scenarios
pub type GivenStep = fn(&mut ScenarioContext);
pub type WhenStep = fn(&mut ScenarioContext) -> Result<(), String>;
pub type ThenStep = fn(&ScenarioContext) -> Result<(), String>;

/// A BDD scenario with named steps
pub struct Scenario {
    pub name: String,
    pub given_steps: Vec<(&'static str, GivenStep)>,
    pub when_steps: Vec<(&'static str, WhenStep)>,
    pub then_steps: Vec<(&'static str, ThenStep)>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            given_steps: Vec::new(),
            when_steps: Vec::new(),
            then_steps: Vec::new(),
        }
    }

    pub fn given(mut self, description: &'static str, step: GivenStep) -> Self {
        self.given_steps.push((description, step));
        self
    }

    pub fn when(mut self, description: &'static str, step: WhenStep) -> Self {
        self.when_steps.push((description, step));
        self
    }

    pub fn then(mut self, description: &'static str, step: ThenStep) -> Self {
        self.then_steps.push((description, step));
        self
    }

    pub fn run(&self) -> Result<(), String> {
        self.run_with(ScenarioContext::new())
    }

    /// Runs the steps against a context seeded with `with_keys`/`with_tree`.
    pub fn run_with(&self, mut ctx: ScenarioContext) -> Result<(), String> {
        eprintln!("Scenario: {}", self.name);

        for (desc, step) in &self.given_steps {
            eprintln!("  Given: {}", desc);
            step(&mut ctx);
        }

        for (desc, step) in &self.when_steps {
            eprintln!("  When: {}", desc);
            step(&mut ctx)?;
        }

        for (desc, step) in &self.then_steps {
            eprintln!("  Then: {}", desc);
            step(&ctx)?;
        }

        Ok(())
    }
}

/// Assertion helpers for BDD scenarios
pub mod assertions {
    use redblack_tree::RedBlackTree;
    use std::fmt::Debug;

    pub fn assert_present<T: Debug>(option: Option<T>, name: &str) -> Result<T, String> {
        option.ok_or_else(|| format!("Expected {} to be present, but was None", name))
    }

    pub fn assert_eq<T: Debug + PartialEq>(
        actual: T,
        expected: T,
        name: &str,
    ) -> Result<(), String> {
        if actual != expected {
            Err(format!(
                "Expected {} to be {:?}, but was {:?}",
                name, expected, actual
            ))
        } else {
            Ok(())
        }
    }

    pub fn assert_true(flag: bool, name: &str) -> Result<(), String> {
        if !flag {
            Err(format!("Expected {} to be true, but was false", name))
        } else {
            Ok(())
        }
    }

    pub fn assert_false(flag: bool, name: &str) -> Result<(), String> {
        if flag {
            Err(format!("Expected {} to be false, but was true", name))
        } else {
            Ok(())
        }
    }

    /// The tree passes every invariant check; returns its black height.
    pub fn assert_valid(tree: &RedBlackTree<i64>, name: &str) -> Result<usize, String> {
        tree.validate()
            .map_err(|err| format!("Expected {} to be a valid tree, but: {}", name, err))
    }
}
