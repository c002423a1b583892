use super::invariants::{check_invariants, height_bound};
use crate::{NaturalOrder, RBTree, Visit};
use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
enum Action {
    Insert(i16),
    Contains(i16),
    Clear,
}

impl Arbitrary for Action {
    fn arbitrary(g: &mut Gen) -> Self {
        // Small keys, so that duplicates and hits are frequent
        let key = i16::arbitrary(g) % 200;
        match u8::arbitrary(g) % 16 {
            0 => Action::Clear,
            1..=5 => Action::Contains(key),
            _ => Action::Insert(key),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match *self {
            Action::Insert(key) => Box::new(key.shrink().map(Action::Insert)),
            Action::Contains(key) => Box::new(key.shrink().map(Action::Contains)),
            Action::Clear => Box::new(std::iter::empty()),
        }
    }
}

#[test]
fn behaves_like_a_set() {
    fn property(actions: Vec<Action>) -> TestResult {
        let mut tree = RBTree::new();
        let mut reference = BTreeSet::new();

        for (i, action) in actions.iter().enumerate() {
            match *action {
                Action::Insert(key) => {
                    let inserted = tree.insert(key).is_ok();
                    if inserted != reference.insert(key) {
                        return TestResult::error(format!(
                            "step {}: insert({}) returned {}",
                            i, key, inserted
                        ));
                    }
                    check_invariants(&tree, &NaturalOrder);
                }
                Action::Contains(key) => {
                    if tree.contains(&key) != reference.contains(&key) {
                        return TestResult::error(format!("step {}: contains({}) mismatch", i, key));
                    }
                }
                Action::Clear => {
                    tree.clear();
                    reference.clear();
                }
            }
            if tree.len() != reference.len() {
                return TestResult::error(format!("step {}: size mismatch", i));
            }
        }

        TestResult::from_bool(tree.iter().eq(reference.iter()))
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(property as fn(Vec<Action>) -> TestResult);
}

quickcheck::quickcheck! {
    fn inserted_keys_are_found(keys: Vec<u32>) -> bool {
        let mut tree = RBTree::new();
        for &key in &keys {
            let _ = tree.insert(key);
        }
        keys.iter().all(|key| tree.contains(key))
    }

    fn traversal_is_sorted(keys: Vec<i64>) -> bool {
        let tree: RBTree<i64> = keys.iter().cloned().collect();
        let mut expected = keys;
        expected.sort();
        expected.dedup();

        let mut visited = Vec::new();
        let _ = tree.for_each(|&key| {
            visited.push(key);
            Visit::Continue
        });
        visited == expected
    }

    fn height_is_logarithmic(keys: Vec<u16>) -> bool {
        let tree: RBTree<u16> = keys.into_iter().collect();
        check_invariants(&tree, &NaturalOrder);
        tree.height() <= height_bound(tree.len())
    }
}
