#![cfg(test)]

use std::collections::BTreeSet;

use proptest::prelude::*;

use super::*;

#[test]
fn test_insert_existing() {
    let mut set = TreeSet::from([5, 3, 8]);
    assert!(set.insert(4));
    assert!(
        !set.insert(5),
        "Inserting an existing element should report that nothing changed."
    );
    assert_eq!(set.len(), 4);
    assert_eq!(set.to_string(), "{3, 4, 5, 8}");
    assert_eq!(format!("{set:?}"), "{3, 4, 5, 8}");
}

#[test]
fn test_remove_and_lookup() {
    let mut set: TreeSet<String> = ["pear", "apple", "fig", "plum"]
        .into_iter()
        .map(String::from)
        .collect();

    assert!(set.contains("fig"));
    assert_eq!(set.get("plum").map(String::as_str), Some("plum"));
    assert!(set.remove("fig"));
    assert!(!set.remove("fig"));
    assert!(!set.contains("fig"));
    assert_eq!(set.take("pear"), Some(String::from("pear")));

    assert_eq!(set.first().map(String::as_str), Some("apple"));
    assert_eq!(set.last().map(String::as_str), Some("plum"));
    assert_eq!(set.into_iter().collect::<Vec<_>>(), ["apple", "plum"]);
}

#[test]
fn test_find_and_eq() {
    let set: TreeSet<_> = (1..=10).rev().collect();
    assert_eq!(set.find(&7).copied().collect::<Vec<_>>(), [7, 8, 9, 10]);
    assert_eq!(set.find(&11).count(), 0);

    let copy = set.clone();
    assert_eq!(copy, set);
    assert_ne!(copy, TreeSet::from([1, 2, 3]));
    assert!(TreeSet::<u8>::new().is_empty());
    assert_eq!(TreeSet::<u8>::new().to_string(), "{}");
}

proptest! {
    #[test]
    fn prop_agrees_with_btree_set(
        ops in proptest::collection::vec((any::<bool>(), 0..32u8), 0..200)
    ) {
        let mut set = TreeSet::new();
        let mut model = BTreeSet::new();

        for (insert, item) in ops {
            if insert {
                prop_assert_eq!(set.insert(item), model.insert(item));
            } else {
                prop_assert_eq!(set.remove(&item), model.remove(&item));
                prop_assert!(!set.contains(&item));
            }
        }

        prop_assert_eq!(set.len(), model.len());
        prop_assert!(set.iter().eq(model.iter()));
    }
}
