//! Identity-keyed matching of entities across two snapshots.
//!
//! Entities are compared by [`Keyed::key`] only; any other difference
//! between two entities with the same key is an edit, not an add/delete.

use std::collections::HashSet;

use wfd_types::{Guid, Keyed};

/// Entities present on both sides, as two parallel sequences.
///
/// Both outputs are sorted by key ascending, and `old[i]` and `new[i]`
/// share a key for every `i`. Keys must be unique within each input.
pub fn find_edited_objects<'a, T: Keyed>(old: &'a [T], new: &'a [T]) -> (Vec<&'a T>, Vec<&'a T>) {
    let old_keys = keys(old);
    let new_keys = keys(new);

    let mut matched_old: Vec<&T> = old.iter().filter(|e| new_keys.contains(e.key())).collect();
    let mut matched_new: Vec<&T> = new.iter().filter(|e| old_keys.contains(e.key())).collect();
    matched_old.sort_by(|a, b| a.key().cmp(b.key()));
    matched_new.sort_by(|a, b| a.key().cmp(b.key()));

    (matched_old, matched_new)
}

/// [`find_edited_objects`] zipped into `(old, new)` pairs.
pub fn matched_pairs<'a, T: Keyed>(old: &'a [T], new: &'a [T]) -> Vec<(&'a T, &'a T)> {
    let (matched_old, matched_new) = find_edited_objects(old, new);
    matched_old.into_iter().zip(matched_new).collect()
}

/// Entities present on only one side.
#[derive(Debug)]
pub struct Presence<'a, T> {
    /// In `new` but not `old`, sorted by key.
    pub added: Vec<&'a T>,
    /// In `old` but not `new`, sorted by key.
    pub deleted: Vec<&'a T>,
}

impl<T> Presence<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.deleted.is_empty()
    }
}

/// Set difference by key in both directions.
pub fn presence<'a, T: Keyed>(old: &'a [T], new: &'a [T]) -> Presence<'a, T> {
    Presence {
        added: only_in(new, &keys(old)),
        deleted: only_in(old, &keys(new)),
    }
}

fn keys<T: Keyed>(items: &[T]) -> HashSet<&Guid> {
    items.iter().map(|e| e.key()).collect()
}

fn only_in<'a, T: Keyed>(items: &'a [T], other: &HashSet<&Guid>) -> Vec<&'a T> {
    let mut out: Vec<&T> = items.iter().filter(|e| !other.contains(e.key())).collect();
    out.sort_by(|a, b| a.key().cmp(b.key()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    #[derive(Debug, Clone)]
    struct Item {
        guid: Guid,
        payload: u8,
    }

    impl Keyed for Item {
        fn key(&self) -> &Guid {
            &self.guid
        }
    }

    fn item(guid: &str, payload: u8) -> Item {
        Item {
            guid: Guid::from(guid),
            payload,
        }
    }

    fn guids<T: Keyed>(items: &[&T]) -> Vec<String> {
        items.iter().map(|i| i.key().to_string()).collect()
    }

    #[test]
    fn matches_by_key_ignoring_payload() {
        let old = vec![item("b", 1), item("a", 1), item("x", 1)];
        let new = vec![item("a", 2), item("y", 2), item("b", 2)];

        let (mo, mn) = find_edited_objects(&old, &new);
        assert_eq!(guids(&mo), vec!["a", "b"]);
        assert_eq!(guids(&mn), vec!["a", "b"]);
        assert!(mo.iter().all(|i| i.payload == 1));
        assert!(mn.iter().all(|i| i.payload == 2));
    }

    #[test]
    fn disjoint_inputs_match_nothing() {
        let old = vec![item("a", 0)];
        let new = vec![item("b", 0)];
        assert!(matched_pairs(&old, &new).is_empty());
    }

    #[test]
    fn presence_splits_both_ways() {
        let old = vec![item("keep", 0), item("gone", 0)];
        let new = vec![item("keep", 0), item("fresh", 0), item("also", 0)];

        let p = presence(&old, &new);
        assert_eq!(guids(&p.added), vec!["also", "fresh"]);
        assert_eq!(guids(&p.deleted), vec!["gone"]);
        assert!(!p.is_empty());
        assert!(presence(&old, &old).is_empty());
    }

    fn items_from(set: &BTreeSet<u8>, payload: u8) -> Vec<Item> {
        set.iter().map(|g| item(&format!("g{g:03}"), payload)).collect()
    }

    proptest! {
        #[test]
        fn matched_set_is_key_intersection(
            a in proptest::collection::btree_set(0u8..40, 0..20),
            b in proptest::collection::btree_set(0u8..40, 0..20),
        ) {
            let old = items_from(&a, 0);
            let new = items_from(&b, 1);
            let (mo, mn) = find_edited_objects(&old, &new);

            prop_assert_eq!(mo.len(), mn.len());
            for (o, n) in mo.iter().zip(&mn) {
                prop_assert_eq!(o.key(), n.key());
            }
            let expected: Vec<String> = a.intersection(&b).map(|g| format!("g{g:03}")).collect();
            prop_assert_eq!(guids(&mo), expected);
        }

        #[test]
        fn presence_is_symmetric(
            a in proptest::collection::btree_set(0u8..40, 0..20),
            b in proptest::collection::btree_set(0u8..40, 0..20),
        ) {
            let left = items_from(&a, 0);
            let right = items_from(&b, 0);
            let forward = presence(&left, &right);
            let backward = presence(&right, &left);
            prop_assert_eq!(guids(&forward.added), guids(&backward.deleted));
            prop_assert_eq!(guids(&forward.deleted), guids(&backward.added));
        }
    }
}
