#![cfg(feature = "keyed")]
//! Property-based tests for the set algebra of KeyedSet.
//!
//! Elements are `(id, payload)` pairs keyed by `id`, so that the tests can also check which side's
//! payload survives an operation.

use keyed_set::collections::keyed::{
    KeyFn, KeyedSet, difference, equal, intersect, is_disjoint, is_subset, is_superset, union,
};
use proptest::prelude::*;

type Element = (u8, u16);

fn by_id(element: &Element) -> u8 {
    element.0
}

fn element_set(elements: Vec<Element>) -> KeyedSet<u8, Element> {
    KeyedSet::from_elements(elements, by_id as KeyFn<_, _>)
}

fn elements() -> impl Strategy<Value = Vec<Element>> {
    prop::collection::vec((0_u8..32, any::<u16>()), 0..40)
}

// =============================================================================
// Self Union Law
// Description: s ∪ s has the same cardinality as s, and s equals its clone
// =============================================================================

proptest! {
    #[test]
    fn prop_self_union_law(elements in elements()) {
        let set = element_set(elements);
        let mut unioned = set.clone();
        unioned.union(set.clone());

        prop_assert_eq!(unioned.len(), set.len());
        prop_assert!(equal(&set, &set.clone()));
    }
}

// =============================================================================
// Union Cardinality Law
// Description: max(|a|, |b|) <= |a ∪ b| <= |a| + |b|
// =============================================================================

proptest! {
    #[test]
    fn prop_union_cardinality_law(elements_a in elements(), elements_b in elements()) {
        let set_a = element_set(elements_a);
        let set_b = element_set(elements_b);
        let len = union(&set_a, &set_b).len();

        prop_assert!(len >= set_a.len().max(set_b.len()));
        prop_assert!(len <= set_a.len() + set_b.len());
    }
}

// =============================================================================
// Union Overwrite Law
// Description: every element of b is kept as-is in a ∪ b, in-place or not
// =============================================================================

proptest! {
    #[test]
    fn prop_union_second_wins_law(elements_a in elements(), elements_b in elements()) {
        let set_a = element_set(elements_a);
        let set_b = element_set(elements_b);

        let pure = union(&set_a, &set_b);
        let mut in_place = set_a.clone();
        in_place.union(set_b.clone());

        for element in &set_b {
            prop_assert_eq!(pure.get_by_key(&element.0), Some(element));
            prop_assert_eq!(in_place.get_by_key(&element.0), Some(element));
        }
        prop_assert!(pure.equal(&in_place));
    }
}

// =============================================================================
// Intersection / Difference First-Wins Law
// Description: a ∩ b and a \ b only contain elements of a, unchanged
// =============================================================================

proptest! {
    #[test]
    fn prop_first_wins_law(elements_a in elements(), elements_b in elements()) {
        let set_a = element_set(elements_a);
        let set_b = element_set(elements_b);

        let intersection = intersect(&set_a, &set_b);
        let diff = difference(&set_a, &set_b);

        for element in intersection.iter().chain(diff.iter()) {
            prop_assert_eq!(set_a.get_by_key(&element.0), Some(element));
        }
        prop_assert!(intersection.iter().all(|e| set_b.contains_key(&e.0)));
        prop_assert!(diff.iter().all(|e| !set_b.contains_key(&e.0)));
        prop_assert_eq!(intersection.len() + diff.len(), set_a.len());

        let mut in_place = set_a.clone();
        in_place.intersect(&set_b);
        prop_assert_eq!(in_place, intersection);
    }
}

// =============================================================================
// Disjoint Law
// Description: a and b are disjoint exactly when a ∩ b is empty
// =============================================================================

proptest! {
    #[test]
    fn prop_disjoint_law(elements_a in elements(), elements_b in elements()) {
        let set_a = element_set(elements_a);
        let set_b = element_set(elements_b);

        prop_assert_eq!(is_disjoint(&set_a, &set_b), intersect(&set_a, &set_b).len() == 0);
        prop_assert_eq!(is_disjoint(&set_a, &set_b), is_disjoint(&set_b, &set_a));
    }
}

// =============================================================================
// Reflexivity Law
// Description: s ⊆ s and s ⊇ s
// =============================================================================

proptest! {
    #[test]
    fn prop_reflexivity_law(elements in elements()) {
        let set = element_set(elements);

        prop_assert!(is_subset(&set, &set));
        prop_assert!(is_superset(&set, &set));
    }
}

// =============================================================================
// Antisymmetry Law
// Description: a ⊆ b and b ⊆ a exactly when a = b
// =============================================================================

proptest! {
    #[test]
    fn prop_antisymmetry_law(elements_a in elements(), elements_b in elements()) {
        let set_a = element_set(elements_a);
        let set_b = element_set(elements_b);

        prop_assert_eq!(
            is_subset(&set_a, &set_b) && is_subset(&set_b, &set_a),
            equal(&set_a, &set_b)
        );
    }
}

// =============================================================================
// Subset Intersection Law
// Description: a ⊆ b exactly when |a ∩ b| = |a|
// =============================================================================

proptest! {
    #[test]
    fn prop_subset_intersection_law(elements_a in elements(), elements_b in elements()) {
        let set_a = element_set(elements_a);
        let set_b = element_set(elements_b);

        prop_assert_eq!(is_subset(&set_a, &set_b), intersect(&set_a, &set_b).len() == set_a.len());
    }
}

// =============================================================================
// Last Write Law
// Description: building a set keeps one element per key, the last one given
// =============================================================================

proptest! {
    #[test]
    fn prop_last_write_law(elements in elements()) {
        let set = element_set(elements.clone());

        let mut distinct = elements.iter().map(|e| e.0).collect::<Vec<_>>();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(set.len(), distinct.len());

        for id in distinct {
            let last = elements.iter().rev().find(|e| e.0 == id);
            prop_assert_eq!(set.get_by_key(&id), last);
        }
    }
}

#[test]
fn test_worked_example() {
    let s = element_set(vec![(1, 0), (2, 0), (3, 0)]);
    let s2 = element_set(vec![(3, 1), (4, 1)]);
    let s3 = element_set(vec![(2, 0), (3, 0)]);

    let mut ids = union(&s, &s2).keys().copied().collect::<Vec<_>>();
    ids.sort();
    assert_eq!(ids, [1, 2, 3, 4]);

    assert_eq!(intersect(&s, &s2).to_vec(), [(3, 0)]);

    let mut ids = difference(&s, &s2).keys().copied().collect::<Vec<_>>();
    ids.sort();
    assert_eq!(ids, [1, 2]);

    assert!(is_subset(&s3, &s));
    assert!(!is_subset(&s, &s3));
}
