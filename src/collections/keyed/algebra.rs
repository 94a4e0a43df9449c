//! Set operations which leave both operands untouched and return a new [`KeyedSet`].
//!
//! The result always uses the key function and hasher of `first`.

use std::hash::{BuildHasher, Hash};

use super::KeyedSet;

/// Returns a new set with every element of `first` and `second`. When both contain an element with
/// the same key, the one from `second` is kept. (`first ∪ second`)
pub fn union<K, T, F, B, G, C>(
    first: &KeyedSet<K, T, F, B>,
    second: &KeyedSet<K, T, G, C>,
) -> KeyedSet<K, T, F, B>
where
    K: Hash + Eq + Clone,
    T: Clone,
    F: Fn(&T) -> K + Clone,
    B: BuildHasher + Clone,
{
    let mut union = first.clone();
    union.reserve(second.len());
    union.extend(second.iter().cloned());
    union
}

/// Returns a new set with the elements of `first` whose key is also in `second`. (`first ∩
/// second`)
pub fn intersect<K, T, F, B, G, C>(
    first: &KeyedSet<K, T, F, B>,
    second: &KeyedSet<K, T, G, C>,
) -> KeyedSet<K, T, F, B>
where
    K: Hash + Eq,
    T: Clone,
    F: Fn(&T) -> K + Clone,
    B: BuildHasher + Clone,
    C: BuildHasher,
{
    let mut intersection = first.empty_like(first.len().min(second.len()));
    intersection.extend(first.iter_intersection(second).cloned());
    intersection
}

/// Returns a new set with the elements of `first` whose key isn't in `second`. (`first \ second`)
pub fn difference<K, T, F, B, G, C>(
    first: &KeyedSet<K, T, F, B>,
    second: &KeyedSet<K, T, G, C>,
) -> KeyedSet<K, T, F, B>
where
    K: Hash + Eq,
    T: Clone,
    F: Fn(&T) -> K + Clone,
    B: BuildHasher + Clone,
    C: BuildHasher,
{
    let mut difference = first.empty_like(first.len());
    difference.extend(first.iter_difference(second).cloned());
    difference
}

/// Returns a new set with the elements whose key is in exactly one of `first` and `second`.
/// (`first △ second`)
pub fn symmetric_difference<K, T, F, B, G, C>(
    first: &KeyedSet<K, T, F, B>,
    second: &KeyedSet<K, T, G, C>,
) -> KeyedSet<K, T, F, B>
where
    K: Hash + Eq,
    T: Clone,
    F: Fn(&T) -> K + Clone,
    B: BuildHasher + Clone,
    C: BuildHasher,
{
    let mut symmetric_difference = first.empty_like(first.len() + second.len());
    symmetric_difference.extend(first.iter_symmetric_difference(second).cloned());
    symmetric_difference
}

/// Returns true if every key in `first` is also in `second`.
pub fn is_subset<K, T, F, B, G, C>(first: &KeyedSet<K, T, F, B>, second: &KeyedSet<K, T, G, C>) -> bool
where
    K: Hash + Eq,
    B: BuildHasher,
    C: BuildHasher,
{
    first.is_subset(second)
}

/// Returns true if every key in `second` is also in `first`.
pub fn is_superset<K, T, F, B, G, C>(first: &KeyedSet<K, T, F, B>, second: &KeyedSet<K, T, G, C>) -> bool
where
    K: Hash + Eq,
    B: BuildHasher,
    C: BuildHasher,
{
    first.is_superset(second)
}

/// Returns true if `first` and `second` have no keys in common.
pub fn is_disjoint<K, T, F, B, G, C>(first: &KeyedSet<K, T, F, B>, second: &KeyedSet<K, T, G, C>) -> bool
where
    K: Hash + Eq,
    B: BuildHasher,
    C: BuildHasher,
{
    first.is_disjoint(second)
}

/// Returns true if `first` and `second` contain exactly the same keys.
pub fn equal<K, T, F, B, G, C>(first: &KeyedSet<K, T, F, B>, second: &KeyedSet<K, T, G, C>) -> bool
where
    K: Hash + Eq,
    B: BuildHasher,
    C: BuildHasher,
{
    first.equal(second)
}
