use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use log::trace;

use super::{Difference, Intersection, Iter, Keys, Occupied, SymmetricDifference};
use crate::util::fmt::DebugRaw;

/// The default type of a KeyedSet's key function, a plain function pointer. Non-capturing closures
/// coerce to this type, which lets sets built from different closures share one type.
pub type KeyFn<T, K> = fn(&T) -> K;

/// A [`KeyedSet`] where each element is its own key.
pub type IdentitySet<T, B = RandomState> = KeyedSet<T, T, KeyFn<T, T>, B>;

/// The key function of an [`IdentitySet`], returning a copy of the element.
pub fn identity<T: Clone>(item: &T) -> T {
    item.clone()
}

/// A set of elements which are deduplicated by a key, derived from each element by a function
/// provided on creation.
///
/// Two elements with equal keys are considered to be the same element, even if their other fields
/// differ. Values are carried along by every operation, but never compared. Because of this:
/// - Inserting an element whose key is already present silently replaces the stored element.
/// - [`union`](KeyedSet::union) keeps the elements of `other` when keys collide.
/// - [`intersect`](KeyedSet::intersect) and [`difference`](KeyedSet::difference) keep the
///   elements of `self`.
///
/// It is a logic error for the key function to be non-deterministic, or for an element to be
/// modified in a way that changes its key while it is in the set. This isn't detected.
///
/// KeyedSet has no internal synchronization. Sharing one between threads requires the caller to
/// wrap it, in a [`Mutex`](std::sync::Mutex) for example.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the KeyedSet.
/// - `m`: The number of elements in the other KeyedSet.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `has` | `O(1)`* |
/// | `add` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `union` | `O(m)`* |
/// | `intersect` | `O(n)`* |
/// | `difference` | `O(n)`* |
/// | `is_subset` | `O(n)`* |
/// | `is_disjoint` | `O(min(n, m))`* |
///
/// \* Expected, depending on the quality of the hasher `B`.
#[derive(Clone)]
pub struct KeyedSet<K, T, F = KeyFn<T, K>, B = RandomState> {
    pub(crate) inner: HashMap<K, T, B>,
    pub(crate) key_of: F,
}

impl<K, T, F> KeyedSet<K, T, F, RandomState>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    /// Creates a new, empty KeyedSet which derives keys using `key_of`.
    pub fn new(key_of: F) -> KeyedSet<K, T, F> {
        KeyedSet::with_hasher(key_of, RandomState::new())
    }

    /// Creates a new, empty KeyedSet with space for at least `cap` elements before reallocating.
    pub fn with_cap(cap: usize, key_of: F) -> KeyedSet<K, T, F> {
        KeyedSet::with_cap_and_hasher(cap, key_of, RandomState::new())
    }

    /// Creates a KeyedSet containing `elements`, inserted in order. When elements share a key, the
    /// last one is kept.
    pub fn from_elements<I: IntoIterator<Item = T>>(elements: I, key_of: F) -> KeyedSet<K, T, F> {
        let iter = elements.into_iter();
        let mut set = KeyedSet::with_cap(iter.size_hint().0, key_of);
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq + Clone> KeyedSet<T, T, KeyFn<T, T>, RandomState> {
    /// Creates a new, empty [`IdentitySet`], where each element is its own key.
    pub fn identity() -> IdentitySet<T> {
        Self::new(identity::<T>)
    }
}

impl<K, T, F, B> KeyedSet<K, T, F, B> {
    /// Returns the number of elements (distinct keys) in the KeyedSet.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the KeyedSet contains no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the KeyedSet can hold without reallocating.
    pub fn cap(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the KeyedSet's hasher builder.
    pub fn hasher(&self) -> &B {
        self.inner.hasher()
    }

    /// Returns an iterator over all elements in the KeyedSet, as references. The order is
    /// unspecified and may differ between calls.
    pub fn iter(&self) -> Iter<'_, K, T> {
        self.into_iter()
    }

    /// Returns an iterator over the keys of all elements in the KeyedSet.
    pub fn keys(&self) -> Keys<'_, K, T> {
        Keys(self.inner.keys())
    }

    /// Copies all elements into a [`Vec`], in an unspecified order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Removes all elements, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Keeps only the elements for which `predicate` returns true.
    pub fn retain<P: FnMut(&T) -> bool>(&mut self, mut predicate: P) {
        self.inner.retain(|_, element| predicate(element))
    }
}

impl<K: Hash + Eq, T, F, B: BuildHasher> KeyedSet<K, T, F, B> {
    /// Returns true if there is an element associated with the provided `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        // Q is a borrowed form of K, where hashing and equality carry over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(key)
    }

    /// Returns the element associated with `key`, if there is one.
    pub fn get_by_key<Q>(&self, key: &Q) -> Option<&T>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key)
    }

    /// Removes the element associated with `key`, returning it if it exists.
    pub fn remove_by_key<Q>(&mut self, key: &Q) -> Option<T>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(key)
    }

    /// Increases the capacity of the KeyedSet so that `extra` more elements fit without
    /// reallocating.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Keeps only the elements of `self` whose key is also in `other`. Elements of `self` are kept
    /// as they are, not replaced by those in `other`. (`self ∩ other`)
    pub fn intersect<G, C: BuildHasher>(&mut self, other: &KeyedSet<K, T, G, C>) {
        let before = self.len();
        self.inner.retain(|key, _| other.inner.contains_key(key));
        trace!("intersect dropped {} of {} elements", before - self.len(), before);
    }

    /// Removes all elements of `self` whose key is in `other`. (`self \ other`)
    pub fn difference<G, C: BuildHasher>(&mut self, other: &KeyedSet<K, T, G, C>) {
        let before = self.len();
        self.inner.retain(|key, _| !other.inner.contains_key(key));
        trace!("difference dropped {} of {} elements", before - self.len(), before);
    }

    /// Returns true if every key in `self` is also in `other`. (`self ⊆ other`)
    pub fn is_subset<G, C: BuildHasher>(&self, other: &KeyedSet<K, T, G, C>) -> bool {
        self.len() <= other.len() && self.inner.keys().all(|key| other.inner.contains_key(key))
    }

    /// Returns true if every key in `other` is also in `self`. (`self ⊇ other`)
    pub fn is_superset<G, C: BuildHasher>(&self, other: &KeyedSet<K, T, G, C>) -> bool {
        other.is_subset(self)
    }

    /// Returns true if `self` and `other` have no keys in common. (`self ∩ other = ∅`)
    pub fn is_disjoint<G, C: BuildHasher>(&self, other: &KeyedSet<K, T, G, C>) -> bool {
        // Only the smaller set needs to be walked.
        if self.len() <= other.len() {
            self.inner.keys().all(|key| !other.inner.contains_key(key))
        } else {
            other.inner.keys().all(|key| !self.inner.contains_key(key))
        }
    }

    /// Returns true if `self` and `other` contain exactly the same keys. The elements stored under
    /// those keys aren't compared.
    pub fn equal<G, C: BuildHasher>(&self, other: &KeyedSet<K, T, G, C>) -> bool {
        self.len() == other.len() && self.inner.keys().all(|key| other.inner.contains_key(key))
    }

    /// Creates a borrowed iterator over all elements in `self` whose key isn't in `other`.
    /// (`self \ other`)
    pub fn iter_difference<'a, G, C: BuildHasher>(
        &'a self,
        other: &'a KeyedSet<K, T, G, C>,
    ) -> Difference<'a, K, T, C> {
        Difference {
            inner: self.inner.iter(),
            other: &other.inner,
        }
    }

    /// Creates a borrowed iterator over all elements in `self` whose key is also in `other`. The
    /// items are taken from `self`. (`self ∩ other`)
    pub fn iter_intersection<'a, G, C: BuildHasher>(
        &'a self,
        other: &'a KeyedSet<K, T, G, C>,
    ) -> Intersection<'a, K, T, C> {
        Intersection {
            inner: self.inner.iter(),
            other: &other.inner,
        }
    }

    /// Creates a borrowed iterator over all elements whose key is in exactly one of `self` and
    /// `other`. (`self △ other`)
    pub fn iter_symmetric_difference<'a, G, C: BuildHasher>(
        &'a self,
        other: &'a KeyedSet<K, T, G, C>,
    ) -> SymmetricDifference<'a, K, T, B, C> {
        SymmetricDifference {
            inner: self.iter_difference(other).chain(other.iter_difference(self)),
        }
    }
}

impl<K, T, F, B> KeyedSet<K, T, F, B>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
    B: BuildHasher,
{
    /// Creates a new, empty KeyedSet which derives keys using `key_of` and hashes them with
    /// `hasher`.
    pub fn with_hasher(key_of: F, hasher: B) -> KeyedSet<K, T, F, B> {
        KeyedSet {
            inner: HashMap::with_hasher(hasher),
            key_of,
        }
    }

    /// Creates a new, empty KeyedSet with the provided `cap`acity, `key_of` function and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, key_of: F, hasher: B) -> KeyedSet<K, T, F, B> {
        KeyedSet {
            inner: HashMap::with_capacity_and_hasher(cap, hasher),
            key_of,
        }
    }

    /// Derives the key of `element` using the KeyedSet's key function.
    pub fn key_of(&self, element: &T) -> K {
        (self.key_of)(element)
    }

    /// Returns true if the KeyedSet contains an element with the same key as `element`. The stored
    /// element doesn't need to be equal to `element` otherwise.
    pub fn has(&self, element: &T) -> bool {
        self.inner.contains_key(&self.key_of(element))
    }

    /// Returns the stored element with the same key as `element`, if there is one.
    pub fn get(&self, element: &T) -> Option<&T> {
        self.inner.get(&self.key_of(element))
    }

    /// Adds `element` to the KeyedSet. If an element with the same key was already present, it is
    /// replaced and returned.
    pub fn add(&mut self, element: T) -> Option<T> {
        let key = self.key_of(&element);
        let replaced = self.inner.insert(key, element);
        if replaced.is_some() {
            trace!("add replaced an element with an equal key");
        }
        replaced
    }

    /// Adds `element` to the KeyedSet, unless an element with the same key is already present. In
    /// that case, the set is left unchanged and `element` is returned inside the error.
    pub fn try_add(&mut self, element: T) -> Result<(), Occupied<T>> {
        let key = self.key_of(&element);
        match self.inner.entry(key) {
            Entry::Occupied(_) => {
                trace!("try_add rejected an element with an equal key");
                Err(Occupied { element })
            },
            Entry::Vacant(entry) => {
                entry.insert(element);
                Ok(())
            },
        }
    }

    /// Removes the element with the same key as `element`, returning the stored element if it
    /// exists. Removing an element which isn't present does nothing.
    pub fn remove(&mut self, element: &T) -> Option<T> {
        let key = self.key_of(element);
        self.inner.remove(&key)
    }

    /// Adds every element of `other` to `self`. When both contain an element with the same key,
    /// the one from `other` is kept. (`self ∪ other`)
    ///
    /// Keys are derived again using the key function of `self`.
    pub fn union<G, C>(&mut self, other: KeyedSet<K, T, G, C>) {
        self.reserve(other.len());
        for element in other.inner.into_values() {
            self.add(element);
        }
    }

    /// Replaces `self` with the elements whose key is in exactly one of `self` and `other`.
    /// (`self △ other`)
    pub fn symmetric_difference<G, C>(&mut self, other: KeyedSet<K, T, G, C>) {
        for element in other.inner.into_values() {
            let key = self.key_of(&element);
            if self.inner.remove(&key).is_none() {
                self.inner.insert(key, element);
            }
        }
    }

    /// Creates a new, empty KeyedSet which shares the key function and hasher of `self`.
    pub(crate) fn empty_like(&self, cap: usize) -> KeyedSet<K, T, F, B>
    where
        F: Clone,
        B: Clone,
    {
        KeyedSet::with_cap_and_hasher(cap, self.key_of.clone(), self.inner.hasher().clone())
    }
}

impl<K, T, F, B> Extend<T> for KeyedSet<K, T, F, B>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
    B: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for KeyedSet<T, T, KeyFn<T, T>, RandomState> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter, identity::<T>)
    }
}

impl<K: Hash + Eq, T, F, B: BuildHasher> PartialEq for KeyedSet<K, T, F, B> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<K: Hash + Eq, T, F, B: BuildHasher> Eq for KeyedSet<K, T, F, B> {}

impl<K, T: Debug, F, B> Debug for KeyedSet<K, T, F, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedSet")
            .field("contents", &DebugRaw(format!(
                "#{{{}}}",
                self.iter()
                    .map(|i| format!("{i:?}"))
                    .collect::<Vec<String>>()
                    .join(", ")
            )))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<K, T: Display, F, B> Display for KeyedSet<K, T, F, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "#{{{}}}",
            self.iter()
                .map(|i| format!("{i}"))
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
