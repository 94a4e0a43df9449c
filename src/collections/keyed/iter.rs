use std::collections::{HashMap, hash_map};
use std::hash::{BuildHasher, Hash};
use std::iter::{Chain, FusedIterator};

use super::KeyedSet;

impl<K, T, F, B> IntoIterator for KeyedSet<K, T, F, B> {
    type Item = T;

    type IntoIter = IntoIter<K, T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_values())
    }
}

pub struct IntoIter<K, T> (
    pub(crate) hash_map::IntoValues<K, T>,
);

impl<K, T> Iterator for IntoIter<K, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, T> ExactSizeIterator for IntoIter<K, T> {}

impl<K, T> FusedIterator for IntoIter<K, T> {}

impl<'a, K, T, F, B> IntoIterator for &'a KeyedSet<K, T, F, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, K, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.inner.values())
    }
}

pub struct Iter<'a, K, T> (
    pub(crate) hash_map::Values<'a, K, T>,
);

impl<'a, K, T> Iterator for Iter<'a, K, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, T> ExactSizeIterator for Iter<'_, K, T> {}

impl<K, T> FusedIterator for Iter<'_, K, T> {}

impl<K, T> Clone for Iter<'_, K, T> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

pub struct Keys<'a, K, T> (
    pub(crate) hash_map::Keys<'a, K, T>,
);

impl<'a, K, T> Iterator for Keys<'a, K, T> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, T> ExactSizeIterator for Keys<'_, K, T> {}

impl<K, T> FusedIterator for Keys<'_, K, T> {}

pub struct Difference<'a, K, T, C> {
    pub(crate) inner: hash_map::Iter<'a, K, T>,
    pub(crate) other: &'a HashMap<K, T, C>,
}

impl<'a, K: Hash + Eq, T, C: BuildHasher> Iterator for Difference<'a, K, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some((key, _)) = next
            && self.other.contains_key(key)
        {
            next = self.inner.next();
        }
        next.map(|(_, element)| element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<K: Hash + Eq, T, C: BuildHasher> FusedIterator for Difference<'_, K, T, C> {}

pub struct Intersection<'a, K, T, C> {
    pub(crate) inner: hash_map::Iter<'a, K, T>,
    pub(crate) other: &'a HashMap<K, T, C>,
}

impl<'a, K: Hash + Eq, T, C: BuildHasher> Iterator for Intersection<'a, K, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some((key, _)) = next
            && !self.other.contains_key(key)
        {
            next = self.inner.next();
        }
        next.map(|(_, element)| element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<K: Hash + Eq, T, C: BuildHasher> FusedIterator for Intersection<'_, K, T, C> {}

pub struct SymmetricDifference<'a, K, T, B, C> {
    pub(crate) inner: Chain<Difference<'a, K, T, C>, Difference<'a, K, T, B>>,
}

impl<'a, K: Hash + Eq, T, B: BuildHasher, C: BuildHasher> Iterator
    for SymmetricDifference<'a, K, T, B, C>
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: Hash + Eq, T, B: BuildHasher, C: BuildHasher> FusedIterator
    for SymmetricDifference<'_, K, T, B, C>
{
}
