use std::hash::{BuildHasher, Hash};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::{algebra, KeyedSet};

impl<K, T, F, B> BitOr for &KeyedSet<K, T, F, B>
where
    K: Hash + Eq + Clone,
    T: Clone,
    F: Fn(&T) -> K + Clone,
    B: BuildHasher + Clone,
{
    type Output = KeyedSet<K, T, F, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        algebra::union(self, rhs)
    }
}

impl<K, T, F, B> BitOrAssign for KeyedSet<K, T, F, B>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
    B: BuildHasher,
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.union(rhs)
    }
}

impl<K, T, F, B> BitAnd for &KeyedSet<K, T, F, B>
where
    K: Hash + Eq,
    T: Clone,
    F: Fn(&T) -> K + Clone,
    B: BuildHasher + Clone,
{
    type Output = KeyedSet<K, T, F, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        algebra::intersect(self, rhs)
    }
}

impl<K: Hash + Eq, T, F, B: BuildHasher> BitAndAssign<&KeyedSet<K, T, F, B>> for KeyedSet<K, T, F, B> {
    fn bitand_assign(&mut self, rhs: &KeyedSet<K, T, F, B>) {
        self.intersect(rhs)
    }
}

impl<K, T, F, B> BitXor for &KeyedSet<K, T, F, B>
where
    K: Hash + Eq,
    T: Clone,
    F: Fn(&T) -> K + Clone,
    B: BuildHasher + Clone,
{
    type Output = KeyedSet<K, T, F, B>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        algebra::symmetric_difference(self, rhs)
    }
}

impl<K, T, F, B> BitXorAssign for KeyedSet<K, T, F, B>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
    B: BuildHasher,
{
    fn bitxor_assign(&mut self, rhs: Self) {
        self.symmetric_difference(rhs)
    }
}

impl<K, T, F, B> Sub for &KeyedSet<K, T, F, B>
where
    K: Hash + Eq,
    T: Clone,
    F: Fn(&T) -> K + Clone,
    B: BuildHasher + Clone,
{
    type Output = KeyedSet<K, T, F, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        algebra::difference(self, rhs)
    }
}

impl<K: Hash + Eq, T, F, B: BuildHasher> SubAssign<&KeyedSet<K, T, F, B>> for KeyedSet<K, T, F, B> {
    fn sub_assign(&mut self, rhs: &KeyedSet<K, T, F, B>) {
        self.difference(rhs)
    }
}
