use std::error::Error;
use std::fmt::Debug;

use derive_more::Display;

/// The error returned by [`KeyedSet::try_add`](super::KeyedSet::try_add) when the set already
/// holds an element with the same key. The rejected element is handed back, untouched.
#[derive(Debug, Display)]
#[display("An element with an equal key is already present in the KeyedSet!")]
pub struct Occupied<T> {
    pub element: T,
}

impl<T> Occupied<T> {
    /// Consumes the error, returning the element that couldn't be added.
    pub fn into_element(self) -> T {
        self.element
    }
}

impl<T: Debug> Error for Occupied<T> {}
