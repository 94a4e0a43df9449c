//! This crate provides [`KeyedSet`](collections::keyed::KeyedSet), a hash set whose elements are
//! identified by a key derived from each element, rather than by the element itself.
//!
//! # Purpose
//! The standard library's sets require the element type to implement [`Hash`] and [`Eq`]. That's
//! awkward when elements carry payload fields which can't (or shouldn't) be compared, such as a
//! record identified by an `id` with some mutable state attached. A KeyedSet is handed a function
//! when it is created, which maps every element to its key, and all membership and set algebra is
//! driven by those keys alone.
//!
//! # Method
//! Internally, a KeyedSet is a thin layer over [`std::collections::HashMap`], mapping each key to
//! the most recently inserted element with that key. The only way to insert into the map goes
//! through the held key function, so every stored entry is keyed by `key_of(value)`.
//!
//! # Error Handling
//! All of the set operations are total: removing something that isn't there, intersecting with an
//! empty set or inserting a duplicate key all complete normally. The one exception is
//! [`try_add`](collections::keyed::KeyedSet::try_add), which refuses to overwrite and returns the
//! rejected element inside a strongly typed error.
//!
//! # Dependencies
//! Diagnostics are emitted through the [`log`] facade at trace level, so nothing is printed unless
//! the application installs a logger. `derive_more` is used to remove some repetitive trait
//! implementations.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
