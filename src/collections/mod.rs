//! Collection types.
//!
//! # Purpose
//! At the moment this only holds [`KeyedSet`](keyed::KeyedSet) and the types that go along with
//! it, but it is laid out so that related collections (e.g. a keyed map or an ordered variant) can
//! sit next to it.

#[cfg(feature = "keyed")]
pub mod keyed;
