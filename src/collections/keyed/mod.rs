//! A module containing [`KeyedSet`] and associated types.
//!
//! Apart from the set itself, there are types for owned and borrowed iteration over a set's
//! elements, lazy iterators over the result of set operations on two KeyedSets and free functions
//! which compute set operations without modifying either operand.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating an element
//! in place could change its key, which would cause a logic error.

mod algebra;
mod error;
mod iter;
mod keyed_set;
#[cfg(feature = "ops")]
mod ops;

pub use algebra::*;
pub use error::*;
pub use iter::*;
pub use keyed_set::*;
