//! Hash-based collection types. [`HashTable`] maps string keys to values through chained
//! buckets, choosing buckets with a pluggable [`KeyHasher`].
#![warn(missing_docs)]

pub mod table;

#[doc(inline)]
pub use table::{HashTable, KeyHasher, PositionalHash};
