//! The [`HashTable`] type, its [`KeyHasher`]s and its iterators.

mod hash_table;
mod hasher;
mod iter;
mod tests;

pub use hash_table::*;
pub use hasher::*;
pub use iter::*;
