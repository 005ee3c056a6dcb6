//! Linked collection types. [`LinkedList`] stores each element in its own node, linked either
//! singly or doubly depending on its [`Linkage`].
#![warn(missing_docs)]

pub mod list;

#[doc(inline)]
pub use list::{Doubly, LinkedList, Linkage, ListKind, Singly};
