//! A small toolkit of generic containers: a growable array, a singly or doubly linked list and a
//! chained hash table keyed by strings.
//!
//! # Containers
//! - [`DynArray`](collections::contiguous::DynArray): a contiguous array which doubles its
//!   capacity whenever it runs out of room.
//! - [`LinkedList`](collections::linked::LinkedList): a list of individually allocated nodes,
//!   linked either [`Singly`](collections::linked::Singly) or
//!   [`Doubly`](collections::linked::Doubly). The kind of a list is part of its type.
//! - [`HashTable`](collections::hash::HashTable): a map from string keys to values, made of
//!   singly linked buckets that are doubled in number before the ratio of used buckets reaches
//!   1/2.
//!
//! Every container owns its elements. Elements are dropped along with their container, unless
//! they are handed to a disposer through
//! [`OwnedCollection::free_with`](collections::traits::OwnedCollection::free_with). Copies made
//! with [`CopyCollection::copy_with`](collections::traits::CopyCollection::copy_with) are always
//! built from a copy function rather than sharing elements.
//!
//! # Error Handling
//! Methods that allocate come in pairs: a `try_` method that returns a [`Result`] and a method
//! without the prefix which panics with the error's message instead. Methods that can fail for
//! reasons other than allocation always return a [`Result`], with errors that are small structs
//! implementing [`Error`](std::error::Error). The enums in [`error`] combine them for callers who
//! would rather propagate a single type.
//!
//! # Features
//! Each collection module sits behind a feature of the same name: `contiguous`, `linked` and
//! `hash`, which depends on the other two. All of them are enabled by default through
//! `collections-all`.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;

pub use util::error;
