//! A module containing [`DynArray`] and associated types.
//!
//! Owned iteration over a DynArray uses [`IntoIter`], a re-export of
//! [`array::IntoIter`](super::array::IntoIter). [`IterMut`](std::slice::IterMut) and
//! [`Iter`](std::slice::Iter) from [`std::slice`] are used for borrowed iteration.
//!
//! [`Flat`] and [`Nested`] describe the depth of nested DynArrays for
//! [`DynArray::free_nested`].
//!
//! [`DynArray`] is also re-exported under the parent module.

mod dyn_array;
mod nested;

pub use dyn_array::*;
pub use nested::*;
pub use super::array::IntoIter;
