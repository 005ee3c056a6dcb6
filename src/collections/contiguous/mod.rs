//! Contiguous collection types. [`Array`] for heap arrays sized once at runtime and [`DynArray`]
//! for arrays that grow as elements are pushed.
#![warn(missing_docs)]

pub mod array;
pub mod dyn_array;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use dyn_array::{DynArray, Flat, Nested};
