//! Traits shared by the collections in this crate.

mod owned;

pub use owned::*;
