//! Generic collection types which own their elements.
//!
//! # Method
//! Contiguous types implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves them from repeating slice functionality. Behaviour shared by every collection, such as
//! freeing elements through a disposer, lives in [`traits::OwnedCollection`].

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;
