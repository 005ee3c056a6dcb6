use std::error;
use std::fmt::{self, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl error::Error for IndexOutOfBounds {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl fmt::Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl error::Error for CapacityOverflow {}

/// The global allocator returned null for a request of `size` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationFailed {
    pub size: usize,
}

impl fmt::Display for AllocationFailed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to allocate {} bytes!", self.size)
    }
}

impl error::Error for AllocationFailed {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection;

impl fmt::Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Attempted to remove an element from an empty collection!")
    }
}

impl error::Error for EmptyCollection {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNotFound;

impl fmt::Display for KeyNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No entry exists for the provided key!")
    }
}

impl error::Error for KeyNotFound {}

/// Any way that acquiring memory can fail: either the requested layout is too large to describe,
/// or the allocator couldn't satisfy it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum AllocError {
    CapacityOverflow(CapacityOverflow),
    AllocationFailed(AllocationFailed),
}

/// Every error produced by this crate's collections, for callers who would rather propagate a
/// single type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum CollectionError {
    AllocationFailed(AllocationFailed),
    CapacityOverflow(CapacityOverflow),
    EmptyCollection(EmptyCollection),
    IndexOutOfBounds(IndexOutOfBounds),
    KeyNotFound(KeyNotFound),
}

impl From<AllocError> for CollectionError {
    fn from(value: AllocError) -> Self {
        match value {
            AllocError::CapacityOverflow(err) => CollectionError::CapacityOverflow(err),
            AllocError::AllocationFailed(err) => CollectionError::AllocationFailed(err),
        }
    }
}
