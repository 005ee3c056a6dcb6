use std::ptr::NonNull;

use super::Linkage;
use crate::util::alloc::{alloc_value, take_value};
use crate::util::error::AllocationFailed;

/// An optional link to another node.
pub type Link<T, K> = Option<NodePtr<T, K>>;

/// A single allocated element of a list, along with its links.
pub struct Node<T, K: Linkage> {
    pub(crate) value: T,
    pub(crate) next: Link<T, K>,
    pub(crate) prev: K::Prev<T>,
}

// NOTE: Lifetimes returned from NodePtr are unbounded. NodePtrs only exist inside of a list (or
// its iterators), which ties those lifetimes back to the list itself.

/// A pointer to an allocated node, owned by a single list.
pub struct NodePtr<T, K: Linkage>(NonNull<Node<T, K>>);

impl<T, K: Linkage> NodePtr<T, K> {
    /// Allocates a detached node holding `value`.
    pub(crate) fn try_new(value: T) -> Result<NodePtr<T, K>, AllocationFailed> {
        alloc_value(Node {
            value,
            next: None,
            prev: K::detached(),
        }).map(NodePtr)
    }

    /// Releases the node, returning its value. The node must already be unlinked from its list.
    pub(crate) fn into_value(self) -> T {
        // SAFETY: The node was allocated by try_new and, being unlinked, this is the last
        // pointer to it.
        unsafe { take_value(self.0) }.value
    }

    pub(crate) fn value<'a>(self) -> &'a T {
        // SAFETY: The node is live for as long as its list.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub(crate) fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: The node is live for as long as its list, which is mutably borrowed.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub(crate) fn next(self) -> Link<T, K> {
        // SAFETY: The node is live.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub(crate) fn set_next(self, next: Link<T, K>) {
        // SAFETY: The node is live and no references to its links are held.
        unsafe { (*self.0.as_ptr()).next = next; }
    }

    /// Returns the preceding node, which is always None for singly linked nodes.
    pub(crate) fn prev(self) -> Link<T, K> {
        // SAFETY: The node is live.
        K::prev(unsafe { self.0.as_ref() })
    }

    pub(crate) fn set_prev(self, prev: Link<T, K>) {
        // SAFETY: The node is live and no references to its links are held.
        K::set_prev(unsafe { &mut *self.0.as_ptr() }, prev)
    }

    /// Clears both links, ready for the node to be moved into another list.
    pub(crate) fn detach(self) {
        self.set_next(None);
        self.set_prev(None);
    }
}

impl<T, K: Linkage> Clone for NodePtr<T, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, K: Linkage> Copy for NodePtr<T, K> {}

impl<T, K: Linkage> PartialEq for NodePtr<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T, K: Linkage> Eq for NodePtr<T, K> {}
