use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::{Doubly, Iter, IterMut, Link, Linkage, ListKind, ListState, NodePtr};
use crate::collections::traits::{CopyCollection, OwnedCollection};
use crate::util::error::{AllocationFailed, EmptyCollection};
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

/// A list of owned elements stored in individually allocated nodes. The way that nodes are linked
/// is chosen by `K` when the list is created: [`Doubly`] (the default) or
/// [`Singly`](super::Singly).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
///
/// | Method | Singly | Doubly |
/// |-|-|-|
/// | `len` | `O(1)` | `O(1)` |
/// | `front/back` | `O(1)` | `O(1)` |
/// | `push_front/back` | `O(1)` | `O(1)` |
/// | `pop_front` | `O(1)` | `O(1)` |
/// | `pop_back` | `O(n)` | `O(1)` |
/// | `contains` | `O(n)` | `O(n)` |
/// | `copy_with` | `O(n)` | `O(n)` |
///
/// As a general note, modern computer architecture isn't kind to linked lists, because every
/// `O(n)` operation consists primarily of cache misses. A
/// [`DynArray`](crate::collections::contiguous::DynArray) should be preferred unless elements are
/// regularly added or removed at the front.
pub struct LinkedList<T, K: Linkage = Doubly> {
    pub(crate) state: ListState<T, K>,
    pub(crate) _phantom: PhantomData<T>,
}

use ListState::*;

impl<T, K: Linkage> LinkedList<T, K> {
    /// Creates a new LinkedList with no elements.
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::linked::{LinkedList, ListKind, Singly};
    /// let list: LinkedList<u8, Singly> = LinkedList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.kind(), ListKind::Singly);
    /// ```
    pub const fn new() -> LinkedList<T, K> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the kind of links used by this LinkedList.
    pub const fn kind(&self) -> ListKind {
        K::KIND
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.state.head().map(NodePtr::value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.state.head().map(NodePtr::value_mut)
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.state.tail().map(NodePtr::value)
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.state.tail().map(NodePtr::value_mut)
    }

    /// Adds the provided element to the front of the LinkedList.
    ///
    /// # Panics
    /// Panics if the node can't be allocated, see [`LinkedList::try_push_front`].
    pub fn push_front(&mut self, value: T) {
        self.try_push_front(value).throw()
    }

    /// Adds the provided element to the front of the LinkedList.
    ///
    /// # Errors
    /// If the node can't be allocated, an error is returned, `value` is dropped and the list is
    /// left unchanged.
    pub fn try_push_front(&mut self, value: T) -> Result<(), AllocationFailed> {
        self.push_front_node(NodePtr::try_new(value)?);
        Ok(())
    }

    /// Adds the provided element to the back of the LinkedList.
    ///
    /// # Panics
    /// Panics if the node can't be allocated, see [`LinkedList::try_push_back`].
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = LinkedList::new();
    /// list.push_back(2);
    /// list.push_back(3);
    /// list.push_front(1);
    /// assert_eq!(list.to_string(), "(1) -> (2) -> (3)");
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.try_push_back(value).throw()
    }

    /// Adds the provided element to the back of the LinkedList.
    ///
    /// # Errors
    /// If the node can't be allocated, an error is returned, `value` is dropped and the list is
    /// left unchanged.
    pub fn try_push_back(&mut self, value: T) -> Result<(), AllocationFailed> {
        self.push_back_node(NodePtr::try_new(value)?);
        Ok(())
    }

    /// Removes the first element from the list and returns it.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list has no elements.
    pub fn pop_front(&mut self) -> Result<T, EmptyCollection> {
        self.pop_front_node().map(NodePtr::into_value).ok_or(EmptyCollection)
    }

    /// Removes the last element from the list and returns it. A singly linked list has to walk to
    /// its second last node to do so.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list has no elements.
    pub fn pop_back(&mut self) -> Result<T, EmptyCollection> {
        self.state.unlink_back().map(NodePtr::into_value).ok_or(EmptyCollection)
    }

    /// Returns an iterator over references to the elements, from front to back.
    pub fn iter(&self) -> Iter<'_, T, K> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to the elements, from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T, K> {
        self.into_iter()
    }

    /// Returns the first element matching `pred`.
    pub(crate) fn find<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Option<&T> {
        self.iter().find(|value| pred(*value))
    }

    /// Returns the first element matching `pred`, mutably.
    pub(crate) fn find_mut<P: FnMut(&T) -> bool>(&mut self, mut pred: P) -> Option<&mut T> {
        self.iter_mut().find(|value| pred(&**value))
    }

    /// Unlinks the first element matching `pred` and returns it.
    pub(crate) fn remove_first<P: FnMut(&T) -> bool>(&mut self, mut pred: P) -> Option<T> {
        let mut prev = None;
        let mut curr = self.state.head();

        while let Some(node) = curr {
            if pred(node.value()) {
                self.state.unlink(prev, node);
                return Some(node.into_value());
            }
            prev = Some(node);
            curr = node.next();
        }

        None
    }

    /// Links an existing node in at the front of the list.
    pub(crate) fn push_front_node(&mut self, node: NodePtr<T, K>) {
        self.state.link_front(node);
    }

    /// Links an existing node in at the back of the list.
    pub(crate) fn push_back_node(&mut self, node: NodePtr<T, K>) {
        self.state.link_back(node);
    }

    /// Unlinks the first node without releasing it, so that it can be moved to another list.
    pub(crate) fn pop_front_node(&mut self) -> Link<T, K> {
        self.state.unlink_front()
    }

    /// Checks that the links of the list agree with its length and ends.
    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_links(&self) {
        let Full(contents) = self.state else {
            return;
        };

        let mut curr = contents.head;
        let mut count = 1;
        assert!(curr.prev().is_none(), "The head shouldn't have a previous node.");

        while let Some(next) = curr.next() {
            if K::KIND.is_doubly() {
                // UNWRAP: This needs to panic if prev is None.
                assert!(next.prev().unwrap() == curr);
            }
            curr = next;
            count += 1;
        }

        assert!(curr == contents.tail, "The last node should be the tail.");
        assert_eq!(count, contents.len.get());
    }
}

impl<T: PartialEq, K: Linkage> LinkedList<T, K> {
    /// Returns true if the list contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|value| value == item)
    }
}

impl<T, K: Linkage> OwnedCollection for LinkedList<T, K> {
    type Element = T;

    fn len(&self) -> usize {
        self.state.len()
    }

    /// Passes every element to `disposer`, from the front of the list to the back, releasing
    /// each node as it goes.
    fn drain_with<D: FnMut(T)>(&mut self, mut disposer: D) {
        while let Some(node) = self.pop_front_node() {
            disposer(node.into_value());
        }
    }
}

impl<T, K: Linkage> CopyCollection for LinkedList<T, K> {
    type CopyError = AllocationFailed;

    /// Creates a list of the same kind, containing a copy of each element in the same order.
    fn copy_with<C: FnMut(&T) -> T>(&self, mut copier: C) -> Result<Self, AllocationFailed> {
        let mut copy = LinkedList::new();

        for value in self.iter() {
            copy.try_push_back(copier(value))?;
        }

        Ok(copy)
    }
}

impl<T, K: Linkage> Extend<T> for LinkedList<T, K> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T, K: Linkage> FromIterator<T> for LinkedList<T, K> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T, K: Linkage> Default for LinkedList<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Linkage> Drop for LinkedList<T, K> {
    fn drop(&mut self) {
        self.clear();
    }
}

// SAFETY: LinkedLists own their nodes, which are only reachable through the list.
unsafe impl<T: Send, K: Linkage> Send for LinkedList<T, K> {}
// SAFETY: LinkedList's safe API obeys the borrow checker, so no interior mutability occurs.
unsafe impl<T: Sync, K: Linkage> Sync for LinkedList<T, K> {}

impl<T: Clone, K: Linkage> Clone for LinkedList<T, K> {
    fn clone(&self) -> Self {
        self.copy_with(T::clone).throw()
    }
}

impl<T: PartialEq, K: Linkage> PartialEq for LinkedList<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, K: Linkage> Eq for LinkedList<T, K> {}

impl<T: Hash, K: Linkage> Hash for LinkedList<T, K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug, K: Linkage> Debug for LinkedList<T, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("kind", &K::KIND)
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug, K: Linkage> Display for LinkedList<T, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "()");
        }

        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({value:?})")?;
        }
        Ok(())
    }
}
