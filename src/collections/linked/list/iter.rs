use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{Link, Linkage, LinkedList};

impl<T, K: Linkage> IntoIterator for LinkedList<T, K> {
    type Item = T;

    type IntoIter = IntoIter<T, K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// An owning iterator over the elements of a [`LinkedList`], from front to back.
pub struct IntoIter<T, K: Linkage> {
    // The list releases each node as it is popped, and the rest when the iterator is dropped.
    pub(crate) list: LinkedList<T, K>,
}

impl<T, K: Linkage> Iterator for IntoIter<T, K> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T, K: Linkage> FusedIterator for IntoIter<T, K> {}

impl<T, K: Linkage> ExactSizeIterator for IntoIter<T, K> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T, K: Linkage> IntoIterator for &'a mut LinkedList<T, K> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T, K>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            next: self.state.head(),
            len: self.len(),
            _phantom: PhantomData,
        }
    }
}

/// An iterator over mutable references to the elements of a [`LinkedList`], from front to back.
pub struct IterMut<'a, T, K: Linkage> {
    // Follows next links without modifying any node, len counts the items left to yield.
    pub(crate) next: Link<T, K>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T, K: Linkage> Iterator for IterMut<'a, T, K> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        self.len -= 1;
        Some(node.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T, K: Linkage> FusedIterator for IterMut<'_, T, K> {}

impl<T, K: Linkage> ExactSizeIterator for IterMut<'_, T, K> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, T, K: Linkage> IntoIterator for &'a LinkedList<T, K> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T, K>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            next: self.state.head(),
            len: self.len(),
            _phantom: PhantomData,
        }
    }
}

/// An iterator over references to the elements of a [`LinkedList`], from front to back.
pub struct Iter<'a, T, K: Linkage> {
    pub(crate) next: Link<T, K>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T, K: Linkage> Iterator for Iter<'a, T, K> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        self.len -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T, K: Linkage> FusedIterator for Iter<'_, T, K> {}

impl<T, K: Linkage> ExactSizeIterator for Iter<'_, T, K> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T, K: Linkage> Clone for Iter<'_, T, K> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}
