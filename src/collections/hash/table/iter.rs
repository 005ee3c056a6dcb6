use std::iter::{Flatten, FusedIterator};
use std::slice;

use super::{Bucket, HashTable, KeyHasher};
use crate::collections::contiguous::array::IntoIter as ArrIntoIter;

impl<V, H: KeyHasher> IntoIterator for HashTable<V, H> {
    type Item = (String, V);

    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len,
            inner: self.buckets.into_iter().flatten(),
        }
    }
}

/// An owning iterator over the entries of a [`HashTable`], in bucket order.
pub struct IntoIter<V> {
    pub(crate) inner: Flatten<ArrIntoIter<Bucket<V>>>,
    pub(crate) len: usize,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.next()?;
        self.len -= 1;
        Some((entry.key, entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<V> FusedIterator for IntoIter<V> {}

impl<V> ExactSizeIterator for IntoIter<V> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, V, H: KeyHasher> IntoIterator for &'a HashTable<V, H> {
    type Item = (&'a str, &'a V);

    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            len: self.len,
            inner: self.buckets.iter().flatten(),
        }
    }
}

/// An iterator over references to the entries of a [`HashTable`], in bucket order.
pub struct Iter<'a, V> {
    pub(crate) inner: Flatten<slice::Iter<'a, Bucket<V>>>,
    pub(crate) len: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.next()?;
        self.len -= 1;
        Some((entry.key.as_str(), &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<V> FusedIterator for Iter<'_, V> {}

impl<V> ExactSizeIterator for Iter<'_, V> {
    fn len(&self) -> usize {
        self.len
    }
}

/// An iterator over mutable references to the values of a [`HashTable`], in bucket order.
pub struct ValuesMut<'a, V> {
    pub(crate) inner: Flatten<slice::IterMut<'a, Bucket<V>>>,
    pub(crate) len: usize,
}

impl<'a, V> Iterator for ValuesMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.next()?;
        self.len -= 1;
        Some(&mut entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<V> FusedIterator for ValuesMut<'_, V> {}

impl<V> ExactSizeIterator for ValuesMut<'_, V> {
    fn len(&self) -> usize {
        self.len
    }
}

/// An iterator over the keys of a [`HashTable`], in bucket order.
pub struct Keys<'a, V>(pub(crate) Iter<'a, V>);

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> FusedIterator for Keys<'_, V> {}

impl<V> ExactSizeIterator for Keys<'_, V> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// An iterator over the values of a [`HashTable`], in bucket order.
pub struct Values<'a, V>(pub(crate) Iter<'a, V>);

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> FusedIterator for Values<'_, V> {}

impl<V> ExactSizeIterator for Values<'_, V> {
    fn len(&self) -> usize {
        self.0.len()
    }
}
