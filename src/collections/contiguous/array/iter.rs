use std::iter::FusedIterator;
use std::mem::MaybeUninit;

use super::Array;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let size = self.size();
        // SAFETY: All size values are initialized.
        unsafe { IntoIter::from_uninit(self.forget_init(), size) }
    }
}

/// An owned iterator over an [`Array`] or [`DynArray`](crate::collections::contiguous::DynArray).
///
/// Elements that are never yielded are dropped along with the iterator, after which the
/// allocation is released.
pub struct IntoIter<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<T> IntoIter<T> {
    /// Creates an iterator over the first `len` values of `arr`.
    ///
    /// # Safety
    /// The first `len` values of `arr` must be initialized.
    pub(crate) unsafe fn from_uninit(arr: Array<MaybeUninit<T>>, len: usize) -> IntoIter<T> {
        IntoIter {
            arr,
            front: 0,
            back: len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        // SAFETY: Values in front..back are initialized and front is moved past this one, so it
        // won't be read or dropped again.
        let value = unsafe { self.arr[self.front].assume_init_read() };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        // SAFETY: As for next, back now excludes this value.
        Some(unsafe { self.arr[self.back].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.front..self.back {
            // SAFETY: Values in front..back are initialized and haven't been yielded.
            unsafe { self.arr[i].assume_init_drop(); }
        }
        // arr only holds MaybeUninit values, so dropping it just releases the allocation.
    }
}
