use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, ManuallyDrop, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use super::{Dimension, FreeNested};
use crate::collections::contiguous::array::{Array, IntoIter};
use crate::collections::traits::{CopyCollection, OwnedCollection};
use crate::util::error::{AllocError, CapacityOverflow, EmptyCollection, IndexOutOfBounds};
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A growable contiguous collection of owned elements, based on [`Array<T>`].
///
/// A DynArray starts with capacity for 2 elements and doubles its capacity whenever a push would
/// overflow it, so the capacity of an array created with [`DynArray::new`] is always a power of
/// two. Elements are dropped when they are removed without being returned, and when the array
/// itself is dropped. [`OwnedCollection::free_with`] and [`DynArray::free_nested`] hand elements
/// to a disposer instead.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `put` | `O(1)` |
/// | `remove` | `O(n-i)` |
/// | `remove_after` | `O(n-i)` |
/// | `swap` | `O(1)` |
/// | `copy_with` | `O(n)` |
///
/// \* If the DynArray doesn't have enough capacity for the new element, `push` will take `O(n)`.
pub struct DynArray<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> DynArray<T> {
    /// Creates a new, empty DynArray with capacity 2.
    ///
    /// # Panics
    /// Panics if the initial allocation fails, see [`DynArray::try_new`].
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::contiguous::DynArray;
    /// let arr: DynArray<u8> = DynArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 2);
    /// ```
    pub fn new() -> DynArray<T> {
        Self::try_new().throw()
    }

    /// Creates a new, empty DynArray with capacity 2, returning an error if the allocation fails.
    pub fn try_new() -> Result<DynArray<T>, AllocError> {
        Self::try_with_cap(MIN_CAP)
    }

    /// Creates a new DynArray with capacity exactly equal to `cap`.
    ///
    /// # Panics
    /// Panics if the allocation fails, see [`DynArray::try_with_cap`].
    pub fn with_cap(cap: usize) -> DynArray<T> {
        Self::try_with_cap(cap).throw()
    }

    /// Creates a new DynArray with capacity exactly equal to `cap`, returning an error if the
    /// allocation fails.
    pub fn try_with_cap(cap: usize) -> Result<DynArray<T>, AllocError> {
        Ok(DynArray {
            arr: Array::try_new_uninit(cap)?,
            len: 0,
        })
    }

    /// Returns the number of elements in the DynArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the DynArray can hold before it needs to grow.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Pushes `value` onto the end of the DynArray, doubling the capacity if it is full.
    ///
    /// # Panics
    /// Panics if growing the DynArray fails, see [`DynArray::try_push`].
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::contiguous::DynArray;
    /// let mut arr = DynArray::new();
    /// for i in [10, 20, 30] {
    ///     arr.push(i);
    /// }
    /// assert_eq!(&*arr, &[10, 20, 30]);
    /// assert_eq!(arr.cap(), 4);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Pushes `value` onto the end of the DynArray, doubling the capacity if it is full.
    ///
    /// # Errors
    /// If the DynArray needs to grow and can't, an error is returned, `value` is dropped and the
    /// DynArray is left unchanged.
    pub fn try_push(&mut self, value: T) -> Result<(), AllocError> {
        if self.len == self.cap() {
            self.try_grow()?;
        }

        self.push_within_cap(value);
        Ok(())
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if there are no elements.
    pub fn pop(&mut self) -> Result<T, EmptyCollection> {
        if self.len == 0 {
            return Err(EmptyCollection);
        }

        // Decrement len before reading, so the value is no longer considered initialized.
        self.len -= 1;
        // SAFETY: The value at the old last index is initialized and now outside of len, so it
        // won't be read again.
        Ok(unsafe { self.arr[self.len].assume_init_read() })
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self.as_slice()[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Returns a reference to the last element, if there is one.
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Replaces the element at `index` with `value`, returning the previous element.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`, in which case `value` is dropped.
    pub fn put(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.get_mut(index)?, value))
    }

    /// Removes the element at `index`, moving all following elements left to fill the gap.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::contiguous::DynArray;
    /// let mut arr: DynArray<_> = "Hello!".chars().collect();
    /// assert_eq!(arr.remove(1), Ok('e'));
    /// assert_eq!(&*arr, &['H', 'l', 'l', 'o', '!']);
    /// assert!(arr.remove(5).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        let mut next = MaybeUninit::uninit();
        // Iterate backwards to index.
        for i in (index..self.len).rev() {
            next = mem::replace(&mut self.arr[i], next);
        }

        self.len -= 1;
        // SAFETY: next contains the value which was previously located at index, which we've
        // already checked to be less than len and therefore initialized.
        Ok(unsafe { next.assume_init() })
    }

    /// Drops every element from `index` to the end of the DynArray, popping from the back.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`. An `index` equal to `len` removes nothing.
    pub fn remove_after(&mut self, index: usize) -> Result<(), IndexOutOfBounds> {
        self.remove_after_with(index, drop)
    }

    /// Removes every element from `index` to the end of the DynArray, popping from the back and
    /// passing each element to `disposer`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`.
    pub fn remove_after_with<D>(
        &mut self,
        index: usize,
        disposer: D,
    ) -> Result<(), IndexOutOfBounds>
    where
        D: FnMut(T),
    {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        self.truncate_with(index, disposer);
        Ok(())
    }

    /// Swaps the elements at indices `a` and `b`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] for the first index that is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), IndexOutOfBounds> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.as_mut_slice().swap(a, b);
        Ok(())
    }

    /// Consumes a DynArray of `D::DIMENSIONS` nesting levels, passing every leaf element to
    /// `disposer`. Each nested DynArray is freed one dimension lower before its own storage is
    /// released.
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::contiguous::{DynArray, Flat, Nested};
    /// let mut grid = DynArray::new();
    /// for row in 0..3 {
    ///     grid.push((0..3).map(|col| row * 3 + col).collect::<DynArray<_>>());
    /// }
    ///
    /// let mut leaves = Vec::new();
    /// grid.free_nested::<Nested<Flat>, _>(|leaf| leaves.push(leaf));
    /// assert_eq!(leaves, (0..9).collect::<Vec<_>>());
    /// ```
    pub fn free_nested<D, F>(self, mut disposer: F)
    where
        D: Dimension,
        Self: FreeNested<D>,
        F: FnMut(<Self as FreeNested<D>>::Leaf),
    {
        FreeNested::<D>::free_leaves(self, &mut disposer);
    }

    /// Returns the initialized elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: All values < len are initialized. The pointer is nonnull, properly aligned and
        // the range is entirely contained within this DynArray.
        unsafe { slice::from_raw_parts(self.arr.ptr.as_ptr().cast(), self.len) }
    }

    /// Returns the initialized elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: As for as_slice, and the mutable borrow of self makes this slice unique.
        unsafe { slice::from_raw_parts_mut(self.arr.ptr.as_ptr().cast(), self.len) }
    }

    /// Writes `value` after the last element.
    ///
    /// # Panics
    /// Panics if there is no spare capacity, which callers guard against.
    pub(crate) fn push_within_cap(&mut self, value: T) {
        self.arr[self.len] = MaybeUninit::new(value);
        self.len += 1;
    }

    /// Pops elements into `disposer` until only `new_len` remain.
    pub(crate) fn truncate_with<D: FnMut(T)>(&mut self, new_len: usize, mut disposer: D) {
        while self.len > new_len {
            self.len -= 1;
            // SAFETY: The value at the old last index is initialized and is now outside of len.
            disposer(unsafe { self.arr[self.len].assume_init_read() });
        }
    }

    /// Doubles the capacity of the DynArray, or raises it to the minimum capacity. On failure the
    /// DynArray is unchanged.
    pub(crate) fn try_grow(&mut self) -> Result<(), AllocError> {
        let doubled = self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?;
        self.arr.try_realloc(cmp::max(doubled, MIN_CAP))
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }
}

impl<T> OwnedCollection for DynArray<T> {
    type Element = T;

    fn len(&self) -> usize {
        self.len
    }

    /// Passes every element to `disposer`, from the front of the DynArray to the back. If the
    /// disposer panics, the remaining elements are leaked rather than dropped.
    fn drain_with<D: FnMut(T)>(&mut self, mut disposer: D) {
        let len = mem::replace(&mut self.len, 0);

        for slot in &mut self.arr[..len] {
            // SAFETY: The first len values are initialized and len has already been reset, so
            // each one is read exactly once.
            disposer(unsafe { slot.assume_init_read() });
        }
    }
}

impl<T> CopyCollection for DynArray<T> {
    type CopyError = AllocError;

    /// Creates a DynArray with the same capacity as self, containing a copy of each element.
    fn copy_with<C: FnMut(&T) -> T>(&self, mut copier: C) -> Result<Self, AllocError> {
        let mut copy = DynArray::try_with_cap(self.cap())?;

        for value in self.iter() {
            copy.push_within_cap(copier(value));
        }

        Ok(copy)
    }
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = DynArray::new();
        arr.extend(iter);
        arr
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let this = ManuallyDrop::new(self);
        // SAFETY: this is never dropped, so ownership of arr moves into the iterator.
        let arr = unsafe { ptr::read(&this.arr) };
        // SAFETY: The first len values of arr are initialized.
        unsafe { IntoIter::from_uninit(arr, this.len) }
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        // SAFETY: All values less than len are initialized and safe to drop. The MaybeUninit
        // values in arr are then released without being dropped again.
        unsafe { ptr::drop_in_place(self.as_mut_slice() as *mut [T]); }
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for DynArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for DynArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// SAFETY: DynArrays own their values through a unique pointer.
unsafe impl<T: Send> Send for DynArray<T> {}
// SAFETY: DynArray's safe API obeys the borrow checker, so no interior mutability occurs.
unsafe impl<T: Sync> Sync for DynArray<T> {}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        self.copy_with(T::clone).throw()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: Hash> Hash for DynArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Debug> Debug for DynArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for DynArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "!")?;
        f.debug_list().entries(self.iter()).finish()
    }
}
