use std::alloc;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::alloc::{alloc_layout, array_layout};
use crate::util::error::{AllocError, AllocationFailed};
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

/// A heap allocated array with a size chosen at runtime. Similar to a [`Box<[T]>`](Box<T>),
/// except that allocation failures are reported as errors rather than aborting the process.
///
/// Array is the storage behind [`DynArray`](crate::collections::contiguous::DynArray) and the
/// bucket index of [`HashTable`](crate::collections::hash::HashTable).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `try_realloc` | `O(n)`*, `O(1)` |
///
/// \* The global allocator may be able to resize the block in place.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Creates a new Array with size 0. Nothing is allocated.
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the size of the Array.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Allocates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`](crate::error::CapacityOverflow) if the layout would exceed
    /// [`isize::MAX`] bytes, or [`AllocationFailed`] if the allocator returns null.
    pub fn try_new_uninit(size: usize) -> Result<Array<MaybeUninit<T>>, AllocError> {
        let layout = array_layout::<T>(size)?;
        let ptr = alloc_layout::<MaybeUninit<T>>(layout)?;

        Ok(Array {
            ptr,
            size,
            _phantom: PhantomData,
        })
    }

    /// Allocates a new Array of [`MaybeUninit<T>`] with the provided `size`.
    ///
    /// # Panics
    /// Panics if the allocation fails, see [`Array::try_new_uninit`].
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        Self::try_new_uninit(size).throw()
    }

    /// Allocates an Array of `size` elements, initializing each one with the result of calling
    /// `f` on its index.
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::contiguous::Array;
    /// let arr = Array::try_from_fn(4, |i| i * 10).unwrap();
    /// assert_eq!(&*arr, &[0, 10, 20, 30]);
    /// ```
    pub fn try_from_fn<F>(size: usize, mut f: F) -> Result<Array<T>, AllocError>
    where
        F: FnMut(usize) -> T,
    {
        let mut arr = Self::try_new_uninit(size)?;

        for (index, slot) in arr.iter_mut().enumerate() {
            slot.write(f(index));
        }

        // SAFETY: Every slot has just been written.
        Ok(unsafe { arr.assume_init() })
    }

    /// Interprets self as an `Array<MaybeUninit<T>>`, the counterpart to
    /// [`Array::assume_init`]. The values are not dropped.
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        let (ptr, size) = (self.ptr, self.size);
        mem::forget(self);

        Array {
            ptr: ptr.cast(),
            size,
            _phantom: PhantomData,
        }
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that every element is initialized. Failing to do so is
    /// undefined behavior.
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = (self.ptr, self.size);
        mem::forget(self);

        Array {
            ptr: ptr.cast(),
            size,
            _phantom: PhantomData,
        }
    }

    /// Reallocates the Array to hold `new_size` elements, with new locations uninitialized. Values
    /// beyond `new_size` are discarded without being dropped.
    ///
    /// # Errors
    /// On failure the Array keeps its previous allocation and size.
    pub fn try_realloc(&mut self, new_size: usize) -> Result<(), AllocError> {
        if size_of::<T>() == 0 {
            // Nothing is ever allocated for a ZST, the dangling pointer remains valid.
            self.size = new_size;
            return Ok(());
        }

        if new_size == self.size {
            return Ok(());
        }

        let new_layout = array_layout::<T>(new_size)?;

        let new_ptr = match (self.size, new_size) {
            (0, _) => alloc_layout(new_layout)?,
            (old_size, 0) => {
                let old_layout = array_layout::<T>(old_size)?;
                // SAFETY: ptr was allocated in the global allocator with old_layout, which has a
                // non-zero size.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout); }
                NonNull::dangling()
            },
            (old_size, _) => {
                let old_layout = array_layout::<T>(old_size)?;
                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // size is non-zero and valid for a Layout.
                let raw = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size())
                };
                // A null return leaves the old block untouched.
                NonNull::new(raw.cast()).ok_or(AllocationFailed { size: new_layout.size() })?
            },
        };

        self.ptr = new_ptr;
        self.size = new_size;
        Ok(())
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: All size values are initialized and owned by this Array.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        if size_of::<T>() != 0 && self.size != 0 {
            // The layout was valid when the Array was allocated with this size.
            if let Ok(layout) = array_layout::<T>(self.size) {
                // SAFETY: ptr was allocated in the global allocator with this layout.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout); }
            }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: ptr is valid and properly aligned for size initialized values, or dangling with
        // size 0 or a ZST.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the mutable borrow of self makes this slice unique.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

// SAFETY: Arrays own their values through a unique pointer.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys the borrow checker, so no interior mutability occurs.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &DebugEntries(self.iter()))
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Debug> Display for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
