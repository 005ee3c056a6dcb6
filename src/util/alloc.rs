use std::alloc::{self, Layout};
use std::ptr::NonNull;

use super::error::{AllocError, AllocationFailed, CapacityOverflow};

/// Creates a [`Layout`] for `size` contiguous values of `T`.
///
/// # Errors
/// Returns [`CapacityOverflow`] if the layout's size would exceed [`isize::MAX`].
pub(crate) fn array_layout<T>(size: usize) -> Result<Layout, AllocError> {
    Layout::array::<T>(size).map_err(|_| AllocError::from(CapacityOverflow))
}

/// Allocates a block for `layout` in the global allocator. A dangling pointer is returned for
/// zero-sized layouts, which are never allocated.
pub(crate) fn alloc_layout<T>(layout: Layout) -> Result<NonNull<T>, AllocationFailed> {
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }

    // SAFETY: Zero-sized layouts have been guarded against.
    let raw = unsafe { alloc::alloc(layout) };
    NonNull::new(raw.cast()).ok_or(AllocationFailed { size: layout.size() })
}

/// Moves `value` into its own heap allocation, the fallible counterpart of [`Box::new`].
///
/// The allocation uses [`Layout::new::<T>`] in the global allocator, so the returned pointer may
/// be handed to [`Box::from_raw`] to take the value back.
pub(crate) fn alloc_value<T>(value: T) -> Result<NonNull<T>, AllocationFailed> {
    let ptr = alloc_layout::<T>(Layout::new::<T>())?;
    // SAFETY: ptr is valid for writes of a T, either freshly allocated or dangling for a ZST.
    unsafe { ptr.as_ptr().write(value); }
    Ok(ptr)
}

/// Takes back ownership of a value created by [`alloc_value`], releasing its allocation.
///
/// # Safety
/// `ptr` must have come from [`alloc_value`] and must not be used again after this call.
pub(crate) unsafe fn take_value<T>(ptr: NonNull<T>) -> T {
    // SAFETY: alloc_value allocates with Layout::new::<T>() in the global allocator, which is
    // exactly the allocation Box expects to own. The caller guarantees that ptr is unique.
    unsafe { *Box::from_raw(ptr.as_ptr()) }
}
