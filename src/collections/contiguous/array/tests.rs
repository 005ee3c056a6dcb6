#![cfg(test)]

use std::iter;
use std::mem::MaybeUninit;

use super::*;
use crate::util::testing::{CountedDrop, ZeroSizedType};

#[test]
fn test_zst_support() {
    let mut arr = Array::<ZeroSizedType>::try_from_fn(5, |_| ZeroSizedType).unwrap();
    assert_eq!(arr[0], ZeroSizedType, "Indexing with no offset should work.");
    assert_eq!(arr[4], ZeroSizedType, "Indexing with an in-bounds offset should work.");
    assert_eq!(arr.iter().len(), 5, "Should iterate over the right number of ZST instances.");

    let old_ptr = arr.ptr;
    let mut uninit = arr.forget_init();
    uninit.try_realloc(30).unwrap();
    for slot in uninit[5..].iter_mut() {
        slot.write(ZeroSizedType);
    }
    // SAFETY: Every slot has been written.
    arr = unsafe { uninit.assume_init() };

    assert_eq!(arr.size(), 30);
    assert_eq!(arr.ptr, old_ptr, "Pointer shouldn't change when reallocated for a ZST.");
}

#[test]
fn test_realloc() {
    let mut arr: Array<MaybeUninit<usize>> = Array::new_uninit(5);
    let old_ptr = arr.ptr;

    arr.try_realloc(5).unwrap();
    assert_eq!(arr.ptr, old_ptr, "When reallocating to the same size, the pointer shouldn't change.");

    arr.try_realloc(0).unwrap();
    assert_eq!(arr.size(), 0);

    arr.try_realloc(10).unwrap();
    for (i, slot) in arr.iter_mut().enumerate() {
        slot.write(i);
    }

    arr.try_realloc(15).unwrap();
    for i in 0..10 {
        // SAFETY: The first 10 values were written before growing.
        assert_eq!(
            unsafe { arr[i].assume_init() },
            i,
            "When growing, all elements should remain in the Array."
        );
    }
    assert_eq!(arr.size(), 15);
}

#[test]
fn test_capacity_overflow() {
    let result = Array::<u64>::try_new_uninit(isize::MAX as usize);
    assert!(
        result.is_err_and(|e| e.is_capacity_overflow()),
        "A layout larger than isize::MAX should be rejected before allocating."
    );

    let mut arr: Array<MaybeUninit<u64>> = Array::new_uninit(2);
    assert!(arr.try_realloc(usize::MAX).is_err());
    assert_eq!(arr.size(), 2, "A failed reallocation should leave the Array unchanged.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let arr = Array::try_from_fn(10, |_| counter.clone()).unwrap();

    drop(arr);

    assert_eq!(counter.count(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_iterators() {
    let mut arr = Array::try_from_fn(5, |i| i).unwrap();

    for i in arr.iter_mut() {
        *i *= 2;
    }
    assert_eq!(*arr, [0_usize, 2, 4, 6, 8], "Array mutated by iterator should equal this slice.");

    let mut iter = arr.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new(0);
    let arr = Array::try_from_fn(10, |_| counter.clone()).unwrap();

    let mut iter = arr.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(
        counter.count(),
        10,
        "Dropping a partially consumed owned iterator should drop all remaining elements."
    );

    assert!(iter::empty::<usize>().eq(Array::<usize>::new().into_iter()));
}
