#![cfg(test)]

use std::cell::RefCell;

use super::*;
use crate::collections::traits::{CopyCollection, OwnedCollection};
use crate::util::error::EmptyCollection;
use crate::util::testing::{CountedDrop, ZeroSizedType};

#[test]
fn test_singly_pop_front_twice() {
    let mut list: LinkedList<_, Singly> = LinkedList::new();
    for i in 1..=3 {
        list.push_back(i);
    }

    assert_eq!(list.pop_front(), Ok(1));
    assert_eq!(list.pop_front(), Ok(2));
    assert_eq!(list.len(), 1);
    assert_eq!(list.front(), Some(&3));
    assert_eq!(list.back(), Some(&3), "A single element should be both the head and the tail.");
    list.verify_links();
}

#[test]
fn test_fifo_and_lifo() {
    fn check<K: Linkage>() {
        let mut list: LinkedList<_, K> = (0..10).collect();
        list.verify_links();
        for i in 0..5 {
            assert_eq!(list.pop_front(), Ok(i));
        }
        for i in (5..10).rev() {
            assert_eq!(list.pop_back(), Ok(i));
            list.verify_links();
        }
        assert_eq!(list.pop_front(), Err(EmptyCollection));
        assert_eq!(list.pop_back(), Err(EmptyCollection));
        assert!(list.is_empty());
    }

    check::<Singly>();
    check::<Doubly>();
}

#[test]
fn test_push_both_ends() {
    let mut list: LinkedList<_> = LinkedList::new();
    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    list.push_front(0);
    list.verify_links();

    assert_eq!(list.kind(), ListKind::Doubly);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);

    *list.front_mut().unwrap() = 10;
    *list.back_mut().unwrap() = 30;
    assert_eq!(list.to_string(), "(10) -> (1) -> (2) -> (30)");
}

#[test]
fn test_reuse_after_empty() {
    let mut list: LinkedList<_, Singly> = LinkedList::new();
    list.push_back("a");
    assert_eq!(list.pop_back(), Ok("a"));
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);

    list.push_front("b");
    list.push_back("c");
    assert_eq!(list.pop_back(), Ok("c"));
    assert_eq!(list.back(), Some(&"b"), "Popping the tail should move it back one node.");
    list.verify_links();
}

#[test]
fn test_remove_first() {
    fn check<K: Linkage>() {
        let mut list: LinkedList<_, K> = [1, 2, 3, 2, 4].into_iter().collect();

        assert_eq!(list.remove_first(|v| *v == 2), Some(2));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 3, 2, 4]);
        list.verify_links();

        assert_eq!(list.remove_first(|v| *v == 4), Some(4));
        assert_eq!(list.back(), Some(&2), "Removing the tail should update it.");
        list.verify_links();

        assert_eq!(list.remove_first(|v| *v == 1), Some(1));
        assert_eq!(list.front(), Some(&3), "Removing the head should update it.");
        list.verify_links();

        assert_eq!(list.remove_first(|v| *v == 9), None);
        assert_eq!(list.len(), 2);
    }

    check::<Singly>();
    check::<Doubly>();
}

#[test]
fn test_find() {
    let mut list: LinkedList<_, Singly> = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();

    assert_eq!(list.find(|(k, _)| *k == "a"), Some(&("a", 1)));
    list.find_mut(|(k, _)| *k == "b").unwrap().1 = 20;
    assert!(list.contains(&("b", 20)));
    assert!(!list.contains(&("c", 0)));
}

#[test]
fn test_move_nodes() {
    let mut source: LinkedList<_, Singly> = (0..4).collect();
    let mut target: LinkedList<_, Singly> = LinkedList::new();

    while let Some(node) = source.pop_front_node() {
        target.push_back_node(node);
    }

    assert!(source.is_empty());
    assert_eq!(target.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);
    target.verify_links();
}

#[test]
fn test_drop_accounting() {
    let counter = CountedDrop::new(0);
    let mut list: LinkedList<_, Singly> = LinkedList::new();
    for _ in 0..6 {
        list.push_back(counter.clone());
    }

    drop(list.pop_front());
    drop(list.pop_back());
    assert_eq!(counter.count(), 2);

    drop(list.remove_first(|_| true));
    assert_eq!(counter.count(), 3);

    drop(list);
    assert_eq!(counter.count(), 6, "Every element should be dropped exactly once.");
}

#[test]
fn test_free_with_disposer() {
    let disposed = RefCell::new(Vec::new());
    let list: LinkedList<_> = (0..4).collect();

    list.free_with(|v| disposed.borrow_mut().push(v));
    assert_eq!(*disposed.borrow(), [0, 1, 2, 3], "Elements should be freed from head to tail.");
}

#[test]
fn test_copy_is_independent() {
    let mut source: LinkedList<_, Singly> = (0..5).map(|i| i.to_string()).collect();
    let mut copy = source.copy_with(|s| format!("{s}!")).unwrap();

    assert_eq!(copy.len(), 5);
    assert_eq!(copy.kind(), source.kind());
    assert_eq!(copy.front().map(String::as_str), Some("0!"));
    assert_eq!(copy.back().map(String::as_str), Some("4!"));

    copy.push_back(String::from("extra"));
    source.pop_front().unwrap();
    assert_eq!(source.len(), 4);
    assert_eq!(copy.len(), 6);
    copy.verify_links();

    let cloned = source.clone();
    assert_eq!(cloned, source);
}

#[test]
fn test_iterators() {
    let mut list: LinkedList<_> = (1..=4).collect();

    for value in list.iter_mut() {
        *value *= 10;
    }

    let iter = list.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.sum::<i32>(), 100);

    let mut into_iter = list.into_iter();
    assert_eq!(into_iter.next(), Some(10));
    assert_eq!(into_iter.len(), 3);
    assert_eq!(into_iter.collect::<Vec<_>>(), [20, 30, 40]);
}

#[test]
fn test_zst_support() {
    let mut list: LinkedList<_, Singly> = LinkedList::new();
    for _ in 0..10 {
        list.push_front(ZeroSizedType);
    }
    assert_eq!(list.pop_back(), Ok(ZeroSizedType));
    assert_eq!(list.into_iter().count(), 9);
}

#[test]
fn test_fmt() {
    let list: LinkedList<_, Singly> = ["x", "y"].into_iter().collect();
    assert_eq!(list.to_string(), "(\"x\") -> (\"y\")");
    assert_eq!(LinkedList::<u8>::new().to_string(), "()");
    assert_eq!(
        format!("{list:?}"),
        "LinkedList { kind: Singly, contents: [\"x\", \"y\"], len: 2 }"
    );
}
