#![cfg(test)]

use std::cell::RefCell;

use super::*;
use crate::collections::traits::{CopyCollection, OwnedCollection};
use crate::util::error::KeyNotFound;
use crate::util::testing::CountedDrop;

fn collide(_: &[u8]) -> u32 {
    0
}

#[test]
fn test_positional_hash() {
    assert_eq!(PositionalHash.hash_key(b""), 0);
    assert_eq!(PositionalHash.hash_key(b"c"), 99);
    assert_eq!(PositionalHash.hash_key(b"abc"), 97 + 2 * 98 + 3 * 99);
    assert_eq!(PositionalHash.hash_key(b"ba"), 98 + 2 * 97);

    let long = [0xFF_u8; 0x4000];
    assert!(
        PositionalHash.hash_key(&long) <= i32::MAX as u32 + 1,
        "The hash should be the absolute value of a signed sum."
    );
}

#[test]
fn test_insert_and_find() {
    let mut table = HashTable::new();
    for (value, key) in ["a", "b", "c", "d", "e"].into_iter().enumerate() {
        table.insert(key, value + 1);
        table.verify_counts();
    }

    assert_eq!(table.len(), 5);
    assert!(table.exists("c"));
    assert_eq!(table.find("c"), Ok(&3));
    assert_eq!(table.find("f"), Err(KeyNotFound));
    assert_eq!(table.bucket_count(), 16, "The table should have doubled from 4 buckets twice.");
    assert_eq!(table.used_buckets(), 5);
}

#[test]
fn test_load_factor_after_insert() {
    let mut table = HashTable::new();
    for i in 0..500 {
        table.insert(format!("key-{i}"), i);
        assert!(table.load_factor() < 0.5, "Load factor {} after {i}.", table.load_factor());
    }
    table.verify_counts();

    for i in (0..500).step_by(7) {
        assert_eq!(table.find(&format!("key-{i}")), Ok(&i));
    }
}

#[test]
fn test_collisions() {
    let mut table = HashTable::with_hasher(collide);
    for key in ["zero", "one", "two", "three"] {
        table.insert(key, key.len());
    }

    assert_eq!(table.used_buckets(), 1, "Every key should share a single bucket.");
    assert_eq!(table.bucket_count(), 4, "A single used bucket shouldn't cause growth.");

    assert_eq!(table.remove("one"), Ok(3));
    assert_eq!(table.remove("one"), Err(KeyNotFound));
    assert_eq!(table.remove("three"), Ok(5));
    table.verify_counts();

    assert_eq!(table.keys().collect::<Vec<_>>(), ["zero", "two"]);
}

#[test]
fn test_duplicate_keys() {
    let mut table = HashTable::new();
    table.insert("key", "first");
    table.insert("key", "second");

    assert_eq!(table.len(), 2);
    assert_eq!(table.find("key"), Ok(&"first"), "The earliest entry should take priority.");
    assert_eq!(table.replace("key", "third"), Ok("first"));

    assert_eq!(table.remove("key"), Ok("third"));
    assert_eq!(table.find("key"), Ok(&"second"));
    assert_eq!(table.remove("key"), Ok("second"));
    assert!(!table.exists("key"));
    assert_eq!(table.used_buckets(), 0);
}

#[test]
fn test_replace() {
    let mut table = HashTable::new();
    table.insert("x", 1);

    assert_eq!(table.replace("x", 2), Ok(1));
    assert_eq!(table.replace("y", 3), Err(KeyNotFound));
    assert_eq!(table.len(), 1, "Replacing a missing key shouldn't insert it.");

    *table.find_mut("x").unwrap() += 10;
    assert_eq!(table.find("x"), Ok(&12));
}

#[test]
fn test_grow_relinks_entries() {
    let mut table = HashTable::with_hasher(|key: &[u8]| key.len() as u32);
    for key in ["a", "bb", "ccccc", "d", "eeeeee"] {
        table.insert(key, key.to_uppercase());
    }
    table.verify_counts();

    let before = table.len();
    table.grow();
    table.grow();
    table.verify_counts();

    assert_eq!(table.bucket_count(), 64);
    assert_eq!(table.len(), before);
    assert_eq!(table.used_buckets(), 4);
    assert_eq!(
        table.iter()
            .filter(|(key, _)| key.len() == 1)
            .map(|(_, value)| value.as_str())
            .collect::<Vec<_>>(),
        ["A", "D"],
        "Entries in a bucket should keep their order when relinked."
    );
}

#[test]
fn test_remove_updates_counts() {
    let mut table = HashTable::new();
    for key in ["k1", "k2", "k3"] {
        table.insert(key, ());
    }
    let used = table.used_buckets();

    assert_eq!(table.remove("k2"), Ok(()));
    assert_eq!(table.len(), 2);
    assert_eq!(table.used_buckets(), used - 1);
    assert!(!table.exists("k2"));
    table.verify_counts();
}

#[test]
fn test_drop_accounting() {
    let counter = CountedDrop::new(0);
    let mut table = HashTable::new();
    for i in 0..20 {
        table.insert(i.to_string(), counter.clone());
    }

    drop(table.remove("3"));
    drop(table.replace("4", counter.clone()));
    assert_eq!(counter.count(), 2);

    drop(table);
    assert_eq!(counter.count(), 21, "Every value should be dropped exactly once.");
}

#[test]
fn test_free_with_disposer() {
    let disposed = RefCell::new(Vec::new());
    let mut table = HashTable::with_hasher(collide);
    table.insert("a", 1);
    table.insert("b", 2);
    table.insert("c", 3);

    table.drain_with(|v| disposed.borrow_mut().push(v));
    assert!(table.is_empty());
    assert_eq!(table.used_buckets(), 0);
    assert_eq!(*disposed.borrow(), [1, 2, 3]);

    table.insert("d", 4);
    table.free_with(|v| disposed.borrow_mut().push(v));
    assert_eq!(*disposed.borrow(), [1, 2, 3, 4]);
}

// Deliberately not Clone.
struct SeededHash {
    seed: u32,
}

impl KeyHasher for SeededHash {
    fn hash_key(&self, key: &[u8]) -> u32 {
        key.iter().fold(self.seed, |hash, byte| hash.wrapping_mul(31).wrapping_add(*byte as u32))
    }
}

#[test]
fn test_free_with_unclonable_hasher() {
    let counter = CountedDrop::new(0);
    let disposed = RefCell::new(Vec::new());
    let mut table = HashTable::with_hasher(SeededHash { seed: 7 });
    for key in ["a", "b", "c", "d", "e"] {
        table.insert(key, counter.clone());
    }

    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.used_buckets(), 0);
    assert_eq!(counter.count(), 5);

    let mut table = HashTable::with_hasher(SeededHash { seed: 7 });
    for (value, key) in ["x", "y", "z"].into_iter().enumerate() {
        table.insert(key, value);
    }
    table.verify_counts();
    table.free_with(|v| disposed.borrow_mut().push(v));

    let mut disposed = disposed.into_inner();
    disposed.sort();
    assert_eq!(disposed, [0, 1, 2]);
}

#[test]
fn test_copy_is_independent() {
    let mut source = HashTable::new();
    for key in ["one", "two", "three"] {
        source.insert(key, key.len());
    }

    let mut copy = source.copy_with(|v| v * 100).unwrap();
    assert_eq!(copy.len(), 3);
    assert_eq!(copy.find("three"), Ok(&500));

    copy.remove("one").unwrap();
    source.replace("two", 0).unwrap();
    assert!(source.exists("one"));
    assert_eq!(copy.find("two"), Ok(&300));

    let cloned = source.clone();
    assert_eq!(cloned.find("two"), Ok(&0));
    assert_eq!(cloned.hasher(), source.hasher());
}

#[test]
fn test_iterators() {
    let mut table = HashTable::new();
    for (i, key) in ["p", "q", "r"].into_iter().enumerate() {
        table.insert(key, i);
    }

    for value in table.values_mut() {
        *value += 1;
    }
    assert_eq!(table.values().sum::<usize>(), 6);
    assert_eq!(table.iter().len(), 3);

    let mut keys = table.keys().collect::<Vec<_>>();
    keys.sort_unstable();
    assert_eq!(keys, ["p", "q", "r"]);

    let mut entries = table.into_iter().collect::<Vec<_>>();
    entries.sort_unstable();
    assert_eq!(entries, [(String::from("p"), 1), (String::from("q"), 2), (String::from("r"), 3)]);
}

#[test]
fn test_fmt() {
    let mut table = HashTable::with_hasher(collide as fn(&[u8]) -> u32);
    table.insert("a", 1);
    table.insert("b", 2);

    assert_eq!(table.to_string(), "#{\"a\": 1, \"b\": 2}");
    assert!(format!("{table:?}").contains("(\"a\": 1) -> (\"b\": 2), -, -, -"));
}
