use std::collections::VecDeque;

use container_kit::collections::contiguous::DynArray;
use container_kit::collections::hash::HashTable;
use container_kit::collections::linked::{Doubly, LinkedList, Linkage, Singly};
use container_kit::collections::traits::CopyCollection;
use proptest::prelude::*;

// Run a random sequence of front/back pushes and pops against a VecDeque model.
fn check_list_against_model<K: Linkage>(ops: &[(u8, i32)]) -> Result<(), TestCaseError> {
    let mut list: LinkedList<i32, K> = LinkedList::new();
    let mut model = VecDeque::new();

    for &(op, value) in ops {
        match op {
            0 => {
                list.push_back(value);
                model.push_back(value);
            }
            1 => {
                list.push_front(value);
                model.push_front(value);
            }
            2 => prop_assert_eq!(list.pop_front().ok(), model.pop_front()),
            3 => prop_assert_eq!(list.pop_back().ok(), model.pop_back()),
            _ => unreachable!(),
        }

        prop_assert_eq!(list.len(), model.len());
        prop_assert_eq!(list.front(), model.front());
        prop_assert_eq!(list.back(), model.back());
    }

    prop_assert!(list.iter().eq(model.iter()));
    Ok(())
}

proptest! {
    #[test]
    fn prop_dyn_array_growth(k in 0u32..10) {
        let count = (1usize << k) + 1;
        let mut arr = DynArray::new();
        for i in 0..count {
            arr.push(i);
        }

        prop_assert_eq!(arr.len(), count);
        prop_assert!(arr.cap() >= arr.len());
        prop_assert!(arr.cap().is_power_of_two() && arr.cap() >= 2);
        prop_assert!(arr.iter().copied().eq(0..count));
    }

    #[test]
    fn prop_dyn_array_copy_is_independent(values in proptest::collection::vec(any::<i64>(), 0..64)) {
        let source: DynArray<i64> = values.iter().copied().collect();
        let mut copy = source.copy_with(|v| *v).unwrap();

        prop_assert_eq!(&*copy, &*source);
        prop_assert_eq!(copy.cap(), source.cap());

        copy.push(0);
        for value in copy.iter_mut() {
            *value = value.wrapping_add(1);
        }
        prop_assert_eq!(&*source, values.as_slice());
    }

    #[test]
    fn prop_list_fifo(values in proptest::collection::vec(any::<i32>(), 0..64)) {
        let mut singly: LinkedList<i32, Singly> = values.iter().copied().collect();
        let mut doubly: LinkedList<i32, Doubly> = values.iter().copied().collect();

        for value in &values {
            prop_assert_eq!(singly.pop_front(), Ok(*value));
            prop_assert_eq!(doubly.pop_front(), Ok(*value));
        }
        prop_assert!(singly.is_empty() && doubly.is_empty());
    }

    #[test]
    fn prop_list_lifo(values in proptest::collection::vec(any::<i32>(), 0..64)) {
        let mut singly: LinkedList<i32, Singly> = values.iter().copied().collect();
        let mut doubly: LinkedList<i32, Doubly> = values.iter().copied().collect();

        for value in values.iter().rev() {
            prop_assert_eq!(singly.pop_back(), Ok(*value));
            prop_assert_eq!(doubly.pop_back(), Ok(*value));
        }
        prop_assert!(singly.is_empty() && doubly.is_empty());
    }

    #[test]
    fn prop_list_matches_model(ops in proptest::collection::vec((0u8..=3u8, any::<i32>()), 1..200)) {
        check_list_against_model::<Singly>(&ops)?;
        check_list_against_model::<Doubly>(&ops)?;
    }

    #[test]
    fn prop_hash_lookup_is_stable(
        key in "[a-z]{1,8}",
        value in any::<i32>(),
        others in proptest::collection::vec("[A-Z0-9]{1,12}", 0..100),
    ) {
        let mut table = HashTable::new();
        table.insert(key.as_str(), value);
        prop_assert!(table.exists(&key));
        prop_assert_eq!(table.find(&key), Ok(&value));

        for (index, other) in others.iter().enumerate() {
            table.insert(other.as_str(), index as i32);
            prop_assert!(table.exists(&key));
            prop_assert_eq!(table.find(&key), Ok(&value));
        }
        prop_assert_eq!(table.len(), others.len() + 1);
    }

    #[test]
    fn prop_hash_load_factor(keys in proptest::collection::vec("[ -~]{0,16}", 0..300)) {
        let mut table = HashTable::new();
        for key in &keys {
            table.insert(key.as_str(), ());
            prop_assert!(table.used_buckets() * 2 < table.bucket_count());
            prop_assert!(table.used_buckets() <= table.len());
        }
    }

    #[test]
    fn prop_hash_remove(keys in proptest::collection::hash_set("[a-z0-9]{1,10}", 1..100)) {
        let keys: Vec<String> = keys.into_iter().collect();
        let mut table = HashTable::new();
        for (index, key) in keys.iter().enumerate() {
            table.insert(key.as_str(), index);
        }

        for (index, key) in keys.iter().enumerate() {
            let len = table.len();
            prop_assert_eq!(table.remove(key), Ok(index));
            prop_assert_eq!(table.len(), len - 1);
            prop_assert!(!table.exists(key));
        }
        prop_assert!(table.is_empty());
        prop_assert_eq!(table.used_buckets(), 0);
    }
}
