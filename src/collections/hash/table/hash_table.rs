use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use super::{Iter, KeyHasher, Keys, PositionalHash, Values, ValuesMut};
use crate::collections::contiguous::Array;
use crate::collections::linked::{LinkedList, Singly};
use crate::collections::traits::{CopyCollection, OwnedCollection};
use crate::util::error::{AllocError, CapacityOverflow, KeyNotFound};
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

const INITIAL_BUCKETS: usize = 4;

const GROWTH_FACTOR: usize = 2;

// The ratio of used buckets to buckets stays strictly below 1/2.
const LOAD_FACTOR_NUMERATOR: usize = 1;
const LOAD_FACTOR_DENOMINATOR: usize = 2;

/// A table of values indexed by string keys, made of singly linked buckets.
///
/// Each key is hashed with `H` (the [`PositionalHash`] by default) to pick a bucket, and entries
/// with colliding hashes share that bucket's list. Before an insert would bring the load factor
/// (the ratio of non-empty buckets to buckets) to 1/2 or more, the number of buckets is doubled
/// and every entry is moved to its new bucket.
///
/// Duplicate keys are allowed. Lookups, replacements and removals act on the first matching entry
/// in its bucket, which is the one inserted earliest.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashTable.
/// - `b`: The number of entries in the bucket of the key in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n)` |
/// | `find` | `O(b)` |
/// | `exists` | `O(b)` |
/// | `replace` | `O(b)` |
/// | `remove` | `O(b)` |
/// | `grow` | `O(n)` |
///
/// \* If the HashTable has to grow first, `insert` will take `O(n)`.
pub struct HashTable<V, H: KeyHasher = PositionalHash> {
    pub(crate) buckets: Array<Bucket<V>>,
    pub(crate) len: usize,
    pub(crate) used: usize,
    pub(crate) hasher: H,
}

pub(crate) type Bucket<V> = LinkedList<Entry<V>, Singly>;

pub(crate) struct Entry<V> {
    pub key: String,
    pub value: V,
}

impl<V> HashTable<V> {
    /// Creates a new, empty HashTable with 4 buckets and the default [`PositionalHash`].
    ///
    /// # Panics
    /// Panics if the buckets can't be allocated, see [`HashTable::try_new`].
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::hash::HashTable;
    /// let mut table = HashTable::new();
    /// for (value, key) in ["a", "b", "c", "d", "e"].into_iter().enumerate() {
    ///     table.insert(key, value + 1);
    /// }
    ///
    /// assert!(table.exists("c"));
    /// assert_eq!(table.find("c"), Ok(&3));
    /// assert!(table.bucket_count() > 4);
    /// ```
    pub fn new() -> HashTable<V> {
        Self::try_new().throw()
    }

    /// Creates a new, empty HashTable with 4 buckets and the default [`PositionalHash`],
    /// returning an error if the buckets can't be allocated.
    pub fn try_new() -> Result<HashTable<V>, AllocError> {
        Self::try_with_hasher(PositionalHash)
    }
}

impl<V, H: KeyHasher> HashTable<V, H> {
    /// Creates a new, empty HashTable with 4 buckets, which hashes its keys with `hasher`.
    ///
    /// # Panics
    /// Panics if the buckets can't be allocated, see [`HashTable::try_with_hasher`].
    pub fn with_hasher(hasher: H) -> HashTable<V, H> {
        Self::try_with_hasher(hasher).throw()
    }

    /// Creates a new, empty HashTable with 4 buckets, which hashes its keys with `hasher`,
    /// returning an error if the buckets can't be allocated.
    pub fn try_with_hasher(hasher: H) -> Result<HashTable<V, H>, AllocError> {
        Ok(HashTable {
            buckets: Array::try_from_fn(INITIAL_BUCKETS, |_| LinkedList::new())?,
            len: 0,
            used: 0,
            hasher,
        })
    }

    /// Returns the number of entries in the HashTable.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashTable contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets.
    pub const fn bucket_count(&self) -> usize {
        self.buckets.size()
    }

    /// Returns the number of buckets that hold at least one entry.
    pub const fn used_buckets(&self) -> usize {
        self.used
    }

    /// Returns the ratio of used buckets to buckets, which is always less than 0.5 once an
    /// insert has returned.
    pub fn load_factor(&self) -> f64 {
        self.used as f64 / self.bucket_count() as f64
    }

    /// Returns the hasher used to pick buckets.
    pub const fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Inserts `value` under `key`, growing the HashTable first if required. The entry is added
    /// after any others in its bucket, so an existing entry with an equal key is kept and still
    /// takes priority.
    ///
    /// # Panics
    /// Panics if growing the table or allocating the entry fails, see
    /// [`HashTable::try_insert`].
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        self.try_insert(key, value).throw()
    }

    /// Inserts `value` under `key`, growing the HashTable first if required.
    ///
    /// # Errors
    /// If growing the table or allocating the entry fails, an error is returned, `value` is
    /// dropped and no entry is added.
    pub fn try_insert(&mut self, key: impl Into<String>, value: V) -> Result<(), AllocError> {
        let key = key.into();
        let hash = self.hasher.hash_key(key.as_bytes());

        while self.should_grow_for(hash) {
            self.try_grow()?;
        }

        let index = self.index_for(hash);
        let bucket = &mut self.buckets[index];
        let was_empty = bucket.is_empty();

        bucket.try_push_back(Entry { key, value })?;

        if was_empty {
            self.used += 1;
        }
        self.len += 1;
        Ok(())
    }

    /// Returns a reference to the first value inserted under `key`.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if there is no entry for `key`.
    pub fn find(&self, key: &str) -> Result<&V, KeyNotFound> {
        self.bucket_for(key)
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
            .ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the first value inserted under `key`.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if there is no entry for `key`.
    pub fn find_mut(&mut self, key: &str) -> Result<&mut V, KeyNotFound> {
        let index = self.index_for_key(key);
        self.buckets[index]
            .find_mut(|entry| entry.key == key)
            .map(|entry| &mut entry.value)
            .ok_or(KeyNotFound)
    }

    /// Returns true if there is an entry for `key`.
    pub fn exists(&self, key: &str) -> bool {
        self.find(key).is_ok()
    }

    /// Replaces the value of the first entry for `key`, returning the previous value.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if there is no entry for `key`, in which case `value` is dropped
    /// and the HashTable is unchanged.
    pub fn replace(&mut self, key: &str, value: V) -> Result<V, KeyNotFound> {
        Ok(mem::replace(self.find_mut(key)?, value))
    }

    /// Removes the first entry for `key`, returning its value.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if there is no entry for `key`.
    ///
    /// # Examples
    /// ```
    /// # use container_kit::collections::hash::HashTable;
    /// let mut table = HashTable::new();
    /// table.insert("key", 1);
    /// table.insert("key", 2);
    ///
    /// assert_eq!(table.remove("key"), Ok(1));
    /// assert_eq!(table.find("key"), Ok(&2));
    /// assert!(table.remove("other").is_err());
    /// ```
    pub fn remove(&mut self, key: &str) -> Result<V, KeyNotFound> {
        let index = self.index_for_key(key);
        let bucket = &mut self.buckets[index];
        let entry = bucket.remove_first(|entry| entry.key == key).ok_or(KeyNotFound)?;

        if bucket.is_empty() {
            self.used -= 1;
        }
        self.len -= 1;
        Ok(entry.value)
    }

    /// Doubles the number of buckets, moving every entry into the bucket for its hash.
    ///
    /// # Panics
    /// Panics if the new buckets can't be allocated, see [`HashTable::try_grow`].
    pub fn grow(&mut self) {
        self.try_grow().throw()
    }

    /// Doubles the number of buckets, moving every entry into the bucket for its hash. Entries
    /// are relinked rather than reallocated, and keep their relative order within each bucket.
    ///
    /// # Errors
    /// If the new buckets can't be allocated, an error is returned and the HashTable is
    /// unchanged.
    pub fn try_grow(&mut self) -> Result<(), AllocError> {
        let new_count = self.bucket_count()
            .checked_mul(GROWTH_FACTOR)
            .ok_or(CapacityOverflow)?;
        let new_buckets = Array::try_from_fn(new_count, |_| LinkedList::new())?;

        let mut old_buckets = mem::replace(&mut self.buckets, new_buckets);
        self.used = 0;

        for old in old_buckets.iter_mut() {
            while let Some(node) = old.pop_front_node() {
                let index = self.index_for_key(&node.value().key);
                let bucket = &mut self.buckets[index];

                if bucket.is_empty() {
                    self.used += 1;
                }
                bucket.push_back_node(node);
            }
        }

        Ok(())
    }

    /// Returns an iterator over every key-value pair, in bucket order.
    pub fn iter(&self) -> Iter<'_, V> {
        self.into_iter()
    }

    /// Returns an iterator over every key, in bucket order.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over every value, in bucket order.
    pub fn values(&self) -> Values<'_, V> {
        Values(self.iter())
    }

    /// Returns an iterator over mutable references to every value, in bucket order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        ValuesMut {
            len: self.len,
            inner: self.buckets.iter_mut().flatten(),
        }
    }
}

impl<V, H: KeyHasher> HashTable<V, H> {
    /// Determines whether an entry with `hash` should wait for the HashTable to grow, because it
    /// would occupy an empty bucket and bring the load factor to 1/2 or more.
    pub(crate) fn should_grow_for(&self, hash: u32) -> bool {
        self.buckets[self.index_for(hash)].is_empty()
            && (self.used + 1) * LOAD_FACTOR_DENOMINATOR
                >= self.bucket_count() * LOAD_FACTOR_NUMERATOR
    }

    pub(crate) fn index_for(&self, hash: u32) -> usize {
        hash as usize % self.bucket_count()
    }

    pub(crate) fn index_for_key(&self, key: &str) -> usize {
        self.index_for(self.hasher.hash_key(key.as_bytes()))
    }

    pub(crate) fn bucket_for(&self, key: &str) -> &Bucket<V> {
        &self.buckets[self.index_for_key(key)]
    }

    /// Checks that the counters of the HashTable agree with its buckets.
    #[cfg(test)]
    pub(crate) fn verify_counts(&self) {
        let used = self.buckets.iter().filter(|bucket| !bucket.is_empty()).count();
        let len = self.buckets.iter().map(LinkedList::len).sum::<usize>();

        assert_eq!(self.used, used, "used_buckets should count the non-empty buckets.");
        assert_eq!(self.len, len, "len should be the sum of the bucket lengths.");

        for (index, bucket) in self.buckets.iter().enumerate() {
            for entry in bucket.iter() {
                assert_eq!(self.index_for_key(&entry.key), index);
            }
        }
    }
}

impl<V, H: KeyHasher> OwnedCollection for HashTable<V, H> {
    type Element = V;

    fn len(&self) -> usize {
        self.len
    }

    /// Passes every value to `disposer`, bucket by bucket. The keys are dropped and the buckets
    /// are kept, so the HashTable can be reused.
    fn drain_with<D: FnMut(V)>(&mut self, mut disposer: D) {
        for bucket in self.buckets.iter_mut() {
            while let Ok(entry) = bucket.pop_front() {
                self.len -= 1;
                disposer(entry.value);
            }
        }
        self.used = 0;
    }
}

impl<V, H: KeyHasher + Clone> CopyCollection for HashTable<V, H> {
    type CopyError = AllocError;

    /// Creates a new HashTable with a clone of the same hasher, inserting every entry again in
    /// bucket order with a copy of its value.
    fn copy_with<C: FnMut(&V) -> V>(&self, mut copier: C) -> Result<Self, AllocError> {
        let mut copy = HashTable::try_with_hasher(self.hasher.clone())?;

        for (key, value) in self.iter() {
            copy.try_insert(key, copier(value))?;
        }

        Ok(copy)
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, H: KeyHasher + Clone> Clone for HashTable<V, H> {
    fn clone(&self) -> Self {
        self.copy_with(V::clone).throw()
    }
}

impl<V: Debug, H: KeyHasher + Debug> Debug for HashTable<V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets = self.buckets.iter().map(|bucket| {
            DebugRaw(if bucket.is_empty() {
                "-".into()
            } else {
                bucket.iter()
                    .map(|Entry { key, value }| format!("({key:?}: {value:?})"))
                    .collect::<Vec<_>>()
                    .join(" -> ")
            })
        });

        f.debug_struct("HashTable")
            .field("buckets", &buckets.collect::<Vec<_>>())
            .field("len", &self.len)
            .field("used_buckets", &self.used)
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<V: Debug, H: KeyHasher> Display for HashTable<V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
