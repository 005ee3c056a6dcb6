/// A function from string keys to bucket hashes, used by a
/// [`HashTable`](super::HashTable) to choose the bucket for each key.
///
/// Two equal keys must always produce the same hash, but unequal keys are free to collide. Any
/// `Fn(&[u8]) -> u32` can be used as a KeyHasher.
///
/// # Examples
/// ```
/// # use container_kit::collections::hash::{HashTable, KeyHasher};
/// let first_byte = |key: &[u8]| key.first().copied().unwrap_or_default() as u32;
/// assert_eq!(first_byte.hash_key(b"abc"), 97);
///
/// let mut table = HashTable::with_hasher(first_byte);
/// table.insert("abc", 1);
/// table.insert("axe", 2);
/// assert_eq!(table.used_buckets(), 1);
/// ```
pub trait KeyHasher {
    /// Hashes the bytes of a key.
    fn hash_key(&self, key: &[u8]) -> u32;
}

impl<F: Fn(&[u8]) -> u32> KeyHasher for F {
    fn hash_key(&self, key: &[u8]) -> u32 {
        self(key)
    }
}

/// The default [`KeyHasher`]. Each byte is weighted by its one-based position, the weighted bytes
/// are summed with wrapping and the absolute value of the sum, read as an `i32`, is returned.
///
/// # Examples
/// ```
/// # use container_kit::collections::hash::{KeyHasher, PositionalHash};
/// assert_eq!(PositionalHash.hash_key(b"a"), 97);
/// assert_eq!(PositionalHash.hash_key(b"ab"), 97 + 2 * 98);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionalHash;

impl KeyHasher for PositionalHash {
    fn hash_key(&self, key: &[u8]) -> u32 {
        let mut sum = 0_u32;
        for (index, byte) in key.iter().enumerate() {
            let weight = (index as u32).wrapping_add(1);
            sum = sum.wrapping_add(weight.wrapping_mul(u32::from(*byte)));
        }
        (sum as i32).unsigned_abs()
    }
}
