use std::{fmt, mem, slice};

use crate::{
    DynamicArray, LinkedList, Result,
    hash::{HashFunction, hash_function_1},
    linked_list,
    prime::{DEFAULT_CAPACITY, next_prime},
};

/// A hash map resolving collisions by chaining entries in per-bucket linked lists.
///
/// The table never grows on its own; callers rehash with [`ChainingMap::resize_table`].
///
/// Note: This implementation is not thread-safe.
#[derive(Clone)]
pub struct ChainingMap<V> {
    /// One chain per bucket; length is always prime
    buckets: DynamicArray<LinkedList<V>>,
    /// Number of entries across all chains
    size: usize,
    /// Hash function used to pick a key's chain
    hash_function: HashFunction,
}

impl<V> Default for ChainingMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Extend<(String, V)> for ChainingMap<V> {
    fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<V> FromIterator<(String, V)> for ChainingMap<V> {
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<V> ChainingMap<V> {
    /// Creates a map with [`DEFAULT_CAPACITY`] buckets hashed by [`hash_function_1`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a map with at least `capacity` buckets, rounded up to a prime
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, hash_function_1)
    }

    /// Creates a map with at least `capacity` buckets using `hash_function`
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_function: HashFunction) -> Self {
        Self {
            buckets: DynamicArray::with_len(next_prime(capacity), LinkedList::new),
            size: 0,
            hash_function,
        }
    }

    /// Returns the bucket index of `key`
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)]
    pub fn get_hash(&self, key: &str) -> usize {
        (self.hash_function)(key) % self.capacity()
    }

    /// Returns the chain at bucket `index`
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IndexOutOfBounds`] if `index >= self.capacity()`.
    pub fn get_list(&self, index: usize) -> Result<&LinkedList<V>> {
        self.buckets.get(index)
    }

    /// Returns the chain `key` belongs to
    fn chain(&self, key: &str) -> Option<&LinkedList<V>> {
        self.buckets.get(self.get_hash(key)).ok()
    }

    /// Returns the chain `key` belongs to, mutably
    fn chain_mut(&mut self, key: &str) -> Option<&mut LinkedList<V>> {
        let index = self.get_hash(key);
        self.buckets.get_mut(index).ok()
    }

    /// Inserts a key-value pair at the front of its chain.
    ///
    /// An existing entry for the key is unlinked first and its value returned.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let chain = self.chain_mut(&key)?;
        let previous = chain.remove(&key);
        chain.insert(key, value);
        if previous.is_none() {
            self.size = self.size.saturating_add(1);
        }
        previous
    }

    /// Returns the value stored for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.chain(key)?.contains(key).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value stored for `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.chain_mut(key)?.contains_mut(key).map(|node| &mut node.value)
    }

    /// Returns true if the map holds an entry for `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.chain(key).is_some_and(|chain| chain.contains(key).is_some())
    }

    /// Unlinks the entry for `key` and returns its value
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let removed = self.chain_mut(key)?.remove(key);
        if removed.is_some() {
            self.size = self.size.saturating_sub(1);
        }
        removed
    }

    /// Moves every entry into a fresh table of at least `new_capacity` buckets.
    ///
    /// Does nothing if `new_capacity` is zero. The capacity is rounded up to a
    /// prime; the entry count is unchanged.
    pub fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity < 1 {
            return;
        }

        let fresh = DynamicArray::with_len(next_prime(new_capacity), LinkedList::new);
        let old_buckets = mem::replace(&mut self.buckets, fresh);

        for (key, value) in old_buckets.into_iter().flatten() {
            if let Some(chain) = self.chain_mut(&key) {
                chain.insert(key, value);
            }
        }
    }

    /// Returns the average chain length
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        let entries: usize = self.buckets.iter().map(LinkedList::length).sum();
        entries as f64 / self.capacity() as f64
    }

    /// Returns the number of chains with no entries
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|chain| chain.is_empty()).count()
    }

    /// Empties every chain, keeping the capacity
    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            *chain = LinkedList::new();
        }
        self.size = 0;
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.length()
    }

    /// Returns an iterator over the key-value pairs, bucket by bucket and
    /// front to back within each chain
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { chains: self.buckets.as_slice().iter(), nodes: None }
    }

    /// Returns every key-value pair in [`ChainingMap::iter`] order
    #[must_use]
    pub fn get_keys_and_values(&self) -> DynamicArray<(String, V)>
    where
        V: Clone,
    {
        self.iter().map(|(key, value)| (key.to_string(), value.clone())).collect()
    }
}

impl ChainingMap<usize> {
    /// Counts one more occurrence of `key`, starting at 1 if absent.
    ///
    /// The entry is reinserted at the front of its chain, so frequently counted
    /// keys are found sooner.
    pub fn key_val_mode_helper(&mut self, key: &str) {
        let count = self.remove(key).map_or(1, |count| count.saturating_add(1));
        self.put(key, count);
    }
}

impl<V: fmt::Debug> fmt::Debug for ChainingMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainingMap")
            .field("capacity", &self.capacity())
            .field("size", &self.size)
            .field("buckets", &self.buckets)
            .finish_non_exhaustive()
    }
}

/// One line per bucket: `index: SLL [key: value -> ...]`
impl<V: fmt::Display> fmt::Display for ChainingMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, chain) in self.buckets.iter().enumerate() {
            writeln!(f, "{index}: {chain}")?;
        }
        Ok(())
    }
}

/// Iterator over the key-value pairs of a [`ChainingMap`]
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Chains not yet visited
    chains: slice::Iter<'a, LinkedList<V>>,
    /// Nodes left in the chain being visited
    nodes: Option<linked_list::Iter<'a, V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.nodes.as_mut().and_then(Iterator::next) {
                return Some((node.key.as_str(), &node.value));
            }
            self.nodes = Some(self.chains.next()?.iter());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, hash::hash_function_2, prime::is_prime};

    fn sorted_pairs(map: &ChainingMap<i32>) -> Vec<(String, i32)> {
        let mut pairs: Vec<(String, i32)> = map.get_keys_and_values().into_iter().collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn test_put_and_get() {
        let mut map = ChainingMap::new();
        assert_eq!(map.capacity(), 11);
        assert_eq!(map.put("key1", 1), None);
        assert_eq!(map.put("key2", 2), None);

        assert_eq!(map.get("key1"), Some(&1));
        assert_eq!(map.get("key2"), Some(&2));
        assert_eq!(map.get("key3"), None);
        assert!(map.contains_key("key1"));
        assert!(!map.contains_key("key3"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_update_moves_entry_to_front() {
        let mut map = ChainingMap::new();
        // Anagrams share a chain under the additive hash
        map.put("abc", 1);
        map.put("cab", 2);
        assert_eq!(map.put("abc", 10), Some(1));
        assert_eq!(map.len(), 2);

        let chain = map.get_list(map.get_hash("abc")).map(|list| list.to_string());
        assert_eq!(chain, Ok("SLL [abc: 10 -> cab: 2]".to_string()));
    }

    #[test]
    fn test_remove() {
        let mut map = ChainingMap::new();
        map.put("abc", 1);
        map.put("bca", 2);

        assert_eq!(map.remove("abc"), Some(1));
        assert_eq!(map.remove("abc"), None);
        assert_eq!(map.remove("zzz"), None);
        assert!(!map.contains_key("abc"));
        assert_eq!(map.get("bca"), Some(&2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_resize_preserves_entries_and_size() {
        let mut map = ChainingMap::with_capacity_and_hasher(3, hash_function_2);
        for i in 0..40 {
            map.put(format!("key-{i}"), i);
        }
        let before = sorted_pairs(&map);
        assert!(map.table_load() > 10.0);

        map.resize_table(100);
        assert_eq!(map.capacity(), 101);
        assert_eq!(map.len(), 40);
        assert_eq!(sorted_pairs(&map), before);
        assert!((map.table_load() - 40.0 / 101.0).abs() < f64::EPSILON);

        map.resize_table(4);
        assert_eq!(map.capacity(), 5);
        assert_eq!(map.len(), 40);
        assert_eq!(sorted_pairs(&map), before);
    }

    #[test]
    fn test_resize_to_zero_is_noop() {
        let mut map = ChainingMap::with_capacity(7);
        map.put("a", 1);
        map.resize_table(0);
        assert_eq!(map.capacity(), 7);
        assert_eq!(map.get("a"), Some(&1));
    }

    #[test]
    fn test_capacity_is_prime() {
        for requested in [0, 1, 2, 4, 9, 20, 100] {
            let mut map: ChainingMap<i32> = ChainingMap::with_capacity(requested);
            assert!(is_prime(map.capacity()));
            map.resize_table(requested.saturating_mul(3));
            assert!(is_prime(map.capacity()));
        }
    }

    #[test]
    fn test_load_and_empty_buckets() {
        let mut map = ChainingMap::with_capacity(11);
        assert_eq!(map.empty_buckets(), 11);
        map.put("abc", 1);
        map.put("bca", 2);
        map.put("z", 3);

        assert_eq!(map.empty_buckets(), 9);
        assert!((map.table_load() - 3.0 / 11.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_get_hash_and_list() {
        let map: ChainingMap<i32> = ChainingMap::with_capacity(11);
        assert_eq!(map.get_hash("a"), 97 % 11);
        assert!(map.get_list(10).is_ok_and(LinkedList::is_empty));
        assert_eq!(
            map.get_list(11).map(LinkedList::length),
            Err(Error::IndexOutOfBounds { index: 11, length: 11 })
        );
    }

    #[test]
    fn test_key_val_mode_helper() {
        let mut map: ChainingMap<usize> = ChainingMap::new();
        map.key_val_mode_helper("abc");
        map.key_val_mode_helper("cab");
        map.key_val_mode_helper("abc");
        map.key_val_mode_helper("abc");

        assert_eq!(map.get("abc"), Some(&3));
        assert_eq!(map.get("cab"), Some(&1));
        assert_eq!(map.len(), 2);

        let front = map
            .get_list(map.get_hash("abc"))
            .ok()
            .and_then(|list| list.iter().next())
            .map(|node| node.key.clone());
        assert_eq!(front, Some("abc".to_string()));
    }

    #[test]
    fn test_clear() {
        let mut map = ChainingMap::with_capacity(13);
        map.put("key1", 1);
        map.put("key2", 2);

        map.clear();

        assert_eq!(map.capacity(), 13);
        assert!(map.is_empty());
        assert_eq!(map.get("key1"), None);
        assert_eq!(map.empty_buckets(), 13);
    }

    #[test]
    fn test_get_mut() {
        let mut map = ChainingMap::new();
        map.put("key1", 1);

        if let Some(value) = map.get_mut("key1") {
            *value += 10;
        }

        assert_eq!(map.get("key1"), Some(&11));
    }

    #[test]
    fn test_iter_order() {
        let mut map = ChainingMap::with_capacity(11);
        map.put("c", 3);
        map.put("a", 1);
        map.put("l", 12);

        // "a" and "l" share bucket 9 (97 and 108), "c" sits in bucket 0
        let keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["c", "l", "a"]);
    }

    #[test]
    fn test_display() {
        let mut map = ChainingMap::with_capacity(3);
        map.put("a", 1);
        map.put("d", 4);
        assert_eq!(map.to_string(), "0: SLL []\n1: SLL [d: 4 -> a: 1]\n2: SLL []\n");
    }

    #[test]
    fn test_clone_and_debug_follow_chains() {
        let mut map = ChainingMap::with_capacity(3);
        map.put("a", 1);
        map.put("d", 4);

        let mut copy = map.clone();
        copy.put("a", 10);
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(copy.get("a"), Some(&10));
        assert_eq!(copy.get_list(1).map(LinkedList::length), Ok(2));

        assert!(format!("{map:?}").contains(r#"[("d", 4), ("a", 1)]"#));
    }
}
