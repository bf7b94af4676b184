use std::{fmt, mem};

use crate::{
    DynamicArray,
    hash::{HashFunction, hash_function_1},
    prime::{DEFAULT_CAPACITY, next_prime},
};

/// Highest ratio of non-empty slots to capacity a `put` may leave behind
pub const MAX_LOAD_FACTOR: f64 = 0.5;

/// A live key-value pair
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry<V> {
    /// The key in the key-value pair
    key: String,
    /// The value associated with the key
    value: V,
}

/// A single slot of the bucket array
#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot<V> {
    /// Never used since the last rehash or clear; terminates probing
    Empty,
    /// Holds a live entry
    Live(Entry<V>),
    /// Logically deleted; probing continues past it. Keeps the removed key.
    Tombstone(String),
}

/// Outcome of walking a key's probe sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// A live entry with the key sits at this index
    Found(usize),
    /// The key is absent; a new entry belongs at this index
    Vacant {
        /// Slot the new entry would occupy
        index: usize,
        /// Whether that slot is a tombstone rather than an empty slot
        reuses_tombstone: bool,
    },
    /// Every reachable slot is live with another key
    Exhausted,
}

/// Indices visited by quadratic probing: `home + i²` modulo capacity for `i = 0, 1, 2, …`
#[derive(Debug, Clone)]
struct ProbeSequence {
    /// Index yielded next
    index: usize,
    /// Distance to the index after next, `2i + 1`
    step: usize,
    /// Indices left to yield
    remaining: usize,
    /// Modulus
    capacity: usize,
}

impl ProbeSequence {
    /// Starts a probe sequence of `capacity` indices at `home`
    fn new(home: usize, capacity: usize) -> Self {
        Self { index: home, step: 1, remaining: capacity, capacity }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    #[allow(clippy::arithmetic_side_effects)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.index;
        self.remaining -= 1;
        // (i + 1)² - i² = 2i + 1
        self.index = (self.index + self.step) % self.capacity;
        self.step = (self.step + 2) % self.capacity;
        Some(current)
    }
}

/// A hash map resolving collisions with quadratic probing over a prime-sized table.
///
/// Removal leaves a tombstone so probe sequences through the slot stay intact.
/// Tombstones count towards the load factor and are reclaimed on the next rehash.
///
/// Note: This implementation is not thread-safe.
#[derive(Clone)]
pub struct OpenAddressingMap<V> {
    /// The slots storing the key-value pairs; length is always prime
    buckets: DynamicArray<Slot<V>>,
    /// Number of live entries
    size: usize,
    /// Number of tombstoned slots
    tombstones: usize,
    /// Hash function used to find a key's home slot
    hash_function: HashFunction,
}

impl<V> Default for OpenAddressingMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Extend<(String, V)> for OpenAddressingMap<V> {
    fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<V> FromIterator<(String, V)> for OpenAddressingMap<V> {
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<V> OpenAddressingMap<V> {
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
            buckets: DynamicArray::with_len(next_prime(capacity), || Slot::Empty),
            size: 0,
            tombstones: 0,
            hash_function,
        }
    }

    /// Returns the first index of `key`'s probe sequence
    #[allow(clippy::arithmetic_side_effects)]
    fn home_index(&self, key: &str) -> usize {
        (self.hash_function)(key) % self.capacity()
    }

    /// Walks `key`'s probe sequence until a live match or an empty slot
    fn probe(&self, key: &str) -> Probe {
        let mut first_tombstone = None;

        for index in ProbeSequence::new(self.home_index(key), self.capacity()) {
            match self.buckets.get(index) {
                Ok(Slot::Empty) => {
                    return Probe::Vacant {
                        index: first_tombstone.unwrap_or(index),
                        reuses_tombstone: first_tombstone.is_some(),
                    };
                }
                Ok(Slot::Live(entry)) if entry.key == key => return Probe::Found(index),
                Ok(Slot::Tombstone(_)) => {
                    first_tombstone = first_tombstone.or(Some(index));
                }
                Ok(Slot::Live(_)) => {}
                Err(_) => break,
            }
        }

        match first_tombstone {
            Some(index) => Probe::Vacant { index, reuses_tombstone: true },
            None => Probe::Exhausted,
        }
    }

    /// Whether filling one more empty slot would push the load past [`MAX_LOAD_FACTOR`]
    fn would_overload(&self) -> bool {
        let occupied = self.size.saturating_add(self.tombstones).saturating_add(1);
        occupied.saturating_mul(2) > self.capacity()
    }

    /// Doubles the bucket count (rounded up to a prime) and rehashes
    fn grow(&mut self) {
        self.resize_table(self.capacity().saturating_mul(2));
    }

    /// Inserts a key-value pair, overwriting the value if the key is present.
    ///
    /// Grows the table first when the insertion would leave more than half the
    /// slots non-empty. A tombstone on the key's probe sequence is reused.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        loop {
            match self.probe(&key) {
                Probe::Found(index) => {
                    if let Ok(Slot::Live(entry)) = self.buckets.get_mut(index) {
                        return Some(mem::replace(&mut entry.value, value));
                    }
                    return None;
                }
                Probe::Vacant { index, reuses_tombstone } => {
                    if reuses_tombstone || !self.would_overload() {
                        if let Ok(slot) = self.buckets.get_mut(index) {
                            *slot = Slot::Live(Entry { key, value });
                            self.size = self.size.saturating_add(1);
                            if reuses_tombstone {
                                self.tombstones = self.tombstones.saturating_sub(1);
                            }
                        }
                        return None;
                    }
                    self.grow();
                }
                Probe::Exhausted => self.grow(),
            }
        }
    }

    /// Returns the value stored for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        match self.probe(key) {
            Probe::Found(index) => match self.buckets.get(index) {
                Ok(Slot::Live(entry)) => Some(&entry.value),
                _ => None,
            },
            Probe::Vacant { .. } | Probe::Exhausted => None,
        }
    }

    /// Returns a mutable reference to the value stored for `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        match self.probe(key) {
            Probe::Found(index) => match self.buckets.get_mut(index) {
                Ok(Slot::Live(entry)) => Some(&mut entry.value),
                _ => None,
            },
            Probe::Vacant { .. } | Probe::Exhausted => None,
        }
    }

    /// Returns true if the map holds a live entry for `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        matches!(self.probe(key), Probe::Found(_))
    }

    /// Tombstones the entry for `key` and returns its value.
    ///
    /// Stops at the first empty slot, or at a tombstone left by an earlier
    /// removal of the same key. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let home = self.home_index(key);
        for index in ProbeSequence::new(home, self.capacity()) {
            let Ok(slot) = self.buckets.get_mut(index) else { return None };
            match &*slot {
                Slot::Empty => return None,
                Slot::Tombstone(removed) if removed == key => return None,
                Slot::Live(entry) if entry.key == key => {}
                Slot::Tombstone(_) | Slot::Live(_) => continue,
            }

            let Slot::Live(Entry { key: removed, value }) = mem::replace(slot, Slot::Empty) else {
                return None;
            };
            *slot = Slot::Tombstone(removed);
            self.size = self.size.saturating_sub(1);
            self.tombstones = self.tombstones.saturating_add(1);
            return Some(value);
        }
        None
    }

    /// Rehashes every live entry into a table of at least `new_capacity` buckets.
    ///
    /// Does nothing if `new_capacity` is smaller than the number of non-empty
    /// slots. Otherwise the capacity is rounded up to a prime, tombstones are
    /// dropped and the table keeps growing during reinsertion if needed to stay
    /// within [`MAX_LOAD_FACTOR`].
    pub fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity < self.size.saturating_add(self.tombstones) {
            return;
        }

        let fresh = DynamicArray::with_len(next_prime(new_capacity), || Slot::Empty);
        let old_buckets = mem::replace(&mut self.buckets, fresh);
        self.size = 0;
        self.tombstones = 0;

        for slot in old_buckets {
            if let Slot::Live(Entry { key, value }) = slot {
                self.put(key, value);
            }
        }
    }

    /// Returns the ratio of non-empty slots (tombstones included) to capacity
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        let occupied = self.size.saturating_add(self.tombstones);
        occupied as f64 / self.capacity() as f64
    }

    /// Returns the number of slots that are neither live nor tombstoned
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|slot| matches!(slot, Slot::Empty)).count()
    }

    /// Empties every slot, keeping the capacity
    pub fn clear(&mut self) {
        self.buckets = DynamicArray::with_len(self.capacity(), || Slot::Empty);
        self.size = 0;
        self.tombstones = 0;
    }

    /// Returns the number of live entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no live entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.length()
    }

    /// Returns an iterator over the live key-value pairs in slot order
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { slots: self.buckets.as_slice().iter() }
    }

    /// Returns every live key-value pair in slot order
    #[must_use]
    pub fn get_keys_and_values(&self) -> DynamicArray<(String, V)>
    where
        V: Clone,
    {
        self.iter().map(|(key, value)| (key.to_string(), value.clone())).collect()
    }
}

impl<V: fmt::Debug> fmt::Debug for OpenAddressingMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAddressingMap")
            .field("capacity", &self.capacity())
            .field("size", &self.size)
            .field("tombstones", &self.tombstones)
            .field("buckets", &self.buckets)
            .finish_non_exhaustive()
    }
}

/// One line per slot: `index: None`, `index: key: value` or `index: key (tombstone)`
impl<V: fmt::Display> fmt::Display for OpenAddressingMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.buckets.iter().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "{index}: None")?,
                Slot::Live(entry) => writeln!(f, "{index}: {}: {}", entry.key, entry.value)?,
                Slot::Tombstone(key) => writeln!(f, "{index}: {key} (tombstone)")?,
            }
        }
        Ok(())
    }
}

/// Iterator over the live key-value pairs of an [`OpenAddressingMap`]
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Remaining slots
    slots: std::slice::Iter<'a, Slot<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.find_map(|slot| match slot {
            Slot::Live(entry) => Some((entry.key.as_str(), &entry.value)),
            Slot::Empty | Slot::Tombstone(_) => None,
        })
    }
}
