//! Growable indexed sequence used for bucket arrays and query results.

use std::{fmt, slice};

use crate::{Error, Result};

/// A growable array with checked indexed access
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicArray<T> {
    /// The stored items
    items: Vec<T>,
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynamicArray<T> {
    /// Creates an empty array
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an array of `length` items, each produced by `fill`
    pub fn with_len(length: usize, fill: impl FnMut() -> T) -> Self {
        let mut items = Vec::with_capacity(length);
        items.resize_with(length, fill);
        Self { items }
    }

    /// Appends an item to the end of the array
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the last item
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns a reference to the item at `index`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= self.length()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let length = self.items.len();
        self.items.get(index).ok_or(Error::IndexOutOfBounds { index, length })
    }

    /// Returns a mutable reference to the item at `index`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= self.length()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let length = self.items.len();
        self.items.get_mut(index).ok_or(Error::IndexOutOfBounds { index, length })
    }

    /// Replaces the item at `index`, returning the previous one
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= self.length()`.
    pub fn set(&mut self, index: usize, item: T) -> Result<T> {
        self.get_mut(index).map(|slot| std::mem::replace(slot, item))
    }

    /// Returns the number of items
    #[must_use]
    pub fn length(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the array holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the items in index order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns a mutable iterator over the items in index order
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Returns the items as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, item) in self.items.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_get() {
        let mut array = DynamicArray::new();
        assert!(array.is_empty());
        array.append("a");
        array.append("b");

        assert_eq!(array.length(), 2);
        assert_eq!(array.get(0), Ok(&"a"));
        assert_eq!(array.get(1), Ok(&"b"));
        assert_eq!(array.get(2), Err(Error::IndexOutOfBounds { index: 2, length: 2 }));
    }

    #[test]
    fn test_set() {
        let mut array = DynamicArray::with_len(3, || 0);
        assert_eq!(array.set(1, 7), Ok(0));
        assert_eq!(array.as_slice(), &[0, 7, 0]);
        assert_eq!(array.set(3, 9), Err(Error::IndexOutOfBounds { index: 3, length: 3 }));
    }

    #[test]
    fn test_pop() {
        let mut array: DynamicArray<i32> = (1..=3).collect();
        assert_eq!(array.pop(), Some(3));
        assert_eq!(array.length(), 2);
    }

    #[test]
    fn test_display() {
        let array: DynamicArray<i32> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(array.to_string(), "[1, 2, 3]");
        assert_eq!(DynamicArray::<i32>::new().to_string(), "[]");
    }
}
