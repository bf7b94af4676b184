//! Singly-linked chain of string-keyed nodes, one per bucket of a `ChainingMap`.

use std::fmt;

/// A node in a [`LinkedList`]
pub struct Node<V> {
    /// The key of the node
    pub key: String,
    /// The value associated with the key
    pub value: V,
    /// The following node, if any
    next: Option<Box<Node<V>>>,
}

/// A singly-linked list with insertion at the front
pub struct LinkedList<V> {
    /// First node of the list
    head: Option<Box<Node<V>>>,
    /// Number of nodes in the list
    length: usize,
}

impl<V> Default for LinkedList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> LinkedList<V> {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, length: 0 }
    }

    /// Inserts a new node at the front of the list
    ///
    /// Does not check for an existing node with the same key.
    pub fn insert(&mut self, key: String, value: V) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { key, value, next }));
        self.length = self.length.saturating_add(1);
    }

    /// Unlinks the first node matching `key` and returns its value
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.key != key) {
            cursor = &mut cursor.as_mut()?.next;
        }

        let removed = cursor.take()?;
        let Node { value, next, .. } = *removed;
        *cursor = next;
        self.length = self.length.saturating_sub(1);
        Some(value)
    }

    /// Returns the first node matching `key`
    #[must_use]
    pub fn contains(&self, key: &str) -> Option<&Node<V>> {
        self.iter().find(|node| node.key == key)
    }

    /// Returns the first node matching `key` mutably
    pub fn contains_mut(&mut self, key: &str) -> Option<&mut Node<V>> {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.key == key {
                return Some(node);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    /// Returns the number of nodes
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns true if the list has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns an iterator over the nodes from front to back
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { next: self.head.as_deref() }
    }

    /// Detaches and returns the front node's key and value
    pub fn pop_front(&mut self) -> Option<(String, V)> {
        let head = self.head.take()?;
        let Node { key, value, next } = *head;
        self.head = next;
        self.length = self.length.saturating_sub(1);
        Some((key, value))
    }
}

impl<V> Drop for LinkedList<V> {
    fn drop(&mut self) {
        // Unlink iteratively so long chains don't overflow the stack
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<V: Clone> Clone for LinkedList<V> {
    fn clone(&self) -> Self {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for node in self.iter() {
            let appended = tail.insert(Box::new(Node {
                key: node.key.clone(),
                value: node.value.clone(),
                next: None,
            }));
            tail = &mut appended.next;
        }
        list.length = self.length;
        list
    }
}

/// Shows the key and value only, never the rest of the chain
impl<V: fmt::Debug> fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl<V: fmt::Debug> fmt::Debug for LinkedList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(|node| (&node.key, &node.value))).finish()
    }
}

/// Borrowing iterator over the nodes of a [`LinkedList`]
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// The node yielded next
    next: Option<&'a Node<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node)
    }
}

/// Consuming iterator over the key-value pairs of a [`LinkedList`]
#[derive(Debug)]
pub struct IntoIter<V> {
    /// The list being drained
    list: LinkedList<V>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }
}

impl<V> IntoIterator for LinkedList<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<V: fmt::Display> fmt::Display for LinkedList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SLL [")?;
        for (position, node) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}: {}", node.key, node.value)?;
        }
        f.write_str("]")
    }
}
