//! # Prime Hash
//!
//! Two string-keyed hash maps with the same interface and different collision
//! strategies:
//!
//! - `OpenAddressingMap`: a flat slot array probed quadratically, with tombstones
//!   marking removed entries. Grows automatically to keep at most half the slots
//!   in use.
//! - `ChainingMap`: one singly-linked chain per bucket. Only rehashes when asked.
//!
//! Both keep their bucket count prime and take a pluggable hash function at
//! construction. `find_mode` uses a `ChainingMap` as a frequency counter.
//!
//! ## Basic Usage
//!
//! ```rust
//! use primehash::OpenAddressingMap;
//!
//! // Create a new hash map
//! let mut map = OpenAddressingMap::new();
//!
//! // Insert values
//! map.put("apple", 1);
//! map.put("banana", 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! map.put("apple", 10);
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! assert!(map.table_load() <= 0.5);
//! ```
//!
//! ## Chaining And Custom Hash Functions
//!
//! ```rust
//! use primehash::{BuiltinHash, ChainingMap};
//!
//! let hash = "positional".parse::<BuiltinHash>()?.function();
//! let mut map = ChainingMap::with_capacity_and_hasher(8, hash);
//! assert_eq!(map.capacity(), 11);
//!
//! for word in ["red", "green", "blue"] {
//!     map.put(word, word.len());
//! }
//!
//! // Chaining tables only grow on request
//! map.resize_table(30);
//! assert_eq!(map.capacity(), 31);
//! assert_eq!(map.get("green"), Some(&5));
//! # Ok::<(), primehash::Error>(())
//! ```
//!
//! ## Finding The Mode
//!
//! ```rust
//! use primehash::find_mode;
//!
//! let (modes, frequency) = find_mode(["apple", "apple", "grape", "melon", "melon", "peach"]);
//! assert_eq!(frequency, 2);
//! assert_eq!(modes.length(), 2);
//! ```

/// Module implementing a hash map with separate chaining
mod chaining;
/// Growable array used for bucket storage
mod dynamic_array;
/// Error types
mod error;
/// Built-in hash functions
pub mod hash;
/// Singly-linked list used for chains
pub mod linked_list;
/// Mode computation on top of `ChainingMap`
mod mode;
/// Module implementing a hash map with quadratic probing
mod open_addressing;
/// Prime capacity policy
pub mod prime;

pub use chaining::{ChainingMap, Iter as ChainingIter};
pub use dynamic_array::DynamicArray;
pub use error::{Error, Result};
pub use hash::{BuiltinHash, HashFunction, hash_function_1, hash_function_2};
pub use linked_list::LinkedList;
pub use mode::find_mode;
pub use open_addressing::{Iter as OpenAddressingIter, MAX_LOAD_FACTOR, OpenAddressingMap};
pub use prime::DEFAULT_CAPACITY;
