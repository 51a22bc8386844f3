//! Ordered key-value storage.
//!
//! This module provides [`TreeMap`], a mutable ordered map backed by a
//! red-black tree whose nodes live in a dense index arena.
//!
//! # Balance Discipline
//!
//! The tree maintains the red-black invariants between any two public
//! operations:
//! 1. Every node is either red or black
//! 2. The root is black
//! 3. All absent child positions count as black
//! 4. Red nodes have only black children
//! 5. Every path from a node to a descendant absent position passes
//!    through the same number of black nodes
//!
//! Together these bound the height at `2 * log2(n + 1)`, so every
//! operation is O(log n) in the worst case.
//!
//! # Examples
//!
//! ```rust
//! use arbors::ordered::TreeMap;
//!
//! let mut map = TreeMap::new();
//! map.insert(2, "two");
//! map.insert(1, "one");
//! map.insert(3, "three");
//! assert_eq!(map.len(), 3);
//!
//! // Duplicate-key insertion overwrites and reports the old value
//! assert_eq!(map.insert(2, "TWO"), Some("two"));
//! assert_eq!(map.len(), 3);
//!
//! // Removal of an absent key is a no-op
//! assert_eq!(map.remove(&99), None);
//! assert_eq!(map.min(), Some((&1, &"one")));
//! ```

mod treemap;

pub use treemap::TreeMap;

#[cfg(any(test, feature = "verify"))]
pub use treemap::InvariantViolation;
