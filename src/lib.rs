//! # arbors
//!
//! A self-balancing ordered map for Rust based on an arena-backed
//! red-black tree.
//!
//! ## Overview
//!
//! This library provides [`TreeMap`](ordered::TreeMap), a mutable ordered
//! key-value store with worst-case O(log n) insertion, point lookup,
//! removal, and minimum/maximum retrieval. Balance is maintained by the
//! classical red-black color discipline: every mutation is followed by a
//! case-dispatch fixup that restores the tree-wide invariants (black
//! root, no red node with a red child, uniform black-height on every
//! root-to-leaf path) without ever breaking binary-search-tree ordering.
//!
//! Nodes live in a dense index arena rather than a pointer graph, so
//! parent back-references are plain indices and no reference cycles can
//! form.
//!
//! ## Feature Flags
//!
//! - `verify`: compiles the structural verifier into non-test builds so
//!   external harnesses can audit the tree after arbitrary operation
//!   sequences. Never enabled by default and never called from the
//!   insert/remove paths.
//!
//! ## Example
//!
//! ```rust
//! use arbors::prelude::*;
//!
//! let mut map = TreeMap::new();
//! map.insert(3, "three");
//! map.insert(1, "one");
//! map.insert(2, "two");
//!
//! assert_eq!(map.get(&2), Some(&"two"));
//! assert_eq!(map.min(), Some((&1, &"one")));
//! assert_eq!(map.max(), Some((&3, &"three")));
//!
//! map.remove(&1);
//! assert_eq!(map.min(), Some((&2, &"two")));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use arbors::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ordered::*;
}

pub mod ordered;
