//! Comparator-ordered binary heap for Rust
//!
//! This crate provides a binary heap priority queue backed by a growable array
//! and ordered by a comparator supplied at construction. The same structure
//! serves as a min-heap, a max-heap, or any custom ordering.
//!
//! # Features
//!
//! - **`insert`**: O(log n), always succeeds, duplicates allowed
//! - **`extract_root`**: O(log n), returns [`HeapError::EmptyHeap`] instead of
//!   touching storage when the heap is empty
//! - **[`Queue`] capability**: the generic queue members this heap cannot
//!   honour (`offer`, `poll`, `peek`, `element`) fail with
//!   [`HeapError::Unsupported`]
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::min_heap(5);
//! for value in [5, 3, 8, 1, 4] {
//!     heap.insert(value);
//! }
//!
//! assert_eq!(heap.extract_root(), Ok(1));
//! assert_eq!(heap.extract_root(), Ok(3));
//! assert_eq!(heap.len(), 3);
//! ```

pub mod binary;
pub mod traits;

// Re-export the main types for convenience
pub use binary::{BinaryHeap, OrdComparator, OrdHeap};
pub use traits::{HeapError, Operation, Queue};
