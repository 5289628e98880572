//! Comparator-ordered binary heap
//!
//! A binary heap stored in a growable array and ordered by a comparator chosen
//! at construction. Whichever element the comparator ranks as [`Less`] than
//! every other sits at the root, so a min-heap and a max-heap differ only in
//! the comparator.
//!
//! Positions are one-based: the root is position 1, the children of position
//! `i` are `2i` and `2i + 1`, and its parent is `i / 2`. Position `p` is kept
//! at index `p - 1` of the backing `Vec`, so no placeholder element is stored
//! for the unused position 0. A literal placeholder would need `T: Default`
//! or an `Option<T>` per slot. For the same reason the capacity hint reserves
//! exactly `capacity_hint` slots rather than `capacity_hint + 1`.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(log n)   |
//! | `extract_root` | O(log n)   |
//! | `len`          | O(1)       |
//! | `clear`        | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::BinaryHeap;
//!
//! // Longest word first
//! let mut heap = BinaryHeap::new(8, |a: &&str, b: &&str| b.len().cmp(&a.len()));
//! heap.insert("fig");
//! heap.insert("banana");
//! heap.insert("kiwi");
//!
//! assert_eq!(heap.extract_root(), Ok("banana"));
//! assert_eq!(heap.extract_root(), Ok("kiwi"));
//! assert_eq!(heap.extract_root(), Ok("fig"));
//! assert!(heap.extract_root().is_err());
//! ```
//!
//! [`Less`]: std::cmp::Ordering::Less

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::traits::{HeapError, Operation, Queue};

/// Comparator used by the `Ord`-based constructors
pub type OrdComparator<T> = fn(&T, &T) -> Ordering;

/// A heap ordered by `T`'s own [`Ord`] implementation, either direction
pub type OrdHeap<T> = BinaryHeap<T, OrdComparator<T>>;

/// A binary heap ordered by a caller-supplied comparator
///
/// The element for which `cmp` returns [`Ordering::Less`] against all others
/// is extracted first. Equal elements are allowed and come out in no
/// particular order relative to each other.
///
/// Only [`insert`](Self::insert) and [`extract_root`](Self::extract_root)
/// change the order of the heap. The non-ordered members of [`Queue`] always
/// fail with [`HeapError::Unsupported`].
pub struct BinaryHeap<T, C = OrdComparator<T>> {
    /// Position `p` of the heap lives at `data[p - 1]`
    data: Vec<T>,
    cmp: C,
}

impl<T, C> BinaryHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty heap ordered by `cmp`
    ///
    /// `capacity_hint` only reserves storage; the heap grows past it as needed.
    pub fn new(capacity_hint: usize, cmp: C) -> Self {
        debug!("creating binary heap with capacity hint {}", capacity_hint);
        Self {
            data: Vec::with_capacity(capacity_hint),
            cmp,
        }
    }

    /// Creates an empty heap ordered by `cmp` without reserving storage
    pub fn with_comparator(cmp: C) -> Self {
        Self::new(0, cmp)
    }

    /// Returns the comparator this heap was built with
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns how many elements the heap can hold before reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Removes every element, keeping the comparator
    pub fn clear(&mut self) {
        debug!("clearing binary heap of {} elements", self.data.len());
        self.data.clear();
    }

    /// Inserts an element
    ///
    /// Always succeeds; duplicates are allowed.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn insert(&mut self, element: T) {
        self.data.push(element);
        // The new element is always at the last position
        self.sift_up(self.data.len());
    }

    /// Removes and returns the root, the element that precedes all others
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap holds no elements. The
    /// heap is left unchanged in that case.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn extract_root(&mut self) -> Result<T, HeapError> {
        self.pop_root().ok_or_else(|| {
            debug!("extract_root called on an empty heap");
            HeapError::EmptyHeap
        })
    }

    /// Consumes the heap and returns its elements in extraction order
    ///
    /// The first element is the one `extract_root` would have returned first.
    /// Unlike `std::collections::BinaryHeap::into_sorted_vec`, the order
    /// follows the comparator, so a [`max_heap`](Self::max_heap) yields
    /// descending values.
    ///
    /// ```rust
    /// use comparator_heap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::max_heap(3);
    /// heap.extend([2, 9, 5]);
    /// assert_eq!(heap.into_vec_in_extraction_order(), vec![9, 5, 2]);
    /// ```
    pub fn into_vec_in_extraction_order(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(root) = self.pop_root() {
            sorted.push(root);
        }
        sorted
    }

    /// Checks that no element precedes its parent
    ///
    /// Runs in O(n). Intended for tests and assertions.
    pub fn verify_heap_property(&self) -> bool {
        (2..=self.data.len()).all(|pos| !self.precedes(pos, pos / 2))
    }

    fn pop_root(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        // Moves the last element into the root position and shrinks by one
        let root = self.data.swap_remove(0);

        match self.data.len() {
            0 | 1 => {}
            2 => {
                if self.precedes(2, 1) {
                    self.swap(1, 2);
                }
            }
            _ => self.sift_down(1),
        }

        Some(root)
    }

    /// True if the element at position `a` strictly precedes the one at `b`
    #[inline]
    fn precedes(&self, a: usize, b: usize) -> bool {
        (self.cmp)(&self.data[a - 1], &self.data[b - 1]) == Ordering::Less
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a - 1, b - 1);
    }

    /// Move element at position up while it precedes its parent
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 1 {
            let parent = pos / 2;
            if self.precedes(pos, parent) {
                self.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
        trace!("sift_up settled at position {}", pos);
    }

    /// Move element at position down while a child precedes it
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * pos;
            if left > len {
                break;
            }
            let right = left + 1;

            // Left wins ties so the choice is deterministic
            let child = if right <= len && self.precedes(right, left) {
                right
            } else {
                left
            };

            if self.precedes(child, pos) {
                self.swap(pos, child);
                pos = child;
            } else {
                break;
            }
        }
        trace!("sift_down settled at position {}", pos);
    }
}

impl<T: Ord> BinaryHeap<T, OrdComparator<T>> {
    /// Creates an empty heap that extracts the smallest element first
    pub fn min_heap(capacity_hint: usize) -> Self {
        let cmp: OrdComparator<T> = T::cmp;
        Self::new(capacity_hint, cmp)
    }

    /// Creates an empty heap that extracts the largest element first
    pub fn max_heap(capacity_hint: usize) -> Self {
        let cmp: OrdComparator<T> = |a, b| b.cmp(a);
        Self::new(capacity_hint, cmp)
    }
}

impl<T, C> Queue<T> for BinaryHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn insert(&mut self, element: T) {
        BinaryHeap::insert(self, element)
    }

    fn extract_root(&mut self) -> Result<T, HeapError> {
        BinaryHeap::extract_root(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn clear(&mut self) {
        BinaryHeap::clear(self)
    }

    fn offer(&mut self, _element: T) -> Result<(), HeapError> {
        Err(unsupported(Operation::Offer))
    }

    fn poll(&mut self) -> Result<T, HeapError> {
        Err(unsupported(Operation::Poll))
    }

    fn peek(&self) -> Result<&T, HeapError> {
        Err(unsupported(Operation::Peek))
    }

    fn element(&self) -> Result<&T, HeapError> {
        Err(unsupported(Operation::Element))
    }
}

fn unsupported(op: Operation) -> HeapError {
    debug!("rejected unsupported queue operation `{}`", op);
    HeapError::Unsupported(op)
}

impl<T, C> Extend<T> for BinaryHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
