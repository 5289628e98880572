//! Queue capability and error types
//!
//! [`Queue`] describes the generic queue capability a priority queue may offer.
//! [`BinaryHeap`](crate::binary::BinaryHeap) implements only the ordered
//! members (`insert` and `extract_root`); the non-ordered members (`offer`,
//! `poll`, `peek`, `element`) are part of the contract so that callers written
//! against a general queue fail loudly with [`HeapError::Unsupported`] instead
//! of silently observing the wrong order.

use std::fmt;

/// A queue member that an implementation may decline to support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// [`Queue::offer`]
    Offer,
    /// [`Queue::poll`]
    Poll,
    /// [`Queue::peek`]
    Peek,
    /// [`Queue::element`]
    Element,
}

impl Operation {
    /// The method name of this operation
    pub fn name(self) -> &'static str {
        match self {
            Operation::Offer => "offer",
            Operation::Poll => "poll",
            Operation::Peek => "peek",
            Operation::Element => "element",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The root was requested from a heap with no elements
    EmptyHeap,
    /// The queue member is not implemented by this structure
    Unsupported(Operation),
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "cannot extract the root of an empty heap"),
            HeapError::Unsupported(op) => write!(f, "operation `{}` is not supported", op),
        }
    }
}

impl std::error::Error for HeapError {}

/// Generic queue capability
///
/// Implementors that keep elements in priority order provide `insert` and
/// `extract_root`. The remaining members come from the broader queue contract;
/// an implementor that cannot honour them returns
/// [`HeapError::Unsupported`] every time, regardless of its state.
///
/// # Example
///
/// ```rust
/// use comparator_heap::{BinaryHeap, HeapError, Operation, Queue};
///
/// let mut heap = BinaryHeap::min_heap(4);
/// Queue::insert(&mut heap, 7);
/// assert_eq!(heap.peek(), Err(HeapError::Unsupported(Operation::Peek)));
/// assert_eq!(Queue::extract_root(&mut heap), Ok(7));
/// ```
pub trait Queue<T> {
    /// Inserts an element, keeping the queue ordered
    ///
    /// Always succeeds; duplicates are allowed.
    fn insert(&mut self, element: T);

    /// Removes and returns the highest-priority element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the queue holds no elements.
    fn extract_root(&mut self) -> Result<T, HeapError>;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element
    fn clear(&mut self);

    /// Adds an element without an ordering guarantee
    fn offer(&mut self, element: T) -> Result<(), HeapError>;

    /// Removes the head of the queue
    fn poll(&mut self) -> Result<T, HeapError>;

    /// Returns the head of the queue without removing it
    fn peek(&self) -> Result<&T, HeapError>;

    /// Returns the head of the queue, failing rather than yielding nothing
    fn element(&self) -> Result<&T, HeapError>;
}
