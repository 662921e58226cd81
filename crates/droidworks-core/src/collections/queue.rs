//! # Queue
//!
//! First-in-first-out sequence over a singly-linked chain with a tail
//! back-pointer for O(1) enqueue.
//!
//! ```rust
//! use droidworks_core::collections::Queue;
//!
//! let mut queue = Queue::new();
//! queue.enqueue("a");
//! queue.enqueue("b");
//!
//! assert_eq!(queue.dequeue(), Some("a"));
//! assert_eq!(queue.dequeue(), Some("b"));
//! assert_eq!(queue.dequeue(), None);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::node::{self, Iter, Link, Node};

/// FIFO container.
///
/// ## Invariants
/// - `len == 0` exactly when `head` is `None`, exactly when `tail` is `None`
/// - with one element, `head` and `tail` denote the same node
/// - the node behind `tail` always has `next == None`
///
/// `tail` never owns anything. It points into the heap allocation of the
/// last `Box<Node<T>>` in the chain owned by `head`, and is only
/// dereferenced while `&mut self` is held.
pub struct Queue<T> {
    head: Link<T>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Queue {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Whether the queue holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of values in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Appends `value` after the current tail.
    pub fn enqueue(&mut self, value: T) {
        let mut node = Box::new(Node::new(value));
        let new_tail = NonNull::from(&mut *node);

        match self.tail {
            // SAFETY: `tail` points at the last node of the chain owned by
            // `self.head`; that node is alive and nothing else borrows it
            // while we hold `&mut self`.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(new_tail);
        self.len += 1;
    }

    /// Removes and returns the oldest value.
    ///
    /// Returns `None` when the queue is empty. Removing the last value also
    /// clears `tail`, so the next enqueue starts a fresh chain instead of
    /// writing through a pointer to a freed node.
    pub fn dequeue(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;
            node.value
        })
    }

    /// Front value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.tail = None;
        node::unlink_all(self.head.take());
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
