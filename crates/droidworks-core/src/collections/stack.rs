//! # Stack
//!
//! Last-in-first-out sequence over a singly-linked chain.
//!
//! ```rust
//! use droidworks_core::collections::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! stack.push(3);
//!
//! assert_eq!(stack.pop(), Some(3));
//! assert_eq!(stack.pop(), Some(2));
//! assert_eq!(stack.pop(), Some(1));
//! assert_eq!(stack.pop(), None);
//! ```

use std::fmt;

use super::node::{self, Iter, Link, Node};

/// LIFO container.
///
/// ## Invariants
/// - `len == 0` exactly when `head` is `None`
/// - `len` equals the number of nodes reachable from `head`
pub struct Stack<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Stack { head: None, len: 0 }
    }

    /// Whether the stack holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of values on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Pushes `value` on top. Always succeeds.
    pub fn push(&mut self, value: T) {
        let mut node = Box::new(Node::new(value));
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
    }

    /// Removes and returns the most recently pushed value still present.
    ///
    /// Returns `None` when the stack is empty; calling it again keeps
    /// returning `None`.
    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    /// Top value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Iterates from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        node::unlink_all(self.head.take());
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
