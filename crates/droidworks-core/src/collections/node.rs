//! Link cell shared by [`Stack`](super::Stack) and [`Queue`](super::Queue).

/// Owning link to the next cell.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single payload plus the link that owns its successor.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Node { value, next: None }
    }
}

/// Releases a chain front to back.
///
/// The derived drop of `Box<Node<T>>` recurses once per node, which
/// overflows the thread stack on long chains.
pub(crate) fn unlink_all<T>(mut link: Link<T>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

/// Borrowing iterator over a chain, head first.
pub(crate) struct Iter<'a, T> {
    pub(crate) next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlink_long_chain() {
        let mut head: Link<u32> = None;
        for i in 0..200_000 {
            let mut node = Box::new(Node::new(i));
            node.next = head;
            head = Some(node);
        }
        unlink_all(head);
    }

    #[test]
    fn test_iter_follows_links() {
        let mut tail = Box::new(Node::new(2));
        tail.next = None;
        let mut head = Box::new(Node::new(1));
        head.next = Some(tail);

        let iter = Iter { next: Some(&*head) };
        assert_eq!(iter.copied().collect::<Vec<_>>(), vec![1, 2]);
    }
}
