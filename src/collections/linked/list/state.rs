use std::num::NonZero;

use derive_more::IsVariant;

use super::{Link, Linkage, ListKind, NodePtr};

/// The length of a non-empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Length(NonZero<usize>);

impl Length {
    pub const ONE: Length = Length(NonZero::<usize>::MIN);

    pub const fn get(self) -> usize {
        self.0.get()
    }

    pub const fn incremented(self) -> Length {
        // Every node is a separate allocation of non-zero size, so a list can't hold usize::MAX
        // of them.
        Length(self.0.saturating_add(1))
    }

    pub const fn decremented(self) -> Option<Length> {
        match NonZero::new(self.0.get() - 1) {
            Some(len) => Some(Length(len)),
            None => None,
        }
    }
}

/// The links of a list, which has either no nodes or both a head and a tail.
#[derive(IsVariant)]
pub(crate) enum ListState<T, K: Linkage> {
    Empty,
    Full(ListContents<T, K>),
}

use ListState::*;

pub(crate) struct ListContents<T, K: Linkage> {
    pub len: Length,
    pub head: NodePtr<T, K>,
    pub tail: NodePtr<T, K>,
}

impl<T, K: Linkage> ListState<T, K> {
    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    pub fn head(&self) -> Link<T, K> {
        match self {
            Empty => None,
            Full(ListContents { head, .. }) => Some(*head),
        }
    }

    pub fn tail(&self) -> Link<T, K> {
        match self {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(*tail),
        }
    }

    /// Links a detached node in as the new head.
    pub fn link_front(&mut self, node: NodePtr<T, K>) {
        *self = match *self {
            Empty => Full(ListContents::single(node)),
            Full(ListContents { len, head, tail }) => {
                node.set_next(Some(head));
                head.set_prev(Some(node));
                Full(ListContents { len: len.incremented(), head: node, tail })
            },
        }
    }

    /// Links a detached node in as the new tail.
    pub fn link_back(&mut self, node: NodePtr<T, K>) {
        *self = match *self {
            Empty => Full(ListContents::single(node)),
            Full(ListContents { len, head, tail }) => {
                tail.set_next(Some(node));
                node.set_prev(Some(tail));
                Full(ListContents { len: len.incremented(), head, tail: node })
            },
        }
    }

    /// Unlinks and returns the head node, detached.
    pub fn unlink_front(&mut self) -> Link<T, K> {
        let head = self.head()?;
        self.unlink(None, head);
        Some(head)
    }

    /// Unlinks and returns the tail node, detached. For singly linked lists this walks the list
    /// to find the new tail.
    pub fn unlink_back(&mut self) -> Link<T, K> {
        let tail = self.tail()?;
        self.unlink(self.predecessor(tail), tail);
        Some(tail)
    }

    /// Unlinks `node`, given the node before it (or None if it is the head), and detaches it.
    pub fn unlink(&mut self, prev: Link<T, K>, node: NodePtr<T, K>) {
        let Full(ListContents { len, head, tail }) = *self else {
            return;
        };
        let next = node.next();

        if let Some(prev) = prev {
            prev.set_next(next);
        }
        if let Some(next) = next {
            next.set_prev(prev);
        }

        let new_head = if prev.is_none() { next } else { Some(head) };
        let new_tail = if next.is_none() { prev } else { Some(tail) };

        *self = match (len.decremented(), new_head, new_tail) {
            (Some(len), Some(head), Some(tail)) => Full(ListContents { len, head, tail }),
            _ => Empty,
        };
        node.detach();
    }

    /// Returns the node before `node`, which must be in this list.
    pub fn predecessor(&self, node: NodePtr<T, K>) -> Link<T, K> {
        match K::KIND {
            ListKind::Doubly => node.prev(),
            ListKind::Singly => {
                let mut curr = self.head()?;
                let mut prev = None;
                while curr != node {
                    prev = Some(curr);
                    curr = curr.next()?;
                }
                prev
            },
        }
    }
}

impl<T, K: Linkage> ListContents<T, K> {
    pub fn single(node: NodePtr<T, K>) -> ListContents<T, K> {
        ListContents {
            len: Length::ONE,
            head: node,
            tail: node,
        }
    }
}

impl<T, K: Linkage> Clone for ListContents<T, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, K: Linkage> Copy for ListContents<T, K> {}

impl<T, K: Linkage> Clone for ListState<T, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, K: Linkage> Copy for ListState<T, K> {}
