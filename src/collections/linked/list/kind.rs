use derive_more::IsVariant;

use super::{Link, Node};

/// The runtime description of a [`Linkage`], returned by
/// [`LinkedList::kind`](super::LinkedList::kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum ListKind {
    /// Nodes link only to the following node.
    Singly,
    /// Nodes link to both the following and preceding nodes.
    Doubly,
}

/// The way that nodes in a [`LinkedList`](super::LinkedList) are linked together. A list's
/// linkage is part of its type, so it can't change over the list's lifetime.
///
/// This trait is sealed, the only implementors are [`Singly`] and [`Doubly`].
pub trait Linkage: sealed::Sealed + Sized {
    /// The kind of list described by this linkage.
    const KIND: ListKind;

    #[doc(hidden)]
    type Prev<T>: Copy;

    #[doc(hidden)]
    fn detached<T>() -> Self::Prev<T>;

    #[doc(hidden)]
    fn prev<T>(node: &Node<T, Self>) -> Link<T, Self>;

    #[doc(hidden)]
    fn set_prev<T>(node: &mut Node<T, Self>, prev: Link<T, Self>);
}

/// Singly linked nodes. Each node stores one link, but removing from the back of the list has to
/// walk from the front to find the new tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Singly;

/// Doubly linked nodes. Both ends of the list can be pushed or popped in `O(1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Doubly;

impl Linkage for Singly {
    const KIND: ListKind = ListKind::Singly;

    type Prev<T> = ();

    fn detached<T>() {}

    fn prev<T>(_node: &Node<T, Self>) -> Link<T, Self> {
        None
    }

    fn set_prev<T>(_node: &mut Node<T, Self>, _prev: Link<T, Self>) {}
}

impl Linkage for Doubly {
    const KIND: ListKind = ListKind::Doubly;

    type Prev<T> = Link<T, Doubly>;

    fn detached<T>() -> Link<T, Doubly> {
        None
    }

    fn prev<T>(node: &Node<T, Self>) -> Link<T, Self> {
        node.prev
    }

    fn set_prev<T>(node: &mut Node<T, Self>, prev: Link<T, Self>) {
        node.prev = prev;
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Singly {}
    impl Sealed for super::Doubly {}
}
