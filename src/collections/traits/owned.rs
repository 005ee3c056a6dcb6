/// A collection that exclusively owns its elements.
///
/// Elements leave an OwnedCollection in one of three ways: they are moved out to the caller
/// (pop, remove, etc.), they are dropped along with the collection, or they are handed to a
/// disposer closure by [`drain_with`](OwnedCollection::drain_with) /
/// [`free_with`](OwnedCollection::free_with). A disposer is only needed when tearing down an
/// element requires more than its [`Drop`] implementation, such as returning it to a pool.
///
/// Copying is split out into [`CopyCollection`], because some collections can only be copied
/// when their other parts, such as a hasher, can be cloned.
pub trait OwnedCollection: Sized {
    /// The type of element owned by the collection.
    type Element;

    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns true if the collection contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element, passing each to `disposer` in the collection's iteration order. The
    /// collection is left empty but remains usable.
    fn drain_with<D: FnMut(Self::Element)>(&mut self, disposer: D);

    /// Removes and drops every element.
    fn clear(&mut self) {
        self.drain_with(drop)
    }

    /// Consumes the collection, passing every element to `disposer` before the collection's own
    /// storage is released.
    fn free_with<D: FnMut(Self::Element)>(mut self, disposer: D) {
        self.drain_with(disposer);
    }
}

/// An [`OwnedCollection`] which can be copied element by element.
///
/// Copies never share elements. [`copy_with`](CopyCollection::copy_with) builds an independent
/// collection with the same shape, producing each element with the provided closure.
pub trait CopyCollection: OwnedCollection {
    /// The error produced when a copy can't be allocated.
    type CopyError;

    /// Creates an independent copy of the collection, producing each element by calling `copier`
    /// on the corresponding element of self.
    fn copy_with<C: FnMut(&Self::Element) -> Self::Element>(
        &self,
        copier: C,
    ) -> Result<Self, Self::CopyError>;
}
