use std::marker::PhantomData;

use super::DynArray;

/// A type-level count of DynArray nesting levels, used to pick how deep
/// [`DynArray::free_nested`] recurses before treating elements as leaves.
pub trait Dimension: sealed::Sealed {
    /// The number of nesting levels described by this type.
    const DIMENSIONS: usize;
}

/// One dimension: the elements of the DynArray are the leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flat;

/// One more dimension than `D`: the elements of the DynArray are themselves DynArrays of `D`
/// dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nested<D>(PhantomData<D>);

impl Dimension for Flat {
    const DIMENSIONS: usize = 1;
}

impl<D: Dimension> Dimension for Nested<D> {
    const DIMENSIONS: usize = D::DIMENSIONS + 1;
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Flat {}
    impl<D: super::Dimension> Sealed for super::Nested<D> {}
}

/// Frees a collection `D` dimensions deep, handing each leaf to a disposer.
pub trait FreeNested<D: Dimension> {
    /// The element type found after descending through every dimension.
    type Leaf;

    /// Consumes self, passing each leaf to `disposer` in order.
    fn free_leaves<F: FnMut(Self::Leaf)>(self, disposer: &mut F);
}

impl<T> FreeNested<Flat> for DynArray<T> {
    type Leaf = T;

    fn free_leaves<F: FnMut(T)>(self, disposer: &mut F) {
        for leaf in self {
            disposer(leaf);
        }
    }
}

impl<T, D> FreeNested<Nested<D>> for DynArray<T>
where
    T: FreeNested<D>,
    D: Dimension,
{
    type Leaf = T::Leaf;

    fn free_leaves<F: FnMut(T::Leaf)>(self, disposer: &mut F) {
        for inner in self {
            FreeNested::<D>::free_leaves(inner, disposer);
        }
    }
}
