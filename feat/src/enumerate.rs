//! Decoding: turning a (size, index) pair into a value, and iterating over values.

use {
    crate::{Error, count::Count},
    num_bigint::BigUint,
    num_traits::{ToPrimitive as _, Zero as _},
    std::sync::Arc,
};

/// Types that can decode any index below `card(size)`
/// into a distinct value of that size.
/// # Invariant
/// For every size `n`, `index(n, ·)` is a bijection between
/// `0..card(n)` and the values of size `n`:
/// no two indices produce equal values, and every value is reachable.
pub trait Enumerate: Count + Send + Sync {
    /// The type of values being enumerated.
    type Item;

    /// Decode the `index`-th value of size `size`.
    /// The order is deterministic but otherwise up to the implementation.
    /// # Errors
    /// If `index >= self.card(size)`.
    fn index(&self, size: usize, index: BigUint) -> Result<Self::Item, Error>;

    /// Erase this enumeration's type so it can sit next to
    /// differently-typed enumerations of the same values.
    #[inline]
    #[must_use]
    fn shared(self) -> Enumeration<Self::Item>
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

/// A shared, type-erased enumeration of `T`s.
pub type Enumeration<T> = Arc<dyn Enumerate<Item = T>>;

/// Every value of one size, in index order.
/// Finite, lazy, and restartable: clone it before consuming
/// (or call [`all`] again) to walk the same values twice.
#[derive(Debug)]
pub struct All<'e, E: ?Sized> {
    enumeration: &'e E,
    size: usize,
    next: BigUint,
    card: BigUint,
}

impl<E: ?Sized> Clone for All<'_, E> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            enumeration: self.enumeration,
            size: self.size,
            next: self.next.clone(),
            card: self.card.clone(),
        }
    }
}

impl<E: Enumerate + ?Sized> Iterator for All<'_, E> {
    type Item = Result<E::Item, Error>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.card {
            return None;
        }
        let index = self.next.clone();
        self.next += 1_u32;
        Some(self.enumeration.index(self.size, index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = &self.card - &self.next;
        remaining
            .to_usize()
            .map_or((usize::MAX, None), |exact| (exact, Some(exact)))
    }
}

/// Every value of size `size`: `index(size, 0)`, `index(size, 1)`, ...,
/// up to but excluding `card(size)`.
#[inline]
#[must_use]
pub fn all<E: Enumerate + ?Sized>(enumeration: &E, size: usize) -> All<'_, E> {
    All {
        enumeration,
        size,
        next: BigUint::zero(),
        card: enumeration.card(size),
    }
}

/// Every value of every size, smallest first:
/// the same sequence as `ix(enumeration, 0)`, `ix(enumeration, 1)`, ...
/// Never ends, even if the enumeration is finite
/// (it will keep checking ever larger sizes for values).
#[inline]
pub fn values<E: Enumerate + ?Sized>(
    enumeration: &E,
) -> impl Iterator<Item = Result<E::Item, Error>> + '_ {
    (0..=usize::MAX).flat_map(move |size| all(enumeration, size))
}
