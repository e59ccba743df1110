//! Base cases: enumerations that do not refer to any other enumeration,
//! and so can terminate recursive definitions.

use {
    crate::{Error, count::Count, enumerate::Enumerate},
    num_bigint::BigUint,
    num_traits::{One as _, ToPrimitive as _, Zero as _},
};

/// The natural numbers, where the size of `n` is `n` itself:
/// exactly one value of every size.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[expect(clippy::exhaustive_structs, reason = "unit struct")]
pub struct Naturals;

/// A fixed, finite set of values, all of size zero.
/// Wrapped in a [`Sum`](crate::sum::Sum), each one costs exactly one,
/// which makes this the natural leaf for booleans, unit variants,
/// or small alphabets.
/// # Invariant
/// The values should be pairwise distinct,
/// or the enumeration will not be a bijection.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Elements<T>(Vec<T>);

impl Count for Naturals {
    #[inline]
    fn card(&self, _size: usize) -> BigUint {
        BigUint::one()
    }
}

impl Enumerate for Naturals {
    type Item = usize;

    #[inline]
    fn index(&self, size: usize, index: BigUint) -> Result<Self::Item, Error> {
        if index.is_zero() {
            Ok(size)
        } else {
            Err(Error::OutOfBounds {
                size,
                index,
                cardinality: BigUint::one(),
            })
        }
    }
}

impl<T> Elements<T> {
    /// Enumerate exactly these values, in this order.
    #[inline]
    #[must_use]
    pub const fn new(values: Vec<T>) -> Self {
        Self(values)
    }
}

impl<T> FromIterator<T> for Elements<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> Count for Elements<T> {
    #[inline]
    fn card(&self, size: usize) -> BigUint {
        if size == 0 {
            BigUint::from(self.0.len())
        } else {
            BigUint::zero()
        }
    }
}

impl<T: Clone + Send + Sync> Enumerate for Elements<T> {
    type Item = T;

    #[inline]
    fn index(&self, size: usize, index: BigUint) -> Result<Self::Item, Error> {
        if size == 0
            && let Some(value) = index.to_usize().and_then(|i| self.0.get(i))
        {
            return Ok(value.clone());
        }
        Err(Error::OutOfBounds {
            size,
            cardinality: self.card(size),
            index,
        })
    }
}
