//! Tagged unions: a choice among alternatives,
//! each of which costs one extra unit of size to choose.

use {
    crate::{
        Error,
        count::Count,
        enumerate::{Enumerate, Enumeration},
    },
    core::fmt,
    num_bigint::BigUint,
    num_traits::Zero as _,
    std::sync::{Arc, PoisonError, RwLock, Weak},
    tracing::{trace, warn},
};

/// A choice among alternatives (usually [`Product`](crate::product::Product)s),
/// in a fixed order.
/// Choosing an alternative costs one unit of size,
/// so a value of size `n` here is a value of size `n - 1` in one alternative.
///
/// Cardinalities are memoized in an append-only table that
/// can be grown concurrently from any number of threads.
pub struct Sum<T> {
    alternatives: Vec<Enumeration<T>>,
    /// `cards[n]` is `card(n)`; entry 0 is a placeholder.
    cards: RwLock<Vec<BigUint>>,
}

/// A handle to a [`Sum`] that is still being defined,
/// so that its own alternatives can refer back to it.
/// Holds only a weak reference, so no reference cycle is formed.
pub struct Recursive<T>(Weak<Sum<T>>);

impl<T> Sum<T> {
    /// A sum with no alternatives (yet): no values of any size.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            alternatives: vec![],
            cards: RwLock::new(vec![BigUint::zero()]),
        }
    }

    /// A sum of exactly these alternatives, in this order.
    #[inline]
    #[must_use]
    pub fn new(alternatives: Vec<Enumeration<T>>) -> Self {
        Self {
            alternatives,
            cards: RwLock::new(vec![BigUint::zero()]),
        }
    }

    /// Define a sum that may refer to itself.
    /// `define` receives a handle to the sum it is about to return
    /// and may hand that handle to any of the alternatives it adds;
    /// the sum is only reachable from outside once `define` has returned,
    /// after which its alternatives are fixed.
    /// # Undefined handles
    /// Querying the handle from within `define` itself sees an empty enumeration
    /// (and decoding from it fails with [`Error::Undefined`]).
    #[inline]
    pub fn recursive<F: FnOnce(Recursive<T>) -> Self>(define: F) -> Arc<Self> {
        Arc::new_cyclic(|this| define(Recursive(this.clone())))
    }

    /// Append an alternative, after every alternative already added.
    /// Any cardinalities memoized so far are forgotten.
    #[inline]
    pub fn add<E: Enumerate<Item = T> + 'static>(&mut self, alternative: E) {
        let () = self.alternatives.push(Arc::new(alternative));
        let cards = self.cards.get_mut().unwrap_or_else(PoisonError::into_inner);
        let () = cards.truncate(1);
    }

    /// Builder-style [`Sum::add`].
    #[inline]
    #[must_use]
    pub fn with<E: Enumerate<Item = T> + 'static>(mut self, alternative: E) -> Self {
        let () = self.add(alternative);
        self
    }

    /// The number of alternatives.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Whether there are no alternatives (and so no values).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// The memoized value for `size`, if any,
    /// or else the smallest size not yet memoized.
    #[inline]
    fn memoized(&self, size: usize) -> Result<BigUint, usize> {
        let cards = self.cards.read().unwrap_or_else(PoisonError::into_inner);
        cards.get(size).cloned().ok_or(cards.len())
    }
}

impl<T> Default for Sum<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for Sum<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let memoized = self
            .cards
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        f.debug_struct("Sum")
            .field("alternatives", &self.alternatives.len())
            .field("memoized", &memoized)
            .finish()
    }
}

impl<T> Count for Sum<T> {
    #[inline]
    fn card(&self, size: usize) -> BigUint {
        if size == 0 {
            return BigUint::zero();
        }
        loop {
            let step = match self.memoized(size) {
                Ok(card) => return card,
                Err(step) => step,
            };
            // No lock is held here: alternatives may well recurse into `self`,
            // but only for sizes below `step`, which are already memoized.
            let card: BigUint = self
                .alternatives
                .iter()
                .map(|alternative| alternative.card(step - 1))
                .sum();
            let mut cards = self.cards.write().unwrap_or_else(PoisonError::into_inner);
            // Another thread may have gotten here first.
            if cards.len() == step {
                trace!(size = step, %card, "memoized sum cardinality");
                let () = cards.push(card);
            }
        }
    }
}

impl<T> Enumerate for Sum<T> {
    type Item = T;

    #[inline]
    fn index(&self, size: usize, index: BigUint) -> Result<Self::Item, Error> {
        if let Some(inner) = size.checked_sub(1) {
            let mut remaining = index.clone();
            for alternative in &self.alternatives {
                let card = alternative.card(inner);
                if remaining < card {
                    return alternative.index(inner, remaining);
                }
                remaining -= card;
            }
        }
        Err(Error::OutOfBounds {
            size,
            index,
            cardinality: self.card(size),
        })
    }
}

impl<T> Clone for Recursive<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> fmt::Debug for Recursive<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Recursive")
            .field(&if self.0.strong_count() == 0 {
                "undefined"
            } else {
                "defined"
            })
            .finish()
    }
}

impl<T> Count for Recursive<T> {
    #[inline]
    fn card(&self, size: usize) -> BigUint {
        if let Some(sum) = self.0.upgrade() {
            sum.card(size)
        } else {
            warn!(size, "counting a recursive enumeration before it was defined");
            BigUint::zero()
        }
    }
}

impl<T> Enumerate for Recursive<T> {
    type Item = T;

    #[inline]
    fn index(&self, size: usize, index: BigUint) -> Result<Self::Item, Error> {
        self.0.upgrade().ok_or(Error::Undefined)?.index(size, index)
    }
}
