//! Constructors: a builder function applied to one value from each of
//! a fixed sequence of component enumerations.
//!
//! The size of a product is the sum of its components' sizes.
//! Counting values of size `n` is a discrete convolution over
//! every way to split `n` among the components, and decoding an index
//! is the matching mixed-radix decode: peel off one component at a time,
//! first finding how much size it used, then which of its values it is.

use {
    crate::{Error, count::Count, enumerate::Enumerate},
    core::fmt,
    num_bigint::BigUint,
    num_traits::{One as _, Zero as _},
    std::sync::{PoisonError, RwLock},
    tracing::trace,
};

/// An ordered, fixed-length collection of component enumerations.
/// Implemented for tuples (heterogeneous components) and
/// for `Vec`s (any number of components of the same type).
pub trait Components: Send + Sync {
    /// One value from each component, in order.
    type Values;

    /// Every component, type-erased down to counting.
    #[must_use]
    fn counts(&self) -> Vec<&dyn Count>;

    /// Decode one value from each component.
    /// # Errors
    /// If any component rejects its (size, index) part,
    /// or if the number of parts does not match the number of components.
    fn decode(&self, parts: Vec<(usize, BigUint)>) -> Result<Self::Values, Error>;
}

/// A constructor: `build` applied to one value from each component.
pub struct Product<C, F> {
    components: C,
    build: F,
    arity: usize,
    /// `cs[k][n]` is the number of values of size `n`
    /// of the product of components `k..`.
    /// Only used for arities of at least two.
    cs: RwLock<Vec<Vec<BigUint>>>,
}

impl<C: Components, F> Product<C, F> {
    /// Build values by applying `build` to one value from each component.
    #[inline]
    #[must_use]
    pub fn new<T>(components: C, build: F) -> Self
    where
        F: Fn(C::Values) -> T,
    {
        let arity = components.counts().len();
        Self {
            components,
            build,
            arity,
            cs: RwLock::new(vec![vec![]; arity]),
        }
    }

    /// The number of components.
    #[inline]
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Memoize cardinalities for every size up to and including `size`.
    /// Already-memoized sizes are never recomputed.
    #[inline]
    #[expect(
        clippy::indexing_slicing,
        reason = "every row holds exactly `next` entries"
    )]
    fn expand(&self, size: usize) {
        let counts = self.components.counts();
        let Some((last, init)) = counts.split_last() else {
            return;
        };
        loop {
            let next = {
                let cs = self.cs.read().unwrap_or_else(PoisonError::into_inner);
                let next = cs.first().map_or(0, Vec::len);
                if next > size {
                    return;
                }
                next
            };

            // Ask the components first, without holding the lock,
            // since a component may be a recursive reference to a sum containing `self`.
            let init_cards: Vec<Vec<BigUint>> = init
                .iter()
                .map(|component| (0..=next).map(|s| component.card(s)).collect())
                .collect();
            let last_card = last.card(next);

            let column = {
                let cs = self.cs.read().unwrap_or_else(PoisonError::into_inner);
                let mut column = vec![BigUint::zero(); self.arity];
                let mut later = last_card;
                for (k, cards) in init_cards.iter().enumerate().rev() {
                    let mut acc = BigUint::zero();
                    for (t, card) in cards.iter().rev().enumerate() {
                        // `card` is `counts[k].card(next - t)`.
                        let rest = if t == next { &later } else { &cs[k + 1][t] };
                        acc += rest * card;
                    }
                    if let Some(slot) = column.get_mut(k + 1) {
                        *slot = later;
                    }
                    later = acc;
                }
                if let Some(slot) = column.first_mut() {
                    *slot = later;
                }
                column
            };

            let mut cs = self.cs.write().unwrap_or_else(PoisonError::into_inner);
            if cs.first().map_or(0, Vec::len) == next {
                trace!(size = next, arity = self.arity, "expanded product cardinality matrix");
                for (row, card) in cs.iter_mut().zip(column) {
                    let () = row.push(card);
                }
            }
        }
    }

    /// A memoized entry of the cardinality matrix.
    #[inline]
    fn cell(&self, k: usize, size: usize) -> BigUint {
        let cs = self.cs.read().unwrap_or_else(PoisonError::into_inner);
        cs.get(k)
            .and_then(|row| row.get(size))
            .cloned()
            .unwrap_or_default()
    }

    /// Split a total size and index into one (size, index) part per component.
    /// # Errors
    /// If `index >= self.card(size)`.
    #[inline]
    pub fn split(&self, size: usize, index: BigUint) -> Result<Vec<(usize, BigUint)>, Error> {
        let out_of_bounds = |index| Error::OutOfBounds {
            size,
            index,
            cardinality: self.card(size),
        };
        match self.arity {
            0 => {
                return if size == 0 && index.is_zero() {
                    Ok(vec![])
                } else {
                    Err(out_of_bounds(index))
                };
            }
            1 => return Ok(vec![(size, index)]),
            _ => {}
        }

        let () = self.expand(size);
        if index >= self.cell(0, size) {
            return Err(out_of_bounds(index));
        }

        let counts = self.components.counts();
        let mut parts = Vec::with_capacity(self.arity);
        let mut remaining = size;
        let mut i = index.clone();
        for (k, component) in counts.iter().take(self.arity - 1).enumerate() {
            // Find how much size this component takes:
            // each candidate `esize` owns a contiguous block of
            // `card(esize) * (ways to spend the rest on later components)` indices.
            let mut esize = 0;
            let mut card = component.card(esize);
            let mut block = &card * self.cell(k + 1, remaining);
            while i >= block {
                i -= &block;
                esize += 1;
                if esize > remaining {
                    return Err(out_of_bounds(index));
                }
                card = component.card(esize);
                block = &card * self.cell(k + 1, remaining - esize);
            }
            remaining -= esize;

            // Within that block, the low "digit" picks this component's value
            // and the high "digit" carries over to the later components.
            let local = &i % &card;
            i /= &card;
            let () = parts.push((esize, local));
        }
        let () = parts.push((remaining, i));
        Ok(parts)
    }
}

impl<C, F> fmt::Debug for Product<C, F> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let memoized = self
            .cs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .first()
            .map_or(0, Vec::len);
        f.debug_struct("Product")
            .field("arity", &self.arity)
            .field("memoized", &memoized)
            .finish_non_exhaustive()
    }
}

impl<C: Components, F> Count for Product<C, F> {
    #[inline]
    fn card(&self, size: usize) -> BigUint {
        match self.arity {
            0 => {
                if size == 0 {
                    BigUint::one()
                } else {
                    BigUint::zero()
                }
            }
            1 => self
                .components
                .counts()
                .first()
                .map_or_else(BigUint::zero, |component| component.card(size)),
            _ => {
                let () = self.expand(size);
                self.cell(0, size)
            }
        }
    }
}

impl<C: Components, F: Fn(C::Values) -> T + Send + Sync, T> Enumerate for Product<C, F> {
    type Item = T;

    #[inline]
    fn index(&self, size: usize, index: BigUint) -> Result<Self::Item, Error> {
        let parts = self.split(size, index)?;
        Ok((self.build)(self.components.decode(parts)?))
    }
}

/// A constructor of one argument: `f` applied to each value of `component`,
/// at the same size and index.
#[inline]
#[must_use]
pub fn map<E: Enumerate, T, F: Fn(E::Item) -> T + Send + Sync>(
    component: E,
    f: F,
) -> Product<(E,), impl Fn((E::Item,)) -> T + Send + Sync> {
    Product::new((component,), move |(value,)| f(value))
}

/// A constructor of no arguments: exactly one value,
/// of size zero (so of size one once chosen from a [`Sum`](crate::sum::Sum)).
#[inline]
#[must_use]
pub fn nullary<T: Clone + Send + Sync>(
    value: T,
) -> Product<(), impl Fn(()) -> T + Send + Sync> {
    Product::new((), move |()| value.clone())
}

#[cfg(test)]
mod test {
    use {
        super::*,
        crate::{
            enumerate,
            leaf::{Elements, Naturals},
        },
        std::collections::HashSet,
    };

    fn binomial(n: u64, k: u64) -> BigUint {
        (0..k).fold(BigUint::one(), |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn nullary_lives_at_size_zero() {
        let unit = nullary("unit");
        let () = pretty_assertions::assert_eq!(0, unit.arity());
        let () = pretty_assertions::assert_eq!(BigUint::one(), unit.card(0));
        let () = pretty_assertions::assert_eq!(BigUint::zero(), unit.card(1));
        let () = pretty_assertions::assert_eq!(Ok("unit"), unit.index(0, BigUint::zero()));
        let () = pretty_assertions::assert_eq!(
            Err(Error::OutOfBounds {
                size: 1,
                index: BigUint::zero(),
                cardinality: BigUint::zero(),
            }),
            unit.index(1, BigUint::zero()),
        );
    }

    #[test]
    fn unary_delegates_to_its_component() {
        let doubled = map(Naturals, |n| 2 * n);
        let () = pretty_assertions::assert_eq!(1, doubled.arity());
        let () = pretty_assertions::assert_eq!(BigUint::one(), doubled.card(9));
        let () = pretty_assertions::assert_eq!(Ok(18), doubled.index(9, BigUint::zero()));
        let () = pretty_assertions::assert_eq!(
            Err(Error::OutOfBounds {
                size: 9,
                index: BigUint::one(),
                cardinality: BigUint::one(),
            }),
            doubled.index(9, BigUint::one()),
        );
    }

    #[test]
    fn pairs_of_naturals_split_size() {
        let pairs = Product::new((Naturals, Naturals), |pair| pair);
        let values: Result<Vec<_>, _> = enumerate::all(&pairs, 3).collect();
        let () = pretty_assertions::assert_eq!(Ok(vec![(0, 3), (1, 2), (2, 1), (3, 0)]), values);
    }

    #[test]
    fn triples_follow_the_convolution_law() {
        let triples = Product::new(vec![Naturals; 3], |triple| triple);
        let pairs = Product::new(vec![Naturals; 2], |pair| pair);
        let () = pretty_assertions::assert_eq!(3, triples.arity());
        let () = pretty_assertions::assert_eq!(2, pairs.arity());
        for size in 0..30_usize {
            let convolution: BigUint = (0..=size)
                .map(|first| Naturals.card(first) * pairs.card(size - first))
                .sum();
            let () = pretty_assertions::assert_eq!(convolution, triples.card(size));
            let () = pretty_assertions::assert_eq!(
                binomial(size as u64 + 2, 2),
                triples.card(size)
            );
        }
    }

    #[test]
    fn triples_are_a_bijection() {
        let triples = Product::new(vec![Naturals; 3], |triple| triple);
        for size in 0..12 {
            let values: Vec<Vec<usize>> = enumerate::all(&triples, size)
                .collect::<Result<_, _>>()
                .unwrap();
            let distinct: HashSet<_> = values.iter().cloned().collect();
            let () = pretty_assertions::assert_eq!(values.len(), distinct.len());
            for triple in &values {
                let () = pretty_assertions::assert_eq!(size, triple.iter().sum::<usize>());
            }
        }
    }

    #[test]
    fn zero_cardinality_components_are_skipped() {
        // Booleans exist only at size zero, so all of the size goes to the natural.
        let bools: Elements<bool> = [false, true].into_iter().collect();
        let tagged = Product::new((bools, Naturals, Naturals), |triple| triple);
        let () = pretty_assertions::assert_eq!(BigUint::from(6_u8), tagged.card(2));
        let values: Result<Vec<_>, _> = enumerate::all(&tagged, 2).collect();
        let () = pretty_assertions::assert_eq!(
            Ok(vec![
                (false, 0, 2),
                (true, 0, 2),
                (false, 1, 1),
                (true, 1, 1),
                (false, 2, 0),
                (true, 2, 0),
            ]),
            values,
        );
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let pairs = Product::new((Naturals, Naturals), |pair| pair);
        let () = pretty_assertions::assert_eq!(
            Err(Error::OutOfBounds {
                size: 3,
                index: BigUint::from(4_u8),
                cardinality: BigUint::from(4_u8),
            }),
            pairs.index(3, BigUint::from(4_u8)),
        );
    }

    #[test]
    fn memoization_is_monotonic() {
        let pairs = Product::new((Naturals, Naturals), |pair| pair);
        let large = pairs.card(40);
        let small = pairs.card(3);
        let () = pretty_assertions::assert_eq!(BigUint::from(41_u8), large);
        let () = pretty_assertions::assert_eq!(BigUint::from(4_u8), small);
        let () = pretty_assertions::assert_eq!(large, pairs.card(40));
    }
}
