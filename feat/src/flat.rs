//! Indexing without a size: one flat index over every size at once,
//! smallest sizes first.

use {
    crate::{Error, enumerate::Enumerate},
    num_bigint::BigUint,
    tracing::debug,
};

/// The `index`-th value over all sizes, smallest first:
/// find the size `n` with `card(0) + ... + card(n - 1) <= index < card(0) + ... + card(n)`,
/// then decode the remainder at that size.
/// # Termination
/// If `index` is past the last value of a finite enumeration,
/// this keeps checking ever larger sizes and effectively never returns.
/// Use [`ix_within`] to bound the search.
/// # Errors
/// If the enumeration fails to decode the index it reports as in bounds.
#[inline]
pub fn ix<E: Enumerate + ?Sized>(enumeration: &E, index: BigUint) -> Result<E::Item, Error> {
    ix_within(enumeration, index, usize::MAX)
}

/// Like [`ix`], but gives up after size `max_size`.
/// # Errors
/// [`Error::Unreachable`] if sizes `0..=max_size` hold `index` or fewer values in total.
#[inline]
pub fn ix_within<E: Enumerate + ?Sized>(
    enumeration: &E,
    index: BigUint,
    max_size: usize,
) -> Result<E::Item, Error> {
    let mut remaining = index.clone();
    for size in 0..=max_size {
        let card = enumeration.card(size);
        if remaining < card {
            debug!(size, %index, "resolved flat index");
            return enumeration.index(size, remaining);
        }
        remaining -= card;
    }
    Err(Error::Unreachable { index, max_size })
}

#[cfg(test)]
mod test {
    use {
        super::*,
        crate::{
            enumerate,
            leaf::{Elements, Naturals},
            list::list_of,
            sum::Sum,
        },
        num_traits::Zero as _,
    };

    #[test]
    fn naturals_are_their_own_flat_index() {
        for n in 0..50_usize {
            let () = pretty_assertions::assert_eq!(Ok(n), ix(&Naturals, BigUint::from(n)));
        }
    }

    #[test]
    fn flat_zero_is_the_first_value_of_the_first_inhabited_size() {
        let lists = list_of(Naturals);
        let () = pretty_assertions::assert_eq!(
            lists.index(1, BigUint::zero()),
            ix(&*lists, BigUint::zero()),
        );
    }

    #[test]
    fn flat_indices_follow_size_order() {
        let lists = list_of(Naturals);
        let flat: Result<Vec<_>, _> = (0..5_u8)
            .map(|i| ix(&*lists, BigUint::from(i)).map(|list| list.to_vec()))
            .collect();
        let () = pretty_assertions::assert_eq!(
            Ok(vec![vec![], vec![0], vec![0, 0], vec![1], vec![0, 0, 0]]),
            flat,
        );
        let sized: Result<Vec<_>, _> = enumerate::values(&*lists)
            .take(5)
            .map(|list| list.map(|list| list.to_vec()))
            .collect();
        let () = pretty_assertions::assert_eq!(flat, sized);
    }

    #[test]
    fn finite_enumerations_run_out() {
        let bools = Sum::empty().with(Elements::new(vec![false, true]));
        let () = pretty_assertions::assert_eq!(Ok(true), ix_within(&bools, BigUint::from(1_u8), 10));
        let () = pretty_assertions::assert_eq!(
            Err(Error::Unreachable {
                index: BigUint::from(2_u8),
                max_size: 10,
            }),
            ix_within(&bools, BigUint::from(2_u8), 10),
        );
    }
}
