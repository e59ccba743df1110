//! Implementations for shared enumerations (`Arc<_>`),
//! including type-erased ones (`Arc<dyn Enumerate<Item = _>>`).

use {
    crate::{Error, count::Count, enumerate::Enumerate},
    num_bigint::BigUint,
    std::sync::Arc,
};

impl<E: Count + ?Sized> Count for Arc<E> {
    #[inline]
    fn card(&self, size: usize) -> BigUint {
        E::card(&**self, size)
    }
}

impl<E: Enumerate + ?Sized> Enumerate for Arc<E> {
    type Item = E::Item;

    #[inline]
    fn index(&self, size: usize, index: BigUint) -> Result<Self::Item, Error> {
        E::index(&**self, size, index)
    }
}

#[cfg(test)]
mod test {
    use {
        crate::{
            count::Count as _,
            enumerate::{Enumerate as _, Enumeration},
            leaf::Naturals,
        },
        num_bigint::BigUint,
        num_traits::{One as _, Zero as _},
    };

    #[test]
    fn erased_naturals_behave_like_naturals() {
        let erased: Enumeration<usize> = Naturals.shared();
        let () = pretty_assertions::assert_eq!(BigUint::one(), erased.card(12));
        let () = pretty_assertions::assert_eq!(Ok(12), erased.index(12, BigUint::zero()));
    }
}
