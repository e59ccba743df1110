//! Implementations for vectors (`Vec<_>`) of components, all of one type.

use {
    crate::{Error, count::Count, enumerate::Enumerate, product::Components},
    num_bigint::BigUint,
};

impl<E: Enumerate> Components for Vec<E> {
    type Values = Vec<E::Item>;

    #[inline]
    fn counts(&self) -> Vec<&dyn Count> {
        self.iter().map(|component| component as &dyn Count).collect()
    }

    #[inline]
    fn decode(&self, parts: Vec<(usize, BigUint)>) -> Result<Self::Values, Error> {
        if parts.len() != self.len() {
            return Err(Error::Arity {
                expected: self.len(),
                found: parts.len(),
            });
        }
        self.iter()
            .zip(parts)
            .map(|(component, (size, index))| component.index(size, index))
            .collect()
    }
}
