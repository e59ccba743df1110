//! Implementations for tuples of components, each of its own type.

use {
    crate::{Error, count::Count, enumerate::Enumerate, product::Components},
    num_bigint::BigUint,
};

/// Take the next (size, index) part, or report how many there were.
#[inline]
fn next_part(
    parts: &mut impl Iterator<Item = (usize, BigUint)>,
    expected: usize,
    found: usize,
) -> Result<(usize, BigUint), Error> {
    parts.next().ok_or(Error::Arity { expected, found })
}

impl Components for () {
    type Values = ();

    #[inline]
    fn counts(&self) -> Vec<&dyn Count> {
        vec![]
    }

    #[inline]
    fn decode(&self, parts: Vec<(usize, BigUint)>) -> Result<Self::Values, Error> {
        if parts.is_empty() {
            Ok(())
        } else {
            Err(Error::Arity {
                expected: 0,
                found: parts.len(),
            })
        }
    }
}

/// Implement `Components` for a tuple of the given
/// type parameters, numbered by field.
macro_rules! impl_tuple {
    ($n:literal: $($t:ident . $i:tt),+) => {
        impl<$($t: Enumerate),+> Components for ($($t,)+) {
            type Values = ($(<$t as Enumerate>::Item,)+);

            #[inline]
            fn counts(&self) -> Vec<&dyn Count> {
                vec![$(&self.$i as &dyn Count),+]
            }

            #[inline]
            fn decode(&self, parts: Vec<(usize, BigUint)>) -> Result<Self::Values, Error> {
                let found = parts.len();
                if found != $n {
                    return Err(Error::Arity { expected: $n, found });
                }
                let mut parts = parts.into_iter();
                Ok(($({
                    let (size, index) = next_part(&mut parts, $n, found)?;
                    self.$i.index(size, index)?
                },)+))
            }
        }
    };
}

impl_tuple!(1: A.0);
impl_tuple!(2: A.0, B.1);
impl_tuple!(3: A.0, B.1, C.2);
impl_tuple!(4: A.0, B.1, C.2, D.3);
impl_tuple!(5: A.0, B.1, C.2, D.3, E.4);
impl_tuple!(6: A.0, B.1, C.2, D.3, E.4, F.5);

#[cfg(test)]
mod test {
    use {
        super::*,
        crate::leaf::{Elements, Naturals},
        num_traits::{One as _, Zero as _},
    };

    #[test]
    fn heterogeneous_decode() {
        let components = (Naturals, Elements::new(vec!['a', 'b']));
        let parts = vec![(7, BigUint::zero()), (0, BigUint::one())];
        let () = pretty_assertions::assert_eq!(Ok((7, 'b')), components.decode(parts));
    }

    #[test]
    fn unit_takes_no_parts() {
        let () = pretty_assertions::assert_eq!(Ok(()), ().decode(vec![]));
        let () = pretty_assertions::assert_eq!(
            Err(Error::Arity {
                expected: 0,
                found: 1,
            }),
            ().decode(vec![(0, BigUint::zero())]),
        );
    }

    #[test]
    fn counts_cover_every_field() {
        let components = (Naturals, Naturals, Naturals);
        let () = pretty_assertions::assert_eq!(3, components.counts().len());
    }
}
