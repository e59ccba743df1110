//! Functional enumeration of algebraic types:
//! count the values of each size of a (possibly recursive) sum of products,
//! and decode any index below that count into a distinct value of that size.

pub mod count;
pub mod enumerate;
pub mod flat;
pub mod leaf;
pub mod list;
pub mod product;
pub mod sum;

mod error;
mod impls;

pub use error::Error;

/// Exhaustively search for the smallest value satisfying a predicate,
/// trying every value of size 0, then every value of size 1, and so on,
/// each size in index order.
/// # Errors
/// [`Error::NotFound`] if no value up to and including `max_size` satisfies `predicate`.
/// Note that this does *not* mean that no larger one exists.
#[inline]
pub fn witness<E: enumerate::Enumerate + ?Sized, P: Fn(&E::Item) -> bool>(
    enumeration: &E,
    max_size: usize,
    predicate: P,
) -> Result<E::Item, Error> {
    for size in 0..=max_size {
        for value in enumerate::all(enumeration, size) {
            let value = value?;
            if predicate(&value) {
                return Ok(value);
            }
        }
    }
    Err(Error::NotFound { max_size })
}

#[cfg(test)]
#[expect(
    clippy::print_stdout,
    clippy::use_debug,
    reason = "failing tests ought to panic and be debugged"
)]
mod test {
    use {
        super::*,
        crate::{
            leaf::Naturals,
            list::{List, list_of},
        },
    };

    #[test]
    fn witness_42_exists() {
        let witness = witness(&Naturals, 100, |&n| {
            print!("{n:?}");
            let success = n == 42;
            println!(" {}", if success { 'Y' } else { 'N' });
            success
        });
        let () = pretty_assertions::assert_eq!(Ok(42), witness);
    }

    #[test]
    fn witness_not_found_within_bound() {
        let witness = witness(&Naturals, 10, |&n| n > 10);
        let () = pretty_assertions::assert_eq!(Err(Error::NotFound { max_size: 10 }), witness);
    }

    #[test]
    fn witness_list_of_at_least_3_elements() {
        let lists = list_of(Naturals);
        let witness = witness(&*lists, 20, |list: &List<usize>| {
            print!("{list:?}");
            let success = list.len() >= 3;
            println!(" {}", if success { 'Y' } else { 'N' });
            success
        });
        let () = pretty_assertions::assert_eq!(
            Ok(vec![0, 0, 0]),
            witness.map(|list| list.to_vec())
        );
    }
}
