#![allow(
    clippy::missing_panics_doc,
    clippy::tests_outside_test_module,
    reason = "testing-only module"
)]

use {
    core::{fmt, hash::Hash},
    feat::{
        count::Count as _,
        enumerate::{self, Enumerate},
        flat,
        leaf::Naturals,
        list::list_of,
        product::{self, Product},
        sum::Sum,
    },
    num_bigint::BigUint,
    num_traits::{ToPrimitive as _, Zero as _},
    std::{collections::HashSet, sync::Arc, thread},
};

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Peano {
    O,
    S(Box<Self>),
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Tree {
    Leaf,
    Node(Box<Self>, Box<Self>),
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NatOrList {
    Nat(usize),
    List(Vec<usize>),
}

impl Peano {
    #[inline]
    #[must_use]
    pub fn from_usize(n: usize) -> Self {
        let mut acc = Self::O;
        for _ in 0..n {
            acc = Self::S(Box::new(acc));
        }
        acc
    }
}

impl Tree {
    /// Number of internal nodes.
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> usize {
        match *self {
            Self::Leaf => 0,
            Self::Node(ref lhs, ref rhs) => 1 + lhs.nodes() + rhs.nodes(),
        }
    }
}

/// `O` has size 1, and `S(p)` has size one more than `p`.
#[inline]
#[must_use]
pub fn peano() -> Arc<Sum<Peano>> {
    Sum::recursive(|this| {
        Sum::empty()
            .with(product::nullary(Peano::O))
            .with(product::map(this, |pred| Peano::S(Box::new(pred))))
    })
}

/// A leaf has size 1, and a node has size one more than its subtrees combined.
#[inline]
#[must_use]
pub fn trees() -> Arc<Sum<Tree>> {
    Sum::recursive(|this| {
        Sum::empty()
            .with(product::nullary(Tree::Leaf))
            .with(Product::new((this.clone(), this), |(lhs, rhs)| {
                Tree::Node(Box::new(lhs), Box::new(rhs))
            }))
    })
}

/// Either a natural or a list of naturals.
#[inline]
#[must_use]
pub fn nat_or_list() -> Sum<NatOrList> {
    Sum::empty()
        .with(product::map(Naturals, NatOrList::Nat))
        .with(product::map(list_of(Naturals), |list| {
            NatOrList::List(list.to_vec())
        }))
}

/// Check that every index below `card(size)` decodes to a distinct value
/// for every size up to and including `max_size`.
/// # Panics
/// If that's not the case.
#[inline]
#[expect(clippy::panic, reason = "failing tests ought to panic")]
pub fn check_bijection<E>(enumeration: &E, max_size: usize)
where
    E: Enumerate + ?Sized,
    E::Item: fmt::Debug + Eq + Hash,
{
    for size in 0..=max_size {
        let card = enumeration.card(size);
        let mut seen = HashSet::new();
        for (i, value) in enumerate::all(enumeration, size).enumerate() {
            let value = match value {
                Ok(value) => value,
                Err(e) => panic!("size {size}, index {i} of {card}: {e}"),
            };
            if let Some(duplicate) = seen.replace(value) {
                panic!("size {size}, index {i} of {card}: {duplicate:?} was already decoded");
            }
        }
        let () = pretty_assertions::assert_eq!(Some(seen.len()), card.to_usize());
    }
}

/// The `n`th Catalan number.
fn catalan(n: u64) -> BigUint {
    (0..n).fold(BigUint::from(1_u8), |acc, i| acc * (2 * (2 * i + 1)) / (i + 2))
}

#[test]
fn peano_has_one_value_per_positive_size() {
    let peano = peano();
    let () = pretty_assertions::assert_eq!(BigUint::zero(), peano.card(0));
    for size in 1..50 {
        let () = pretty_assertions::assert_eq!(BigUint::from(1_u8), peano.card(size));
        let () = pretty_assertions::assert_eq!(
            Ok(Peano::from_usize(size - 1)),
            peano.index(size, BigUint::zero())
        );
    }
}

#[test]
fn trees_are_counted_by_catalan_numbers() {
    let trees = trees();
    for size in 0..60_u64 {
        let expected = if size % 2 == 1 {
            catalan(size / 2)
        } else {
            BigUint::zero()
        };
        let () = pretty_assertions::assert_eq!(expected, trees.card(size as usize));
    }
}

#[test]
fn tree_sizes_are_respected() {
    let trees = trees();
    for size in [1, 3, 5, 7, 9] {
        for tree in enumerate::all(&*trees, size) {
            let tree = tree.unwrap();
            let () = pretty_assertions::assert_eq!(size, 2 * tree.nodes() + 1);
        }
    }
}

#[test]
fn bijections() {
    let () = check_bijection(&*peano(), 30);
    let () = check_bijection(&*trees(), 13);
    let () = check_bijection(&*list_of(Naturals), 12);
    let () = check_bijection(&nat_or_list(), 12);
}

#[test]
fn sum_cardinality_is_the_sum_of_its_alternatives() {
    let sum = nat_or_list();
    let lists = list_of(Naturals);
    for size in 1..=40 {
        let () = pretty_assertions::assert_eq!(
            Naturals.card(size - 1) + lists.card(size - 1),
            sum.card(size),
        );
    }
    let () = pretty_assertions::assert_eq!(BigUint::from(129_u8), sum.card(10));
}

#[test]
fn lists_of_trees_nest() {
    let forests = list_of(trees());
    // A forest of `k` trees with `m` nodes in total has size `1 + k + (k + 2m)`.
    let () = pretty_assertions::assert_eq!(BigUint::from(1_u8), forests.card(1));
    let () = pretty_assertions::assert_eq!(BigUint::zero(), forests.card(2));
    let () = pretty_assertions::assert_eq!(BigUint::from(1_u8), forests.card(3));
    let () = check_bijection(&*forests, 12);
}

#[test]
fn flat_zero_is_the_smallest_value() {
    let () = pretty_assertions::assert_eq!(Ok(Tree::Leaf), flat::ix(&*trees(), BigUint::zero()));
    let () = pretty_assertions::assert_eq!(Ok(Peano::O), flat::ix(&*peano(), BigUint::zero()));
}

#[test]
fn concurrent_readers_agree() {
    let trees = trees();
    let expected: Vec<BigUint> = {
        let fresh = self::trees();
        (0..40).map(|size| fresh.card(size)).collect()
    };
    let () = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|offset| {
                let trees = Arc::clone(&trees);
                scope.spawn(move || {
                    (0..40)
                        .map(|size| trees.card((size * 7 + offset * 13) % 40))
                        .count()
                })
            })
            .collect();
        for handle in handles {
            let _: usize = handle.join().unwrap();
        }
    });
    let actual: Vec<BigUint> = (0..40).map(|size| trees.card(size)).collect();
    let () = pretty_assertions::assert_eq!(expected, actual);
}

#[test]
fn concurrent_decoders_agree() {
    const SIZES: usize = 14;
    let decode_all = |trees: &Sum<Tree>, size: usize| -> Vec<Tree> {
        enumerate::all(trees, size)
            .collect::<Result<_, _>>()
            .unwrap()
    };
    let expected: Vec<Vec<Tree>> = {
        let fresh = self::trees();
        (0..SIZES).map(|size| decode_all(&*fresh, size)).collect()
    };
    // Nothing memoized yet: every thread races to grow the same tables.
    let cold = trees();
    let decoded: Vec<Vec<Vec<Tree>>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|offset| {
                let cold = Arc::clone(&cold);
                scope.spawn(move || {
                    // 5 is coprime to `SIZES`, so each thread visits every size once,
                    // each in a different order.
                    let mut by_size: Vec<(usize, Vec<Tree>)> = (0..SIZES)
                        .map(|step| (step * 5 + offset * 3) % SIZES)
                        .map(|size| (size, decode_all(&*cold, size)))
                        .collect();
                    let () = by_size.sort_by_key(|&(size, _)| size);
                    by_size
                        .into_iter()
                        .map(|(_, trees)| trees)
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });
    for trees in decoded {
        let () = pretty_assertions::assert_eq!(expected, trees);
    }
}

#[test]
fn witness_finds_the_smallest_unbalanced_tree() {
    let witness = feat::witness(&*trees(), 20, |tree| match *tree {
        Tree::Leaf => false,
        Tree::Node(ref lhs, ref rhs) => lhs.nodes() != rhs.nodes(),
    });
    let () = pretty_assertions::assert_eq!(
        Ok(Tree::Node(
            Box::new(Tree::Leaf),
            Box::new(Tree::Node(Box::new(Tree::Leaf), Box::new(Tree::Leaf))),
        )),
        witness,
    );
}
