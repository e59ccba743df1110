//! Everything that can go wrong while decoding an index.

use num_bigint::BigUint;

/// Misuse of an enumeration.
/// Enumeration itself is pure and deterministic,
/// so every error here is a caller-contract violation
/// (or the honest answer "not within this bound").
#[derive(Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// `index(size, index)` with `index >= card(size)`.
    #[error("index {index} is out of bounds for size {size} (cardinality {cardinality})")]
    OutOfBounds {
        /// Requested size.
        size: usize,
        /// Requested index.
        index: BigUint,
        /// Number of values of that size.
        cardinality: BigUint,
    },

    /// A flat (unsized) index ran past every size up to and including `max_size`.
    #[error("flat index {index} is not reachable within sizes 0..={max_size}")]
    Unreachable {
        /// Requested flat index.
        index: BigUint,
        /// Largest size that was searched.
        max_size: usize,
    },

    /// No value up to and including `max_size` satisfied a predicate.
    #[error("no witness of size at most {max_size}")]
    NotFound {
        /// Largest size that was searched.
        max_size: usize,
    },

    /// A recursive handle was queried while its enumeration was still being defined.
    #[error("recursive enumeration used before its definition was complete")]
    Undefined,

    /// A product's components were handed the wrong number of (size, index) parts.
    #[error("expected {expected} component parts but found {found}")]
    Arity {
        /// Number of components.
        expected: usize,
        /// Number of parts actually provided.
        found: usize,
    },
}
