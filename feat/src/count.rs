//! Counting: how many values an enumeration has of each size.

use num_bigint::BigUint;

/// Types that know how many values they can produce at each size.
/// # Size
/// A size is a non-negative cost assigned to every value
/// (e.g. "one per list cell" or "a natural number costs itself").
/// Negative sizes are unrepresentable, so "zero values of negative size"
/// holds trivially.
/// # Invariant
/// `card` is a pure function: asking twice for the same size
/// must return the same number, even if the first call
/// grew a memoization table along the way.
pub trait Count {
    /// The number of distinct values of size exactly `size`.
    #[must_use]
    fn card(&self, size: usize) -> BigUint;
}
