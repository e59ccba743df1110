//! Implementations for common types.

mod arc;
mod tuples;
mod vec;
