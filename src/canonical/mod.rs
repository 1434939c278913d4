//! Canonical module - Deterministic order-insensitive string encoding.
//!
//! The canonical encoding is the comparison key for order-insensitive
//! equality, distance counting, and value sorting.

mod encoder;

pub use encoder::*;
