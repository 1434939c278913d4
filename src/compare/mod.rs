//! Compare module - Equality, diff classification, and distance counting.
//!
//! All operations here are pure functions over value trees. Array element
//! order and map key order never matter, and an optional set of ignored
//! keys is excluded at every nesting depth.

mod distance;
mod equality;
mod status;

#[cfg(test)]
mod compare_test;

pub use distance::*;
pub use equality::*;
pub use status::*;
