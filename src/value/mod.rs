//! Value module - In-memory representation of JSON/YAML values.
//!
//! This module provides the value tree all comparisons operate on.

mod ignored;
mod value;

pub use ignored::*;
pub use value::*;
