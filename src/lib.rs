//! # Structural Compare
//!
//! An order-insensitive structural comparison engine for JSON-like values.
//!
//! This library decides whether two values are the same regardless of array
//! element order and object key order, classifies a value pair as
//! same/different/missing/added, quantifies how different two values are
//! with a single integer distance, and resolves dotted/bracketed path
//! expressions like `a.b[2].c` against a value tree.
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of JSON/YAML values
//! - [`canonical`] - Deterministic order-insensitive string encoding
//! - [`compare`] - Equality, diff classification, and distance counting
//! - [`path`] - Path expression parsing and resolution
//! - [`sort`] - Deterministic orderings for presentation layers

pub mod canonical;
pub mod compare;
pub mod error;
pub mod path;
pub mod sort;
pub mod value;

pub use canonical::encode;
pub use compare::{count_differences, diff_status, equal_ignore_order, DiffStatus, Side};
pub use error::CompareError;
pub use path::{parse_path, resolve, PathToken};
pub use sort::{sort_array_values, sort_entries};
pub use value::{IgnoredKeys, Map, Value};
