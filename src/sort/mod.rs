//! Sort module - Deterministic orderings for presentation layers.

mod helpers;

pub use helpers::*;
