//! Path module - Path expression parsing and resolution.
//!
//! A path expression like `a.b[2].c` names a location inside a value tree.
//! Parsing is tolerant: fragments that do not match the grammar are
//! silently skipped.

mod parse;
mod resolve;

pub use parse::*;
pub use resolve::*;
