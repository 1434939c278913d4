//! Crate error types.

use thiserror::Error;

/// Nesting levels beyond which recursive operations refuse to descend.
///
/// Owned value trees cannot be cyclic, so this is purely a guard against
/// pathologically deep input blowing the stack.
pub const MAX_DEPTH: usize = 128;

/// CompareError represents a failure in a comparison operation.
///
/// The engine is total over well-formed value trees: shape mismatches
/// compare unequal and malformed path fragments drop tokens, neither is an
/// error. The only failure mode is the recursion depth guard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error("structure exceeds maximum nesting depth of {limit} levels")]
    TooDeep { limit: usize },
}

impl CompareError {
    /// Creates a depth guard error at the crate limit.
    pub fn too_deep() -> Self {
        CompareError::TooDeep { limit: MAX_DEPTH }
    }
}
