//! Ignored key sets.

use once_cell::sync::Lazy;
use std::collections::BTreeSet;

static EMPTY: Lazy<IgnoredKeys> = Lazy::new(IgnoredKeys::new);

/// IgnoredKeys is a set of object member names excluded from equality and
/// distance computations at every nesting depth: ignoring `"id"` drops the
/// `id` member of every map in the tree, not just the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoredKeys {
    keys: BTreeSet<String>,
}

impl IgnoredKeys {
    /// Creates an empty set.
    pub fn new() -> Self {
        IgnoredKeys {
            keys: BTreeSet::new(),
        }
    }

    /// Returns a shared empty set, for callers that ignore nothing.
    pub fn none() -> &'static IgnoredKeys {
        &EMPTY
    }

    /// Returns true if the given member name is ignored.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Adds a member name to the set.
    pub fn insert(&mut self, key: impl Into<String>) {
        self.keys.insert(key.into());
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoredKeys {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        IgnoredKeys {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}
