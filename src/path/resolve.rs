//! Path resolution against a value tree.

use super::parse::{parse_path, PathToken};
use crate::value::Value;

/// Resolves a path expression against a value tree, returning the value it
/// names or `None` when the path leads nowhere.
///
/// An empty expression returns the root unchanged. Each step performs a
/// keyed lookup without enforcing token-kind against container-kind: maps
/// look up an index token by its decimal string, lists accept a key token
/// that parses as an index. A null or scalar intermediate with tokens left
/// to consume, a missing key, or an out-of-range index all resolve to
/// absence, never an error. A stored null at the final step is returned as
/// `Some(&Value::Null)`, keeping null distinct from absence.
pub fn resolve<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for token in parse_path(path) {
        current = step(current, &token)?;
    }
    Some(current)
}

fn step<'a>(current: &'a Value, token: &PathToken) -> Option<&'a Value> {
    match (current, token) {
        (Value::Map(map), PathToken::Key(key)) => map.get(key),
        (Value::Map(map), PathToken::Index(index)) => map.get(&index.to_string()),
        (Value::List(list), PathToken::Index(index)) => list.get(*index),
        (Value::List(list), PathToken::Key(key)) => {
            key.parse::<usize>().ok().and_then(|index| list.get(index))
        }
        _ => None,
    }
}
