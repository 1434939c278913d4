//! Deterministic orderings of map entries and list values.

use crate::canonical::encode;
use crate::error::CompareError;
use crate::value::{IgnoredKeys, Map, Value};

/// Returns a map's entries ordered by key.
///
/// Keys compare by Unicode code point, which keeps the ordering
/// deterministic across environments.
pub fn sort_entries(map: &Map) -> Vec<(&String, &Value)> {
    map.iter().collect()
}

/// Returns a list's values ordered by their canonical encoding.
///
/// The sort is stable, so values that encode identically keep their input
/// order. Fails only when a value exceeds the nesting depth guard.
pub fn sort_array_values(values: &[Value]) -> Result<Vec<&Value>, CompareError> {
    let mut keyed = values
        .iter()
        .map(|value| encode(value, IgnoredKeys::none()).map(|key| (key, value)))
        .collect::<Result<Vec<_>, _>>()?;
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(keyed.into_iter().map(|(_, value)| value).collect())
}
