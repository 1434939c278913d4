//! Canonical encoder implementation.

use crate::error::{CompareError, MAX_DEPTH};
use crate::value::{IgnoredKeys, Value};

/// Encodes a value as a deterministic string, independent of list element
/// order and map key order.
///
/// - `Null` encodes as `null`, NaN as `NaN`, infinities as `null` (they
///   have no JSON scalar form).
/// - Lists encode each element, sort the encoded strings, and join them
///   with `,` inside `[...]`, which makes element order irrelevant.
/// - Maps drop the ignored keys, then emit `key:encoded` entries in key
///   order inside `{...}`. Keys are not quoted.
/// - Scalars use their JSON text.
///
/// Two values that are equal under the order-insensitive rules encode to
/// the identical string. Fails only when nesting exceeds [`MAX_DEPTH`].
pub fn encode(value: &Value, ignored: &IgnoredKeys) -> Result<String, CompareError> {
    encode_at(value, ignored, 0)
}

/// Encodes every element of a list and sorts the results, the shared key
/// sequence for order-insensitive list comparison and distance counting.
pub(crate) fn sorted_encodings(
    items: &[Value],
    ignored: &IgnoredKeys,
) -> Result<Vec<String>, CompareError> {
    let mut encoded = items
        .iter()
        .map(|item| encode(item, ignored))
        .collect::<Result<Vec<_>, _>>()?;
    encoded.sort();
    Ok(encoded)
}

fn encode_at(value: &Value, ignored: &IgnoredKeys, depth: usize) -> Result<String, CompareError> {
    if depth > MAX_DEPTH {
        return Err(CompareError::too_deep());
    }

    Ok(match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => encode_float(*f),
        Value::String(s) => serde_json::Value::from(s.as_str()).to_string(),
        Value::List(items) => {
            let mut encoded = items
                .iter()
                .map(|item| encode_at(item, ignored, depth + 1))
                .collect::<Result<Vec<_>, _>>()?;
            encoded.sort();
            format!("[{}]", encoded.join(","))
        }
        Value::Map(map) => {
            // BTreeMap iteration is already in key order.
            let mut entries = Vec::with_capacity(map.len());
            for (key, v) in map.iter() {
                if ignored.contains(key) {
                    continue;
                }
                entries.push(format!("{}:{}", key, encode_at(v, ignored, depth + 1)?));
            }
            format!("{{{}}}", entries.join(","))
        }
    })
}

fn encode_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    match serde_json::Number::from_f64(f) {
        Some(n) => n.to_string(),
        None => "null".to_string(),
    }
}
