//! Order-insensitive deep equality.

use crate::canonical::sorted_encodings;
use crate::error::{CompareError, MAX_DEPTH};
use crate::value::{IgnoredKeys, Value};

/// Decides structural equality between two values, ignoring list element
/// order, map key order, and the given set of ignored keys.
///
/// Two lists are equal iff their sorted canonical-encoding sequences are
/// identical: a multiset comparison, not a best-alignment permutation
/// match, so duplicate elements are handled correctly. Two maps are equal
/// iff their key sets (minus ignored keys) match and every shared key is
/// recursively equal. Scalars compare bit-for-bit (NaN equals NaN). Any
/// shape mismatch is unequal, never an error.
///
/// Symmetric and reflexive for any ignored-key set.
pub fn equal_ignore_order(
    a: &Value,
    b: &Value,
    ignored: &IgnoredKeys,
) -> Result<bool, CompareError> {
    equal_at(a, b, ignored, 0)
}

fn equal_at(
    a: &Value,
    b: &Value,
    ignored: &IgnoredKeys,
    depth: usize,
) -> Result<bool, CompareError> {
    if depth > MAX_DEPTH {
        return Err(CompareError::too_deep());
    }

    match (a, b) {
        (Value::List(x), Value::List(y)) => {
            if x.len() != y.len() {
                return Ok(false);
            }
            Ok(sorted_encodings(x, ignored)? == sorted_encodings(y, ignored)?)
        }
        (Value::Map(x), Value::Map(y)) => {
            let x_keys: Vec<&String> = x.keys().filter(|k| !ignored.contains(k)).collect();
            let y_keys: Vec<&String> = y.keys().filter(|k| !ignored.contains(k)).collect();
            // BTreeMap keys come out sorted, so this is a set comparison.
            if x_keys != y_keys {
                return Ok(false);
            }
            for key in x_keys {
                let (Some(xv), Some(yv)) = (x.get(key), y.get(key)) else {
                    return Ok(false);
                };
                if !equal_at(xv, yv, ignored, depth + 1)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        _ => Ok(a == b),
    }
}
