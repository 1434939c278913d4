//! Difference counting.

use super::equality::equal_ignore_order;
use crate::canonical::sorted_encodings;
use crate::error::{CompareError, MAX_DEPTH};
use crate::value::{IgnoredKeys, Value};
use std::collections::BTreeSet;

/// Counts the minimum number of elementwise mismatches between two values,
/// a symmetric distance metric.
///
/// - Both absent counts 0, exactly one absent counts 1.
/// - Two lists count the symmetric-difference size of their multisets of
///   canonical encodings, computed by sorting both sides and walking the
///   sorted runs in a single merge pass.
/// - Two maps recurse over the union of their keys (minus ignored keys),
///   with a key missing on one side recursing as absence.
/// - Anything else (scalars, mismatched shapes) counts 0 if equal, else 1.
///
/// The result is 0 iff [`equal_ignore_order`] holds (extended to absence:
/// two absent sides are equal). Nothing is cached; cost is proportional to
/// the total node count, with a log factor for list sorting.
pub fn count_differences(
    a: Option<&Value>,
    b: Option<&Value>,
    ignored: &IgnoredKeys,
) -> Result<usize, CompareError> {
    count_at(a, b, ignored, 0)
}

fn count_at(
    a: Option<&Value>,
    b: Option<&Value>,
    ignored: &IgnoredKeys,
    depth: usize,
) -> Result<usize, CompareError> {
    if depth > MAX_DEPTH {
        return Err(CompareError::too_deep());
    }

    let (a, b) = match (a, b) {
        (None, None) => return Ok(0),
        (Some(_), None) | (None, Some(_)) => return Ok(1),
        (Some(a), Some(b)) => (a, b),
    };

    match (a, b) {
        (Value::List(x), Value::List(y)) => {
            let xs = sorted_encodings(x, ignored)?;
            let ys = sorted_encodings(y, ignored)?;
            Ok(merge_count(&xs, &ys))
        }
        (Value::Map(x), Value::Map(y)) => {
            let keys: BTreeSet<&String> = x.keys().chain(y.keys()).collect();
            let mut total = 0;
            for key in keys {
                if ignored.contains(key) {
                    continue;
                }
                total += count_at(x.get(key), y.get(key), ignored, depth + 1)?;
            }
            Ok(total)
        }
        _ => Ok(if equal_ignore_order(a, b, ignored)? { 0 } else { 1 }),
    }
}

/// Walks two sorted string runs in lockstep; every element without an equal
/// partner on the other side contributes one mismatch.
fn merge_count(xs: &[String], ys: &[String]) -> usize {
    let mut i = 0;
    let mut j = 0;
    let mut diff = 0;

    while i < xs.len() || j < ys.len() {
        if i >= xs.len() {
            diff += 1;
            j += 1;
        } else if j >= ys.len() {
            diff += 1;
            i += 1;
        } else if xs[i] == ys[j] {
            i += 1;
            j += 1;
        } else if xs[i] < ys[j] {
            diff += 1;
            i += 1;
        } else {
            diff += 1;
            j += 1;
        }
    }

    diff
}
