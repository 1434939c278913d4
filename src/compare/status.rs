//! Diff status classification.

use super::equality::equal_ignore_order;
use crate::error::CompareError;
use crate::value::{IgnoredKeys, Value};
use std::fmt;

/// Side declares which half of a comparison the caller is describing.
///
/// It is a labeling convention, not data-driven: the same absent
/// counterpart reads as [`DiffStatus::Missing`] from the left side and
/// [`DiffStatus::Added`] from the right side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// DiffStatus classifies the relationship between a value and its
/// counterpart on the other side of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffStatus {
    /// Both sides present and equal (or both absent).
    Same,
    /// Both sides present but unequal.
    Different,
    /// Present on one side only, viewed from the left.
    Missing,
    /// Present on one side only, viewed from the right.
    Added,
}

/// Classifies a value pair.
///
/// One-sided absence classifies purely by the declared [`Side`]; double
/// absence is [`DiffStatus::Same`]. When both sides are present the
/// equality engine decides between `Same` and `Different`.
pub fn diff_status(
    value: Option<&Value>,
    other: Option<&Value>,
    side: Side,
    ignored: &IgnoredKeys,
) -> Result<DiffStatus, CompareError> {
    match (value, other) {
        (None, None) => Ok(DiffStatus::Same),
        (Some(_), None) | (None, Some(_)) => Ok(match side {
            Side::Left => DiffStatus::Missing,
            Side::Right => DiffStatus::Added,
        }),
        (Some(a), Some(b)) => Ok(if equal_ignore_order(a, b, ignored)? {
            DiffStatus::Same
        } else {
            DiffStatus::Different
        }),
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(format!("invalid side '{}', expected left or right", other)),
        }
    }
}

impl fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffStatus::Same => write!(f, "same"),
            DiffStatus::Different => write!(f, "different"),
            DiffStatus::Missing => write!(f, "missing"),
            DiffStatus::Added => write!(f, "added"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::from_json;

    fn v(json: &str) -> Value {
        from_json(json).unwrap()
    }

    #[test]
    fn test_absent_counterpart() {
        let value = v(r#"{"x":1}"#);
        assert_eq!(
            diff_status(Some(&value), None, Side::Left, IgnoredKeys::none()).unwrap(),
            DiffStatus::Missing
        );
        assert_eq!(
            diff_status(Some(&value), None, Side::Right, IgnoredKeys::none()).unwrap(),
            DiffStatus::Added
        );
    }

    #[test]
    fn test_absent_value() {
        let other = v(r#"{"x":1}"#);
        assert_eq!(
            diff_status(None, Some(&other), Side::Right, IgnoredKeys::none()).unwrap(),
            DiffStatus::Added
        );
        assert_eq!(
            diff_status(None, Some(&other), Side::Left, IgnoredKeys::none()).unwrap(),
            DiffStatus::Missing
        );
    }

    #[test]
    fn test_both_absent_is_same() {
        assert_eq!(
            diff_status(None, None, Side::Left, IgnoredKeys::none()).unwrap(),
            DiffStatus::Same
        );
    }

    #[test]
    fn test_both_present() {
        let a = v(r#"{"x":1}"#);
        let b = v(r#"{"x":2}"#);
        assert_eq!(
            diff_status(Some(&a), Some(&a), Side::Left, IgnoredKeys::none()).unwrap(),
            DiffStatus::Same
        );
        assert_eq!(
            diff_status(Some(&a), Some(&b), Side::Left, IgnoredKeys::none()).unwrap(),
            DiffStatus::Different
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(DiffStatus::Same.to_string(), "same");
        assert_eq!(DiffStatus::Different.to_string(), "different");
        assert_eq!(DiffStatus::Missing.to_string(), "missing");
        assert_eq!(DiffStatus::Added.to_string(), "added");
        assert_eq!(Side::Left.to_string(), "left");
    }

    #[test]
    fn test_side_from_str() {
        assert_eq!("left".parse::<Side>().unwrap(), Side::Left);
        assert_eq!("right".parse::<Side>().unwrap(), Side::Right);
        assert!("up".parse::<Side>().is_err());
    }
}
