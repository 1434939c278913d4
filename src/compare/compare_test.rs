//! Cross-cutting tests for equality, classification, and distance.

#[cfg(test)]
mod tests {
    use crate::compare::{count_differences, diff_status, equal_ignore_order, DiffStatus, Side};
    use crate::value::{from_json, IgnoredKeys, Map, Value};
    use pretty_assertions::assert_eq;

    fn v(json: &str) -> Value {
        from_json(json).unwrap()
    }

    fn ignoring(keys: &[&str]) -> IgnoredKeys {
        keys.iter().copied().collect()
    }

    /// A small cross-section of the value domain: scalars, lists with
    /// duplicates, nested maps, shape mismatch pairs.
    fn samples() -> Vec<Value> {
        vec![
            v("null"),
            v("true"),
            v("0"),
            v("1"),
            v("1.5"),
            v("\"a\""),
            v("[]"),
            v("[1,2,3]"),
            v("[3,2,1]"),
            v("[1,1,2]"),
            v("{}"),
            v(r#"{"a":1}"#),
            v(r#"{"a":1,"b":[1,2]}"#),
            v(r#"{"a":{"b":{"c":[null,true]}}}"#),
            Value::Float(f64::NAN),
        ]
    }

    #[test]
    fn test_equality_reflexive() {
        for value in samples() {
            assert!(
                equal_ignore_order(&value, &value, IgnoredKeys::none()).unwrap(),
                "not reflexive for {:?}",
                value
            );
        }
    }

    #[test]
    fn test_equality_symmetric() {
        let values = samples();
        let ignored = ignoring(&["id"]);
        for a in &values {
            for b in &values {
                assert_eq!(
                    equal_ignore_order(a, b, IgnoredKeys::none()).unwrap(),
                    equal_ignore_order(b, a, IgnoredKeys::none()).unwrap(),
                    "asymmetric for {:?} vs {:?}",
                    a,
                    b
                );
                assert_eq!(
                    equal_ignore_order(a, b, &ignored).unwrap(),
                    equal_ignore_order(b, a, &ignored).unwrap(),
                );
            }
        }
    }

    #[test]
    fn test_array_permutations_equal() {
        let base = v(r#"[1,"x",{"a":1},[2,3],null]"#);
        let permuted = v(r#"[[3,2],null,{"a":1},1,"x"]"#);
        assert!(equal_ignore_order(&base, &permuted, IgnoredKeys::none()).unwrap());
    }

    #[test]
    fn test_key_insertion_order_irrelevant() {
        let mut forward = Map::new();
        forward.set("a".into(), Value::Int(1));
        forward.set("b".into(), Value::Int(2));

        let mut backward = Map::new();
        backward.set("b".into(), Value::Int(2));
        backward.set("a".into(), Value::Int(1));

        assert!(equal_ignore_order(
            &Value::Map(forward),
            &Value::Map(backward),
            IgnoredKeys::none()
        )
        .unwrap());
    }

    #[test]
    fn test_ignored_keys_toggle_equality() {
        let a = v(r#"{"a":1,"id":5}"#);
        let b = v(r#"{"a":1,"id":9}"#);
        assert!(equal_ignore_order(&a, &b, &ignoring(&["id"])).unwrap());
        assert!(!equal_ignore_order(&a, &b, IgnoredKeys::none()).unwrap());
    }

    #[test]
    fn test_distance_zero_iff_equal() {
        let values = samples();
        let ignored = ignoring(&["id"]);
        for a in &values {
            for b in &values {
                for keys in [IgnoredKeys::none(), &ignored] {
                    let equal = equal_ignore_order(a, b, keys).unwrap();
                    let distance = count_differences(Some(a), Some(b), keys).unwrap();
                    assert_eq!(
                        equal,
                        distance == 0,
                        "equal={} but distance={} for {:?} vs {:?}",
                        equal,
                        distance,
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_distance_symmetric() {
        let values = samples();
        for a in &values {
            for b in &values {
                assert_eq!(
                    count_differences(Some(a), Some(b), IgnoredKeys::none()).unwrap(),
                    count_differences(Some(b), Some(a), IgnoredKeys::none()).unwrap(),
                    "asymmetric distance for {:?} vs {:?}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_classification_matrix() {
        let present = v(r#"{"x":1}"#);
        let changed = v(r#"{"x":2}"#);

        assert_eq!(
            diff_status(Some(&present), None, Side::Left, IgnoredKeys::none()).unwrap(),
            DiffStatus::Missing
        );
        assert_eq!(
            diff_status(None, Some(&present), Side::Right, IgnoredKeys::none()).unwrap(),
            DiffStatus::Added
        );
        assert_eq!(
            diff_status(
                Some(&present),
                Some(&present.clone()),
                Side::Left,
                IgnoredKeys::none()
            )
            .unwrap(),
            DiffStatus::Same
        );
        assert_eq!(
            diff_status(Some(&present), Some(&changed), Side::Left, IgnoredKeys::none()).unwrap(),
            DiffStatus::Different
        );
    }

    #[test]
    fn test_extra_array_element_counts_one() {
        let a = v(r#"{"a":1,"b":[1,2,3]}"#);
        let b = v(r#"{"a":1,"b":[3,2,1,4]}"#);
        assert_eq!(
            count_differences(Some(&a), Some(&b), IgnoredKeys::none()).unwrap(),
            1
        );
    }

    #[test]
    fn test_disjoint_keys_count_both_sides() {
        let a = v(r#"{"a":1,"x":9}"#);
        let b = v(r#"{"a":1,"y":9}"#);
        assert_eq!(
            count_differences(Some(&a), Some(&b), IgnoredKeys::none()).unwrap(),
            2
        );
    }

    #[test]
    fn test_null_vs_absent_classify_differently() {
        let holds_null = v(r#"{"k":null}"#);
        let map = holds_null.as_map().unwrap();
        // A stored null is present, so its counterpart being absent is
        // what drives missing/added, not the null itself.
        assert_eq!(
            diff_status(map.get("k"), None, Side::Left, IgnoredKeys::none()).unwrap(),
            DiffStatus::Missing
        );
        assert_eq!(
            diff_status(map.get("k"), map.get("k"), Side::Left, IgnoredKeys::none()).unwrap(),
            DiffStatus::Same
        );
        assert_eq!(
            diff_status(map.get("absent"), map.get("absent"), Side::Left, IgnoredKeys::none())
                .unwrap(),
            DiffStatus::Same
        );
    }
}
