#[cfg(test)]
mod tests {
    use crate::params::Params;
    use crate::validation::validate;
    use proptest::prelude::*;
    use serde_json::Value;
    use std::collections::BTreeSet;
    use xendit_config::ParamPolicy;

    // Small alphabet so required and present keys overlap often
    fn key() -> impl Strategy<Value = String> {
        "[a-e]_id".prop_map(|s| s.to_string())
    }

    fn scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<i64>().prop_map(Value::from),
            ".{0,8}".prop_map(Value::from),
            any::<bool>().prop_map(Value::from),
        ]
    }

    fn build_params(entries: Vec<(String, Value)>) -> Params {
        entries.into_iter().collect()
    }

    proptest! {
        // Under KeyExists the outcome depends only on which keys exist
        #[test]
        fn test_key_exists_reports_exactly_the_absent_keys(
            present in prop::collection::vec((key(), scalar()), 0..6),
            required in prop::collection::btree_set(key(), 0..6),
        ) {
            let params = build_params(present);
            let required: Vec<&str> = required.iter().map(String::as_str).collect();

            let expected: Vec<String> = required
                .iter()
                .filter(|k| !params.contains_key(**k))
                .map(|k| k.to_string())
                .collect();

            match validate("op", &params, &required, ParamPolicy::KeyExists) {
                Ok(()) => prop_assert!(expected.is_empty()),
                Err(err) => {
                    prop_assert_eq!(err.missing, expected);
                    prop_assert_eq!(err.operation, "op");
                }
            }
        }

        // NonEmpty never accepts what KeyExists rejects
        #[test]
        fn test_non_empty_is_stricter(
            present in prop::collection::vec((key(), scalar()), 0..6),
            required in prop::collection::btree_set(key(), 0..6),
        ) {
            let params = build_params(present);
            let required: Vec<&str> = required.iter().map(String::as_str).collect();

            let permissive = validate("op", &params, &required, ParamPolicy::KeyExists);
            let strict = validate("op", &params, &required, ParamPolicy::NonEmpty);

            if permissive.is_err() {
                prop_assert!(strict.is_err());
            }
            if let (Err(p), Err(s)) = (permissive, strict) {
                let p: BTreeSet<_> = p.missing.into_iter().collect();
                let s: BTreeSet<_> = s.missing.into_iter().collect();
                prop_assert!(p.is_subset(&s));
            }
        }
    }
}
