// --- File: crates/xendit_common/src/validation.rs ---
use serde_json::Value;
use xendit_config::ParamPolicy;

use crate::error::ValidationError;
use crate::params::Params;

/// Checks that every key in `required` is present in `params`.
///
/// All missing keys are reported, in the order of `required`. Under
/// [`ParamPolicy::KeyExists`] the value is never inspected, so `""`, `0`
/// and `null` all satisfy the check.
pub fn validate(
    operation: &str,
    params: &Params,
    required: &[&str],
    policy: ParamPolicy,
) -> Result<(), ValidationError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|key| !is_present(params.get(**key), policy))
        .map(|key| key.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError {
            operation: operation.to_string(),
            missing,
        })
    }
}

fn is_present(value: Option<&Value>, policy: ParamPolicy) -> bool {
    match (value, policy) {
        (None, _) => false,
        (Some(_), ParamPolicy::KeyExists) => true,
        (Some(value), ParamPolicy::NonEmpty) => match value {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
            Value::Bool(_) | Value::Number(_) => true,
        },
    }
}
