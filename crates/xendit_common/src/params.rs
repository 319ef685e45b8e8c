// --- File: crates/xendit_common/src/params.rs ---
use serde_json::{Map, Value};

use crate::error::XenditError;

/// Caller-supplied request parameters.
pub type Params = Map<String, Value>;

/// Converts a JSON value into [`Params`]. Only objects are accepted.
pub fn into_params(value: Value) -> Result<Params, XenditError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(XenditError::Encoding(format!(
            "parameters must be a JSON object, got {other}"
        ))),
    }
}

/// Flattens params into form pairs.
///
/// Nested objects become `key[sub]`, arrays `key[0]`. `null` encodes as an empty value.
pub fn to_form_pairs(params: &Params) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        flatten(key.clone(), value, &mut pairs);
    }
    pairs
}

fn flatten(prefix: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => out.push((prefix, String::new())),
        Value::Bool(b) => out.push((prefix, b.to_string())),
        Value::Number(n) => out.push((prefix, n.to_string())),
        Value::String(s) => out.push((prefix, s.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten(format!("{prefix}[{index}]"), item, out);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                flatten(format!("{prefix}[{key}]"), item, out);
            }
        }
    }
}

/// URL-encodes params as an `application/x-www-form-urlencoded` body.
pub fn encode_form(params: &Params) -> Result<String, XenditError> {
    let pairs = to_form_pairs(params);
    Ok(serde_urlencoded::to_string(&pairs)?)
}
