// File: services/xendit_cli/src/args.rs
use serde_json::Value;
use xendit_cards::CardOperation;
use xendit_common::{HeaderMap, HeaderName, HeaderValue, Params};

pub const USAGE: &str = "\
Usage: xendit-cli <operation> [charge_id] [key=value ...] [--header name:value ...]

Operations: create, retrieve, capture, reverse-authorization, create-refund
Values that parse as JSON are sent as JSON (amount=100 is a number), anything else as a string.

Example: xendit-cli capture 5e3c0b8f2c2b amount=10000";

/// One parsed invocation.
#[derive(Debug)]
pub struct CliArgs {
    pub operation: CardOperation,
    pub charge_id: Option<String>,
    pub params: Params,
    pub headers: HeaderMap,
}

/// Parses the arguments after the program name.
pub fn parse(args: &[String]) -> Result<CliArgs, String> {
    let mut iter = args.iter();
    let operation: CardOperation = iter
        .next()
        .ok_or_else(|| "missing operation".to_string())?
        .parse()?;

    let mut rest: Vec<&String> = iter.collect();
    let charge_id = if operation.needs_id() {
        let has_id = rest
            .first()
            .is_some_and(|first| !first.contains('=') && !first.starts_with("--"));
        if !has_id {
            return Err(format!("{operation} needs a charge id"));
        }
        Some(rest.remove(0).clone())
    } else {
        None
    };

    let mut params = Params::new();
    let mut headers = HeaderMap::new();
    let mut rest = rest.into_iter();
    while let Some(arg) = rest.next() {
        if arg == "--header" {
            let spec = rest
                .next()
                .ok_or_else(|| "--header needs a name:value argument".to_string())?;
            let (name, value) = parse_header(spec)?;
            headers.append(name, value);
        } else {
            let (key, value) = arg
                .split_once('=')
                .ok_or_else(|| format!("expected key=value, got {arg}"))?;
            if key.is_empty() {
                return Err(format!("empty parameter name in {arg}"));
            }
            params.insert(key.to_string(), parse_value(value));
        }
    }

    Ok(CliArgs {
        operation,
        charge_id,
        params,
        headers,
    })
}

fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn parse_header(spec: &str) -> Result<(HeaderName, HeaderValue), String> {
    let (name, value) = spec
        .split_once(':')
        .ok_or_else(|| format!("expected name:value, got {spec}"))?;
    let name = HeaderName::from_bytes(name.trim().as_bytes())
        .map_err(|e| format!("invalid header name {name}: {e}"))?;
    let value = HeaderValue::from_str(value.trim())
        .map_err(|e| format!("invalid header value for {name}: {e}"))?;
    Ok((name, value))
}
