// --- File: crates/xendit_common/src/error.rs ---
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Coarse classification of an [`ApiFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureCategory {
    /// The request never produced an HTTP response (connect, DNS, timeout).
    Transport,
    /// Non-success status outside the 5xx range.
    ClientError,
    /// 5xx status.
    ServerError,
    /// 2xx status whose body could not be decoded.
    DecodeError,
}

impl FailureCategory {
    /// Category for a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        if (500..600).contains(&status) {
            FailureCategory::ServerError
        } else {
            FailureCategory::ClientError
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FailureCategory::Transport => "transport",
            FailureCategory::ClientError => "client_error",
            FailureCategory::ServerError => "server_error",
            FailureCategory::DecodeError => "decode_error",
        }
    }
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A required parameter was absent. Raised before any request is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{operation} is missing required parameter(s): {}", .missing.join(", "))]
pub struct ValidationError {
    /// Name of the operation that was called, e.g. `capture`.
    pub operation: String,
    /// Missing keys in the order they are required.
    pub missing: Vec<String>,
}

/// The vendor API rejected the call, or the call never completed.
#[derive(Error, Debug, Clone, PartialEq)]
#[error(
    "Xendit API {category} error{}: {message}",
    .error_code.as_ref().map(|code| format!(" [{code}]")).unwrap_or_default()
)]
pub struct ApiFailure {
    pub category: FailureCategory,
    /// HTTP status, absent for transport failures.
    pub status: Option<u16>,
    /// `error_code` from the error payload, when the API sent one.
    pub error_code: Option<String>,
    pub message: String,
    /// Decoded error payload, when it was JSON.
    pub body: Option<Value>,
}

impl ApiFailure {
    pub fn transport<T: fmt::Display>(message: T) -> Self {
        Self {
            category: FailureCategory::Transport,
            status: None,
            error_code: None,
            message: message.to_string(),
            body: None,
        }
    }

    pub fn decode<T: fmt::Display>(status: u16, message: T) -> Self {
        Self {
            category: FailureCategory::DecodeError,
            status: Some(status),
            error_code: None,
            message: message.to_string(),
            body: None,
        }
    }

    /// Builds the failure for a non-success response.
    ///
    /// `error_code` and `message` come from the JSON payload when present.
    /// Otherwise the message is the raw body, or the status reason for an empty body.
    pub fn from_response(status: u16, body_text: &str) -> Self {
        let body: Option<Value> = serde_json::from_str(body_text).ok();
        let field = |name: &str| {
            body.as_ref()
                .and_then(|b| b.get(name))
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        let error_code = field("error_code");
        let message = field("message").unwrap_or_else(|| {
            if body_text.trim().is_empty() {
                status_reason(status)
            } else {
                body_text.to_string()
            }
        });

        Self {
            category: FailureCategory::from_status(status),
            status: Some(status),
            error_code,
            message,
            body,
        }
    }
}

fn status_reason(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(|reason| format!("HTTP {status} {reason}"))
        .unwrap_or_else(|| format!("HTTP {status}"))
}

/// Error returned by every client operation.
#[derive(Error, Debug)]
pub enum XenditError {
    /// A required parameter was missing; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The API call failed.
    #[error(transparent)]
    Api(#[from] ApiFailure),

    /// Missing or invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request body could not be encoded
    #[error("Failed to encode request body: {0}")]
    Encoding(String),
}

impl XenditError {
    /// The failure category, for API failures.
    pub fn category(&self) -> Option<FailureCategory> {
        match self {
            XenditError::Api(failure) => Some(failure.category),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, XenditError::Validation(_))
    }
}

impl From<serde_json::Error> for XenditError {
    fn from(err: serde_json::Error) -> Self {
        XenditError::Encoding(err.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for XenditError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        XenditError::Encoding(err.to_string())
    }
}

pub fn config_error<T: fmt::Display>(message: T) -> XenditError {
    XenditError::Config(message.to_string())
}

/// Adds context to foreign errors, turning them into [`XenditError::Config`].
///
/// For setup failures (HTTP client, configuration loading) where the caller
/// only needs a readable message.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, XenditError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, XenditError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, XenditError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| XenditError::Config(format!("{context}: {error}")))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, XenditError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| XenditError::Config(format!("{}: {error}", f())))
    }
}
