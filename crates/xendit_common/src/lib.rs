// --- File: crates/xendit_common/src/lib.rs ---
//! Shared plumbing for Xendit API resources: parameter validation, request
//! dispatch, the HTTP transport seam, error types and logging setup.

pub mod dispatcher; // Request dispatch and response mapping
pub mod error; // Error handling
pub mod http; // Transport seam and reqwest client
pub mod logging; // Logging utilities
pub mod params; // Parameter maps and form encoding
pub mod validation; // Required-parameter checks

#[cfg(test)]
mod dispatcher_test;
#[cfg(test)]
mod validation_proptest;

pub use dispatcher::{Dispatcher, RequestDescriptor, ResponseBody};
pub use error::{
    config_error, ApiFailure, Context, FailureCategory, ValidationError, XenditError,
};
pub use http::{
    client::{create_client, ReqwestTransport},
    BoxFuture, HttpRequest, HttpResponse, Transport,
};
pub use logging::{init, init_with_level, log_result};
pub use params::{encode_form, into_params, to_form_pairs, Params};
pub use validation::validate;

// Re-exported so resources and callers agree on the types without depending on them directly.
pub use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
pub use reqwest::Method;
pub use xendit_config::{ApiConfig, BodyEncoding, ParamPolicy, XenditConfig};
