// --- File: crates/xendit_common/src/http.rs ---
//! The network seam used by the dispatcher.
//!
//! [`Transport`] sends one fully built request and hands back the raw response.
//! Production code uses [`client::ReqwestTransport`]; tests plug in their own.

use reqwest::header::HeaderMap;
use reqwest::Method;
use std::future::Future;
use std::pin::Pin;

use crate::error::ApiFailure;

pub mod client;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A request ready to go on the wire.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL.
    pub url: String,
    /// Final header set, defaults already merged.
    pub headers: HeaderMap,
    /// Encoded body; `None` for bodiless requests.
    pub body: Option<String>,
}

/// Status and raw body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a single request.
///
/// Implementations must not retry. A request that produced no HTTP response
/// fails with an [`ApiFailure`] of category `transport`; every response,
/// whatever its status, is returned as `Ok`.
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, HttpResponse, ApiFailure>;
}
