// --- File: crates/xendit_common/src/http/client.rs ---
use reqwest::{Client, Error as ReqwestError};
use std::time::Duration;
use tracing::trace;

use super::{BoxFuture, HttpRequest, HttpResponse, Transport};
use crate::error::{ApiFailure, Context, XenditError};

/// Creates a new HTTP client with custom configuration.
///
/// # Arguments
///
/// * `timeout_secs` - The timeout in seconds for the client
/// * `follow_redirects` - Whether the client should follow redirects
pub fn create_client(timeout_secs: u64, follow_redirects: bool) -> Result<Client, ReqwestError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .redirect(if follow_redirects {
            reqwest::redirect::Policy::default()
        } else {
            reqwest::redirect::Policy::none()
        })
        .build()
}

/// [`Transport`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a transport whose requests time out after `timeout_secs`.
    ///
    /// Redirects are not followed: a 3xx from the API is reported, not chased.
    pub fn new(timeout_secs: u64) -> Result<Self, XenditError> {
        let client = create_client(timeout_secs, false).context("failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, HttpResponse, ApiFailure> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(request.method, &request.url)
                .headers(request.headers);
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await.map_err(describe_send_error)?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| ApiFailure::transport(format!("failed to read response body: {e}")))?;
            trace!(status, body_len = body.len(), "response received");

            Ok(HttpResponse { status, body })
        })
    }
}

fn describe_send_error(err: ReqwestError) -> ApiFailure {
    if err.is_timeout() {
        ApiFailure::transport(format!("request timed out: {err}"))
    } else if err.is_connect() {
        ApiFailure::transport(format!("connection failed: {err}"))
    } else {
        ApiFailure::transport(format!("request failed: {err}"))
    }
}
