// --- File: crates/xendit_common/src/dispatcher.rs ---
use base64::{engine::general_purpose::STANDARD as base64_engine, Engine as _};
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT,
};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;
use xendit_config::{ApiConfig, BodyEncoding};

use crate::error::{config_error, ApiFailure, Context, XenditError};
use crate::http::client::ReqwestTransport;
use crate::http::{HttpRequest, Transport};
use crate::params::{encode_form, Params};

/// Decoded body of a successful response.
pub type ResponseBody = Value;

/// One API call, built by a resource and owned by that call alone.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    /// Path relative to the configured base URL, starting with `/`.
    pub path: String,
    pub body: Params,
    /// Per-call headers; they win over the client defaults.
    pub headers: HeaderMap,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: Params::new(),
            headers: HeaderMap::new(),
        }
    }

    pub fn body(mut self, body: Params) -> Self {
        self.body = body;
        self
    }

    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

/// Sends requests to the Xendit API and maps the outcome.
///
/// Holds only immutable state built from [`ApiConfig`]; share it behind an `Arc`.
pub struct Dispatcher {
    base_url: String,
    default_headers: HeaderMap,
    encoding: BodyEncoding,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("base_url", &self.base_url)
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Dispatcher using a `reqwest` transport with the configured timeout.
    pub fn new(config: &ApiConfig) -> Result<Self, XenditError> {
        let transport = ReqwestTransport::new(config.timeout_secs)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Dispatcher sending through `transport`.
    pub fn with_transport(
        config: &ApiConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, XenditError> {
        if config.base_url.trim().is_empty() {
            return Err(config_error("base_url is empty"));
        }
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            default_headers: default_headers(config)?,
            encoding: config.body_encoding,
            transport,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends `request` once and returns the decoded body of a 2xx response.
    ///
    /// An empty 2xx body decodes to `null`. Non-success statuses and transport
    /// failures come back as [`XenditError::Api`].
    pub async fn dispatch(&self, request: RequestDescriptor) -> Result<ResponseBody, XenditError> {
        let method = request.method.clone();
        let path = request.path.clone();
        let http_request = self.build_request(request)?;

        debug!(%method, %path, "dispatching Xendit API request");
        let response = self.transport.send(http_request).await?;
        debug!(%method, %path, status = response.status, "Xendit API responded");

        if response.is_success() {
            if response.body.trim().is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_str(&response.body).map_err(|e| {
                ApiFailure::decode(response.status, format!("invalid JSON in response: {e}")).into()
            })
        } else {
            Err(ApiFailure::from_response(response.status, &response.body).into())
        }
    }

    /// Assembles URL, merged headers and encoded body.
    pub(crate) fn build_request(&self, request: RequestDescriptor) -> Result<HttpRequest, XenditError> {
        let url = format!("{}{}", self.base_url, request.path);

        let body = if request.method == Method::GET {
            None
        } else {
            Some(match self.encoding {
                BodyEncoding::Json => serde_json::to_string(&request.body)?,
                BodyEncoding::Form => encode_form(&request.body)?,
            })
        };

        let mut headers = self.default_headers.clone();
        if body.is_none() {
            headers.remove(CONTENT_TYPE);
        }
        for name in request.headers.keys() {
            headers.remove(name);
        }
        for (name, value) in request.headers.iter() {
            headers.append(name.clone(), value.clone());
        }

        Ok(HttpRequest {
            method: request.method,
            url,
            headers,
            body,
        })
    }
}

fn default_headers(config: &ApiConfig) -> Result<HeaderMap, XenditError> {
    if config.secret_key.is_empty() {
        return Err(config_error("secret_key is empty"));
    }

    // Basic auth: the secret key is the username, the password is empty
    let credentials = base64_engine.encode(format!("{}:", config.secret_key));
    let mut authorization = HeaderValue::from_str(&format!("Basic {credentials}"))
        .context("invalid secret_key")?;
    authorization.set_sensitive(true);

    let content_type = match config.body_encoding {
        BodyEncoding::Json => "application/json",
        BodyEncoding::Form => "application/x-www-form-urlencoded",
    };
    let user_agent = HeaderValue::from_str(&config.user_agent).context("invalid user_agent")?;

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, user_agent);
    Ok(headers)
}
