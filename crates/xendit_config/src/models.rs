// --- File: crates/xendit_config/src/models.rs ---

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://api.xendit.co";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How request bodies are put on the wire.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BodyEncoding {
    #[default]
    Json,
    /// `application/x-www-form-urlencoded`, nested values flattened to `key[sub]`.
    Form,
}

/// What counts as a "present" required parameter.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParamPolicy {
    /// The key exists in the map; its value is not inspected.
    #[default]
    KeyExists,
    /// The key exists and its value is not null, an empty string or an empty collection.
    NonEmpty,
}

// --- Xendit API Config ---
// The secret key is usually injected with the "secret_from_env" marker or XENDIT_SECRET_KEY.
#[derive(Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub secret_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub body_encoding: BodyEncoding,
    #[serde(default)]
    pub param_policy: ParamPolicy,
}

impl ApiConfig {
    /// Config with every default filled in and the given secret key.
    pub fn with_secret_key(secret_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            secret_key: secret_key.into(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            body_encoding: BodyEncoding::default(),
            param_policy: ParamPolicy::default(),
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret_key = if self.secret_key.is_empty() { "" } else { "[redacted]" };
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("secret_key", &secret_key)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("body_encoding", &self.body_encoding)
            .field("param_policy", &self.param_policy)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_secret_key(String::new())
    }
}

// --- Unified Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct XenditConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    format!("xendit-rs/{}", env!("CARGO_PKG_VERSION"))
}
