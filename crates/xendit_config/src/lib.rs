use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
pub mod models;
pub use models::*;


/// Marker value replaced by an environment variable named after the key path.
pub const SECRET_MARKER: &str = "secret_from_env";

/// Prefix of the environment variables that override config keys, e.g. `XENDIT__API__BASE_URL`.
pub const ENV_PREFIX: &str = "XENDIT";

/// Shortcut for the one secret every deployment needs.
pub const SECRET_KEY_ENV: &str = "XENDIT_SECRET_KEY";

/// Loads configuration from `./config` relative to the working directory.
///
/// Layering, lowest priority first: `config/default`, `config/{RUN_ENV}`,
/// `XENDIT__*` environment variables. `secret_from_env` markers are resolved last.
pub fn load_config() -> Result<XenditConfig, ConfigError> {
    load_config_from(PathBuf::from("config"))
}

/// Same as [`load_config`] but reads the config files from `config_dir`.
pub fn load_config_from(config_dir: impl AsRef<Path>) -> Result<XenditConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());

    let config_dir = config_dir.as_ref();
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);
    debug!(
        default_path = %default_path.display(),
        env_path = %env_path.display(),
        "loading configuration"
    );

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let config = build_config(builder, |key| env::var(key).ok())?;
    Ok(config)
}

/// Builds the config and resolves secrets through `lookup`.
pub(crate) fn build_config<F>(
    builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<XenditConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw: XenditConfig = builder.build()?.try_deserialize()?;
    let mut config = apply_env_overrides_from_marker(raw, &lookup)?;
    if config.api.secret_key.is_empty() {
        if let Some(secret) = lookup(SECRET_KEY_ENV) {
            config.api.secret_key = secret;
        }
    }
    Ok(config)
}

/// Recursively replaces all "secret_from_env" string values with values from `lookup`.
fn inject_env_secrets<F>(value: &mut Value, lookup: &F)
where
    F: Fn(&str) -> Option<String>,
{
    fn walk<F>(path: &mut Vec<String>, obj: &mut Value, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    path.push(k.to_string());
                    walk(path, v, lookup);
                    path.pop();
                }
            }
            Value::String(s) if s == SECRET_MARKER => {
                let env_key = path.join("_").to_uppercase();
                match lookup(&env_key) {
                    Some(env_val) => *obj = Value::String(env_val),
                    None => {
                        warn!(env_key = %env_key, "env var not found for secret_from_env");
                        *obj = Value::String(String::new());
                    }
                }
            }
            _ => {}
        }
    }

    walk(&mut Vec::new(), value, lookup);
}

/// Applies environment overrides based on "secret_from_env" markers in serialized config.
pub fn apply_env_overrides_from_marker<F>(
    config: XenditConfig,
    lookup: &F,
) -> Result<XenditConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut json = serde_json::to_value(&config)
        .map_err(|err| ConfigError::Message(format!("failed to serialize config: {err}")))?;
    inject_env_secrets(&mut json, lookup);
    serde_json::from_value(json)
        .map_err(|err| ConfigError::Message(format!("failed to rebuild config: {err}")))
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file into the process environment, once.
///
/// `DOTENV_OVERRIDE` names an alternative file; the default is `.env`.
/// A missing file is not an error. Returns the path that was tried.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = std::env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
