//! Logging utilities for the Xendit client crates.
//!
//! The library crates only emit `tracing` events. Binaries call [`init`] or
//! [`init_with_level`] once at startup to install a subscriber.

use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Targets that receive the level passed to [`init_with_level`].
const CRATE_TARGETS: [&str; 4] = ["xendit_common", "xendit_cards", "xendit_config", "xendit_cli"];

/// Initialize the tracing subscriber at INFO.
///
/// # Examples
///
/// ```
/// use xendit_common::logging;
///
/// logging::init();
/// // A second call is a no-op.
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level for the client crates.
///
/// Output goes to stderr. `RUST_LOG` directives are honoured as well.
/// Calling this more than once is harmless.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    for target in CRATE_TARGETS {
        if let Ok(directive) = format!("{target}={level}").parse() {
            filter = filter.add_directive(directive);
        }
    }

    // try_init: a global subscriber may already be installed (tests, host application)
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result so it can be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}
