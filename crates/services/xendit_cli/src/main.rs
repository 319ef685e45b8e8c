// File: services/xendit_cli/src/main.rs
use serde_json::Value;
use std::env;
use std::process::ExitCode;
use tracing::info;
use xendit_cards::Cards;
use xendit_common::{logging, Context, XenditError};
use xendit_config::load_config;

mod args;

use args::{CliArgs, USAGE};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let raw: Vec<String> = env::args().skip(1).collect();
    let cli = match args::parse(&raw) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("{message}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let result = logging::log_result(
        run(cli).await,
        "card operation completed",
        "card operation failed",
    );
    match result.and_then(|body| Ok(serde_json::to_string_pretty(&body)?)) {
        Ok(pretty) => {
            println!("{pretty}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: CliArgs) -> Result<Value, XenditError> {
    let config = load_config().context("failed to load configuration")?;
    let cards = Cards::from_config(&config)?;

    info!(
        operation = %cli.operation,
        charge_id = cli.charge_id.as_deref(),
        base_url = %config.api.base_url,
        "running card operation"
    );
    cards
        .execute(cli.operation, cli.charge_id.as_deref(), cli.params, cli.headers)
        .await
}
