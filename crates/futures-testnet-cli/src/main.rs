/*
[INPUT]:  CLI arguments, .env credentials, subcommand selection
[OUTPUT]: Orders placed/queried on the testnet, exit code 0 or 1
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use clap::{Parser, Subcommand};
use console::style;
use futures_testnet_adapter::FuturesError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

mod commands;
mod logging;
mod output;

#[derive(Parser, Debug)]
#[command(
    name = "futures-testnet-cli",
    version,
    about = "Place, query, and cancel orders on the Binance Futures testnet"
)]
struct Cli {
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "log-dir", value_name = "DIR", default_value = "logs")]
    log_dir: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Place an order
    Order(commands::OrderArgs),
    /// Test connectivity to the testnet
    Test,
    /// Show account balances and open positions
    Account(commands::AccountArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    // credentials may live in a .env file next to the binary
    let _ = dotenvy::dotenv();

    let log_context = match logging::init(&args.log_level, &args.log_dir) {
        Ok(context) => context,
        Err(err) => {
            eprintln!("Failed to initialize logging: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let result = match args.command {
        Command::Order(order_args) => commands::order(order_args).await,
        Command::Test => commands::test().await,
        Command::Account(account_args) => commands::account(account_args).await,
    };

    match result {
        Ok(()) => {
            println!("\nFull details logged to {}", log_context.log_file.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn report_error(err: &FuturesError) {
    error!(%err, "command failed");
    // the Api variant's Display already carries the "API error" prefix and
    // the remote code
    let message = if err.is_validation() {
        format!("Validation error: {err}")
    } else if err.is_api() {
        err.to_string()
    } else {
        format!("Error: {err}")
    };
    eprintln!("{}", style(message).red().bold());
}
