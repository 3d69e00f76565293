/*
[INPUT]:  Parsed CLI arguments and environment credentials
[OUTPUT]: Executed subcommands against the testnet
[POS]:    Command layer - one function per subcommand
[UPDATE]: When adding subcommands or changing the order flow
*/

use clap::Args;
use console::style;
use futures_testnet_adapter::{
    EnvCredentials, FuturesClient, FuturesError, Result, TimeInForce, Validator,
};
use tracing::info;

use crate::output;

#[derive(Args, Debug)]
pub struct OrderArgs {
    /// Trading pair (e.g. BTCUSDT)
    #[arg(long, short = 's')]
    pub symbol: String,
    /// Order side: BUY or SELL
    #[arg(long, short = 'd')]
    pub side: String,
    /// Order type: MARKET or LIMIT
    #[arg(long = "type", short = 't')]
    pub order_type: String,
    /// Order quantity
    #[arg(long, short = 'q')]
    pub quantity: String,
    /// Order price (required for LIMIT orders)
    #[arg(long, short = 'p')]
    pub price: Option<String>,
    /// Time in force for LIMIT orders (GTC, IOC, FOK, GTX; default GTC)
    #[arg(long)]
    pub time_in_force: Option<String>,
    /// Reject symbols that do not end in USDT
    #[arg(long)]
    pub require_usdt: bool,
}

#[derive(Args, Debug)]
pub struct AccountArgs {
    /// Filter positions by symbol (optional)
    #[arg(long, short = 's')]
    pub symbol: Option<String>,
}

fn connect() -> Result<FuturesClient> {
    FuturesClient::new(&EnvCredentials)
}

fn parse_time_in_force(raw: &str) -> Result<TimeInForce> {
    match raw.trim().to_uppercase().as_str() {
        "GTC" => Ok(TimeInForce::Gtc),
        "IOC" => Ok(TimeInForce::Ioc),
        "FOK" => Ok(TimeInForce::Fok),
        "GTX" => Ok(TimeInForce::Gtx),
        other => Err(FuturesError::validation(format!(
            "Invalid time in force: {other}. Must be one of GTC, IOC, FOK, GTX"
        ))),
    }
}

pub async fn order(args: OrderArgs) -> Result<()> {
    info!("starting order placement");
    let client = connect()?;

    println!("Connecting to Binance Futures testnet...");
    client.ping().await?;
    println!("{} Connected\n", style("✔").green());

    output::print_order_summary(
        &args.symbol,
        &args.side,
        &args.order_type,
        &args.quantity,
        args.price.as_deref(),
    );

    let validator = if args.require_usdt {
        Validator::usdt_only()
    } else {
        Validator::new()
    };
    let time_in_force = args
        .time_in_force
        .as_deref()
        .map(parse_time_in_force)
        .transpose()?;

    println!("Placing order...");
    let response = client
        .place_order(
            &validator,
            &args.symbol,
            &args.side,
            &args.order_type,
            &args.quantity,
            args.price.as_deref(),
            time_in_force,
        )
        .await?;

    println!();
    output::print_order_response(&response);
    println!();
    println!("{}", style("Order placed successfully").green().bold());
    Ok(())
}

pub async fn test() -> Result<()> {
    let client = connect()?;
    println!("Testing connection to Binance Futures testnet...");
    client.ping().await?;
    println!("{}", style("Connection successful").green().bold());
    Ok(())
}

pub async fn account(args: AccountArgs) -> Result<()> {
    let client = connect()?;
    println!("Fetching account information...");
    let info = client.account_info().await?;
    output::print_account_info(&info, args.symbol.as_deref());
    Ok(())
}
