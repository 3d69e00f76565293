/*
[INPUT]:  Typed adapter responses
[OUTPUT]: Human-readable terminal blocks
[POS]:    Presentation layer - display only, no control flow
[UPDATE]: When response fields worth showing change
*/

use console::style;
use futures_testnet_adapter::{AccountInfo, OrderResponse};
use rust_decimal::Decimal;

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn print_order_summary(
    symbol: &str,
    side: &str,
    order_type: &str,
    quantity: &str,
    price: Option<&str>,
) {
    println!("{}", style("Order summary").bold());
    println!("  Symbol:       {}", symbol.to_uppercase());
    println!("  Side:         {}", side.to_uppercase());
    println!("  Type:         {}", order_type.to_uppercase());
    println!("  Quantity:     {quantity}");
    match price {
        Some(price) => println!("  Price:        {price}"),
        None => println!("  Price:        MARKET (best available)"),
    }
    println!();
}

pub fn print_order_response(response: &OrderResponse) {
    println!("{}", rule());
    println!("ORDER RESPONSE");
    println!("{}", rule());
    println!("Order ID:         {}", response.order_id);
    println!("Client Order ID:  {}", response.client_order_id);
    println!("Symbol:           {}", response.symbol);
    println!("Status:           {}", response.status);
    println!("Side:             {}", response.side);
    println!("Type:             {}", response.order_type);
    println!("Quantity:         {}", response.orig_qty);
    println!("Executed Qty:     {}", response.executed_qty);
    if response.price != Decimal::ZERO {
        println!("Price:            {}", response.price);
    }
    if let Some(avg_price) = response.avg_price {
        if avg_price != Decimal::ZERO {
            println!("Average Price:    {avg_price}");
        }
    }
    if let Some(update_time) = response.update_time {
        println!("Update Time:      {update_time}");
    }
    println!("{}", rule());
}

pub fn print_account_info(info: &AccountInfo, symbol_filter: Option<&str>) {
    let filter = symbol_filter.map(str::to_uppercase);

    println!("{}", rule());
    println!("ACCOUNT INFORMATION");
    println!("{}", rule());

    println!("\n{}", style("Balances").bold());
    for asset in &info.assets {
        if asset.wallet_balance != Decimal::ZERO || filter.is_none() {
            println!("  {:8} {}", asset.asset, asset.wallet_balance);
        }
    }

    println!("\n{}", style("Open positions").bold());
    let mut shown = 0;
    for position in &info.positions {
        if position.position_amt == Decimal::ZERO {
            continue;
        }
        if let Some(filter) = &filter {
            if !position.symbol.contains(filter.as_str()) {
                continue;
            }
        }
        println!(
            "  {:12} {:>14} @ {}",
            position.symbol, position.position_amt, position.entry_price
        );
        shown += 1;
    }
    if shown == 0 {
        println!("  No open positions");
    }
    println!("{}", rule());
}
