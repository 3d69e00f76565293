/*
[INPUT]:  Validated order fields
[OUTPUT]: Typed request structs and their wire parameter encoding
[POS]:    Data layer - request shaping for signed endpoints
[UPDATE]: When order parameters or the canonical field order change
*/

use rust_decimal::Decimal;

use super::enums::{OrderType, Side, TimeInForce};

/// A fully validated order, ready to be encoded and signed.
///
/// Invariant: `price` and `time_in_force` are present if and only if
/// `order_type` is [`OrderType::Limit`]. The [`Validator`] is the only
/// intended constructor path, which is what upholds the invariant.
///
/// [`Validator`]: crate::validate::Validator
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub symbol: String,
    pub side: Side,
    pub order_type: OrderType,
    pub qty: Decimal,
    pub price: Option<Decimal>,
    pub time_in_force: Option<TimeInForce>,
}

impl OrderRequest {
    /// Encode into ordered wire parameters.
    ///
    /// The canonical field order is `symbol, side, type, quantity` and, for
    /// LIMIT orders, `price, timeInForce`. The signer and the transport both
    /// consume this exact sequence; the signature is only valid over the
    /// literal string it produces, so the order must never change.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("symbol", self.symbol.clone()),
            ("side", self.side.as_str().to_string()),
            ("type", self.order_type.as_str().to_string()),
            ("quantity", self.qty.to_string()),
        ];

        if self.order_type == OrderType::Limit {
            if let Some(price) = self.price {
                params.push(("price", price.to_string()));
            }
            let tif = self.time_in_force.unwrap_or(TimeInForce::Gtc);
            params.push(("timeInForce", tif.as_str().to_string()));
        }

        params
    }
}
