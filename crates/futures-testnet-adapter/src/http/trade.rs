/*
[INPUT]:  Validated order requests and order identifiers
[OUTPUT]: Order placement, status, and cancellation responses
[POS]:    HTTP layer - trading endpoints (signature required)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use reqwest::Method;
use tracing::info;

use crate::http::client::FuturesClient;
use crate::http::error::Result;
use crate::types::{OrderRequest, OrderResponse, TimeInForce};
use crate::validate::Validator;

impl FuturesClient {
    /// Validate raw order fields, then place the order.
    ///
    /// Runs the full pipeline: validator, request builder, signer, send.
    /// Validation failures never reach the network.
    pub async fn place_order(
        &self,
        validator: &Validator,
        symbol: &str,
        side: &str,
        order_type: &str,
        quantity: &str,
        price: Option<&str>,
        time_in_force: Option<TimeInForce>,
    ) -> Result<OrderResponse> {
        let request = validator.validate_order(symbol, side, order_type, quantity, price, time_in_force)?;
        self.submit_order(request).await
    }

    /// Place an already-validated order.
    ///
    /// POST /fapi/v1/order (signed)
    pub async fn submit_order(&self, request: OrderRequest) -> Result<OrderResponse> {
        info!(
            symbol = %request.symbol,
            side = %request.side,
            order_type = %request.order_type,
            qty = %request.qty,
            "placing order"
        );
        let response: OrderResponse = self
            .send(Method::POST, "/fapi/v1/order", request.to_params(), true)
            .await?;
        info!(order_id = response.order_id, status = ?response.status, "order accepted");
        Ok(response)
    }

    /// Query an order's status.
    ///
    /// GET /fapi/v1/order (signed)
    pub async fn get_order(&self, symbol: &str, order_id: i64) -> Result<OrderResponse> {
        let params = vec![
            ("symbol", symbol.to_string()),
            ("orderId", order_id.to_string()),
        ];
        self.send(Method::GET, "/fapi/v1/order", params, true).await
    }

    /// Cancel an active order.
    ///
    /// DELETE /fapi/v1/order (signed)
    pub async fn cancel_order(&self, symbol: &str, order_id: i64) -> Result<OrderResponse> {
        info!(symbol, order_id, "cancelling order");
        let params = vec![
            ("symbol", symbol.to_string()),
            ("orderId", order_id.to_string()),
        ];
        self.send(Method::DELETE, "/fapi/v1/order", params, true)
            .await
    }
}
