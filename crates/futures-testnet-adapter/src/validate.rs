/*
[INPUT]:  Raw user-supplied order fields (strings)
[OUTPUT]: Normalized, validated OrderRequest or a validation error
[POS]:    Input layer - everything is checked here before touching the wire
[UPDATE]: When adding order fields or changing symbol policy
*/

use rust_decimal::Decimal;
use tracing::debug;

use crate::http::error::{FuturesError, Result};
use crate::types::{OrderRequest, OrderType, Side, TimeInForce};

/// Symbol policy knobs.
///
/// Two call sites historically disagreed on symbol rules: the CLI accepted
/// any alphanumeric symbol of length >= 6, the UI additionally required a
/// "USDT" suffix. Both run through this one validator; the suffix check is
/// configuration, not a fork.
#[derive(Debug, Clone, Default)]
pub struct ValidatorConfig {
    /// Require symbols to end with this quote asset (e.g. "USDT").
    pub quote_suffix: Option<String>,
}

const MIN_SYMBOL_LEN: usize = 6;

/// Validates and normalizes trading inputs before they reach the API.
///
/// Validation is fail-fast: the first failing field surfaces as the single
/// error for the call, in field order symbol, side, type, quantity, price.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Shorthand for the strict policy: symbols must end in "USDT".
    pub fn usdt_only() -> Self {
        Self::with_config(ValidatorConfig {
            quote_suffix: Some("USDT".to_string()),
        })
    }

    pub fn validate_symbol(&self, raw: &str) -> Result<String> {
        let symbol = raw.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(FuturesError::validation("Symbol cannot be empty"));
        }
        if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(FuturesError::validation(format!(
                "Invalid symbol format: {symbol}"
            )));
        }
        if symbol.len() < MIN_SYMBOL_LEN {
            return Err(FuturesError::validation(format!("Symbol too short: {symbol}")));
        }
        if let Some(suffix) = &self.config.quote_suffix {
            if !symbol.ends_with(suffix) {
                return Err(FuturesError::validation(format!(
                    "Symbol must end with {suffix}: {symbol}"
                )));
            }
        }
        debug!(%symbol, "symbol validated");
        Ok(symbol)
    }

    pub fn validate_side(&self, raw: &str) -> Result<Side> {
        match raw.trim().to_uppercase().as_str() {
            "BUY" => Ok(Side::Buy),
            "SELL" => Ok(Side::Sell),
            other => Err(FuturesError::validation(format!(
                "Invalid side: {other}. Must be one of BUY, SELL"
            ))),
        }
    }

    pub fn validate_order_type(&self, raw: &str) -> Result<OrderType> {
        match raw.trim().to_uppercase().as_str() {
            "MARKET" => Ok(OrderType::Market),
            "LIMIT" => Ok(OrderType::Limit),
            other => Err(FuturesError::validation(format!(
                "Invalid order type: {other}. Must be one of MARKET, LIMIT"
            ))),
        }
    }

    pub fn validate_quantity(&self, raw: &str) -> Result<Decimal> {
        let qty: Decimal = raw.trim().parse().map_err(|_| {
            FuturesError::validation(format!("Invalid quantity: {raw}. Must be a number"))
        })?;
        if qty <= Decimal::ZERO {
            return Err(FuturesError::validation(format!(
                "Quantity must be positive: {qty}"
            )));
        }
        Ok(qty)
    }

    /// Price is required and must be positive for LIMIT orders. For MARKET
    /// orders any price input is ignored and the result carries none.
    pub fn validate_price(&self, raw: Option<&str>, order_type: OrderType) -> Result<Option<Decimal>> {
        if order_type == OrderType::Market {
            return Ok(None);
        }

        let raw = raw.map(str::trim).filter(|s| !s.is_empty());
        let Some(raw) = raw else {
            return Err(FuturesError::validation("Price is required for LIMIT orders"));
        };

        let price: Decimal = raw.parse().map_err(|_| {
            FuturesError::validation(format!("Invalid price: {raw}. Must be a number"))
        })?;
        if price <= Decimal::ZERO {
            return Err(FuturesError::validation(format!(
                "Price must be positive: {price}"
            )));
        }
        Ok(Some(price))
    }

    /// Validate every field and assemble the order. Stops at the first
    /// failing field. LIMIT orders default to GTC unless `time_in_force`
    /// overrides it.
    pub fn validate_order(
        &self,
        symbol: &str,
        side: &str,
        order_type: &str,
        quantity: &str,
        price: Option<&str>,
        time_in_force: Option<TimeInForce>,
    ) -> Result<OrderRequest> {
        let symbol = self.validate_symbol(symbol)?;
        let side = self.validate_side(side)?;
        let order_type = self.validate_order_type(order_type)?;
        let qty = self.validate_quantity(quantity)?;
        let price = self.validate_price(price, order_type)?;

        let time_in_force = match order_type {
            OrderType::Limit => Some(time_in_force.unwrap_or(TimeInForce::Gtc)),
            OrderType::Market => None,
        };

        debug!(%symbol, %side, %order_type, %qty, "order parameters validated");

        Ok(OrderRequest {
            symbol,
            side,
            order_type,
            qty,
            price,
            time_in_force,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("btcusdt", "BTCUSDT")]
    #[case("  ETHUSDT  ", "ETHUSDT")]
    #[case("solusdt", "SOLUSDT")]
    fn test_symbol_normalized(#[case] raw: &str, #[case] expected: &str) {
        let validator = Validator::new();
        assert_eq!(validator.validate_symbol(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("BTC-USDT")]
    #[case("BTC")]
    fn test_symbol_rejected(#[case] raw: &str) {
        let validator = Validator::new();
        assert!(validator.validate_symbol(raw).unwrap_err().is_validation());
    }

    #[test]
    fn test_suffix_policy_only_applies_when_configured() {
        let loose = Validator::new();
        let strict = Validator::usdt_only();

        assert_eq!(loose.validate_symbol("btcbusd").unwrap(), "BTCBUSD");
        let err = strict.validate_symbol("btcbusd").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("USDT"));
        assert_eq!(strict.validate_symbol("btcusdt").unwrap(), "BTCUSDT");
    }

    #[rstest]
    #[case("buy", Side::Buy)]
    #[case(" SELL ", Side::Sell)]
    fn test_side_accepted(#[case] raw: &str, #[case] expected: Side) {
        assert_eq!(Validator::new().validate_side(raw).unwrap(), expected);
    }

    #[test]
    fn test_side_rejected() {
        let err = Validator::new().validate_side("HOLD").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Invalid side"));
    }

    #[rstest]
    #[case("market", OrderType::Market)]
    #[case("LIMIT", OrderType::Limit)]
    fn test_order_type_accepted(#[case] raw: &str, #[case] expected: OrderType) {
        assert_eq!(Validator::new().validate_order_type(raw).unwrap(), expected);
    }

    #[test]
    fn test_order_type_rejected() {
        assert!(Validator::new()
            .validate_order_type("STOP")
            .unwrap_err()
            .is_validation());
    }

    #[rstest]
    #[case("0.001")]
    #[case("1")]
    #[case("250.5")]
    fn test_quantity_accepted(#[case] raw: &str) {
        let qty = Validator::new().validate_quantity(raw).unwrap();
        assert_eq!(qty, raw.parse::<Decimal>().unwrap());
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("abc")]
    #[case("")]
    fn test_quantity_rejected(#[case] raw: &str) {
        assert!(Validator::new().validate_quantity(raw).unwrap_err().is_validation());
    }

    #[test]
    fn test_market_price_never_fails() {
        let validator = Validator::new();
        for raw in [None, Some(""), Some("100"), Some("not-a-number")] {
            assert_eq!(
                validator.validate_price(raw, OrderType::Market).unwrap(),
                None
            );
        }
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn test_limit_price_required(#[case] raw: Option<&str>) {
        let err = Validator::new()
            .validate_price(raw, OrderType::Limit)
            .unwrap_err();
        assert_eq!(err.to_string(), "Price is required for LIMIT orders");
    }

    #[test]
    fn test_limit_price_bounds() {
        let validator = Validator::new();
        assert!(validator
            .validate_price(Some("0"), OrderType::Limit)
            .unwrap_err()
            .is_validation());
        assert_eq!(
            validator.validate_price(Some("100.5"), OrderType::Limit).unwrap(),
            Some("100.5".parse().unwrap())
        );
    }

    #[test]
    fn test_validate_market_order_end_to_end() {
        let req = Validator::new()
            .validate_order("btcusdt", "buy", "market", "0.001", None, None)
            .unwrap();
        assert_eq!(req.symbol, "BTCUSDT");
        assert_eq!(req.side, Side::Buy);
        assert_eq!(req.order_type, OrderType::Market);
        assert_eq!(req.qty, "0.001".parse().unwrap());
        assert_eq!(req.price, None);
        assert_eq!(req.time_in_force, None);
    }

    #[test]
    fn test_validate_limit_order_end_to_end() {
        let req = Validator::new()
            .validate_order("ETHUSDT", "SELL", "LIMIT", "0.01", Some("2000"), None)
            .unwrap();
        assert_eq!(req.symbol, "ETHUSDT");
        assert_eq!(req.side, Side::Sell);
        assert_eq!(req.order_type, OrderType::Limit);
        assert_eq!(req.qty, "0.01".parse().unwrap());
        assert_eq!(req.price, Some("2000".parse().unwrap()));
        assert_eq!(req.time_in_force, Some(TimeInForce::Gtc));
    }

    #[test]
    fn test_validate_limit_order_without_price_fails() {
        let err = Validator::new()
            .validate_order("ETHUSDT", "SELL", "LIMIT", "0.01", None, None)
            .unwrap_err();
        assert_eq!(err.to_string(), "Price is required for LIMIT orders");
    }

    #[test]
    fn test_fail_fast_surfaces_first_error() {
        // both symbol and side are bad; symbol is checked first
        let err = Validator::new()
            .validate_order("", "HOLD", "MARKET", "1", None, None)
            .unwrap_err();
        assert_eq!(err.to_string(), "Symbol cannot be empty");
    }

    #[test]
    fn test_time_in_force_override() {
        let req = Validator::new()
            .validate_order(
                "ETHUSDT",
                "SELL",
                "LIMIT",
                "0.01",
                Some("2000"),
                Some(TimeInForce::Ioc),
            )
            .unwrap();
        assert_eq!(req.time_in_force, Some(TimeInForce::Ioc));
    }
}
