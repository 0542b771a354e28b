//! Trade API methods (authentication required).
//!
//! These methods require API credentials to be configured on the client.
//! Each one builds its parameters and delegates to [`BtceRestClient::call`],
//! so signing, nonce tracking and stale-nonce recovery apply to all of them.

mod types;

pub use types::*;

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, BtceError};
use crate::rest::BtceRestClient;
use crate::rest::client::decode_payload;
use crate::rest::endpoints::methods;

impl BtceRestClient {
    /// Place a limit order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use btce_api_client::rest::BtceRestClient;
    /// use btce_api_client::rest::private::TradeRequest;
    /// use btce_api_client::auth::StaticCredentials;
    /// use btce_api_client::types::{Direction, Pair};
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = BtceRestClient::builder().credentials(credentials).build();
    ///
    ///     let request = TradeRequest::new(Pair::BtcUsd, Direction::Buy, "100".parse()?, "0.1".parse()?);
    ///     let result = client.place_order(&request).await?;
    ///     println!("Order {} received {}", result.order_id, result.received);
    ///     Ok(())
    /// }
    /// ```
    pub async fn place_order(&self, request: &TradeRequest) -> Result<TradeResult, BtceError> {
        let response = self.call(methods::TRADE, request).await?;
        return_payload(response)
    }

    /// Get the raw `getInfo` response.
    pub async fn get_info(&self) -> Result<Value, BtceError> {
        self.call(methods::GET_INFO, &NoParams {}).await
    }

    /// Get balances, key rights and server time.
    ///
    /// Errors reported by the exchange are returned as [`BtceError::Failure`],
    /// except for an unrecoverable stale nonce which stays [`BtceError::Api`].
    pub async fn get_account_info(&self) -> Result<AccountInfo, BtceError> {
        let response = match self.get_info().await {
            Ok(response) => response,
            Err(BtceError::Api(e)) if !e.is_stale_nonce() => {
                return Err(BtceError::Failure(e.message));
            }
            Err(e) => return Err(e),
        };

        if !is_success(&response) {
            return Err(BtceError::Failure(
                error_message(&response).unwrap_or_else(|| "getInfo reported failure".to_string()),
            ));
        }

        return_payload(response)
    }

    /// Get the transaction history.
    pub async fn get_transaction_history(
        &self,
        request: &TransHistoryRequest,
    ) -> Result<HashMap<String, Transaction>, BtceError> {
        let response = self.call(methods::TRANS_HISTORY, request).await?;
        return_payload(response)
    }

    /// Get the trade history.
    pub async fn get_trade_history(
        &self,
        request: &TradeHistoryRequest,
    ) -> Result<HashMap<String, Trade>, BtceError> {
        let response = self.call(methods::TRADE_HISTORY, request).await?;
        return_payload(response)
    }

    /// Get active orders, optionally for one pair.
    pub async fn get_active_orders(
        &self,
        pair: Option<&str>,
    ) -> Result<HashMap<String, ActiveOrder>, BtceError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            pair: Option<&'a str>,
        }
        let response = self.call(methods::ACTIVE_ORDERS, &Params { pair }).await?;
        return_payload(response)
    }

    /// Cancel an order.
    pub async fn cancel_order(&self, order_id: u64) -> Result<CancelOrderResult, BtceError> {
        #[derive(serde::Serialize)]
        struct Params {
            order_id: u64,
        }
        let response = self.call(methods::CANCEL_ORDER, &Params { order_id }).await?;
        return_payload(response)
    }

    /// Look up a completed (non-active) order.
    ///
    /// Returns the raw `OrderList` response. A response whose `success`
    /// flag is not set is returned as [`BtceError::Api`].
    pub async fn get_past_order(&self, order_id: u64) -> Result<Value, BtceError> {
        #[derive(serde::Serialize)]
        struct Params {
            from_id: u64,
            to_id: u64,
            active: u8,
        }
        let params = Params {
            from_id: order_id,
            to_id: order_id,
            active: 0,
        };
        let response = self.call(methods::ORDER_LIST, &params).await?;

        if !is_success(&response) {
            let message = error_message(&response)
                .unwrap_or_else(|| "OrderList reported failure".to_string());
            return Err(BtceError::Api(ApiError::new(message, response)));
        }

        Ok(response)
    }
}

#[derive(serde::Serialize)]
struct NoParams {}

fn is_success(response: &Value) -> bool {
    match response.get("success") {
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        Some(Value::String(s)) => s == "1",
        Some(Value::Bool(b)) => *b,
        _ => false,
    }
}

fn error_message(response: &Value) -> Option<String> {
    match response.get("error")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Decode the `return` payload of a successful response.
fn return_payload<T>(mut response: Value) -> Result<T, BtceError>
where
    T: DeserializeOwned,
{
    match response.get_mut("return").map(Value::take) {
        Some(payload) => decode_payload(payload),
        None => Err(BtceError::InvalidResponse(format!(
            "Response missing 'return' field: {response}"
        ))),
    }
}
