//! Trait definitions for the BTC-e REST API client.
//!
//! The API has two facets:
//! - [`AuthenticatedClient`]: signed trade API calls with nonce tracking
//! - [`PublicDataClient`]: unauthenticated market data
//!
//! Depending on the trait instead of [`BtceRestClient`] allows mock
//! implementations in tests and keeps market-data consumers free of
//! credentials.

use std::collections::HashMap;
use std::future::Future;

use serde::Serialize;
use serde_json::Value;

use crate::error::BtceError;
use crate::rest::BtceRestClient;
use crate::rest::private::{
    AccountInfo, ActiveOrder, CancelOrderResult, Trade, TradeHistoryRequest, TradeRequest,
    TradeResult, TransHistoryRequest, Transaction,
};
use crate::rest::public::{Depth, Fee, PublicTrade, Ticker};
use crate::types::PublicResource;

/// Signed access to the trade API.
///
/// All methods are async and return `Result<T, BtceError>`.
pub trait AuthenticatedClient: Send + Sync {
    /// Invoke a trade API method with arbitrary parameters.
    fn call<P>(
        &self,
        method: &str,
        params: &P,
    ) -> impl Future<Output = Result<Value, BtceError>> + Send
    where
        P: Serialize + Sync + ?Sized;

    /// Place a limit order.
    fn place_order(
        &self,
        request: &TradeRequest,
    ) -> impl Future<Output = Result<TradeResult, BtceError>> + Send;

    /// Get balances, key rights and server time.
    fn get_account_info(&self) -> impl Future<Output = Result<AccountInfo, BtceError>> + Send;

    /// Get the transaction history.
    fn get_transaction_history(
        &self,
        request: &TransHistoryRequest,
    ) -> impl Future<Output = Result<HashMap<String, Transaction>, BtceError>> + Send;

    /// Get the trade history.
    fn get_trade_history(
        &self,
        request: &TradeHistoryRequest,
    ) -> impl Future<Output = Result<HashMap<String, Trade>, BtceError>> + Send;

    /// Get active orders, optionally for one pair.
    fn get_active_orders(
        &self,
        pair: Option<&str>,
    ) -> impl Future<Output = Result<HashMap<String, ActiveOrder>, BtceError>> + Send;

    /// Cancel an order.
    fn cancel_order(
        &self,
        order_id: u64,
    ) -> impl Future<Output = Result<CancelOrderResult, BtceError>> + Send;

    /// Look up a completed order.
    fn get_past_order(&self, order_id: u64) -> impl Future<Output = Result<Value, BtceError>> + Send;
}

/// Unauthenticated access to market data.
pub trait PublicDataClient: Send + Sync {
    /// Fetch a resource for a pair as raw JSON.
    fn fetch(
        &self,
        pair: &str,
        resource: PublicResource,
    ) -> impl Future<Output = Result<Value, BtceError>> + Send;

    /// Get the ticker for a pair.
    fn get_ticker(&self, pair: &str) -> impl Future<Output = Result<Ticker, BtceError>> + Send;

    /// Get the order book for a pair.
    fn get_depth(&self, pair: &str) -> impl Future<Output = Result<Depth, BtceError>> + Send;

    /// Get recent trades for a pair.
    fn get_trades(
        &self,
        pair: &str,
    ) -> impl Future<Output = Result<Vec<PublicTrade>, BtceError>> + Send;

    /// Get the trading fee for a pair.
    fn get_fee(&self, pair: &str) -> impl Future<Output = Result<Fee, BtceError>> + Send;
}

impl AuthenticatedClient for BtceRestClient {
    async fn call<P>(&self, method: &str, params: &P) -> Result<Value, BtceError>
    where
        P: Serialize + Sync + ?Sized,
    {
        BtceRestClient::call(self, method, params).await
    }

    async fn place_order(&self, request: &TradeRequest) -> Result<TradeResult, BtceError> {
        BtceRestClient::place_order(self, request).await
    }

    async fn get_account_info(&self) -> Result<AccountInfo, BtceError> {
        BtceRestClient::get_account_info(self).await
    }

    async fn get_transaction_history(
        &self,
        request: &TransHistoryRequest,
    ) -> Result<HashMap<String, Transaction>, BtceError> {
        BtceRestClient::get_transaction_history(self, request).await
    }

    async fn get_trade_history(
        &self,
        request: &TradeHistoryRequest,
    ) -> Result<HashMap<String, Trade>, BtceError> {
        BtceRestClient::get_trade_history(self, request).await
    }

    async fn get_active_orders(
        &self,
        pair: Option<&str>,
    ) -> Result<HashMap<String, ActiveOrder>, BtceError> {
        BtceRestClient::get_active_orders(self, pair).await
    }

    async fn cancel_order(&self, order_id: u64) -> Result<CancelOrderResult, BtceError> {
        BtceRestClient::cancel_order(self, order_id).await
    }

    async fn get_past_order(&self, order_id: u64) -> Result<Value, BtceError> {
        BtceRestClient::get_past_order(self, order_id).await
    }
}

impl PublicDataClient for BtceRestClient {
    async fn fetch(&self, pair: &str, resource: PublicResource) -> Result<Value, BtceError> {
        BtceRestClient::fetch(self, pair, resource).await
    }

    async fn get_ticker(&self, pair: &str) -> Result<Ticker, BtceError> {
        BtceRestClient::get_ticker(self, pair).await
    }

    async fn get_depth(&self, pair: &str) -> Result<Depth, BtceError> {
        BtceRestClient::get_depth(self, pair).await
    }

    async fn get_trades(&self, pair: &str) -> Result<Vec<PublicTrade>, BtceError> {
        BtceRestClient::get_trades(self, pair).await
    }

    async fn get_fee(&self, pair: &str) -> Result<Fee, BtceError> {
        BtceRestClient::get_fee(self, pair).await
    }
}
