//! Types for the trade API methods.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{TimestampSeconds, serde_as};
use std::collections::HashMap;
use time::OffsetDateTime;

use crate::error::BtceError;
use crate::types::serde_helpers::int_bool;
use crate::types::{Direction, SortOrder};

/// Account overview returned by `getInfo`.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfo {
    /// Balances keyed by currency code.
    pub funds: HashMap<String, Decimal>,
    /// Permissions of the API key.
    pub rights: Rights,
    /// Number of transactions on the account.
    pub transaction_count: u64,
    /// Number of active orders.
    pub open_orders: u64,
    /// Server time.
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub server_time: OffsetDateTime,
}

/// Permissions granted to an API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Rights {
    /// Key may read account information.
    #[serde(with = "int_bool")]
    pub info: bool,
    /// Key may trade.
    #[serde(with = "int_bool")]
    pub trade: bool,
    /// Key may withdraw.
    #[serde(with = "int_bool", default)]
    pub withdraw: bool,
}

/// Request to place an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeRequest {
    /// Pair to trade, e.g. `btc_usd`.
    pub pair: String,
    /// Buy or sell.
    #[serde(rename = "type")]
    pub direction: Direction,
    /// Limit price.
    pub rate: Decimal,
    /// Amount of the base currency.
    pub amount: Decimal,
}

impl TradeRequest {
    /// Create a new order request.
    pub fn new(pair: impl AsRef<str>, direction: Direction, rate: Decimal, amount: Decimal) -> Self {
        Self {
            pair: pair.as_ref().to_string(),
            direction,
            rate,
            amount,
        }
    }

    /// Create an order request from a direction given as a string.
    ///
    /// Fails with [`BtceError::InvalidParameter`] unless `direction` is
    /// `"buy"` or `"sell"`.
    pub fn parse(
        pair: impl AsRef<str>,
        direction: &str,
        rate: Decimal,
        amount: Decimal,
    ) -> Result<Self, BtceError> {
        Ok(Self::new(pair, direction.parse()?, rate, amount))
    }
}

/// Result of a placed order.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeResult {
    /// Amount filled immediately.
    pub received: Decimal,
    /// Amount left on the book.
    pub remains: Decimal,
    /// Order ID, `0` if the order was filled completely.
    pub order_id: u64,
    /// Balances after the order.
    pub funds: HashMap<String, Decimal>,
}

/// Request for the transaction history.
///
/// The defaults return the latest 1000 transactions, newest first.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransHistoryRequest {
    /// Number of records to skip.
    pub from: u64,
    /// Number of records to return.
    pub count: u64,
    /// First record ID to include.
    pub from_id: u64,
    /// Last record ID to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_id: Option<u64>,
    /// Sort order.
    pub order: SortOrder,
    /// Only records after this time.
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub since: OffsetDateTime,
    /// Only records before this time.
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<OffsetDateTime>,
}

impl Default for TransHistoryRequest {
    fn default() -> Self {
        Self {
            from: 0,
            count: 1000,
            from_id: 0,
            end_id: None,
            order: SortOrder::Desc,
            since: OffsetDateTime::UNIX_EPOCH,
            end: None,
        }
    }
}

/// A transaction history entry.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    /// Transaction type code.
    #[serde(rename = "type")]
    pub kind: u8,
    /// Amount.
    pub amount: Decimal,
    /// Currency code.
    pub currency: String,
    /// Description.
    pub desc: String,
    /// Status code.
    pub status: u8,
    /// Time of the transaction.
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub timestamp: OffsetDateTime,
}

/// Request for the trade history.
///
/// The defaults return the latest 1000 trades across all pairs, newest first.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeHistoryRequest {
    /// Number of records to skip.
    pub from: u64,
    /// Number of records to return.
    pub count: u64,
    /// First trade ID to include.
    pub from_id: u64,
    /// Last trade ID to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_id: Option<u64>,
    /// Sort order.
    pub order: SortOrder,
    /// Only trades after this time.
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub since: OffsetDateTime,
    /// Only trades before this time.
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<OffsetDateTime>,
    /// Restrict to one pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
}

impl TradeHistoryRequest {
    /// Restrict the history to one pair.
    pub fn pair(mut self, pair: impl AsRef<str>) -> Self {
        self.pair = Some(pair.as_ref().to_string());
        self
    }
}

impl Default for TradeHistoryRequest {
    fn default() -> Self {
        Self {
            from: 0,
            count: 1000,
            from_id: 0,
            end_id: None,
            order: SortOrder::Desc,
            since: OffsetDateTime::UNIX_EPOCH,
            end: None,
            pair: None,
        }
    }
}

/// An executed trade.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct Trade {
    /// Pair traded.
    pub pair: String,
    /// Buy or sell.
    #[serde(rename = "type")]
    pub direction: Direction,
    /// Amount traded.
    pub amount: Decimal,
    /// Execution price.
    pub rate: Decimal,
    /// Order the trade belongs to.
    pub order_id: u64,
    /// Whether the order was placed by this account.
    #[serde(with = "int_bool")]
    pub is_your_order: bool,
    /// Time of execution.
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub timestamp: OffsetDateTime,
}

/// An order as reported by `ActiveOrders` and `OrderList`.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct ActiveOrder {
    /// Pair.
    pub pair: String,
    /// Buy or sell.
    #[serde(rename = "type")]
    pub direction: Direction,
    /// Remaining amount.
    pub amount: Decimal,
    /// Limit price.
    pub rate: Decimal,
    /// Creation time.
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub timestamp_created: OffsetDateTime,
    /// Status code (`0` = active).
    pub status: u8,
}

/// Result of a cancelled order.
#[derive(Debug, Clone, Deserialize)]
pub struct CancelOrderResult {
    /// The cancelled order.
    pub order_id: u64,
    /// Balances after cancellation.
    pub funds: HashMap<String, Decimal>,
}
