//! Types for the public market-data API.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_with::{TimestampSeconds, serde_as};
use time::OffsetDateTime;

/// Wrapper around the ticker object.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TickerResponse {
    pub ticker: Ticker,
}

/// Ticker for a pair.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    /// Highest price over the last 24 hours.
    pub high: Decimal,
    /// Lowest price over the last 24 hours.
    pub low: Decimal,
    /// Average price.
    pub avg: Decimal,
    /// Traded volume in the quote currency.
    pub vol: Decimal,
    /// Traded volume in the base currency.
    pub vol_cur: Decimal,
    /// Last trade price.
    pub last: Decimal,
    /// Best bid.
    pub buy: Decimal,
    /// Best ask.
    pub sell: Decimal,
    /// Time of the last update.
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub updated: OffsetDateTime,
    /// Server time, when reported.
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub server_time: Option<OffsetDateTime>,
}

/// Order book for a pair.
#[derive(Debug, Clone, Deserialize)]
pub struct Depth {
    /// Ask levels, best first.
    pub asks: Vec<DepthLevel>,
    /// Bid levels, best first.
    pub bids: Vec<DepthLevel>,
}

/// A single price level, sent as `[price, amount]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DepthLevel {
    /// Price.
    pub price: Decimal,
    /// Amount available at this price.
    pub amount: Decimal,
}

/// Side of a public trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    /// Taker bought
    Bid,
    /// Taker sold
    Ask,
}

/// A trade from the public trade feed.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct PublicTrade {
    /// Execution time.
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub date: OffsetDateTime,
    /// Price.
    pub price: Decimal,
    /// Amount.
    pub amount: Decimal,
    /// Trade ID.
    pub tid: u64,
    /// Quote currency.
    pub price_currency: String,
    /// Base currency.
    pub item: String,
    /// Side.
    pub trade_type: TradeType,
}

/// Trading fee for a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Fee {
    /// Fee in percent.
    pub trade: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_levels_from_arrays() {
        let json = serde_json::json!({
            "asks": [[101.5, 2], [102, 0.5]],
            "bids": [[100, 1.25]]
        });
        let depth: Depth = serde_json::from_value(json).unwrap();
        assert_eq!(depth.asks.len(), 2);
        assert_eq!(depth.asks[0].price, "101.5".parse().unwrap());
        assert_eq!(depth.bids[0].amount, "1.25".parse().unwrap());
    }

    #[test]
    fn test_ticker_without_server_time() {
        let json = serde_json::json!({
            "ticker": {
                "high": 110, "low": 90, "avg": 100, "vol": 5000, "vol_cur": 50,
                "last": 105, "buy": 104.9, "sell": 105.1, "updated": 1363000000
            }
        });
        let response: TickerResponse = serde_json::from_value(json).unwrap();
        assert!(response.ticker.server_time.is_none());
        assert_eq!(response.ticker.updated.unix_timestamp(), 1363000000);
    }
}
