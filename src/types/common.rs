//! Common domain types for the BTC-e API.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BtceError;

/// Buy or sell side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl Direction {
    /// The wire representation of this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Buy => "buy",
            Direction::Sell => "sell",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = BtceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Direction::Buy),
            "sell" => Ok(Direction::Sell),
            other => Err(BtceError::InvalidParameter(format!(
                "expected direction \"buy\" or \"sell\", found: {other:?}"
            ))),
        }
    }
}

/// Sort order for history queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    /// Oldest first
    Asc,
    /// Newest first (default)
    #[default]
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = BtceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" => Ok(SortOrder::Asc),
            "DESC" => Ok(SortOrder::Desc),
            other => Err(BtceError::InvalidParameter(format!(
                "expected sort order \"ASC\" or \"DESC\", found: {other:?}"
            ))),
        }
    }
}

/// Market-data resources served by the public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicResource {
    /// Last price, volume and best bid/ask
    Ticker,
    /// Order book
    Depth,
    /// Recent trades
    Trades,
    /// Trading fee
    Fee,
}

impl PublicResource {
    /// The URL path segment for this resource.
    pub fn as_str(&self) -> &'static str {
        match self {
            PublicResource::Ticker => "ticker",
            PublicResource::Depth => "depth",
            PublicResource::Trades => "trades",
            PublicResource::Fee => "fee",
        }
    }
}

impl std::fmt::Display for PublicResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_direction_parse() {
        assert_eq!("buy".parse::<Direction>().unwrap(), Direction::Buy);
        assert_eq!("sell".parse::<Direction>().unwrap(), Direction::Sell);

        let err = "BUY".parse::<Direction>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert!(err.to_string().contains("BUY"));
    }

    #[test]
    fn test_sort_order_serialization() {
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), "\"ASC\"");
        assert_eq!(SortOrder::default(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.to_string(), "DESC");
        assert!("desc".parse::<SortOrder>().is_err());
    }
}
