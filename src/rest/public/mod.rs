//! Public market-data API (no authentication required).
//!
//! Requests are plain GETs bounded by the client's public timeout. They take
//! no lock and may run concurrently with each other and with trade API calls.

mod types;

pub use types::*;

use crate::error::BtceError;
use crate::rest::BtceRestClient;
use crate::rest::client::decode_payload;
use crate::types::PublicResource;

impl BtceRestClient {
    /// Get the ticker for a pair.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use btce_api_client::rest::BtceRestClient;
    /// use btce_api_client::types::Pair;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BtceRestClient::new();
    ///     let ticker = client.get_ticker(Pair::LtcUsd).await?;
    ///     println!("Bid {} / Ask {}", ticker.buy, ticker.sell);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_ticker(&self, pair: impl AsRef<str>) -> Result<Ticker, BtceError> {
        let value = self.fetch(pair.as_ref(), PublicResource::Ticker).await?;
        let response: TickerResponse = decode_payload(value)?;
        Ok(response.ticker)
    }

    /// Get the order book for a pair.
    pub async fn get_depth(&self, pair: impl AsRef<str>) -> Result<Depth, BtceError> {
        let value = self.fetch(pair.as_ref(), PublicResource::Depth).await?;
        decode_payload(value)
    }

    /// Get recent trades for a pair.
    pub async fn get_trades(&self, pair: impl AsRef<str>) -> Result<Vec<PublicTrade>, BtceError> {
        let value = self.fetch(pair.as_ref(), PublicResource::Trades).await?;
        decode_payload(value)
    }

    /// Get the trading fee for a pair.
    pub async fn get_fee(&self, pair: impl AsRef<str>) -> Result<Fee, BtceError> {
        let value = self.fetch(pair.as_ref(), PublicResource::Fee).await?;
        decode_payload(value)
    }
}
