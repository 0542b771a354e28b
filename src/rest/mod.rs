//! BTC-e REST API client.
//!
//! Provides access to the authenticated trade API and the public
//! market-data API.
//!
//! # Trait-based API
//!
//! The [`AuthenticatedClient`] and [`PublicDataClient`] traits abstract the two
//! facets of the API, enabling:
//! - Mock implementations for testing
//! - Depending on market data alone without holding credentials
//!
//! ```rust,ignore
//! use btce_api_client::rest::{BtceRestClient, PublicDataClient};
//! use btce_api_client::types::Pair;
//!
//! async fn last_price<C: PublicDataClient>(client: &C) -> Result<(), btce_api_client::BtceError> {
//!     let ticker = client.get_ticker(Pair::BtcUsd.as_str()).await?;
//!     println!("Last: {}", ticker.last);
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
pub mod private;
pub mod public;
mod traits;

pub use client::{BtceRestClient, BtceRestClientBuilder};
pub use endpoints::*;
pub use traits::{AuthenticatedClient, PublicDataClient};
