//! # BTC-e Client
//!
//! An async Rust client library for the BTC-e trade and public market-data APIs.
//!
//! ## Features
//!
//! - Trade API access with HMAC-SHA512 request signing
//! - Nonce tracking with one automatic recovery from stale-nonce rejections
//! - Serialized trade API calls per client, concurrent public requests
//! - Strong typing for request and response types
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use btce_api_client::rest::BtceRestClient;
//! use btce_api_client::types::{PublicResource, Pair};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BtceRestClient::new();
//!     let fee = client.fetch(Pair::BtcUsd.as_str(), PublicResource::Fee).await?;
//!     println!("Fee: {}", fee);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{BtceError, ErrorKind};
pub use rest::BtceRestClient;
pub use types::{Direction, Pair, SortOrder};

/// Result type alias using BtceError
pub type Result<T> = std::result::Result<T, BtceError>;
