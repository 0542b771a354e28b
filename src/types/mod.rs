//! Common types used across the BTC-e client library.

pub mod common;
pub mod pairs;
pub mod serde_helpers;

pub use common::*;
pub use pairs::Pair;
