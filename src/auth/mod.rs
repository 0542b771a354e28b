//! Authentication module for the BTC-e trade API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Nonce tracking for replay attack prevention
//! - HMAC-SHA512 signature generation for authenticated requests

mod credentials;
mod nonce;
mod signature;

pub use credentials::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};
pub use nonce::{NonceProvider, NonceTracker};
pub use signature::{encode_body, sign_request};
