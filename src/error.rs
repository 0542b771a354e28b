//! Error types for the BTC-e client library.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// The main error type for all BTC-e client operations.
#[derive(Error, Debug)]
pub enum BtceError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// Server answered with a non-success status and no body
    #[error("HTTP request failed with status {status} and an empty body")]
    HttpStatus {
        /// HTTP status code
        status: u16,
    },

    /// Response body was not the JSON structure the API promises
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// BTC-e API returned an error
    #[error("BTC-e API error: {0}")]
    Api(ApiError),

    /// A call-specific success flag was false
    #[error("Request failed: {0}")]
    Failure(String),

    /// Caller passed an argument outside its allowed set
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Missing required credentials
    #[error("Missing credentials: API key and secret required for trade API methods")]
    MissingCredentials,
}

/// Coarse classification of a [`BtceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Network, timeout or empty non-2xx reply. Never retried by the client.
    Transport,
    /// Body is not valid or expected JSON.
    InvalidResponse,
    /// Business-level error reported by the exchange.
    Api,
    /// Success flag false on an otherwise well-formed response.
    Failure,
    /// Out-of-range argument rejected before any I/O.
    InvalidParameter,
    /// Credentials missing or unusable.
    Auth,
}

impl BtceError {
    /// The kind of failure this error represents.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BtceError::Http(_) | BtceError::HttpMiddleware(_) | BtceError::HttpStatus { .. } => {
                ErrorKind::Transport
            }
            BtceError::InvalidResponse(_) => ErrorKind::InvalidResponse,
            BtceError::Api(_) => ErrorKind::Api,
            BtceError::Failure(_) => ErrorKind::Failure,
            BtceError::InvalidParameter(_) => ErrorKind::InvalidParameter,
            BtceError::Auth(_) | BtceError::MissingCredentials => ErrorKind::Auth,
        }
    }

    /// Returns the [`ApiError`] if this is an exchange-reported error.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            BtceError::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Error returned by the BTC-e API in the `error` field of a response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// The server's error message
    pub message: String,
    /// The full decoded response, kept for diagnostics
    pub response: serde_json::Value,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. Response: {}", self.message, self.response)
    }
}

impl ApiError {
    /// Create a new API error from a message and the response that carried it.
    pub fn new(message: impl Into<String>, response: serde_json::Value) -> Self {
        Self {
            message: message.into(),
            response,
        }
    }

    /// Check if the server rejected the request's nonce.
    pub fn is_stale_nonce(&self) -> bool {
        self.message.contains("nonce")
    }

    /// The nonce the server asked for, if the message states one.
    pub fn suggested_nonce(&self) -> Option<u64> {
        if self.is_stale_nonce() {
            parse_suggested_nonce(&self.message)
        } else {
            None
        }
    }
}

static SUGGESTED_NONCE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r":([0-9]+),").ok());

/// Extract the nonce the server expects from a stale-nonce error message.
///
/// BTC-e reports a stale nonce as
/// `invalid nonce parameter; on key:12345, you sent:'12300'`, so the first
/// run of digits between a `:` and a `,` is taken. Values that do not fit
/// in a `u64`, or that leave no room for a following nonce, are treated as
/// absent.
pub fn parse_suggested_nonce(message: &str) -> Option<u64> {
    let suggested: u64 = SUGGESTED_NONCE
        .as_ref()?
        .captures(message)?
        .get(1)?
        .as_str()
        .parse()
        .ok()?;
    suggested.checked_add(1).map(|_| suggested)
}
