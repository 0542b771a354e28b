//! HMAC-SHA512 signature generation for BTC-e API authentication.
//!
//! Trade API requests are signed as:
//! ```text
//! hex(HMAC-SHA512(POST_data, api_secret))
//! ```
//!
//! The signature is sent in the `Sign` header and the API key in the `Key`
//! header. The signed bytes and the transmitted body must be identical, so
//! both are produced by [`encode_body`].

use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha512;

use crate::auth::Credentials;
use crate::error::BtceError;

type HmacSha512 = Hmac<Sha512>;

/// Build the URL-encoded POST body for a trade API call.
///
/// Parameters are encoded in their declaration order, followed by `method`
/// and `nonce`. Encoding the same inputs always yields the same string.
///
/// # Example
///
/// ```rust
/// use btce_api_client::auth::encode_body;
///
/// let body = encode_body(&[("pair", "btc_usd")][..], "ActiveOrders", 7).unwrap();
/// assert_eq!(body, "pair=btc_usd&method=ActiveOrders&nonce=7");
/// ```
pub fn encode_body<P>(params: &P, method: &str, nonce: u64) -> Result<String, BtceError>
where
    P: Serialize + ?Sized,
{
    let params = serde_urlencoded::to_string(params)
        .map_err(|e| BtceError::InvalidParameter(e.to_string()))?;

    let nonce = nonce.to_string();
    let tail = serde_urlencoded::to_string(&[("method", method), ("nonce", nonce.as_str())][..])
        .map_err(|e| BtceError::InvalidParameter(e.to_string()))?;

    if params.is_empty() {
        Ok(tail)
    } else {
        Ok(format!("{}&{}", params, tail))
    }
}

/// Sign a request body for BTC-e's trade API.
///
/// The raw bytes of the API secret are the HMAC key.
///
/// # Returns
///
/// Lowercase hex-encoded HMAC-SHA512 signature (128 characters).
///
/// # Example
///
/// ```rust
/// use btce_api_client::auth::{Credentials, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "api_secret");
/// let signature = sign_request(&credentials, "method=getInfo&nonce=1")?;
/// assert_eq!(signature.len(), 128);
/// # Ok(())
/// # }
/// ```
pub fn sign_request(credentials: &Credentials, post_data: &str) -> Result<String, BtceError> {
    let mut hmac = HmacSha512::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| BtceError::Auth(format!("Invalid HMAC key: {e}")))?;
    hmac.update(post_data.as_bytes());

    Ok(hex::encode(hmac.finalize().into_bytes()))
}
