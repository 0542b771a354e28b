//! BTC-e REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::auth::{CredentialsProvider, NonceProvider, NonceTracker, encode_body, sign_request};
use crate::error::{ApiError, BtceError};
use crate::rest::endpoints::{
    BTCE_BASE_URL, DEFAULT_PUBLIC_TIMEOUT, PUBLIC_API_PATH, TRADE_API_PATH,
};
use crate::types::PublicResource;

/// The BTC-e REST API client.
///
/// This client provides access to the trade API (`/tapi/`) and the public
/// market-data API (`/api/2/`). It signs trade API requests, tracks the
/// nonce, and recovers once from a stale-nonce rejection.
///
/// # Example
///
/// ```rust,no_run
/// use btce_api_client::rest::BtceRestClient;
/// use btce_api_client::types::Pair;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = BtceRestClient::new();
///
///     let ticker = client.get_ticker(Pair::BtcUsd).await?;
///     println!("Last price: {}", ticker.last);
///
///     Ok(())
/// }
/// ```
///
/// For the trade API, provide credentials:
///
/// ```rust,no_run
/// use btce_api_client::rest::BtceRestClient;
/// use btce_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
///     let client = BtceRestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let info = client.get_account_info().await?;
///     println!("Funds: {:?}", info.funds);
///
///     Ok(())
/// }
/// ```
///
/// Clones share the transport, the nonce provider and the session lock, so
/// trade API calls made through any clone are serialized.
#[derive(Clone)]
pub struct BtceRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
    session: Arc<Mutex<()>>,
    public_timeout: Duration,
}

impl BtceRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`BtceRestClient::builder()`] to configure credentials for the trade API.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> BtceRestClientBuilder {
        BtceRestClientBuilder::new()
    }

    /// Invoke a trade API method.
    ///
    /// `params` is URL-encoded in declaration order and followed by `method`
    /// and a fresh nonce. The body is signed with HMAC-SHA512 and POSTed to
    /// `/tapi/`.
    ///
    /// If the server rejects the nonce and states the value it expects, the
    /// nonce provider is overridden with that value and the request is sent
    /// once more with the provider's next nonce. A second rejection is
    /// returned as [`BtceError::Api`].
    ///
    /// Returns the full decoded response on success.
    pub async fn call<P>(&self, method: &str, params: &P) -> Result<Value, BtceError>
    where
        P: Serialize + Sync + ?Sized,
    {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(BtceError::MissingCredentials)?;
        let creds = credentials.get_credentials();
        let url = format!("{}{}", self.base_url, TRADE_API_PATH);

        // Nonce allocation through dispatch (and the retry) is one critical section.
        let _session = self.session.lock().await;

        let mut attempt: u8 = 0;
        loop {
            let nonce = self.nonce_provider.next_nonce();
            let body = encode_body(params, method, nonce)?;
            let signature = sign_request(creds, &body)?;

            tracing::debug!(method, nonce, attempt, "Sending trade API request");

            let response = self
                .http_client
                .post(&url)
                .header("Key", &creds.api_key)
                .header("Sign", signature)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(body)
                .send()
                .await?;

            let decoded = decode_response(response).await?;
            if !decoded.is_object() {
                return Err(BtceError::InvalidResponse(format!(
                    "Expected a JSON object, got: {decoded}"
                )));
            }

            let Some(api_error) = extract_api_error(&decoded) else {
                return Ok(decoded);
            };

            if attempt == 0 {
                if let Some(suggested) = api_error.suggested_nonce() {
                    tracing::warn!(
                        method,
                        sent_nonce = nonce,
                        suggested_nonce = suggested,
                        "Nonce rejected by server, retrying with server-supplied nonce"
                    );
                    self.nonce_provider.override_nonce(suggested);
                    attempt += 1;
                    continue;
                }
            }

            return Err(BtceError::Api(api_error));
        }
    }

    /// Fetch a public market-data resource for a pair.
    ///
    /// Issues an unauthenticated GET to `/api/2/<pair>/<resource>` bounded by
    /// the configured public timeout and returns the decoded JSON as-is.
    pub async fn fetch(&self, pair: &str, resource: PublicResource) -> Result<Value, BtceError> {
        let url = format!("{}{}{}/{}", self.base_url, PUBLIC_API_PATH, pair, resource);
        tracing::debug!(url = %url, "Fetching public market data");

        let response = self
            .http_client
            .get(&url)
            .timeout(self.public_timeout)
            .send()
            .await?;

        decode_response(response).await
    }

    /// The nonce provider used for trade API requests.
    pub fn nonce_provider(&self) -> &Arc<dyn NonceProvider> {
        &self.nonce_provider
    }
}

impl Default for BtceRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BtceRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BtceRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .field("public_timeout", &self.public_timeout)
            .finish()
    }
}

/// Read a response body and decode it as JSON.
///
/// Bodies that decode to a falsy value (`null`, `false`, `0`, `""`, `"0"`,
/// or an empty array or object) are rejected.
async fn decode_response(response: reqwest::Response) -> Result<Value, BtceError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() && body.trim().is_empty() {
        return Err(BtceError::HttpStatus {
            status: status.as_u16(),
        });
    }

    let decoded: Value = serde_json::from_str(&body).map_err(|e| {
        BtceError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
    })?;

    if is_falsy(&decoded) {
        return Err(BtceError::InvalidResponse(format!(
            "Empty response (HTTP {status}): {body}"
        )));
    }

    Ok(decoded)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn extract_api_error(decoded: &Value) -> Option<ApiError> {
    match decoded.get("error")? {
        Value::Null => None,
        Value::String(message) => Some(ApiError::new(message.clone(), decoded.clone())),
        other => Some(ApiError::new(other.to_string(), decoded.clone())),
    }
}

/// Decode a JSON value into a response type.
pub(crate) fn decode_payload<T>(value: Value) -> Result<T, BtceError>
where
    T: DeserializeOwned,
{
    serde_json::from_value(value)
        .map_err(|e| BtceError::InvalidResponse(format!("Unexpected payload: {e}")))
}

/// Builder for [`BtceRestClient`].
pub struct BtceRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    nonce_seed: Option<u64>,
    user_agent: Option<String>,
    public_timeout: Duration,
    accept_invalid_certs: bool,
    http_client: Option<ClientWithMiddleware>,
}

impl BtceRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: BTCE_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            nonce_seed: None,
            user_agent: None,
            public_timeout: DEFAULT_PUBLIC_TIMEOUT,
            accept_invalid_certs: false,
            http_client: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the credentials provider for the trade API.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    ///
    /// Takes precedence over [`nonce_seed`](Self::nonce_seed).
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Start the default [`NonceTracker`] at `seed` instead of the clock.
    pub fn nonce_seed(mut self, seed: u64) -> Self {
        self.nonce_seed = Some(seed);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the timeout applied to public market-data requests.
    pub fn public_timeout(mut self, timeout: Duration) -> Self {
        self.public_timeout = timeout;
        self
    }

    /// Disable TLS certificate verification.
    ///
    /// # Warning
    ///
    /// This makes every request vulnerable to interception. Only use it
    /// against legacy or test servers you control.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Use a prebuilt HTTP client instead of building one.
    ///
    /// The user agent and certificate settings of this builder are not
    /// applied to an injected client.
    pub fn http_client(mut self, client: ClientWithMiddleware) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> BtceRestClient {
        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                Self::build_http_client(self.user_agent.as_deref(), self.accept_invalid_certs)
            }
        };

        let nonce_provider = self.nonce_provider.unwrap_or_else(|| match self.nonce_seed {
            Some(seed) => Arc::new(NonceTracker::with_seed(seed)),
            None => Arc::new(NonceTracker::new()),
        });

        BtceRestClient {
            http_client,
            base_url: self.base_url,
            credentials: self.credentials,
            nonce_provider,
            session: Arc::new(Mutex::new(())),
            public_timeout: self.public_timeout,
        }
    }

    fn build_http_client(user_agent: Option<&str>, accept_invalid_certs: bool) -> ClientWithMiddleware {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = user_agent
            .map(str::to_string)
            .unwrap_or_else(|| format!("btce-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("btce-api-client"));
        headers.insert(USER_AGENT, header_value);

        if accept_invalid_certs {
            tracing::warn!("TLS certificate verification is disabled for this client");
        }

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(
                    error = %e,
                    "Failed to build configured HTTP client, falling back to defaults \
                     (user agent and TLS settings are not applied)"
                );
                reqwest::Client::new()
            });

        ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build()
    }
}

impl Default for BtceRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
