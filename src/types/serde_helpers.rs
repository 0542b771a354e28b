//! Serde helpers for BTC-e's serialization quirks.

use serde::{Deserialize, Deserializer, de};

/// Deserialize the `0`/`1` integers BTC-e uses for flags into a `bool`.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use btce_api_client::types::serde_helpers::int_bool;
///
/// #[derive(Deserialize)]
/// struct Rights {
///     #[serde(with = "int_bool")]
///     trade: bool,
/// }
///
/// let rights: Rights = serde_json::from_str(r#"{"trade":1}"#).unwrap();
/// assert!(rights.trade);
/// ```
pub mod int_bool {
    use super::*;

    /// Deserialize a `0`/`1` flag. `true`/`false` are accepted as well.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Flag {
            Int(i64),
            Bool(bool),
        }

        match Flag::deserialize(deserializer)? {
            Flag::Int(0) | Flag::Bool(false) => Ok(false),
            Flag::Int(1) | Flag::Bool(true) => Ok(true),
            Flag::Int(other) => Err(de::Error::custom(format!(
                "expected 0 or 1, found {other}"
            ))),
        }
    }
}
