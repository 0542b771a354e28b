//! Catalogue of currency pairs traded on BTC-e.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BtceError;

/// A traded currency pair.
///
/// Any API taking a pair accepts `impl AsRef<str>`, so pairs missing from
/// this list can still be passed as plain strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pair {
    /// Bitcoin / US dollar
    BtcUsd,
    /// Bitcoin / Russian ruble
    BtcRur,
    /// Bitcoin / euro
    BtcEur,
    /// Litecoin / US dollar
    LtcUsd,
    /// Litecoin / Russian ruble
    LtcRur,
    /// Litecoin / euro
    LtcEur,
    /// Namecoin / Bitcoin
    NmcBtc,
    /// Namecoin / US dollar
    NmcUsd,
    /// Novacoin / Bitcoin
    NvcBtc,
    /// Novacoin / US dollar
    NvcUsd,
    /// US dollar / Russian ruble
    UsdRur,
    /// Euro / US dollar
    EurUsd,
    /// Terracoin / Bitcoin
    TrcBtc,
    /// Peercoin / Bitcoin
    PpcBtc,
    /// Feathercoin / Bitcoin
    FtcBtc,
    /// Primecoin / Bitcoin
    XpmBtc,
}

impl Pair {
    /// Every pair in the catalogue.
    pub const ALL: [Pair; 16] = [
        Pair::BtcUsd,
        Pair::BtcRur,
        Pair::BtcEur,
        Pair::LtcUsd,
        Pair::LtcRur,
        Pair::LtcEur,
        Pair::NmcBtc,
        Pair::NmcUsd,
        Pair::NvcBtc,
        Pair::NvcUsd,
        Pair::UsdRur,
        Pair::EurUsd,
        Pair::TrcBtc,
        Pair::PpcBtc,
        Pair::FtcBtc,
        Pair::XpmBtc,
    ];

    /// The pair code as used by the API, e.g. `btc_usd`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pair::BtcUsd => "btc_usd",
            Pair::BtcRur => "btc_rur",
            Pair::BtcEur => "btc_eur",
            Pair::LtcUsd => "ltc_usd",
            Pair::LtcRur => "ltc_rur",
            Pair::LtcEur => "ltc_eur",
            Pair::NmcBtc => "nmc_btc",
            Pair::NmcUsd => "nmc_usd",
            Pair::NvcBtc => "nvc_btc",
            Pair::NvcUsd => "nvc_usd",
            Pair::UsdRur => "usd_rur",
            Pair::EurUsd => "eur_usd",
            Pair::TrcBtc => "trc_btc",
            Pair::PpcBtc => "ppc_btc",
            Pair::FtcBtc => "ftc_btc",
            Pair::XpmBtc => "xpm_btc",
        }
    }
}

impl AsRef<str> for Pair {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pair {
    type Err = BtceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pair::ALL
            .into_iter()
            .find(|pair| pair.as_str() == s)
            .ok_or_else(|| BtceError::InvalidParameter(format!("unknown pair: {s:?}")))
    }
}
