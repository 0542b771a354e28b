//! BTC-e API endpoint constants.

use std::time::Duration;

/// Base URL for the BTC-e APIs.
pub const BTCE_BASE_URL: &str = "https://btc-e.com";

/// Path of the authenticated trade API.
pub const TRADE_API_PATH: &str = "/tapi/";

/// Path prefix of the public market-data API.
pub const PUBLIC_API_PATH: &str = "/api/2/";

/// Default timeout for public market-data requests.
pub const DEFAULT_PUBLIC_TIMEOUT: Duration = Duration::from_secs(10);

/// Trade API method names (case-sensitive).
pub mod methods {
    /// Place an order.
    pub const TRADE: &str = "Trade";
    /// Get balances, rights and server time.
    pub const GET_INFO: &str = "getInfo";
    /// Get transaction history.
    pub const TRANS_HISTORY: &str = "TransHistory";
    /// Get trade history.
    pub const TRADE_HISTORY: &str = "TradeHistory";
    /// Get active orders.
    pub const ACTIVE_ORDERS: &str = "ActiveOrders";
    /// Cancel an order.
    pub const CANCEL_ORDER: &str = "CancelOrder";
    /// List orders, including completed ones.
    pub const ORDER_LIST: &str = "OrderList";
}
