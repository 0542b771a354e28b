//! Nonce tracking for BTC-e API authentication.
//!
//! BTC-e rejects any trade API request whose nonce is not greater than the
//! last one it accepted for the same key.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing nonces for authenticated requests.
pub trait NonceProvider: Send + Sync {
    /// Advance the counter and return the new value.
    ///
    /// This value must be greater than any previously returned value.
    fn next_nonce(&self) -> u64;

    /// Replace the counter with a value reported by the server.
    ///
    /// The next call to [`next_nonce`](Self::next_nonce) returns `value + 1`.
    /// No validation is performed: the server's stated nonce is trusted.
    fn override_nonce(&self, value: u64);
}

/// The default nonce provider: a counter seeded from the clock.
///
/// The counter starts at the current Unix time in seconds (or at an explicit
/// seed) and is incremented before every use.
#[derive(Debug)]
pub struct NonceTracker {
    last_nonce: AtomicU64,
}

impl NonceTracker {
    /// Create a tracker seeded with the current Unix time in seconds.
    pub fn new() -> Self {
        Self::with_seed(Self::current_time_secs())
    }

    /// Create a tracker starting from an explicit value.
    ///
    /// The first nonce handed out is `seed + 1`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            last_nonce: AtomicU64::new(seed),
        }
    }

    /// The most recently issued (or overridden) value.
    pub fn current(&self) -> u64 {
        self.last_nonce.load(Ordering::SeqCst)
    }

    fn current_time_secs() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

impl Default for NonceTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceProvider for NonceTracker {
    fn next_nonce(&self) -> u64 {
        // Saturates at u64::MAX rather than wrapping back to zero.
        let previous = self
            .last_nonce
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| Some(n.saturating_add(1)))
            .unwrap_or_else(|n| n);
        previous.saturating_add(1)
    }

    fn override_nonce(&self, value: u64) {
        self.last_nonce.store(value, Ordering::SeqCst);
    }
}
