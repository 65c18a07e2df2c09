mod constant_time;
mod guard;
mod store;

pub use constant_time::constant_time_eq;
pub use guard::{SecretCheck, SecretCheckResponse, SecretGuard};
pub use store::{InMemoryRateLimitStore, RateLimitStore};

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_LOCKOUT_WINDOW: Duration = Duration::from_secs(15 * 60);

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RateLimitConfig {
    pub max_attempts: u32,
    // Counted from the last attempt
    pub lockout_window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        RateLimitConfig {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            lockout_window: DEFAULT_LOCKOUT_WINDOW,
        }
    }
}

/// Failed attempts of a single client.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RateLimitRecord {
    pub attempts: u32,
    pub last_attempt: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitStatus {
    pub allowed: bool,
    pub remaining_attempts: u32,
}

/// Counts failed attempts per client key and locks the key once `max_attempts` is reached.
///
/// A key is in one of three states:
/// - clean: no record in the store
/// - tracking: a record with fewer than `max_attempts` failures
/// - locked: `max_attempts` failures, until `lockout_window` has passed since the last one
///
/// Expiry is evaluated lazily when the key is next checked or recorded; there is no timer.
#[derive(Clone)]
pub struct RateLimiter {
    store: Arc<dyn RateLimitStore>,
    config: RateLimitConfig,
}

impl RateLimiter {
    pub fn new(store: Arc<dyn RateLimitStore>, config: RateLimitConfig) -> Self {
        RateLimiter { store, config }
    }

    /// A limiter with its own process local store.
    pub fn in_memory(config: RateLimitConfig) -> Self {
        Self::new(Arc::new(InMemoryRateLimitStore::new()), config)
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    pub fn check_rate_limit(&self, key: &str) -> RateLimitStatus {
        self.check_rate_limit_at(key, Utc::now())
    }

    pub fn check_rate_limit_at(&self, key: &str, now: DateTime<Utc>) -> RateLimitStatus {
        match self.current_record(key, now) {
            None => self.status_for(0),
            Some(record) => self.status_for(record.attempts),
        }
    }

    /// Records the outcome of an attempt and returns the state of the key afterwards.
    pub fn record_attempt(&self, key: &str, success: bool) -> RateLimitStatus {
        self.record_attempt_at(key, success, Utc::now())
    }

    pub fn record_attempt_at(
        &self,
        key: &str,
        success: bool,
        now: DateTime<Utc>,
    ) -> RateLimitStatus {
        if success {
            self.store.remove(key);
            return self.status_for(0);
        }

        // keys that failed once and never came back are only dropped here
        if let Ok(window) = TimeDelta::from_std(self.config.lockout_window) {
            if let Some(cutoff) = now.checked_sub_signed(window) {
                self.store.retain_newer_than(cutoff);
            }
        }

        let attempts = self
            .current_record(key, now)
            .map_or(0, |record| record.attempts)
            .saturating_add(1);
        self.store.set(
            key,
            RateLimitRecord {
                attempts,
                last_attempt: now,
            },
        );
        self.status_for(attempts)
    }

    /// The record of `key`, dropping it first if the window since the last attempt is over.
    fn current_record(&self, key: &str, now: DateTime<Utc>) -> Option<RateLimitRecord> {
        let record = self.store.get(key)?;
        // a record from the future (clock change) counts as just written
        let elapsed = (now - record.last_attempt).to_std().unwrap_or(Duration::ZERO);
        if elapsed >= self.config.lockout_window {
            self.store.remove(key);
            return None;
        }
        Some(record)
    }

    fn status_for(&self, attempts: u32) -> RateLimitStatus {
        let remaining_attempts = self.config.max_attempts.saturating_sub(attempts);
        RateLimitStatus {
            allowed: remaining_attempts > 0,
            remaining_attempts,
        }
    }
}
