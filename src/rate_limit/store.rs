use super::RateLimitRecord;
use ahash::AHashMap;
use chrono::{DateTime, Utc};
use std::sync::{Mutex, PoisonError};

/// Where failed attempts are kept between requests.
///
/// Implementations only need to be "last write wins": two concurrent failures for the same
/// key may be counted once, which moves the lockout by one attempt at most.
pub trait RateLimitStore: Send + Sync {
    fn get(&self, key: &str) -> Option<RateLimitRecord>;

    fn set(&self, key: &str, record: RateLimitRecord);

    fn remove(&self, key: &str);

    /// Drops every record whose last attempt is at or before `cutoff`.
    fn retain_newer_than(&self, cutoff: DateTime<Utc>);
}

/// Process local store. State is lost on restart and is not shared between instances.
#[derive(Default)]
pub struct InMemoryRateLimitStore {
    records: Mutex<AHashMap<String, RateLimitRecord>>,
}

impl InMemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A poisoned map is still consistent: every write is a single insert or remove.
    fn lock(&self) -> std::sync::MutexGuard<'_, AHashMap<String, RateLimitRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RateLimitStore for InMemoryRateLimitStore {
    fn get(&self, key: &str) -> Option<RateLimitRecord> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, record: RateLimitRecord) {
        self.lock().insert(key.to_string(), record);
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }

    fn retain_newer_than(&self, cutoff: DateTime<Utc>) {
        self.lock().retain(|_, record| record.last_attempt > cutoff);
    }
}
