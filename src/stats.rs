use lazy_static::lazy_static;
use metrics::{counter, Counter};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

pub struct Stats {
    pub vin_decode_requests: Counter,
    pub vin_decode_errors: Counter,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            vin_decode_requests: counter!("vin.extended_decode.requests"),
            vin_decode_errors: counter!("vin.extended_decode.errors"),
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}

/// Counters of a single [crate::SecretGuard]. They are registered when the guard is created,
/// so a guard built inside a local recorder reports to that recorder.
pub struct GuardMetrics {
    pub failed_attempts: Counter,
    pub lockouts: Counter,
    pub rejected_while_locked: Counter,
    pub granted: Counter,
}

impl GuardMetrics {
    pub fn new() -> Self {
        GuardMetrics {
            failed_attempts: counter!("secret_guard.failed_attempts"),
            lockouts: counter!("secret_guard.lockouts"),
            rejected_while_locked: counter!("secret_guard.rejected_while_locked"),
            granted: counter!("secret_guard.granted"),
        }
    }
}

impl Default for GuardMetrics {
    fn default() -> Self {
        GuardMetrics::new()
    }
}
