use super::{constant_time_eq, RateLimiter};
use crate::error::ConfigurationError;
use crate::stats::GuardMetrics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const INVALID_CODE_MESSAGE: &str = "Código incorrecto";
const LOCKED_MESSAGE: &str = "Demasiados intentos fallidos. Inténtalo de nuevo más tarde";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SecretCheck {
    Granted,
    InvalidCode { remaining_attempts: u32 },
    Locked,
}

/// JSON body returned by the access code endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecretCheckResponse {
    pub valid: bool,
    pub locked: bool,
    pub remaining_attempts: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SecretCheckResponse {
    pub fn new(check: SecretCheck, max_attempts: u32) -> Self {
        match check {
            SecretCheck::Granted => SecretCheckResponse {
                valid: true,
                locked: false,
                remaining_attempts: max_attempts,
                error: None,
            },
            SecretCheck::InvalidCode { remaining_attempts } => SecretCheckResponse {
                valid: false,
                locked: false,
                remaining_attempts,
                error: Some(INVALID_CODE_MESSAGE.to_string()),
            },
            SecretCheck::Locked => SecretCheckResponse {
                valid: false,
                locked: true,
                remaining_attempts: 0,
                error: Some(LOCKED_MESSAGE.to_string()),
            },
        }
    }
}

/// Compares submitted codes against a shared secret, rate limited per client key.
pub struct SecretGuard {
    secret: String,
    limiter: RateLimiter,
    metrics: GuardMetrics,
}

impl SecretGuard {
    pub fn new(
        secret: impl Into<String>,
        limiter: RateLimiter,
    ) -> Result<Self, ConfigurationError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigurationError::EmptySecret);
        }
        Ok(SecretGuard {
            secret,
            limiter,
            metrics: GuardMetrics::new(),
        })
    }

    /// Reads the secret from the environment variable `var_name`.
    pub fn from_env(var_name: &str, limiter: RateLimiter) -> Result<Self, ConfigurationError> {
        let secret = std::env::var(var_name)
            .map_err(|_| ConfigurationError::MissingSecret(var_name.to_string()))?;
        Self::new(secret, limiter)
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    pub fn verify(&self, key: &str, candidate: &str) -> SecretCheck {
        self.verify_at(key, candidate, Utc::now())
    }

    pub fn verify_at(&self, key: &str, candidate: &str, now: DateTime<Utc>) -> SecretCheck {
        if !self.limiter.check_rate_limit_at(key, now).allowed {
            // locked keys are not compared, and the attempt is not counted
            self.metrics.rejected_while_locked.increment(1);
            return SecretCheck::Locked;
        }

        let is_match = constant_time_eq(self.secret.as_bytes(), candidate.as_bytes());
        let status = self.limiter.record_attempt_at(key, is_match, now);

        if is_match {
            self.metrics.granted.increment(1);
            return SecretCheck::Granted;
        }

        self.metrics.failed_attempts.increment(1);
        if !status.allowed {
            self.metrics.lockouts.increment(1);
            tracing::warn!(
                client = key,
                max_attempts = self.limiter.config().max_attempts,
                "access code locked after too many failed attempts"
            );
            return SecretCheck::Locked;
        }
        SecretCheck::InvalidCode {
            remaining_attempts: status.remaining_attempts,
        }
    }

    /// [SecretGuard::verify] shaped as the endpoint response.
    pub fn verify_response(&self, key: &str, candidate: &str) -> SecretCheckResponse {
        SecretCheckResponse::new(
            self.verify(key, candidate),
            self.limiter.config().max_attempts,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rate_limit::RateLimitConfig;
    use chrono::TimeDelta;
    use metrics::Key;
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::{CompositeKey, MetricKind::Counter};

    const KEY: &str = "203.0.113.7";

    fn guard() -> SecretGuard {
        SecretGuard::new("s3cr3t-code", RateLimiter::in_memory(RateLimitConfig::default()))
            .unwrap()
    }

    #[test]
    fn test_granted() {
        let guard = guard();
        assert_eq!(guard.verify(KEY, "s3cr3t-code"), SecretCheck::Granted);
    }

    #[test]
    fn test_invalid_then_locked() {
        let guard = guard();
        let now = Utc::now();
        for remaining in (1..=4).rev() {
            assert_eq!(
                guard.verify_at(KEY, "wrong", now),
                SecretCheck::InvalidCode {
                    remaining_attempts: remaining
                }
            );
        }
        // the fifth failure locks
        assert_eq!(guard.verify_at(KEY, "wrong", now), SecretCheck::Locked);
        // the right code is not even compared while locked
        assert_eq!(guard.verify_at(KEY, "s3cr3t-code", now), SecretCheck::Locked);

        let later = now + TimeDelta::minutes(15);
        assert_eq!(guard.verify_at(KEY, "s3cr3t-code", later), SecretCheck::Granted);
    }

    #[test]
    fn test_success_clears_failures() {
        let guard = guard();
        for _ in 0..4 {
            guard.verify(KEY, "wrong");
        }
        assert_eq!(guard.verify(KEY, "s3cr3t-code"), SecretCheck::Granted);
        assert_eq!(
            guard.verify(KEY, "wrong"),
            SecretCheck::InvalidCode {
                remaining_attempts: 4
            }
        );
    }

    #[test]
    fn test_prefix_of_secret_is_rejected() {
        let guard = guard();
        assert_ne!(guard.verify(KEY, "s3cr3t"), SecretCheck::Granted);
        assert_ne!(guard.verify(KEY, "s3cr3t-code "), SecretCheck::Granted);
        assert_ne!(guard.verify(KEY, ""), SecretCheck::Granted);
    }

    #[test]
    fn test_configuration_errors() {
        let limiter = RateLimiter::in_memory(RateLimitConfig::default());
        assert_eq!(
            SecretGuard::new("", limiter.clone()).err(),
            Some(ConfigurationError::EmptySecret)
        );
        assert_eq!(
            SecretGuard::from_env("DEALER_CHECKS_TEST_UNSET_SECRET_VAR", limiter).err(),
            Some(ConfigurationError::MissingSecret(
                "DEALER_CHECKS_TEST_UNSET_SECRET_VAR".to_string()
            ))
        );
    }

    #[test]
    fn test_response_body() {
        let guard = guard();
        let response = guard.verify_response(KEY, "wrong");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "valid": false,
                "locked": false,
                "remainingAttempts": 4,
                "error": "Código incorrecto"
            })
        );

        let response = guard.verify_response(KEY, "s3cr3t-code");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"valid": true, "locked": false, "remainingAttempts": 5})
        );

        let locked = SecretCheckResponse::new(SecretCheck::Locked, 5);
        assert!(locked.locked);
        assert_eq!(locked.remaining_attempts, 0);
    }

    #[test]
    fn test_check_is_tagged() {
        assert_eq!(
            serde_json::to_value(SecretCheck::InvalidCode {
                remaining_attempts: 2
            })
            .unwrap(),
            serde_json::json!({"status": "invalid_code", "remaining_attempts": 2})
        );
    }

    #[test]
    fn should_submit_guard_metrics() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let guard = guard();
            let now = Utc::now();
            guard.verify_at(KEY, "s3cr3t-code", now);
            for _ in 0..5 {
                guard.verify_at(KEY, "wrong", now);
            }
            guard.verify_at(KEY, "wrong", now);
        });

        let snapshot = snapshotter.snapshot().into_hashmap();
        let expected = vec![
            ("secret_guard.granted", 1),
            ("secret_guard.failed_attempts", 5),
            ("secret_guard.lockouts", 1),
            ("secret_guard.rejected_while_locked", 1),
        ];
        for (metric_name, count) in expected {
            let metric_value = snapshot
                .get(&CompositeKey::new(Counter, Key::from_name(metric_name)))
                .expect("metric not found");
            assert_eq!(metric_value, &(None, None, DebugValue::Counter(count)));
        }
    }
}
