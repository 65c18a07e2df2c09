use crate::error::ConfigurationError;
use crate::rate_limit::{RateLimitConfig, RateLimitStore, RateLimiter, SecretGuard};
use crate::validation::{SpanishPlateFormat, DEFAULT_EXCLUDED_LETTERS};
use crate::vin::{VinDecoder, VinDecoderConfig};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const DEFAULT_SECRET_ENV_VAR: &str = "DASHBOARD_ACCESS_CODE";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PlateConfig {
    // Letters never issued on modern plates, on top of vowels
    pub excluded_letters: Vec<char>,
}

impl Default for PlateConfig {
    fn default() -> Self {
        PlateConfig {
            excluded_letters: DEFAULT_EXCLUDED_LETTERS.to_vec(),
        }
    }
}

/// Settings of every stateful or configurable part of the crate.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CheckerConfig {
    pub rate_limit: RateLimitConfig,
    pub vin_decoder: VinDecoderConfig,
    pub plate: PlateConfig,
    // Name of the environment variable holding the access code
    pub secret_env_var: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            rate_limit: RateLimitConfig::default(),
            vin_decoder: VinDecoderConfig::default(),
            plate: PlateConfig::default(),
            secret_env_var: DEFAULT_SECRET_ENV_VAR.to_string(),
        }
    }
}

impl CheckerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn plate_validator(&self) -> SpanishPlateFormat {
        SpanishPlateFormat::with_excluded_letters(self.plate.excluded_letters.clone())
    }

    pub fn vin_decoder(&self) -> VinDecoder {
        VinDecoder::new(self.vin_decoder.clone())
    }

    pub fn rate_limiter(&self, store: Arc<dyn RateLimitStore>) -> RateLimiter {
        RateLimiter::new(store, self.rate_limit.clone())
    }

    /// Builds the access code guard. Fails if the secret variable is unset or empty.
    pub fn secret_guard(
        &self,
        store: Arc<dyn RateLimitStore>,
    ) -> Result<SecretGuard, ConfigurationError> {
        SecretGuard::from_env(&self.secret_env_var, self.rate_limiter(store))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rate_limit::InMemoryRateLimitStore;
    use crate::validation::Validator;
    use std::time::Duration;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(CheckerConfig::from_json("{}").unwrap(), CheckerConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = CheckerConfig::from_json(
            r#"{
                "rate_limit": {"max_attempts": 3, "lockout_window": {"secs": 60, "nanos": 0}},
                "vin_decoder": {"endpoint": "http://localhost:8080"},
                "plate": {"excluded_letters": []},
                "secret_env_var": "MY_CODE"
            }"#,
        )
        .unwrap();
        assert_eq!(config.rate_limit.max_attempts, 3);
        assert_eq!(config.rate_limit.lockout_window, Duration::from_secs(60));
        assert_eq!(config.vin_decoder.endpoint, "http://localhost:8080");
        assert_eq!(config.vin_decoder.timeout, VinDecoderConfig::default().timeout);
        assert_eq!(config.secret_env_var, "MY_CODE");

        // Q is allowed once the exclusion list is emptied
        assert!(config.plate_validator().is_valid_match("1234 BCQ"));
        assert!(!CheckerConfig::default()
            .plate_validator()
            .is_valid_match("1234 BCQ"));
    }

    #[test]
    fn test_malformed_config() {
        assert!(matches!(
            CheckerConfig::from_json(r#"{"rate_limit": {"max_attempts": "five"}}"#),
            Err(ConfigurationError::Malformed(_))
        ));
    }

    #[test]
    fn test_secret_guard_requires_secret() {
        let config = CheckerConfig {
            secret_env_var: "DEALER_CHECKS_CONFIG_TEST_UNSET".to_string(),
            ..CheckerConfig::default()
        };
        let result = config.secret_guard(Arc::new(InMemoryRateLimitStore::new()));
        assert_eq!(
            result.err(),
            Some(ConfigurationError::MissingSecret(
                "DEALER_CHECKS_CONFIG_TEST_UNSET".to_string()
            ))
        );
    }
}
