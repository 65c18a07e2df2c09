use thiserror::Error;

/// Why a candidate identifier was rejected.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum ValidationFailure {
    #[error("The value does not match any supported format")]
    InvalidFormat,

    #[error("The value has a valid format but a wrong control character")]
    ChecksumMismatch,
}

/// A required setting is missing. These are fatal and never retried.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("The secret environment variable `{0}` is not set")]
    MissingSecret(String),

    #[error("The configured secret is empty")]
    EmptySecret,

    #[error("Invalid configuration: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(err: serde_json::Error) -> Self {
        ConfigurationError::Malformed(err.to_string())
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum VinDecodeError {
    #[error("The VIN does not have a valid structure")]
    InvalidVin,

    #[error("Error making HTTP request: {0}")]
    Http(String),

    #[error("Unexpected HTTP status code {0}")]
    UnexpectedStatus(u16),

    #[error("Malformed response from the VIN service: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for VinDecodeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            VinDecodeError::MalformedResponse(err.to_string())
        } else {
            VinDecodeError::Http(err.to_string())
        }
    }
}
