use super::{decode_vin_basic, validate_vin, VinInfo};
use crate::error::VinDecodeError;
use crate::stats::GLOBAL_STATS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_VIN_SERVICE_ENDPOINT: &str = "https://vpic.nhtsa.dot.gov/api/vehicles";
pub const DEFAULT_VIN_SERVICE_TIMEOUT_SEC: u64 = 5;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct VinDecoderConfig {
    // Base URL of a vPIC compatible service
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for VinDecoderConfig {
    fn default() -> Self {
        VinDecoderConfig {
            endpoint: DEFAULT_VIN_SERVICE_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_VIN_SERVICE_TIMEOUT_SEC),
        }
    }
}

impl VinDecoderConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Basic decode enriched with what the external service knows about the vehicle.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtendedVinInfo {
    #[serde(flatten)]
    pub basic: VinInfo,
    pub make: Option<String>,
    pub model: Option<String>,
    pub model_year: Option<String>,
    pub body_class: Option<String>,
    pub fuel_type: Option<String>,
}

impl From<VinInfo> for ExtendedVinInfo {
    fn from(basic: VinInfo) -> Self {
        ExtendedVinInfo {
            basic,
            make: None,
            model: None,
            model_year: None,
            body_class: None,
            fuel_type: None,
        }
    }
}

#[derive(Deserialize, Debug)]
struct DecodeVinValuesResponse {
    #[serde(rename = "Results")]
    results: Vec<DecodeVinValuesResult>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct DecodeVinValuesResult {
    #[serde(rename = "Make")]
    make: Option<String>,
    #[serde(rename = "Model")]
    model: Option<String>,
    #[serde(rename = "ModelYear")]
    model_year: Option<String>,
    #[serde(rename = "BodyClass")]
    body_class: Option<String>,
    #[serde(rename = "FuelTypePrimary")]
    fuel_type: Option<String>,
}

// The service answers "" for unknown fields
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub struct VinDecoder {
    config: VinDecoderConfig,
    client: reqwest::blocking::Client,
}

impl VinDecoder {
    pub fn new(config: VinDecoderConfig) -> Self {
        VinDecoder {
            config,
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn config(&self) -> &VinDecoderConfig {
        &self.config
    }

    /// Decodes the VIN locally and through the external service.
    /// Invalid VINs are rejected before any request is made.
    pub fn decode(&self, raw: &str) -> Result<ExtendedVinInfo, VinDecodeError> {
        if !validate_vin(raw) {
            return Err(VinDecodeError::InvalidVin);
        }
        let vin = raw.to_uppercase();
        GLOBAL_STATS.vin_decode_requests.increment(1);

        let url = format!(
            "{}/DecodeVinValues/{}",
            self.config.endpoint.trim_end_matches('/'),
            vin
        );
        let response = self
            .client
            .get(url)
            .query(&[("format", "json")])
            .timeout(self.config.timeout)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(VinDecodeError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.text()?;
        let parsed: DecodeVinValuesResponse = serde_json::from_str(&body)
            .map_err(|err| VinDecodeError::MalformedResponse(err.to_string()))?;
        let result = parsed.results.into_iter().next().ok_or_else(|| {
            VinDecodeError::MalformedResponse("the response has no results".to_string())
        })?;

        Ok(ExtendedVinInfo {
            basic: decode_vin_basic(&vin),
            make: non_empty(result.make),
            model: non_empty(result.model),
            model_year: non_empty(result.model_year),
            body_class: non_empty(result.body_class),
            fuel_type: non_empty(result.fuel_type),
        })
    }

    /// Same as [VinDecoder::decode], falling back to the basic decode when the service
    /// cannot be used.
    pub fn decode_or_basic(&self, raw: &str) -> ExtendedVinInfo {
        match self.decode(raw) {
            Ok(info) => info,
            Err(err) => {
                if err != VinDecodeError::InvalidVin {
                    GLOBAL_STATS.vin_decode_errors.increment(1);
                }
                tracing::debug!(error = %err, "extended VIN decode failed, using basic decode");
                ExtendedVinInfo::from(decode_vin_basic(raw))
            }
        }
    }
}

impl Default for VinDecoder {
    fn default() -> Self {
        VinDecoder::new(VinDecoderConfig::default())
    }
}
