mod decoder;
mod tables;

pub use decoder::{ExtendedVinInfo, VinDecoder, VinDecoderConfig, DEFAULT_VIN_SERVICE_ENDPOINT};

use crate::validation::{Validator, VinStructure};
use serde::{Deserialize, Serialize};

/// Manufacturer and model year read from the VIN alone.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VinInfo {
    pub manufacturer: String,
    pub year: String,
}

pub fn validate_vin(raw: &str) -> bool {
    VinStructure.is_valid_match(raw)
}

/// Best effort decode of the manufacturer (WMI, first 3 characters) and model year
/// (10th character). Malformed input gives the "not identified" labels.
pub fn decode_vin_basic(raw: &str) -> VinInfo {
    let vin = raw.to_uppercase();

    let wmi: String = vin.chars().take(3).collect();
    let manufacturer = tables::WMI_TABLE
        .get(wmi.as_str())
        .copied()
        .unwrap_or(tables::UNKNOWN_MANUFACTURER);

    let year = match vin.chars().nth(9).and_then(tables::model_year) {
        Some(year) => year.to_string(),
        None => tables::UNKNOWN_YEAR.to_string(),
    };

    VinInfo {
        manufacturer: manufacturer.to_string(),
        year,
    }
}
