use crate::error::ValidationFailure;
use crate::validation::{
    normalize_alphanumeric, SpanishCifChecksum, SpanishDniChecksum, SpanishNieChecksum, Validator,
};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

lazy_static! {
    static ref DNI_REGEX: Regex = Regex::new(r"^[0-9]{8}[A-Z]$").unwrap();
    static ref NIE_REGEX: Regex = Regex::new(r"^[XYZ][0-9]{7}[A-Z]$").unwrap();
    static ref CIF_REGEX: Regex = Regex::new(r"^[ABCDEFGHJKLMNPQRSUVW][0-9]{7}[0-9A-J]$").unwrap();
}

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum NationalIdType {
    Dni,
    Nie,
    Cif,
    Unknown,
}

impl NationalIdType {
    /// Detects the type from the structure of a normalized identifier, without checking
    /// the control character.
    pub fn detect(normalized: &str) -> Self {
        if DNI_REGEX.is_match(normalized) {
            NationalIdType::Dni
        } else if NIE_REGEX.is_match(normalized) {
            NationalIdType::Nie
        } else if CIF_REGEX.is_match(normalized) {
            NationalIdType::Cif
        } else {
            NationalIdType::Unknown
        }
    }
}

/// Result of the combined classifier, as sent back to forms.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NationalIdCheck {
    pub is_valid: bool,
    #[serde(rename = "type")]
    pub id_type: NationalIdType,
    pub formatted: String,
}

/// A structurally valid identifier with a matching control character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NationalId {
    id_type: NationalIdType,
    value: String,
}

impl NationalId {
    pub fn id_type(&self) -> NationalIdType {
        self.id_type
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

pub fn validate_dni(raw: &str) -> bool {
    SpanishDniChecksum.is_valid_match(raw)
}

pub fn validate_nie(raw: &str) -> bool {
    SpanishNieChecksum.is_valid_match(raw)
}

pub fn validate_cif(raw: &str) -> bool {
    SpanishCifChecksum.is_valid_match(raw)
}

/// Like [validate_national_id], but tells a malformed value apart from a wrong control
/// character.
pub fn check_national_id(raw: &str) -> Result<NationalId, ValidationFailure> {
    let normalized = normalize_alphanumeric(raw);
    let id_type = NationalIdType::detect(&normalized);
    let checksum_ok = match id_type {
        NationalIdType::Dni => SpanishDniChecksum.is_valid_match(&normalized),
        NationalIdType::Nie => SpanishNieChecksum.is_valid_match(&normalized),
        NationalIdType::Cif => SpanishCifChecksum.is_valid_match(&normalized),
        NationalIdType::Unknown => return Err(ValidationFailure::InvalidFormat),
    };
    if checksum_ok {
        Ok(NationalId {
            id_type,
            value: normalized,
        })
    } else {
        Err(ValidationFailure::ChecksumMismatch)
    }
}

pub fn validate_national_id(raw: &str) -> NationalIdCheck {
    let formatted = normalize_alphanumeric(raw);
    let id_type = NationalIdType::detect(&formatted);
    let is_valid = match id_type {
        NationalIdType::Dni => SpanishDniChecksum.is_valid_match(&formatted),
        NationalIdType::Nie => SpanishNieChecksum.is_valid_match(&formatted),
        NationalIdType::Cif => SpanishCifChecksum.is_valid_match(&formatted),
        NationalIdType::Unknown => false,
    };
    NationalIdCheck {
        is_valid,
        id_type,
        formatted,
    }
}
