mod spain_cif_checksum;
mod spain_dni_checksum;
mod spain_nie_checksum;
mod spanish_plate;
mod vin_structure;

pub use crate::validation::spain_cif_checksum::{CifCheckKind, SpanishCifChecksum};
pub use crate::validation::spain_dni_checksum::SpanishDniChecksum;
pub use crate::validation::spain_nie_checksum::SpanishNieChecksum;
pub use crate::validation::spanish_plate::{
    classify_plate, validate_plate, PlateKind, SpanishPlateFormat, DEFAULT_EXCLUDED_LETTERS,
};
pub use crate::validation::vin_structure::VinStructure;

use serde::{Deserialize, Serialize};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}

/// Every validator a form field can be configured with.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum FieldValidator {
    SpanishDniChecksum,
    SpanishNieChecksum,
    SpanishCifChecksum,
    /// Accepts any of DNI, NIE or CIF
    SpanishNationalId,
    VinStructure,
    SpanishPlate {
        #[serde(default)]
        excluded_letters: Option<Vec<char>>,
    },
}

impl Validator for FieldValidator {
    fn is_valid_match(&self, candidate: &str) -> bool {
        match self {
            FieldValidator::SpanishDniChecksum => SpanishDniChecksum.is_valid_match(candidate),
            FieldValidator::SpanishNieChecksum => SpanishNieChecksum.is_valid_match(candidate),
            FieldValidator::SpanishCifChecksum => SpanishCifChecksum.is_valid_match(candidate),
            FieldValidator::SpanishNationalId => {
                crate::national_id::validate_national_id(candidate).is_valid
            }
            FieldValidator::VinStructure => VinStructure.is_valid_match(candidate),
            FieldValidator::SpanishPlate { excluded_letters } => match excluded_letters {
                Some(letters) => {
                    SpanishPlateFormat::with_excluded_letters(letters.clone())
                        .is_valid_match(candidate)
                }
                None => SpanishPlateFormat::default().is_valid_match(candidate),
            },
        }
    }
}

/// Uppercase and drop everything that is not an ASCII letter or digit.
/// The result is always ASCII, so it can be sliced by byte index.
pub(crate) fn normalize_alphanumeric(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Sum all the digits from a number
#[inline]
fn sum_all_digits(digits: u32) -> u32 {
    let mut sum = 0;
    let mut num = digits;
    while num > 0 {
        sum += num % 10;
        num /= 10;
    }
    sum
}
