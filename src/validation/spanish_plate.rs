use crate::validation::Validator;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

lazy_static! {
    // Since 2000: 4 digits and 3 consonants
    static ref MODERN_PLATE_REGEX: Regex =
        Regex::new(r"^[0-9]{4}([B-DF-HJ-NP-TV-Z]{3})$").unwrap();
    // Provincial scheme: province code, 4 digits, 2 letters
    static ref LEGACY_PLATE_REGEX: Regex = Regex::new(r"^[A-Z]{1,2}[0-9]{4}[A-Z]{2}$").unwrap();
}

/// Letters the registry never issues on modern plates besides vowels.
pub const DEFAULT_EXCLUDED_LETTERS: [char; 2] = ['Q', 'Ñ'];

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PlateKind {
    Modern,
    Legacy,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpanishPlateFormat {
    excluded_letters: Vec<char>,
}

impl Default for SpanishPlateFormat {
    fn default() -> Self {
        Self::with_excluded_letters(DEFAULT_EXCLUDED_LETTERS.to_vec())
    }
}

impl SpanishPlateFormat {
    pub fn with_excluded_letters(excluded_letters: Vec<char>) -> Self {
        SpanishPlateFormat {
            excluded_letters: excluded_letters
                .into_iter()
                .flat_map(|c| c.to_uppercase())
                .collect(),
        }
    }

    pub fn classify(&self, plate: &str) -> Option<PlateKind> {
        let normalized: String = plate
            .chars()
            .filter(|c| *c != ' ' && *c != '-')
            .flat_map(|c| c.to_uppercase())
            .collect();

        if let Some(caps) = MODERN_PLATE_REGEX.captures(&normalized) {
            let letters = &caps[1];
            if letters.chars().any(|c| self.excluded_letters.contains(&c)) {
                return None;
            }
            return Some(PlateKind::Modern);
        }
        if LEGACY_PLATE_REGEX.is_match(&normalized) {
            return Some(PlateKind::Legacy);
        }
        None
    }
}

impl Validator for SpanishPlateFormat {
    fn is_valid_match(&self, candidate: &str) -> bool {
        self.classify(candidate).is_some()
    }
}

/// `true` for plates in the current or the provincial format, with the default exclusions.
pub fn validate_plate(raw: &str) -> bool {
    SpanishPlateFormat::default().is_valid_match(raw)
}

pub fn classify_plate(raw: &str) -> Option<PlateKind> {
    SpanishPlateFormat::default().classify(raw)
}
