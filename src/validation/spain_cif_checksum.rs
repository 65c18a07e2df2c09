use crate::validation::{normalize_alphanumeric, sum_all_digits, Validator};
use serde::{Deserialize, Serialize};

pub struct SpanishCifChecksum;

const CIF_LENGTH: usize = 9;
const ORGANIZATION_LETTERS: &str = "ABCDEFGHJKLMNPQRSUVW";
const CONTROL_LETTERS: [char; 10] = ['J', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

/// Which form of control character an organization type must carry.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CifCheckKind {
    Digit,
    Letter,
    Either,
}

impl CifCheckKind {
    pub fn for_organization(organization: char) -> Self {
        match organization {
            'K' | 'P' | 'Q' | 'S' | 'N' | 'W' => CifCheckKind::Letter,
            'A' | 'B' | 'E' | 'H' => CifCheckKind::Digit,
            _ => CifCheckKind::Either,
        }
    }
}

/// Computes the control digit for the 7 digit body of a CIF.
/// Returns `None` if the body is not exactly 7 ASCII digits.
fn cif_control_digit(body: &str) -> Option<u32> {
    if body.len() != 7 {
        return None;
    }
    let mut even_sum = 0;
    let mut odd_sum = 0;
    for (idx, c) in body.chars().enumerate() {
        let digit = c.to_digit(10)?;
        if idx % 2 == 0 {
            // doubling then subtracting 9 above 9 is the same as summing the digits
            even_sum += sum_all_digits(digit * 2);
        } else {
            odd_sum += digit;
        }
    }
    Some((10 - (even_sum + odd_sum) % 10) % 10)
}

fn is_valid_normalized_cif(candidate: &str) -> bool {
    if candidate.len() != CIF_LENGTH {
        return false;
    }

    let organization = match candidate.chars().next() {
        Some(c) if ORGANIZATION_LETTERS.contains(c) => c,
        _ => return false,
    };

    let control_digit = match candidate.get(1..8).and_then(cif_control_digit) {
        Some(digit) => digit,
        None => return false,
    };

    let provided = match candidate.chars().next_back() {
        Some(c) => c,
        None => return false,
    };
    let as_digit = provided.to_digit(10) == Some(control_digit);
    let as_letter = provided == CONTROL_LETTERS[control_digit as usize];

    match CifCheckKind::for_organization(organization) {
        CifCheckKind::Digit => as_digit,
        CifCheckKind::Letter => as_letter,
        CifCheckKind::Either => as_digit || as_letter,
    }
}

impl Validator for SpanishCifChecksum {
    // https://es.wikipedia.org/wiki/C%C3%B3digo_de_identificaci%C3%B3n_fiscal
    fn is_valid_match(&self, candidate: &str) -> bool {
        is_valid_normalized_cif(&normalize_alphanumeric(candidate))
    }
}
