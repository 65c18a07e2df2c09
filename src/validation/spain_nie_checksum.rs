use crate::validation::spain_dni_checksum::dni_check_letter;
use crate::validation::{normalize_alphanumeric, Validator};

pub struct SpanishNieChecksum;

const NIE_LENGTH: usize = 9;

fn is_valid_normalized_nie(candidate: &str) -> bool {
    /*
     * Spanish NIE format:
     * X, Y or Z followed by 7 digits and a letter.
     * The prefix stands for 0, 1 or 2; the resulting 8 digit number is checked like a DNI.
     */
    if candidate.len() != NIE_LENGTH {
        return false;
    }

    let mut chars = candidate.chars();
    let prefix_value = match chars.next() {
        Some('X') => 0,
        Some('Y') => 1,
        Some('Z') => 2,
        _ => return false,
    };

    let mut number = prefix_value;
    for _ in 0..7 {
        match chars.next().and_then(|c| c.to_digit(10)) {
            Some(digit) => number = number * 10 + digit,
            None => return false,
        }
    }

    chars.next() == Some(dni_check_letter(number))
}

impl Validator for SpanishNieChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        is_valid_normalized_nie(&normalize_alphanumeric(candidate))
    }
}
