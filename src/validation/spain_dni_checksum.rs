use crate::validation::{normalize_alphanumeric, Validator};

pub struct SpanishDniChecksum;

const LETTER_TABLE: [char; 23] = [
    'T', 'R', 'W', 'A', 'G', 'M', 'Y', 'F', 'P', 'D', 'X', 'B', 'N', 'J', 'Z', 'S', 'Q', 'V', 'H',
    'L', 'C', 'K', 'E',
];

const DNI_LENGTH: usize = 9;
const NUMBER_LENGTH: usize = 8;

/// The control letter of a DNI number (also used for NIE once the prefix is mapped).
pub(crate) fn dni_check_letter(number: u32) -> char {
    LETTER_TABLE[(number % 23) as usize]
}

/// Checks an already normalized `NNNNNNNNL` candidate.
fn is_valid_normalized_dni(candidate: &str) -> bool {
    if candidate.len() != DNI_LENGTH {
        return false;
    }

    let (number_part, letter_part) = candidate.split_at(NUMBER_LENGTH);
    if !number_part.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let number: u32 = match number_part.parse() {
        Ok(number) => number,
        Err(_) => return false,
    };

    letter_part.chars().next() == Some(dni_check_letter(number))
}

impl Validator for SpanishDniChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        /*
         * Spanish DNI format:
         * 8 digits followed by a letter
         * The letter is calculated by taking the number modulo 23 and using it as an index
         * into LETTER_TABLE
         */
        is_valid_normalized_dni(&normalize_alphanumeric(candidate))
    }
}

#[cfg(test)]
mod test {
    use crate::validation::*;

    #[test]
    fn test_valid_spanish_dni() {
        let valid_ids = vec![
            "12345678Z", // 12345678 % 23 = 14 -> Z
            "00000000T", // 0 % 23 = 0 -> T
            "99999999R", // 99999999 % 23 = 1 -> R
            "12345678-z",
            " 12.345.678 Z ",
        ];
        for id in valid_ids {
            assert!(SpanishDniChecksum.is_valid_match(id), "{id}");
        }
    }

    #[test]
    fn test_invalid_spanish_dni() {
        let invalid_ids = vec![
            // Wrong letter
            "12345678A",
            "00000000R",
            "99999999T",
            // Wrong length
            "123456789",
            "1234567",
            "",
            // Non-numeric first 8 chars
            "1234567A9",
            "ABCDEFGHR",
            // NIE is not a DNI
            "X0000000T",
        ];
        for id in invalid_ids {
            assert!(!SpanishDniChecksum.is_valid_match(id), "{id}");
        }
    }

    #[test]
    fn every_number_has_exactly_one_valid_letter() {
        for number in [0u32, 1, 22, 23, 4_567_890, 12_345_678, 87_654_321, 99_999_999] {
            let valid_letter = super::dni_check_letter(number);
            for letter in 'A'..='Z' {
                let candidate = format!("{number:08}{letter}");
                assert_eq!(
                    SpanishDniChecksum.is_valid_match(&candidate),
                    letter == valid_letter,
                    "{candidate}"
                );
            }
        }
    }
}
