use crate::validation::Validator;

/// Length and alphabet check of a VIN. The position 9 check digit is not verified.
pub struct VinStructure;

const VIN_LENGTH: usize = 17;

#[inline]
fn is_vin_char(c: char) -> bool {
    c.is_ascii_alphanumeric() && !matches!(c.to_ascii_uppercase(), 'I' | 'O' | 'Q')
}

impl Validator for VinStructure {
    fn is_valid_match(&self, candidate: &str) -> bool {
        // byte length equals char count once every char is ASCII
        candidate.len() == VIN_LENGTH && candidate.chars().all(is_vin_char)
    }
}

#[cfg(test)]
mod test {
    use crate::validation::*;

    #[test]
    fn test_valid_vins() {
        let valid_vins = vec![
            "WVWZZZ3CZWE123456",
            "wvwzzz3czwe123456",
            "1HGCM82633A004352",
            "VF1RFB00X12345678",
            "00000000000000000",
        ];
        for vin in valid_vins {
            assert!(VinStructure.is_valid_match(vin), "{vin}");
        }
    }

    #[test]
    fn test_invalid_vins() {
        let invalid_vins = vec![
            // forbidden letters
            "WVWZZZ3CZWI123456",
            "WVWZZZ3CZWO123456",
            "WVWZZZ3CZWQ123456",
            "wvwzzz3czwq123456",
            // wrong length
            "WVWZZZ3CZWE12345",
            "WVWZZZ3CZWE1234567",
            "",
            // separators are not stripped
            "WVW-ZZZ3CZWE12345",
            // non ASCII of the same char count
            "WVWZZZ3CZWÑ123456",
        ];
        for vin in invalid_vins {
            assert!(!VinStructure.is_valid_match(vin), "{vin}");
        }
    }
}
