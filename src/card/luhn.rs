//! Luhn (mod 10) checksum.

/// Returns `true` when `digits` passes the Luhn checksum.
///
/// Starting from the second digit from the right, every other digit is doubled
/// and reduced by 9 when the result exceeds 9. The number is valid when the sum
/// of all digits is a multiple of 10. Empty input and strings containing
/// anything other than ASCII digits are never valid.
///
/// ```
/// use testcard_batch::card::luhn;
///
/// assert!(luhn::is_valid("4532015112830366"));
/// assert!(!luhn::is_valid("4532015112830367"));
/// ```
pub fn is_valid(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut sum = 0u32;
    for (position, byte) in digits.bytes().rev().enumerate() {
        if !byte.is_ascii_digit() {
            return false;
        }
        sum += weighted(u32::from(byte - b'0'), position % 2 == 1);
    }
    sum % 10 == 0
}

/// Computes the digit that makes `payload` followed by it Luhn-valid.
///
/// Returns `None` when `payload` contains a non-digit character.
pub fn check_digit(payload: &str) -> Option<u8> {
    let mut sum = 0u32;
    for (position, byte) in payload.bytes().rev().enumerate() {
        if !byte.is_ascii_digit() {
            return None;
        }
        // the check digit will occupy position 0, shifting every payload digit by one
        sum += weighted(u32::from(byte - b'0'), position % 2 == 0);
    }
    Some(((10 - sum % 10) % 10) as u8)
}

fn weighted(digit: u32, doubled: bool) -> u32 {
    if !doubled {
        return digit;
    }
    let twice = digit * 2;
    if twice > 9 { twice - 9 } else { twice }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_numbers_should_validate() {
        assert!(is_valid("4532015112830366"));
        assert!(is_valid("79927398713"));
        assert!(is_valid("378282246310005"));
        assert!(is_valid("0"));
    }

    #[test]
    fn single_digit_perturbation_should_invalidate() {
        assert!(!is_valid("4532015112830367"));
        assert!(!is_valid("79927398710"));
    }

    #[test]
    fn malformed_input_should_be_invalid() {
        assert!(!is_valid(""));
        assert!(!is_valid("4532 0151 1283 0366"));
        assert!(!is_valid("45320151128303a6"));
    }

    #[test]
    fn validation_should_be_deterministic() {
        let candidate = "6011111111111117";
        let first = is_valid(candidate);
        for _ in 0..10 {
            assert_eq!(is_valid(candidate), first);
        }
    }

    #[test]
    fn check_digit_should_complete_payload() {
        assert_eq!(check_digit("453201511283036"), Some(6));
        assert_eq!(check_digit("7992739871"), Some(3));
        assert_eq!(check_digit(""), Some(0));
        assert_eq!(check_digit("12a4"), None);

        for payload in ["4", "30000000000000", "622126000000001"] {
            let digit = check_digit(payload).unwrap();
            assert!(is_valid(&format!("{payload}{digit}")));
        }
    }
}
