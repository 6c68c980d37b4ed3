//! Arbitrary-base numeral conversion.
//!
//! A numeral is a string over the 64-symbol alphabet
//! `0-9`, `a-z`, `A-Z`, `+`, `/`. Base N uses the first N symbols. Values
//! are parsed into unbounded `BigUint`s so numerals of any length convert
//! exactly (a full board numeral is 64 base-13 digits, roughly 2^237).

use num_bigint::BigUint;
use num_traits::Zero;

/// The ordered numeral alphabet. Base N uses the first N symbols.
pub const NUMERAL_DIGITS: &[u8; 64] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ+/";

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

/// Largest supported base.
pub const MAX_BASE: u32 = NUMERAL_DIGITS.len() as u32;

/// Errors that can occur while parsing or converting numerals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    #[error("base must be between 2 and 64, got {0}")]
    InvalidBase(u32),

    #[error("invalid digit '{digit}' for base {base}")]
    InvalidDigit { digit: char, base: u32 },
}

fn check_base(base: u32) -> Result<(), NumeralError> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(NumeralError::InvalidBase(base))
    }
}

/// Returns the value of `c` as a digit in `base`, if it is one of the
/// first `base` symbols of the alphabet.
pub fn digit_value(c: char, base: u32) -> Option<u8> {
    let b = u8::try_from(c).ok()?;
    let pos = NUMERAL_DIGITS[..base.min(MAX_BASE) as usize]
        .iter()
        .position(|&d| d == b)?;
    Some(pos as u8)
}

/// Returns the symbol for a digit value, if it is below 64.
#[inline]
pub fn digit_symbol(value: u8) -> Option<char> {
    NUMERAL_DIGITS.get(value as usize).map(|&b| b as char)
}

/// Parses a numeral in `base` into an unbounded integer.
///
/// The empty string parses as zero.
pub fn parse_numeral(value: &str, base: u32) -> Result<BigUint, NumeralError> {
    check_base(base)?;

    let digits = value
        .chars()
        .map(|c| digit_value(c, base).ok_or(NumeralError::InvalidDigit { digit: c, base }))
        .collect::<Result<Vec<u8>, _>>()?;

    if digits.is_empty() {
        return Ok(BigUint::zero());
    }
    // Every digit was checked against `base` above, so this cannot fail.
    BigUint::from_radix_be(&digits, base).ok_or(NumeralError::InvalidBase(base))
}

/// Renders an integer as a numeral in `base` without leading zeros.
///
/// Zero renders as `"0"`.
pub fn format_numeral(value: &BigUint, base: u32) -> Result<String, NumeralError> {
    check_base(base)?;

    if value.is_zero() {
        return Ok("0".to_string());
    }
    // `to_radix_be` yields digits below `base`, which is at most 64.
    Ok(value
        .to_radix_be(base)
        .into_iter()
        .map(|d| NUMERAL_DIGITS[d as usize] as char)
        .collect())
}

/// Converts a numeral from one base to another.
///
/// Leading zeros in the input are not significant and the output is never
/// padded; callers needing a fixed width must pad with [`pad_numeral`].
pub fn convert(value: &str, from_base: u32, to_base: u32) -> Result<String, NumeralError> {
    check_base(from_base)?;
    check_base(to_base)?;
    let n = parse_numeral(value, from_base)?;
    format_numeral(&n, to_base)
}

/// Converts a base-13 numeral to base 16.
pub fn base13_to_base16(value: &str) -> Result<String, NumeralError> {
    convert(value, 13, 16)
}

/// Converts a base-16 numeral to base 13.
pub fn base16_to_base13(value: &str) -> Result<String, NumeralError> {
    convert(value, 16, 13)
}

/// Left-pads a numeral with `0` up to `width` characters. Longer input is
/// returned unchanged.
pub fn pad_numeral(value: &str, width: usize) -> String {
    format!("{:0>width$}", value, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base13_to_base16_vectors() {
        assert_eq!(base13_to_base16("c").unwrap(), "c");
        assert_eq!(base13_to_base16("10").unwrap(), "d");
        assert_eq!(base13_to_base16("00000000").unwrap(), "0");
        assert_eq!(base13_to_base16("00000001").unwrap(), "1");
        assert_eq!(base13_to_base16("421337").unwrap(), "179354");
        assert_eq!(base13_to_base16("0123456789abc").unwrap(), "1e9b6692326");
    }

    #[test]
    fn base16_to_base13_vectors() {
        assert_eq!(base16_to_base13("c").unwrap(), "c");
        assert_eq!(base16_to_base13("d").unwrap(), "10");
        assert_eq!(base16_to_base13("00000000").unwrap(), "0");
        assert_eq!(base16_to_base13("00000001").unwrap(), "1");
        assert_eq!(base16_to_base13("deadbeef").unwrap(), "476cc321c");
        assert_eq!(base16_to_base13("0123456789abcdef").unwrap(), "17a8c9b3017b847c");
    }

    #[test]
    fn empty_input_converts_to_zero() {
        assert_eq!(convert("", 10, 2).unwrap(), "0");
    }

    #[test]
    fn binary_and_base64_extremes() {
        assert_eq!(convert("255", 10, 2).unwrap(), "11111111");
        assert_eq!(convert("63", 10, 64).unwrap(), "/");
        assert_eq!(convert("64", 10, 64).unwrap(), "10");
        assert_eq!(convert("+/", 64, 10).unwrap(), "4031");
    }

    #[test]
    fn handles_values_wider_than_u128() {
        let sixty_four_c = "c".repeat(64);
        let hex = convert(&sixty_four_c, 13, 16).unwrap();
        // 13^64 - 1 is just under 2^237.
        assert_eq!(hex.len(), 60);
        assert_eq!(convert(&hex, 16, 13).unwrap(), sixty_four_c);
    }

    #[test]
    fn error_base_too_small() {
        assert_eq!(convert("1", 1, 10), Err(NumeralError::InvalidBase(1)));
        assert_eq!(convert("1", 10, 1), Err(NumeralError::InvalidBase(1)));
    }

    #[test]
    fn error_base_too_large() {
        assert_eq!(convert("1", 65, 10), Err(NumeralError::InvalidBase(65)));
        assert_eq!(convert("1", 10, 65), Err(NumeralError::InvalidBase(65)));
    }

    #[test]
    fn error_digit_outside_base() {
        assert_eq!(
            convert("12z", 10, 16),
            Err(NumeralError::InvalidDigit { digit: 'z', base: 10 })
        );
        assert_eq!(
            convert("d", 13, 16),
            Err(NumeralError::InvalidDigit { digit: 'd', base: 13 })
        );
    }

    #[test]
    fn uppercase_is_not_lowercase() {
        // 'A' is digit 36, not 10.
        assert!(convert("A", 16, 10).is_err());
        assert_eq!(convert("A", 37, 10).unwrap(), "36");
    }

    #[test]
    fn error_non_ascii_digit() {
        assert_eq!(
            convert("1é", 16, 10),
            Err(NumeralError::InvalidDigit { digit: 'é', base: 16 })
        );
    }

    #[test]
    fn pad_keeps_longer_input() {
        assert_eq!(pad_numeral("1", 4), "0001");
        assert_eq!(pad_numeral("12345", 4), "12345");
    }

    #[test]
    fn digit_lookup() {
        assert_eq!(digit_value('0', 2), Some(0));
        assert_eq!(digit_value('2', 2), None);
        assert_eq!(digit_value('/', 64), Some(63));
        assert_eq!(digit_symbol(12), Some('c'));
        assert_eq!(digit_symbol(63), Some('/'));
        assert_eq!(digit_symbol(64), None);
        assert_eq!(digit_symbol(u8::MAX), None);
    }
}
