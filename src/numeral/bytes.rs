//! Base-16 numeral <-> byte conversions.

use num_traits::Zero;

use super::radix::{parse_numeral, NumeralError};

/// Interprets a base-16 numeral as big-endian bytes.
///
/// An odd-length numeral is left-padded with a zero nibble, so `"abc"`
/// yields `[0x0a, 0xbc]`. Leading zero digits are kept as zero bytes. Only
/// lowercase hex digits are accepted, matching the numeral alphabet.
pub fn hex_to_bytes(value: &str) -> Result<Vec<u8>, NumeralError> {
    let n = parse_numeral(value, 16)?;

    // Every digit is ASCII once parsed, so `len` counts nibbles.
    let width = (value.len() + 1) / 2;
    let digits = if n.is_zero() { Vec::new() } else { n.to_bytes_be() };

    let mut out = vec![0u8; width - digits.len()];
    out.extend(digits);
    Ok(out)
}

/// Renders bytes as a lowercase big-endian base-16 numeral, two digits per
/// byte.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
