//! Numeral handling.
//!
//! Conversion of numerals between arbitrary bases 2 to 64 over unbounded
//! integers, plus the base-16 <-> byte bridge used by the hashing pipeline.

pub mod bytes;
pub mod radix;

pub use bytes::{bytes_to_hex, hex_to_bytes};
pub use radix::{
    base13_to_base16, base16_to_base13, convert, digit_symbol, digit_value, format_numeral,
    pad_numeral, parse_numeral, NumeralError, MAX_BASE, MIN_BASE, NUMERAL_DIGITS,
};
