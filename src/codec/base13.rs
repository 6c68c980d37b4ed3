//! Board text <-> base-13 numeral codec.
//!
//! A board maps to a fixed-width 64-digit base-13 numeral, one digit per
//! square. Each rank is expanded, reversed, and the ranks concatenated in
//! text order; every square symbol is then replaced by its digit from
//! [`ALPHABET`]. Decoding runs the same steps backwards.
//!
//! The substitution works on whole strings, one alphabet entry at a time.
//! Encoding walks the table front to back, decoding back to front. Both
//! directions are exact inverses, so for every valid board text `f` and
//! every 64-digit numeral `n`:
//!
//! ```text
//! decode_board(encode_board(f)) == f
//! encode_board(decode_board(n)) == n
//! ```

use crate::board::{
    compress_rank, expand_board, reverse_str, FenFault, ALPHABET, FILES, SEPARATOR, SQUARE_COUNT,
};
use crate::numeral::{digit_value, pad_numeral};

/// Reasons a base-13 numeral cannot be decoded into a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralFault {
    #[error("expected at most 64 digits, got {0}")]
    TooLong(usize),

    #[error("invalid base-13 digit '{0}'")]
    InvalidDigit(char),
}

/// Errors that can occur while encoding or decoding a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardCodecError {
    #[error("malformed board text: {0}")]
    MalformedFen(#[from] FenFault),

    #[error("malformed board numeral: {0}")]
    MalformedNumeral(#[from] NumeralFault),
}

/// Applies `(from, to)` character substitutions to `s`, in iteration order.
fn substitute<I>(s: String, rules: I) -> String
where
    I: IntoIterator<Item = (char, char)>,
{
    let mut buf = [0u8; 4];
    rules
        .into_iter()
        .fold(s, |acc, (from, to)| acc.replace(from, to.encode_utf8(&mut buf)))
}

/// Encodes board text into its 64-digit base-13 numeral.
///
/// Only the piece placement is accepted. A full FEN line must go through
/// [`placement_field`](crate::board::placement_field) first.
pub fn encode_board(text: &str) -> Result<String, BoardCodecError> {
    let ranks = expand_board(text)?;
    let ordered: String = ranks.iter().map(|r| reverse_str(r)).collect();

    Ok(substitute(ordered, ALPHABET))
}

/// Decodes a base-13 numeral into board text.
///
/// Numerals shorter than 64 digits are left-padded with `0` (empty
/// squares). Longer numerals and digits outside `0`-`c` are rejected.
pub fn decode_board(numeral: &str) -> Result<String, BoardCodecError> {
    if let Some(bad) = numeral.chars().find(|&c| digit_value(c, 13).is_none()) {
        return Err(NumeralFault::InvalidDigit(bad).into());
    }
    if numeral.len() > SQUARE_COUNT {
        return Err(NumeralFault::TooLong(numeral.len()).into());
    }

    let padded = pad_numeral(numeral, SQUARE_COUNT);
    let symbols = substitute(padded, ALPHABET.iter().rev().map(|&(sym, digit)| (digit, sym)));

    // All characters are ASCII at this point, so byte chunks are squares.
    let ranks: Vec<String> = symbols
        .as_bytes()
        .chunks(FILES)
        .map(|chunk| {
            let rank: String = chunk.iter().rev().map(|&b| b as char).collect();
            compress_rank(&rank)
        })
        .collect();

    let mut sep = [0u8; 4];
    Ok(ranks.join(&*SEPARATOR.encode_utf8(&mut sep)))
}
