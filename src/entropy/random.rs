//! Uniformly random board generation.
//!
//! A board numeral is a 64-digit base-13 value, so there are exactly 13^64
//! boards. 32 random bytes cover 2^256 values, about 2^19 times that range.
//! Draws at or above the largest multiple of 13^64 below 2^256 are
//! discarded and redrawn; the rest are reduced mod 13^64, which is the same
//! as keeping the last 64 base-13 digits. Every board is equally likely.

use num_bigint::BigUint;
use num_traits::One;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use super::derive::EntropyError;
use crate::board::SQUARE_COUNT;
use crate::codec::decode_board;
use crate::numeral::{bytes_to_hex, format_numeral, pad_numeral, parse_numeral};

/// Number of random bytes drawn per attempt.
pub const RANDOM_BYTES: usize = 32;

/// Returns 13^64, the number of distinct boards.
pub fn board_space() -> BigUint {
    BigUint::from(13u32).pow(SQUARE_COUNT as u32)
}

/// Generates a random board from the operating system's secure RNG.
///
/// Each call draws fresh bytes; nothing is cached between calls.
pub fn random_board() -> Result<String, EntropyError> {
    random_board_with(&mut OsRng)
}

/// Generates a random board from the given cryptographic RNG.
pub fn random_board_with<R>(rng: &mut R) -> Result<String, EntropyError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let space = board_space();
    let draws = BigUint::one() << (RANDOM_BYTES * 8);
    let limit = &draws - (&draws % &space);

    let mut buf = [0u8; RANDOM_BYTES];
    loop {
        rng.try_fill_bytes(&mut buf)?;
        let value = parse_numeral(&bytes_to_hex(&buf), 16)?;
        if value >= limit {
            continue;
        }

        let base13 = pad_numeral(&format_numeral(&value, 13)?, SQUARE_COUNT);
        let tail = &base13[base13.len() - SQUARE_COUNT..];
        return Ok(decode_board(tail)?);
    }
}
