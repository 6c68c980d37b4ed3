//! Entropy derivation from board positions.
//!
//! Pipeline: board text -> base-13 numeral -> base-16 numeral -> big-endian
//! bytes -> SHA-256 -> keep the least-significant `bits / 8` bytes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::codec::{encode_board, BoardCodecError};
use crate::numeral::{base13_to_base16, bytes_to_hex, hex_to_bytes, NumeralError};

/// Size of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Errors that can occur while deriving entropy or generating boards.
#[derive(Debug, thiserror::Error)]
pub enum EntropyError {
    #[error(transparent)]
    Board(#[from] BoardCodecError),

    #[error(transparent)]
    Numeral(#[from] NumeralError),

    #[error("unsupported entropy length '{0}', expected one of 128, 160, 192, 224, 256")]
    UnsupportedBitLength(String),

    #[error("random source failed: {0}")]
    Rng(#[from] rand::Error),
}

/// Supported entropy sizes, matching the standard mnemonic lengths of 12 to
/// 24 words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum BitLength {
    B128,
    B160,
    B192,
    B224,
    #[default]
    B256,
}

impl BitLength {
    pub const ALL: [BitLength; 5] = [
        BitLength::B128,
        BitLength::B160,
        BitLength::B192,
        BitLength::B224,
        BitLength::B256,
    ];

    /// Returns the number of bits.
    pub const fn bits(self) -> u16 {
        match self {
            BitLength::B128 => 128,
            BitLength::B160 => 160,
            BitLength::B192 => 192,
            BitLength::B224 => 224,
            BitLength::B256 => 256,
        }
    }

    /// Returns the number of bytes.
    pub const fn byte_len(self) -> usize {
        self.bits() as usize / 8
    }

    /// Returns the number of hex characters.
    pub const fn hex_len(self) -> usize {
        self.bits() as usize / 4
    }
}

impl TryFrom<u16> for BitLength {
    type Error = EntropyError;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        BitLength::ALL
            .into_iter()
            .find(|b| b.bits() == bits)
            .ok_or_else(|| EntropyError::UnsupportedBitLength(bits.to_string()))
    }
}

impl From<BitLength> for u16 {
    fn from(b: BitLength) -> u16 {
        b.bits()
    }
}

impl FromStr for BitLength {
    type Err = EntropyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits: u16 = s
            .trim()
            .parse()
            .map_err(|_| EntropyError::UnsupportedBitLength(s.to_string()))?;
        BitLength::try_from(bits)
    }
}

impl fmt::Display for BitLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

fn serialize_hex<T, S>(bytes: T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<[u8]>,
    S: Serializer,
{
    serializer.serialize_str(&bytes_to_hex(bytes.as_ref()))
}

/// Truncated digest of a board position.
///
/// Serializes as `{"bits": 256, "hex": "..."}`, the shape a mnemonic
/// encoder expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entropy {
    bits: BitLength,
    #[serde(rename = "hex", serialize_with = "serialize_hex")]
    bytes: Vec<u8>,
}

impl Entropy {
    /// Returns the entropy size.
    pub fn bits(&self) -> BitLength {
        self.bits
    }

    /// Returns the raw entropy bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the entropy as `bits / 4` lowercase hex characters.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.bytes)
    }
}

impl fmt::Display for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Returns the base-16 numeral of a board, without padding.
pub fn board_to_base16(text: &str) -> Result<String, EntropyError> {
    let base13 = encode_board(text)?;
    Ok(base13_to_base16(&base13)?)
}

/// Returns the full SHA-256 digest of a board's big-endian bytes.
pub fn board_digest(text: &str) -> Result<[u8; DIGEST_LEN], EntropyError> {
    let bytes = hex_to_bytes(&board_to_base16(text)?)?;
    Ok(Sha256::digest(&bytes).into())
}

/// Returns the full SHA-256 digest of a board as 64 hex characters.
pub fn board_digest_hex(text: &str) -> Result<String, EntropyError> {
    Ok(bytes_to_hex(&board_digest(text)?))
}

/// Derives `bits` of entropy from a board.
///
/// The result is the tail of the board digest: truncation keeps the
/// least-significant end.
pub fn derive_entropy(text: &str, bits: BitLength) -> Result<Entropy, EntropyError> {
    let digest = board_digest(text)?;
    Ok(Entropy {
        bits,
        bytes: digest[DIGEST_LEN - bits.byte_len()..].to_vec(),
    })
}
