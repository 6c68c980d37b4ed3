//! Boardseed library.
//!
//! A bijective codec between chess board positions and base-13 numerals,
//! and the entropy pipeline built on it: board text is encoded into a
//! 64-digit numeral, reinterpreted as bytes, hashed with SHA-256 and
//! truncated to mnemonic-sized entropy. Random boards are produced by the
//! reverse direction.

pub mod board;
pub mod codec;
pub mod entropy;
pub mod numeral;

pub use board::START_BOARD;
pub use codec::{decode_board, encode_board};
pub use entropy::{derive_entropy, random_board, BitLength, Entropy};
pub use numeral::convert;
