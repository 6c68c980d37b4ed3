//! Entropy derivation and random board generation.
//!
//! Thin pipelines over the board codec: hashing a board into truncated
//! entropy, and turning fresh randomness into a uniformly random board.

pub mod derive;
pub mod random;

pub use derive::{
    board_digest, board_digest_hex, board_to_base16, derive_entropy, BitLength, Entropy,
    EntropyError, DIGEST_LEN,
};
pub use random::{board_space, random_board, random_board_with, RANDOM_BYTES};
