//! Board codecs.
//!
//! Maps board text to the fixed-width base-13 numeral that the entropy
//! pipeline hashes, and back.

pub mod base13;

pub use base13::{decode_board, encode_board, BoardCodecError, NumeralFault};
