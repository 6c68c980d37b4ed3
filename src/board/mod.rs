//! Board representation.
//!
//! Contains the square alphabet and the run-length board text notation.
//! No chess rules are modelled; a board is 64 symbolic cells.

pub mod square;
pub mod text;

pub use square::{Color, PieceKind, Square, ALPHABET, EMPTY_SYMBOL};
pub use text::{
    compress_rank, expand_board, expand_rank, parse_squares, placement_field, reverse_str,
    split_ranks, FenFault, EMPTY_BOARD, FILES, RANKS, SEPARATOR, SQUARE_COUNT, START_BOARD,
};
