//! Board text: the run-length piece-placement notation.
//!
//! Format: eight ranks separated by `/`. Inside a rank, a digit `1`-`8`
//! stands for that many consecutive empty squares and a piece letter for one
//! occupied square (uppercase white, lowercase black). Expanded ranks spell
//! every square out, using `.` for empty.

use super::square::{Square, EMPTY_SYMBOL};

/// Ranks on the board.
pub const RANKS: usize = 8;

/// Squares per rank.
pub const FILES: usize = 8;

/// Total number of squares.
pub const SQUARE_COUNT: usize = RANKS * FILES;

/// Rank separator in board text.
pub const SEPARATOR: char = '/';

/// The standard starting position.
pub const START_BOARD: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// The board with no pieces.
pub const EMPTY_BOARD: &str = "8/8/8/8/8/8/8/8";

/// Reasons a board text fails to describe 64 squares.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenFault {
    #[error("expected 8 ranks separated by '/', got {0}")]
    WrongRankCount(usize),

    #[error("rank {rank} describes {width} squares, expected 8")]
    WrongRankWidth { rank: usize, width: usize },

    #[error("invalid character '{c}' in rank {rank}")]
    InvalidCharacter { rank: usize, c: char },

    #[error("adjacent empty-run digits in rank {rank}")]
    AdjacentRunDigits { rank: usize },
}

/// Returns the piece-placement field of a full FEN line.
///
/// A full FEN line carries side to move, castling and clocks after the
/// placement. The board functions never strip those themselves; callers
/// holding a FEN line pass it through here first.
pub fn placement_field(text: &str) -> &str {
    text.split_whitespace().next().unwrap_or("")
}

/// Splits board text into its ranks, checking there are exactly eight.
pub fn split_ranks(text: &str) -> Result<Vec<&str>, FenFault> {
    let ranks: Vec<&str> = text.split(SEPARATOR).collect();
    if ranks.len() != RANKS {
        return Err(FenFault::WrongRankCount(ranks.len()));
    }
    Ok(ranks)
}

/// Expands one rank of board text into its 8 square symbols.
///
/// `index` is the rank's position in the text and is only used for error
/// reporting.
pub fn expand_rank(rank: &str, index: usize) -> Result<String, FenFault> {
    let mut expanded = String::with_capacity(FILES);
    let mut prev_was_run = false;

    for c in rank.chars() {
        match c {
            '1'..='8' => {
                if prev_was_run {
                    return Err(FenFault::AdjacentRunDigits { rank: index });
                }
                let run = c as usize - '0' as usize;
                expanded.extend(std::iter::repeat(EMPTY_SYMBOL).take(run));
                prev_was_run = true;
            }
            _ => match Square::from_symbol(c) {
                Some(sq) if sq.is_occupied() => {
                    expanded.push(c);
                    prev_was_run = false;
                }
                _ => return Err(FenFault::InvalidCharacter { rank: index, c }),
            },
        }
        if expanded.len() > FILES {
            break;
        }
    }

    if expanded.len() != FILES {
        return Err(FenFault::WrongRankWidth {
            rank: index,
            width: expanded.len(),
        });
    }
    Ok(expanded)
}

/// Compresses an expanded rank, replacing each run of empty squares with
/// its length.
pub fn compress_rank(expanded: &str) -> String {
    let mut out = String::with_capacity(expanded.len());
    let mut run = 0usize;

    for c in expanded.chars() {
        if c == EMPTY_SYMBOL {
            run += 1;
            continue;
        }
        if run > 0 {
            out.push_str(&run.to_string());
            run = 0;
        }
        out.push(c);
    }
    if run > 0 {
        out.push_str(&run.to_string());
    }
    out
}

/// Expands board text into its 8 ranks of 8 square symbols each, in text
/// order.
///
/// Any character outside the board alphabet, whitespace included, is
/// rejected.
pub fn expand_board(text: &str) -> Result<Vec<String>, FenFault> {
    split_ranks(text)?
        .into_iter()
        .enumerate()
        .map(|(i, rank)| expand_rank(rank, i))
        .collect()
}

/// Parses board text into its 64 squares, in text order.
pub fn parse_squares(text: &str) -> Result<Vec<Square>, FenFault> {
    let ranks = expand_board(text)?;
    Ok(ranks
        .iter()
        .flat_map(|r| r.chars())
        .filter_map(Square::from_symbol)
        .collect())
}

/// Reverses a string by characters.
pub fn reverse_str(s: &str) -> String {
    s.chars().rev().collect()
}
