//! Property tests for the numeral converter and the board codec.

use proptest::collection::vec;
use proptest::prelude::*;

use boardseed::board::{compress_rank, Square, FILES, SQUARE_COUNT};
use boardseed::codec::{decode_board, encode_board};
use boardseed::numeral::{convert, digit_symbol, MAX_BASE, MIN_BASE};

/// Any assignment of the 13 square states to 64 squares, as board text.
fn arb_board() -> impl Strategy<Value = String> {
    vec(0u8..13, SQUARE_COUNT).prop_map(|digits| {
        let symbols: Vec<char> = digits
            .into_iter()
            .filter_map(Square::from_digit)
            .map(Square::symbol)
            .collect();
        symbols
            .chunks(FILES)
            .map(|rank| compress_rank(&rank.iter().collect::<String>()))
            .collect::<Vec<_>>()
            .join("/")
    })
}

/// Any 64-digit base-13 numeral, leading zeros included.
fn arb_board_numeral() -> impl Strategy<Value = String> {
    vec(0u8..13, SQUARE_COUNT).prop_map(|digits| digits.into_iter().filter_map(digit_symbol).collect())
}

/// A pair of bases and a numeral valid in the first one.
fn arb_numeral_in_base() -> impl Strategy<Value = (u32, u32, String)> {
    (MIN_BASE..=MAX_BASE, MIN_BASE..=MAX_BASE).prop_flat_map(|(from, to)| {
        let digits = vec(0..from as u8, 0..96)
            .prop_map(|d| d.into_iter().filter_map(digit_symbol).collect::<String>());
        (Just(from), Just(to), digits)
    })
}

proptest! {
    #[test]
    fn prop_decode_inverts_encode(board in arb_board()) {
        let numeral = encode_board(&board).unwrap();
        prop_assert_eq!(numeral.len(), SQUARE_COUNT);
        prop_assert_eq!(decode_board(&numeral).unwrap(), board);
    }

    #[test]
    fn prop_encode_inverts_decode(numeral in arb_board_numeral()) {
        let board = decode_board(&numeral).unwrap();
        prop_assert_eq!(encode_board(&board).unwrap(), numeral);
    }

    #[test]
    fn prop_convert_roundtrip((from, to, value) in arb_numeral_in_base()) {
        let there = convert(&value, from, to).unwrap();
        let back = convert(&there, to, from).unwrap();
        let stripped = value.trim_start_matches('0');
        let expected = if stripped.is_empty() { "0" } else { stripped };
        prop_assert_eq!(back, expected);
    }

    #[test]
    fn prop_convert_never_pads(value in "[1-9a-f][0-9a-f]{0,40}") {
        let dec = convert(&value, 16, 10).unwrap();
        prop_assert!(!dec.starts_with('0'));
    }
}
