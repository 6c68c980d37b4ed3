//! Square contents and the 13-symbol board alphabet.
//!
//! Every square is either empty or holds a colored piece. Each of those 13
//! states has a single-character board symbol and a base-13 digit.

/// The color of a piece. White pieces are written uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

/// The type of a chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Returns the lowercase board-text letter.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parses a piece type from its letter, ignoring case.
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    const fn offset(self) -> u8 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 4,
            PieceKind::Queen => 5,
            PieceKind::King => 6,
        }
    }
}

/// Symbol for an empty square in the expanded board text.
pub const EMPTY_SYMBOL: char = '.';

/// The board alphabet as (symbol, base-13 digit) pairs.
///
/// Order matters: encoding substitutes entries front to back and decoding
/// back to front. `b` is both a piece symbol and a digit (white queen), so
/// any other order lets one substitution re-match the output of another.
pub const ALPHABET: [(char, char); 13] = [
    ('.', '0'),
    ('p', '1'),
    ('n', '2'),
    ('b', '3'),
    ('r', '4'),
    ('q', '5'),
    ('k', '6'),
    ('P', '7'),
    ('N', '8'),
    ('B', '9'),
    ('R', 'a'),
    ('Q', 'b'),
    ('K', 'c'),
];

/// The contents of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    Empty,
    Piece(Color, PieceKind),
}

impl Square {
    /// Returns the square's symbol in expanded board text.
    pub const fn symbol(self) -> char {
        match self {
            Square::Empty => EMPTY_SYMBOL,
            Square::Piece(Color::Black, kind) => kind.letter(),
            Square::Piece(Color::White, kind) => kind.letter().to_ascii_uppercase(),
        }
    }

    /// Parses a square from its expanded board-text symbol.
    pub fn from_symbol(c: char) -> Option<Square> {
        if c == EMPTY_SYMBOL {
            return Some(Square::Empty);
        }
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Square::Piece(color, kind))
    }

    /// Returns the square's value in the base-13 alphabet (0..=12).
    pub const fn digit(self) -> u8 {
        match self {
            Square::Empty => 0,
            Square::Piece(Color::Black, kind) => kind.offset(),
            Square::Piece(Color::White, kind) => kind.offset() + 6,
        }
    }

    /// Parses a square from its base-13 digit value.
    pub fn from_digit(d: u8) -> Option<Square> {
        let (symbol, _) = ALPHABET.get(d as usize)?;
        Square::from_symbol(*symbol)
    }

    /// Returns true if the square holds a piece.
    pub const fn is_occupied(self) -> bool {
        matches!(self, Square::Piece(..))
    }
}
