//! Mailbox board representation.

use chess_core::{Color, Fen, FenError, File, Piece, Rank, Square};
use std::fmt;

/// An 8x8 board mapping each square to an optional piece.
///
/// At most one piece per square by construction: all placement goes through
/// [`Board::set`] and [`Board::clear`]. Cloning yields a fully independent
/// copy, which the legality filter uses to simulate candidate moves.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<(Piece, Color)>; 64],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates a board with the standard starting setup.
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for color in [Color::White, Color::Black] {
            for (file, &piece) in File::ALL.iter().zip(back_rank.iter()) {
                board.set(Square::new(*file, color.back_rank()), piece, color);
            }
            for file in File::ALL {
                board.set(
                    Square::new(file, color.pawn_start_rank()),
                    Piece::Pawn,
                    color,
                );
            }
        }
        board
    }

    /// Builds a board from a FEN string's piece placement field.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = Fen::parse(fen)?;
        Self::from_placement(&parsed.piece_placement)
    }

    /// Builds a board from a FEN piece placement string
    /// (e.g., "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").
    pub fn from_placement(placement: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        // FEN lists rank 8 first.
        for (rank_idx, rank_str) in placement.split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::InvalidPiecePlacement(
                    "more than 8 ranks".to_string(),
                ));
            }
            let rank = Rank::from_index(7 - rank_idx as u8).expect("rank index in range");
            let mut file = 0u8;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as u8;
                } else if let Some((piece, color)) = Piece::from_fen_char(c) {
                    let Some(file_enum) = File::from_index(file) else {
                        return Err(FenError::InvalidPiecePlacement(format!(
                            "rank '{}' overflows the board",
                            rank_str
                        )));
                    };
                    board.set(Square::new(file_enum, rank), piece, color);
                    file += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "unknown piece character '{}'",
                        c
                    )));
                }
            }
        }
        Ok(board)
    }

    /// Renders the board as a FEN piece placement string.
    pub fn to_placement(&self) -> String {
        let mut out = String::new();
        for rank_idx in (0..8).rev() {
            let rank = Rank::from_index(rank_idx).expect("rank index in range");
            let mut empty_run = 0;
            for file in File::ALL {
                match self.get(Square::new(file, rank)) {
                    Some((piece, color)) => {
                        if empty_run > 0 {
                            out.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        out.push(piece.to_fen_char(color));
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                out.push_str(&empty_run.to_string());
            }
            if rank_idx > 0 {
                out.push('/');
            }
        }
        out
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn get(&self, square: Square) -> Option<(Piece, Color)> {
        self.squares[square.index() as usize]
    }

    /// Places a piece on the given square, replacing any occupant.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Piece, color: Color) {
        self.squares[square.index() as usize] = Some((piece, color));
    }

    /// Removes the piece on the given square, if any.
    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.squares[square.index() as usize] = None;
    }

    /// Returns true if the given square is empty.
    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Returns the square holding the given color's king, if present.
    ///
    /// Exactly one king per color is expected for check and status queries
    /// to behave meaningfully; the board itself does not enforce this.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, piece, c)| piece == Piece::King && c == color)
            .map(|(square, _, _)| square)
    }

    /// Iterates over all occupied squares as `(square, piece, color)`.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece, Color)> + '_ {
        Square::all().filter_map(|square| {
            self.get(square)
                .map(|(piece, color)| (square, piece, color))
        })
    }

    /// Iterates over the occupied squares of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces()
            .filter(move |&(_, _, c)| c == color)
            .map(|(square, piece, _)| (square, piece))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

/// ASCII rendering, rank 8 at the top, for test failure output.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank_idx in (0..8).rev() {
            let rank = Rank::from_index(rank_idx).expect("rank index in range");
            write!(f, "{} ", rank)?;
            for file in File::ALL {
                match self.get(Square::new(file, rank)) {
                    Some((piece, color)) => write!(f, "{} ", piece.to_fen_char(color))?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
