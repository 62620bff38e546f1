//! Castling rights and castle availability.
//!
//! Rights are four monotonic flags: per color, per side, each starting set
//! and only ever cleared. They are cleared when the king of that color
//! moves or is captured, or when the rook starting on that side's corner
//! moves. Rights are never inferred from piece placement or history.
//!
//! Whether a castle is actually available *this turn* is derived by
//! [`castle_available`], which combines the rights flag with the board
//! conditions: empty path between king and rook, king neither in check nor
//! crossing or landing on an attacked square, and the home corners still
//! holding the expected pieces (a flag-consistency safety net for positions
//! set up from FEN, not an identity check).

use crate::attack::is_square_attacked;
use crate::Board;
use chess_core::{Color, Piece, Square};
use std::fmt;

/// Per-color, per-side castling rights as a bit set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights(u8);

const WHITE_KINGSIDE: u8 = 0b0001;
const WHITE_QUEENSIDE: u8 = 0b0010;
const BLACK_KINGSIDE: u8 = 0b0100;
const BLACK_QUEENSIDE: u8 = 0b1000;

impl CastlingRights {
    /// All four rights set (game start).
    pub const ALL: CastlingRights = CastlingRights(0b1111);
    /// No rights.
    pub const NONE: CastlingRights = CastlingRights(0);

    const fn flag(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => WHITE_KINGSIDE,
            (Color::White, CastleSide::Queenside) => WHITE_QUEENSIDE,
            (Color::Black, CastleSide::Kingside) => BLACK_KINGSIDE,
            (Color::Black, CastleSide::Queenside) => BLACK_QUEENSIDE,
        }
    }

    /// Returns true if the given color retains the given side's right.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        (self.0 & Self::flag(color, side)) != 0
    }

    /// Clears one side's right for a color. Never restorable.
    #[inline]
    pub fn clear(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::flag(color, side);
    }

    /// Clears both rights for a color (its king moved or was captured).
    #[inline]
    pub fn clear_color(&mut self, color: Color) {
        self.clear(color, CastleSide::Kingside);
        self.clear(color, CastleSide::Queenside);
    }

    /// Parses a FEN castling field ("KQkq", subsets, or "-").
    pub fn from_fen_field(field: &str) -> Self {
        let mut rights = CastlingRights::NONE;
        for c in field.chars() {
            match c {
                'K' => rights.0 |= WHITE_KINGSIDE,
                'Q' => rights.0 |= WHITE_QUEENSIDE,
                'k' => rights.0 |= BLACK_KINGSIDE,
                'q' => rights.0 |= BLACK_QUEENSIDE,
                _ => {}
            }
        }
        rights
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "-");
        }
        for (flag, c) in [
            (WHITE_KINGSIDE, 'K'),
            (WHITE_QUEENSIDE, 'Q'),
            (BLACK_KINGSIDE, 'k'),
            (BLACK_QUEENSIDE, 'q'),
        ] {
            if self.0 & flag != 0 {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

/// One of the two castling sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Both sides, kingside first.
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// The king's home square for the given color.
    #[inline]
    pub const fn king_home(color: Color) -> Square {
        match color {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        }
    }

    /// The square the king lands on when castling this side.
    #[inline]
    pub const fn king_target(self, color: Color) -> Square {
        match (self, color) {
            (CastleSide::Kingside, Color::White) => Square::G1,
            (CastleSide::Kingside, Color::Black) => Square::G8,
            (CastleSide::Queenside, Color::White) => Square::C1,
            (CastleSide::Queenside, Color::Black) => Square::C8,
        }
    }

    /// The home corner of this side's rook.
    #[inline]
    pub const fn rook_home(self, color: Color) -> Square {
        match (self, color) {
            (CastleSide::Kingside, Color::White) => Square::H1,
            (CastleSide::Kingside, Color::Black) => Square::H8,
            (CastleSide::Queenside, Color::White) => Square::A1,
            (CastleSide::Queenside, Color::Black) => Square::A8,
        }
    }

    /// The square the rook lands on, adjacent to the king's destination.
    #[inline]
    pub const fn rook_target(self, color: Color) -> Square {
        match (self, color) {
            (CastleSide::Kingside, Color::White) => Square::F1,
            (CastleSide::Kingside, Color::Black) => Square::F8,
            (CastleSide::Queenside, Color::White) => Square::D1,
            (CastleSide::Queenside, Color::Black) => Square::D8,
        }
    }

    /// The squares strictly between the king and the rook, which must all
    /// be empty.
    pub fn between(self, color: Color) -> &'static [Square] {
        const WK: [Square; 2] = [Square::F1, Square::G1];
        const WQ: [Square; 3] = [Square::D1, Square::C1, Square::B1];
        const BK: [Square; 2] = [Square::F8, Square::G8];
        const BQ: [Square; 3] = [Square::D8, Square::C8, Square::B8];
        match (self, color) {
            (CastleSide::Kingside, Color::White) => &WK,
            (CastleSide::Queenside, Color::White) => &WQ,
            (CastleSide::Kingside, Color::Black) => &BK,
            (CastleSide::Queenside, Color::Black) => &BQ,
        }
    }

    /// The squares the king occupies, crosses, or lands on, none of which
    /// may be attacked. Includes the king's current square, so "not
    /// currently in check" is part of the same sweep.
    pub fn king_path(self, color: Color) -> [Square; 3] {
        const WK: [Square; 3] = [Square::E1, Square::F1, Square::G1];
        const WQ: [Square; 3] = [Square::E1, Square::D1, Square::C1];
        const BK: [Square; 3] = [Square::E8, Square::F8, Square::G8];
        const BQ: [Square; 3] = [Square::E8, Square::D8, Square::C8];
        match (self, color) {
            (CastleSide::Kingside, Color::White) => WK,
            (CastleSide::Queenside, Color::White) => WQ,
            (CastleSide::Kingside, Color::Black) => BK,
            (CastleSide::Queenside, Color::Black) => BQ,
        }
    }
}

/// Returns true if `color` may castle on `side` this turn.
///
/// All conditions must hold: the rights flag is set; the home squares still
/// hold the king and a friendly rook; every square between them is empty;
/// and no square the king occupies, crosses, or lands on is attacked by the
/// enemy (using the broad attack query, so even a pawn's forward push over
/// the path blocks castling).
pub fn castle_available(
    board: &Board,
    rights: CastlingRights,
    color: Color,
    side: CastleSide,
) -> bool {
    if !rights.has(color, side) {
        return false;
    }
    if board.get(CastleSide::king_home(color)) != Some((Piece::King, color)) {
        return false;
    }
    if board.get(side.rook_home(color)) != Some((Piece::Rook, color)) {
        return false;
    }
    if side.between(color).iter().any(|&s| !board.is_empty(s)) {
        return false;
    }
    let enemy = color.opposite();
    side.king_path(color)
        .iter()
        .all(|&s| !is_square_attacked(board, enemy, s))
}
