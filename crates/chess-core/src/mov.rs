//! Move representation.

use crate::Square;
use std::fmt;

/// The kind of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Move to an empty square.
    Quiet,
    /// Capture of an enemy piece on the destination square.
    Capture,
    /// Kingside castling (O-O); implies the h-rook hops to the f-file.
    CastleKingside,
    /// Queenside castling (O-O-O); implies the a-rook hops to the d-file.
    CastleQueenside,
}

impl MoveKind {
    /// Returns true if this is a castling move.
    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveKind::CastleKingside | MoveKind::CastleQueenside)
    }
}

/// A chess move: origin square, destination square, and kind.
///
/// A castle move carries the king's origin and destination; the rook
/// relocation is engine-internal and derived from the kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Move { from, to, kind }
    }

    /// Creates a quiet move.
    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Self::new(from, to, MoveKind::Quiet)
    }

    /// Creates a capture move.
    #[inline]
    pub const fn capture(from: Square, to: Square) -> Self {
        Self::new(from, to, MoveKind::Capture)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}, {:?})", self.from, self.to, self.kind)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
