//! Pseudo-legal move generation.
//!
//! A pseudo-legal destination obeys the piece's movement pattern and board
//! occupancy but ignores whether the move would expose the mover's own king.
//! Castling is not generated here: castle candidates need castling-rights
//! state and are appended by the game layer, which also keeps the attack
//! scan in [`crate::attack`] from recursing through castling evaluation.

use crate::Board;
use chess_core::{Color, Piece, Square};

/// The four orthogonal ray directions (rook).
pub const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four diagonal ray directions (bishop).
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight ray directions (queen, and the king's single steps).
pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// The eight knight jump offsets.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Pseudo-legal destinations for one piece, split into disjoint quiet and
/// capture lists.
///
/// Quiet destinations are reachable empty squares; captures are reachable
/// enemy-occupied squares. A square never appears in both lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSet {
    pub quiet: Vec<Square>,
    pub captures: Vec<Square>,
}

impl MoveSet {
    /// Creates an empty move set.
    pub fn new() -> Self {
        MoveSet::default()
    }

    /// Returns the total number of destinations.
    pub fn len(&self) -> usize {
        self.quiet.len() + self.captures.len()
    }

    /// Returns true if there are no destinations of either kind.
    pub fn is_empty(&self) -> bool {
        self.quiet.is_empty() && self.captures.is_empty()
    }

    /// Returns true if the square is a quiet or capture destination.
    pub fn contains(&self, square: Square) -> bool {
        self.quiet.contains(&square) || self.captures.contains(&square)
    }
}

/// Computes the pseudo-legal destinations for the piece on `from`.
///
/// Returns an empty set if the square is empty.
pub fn pseudo_legal(board: &Board, from: Square) -> MoveSet {
    let Some((piece, color)) = board.get(from) else {
        return MoveSet::new();
    };
    match piece {
        Piece::Pawn => pawn_moves(board, from, color),
        Piece::Knight => step_moves(board, from, color, &KNIGHT_OFFSETS),
        Piece::King => step_moves(board, from, color, &ALL_DIRECTIONS),
        Piece::Bishop => ray_moves(board, from, color, &DIAGONAL),
        Piece::Rook => ray_moves(board, from, color, &ORTHOGONAL),
        Piece::Queen => ray_moves(board, from, color, &ALL_DIRECTIONS),
    }
}

/// Walks each ray square by square: empty squares are quiet destinations;
/// the first occupied square ends the ray, adding exactly one capture when
/// it holds an enemy piece. Shared by bishop, rook, and queen via the
/// direction set.
fn ray_moves(board: &Board, from: Square, mover: Color, directions: &[(i8, i8)]) -> MoveSet {
    let mut set = MoveSet::new();
    for &(file_delta, rank_delta) in directions {
        let mut current = from;
        while let Some(next) = current.offset(file_delta, rank_delta) {
            match board.get(next) {
                None => set.quiet.push(next),
                Some((_, color)) => {
                    if color != mover {
                        set.captures.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
    set
}

/// Fixed-offset movement for knight and king: each on-board target is a
/// quiet move if empty, a capture if enemy-occupied, and skipped if
/// friendly-occupied.
fn step_moves(board: &Board, from: Square, mover: Color, offsets: &[(i8, i8)]) -> MoveSet {
    let mut set = MoveSet::new();
    for &(file_delta, rank_delta) in offsets {
        let Some(to) = from.offset(file_delta, rank_delta) else {
            continue;
        };
        match board.get(to) {
            None => set.quiet.push(to),
            Some((_, color)) if color != mover => set.captures.push(to),
            Some(_) => {}
        }
    }
    set
}

/// Pawn movement: one square toward the enemy back rank if empty, two from
/// the home rank if both are empty, and diagonal captures only. No en
/// passant.
fn pawn_moves(board: &Board, from: Square, mover: Color) -> MoveSet {
    let mut set = MoveSet::new();
    let dir = mover.pawn_direction();

    if let Some(ahead) = from.offset(0, dir) {
        if board.is_empty(ahead) {
            set.quiet.push(ahead);
            if from.rank() == mover.pawn_start_rank() {
                if let Some(two_ahead) = ahead.offset(0, dir) {
                    if board.is_empty(two_ahead) {
                        set.quiet.push(two_ahead);
                    }
                }
            }
        }
    }

    for file_delta in [-1, 1] {
        let Some(target) = from.offset(file_delta, dir) else {
            continue;
        };
        if let Some((_, color)) = board.get(target) {
            if color != mover {
                set.captures.push(target);
            }
        }
    }

    set
}
