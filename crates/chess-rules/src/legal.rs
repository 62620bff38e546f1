//! Legality filtering and game-status evaluation.
//!
//! A legal move is a pseudo-legal move that does not leave the mover's own
//! king in check afterward. Each candidate is simulated independently on a
//! full board clone and the resulting position is tested with
//! [`is_king_in_check`]; no incremental bookkeeping, no undo. The board is
//! 64 squares, so exhaustive re-simulation is the simplest approach that is
//! provably faithful to the rule.

use crate::attack::is_king_in_check;
use crate::movegen::{pseudo_legal, MoveSet};
use crate::Board;
use chess_core::{Color, Piece, Square};

/// Computes the legal destinations for the piece on `from`: its
/// pseudo-legal destinations minus any that would leave the mover's own
/// king in check.
///
/// Returns an empty set if the square is empty. Castle destinations are not
/// included; see [`crate::castling::castle_available`].
pub fn legal_destinations(board: &Board, from: Square) -> MoveSet {
    let Some((piece, color)) = board.get(from) else {
        return MoveSet::new();
    };
    let mut set = pseudo_legal(board, from);
    set.quiet
        .retain(|&to| !leaves_own_king_in_check(board, from, to, piece, color));
    set.captures
        .retain(|&to| !leaves_own_king_in_check(board, from, to, piece, color));
    set
}

/// Simulates relocating `piece` from `from` to `to` on a clone of `board`
/// and reports whether `color`'s king is in check afterward.
fn leaves_own_king_in_check(
    board: &Board,
    from: Square,
    to: Square,
    piece: Piece,
    color: Color,
) -> bool {
    let mut scratch = board.clone();
    scratch.set(to, piece, color);
    scratch.clear(from);
    is_king_in_check(&scratch, color)
}

/// Returns true as soon as any piece of `color` has at least one legal
/// destination.
///
/// `false` means the side has no legal move at all: combined with
/// [`is_king_in_check`], the caller labels the position checkmate (in
/// check) or stalemate (not in check). The engine reports only the raw
/// boolean.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|(from, _)| !legal_destinations(board, from).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn pinned_rook_stays_on_the_file() {
        let mut board = Board::empty();
        board.set(sq("e1"), Piece::King, Color::White);
        board.set(sq("e4"), Piece::Rook, Color::White);
        board.set(sq("e8"), Piece::Rook, Color::Black);

        let set = legal_destinations(&board, sq("e4"));
        // May slide along the pin line, including capturing the pinner.
        assert!(set.quiet.contains(&sq("e2")));
        assert!(set.quiet.contains(&sq("e7")));
        assert_eq!(set.captures, vec![sq("e8")]);
        // May not leave the file.
        assert!(!set.contains(sq("a4")));
        assert!(!set.contains(sq("h4")));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut board = Board::empty();
        board.set(sq("e1"), Piece::King, Color::White);
        board.set(sq("d8"), Piece::Rook, Color::Black);

        let set = legal_destinations(&board, sq("e1"));
        assert!(!set.contains(sq("d1")));
        assert!(!set.contains(sq("d2")));
        assert!(set.quiet.contains(&sq("e2")));
        assert!(set.quiet.contains(&sq("f1")));
    }

    #[test]
    fn check_must_be_addressed() {
        // King in check from a rook: only moves that escape, block, or
        // capture survive the filter.
        let mut board = Board::empty();
        board.set(sq("e1"), Piece::King, Color::White);
        board.set(sq("e8"), Piece::Rook, Color::Black);
        board.set(sq("d2"), Piece::Queen, Color::White);

        let king = legal_destinations(&board, sq("e1"));
        assert!(!king.contains(sq("e2")));
        assert!(king.quiet.contains(&sq("f1")));

        // The queen can block on the e-file but not wander off.
        let queen = legal_destinations(&board, sq("d2"));
        assert!(queen.quiet.contains(&sq("e2")));
        assert!(queen.quiet.contains(&sq("e3")));
        assert!(!queen.contains(sq("a5")));
    }

    #[test]
    fn no_legal_destination_ever_leaves_check() {
        let board = Board::from_fen("r3k3/1q6/8/8/8/8/5PPP/6K1 w - - 0 1").unwrap();
        for (from, piece) in board.pieces_of(Color::White) {
            let set = legal_destinations(&board, from);
            for &to in set.quiet.iter().chain(set.captures.iter()) {
                let mut scratch = board.clone();
                scratch.set(to, piece, Color::White);
                scratch.clear(from);
                assert!(
                    !is_king_in_check(&scratch, Color::White),
                    "{}{} leaves white in check",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn start_position_has_legal_moves() {
        let board = Board::startpos();
        assert!(has_any_legal_move(&board, Color::White));
        assert!(has_any_legal_move(&board, Color::Black));
    }

    #[test]
    fn back_rank_mate_has_no_legal_moves() {
        // Classic back-rank mate: king boxed in by its own pawns.
        let board = Board::from_fen("4R1k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert!(is_king_in_check(&board, Color::Black));
        assert!(!has_any_legal_move(&board, Color::Black));
    }
}
