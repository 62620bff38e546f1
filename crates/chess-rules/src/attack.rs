//! Attack and check queries.
//!
//! Both queries scan every piece of the attacking color and test its
//! pseudo-legal destinations. They differ on which destinations count:
//!
//! - [`is_square_attacked`] counts quiet *and* capture destinations. This
//!   is deliberately broader than "could capture there": castling-path
//!   safety must reject a king passing through an attacked empty square,
//!   and a pawn's forward push guards that empty square in this sense.
//! - [`is_king_in_check`] counts capture destinations only. A king is in
//!   check via an actual capturing line; a pawn's quiet forward square does
//!   not threaten a king standing on it.

use crate::movegen::pseudo_legal;
use crate::Board;
use chess_core::{Color, Square};

/// Returns true if any piece of `by` reaches `target` with a pseudo-legal
/// quiet or capture destination.
pub fn is_square_attacked(board: &Board, by: Color, target: Square) -> bool {
    board.pieces_of(by).any(|(from, _)| {
        let set = pseudo_legal(board, from);
        set.quiet.contains(&target) || set.captures.contains(&target)
    })
}

/// Returns true if `color`'s king square is a pseudo-legal capture
/// destination of some enemy piece.
///
/// Returns false if the board holds no king of that color.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.king_square(color) else {
        return false;
    };
    board
        .pieces_of(color.opposite())
        .any(|(from, _)| pseudo_legal(board, from).captures.contains(&king))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Piece;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn no_checks_at_start() {
        let board = Board::startpos();
        assert!(!is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));
    }

    #[test]
    fn rook_gives_check_along_open_file() {
        let mut board = Board::empty();
        board.set(sq("e1"), Piece::King, Color::White);
        board.set(sq("e8"), Piece::Rook, Color::Black);
        assert!(is_king_in_check(&board, Color::White));

        // Interposing a piece breaks the line.
        board.set(sq("e4"), Piece::Knight, Color::White);
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn check_clears_when_enemies_removed() {
        let mut board = Board::empty();
        board.set(sq("e1"), Piece::King, Color::White);
        board.set(sq("h4"), Piece::Queen, Color::Black);
        assert!(is_king_in_check(&board, Color::White));
        board.clear(sq("h4"));
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn pawn_push_square_attacked_but_not_check() {
        // White pawn on e4: its forward square e5 counts as attacked (the
        // broad query used for castling paths) but a black king standing
        // there is not in check, since a pawn cannot capture straight ahead.
        let mut board = Board::empty();
        board.set(sq("e4"), Piece::Pawn, Color::White);
        assert!(is_square_attacked(&board, Color::White, sq("e5")));

        board.set(sq("e5"), Piece::King, Color::Black);
        assert!(!is_king_in_check(&board, Color::Black));

        // Diagonal squares are capture lines, so a king there is in check.
        board.clear(sq("e5"));
        board.set(sq("d5"), Piece::King, Color::Black);
        assert!(is_king_in_check(&board, Color::Black));
    }

    #[test]
    fn attacked_empty_square() {
        let mut board = Board::empty();
        board.set(sq("a1"), Piece::Rook, Color::Black);
        assert!(is_square_attacked(&board, Color::Black, sq("a8")));
        assert!(is_square_attacked(&board, Color::Black, sq("h1")));
        assert!(!is_square_attacked(&board, Color::Black, sq("b2")));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let mut board = Board::empty();
        board.set(sq("e8"), Piece::Rook, Color::Black);
        assert!(!is_king_in_check(&board, Color::White));
    }
}
