//! Property tests over randomly populated boards.

use chess_core::{Color, Piece, Square};
use chess_rules::attack::is_king_in_check;
use chess_rules::legal::legal_destinations;
use chess_rules::movegen::pseudo_legal;
use chess_rules::Board;
use proptest::prelude::*;

fn arb_piece() -> impl Strategy<Value = Piece> {
    prop_oneof![
        Just(Piece::Pawn),
        Just(Piece::Knight),
        Just(Piece::Bishop),
        Just(Piece::Rook),
        Just(Piece::Queen),
    ]
}

/// A sparse board with a white king, usually a black king, and a handful of
/// other pieces. Positions need not be reachable in play; the properties
/// under test hold regardless.
fn arb_board() -> impl Strategy<Value = Board> {
    (
        0u8..64,
        0u8..64,
        proptest::collection::vec((0u8..64, arb_piece(), any::<bool>()), 0..12),
    )
        .prop_map(|(white_king, black_king, rest)| {
            let mut board = Board::empty();
            board.set(
                Square::from_index(white_king).expect("index in range"),
                Piece::King,
                Color::White,
            );
            let black_king_square = Square::from_index(black_king).expect("index in range");
            if board.is_empty(black_king_square) {
                board.set(black_king_square, Piece::King, Color::Black);
            }
            for (index, piece, is_white) in rest {
                let square = Square::from_index(index).expect("index in range");
                if board.is_empty(square) {
                    let color = if is_white { Color::White } else { Color::Black };
                    board.set(square, piece, color);
                }
            }
            board
        })
}

/// Steps from `from` toward `to` along their shared line, exclusive of both
/// endpoints. Panics if the squares do not share a rank, file, or diagonal.
fn strictly_between(from: Square, to: Square) -> Vec<Square> {
    let file_step = (to.file().index() as i8 - from.file().index() as i8).signum();
    let rank_step = (to.rank().index() as i8 - from.rank().index() as i8).signum();
    let mut squares = Vec::new();
    let mut current = from.offset(file_step, rank_step).expect("line stays on board");
    while current != to {
        squares.push(current);
        current = current
            .offset(file_step, rank_step)
            .expect("line stays on board");
    }
    squares
}

proptest! {
    #[test]
    fn legal_moves_never_leave_own_king_in_check(board in arb_board()) {
        for color in [Color::White, Color::Black] {
            for (from, piece) in board.pieces_of(color) {
                let set = legal_destinations(&board, from);
                for &to in set.quiet.iter().chain(set.captures.iter()) {
                    let mut scratch = board.clone();
                    scratch.set(to, piece, color);
                    scratch.clear(from);
                    prop_assert!(
                        !is_king_in_check(&scratch, color),
                        "{} {}{} leaves its own king in check on\n{}",
                        piece, from, to, board
                    );
                }
            }
        }
    }

    #[test]
    fn slider_rays_are_unobstructed(board in arb_board()) {
        for (from, piece, color) in board.pieces() {
            if !piece.is_slider() {
                continue;
            }
            let set = pseudo_legal(&board, from);
            for &to in set.quiet.iter().chain(set.captures.iter()) {
                for passed in strictly_between(from, to) {
                    prop_assert!(
                        board.is_empty(passed),
                        "{} {}{} jumps over {} on\n{}",
                        piece, from, to, passed, board
                    );
                }
            }
            for &to in &set.quiet {
                prop_assert!(board.is_empty(to));
            }
            for &to in &set.captures {
                let occupant = board.get(to);
                prop_assert!(matches!(occupant, Some((_, c)) if c != color));
            }
        }
    }

    #[test]
    fn quiet_and_capture_lists_are_disjoint(board in arb_board()) {
        for (from, _, _) in board.pieces() {
            let set = pseudo_legal(&board, from);
            for to in &set.quiet {
                prop_assert!(!set.captures.contains(to));
            }
            prop_assert!(!set.contains(from));
        }
    }

    #[test]
    fn pawn_double_push_only_from_home_rank(board in arb_board()) {
        for (from, piece, color) in board.pieces() {
            if piece != Piece::Pawn {
                continue;
            }
            let set = pseudo_legal(&board, from);
            for &to in &set.quiet {
                let rank_gap =
                    (to.rank().index() as i8 - from.rank().index() as i8).unsigned_abs();
                if rank_gap == 2 {
                    prop_assert_eq!(from.rank(), color.pawn_start_rank());
                    let midway = from
                        .offset(0, color.pawn_direction())
                        .expect("midway square exists");
                    prop_assert!(board.is_empty(midway));
                }
            }
        }
    }
}
