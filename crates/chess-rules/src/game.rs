//! Game state and the caller-facing engine contract.
//!
//! [`Game`] owns the board, the side-to-move indicator, and both colors'
//! castling rights. A GUI or other caller drives it through four calls:
//! [`Game::select`] for a piece's legal destinations, [`Game::apply_move`]
//! to execute one, [`Game::set_promotion`] to resolve a promotion trigger,
//! and [`Game::status`] for the raw check / has-legal-move signals.
//!
//! The engine tolerates arbitrary caller input: selecting an empty square
//! yields an empty selection, and applying a move that was not reported
//! legal changes nothing. No errors cross this boundary for well-formed
//! coordinates.

use crate::attack::is_king_in_check;
use crate::castling::{castle_available, CastleSide, CastlingRights};
use crate::legal::{has_any_legal_move, legal_destinations};
use crate::Board;
use chess_core::{Color, Fen, FenError, Move, MoveKind, Piece, Square};

/// Legal destinations for one piece, grouped the way a caller renders them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Empty squares the piece may move to.
    pub quiet: Vec<Square>,
    /// Enemy-occupied squares the piece may capture on.
    pub captures: Vec<Square>,
    /// King destination squares of currently available castles.
    pub castles: Vec<Square>,
}

impl Selection {
    /// Returns true if there are no destinations of any kind.
    pub fn is_empty(&self) -> bool {
        self.quiet.is_empty() && self.captures.is_empty() && self.castles.is_empty()
    }

    /// Returns the total number of destinations.
    pub fn len(&self) -> usize {
        self.quiet.len() + self.captures.len() + self.castles.len()
    }
}

/// Result of [`Game::apply_move`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// True if the moved piece is now a pawn on the enemy back rank; the
    /// caller should present a promotion choice and call
    /// [`Game::set_promotion`].
    pub promoted: bool,
    /// The color owing a promotion choice, when `promoted` is true.
    pub promotion_color: Option<Color>,
}

/// Raw status signals for one color.
///
/// The engine deliberately exposes two booleans rather than a merged
/// game-over enum: no legal move while in check is checkmate, no legal
/// move while not in check is stalemate, and the caller does the labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    /// The color's king square is an enemy capture target.
    pub in_check: bool,
    /// At least one piece of the color has a legal destination.
    pub has_legal_move: bool,
}

/// A chess game: board, side to move, and castling rights.
///
/// Mutated in place by accepted moves; replaced wholesale for a new game.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    rights: CastlingRights,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game with the standard starting setup, White to move, all
    /// castling rights intact.
    pub fn new() -> Self {
        Game {
            board: Board::startpos(),
            side_to_move: Color::White,
            rights: CastlingRights::ALL,
        }
    }

    /// Creates a game from a FEN string (placement, active color, and
    /// castling fields; later fields are ignored).
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = Fen::parse(fen)?;
        Ok(Game {
            board: Board::from_placement(&parsed.piece_placement)?,
            side_to_move: if parsed.active_color == 'w' {
                Color::White
            } else {
                Color::Black
            },
            rights: CastlingRights::from_fen_field(&parsed.castling),
        })
    }

    /// Renders the game as a FEN string. The en passant and move-counter
    /// fields are placeholders, since the engine tracks neither.
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {} - 0 1",
            self.board.to_placement(),
            match self.side_to_move {
                Color::White => 'w',
                Color::Black => 'b',
            },
            self.rights
        )
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the current castling rights.
    pub fn castling_rights(&self) -> CastlingRights {
        self.rights
    }

    /// Returns the legal destinations for the piece on `square`, or an
    /// empty selection if the square is empty.
    ///
    /// Turn order is not enforced here: selecting an out-of-turn piece
    /// reports its moves, and [`Game::apply_move`] will execute them. A
    /// caller wanting strict alternation compares the piece's color against
    /// [`Game::side_to_move`] before applying.
    pub fn select(&self, square: Square) -> Selection {
        let Some((piece, color)) = self.board.get(square) else {
            return Selection::default();
        };

        let set = legal_destinations(&self.board, square);
        let mut selection = Selection {
            quiet: set.quiet,
            captures: set.captures,
            castles: Vec::new(),
        };

        // Castle candidates already carry their own safety proof: the
        // evaluator rejects any path square attacked under the broad query,
        // which subsumes the clone-and-check filter for the landing square.
        if piece == Piece::King {
            for side in CastleSide::BOTH {
                if castle_available(&self.board, self.rights, color, side) {
                    selection.castles.push(side.king_target(color));
                }
            }
        }

        selection
    }

    /// Executes the move `from` → `to` if it is currently legal for the
    /// piece on `from`; otherwise changes nothing.
    ///
    /// On an accepted move this relocates the piece (removing any captured
    /// piece), performs the castle rook relocation, clears castling rights
    /// as triggered, flips the side to move, and reports whether the moved
    /// piece is a pawn that reached the enemy back rank.
    pub fn apply_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        let Some(mv) = self.classify(from, to) else {
            return MoveOutcome::default();
        };
        self.execute(mv)
    }

    /// Resolves `from` → `to` against the current legal set, fixing the
    /// move kind. `None` means the move was not offered by `select`.
    fn classify(&self, from: Square, to: Square) -> Option<Move> {
        let selection = self.select(from);
        if selection.quiet.contains(&to) {
            Some(Move::quiet(from, to))
        } else if selection.captures.contains(&to) {
            Some(Move::capture(from, to))
        } else if selection.castles.contains(&to) {
            let (_, color) = self.board.get(from)?;
            let side = CastleSide::BOTH
                .into_iter()
                .find(|side| side.king_target(color) == to)?;
            let kind = match side {
                CastleSide::Kingside => MoveKind::CastleKingside,
                CastleSide::Queenside => MoveKind::CastleQueenside,
            };
            Some(Move::new(from, to, kind))
        } else {
            None
        }
    }

    fn execute(&mut self, mv: Move) -> MoveOutcome {
        let Some((piece, color)) = self.board.get(mv.from) else {
            return MoveOutcome::default();
        };

        match mv.kind {
            MoveKind::Quiet | MoveKind::Capture => {
                let captured = self.board.get(mv.to);
                self.board.set(mv.to, piece, color);
                self.board.clear(mv.from);
                self.update_rights(piece, color, mv.from, captured);
            }
            MoveKind::CastleKingside | MoveKind::CastleQueenside => {
                let side = match mv.kind {
                    MoveKind::CastleKingside => CastleSide::Kingside,
                    _ => CastleSide::Queenside,
                };
                self.board.set(mv.to, piece, color);
                self.board.clear(mv.from);
                self.board.clear(side.rook_home(color));
                self.board.set(side.rook_target(color), Piece::Rook, color);
                self.rights.clear_color(color);
            }
        }

        self.side_to_move = color.opposite();

        if piece == Piece::Pawn && mv.to.rank() == color.promotion_rank() {
            MoveOutcome {
                promoted: true,
                promotion_color: Some(color),
            }
        } else {
            MoveOutcome::default()
        }
    }

    /// Clears castling rights for the two triggers: the mover's own king or
    /// corner rook moving, and a captured king. Moving another piece onto
    /// or through a rook's home square does not clear anything.
    fn update_rights(
        &mut self,
        piece: Piece,
        color: Color,
        from: Square,
        captured: Option<(Piece, Color)>,
    ) {
        match piece {
            Piece::King => self.rights.clear_color(color),
            Piece::Rook => {
                for side in CastleSide::BOTH {
                    if from == side.rook_home(color) {
                        self.rights.clear(color, side);
                    }
                }
            }
            _ => {}
        }
        if let Some((Piece::King, victim)) = captured {
            self.rights.clear_color(victim);
        }
    }

    /// Replaces a pawn standing on its promotion rank with the chosen
    /// kind. A no-op unless `kind` is queen, rook, bishop, or knight and
    /// `square` holds such a pawn.
    pub fn set_promotion(&mut self, square: Square, kind: Piece) {
        if !kind.is_promotable() {
            return;
        }
        if let Some((Piece::Pawn, color)) = self.board.get(square) {
            if square.rank() == color.promotion_rank() {
                self.board.set(square, kind, color);
            }
        }
    }

    /// Returns the raw status signals for `color` on the current board.
    pub fn status(&self, color: Color) -> Status {
        Status {
            in_check: is_king_in_check(&self.board, color),
            has_legal_move: has_any_legal_move(&self.board, color),
        }
    }
}
