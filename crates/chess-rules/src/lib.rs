//! Chess rules engine over a plain 8x8 mailbox board.
//!
//! This crate provides:
//! - [`Board`] - square-to-piece mapping with full-copy cloning
//! - [`Game`] - board + side to move + castling rights, exposing the
//!   caller-facing contract: [`Game::select`], [`Game::apply_move`],
//!   [`Game::set_promotion`], and [`Game::status`]
//! - Pseudo-legal move generation, attack testing, legality filtering,
//!   castling evaluation, and mate/stalemate detection
//!
//! # Architecture
//!
//! Move generation is split into layers. [`movegen`] produces pseudo-legal
//! destinations from piece-movement rules alone; [`attack`] answers square
//! attack and check queries by scanning enemy pseudo-legal moves; [`legal`]
//! narrows pseudo-legal destinations by simulating each candidate on a board
//! clone and rejecting any that leave the mover's own king in check; and
//! [`castling`] gates castle candidates on rights, empty paths, and path
//! safety. Correctness over speed: at 64 squares, exhaustive re-simulation
//! per candidate is the simplest provably-correct approach.
//!
//! By design, the engine has no en passant, no fifty-move or
//! repetition draw rules, no move history, and no notion of a merged
//! game-over state: callers combine the raw `in_check` and
//! `has_legal_move` signals themselves.
//!
//! # Example
//!
//! ```
//! use chess_core::Square;
//! use chess_rules::Game;
//!
//! let mut game = Game::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//!
//! let selection = game.select(e2);
//! assert!(selection.quiet.contains(&e4));
//!
//! game.apply_move(e2, e4);
//! assert!(game.board().get(e4).is_some());
//! ```

pub mod attack;
mod board;
pub mod castling;
mod game;
pub mod legal;
pub mod movegen;

pub use board::Board;
pub use castling::{castle_available, CastleSide, CastlingRights};
pub use chess_core::FenError;
pub use game::{Game, MoveOutcome, Selection, Status};
pub use movegen::{pseudo_legal, MoveSet};
