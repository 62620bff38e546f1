//! Core types for chess.
//!
//! This crate provides the fundamental types shared by the rules engine and
//! its callers:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Move`] and [`MoveKind`] for move representation
//! - FEN field parsing ([`Fen`]) for position setup

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{Fen, FenError};
pub use mov::{Move, MoveKind};
pub use piece::Piece;
pub use square::{File, Rank, Square};
