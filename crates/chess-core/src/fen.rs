//! FEN (Forsyth-Edwards Notation) field parsing.
//!
//! This module splits a FEN string into its raw fields. The rules engine
//! assembles its board from the piece placement, active color, and castling
//! fields; the en passant square and move counters are accepted but unused,
//! since the engine implements neither en passant nor move-count draw rules.

use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 3 to 6 fields, got {0}")]
    InvalidFieldCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),
}

/// Raw parsed FEN fields.
///
/// The engine is responsible for converting these into its internal board
/// representation; this type only validates field structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    /// Piece placement (e.g., "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").
    pub piece_placement: String,
    /// Active color ('w' or 'b').
    pub active_color: char,
    /// Castling availability (e.g., "KQkq" or "-").
    pub castling: String,
}

impl Fen {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string.
    ///
    /// Accepts 3 to 6 whitespace-separated fields; fields past the castling
    /// one are ignored.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();

        if !(3..=6).contains(&fields.len()) {
            return Err(FenError::InvalidFieldCount(fields.len()));
        }

        let placement = fields[0];
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }
        for rank in &ranks {
            let mut files = 0u32;
            for c in rank.chars() {
                match c.to_digit(10) {
                    Some(d @ 1..=8) => files += d,
                    Some(_) => {
                        return Err(FenError::InvalidPiecePlacement(format!(
                            "bad empty-square count in rank '{}'",
                            rank
                        )))
                    }
                    None if matches!(
                        c.to_ascii_lowercase(),
                        'p' | 'n' | 'b' | 'r' | 'q' | 'k'
                    ) =>
                    {
                        files += 1
                    }
                    None => {
                        return Err(FenError::InvalidPiecePlacement(format!(
                            "unknown piece character '{}'",
                            c
                        )))
                    }
                }
            }
            if files != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank '{}' describes {} files",
                    rank, files
                )));
            }
        }

        let active_color = match fields[1] {
            "w" => 'w',
            "b" => 'b',
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        let castling = fields[2];
        let valid_castling = castling == "-"
            || (!castling.is_empty()
                && castling.chars().all(|c| matches!(c, 'K' | 'Q' | 'k' | 'q')));
        if !valid_castling {
            return Err(FenError::InvalidCastlingRights(castling.to_string()));
        }

        Ok(Fen {
            piece_placement: placement.to_string(),
            active_color,
            castling: castling.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_startpos() {
        let fen = Fen::parse(Fen::STARTPOS).unwrap();
        assert_eq!(
            fen.piece_placement,
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
        assert_eq!(fen.active_color, 'w');
        assert_eq!(fen.castling, "KQkq");
    }

    #[test]
    fn parse_without_counters() {
        let fen = Fen::parse("8/8/8/8/8/8/8/4K2k w -").unwrap();
        assert_eq!(fen.castling, "-");
    }

    #[test]
    fn reject_field_counts() {
        assert_eq!(
            Fen::parse("8/8/8/8/8/8/8/4K2k w"),
            Err(FenError::InvalidFieldCount(2))
        );
        assert_eq!(Fen::parse(""), Err(FenError::InvalidFieldCount(0)));
    }

    #[test]
    fn reject_bad_placement() {
        assert!(matches!(
            Fen::parse("8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Fen::parse("9/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Fen::parse("xnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn reject_bad_color_and_castling() {
        assert_eq!(
            Fen::parse("8/8/8/8/8/8/8/4K2k x - - 0 1"),
            Err(FenError::InvalidActiveColor("x".to_string()))
        );
        assert_eq!(
            Fen::parse("8/8/8/8/8/8/8/4K2k w KX - 0 1"),
            Err(FenError::InvalidCastlingRights("KX".to_string()))
        );
    }
}
