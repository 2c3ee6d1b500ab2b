//! Configuration errors raised while reading or validating a grid.
//!
//! A grid with no route between its endpoints is not an error: searches
//! report that as an absent path.

use thiserror::Error;

use crate::Pos;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid is empty")]
    Empty,

    #[error("grid is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("unrecognized marker {ch:?} at {pos}")]
    UnknownMarker { ch: char, pos: Pos },

    #[error("grid has no start cell")]
    MissingStart,

    #[error("grid has {count} start cells, expected exactly one")]
    MultipleStarts { count: usize },

    #[error("grid has no end cell")]
    MissingEnd,

    #[error("grid has {count} end cells, expected exactly one")]
    MultipleEnds { count: usize },

    #[error("position {pos} is outside the {side}x{side} grid")]
    OutOfBounds { pos: Pos, side: usize },

    #[error("endpoint {pos} is a blocked cell")]
    BlockedEndpoint { pos: Pos },

    #[error("glyph {ch:?} is assigned to more than one marker")]
    DuplicateGlyph { ch: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_cell() {
        let e = ConfigError::UnknownMarker {
            ch: '?',
            pos: Pos::new(1, 2),
        };
        assert_eq!(e.to_string(), "unrecognized marker '?' at (1, 2)");

        let e = ConfigError::NotSquare {
            row: 3,
            len: 4,
            expected: 5,
        };
        assert_eq!(
            e.to_string(),
            "grid is not square: row 3 has 4 cells, expected 5"
        );
    }

    #[test]
    fn counts_are_reported() {
        let e = ConfigError::MultipleEnds { count: 2 };
        assert!(e.to_string().contains("2 end cells"));
    }
}
