#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The four directions the blank cell can slide in, and their wire format.
//!
//! A solution is serialised as a string of single-character tags (`u`, `d`,
//! `l`, `r`), read left to right in chronological order.

use crate::puzzle::error::PuzzleError;
use std::fmt;
use std::fmt::Display;

/// A single slide, named after the direction the *blank* moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Move {
    /// Blank swaps with the tile above it.
    Up,
    /// Blank swaps with the tile below it.
    Down,
    /// Blank swaps with the tile to its left.
    Left,
    /// Blank swaps with the tile to its right.
    Right,
}

impl Move {
    /// All moves, in the order candidates are generated.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The move that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// `(row, column)` delta applied to the blank's position.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// The single-character tag used in move strings.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Up => 'u',
            Self::Down => 'd',
            Self::Left => 'l',
            Self::Right => 'r',
        }
    }

    /// Parses a single-character tag.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::UnknownMove` for anything outside `u d l r`.
    pub const fn from_char(c: char) -> Result<Self, PuzzleError> {
        match c {
            'u' => Ok(Self::Up),
            'd' => Ok(Self::Down),
            'l' => Ok(Self::Left),
            'r' => Ok(Self::Right),
            _ => Err(PuzzleError::UnknownMove(c)),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites_are_involutions() {
        for mv in Move::ALL {
            assert_eq!(mv.opposite().opposite(), mv);
            assert_ne!(mv.opposite(), mv);
        }
    }

    #[test]
    fn test_char_round_trip() {
        for mv in Move::ALL {
            assert_eq!(Move::from_char(mv.as_char()).unwrap(), mv);
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert!(matches!(
            Move::from_char('x'),
            Err(PuzzleError::UnknownMove('x'))
        ));
    }

    #[test]
    fn test_offsets_cancel() {
        for mv in Move::ALL {
            let (dr, dc) = mv.offset();
            let (or, oc) = mv.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }
}
