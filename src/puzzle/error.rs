#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Error taxonomy for board construction, replay and solver configuration.
//!
//! Search exhaustion is deliberately *not* represented here: a frontier that
//! empties without reaching the goal is a normal outcome, signalled by an
//! empty move string (see [`crate::puzzle::search`]).

use crate::puzzle::moves::Move;
use std::fmt;
use std::io;

/// Everything that can go wrong outside the search loop itself.
#[derive(Debug)]
pub enum PuzzleError {
    /// The input grid is not square (or is empty). Fatal to construction.
    Shape {
        /// Number of rows in the offending grid.
        rows: usize,
        /// Length of the first offending row.
        cols: usize,
    },
    /// An unrecognised tag was found while replaying a move string.
    UnknownMove(char),
    /// A replayed move would push the blank off the board.
    IllegalMove {
        /// The offending move.
        mv: Move,
        /// Blank position (row, column) when the move was attempted.
        at: (usize, usize),
    },
    /// The solver was configured with a method name other than
    /// `bfs`, `dfs` or `astar`.
    UnknownMethod(String),
    /// A* was configured with a heuristic name other than
    /// `manhattan` or `misplaced`.
    UnknownHeuristic(String),
    /// Random generation failed to find a solvable instance within the
    /// attempt budget. "No board produced", not a crash.
    GenerationExhausted {
        /// Requested side length.
        dim: usize,
        /// Number of attempts made before giving up.
        attempts: usize,
    },
    /// An I/O failure while reading a puzzle file.
    Io(io::Error),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape { rows, cols } => {
                write!(f, "board grid must be square, got {rows} rows x {cols} columns")
            }
            Self::UnknownMove(c) => write!(f, "unknown move character '{c}'"),
            Self::IllegalMove { mv, at } => {
                write!(f, "move '{mv}' would push the blank off the board from ({}, {})", at.0, at.1)
            }
            Self::UnknownMethod(name) => {
                write!(f, "unknown search method '{name}' (expected bfs, dfs or astar)")
            }
            Self::UnknownHeuristic(name) => {
                write!(f, "unknown heuristic '{name}' (expected manhattan or misplaced)")
            }
            Self::GenerationExhausted { dim, attempts } => {
                write!(f, "no solvable {dim}x{dim} board found in {attempts} attempts")
            }
            Self::Io(e) => write!(f, "puzzle file error: {e}"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PuzzleError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
