#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Heuristics for the informed (A*) search: pure, stateless functions of two
//! same-shaped boards.
//!
//! Note that [`manhattan_distance`] is *not* the classic tile-displacement
//! Manhattan distance. It sums the raw value difference of each cell, a
//! cheaper but weaker proxy that is not admissible in general, so A* paths
//! scored with it are not guaranteed optimal. The behaviour is kept as-is
//! on purpose; downstream callers may depend on its outputs.

use crate::puzzle::board::Board;
use crate::puzzle::error::PuzzleError;
use clap::ValueEnum;
use std::fmt::Display;
use std::str::FromStr;

/// Sum over all cells of `|board[i][j] - goal[i][j]|`, comparing raw tile
/// values cell by cell. Both boards must have the same shape.
#[must_use]
pub fn manhattan_distance(board: &Board, goal: &Board) -> u32 {
    debug_assert_eq!(board.dim(), goal.dim());
    board
        .tiles()
        .iter()
        .zip(goal.tiles())
        .map(|(&a, &b)| a.abs_diff(b))
        .sum()
}

/// Number of cells where the two boards disagree (the blank cell counts).
/// Both boards must have the same shape.
#[must_use]
pub fn misplaced_tiles(board: &Board, goal: &Board) -> u32 {
    debug_assert_eq!(board.dim(), goal.dim());
    board
        .tiles()
        .iter()
        .zip(goal.tiles())
        .filter(|(a, b)| a != b)
        .count() as u32
}

/// Enum representing the heuristic used to score A* frontier entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Heuristic {
    /// Cell-wise value-difference sum (see the module docs for the caveat).
    #[default]
    Manhattan,
    /// Count of misplaced cells.
    Misplaced,
}

impl Heuristic {
    /// Scores `board` against `goal` with the selected heuristic.
    #[must_use]
    pub fn evaluate(self, board: &Board, goal: &Board) -> u32 {
        match self {
            Self::Manhattan => manhattan_distance(board, goal),
            Self::Misplaced => misplaced_tiles(board, goal),
        }
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manhattan => write!(f, "manhattan"),
            Self::Misplaced => write!(f, "misplaced"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manhattan" => Ok(Self::Manhattan),
            "misplaced" => Ok(Self::Misplaced),
            other => Err(PuzzleError::UnknownHeuristic(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(grid: &[&[u32]]) -> Board {
        Board::from_grid(grid.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_zero_at_goal() {
        let goal = Board::goal(3);
        assert_eq!(manhattan_distance(&goal, &goal), 0);
        assert_eq!(misplaced_tiles(&goal, &goal), 0);
    }

    #[test]
    fn test_cell_wise_value_difference() {
        // Cells (1,1), (2,1) and (2,2) differ from the goal by 5, 3 and 8.
        let b = board(&[&[1, 2, 3], &[4, 0, 6], &[7, 5, 8]]);
        let goal = Board::goal(3);
        assert_eq!(manhattan_distance(&b, &goal), 16);
        assert_eq!(misplaced_tiles(&b, &goal), 3);
    }

    #[test]
    fn test_dispatch_by_name() {
        let b = board(&[&[1, 2, 3], &[4, 0, 6], &[7, 5, 8]]);
        let goal = Board::goal(3);
        let h: Heuristic = "misplaced".parse().unwrap();
        assert_eq!(h.evaluate(&b, &goal), misplaced_tiles(&b, &goal));
        assert!(matches!(
            "euclid".parse::<Heuristic>(),
            Err(PuzzleError::UnknownHeuristic(_))
        ));
    }
}
