#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The board model: canonical representation, move generation, solvability
//! test and randomised instance generation.
//!
//! A board is a square matrix of the integers `0..dim*dim`, stored flat in
//! row-major order, with `0` denoting the blank cell. The search engine
//! treats boards as immutable values: [`Board::neighbors`] and
//! [`Board::apply_move`] return *new* boards, and only the caller-facing
//! replay convenience [`Board::apply_moves`] mutates in place. Keeping state
//! identity stable is what makes the visited-key bookkeeping in
//! [`crate::puzzle::search`] correct.
//!
//! Board equality is tile-arrangement equality, which is exactly key
//! equality: [`Board::key`] is a total, order-preserving serialisation of
//! the flattened grid.

use crate::puzzle::error::PuzzleError;
use crate::puzzle::moves::Move;
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt;

/// A sliding-puzzle position.
///
/// Invariant: `tiles` is a permutation of `0..dim*dim` (each value exactly
/// once, `0` being the blank). Constructors check squareness but not
/// permutation-ness; callers handing in a grid are responsible for the
/// latter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    dim: usize,
    tiles: Vec<u32>,
}

impl Board {
    /// The canonical solved board for the given side length: row-major
    /// ascending `1..dim*dim` with the blank in the bottom-right cell.
    ///
    /// Used both as the default goal and as the comparison target for
    /// heuristics.
    #[must_use]
    pub fn goal(dim: usize) -> Self {
        let cells = dim * dim;
        let mut tiles: Vec<u32> = (1..cells as u32).collect();
        tiles.push(0);
        Self { dim, tiles }
    }

    /// Builds a board from an explicit row-major grid.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::Shape` if the grid is empty, ragged, or not
    /// square.
    pub fn from_grid(grid: Vec<Vec<u32>>) -> Result<Self, PuzzleError> {
        let dim = grid.len();
        if dim == 0 {
            return Err(PuzzleError::Shape { rows: 0, cols: 0 });
        }
        for row in &grid {
            if row.len() != dim {
                return Err(PuzzleError::Shape {
                    rows: dim,
                    cols: row.len(),
                });
            }
        }

        let tiles = grid.into_iter().flatten().collect();
        Ok(Self { dim, tiles })
    }

    /// Builds a board from a grid while also stating the expected dimension.
    ///
    /// A mismatch between `dim` and the grid's actual shape is non-fatal:
    /// the grid's own shape wins and a warning is printed to stderr.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::Shape` if the grid itself is not square.
    pub fn from_grid_with_dim(dim: usize, grid: Vec<Vec<u32>>) -> Result<Self, PuzzleError> {
        if dim != grid.len() {
            eprintln!(
                "warning: requested dim {dim} does not match the grid shape {actual}; using {actual}",
                actual = grid.len()
            );
        }
        Self::from_grid(grid)
    }

    /// Side length of the board.
    #[must_use]
    pub const fn dim(&self) -> usize {
        self.dim
    }

    /// The flattened row-major tile values.
    #[must_use]
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    /// Iterator over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.tiles.chunks(self.dim)
    }

    /// A deterministic fingerprint of the tile arrangement: the flattened
    /// values joined with `,`.
    ///
    /// Two boards with identical arrangements always produce identical keys,
    /// and distinct arrangements never collide (the separator keeps
    /// multi-digit tiles unambiguous). Stable across runs, usable as a cache
    /// or log key.
    #[must_use]
    pub fn key(&self) -> String {
        self.tiles.iter().join(",")
    }

    /// Whether this board already is the canonical solved arrangement.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        *self == Self::goal(self.dim)
    }

    /// `(row, column)` of the blank cell.
    ///
    /// # Panics
    ///
    /// If the board contains no blank, i.e. the permutation invariant was
    /// violated at construction.
    #[must_use]
    pub fn blank_pos(&self) -> (usize, usize) {
        let idx = self
            .tiles
            .iter()
            .position(|&t| t == 0)
            .expect("board has no blank cell");
        (idx / self.dim, idx % self.dim)
    }

    /// Applies a single move as a value operation, returning the new board,
    /// or `None` if the move would push the blank off the board.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> Option<Self> {
        let (row, col) = self.blank_pos();
        let (dr, dc) = mv.offset();
        let target_row = row.checked_add_signed(dr).filter(|&r| r < self.dim)?;
        let target_col = col.checked_add_signed(dc).filter(|&c| c < self.dim)?;

        let mut next = self.clone();
        next.tiles
            .swap(row * self.dim + col, target_row * self.dim + target_col);
        Some(next)
    }

    /// All boards one legal slide away, keyed by the move that produces
    /// them. Between 2 and 4 entries: fewer than 4 at corners and edges.
    #[must_use]
    pub fn neighbors(&self) -> SmallVec<[(Move, Self); 4]> {
        Move::ALL
            .into_iter()
            .filter_map(|mv| self.apply_move(mv).map(|board| (mv, board)))
            .collect()
    }

    /// Replays a move string in place, sliding the blank per tag.
    ///
    /// This is a convenience for callers replaying a solution; the search
    /// engine never mutates a board. An empty string leaves the board
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Aborts at the first bad tag: `PuzzleError::UnknownMove` for an
    /// unrecognised character, `PuzzleError::IllegalMove` for a slide that
    /// would leave the board. Moves before the failing tag remain applied.
    pub fn apply_moves(&mut self, moves: &str) -> Result<(), PuzzleError> {
        for c in moves.chars() {
            let mv = Move::from_char(c)?;
            match self.apply_move(mv) {
                Some(next) => *self = next,
                None => {
                    return Err(PuzzleError::IllegalMove {
                        mv,
                        at: self.blank_pos(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Counts inversions in a flattened grid: ordered pairs `i < j` with
    /// both tiles non-blank and `flat[i] > flat[j]`.
    ///
    /// O(n^2) over the flattened length, which is fine at puzzle sizes.
    #[must_use]
    pub fn count_inversions(flat: &[u32]) -> usize {
        flat.iter()
            .enumerate()
            .filter(|&(_, &val)| val != 0)
            .map(|(i, &val)| {
                flat[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < val)
                    .count()
            })
            .sum()
    }

    /// Whether this board can reach the canonical goal: true iff the
    /// inversion count is even.
    ///
    /// Known limitation, preserved on purpose: the even-inversion rule is
    /// applied uniformly regardless of `dim` parity, whereas even-sided
    /// boards would additionally need the blank's row parity.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        Self::count_inversions(&self.tiles) % 2 == 0
    }

    /// Draws uniformly random permutations of `0..dim*dim` until one passes
    /// [`Board::is_solvable`].
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::GenerationExhausted` once `max_attempts`
    /// permutations have been rejected.
    pub fn random_solvable(dim: usize, max_attempts: usize) -> Result<Self, PuzzleError> {
        let cells = dim * dim;
        let mut tiles: Vec<u32> = (0..cells as u32).collect();

        for _ in 0..max_attempts {
            fastrand::shuffle(&mut tiles);
            if Self::count_inversions(&tiles) % 2 == 0 {
                return Ok(Self { dim, tiles });
            }
        }

        Err(PuzzleError::GenerationExhausted {
            dim,
            attempts: max_attempts,
        })
    }

    /// Scrambles the board with `steps` random legal slides, never undoing
    /// the immediately preceding slide.
    ///
    /// Unlike [`Board::random_solvable`] this stays within the reachable
    /// class by construction, and the result is at most `steps` moves from
    /// the starting arrangement.
    pub fn scramble(&mut self, steps: usize) {
        let mut last: Option<Move> = None;
        for _ in 0..steps {
            let mut options: SmallVec<[(Move, Self); 4]> = self
                .neighbors()
                .into_iter()
                .filter(|&(mv, _)| Some(mv.opposite()) != last)
                .collect();
            if options.is_empty() {
                // dim <= 1: nothing can slide.
                return;
            }
            let (mv, next) = options.swap_remove(fastrand::usize(..options.len()));
            last = Some(mv);
            *self = next;
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.dim * self.dim - 1).to_string().len();
        for row in self.rows() {
            for &val in row {
                write!(f, "{val:>width$} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(grid: &[&[u32]]) -> Board {
        Board::from_grid(grid.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_goal_tiles_are_canonical() {
        for dim in 1..=5 {
            let goal = Board::goal(dim);
            let cells = dim * dim;
            let mut expected: Vec<u32> = (1..cells as u32).collect();
            expected.push(0);
            assert_eq!(goal.tiles(), expected.as_slice());
            assert_eq!(goal.blank_pos(), (dim - 1, dim - 1));
            assert!(goal.is_goal());
        }
    }

    #[test]
    fn test_from_grid_rejects_non_square() {
        assert!(matches!(
            Board::from_grid(vec![vec![1, 2, 3], vec![4, 5, 6]]),
            Err(PuzzleError::Shape { rows: 2, cols: 3 })
        ));
        assert!(matches!(
            Board::from_grid(vec![]),
            Err(PuzzleError::Shape { rows: 0, cols: 0 })
        ));
    }

    #[test]
    fn test_dimension_mismatch_is_non_fatal() {
        // The grid's own shape wins over the requested dim.
        let b = Board::from_grid_with_dim(4, vec![vec![1, 2], vec![3, 0]]).unwrap();
        assert_eq!(b.dim(), 2);
    }

    #[test]
    fn test_key_is_order_sensitive_and_unambiguous() {
        let a = board(&[&[1, 2], &[3, 0]]);
        let b = board(&[&[2, 1], &[3, 0]]);
        assert_ne!(a.key(), b.key());
        assert_eq!(a.key(), "1,2,3,0");
        // Same arrangement, same key.
        assert_eq!(a.key(), a.clone().key());
    }

    #[test]
    fn test_neighbors_counts_and_inverses() {
        // Corner blank: 2 neighbors. Center blank: 4. Edge blank: 3.
        assert_eq!(Board::goal(3).neighbors().len(), 2);
        let center = board(&[&[1, 2, 3], &[4, 0, 6], &[7, 5, 8]]);
        let neighbors = center.neighbors();
        assert_eq!(neighbors.len(), 4);
        for (mv, next) in neighbors {
            assert_ne!(next, center);
            // Exactly one adjacent swap involving the blank.
            let differing = center
                .tiles()
                .iter()
                .zip(next.tiles())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(differing, 2);
            // The inverse move restores the original board.
            assert_eq!(next.apply_move(mv.opposite()).unwrap(), center);
        }
    }

    #[test]
    fn test_apply_moves_empty_is_identity() {
        let mut b = board(&[&[1, 2, 3], &[4, 0, 6], &[7, 5, 8]]);
        let before = b.clone();
        b.apply_moves("").unwrap();
        assert_eq!(b, before);
    }

    #[test]
    fn test_apply_moves_unknown_tag() {
        let mut b = Board::goal(3);
        assert!(matches!(
            b.apply_moves("x"),
            Err(PuzzleError::UnknownMove('x'))
        ));
    }

    #[test]
    fn test_apply_moves_off_board() {
        // Goal board's blank sits bottom-right; it cannot slide down.
        let mut b = Board::goal(3);
        assert!(matches!(
            b.apply_moves("d"),
            Err(PuzzleError::IllegalMove { mv: Move::Down, .. })
        ));
    }

    #[test]
    fn test_count_inversions_examples() {
        assert_eq!(Board::count_inversions(&[1, 2, 3, 0]), 0);
        assert_eq!(Board::count_inversions(&[2, 1, 3, 0]), 1);
        // The blank never participates in an inversion.
        assert_eq!(Board::count_inversions(&[0, 1, 2, 3]), 0);
    }

    #[test]
    fn test_solvability_invariant_under_slides() {
        let mut b = Board::goal(3);
        assert!(b.is_solvable());
        fastrand::seed(7);
        for _ in 0..200 {
            let neighbors = b.neighbors();
            let pick = fastrand::usize(..neighbors.len());
            b = neighbors.into_iter().nth(pick).unwrap().1;
            assert!(b.is_solvable());
        }
    }

    #[test]
    fn test_random_solvable_is_solvable() {
        fastrand::seed(42);
        let b = Board::random_solvable(3, 1000).unwrap();
        assert_eq!(b.dim(), 3);
        assert!(b.is_solvable());
        let mut sorted: Vec<u32> = b.tiles().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..9).collect::<Vec<u32>>());
    }

    #[test]
    fn test_random_solvable_exhausts_budget() {
        // A zero budget never draws a permutation, so the branch is
        // deterministic: no board produced, reported as an error.
        assert!(matches!(
            Board::random_solvable(3, 0),
            Err(PuzzleError::GenerationExhausted {
                dim: 3,
                attempts: 0
            })
        ));
    }

    #[test]
    fn test_scramble_stays_reachable() {
        fastrand::seed(9);
        let mut b = Board::goal(3);
        b.scramble(30);
        assert!(b.is_solvable());
    }
}
