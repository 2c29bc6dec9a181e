#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The search engine: breadth-first, depth-first and A* traversal of the
//! puzzle's implicit state graph.
//!
//! All three strategies share one state machine: pop a board from the
//! frontier, generate its neighbors, skip the single move that undoes the
//! last move on the current path, skip keys already in the visited map,
//! record the path that reached each newly discovered key, and stop the
//! moment a generated neighbor's key equals the goal key.
//!
//! The frontier never carries paths; the path to every discovered key lives
//! in the visited map (`FxHashMap<key, path>`), inserted at most once with
//! the first path found winning. For BFS that first path is guaranteed
//! shortest; for DFS and A* it is merely the one used.
//!
//! An exhausted frontier is a normal outcome signalled by an empty move
//! string, never an error. An already-solved start also yields `""`; callers
//! who care can disambiguate with [`Board::is_goal`] beforehand.

use crate::puzzle::board::Board;
use crate::puzzle::error::PuzzleError;
use crate::puzzle::heuristics::Heuristic;
use crate::puzzle::moves::Move;
use clap::ValueEnum;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt::Display;
use std::str::FromStr;

/// Enum representing the search strategy driving the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum SearchMethod {
    /// FIFO frontier; shortest move string guaranteed.
    #[default]
    Bfs,
    /// LIFO frontier; finds some solution fast, possibly a very long one.
    Dfs,
    /// Min-priority frontier ordered by path length plus heuristic.
    #[value(name = "astar")]
    AStar,
}

impl Display for SearchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bfs => write!(f, "bfs"),
            Self::Dfs => write!(f, "dfs"),
            Self::AStar => write!(f, "astar"),
        }
    }
}

impl FromStr for SearchMethod {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "astar" => Ok(Self::AStar),
            other => Err(PuzzleError::UnknownMethod(other.to_string())),
        }
    }
}

/// Counters accumulated over one `solve` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// States popped from the frontier.
    pub expanded: usize,
    /// Neighbor states generated (after reverse-move pruning).
    pub generated: usize,
    /// Largest frontier size observed.
    pub frontier_peak: usize,
}

/// A configured solver. Method and heuristic are resolved to closed enums
/// once, at configuration time; nothing is string-compared per call.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    method: SearchMethod,
    heuristic: Heuristic,
    stats: SearchStats,
}

impl SearchEngine {
    /// Creates an engine for the given method with the default heuristic.
    #[must_use]
    pub fn new(method: SearchMethod) -> Self {
        Self::with_heuristic(method, Heuristic::default())
    }

    /// Creates an engine for the given method and A* heuristic. The
    /// heuristic is ignored by `bfs` and `dfs`.
    #[must_use]
    pub fn with_heuristic(method: SearchMethod, heuristic: Heuristic) -> Self {
        Self {
            method,
            heuristic,
            stats: SearchStats::default(),
        }
    }

    /// Creates an engine from string-enumerated option names, the
    /// configuration surface exposed to callers driving the solver by name.
    ///
    /// # Errors
    ///
    /// `PuzzleError::UnknownMethod` unless `method` is one of `bfs`, `dfs`,
    /// `astar`; `PuzzleError::UnknownHeuristic` unless `heuristic` is one of
    /// `manhattan`, `misplaced`.
    pub fn from_names(method: &str, heuristic: &str) -> Result<Self, PuzzleError> {
        Ok(Self::with_heuristic(method.parse()?, heuristic.parse()?))
    }

    /// The configured search method.
    #[must_use]
    pub const fn method(&self) -> SearchMethod {
        self.method
    }

    /// The configured A* heuristic.
    #[must_use]
    pub const fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Counters from the most recent `solve` call.
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Solves `start` with the configured method, returning the move string
    /// or `""` if the frontier was exhausted (or the board was already
    /// solved).
    pub fn solve(&mut self, start: &Board) -> String {
        match self.method {
            SearchMethod::Bfs => self.breadth_first(start),
            SearchMethod::Dfs => self.depth_first(start),
            SearchMethod::AStar => self.a_star(start),
        }
    }

    /// Breadth-first search. The returned path has the minimum number of
    /// moves: states are visited in non-decreasing distance from the start
    /// and a key is recorded only the first time it is seen.
    pub fn breadth_first(&mut self, start: &Board) -> String {
        self.uninformed(start, false)
    }

    /// Depth-first search: explores one branch fully before backtracking.
    /// Typically fast to find *some* solution, with no bound on its length.
    pub fn depth_first(&mut self, start: &Board) -> String {
        self.uninformed(start, true)
    }

    /// BFS and DFS differ only in which end of the frontier they pop.
    fn uninformed(&mut self, start: &Board, lifo: bool) -> String {
        self.stats = SearchStats::default();

        let goal_key = Board::goal(start.dim()).key();
        let start_key = start.key();
        if start_key == goal_key {
            return String::new();
        }

        let mut visited: FxHashMap<String, String> = FxHashMap::default();
        visited.insert(start_key, String::new());

        let mut frontier: VecDeque<Board> = VecDeque::new();
        frontier.push_back(start.clone());
        self.stats.frontier_peak = 1;

        while let Some(board) = if lifo {
            frontier.pop_back()
        } else {
            frontier.pop_front()
        } {
            self.stats.expanded += 1;
            let path = visited[&board.key()].clone();
            let skip = last_move(&path).map(Move::opposite);

            for (mv, next) in board.neighbors() {
                if Some(mv) == skip {
                    continue;
                }
                self.stats.generated += 1;

                let key = next.key();
                if key == goal_key {
                    return extend(&path, mv);
                }
                if !visited.contains_key(&key) {
                    visited.insert(key, extend(&path, mv));
                    frontier.push_back(next);
                }
            }
            self.stats.frontier_peak = self.stats.frontier_peak.max(frontier.len());
        }

        String::new()
    }

    /// A* search. Frontier entries are ordered by `f = g + h` where `g` is
    /// the number of moves taken so far and `h` is the configured heuristic
    /// against the canonical goal; ties break on insertion order. The goal
    /// is tested on generation rather than on removal from the heap, a
    /// deliberate simplification: the returned path is optimal only if the
    /// heuristic is admissible, which the cell-wise value proxy is not in
    /// general.
    pub fn a_star(&mut self, start: &Board) -> String {
        self.stats = SearchStats::default();

        let goal = Board::goal(start.dim());
        let goal_key = goal.key();
        let start_key = start.key();
        if start_key == goal_key {
            return String::new();
        }

        let mut visited: FxHashMap<String, String> = FxHashMap::default();
        visited.insert(start_key, String::new());

        let mut seq: u64 = 0;
        let mut frontier: BinaryHeap<(Reverse<(u32, u64)>, Board)> = BinaryHeap::new();
        frontier.push((
            Reverse((self.heuristic.evaluate(start, &goal), seq)),
            start.clone(),
        ));
        self.stats.frontier_peak = 1;

        while let Some((Reverse(_), board)) = frontier.pop() {
            self.stats.expanded += 1;
            let path = visited[&board.key()].clone();
            let skip = last_move(&path).map(Move::opposite);

            for (mv, next) in board.neighbors() {
                if Some(mv) == skip {
                    continue;
                }
                self.stats.generated += 1;

                let key = next.key();
                if key == goal_key {
                    return extend(&path, mv);
                }
                if !visited.contains_key(&key) {
                    let recorded = extend(&path, mv);
                    let g = recorded.len() as u32;
                    let f = g + self.heuristic.evaluate(&next, &goal);
                    visited.insert(key, recorded);
                    seq += 1;
                    frontier.push((Reverse((f, seq)), next));
                }
            }
            self.stats.frontier_peak = self.stats.frontier_peak.max(frontier.len());
        }

        String::new()
    }
}

/// The last move on a recorded path, if any. An empty path excludes no move.
fn last_move(path: &str) -> Option<Move> {
    path.chars().last().and_then(|c| Move::from_char(c).ok())
}

fn extend(path: &str, mv: Move) -> String {
    let mut extended = String::with_capacity(path.len() + 1);
    extended.push_str(path);
    extended.push(mv.as_char());
    extended
}
