//! # puzzle-solver
//!
//! `puzzle-solver` is a configurable command-line solver for N-tile sliding
//! puzzles (the 8-puzzle and its larger square relatives). It reads a
//! starting arrangement, searches the puzzle's state graph, and prints a
//! move string: the directions the blank slides, in order, using the tags
//! `u`, `d`, `l`, `r`.
//!
//! The solver supports three search strategies:
//! 1.  **BFS (breadth-first)**: guaranteed shortest move string.
//! 2.  **DFS (depth-first)**: finds *some* solution quickly, possibly a very
//!     long one.
//! 3.  **A\***: best-first on path length plus a pluggable heuristic
//!     (`manhattan` or `misplaced`).
//!
//! ## Usage
//!
//! ```sh
//! # Solve a grid file with the default BFS
//! puzzle-solver board.puzzle
//!
//! # Solve every .puzzle file under a directory
//! puzzle-solver puzzles/
//!
//! # Inline grid, A* with the misplaced-tiles heuristic
//! puzzle-solver text --input "1 2 3 / 4 0 6 / 7 5 8" --method astar --heuristic misplaced
//!
//! # Random solvable 3x3 instance, or a bounded scramble of the goal
//! puzzle-solver random --dim 3
//! puzzle-solver random --dim 4 --scramble 20 --method astar
//! ```
//!
//! ### Common options
//!
//! -   `-d, --debug`: verbose output during solving.
//! -   `-v, --verify`: replay the returned moves and check the goal is
//!     reached (default: `true`).
//! -   `-s, --stats`: print the statistics table (default: `true`).
//! -   `-p, --print-solution`: print the move string (default: `true`).
//! -   `--method <bfs|dfs|astar>`: search strategy (default: `bfs`).
//! -   `--heuristic <manhattan|misplaced>`: A* heuristic (default:
//!     `manhattan`).
//!
//! This file contains the entry point; CLI parsing and reporting live in
//! `command_line`, the solver itself in the `puzzle_solver` library crate.

use clap::Parser;
use command_line::cli::Cli;

mod command_line;

/// Global allocator using `tikv-jemallocator` for potentially better
/// performance and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = command_line::cli::run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
