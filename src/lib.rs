//! This crate solves N-tile sliding puzzles (the 8-puzzle and its larger
//! relatives) with a configurable family of graph-search algorithms.

/// The `puzzle` module implements the board model, the heuristics and the
/// search engine (breadth-first, depth-first and A*).
pub mod puzzle;
