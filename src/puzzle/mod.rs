#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
pub mod board;
pub mod error;
pub mod heuristics;
pub mod moves;
pub mod parse;
pub mod search;
