#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A parser for the plain-text puzzle grid format.
//!
//! The format is line-oriented:
//! - Lines whose first token is `#` or `c` are comments.
//! - A line whose first token is `%` marks end-of-data.
//! - A blank line before any grid row is skipped; a blank line after the
//!   first row also ends the grid.
//! - Every other line is one row of the grid: whitespace-separated tile
//!   values, `0` for the blank.
//!
//! The parser extracts the rows and hands shape validation to
//! [`Board::from_grid`]; it does not check that the values form a
//! permutation.

use crate::puzzle::board::Board;
use crate::puzzle::error::PuzzleError;
use itertools::Itertools;
use std::io::{self, BufRead};
use std::path::Path;

/// Parses a puzzle grid from a `BufRead` source.
///
/// # Errors
///
/// Returns `PuzzleError::Io` if a line cannot be read, or
/// `PuzzleError::Shape` if the collected rows do not form a square grid.
///
/// # Panics
///
/// If a token on a grid line fails to parse as a `u32`. Non-integer tokens
/// where tile values are expected imply a malformed puzzle file.
pub fn parse_puzzle<R: BufRead>(reader: R) -> Result<Board, PuzzleError> {
    let mut rows: Vec<Vec<u32>> = Vec::new();

    for line_result in reader.lines() {
        let line = line_result?;
        let mut parts = line.split_whitespace().peekable();

        match parts.peek() {
            Some(&"%") => break,
            None => {
                if rows.is_empty() {
                    continue;
                }
                break;
            }
            Some(&"#" | &"c") => {}
            Some(_) => {
                let row: Vec<u32> = parts
                    .map(|s| {
                        s.parse::<u32>()
                            .unwrap_or_else(|e| panic!("Failed to parse tile '{s}' as u32: {e}"))
                    })
                    .collect_vec();
                rows.push(row);
            }
        }
    }

    Board::from_grid(rows)
}

/// Parses a puzzle grid file specified by its path.
///
/// Convenience wrapper that opens the file, wraps it in a `BufReader` and
/// calls [`parse_puzzle`].
///
/// # Errors
///
/// `PuzzleError::Io` if the file cannot be opened or read; otherwise as
/// [`parse_puzzle`].
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Board, PuzzleError> {
    let file = std::fs::File::open(path)?;
    parse_puzzle(io::BufReader::new(file))
}

/// Parses an inline puzzle given as a single string, with rows separated by
/// `/` or newlines (e.g. `"1 2 3 / 4 0 6 / 7 5 8"`).
///
/// # Errors
///
/// As [`parse_puzzle`].
pub fn parse_text(input: &str) -> Result<Board, PuzzleError> {
    let normalized = input.replace('/', "\n");
    parse_puzzle(io::Cursor::new(normalized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_simple_grid() {
        let content = "# scrambled 8-puzzle\n\
                       1 2 3\n\
                       4 0 6\n\
                       7 5 8\n";
        let board = parse_puzzle(Cursor::new(content)).unwrap();
        assert_eq!(board.dim(), 3);
        assert_eq!(board.key(), "1,2,3,4,0,6,7,5,8");
    }

    #[test]
    fn test_parse_with_comments_and_end_marker() {
        let content = "c leading comment\n\
                       \n\
                       3 1\n\
                       2 0\n\
                       %\n\
                       9 9 9 ignored";
        let board = parse_puzzle(Cursor::new(content)).unwrap();
        assert_eq!(board.dim(), 2);
        assert_eq!(board.key(), "3,1,2,0");
    }

    #[test]
    fn test_blank_line_ends_grid() {
        let content = "1 0\n2 3\n\n4 5\n";
        let board = parse_puzzle(Cursor::new(content)).unwrap();
        assert_eq!(board.dim(), 2);
    }

    #[test]
    fn test_parse_non_square_fails() {
        let content = "1 2 3\n4 0 6\n";
        assert!(matches!(
            parse_puzzle(Cursor::new(content)),
            Err(PuzzleError::Shape { rows: 2, cols: 3 })
        ));
    }

    #[test]
    #[should_panic(expected = "Failed to parse tile 'abc' as u32")]
    fn test_parse_malformed_tile() {
        let content = "1 abc 3\n";
        let _board = parse_puzzle(Cursor::new(content));
    }

    #[test]
    fn test_parse_file_missing_path() {
        assert!(matches!(
            parse_file("/nonexistent/board.puzzle"),
            Err(PuzzleError::Io(_))
        ));
    }

    #[test]
    fn test_parse_text_with_slashes() {
        let board = parse_text("1 2 3 / 4 0 6 / 7 5 8").unwrap();
        assert_eq!(board.key(), "1,2,3,4,0,6,7,5,8");
    }

    #[test]
    fn test_parse_round_trip_through_display() {
        let original = parse_text("8 6 7 / 2 5 4 / 3 0 1").unwrap();
        let rendered = original.to_string();
        let reparsed = parse_puzzle(Cursor::new(rendered)).unwrap();
        assert_eq!(reparsed, original);
    }
}
