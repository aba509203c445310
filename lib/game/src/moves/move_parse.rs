//! # move_parse.rs
//!
//! Implements parsing of player move commands.
//!
//! This file contains the functionality that turns a line of player text
//! into a pair of board squares. A command names two coordinates in
//! algebraic form, either back to back (`e2e4`) or separated by a single
//! comma (`e2,e4`); whitespace anywhere in the line is ignored. Anything
//! else is rejected with `None` so the caller can re-prompt without
//! touching game state.

use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::RANKS;
use crate::representations::square::Square;

lazy_static! {
    static ref COMMAND_PATTERN: Regex = Regex::new(
        r"^([a-h])([1-8]),?([a-h])([1-8])$"
    ).unwrap();
    static ref SQUARE_PATTERN: Regex = Regex::new(
        r"^([a-h])([1-8])$"
    ).unwrap();
}

fn square_of(file: &str, rank: &str) -> Option<Square> {
    let file = file.bytes().next()?;
    let rank = rank.bytes().next()?;

    let col = file - b'a';
    let row = RANKS - (rank - b'0');                                            /* rank 8 is the top row              */

    Square::new(row, col)
}

/// Parses a single algebraic coordinate such as `e4`.
pub fn parse_square(text: &str) -> Option<Square> {
    let cap = SQUARE_PATTERN.captures(text)?;

    square_of(&cap[1], &cap[2])
}

/// Parses a full move command into its origin and destination squares.
/// Returns `None` on malformed input: wrong length, a file or rank outside
/// the board, or anything but a single optional comma between the two
/// coordinates.
pub fn parse_command(text: &str) -> Option<(Square, Square)> {
    let cleaned: String =
        text.chars().filter(|c| !c.is_whitespace()).collect();

    let cap = COMMAND_PATTERN.captures(&cleaned)?;

    let from = square_of(&cap[1], &cap[2])?;
    let to = square_of(&cap[3], &cap[4])?;

    Some((from, to))
}
