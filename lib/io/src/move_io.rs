//! # move_io.rs
//!
//! Implements square and move formatting functions.

use game::constants::RANKS;
use game::representations::square::Square;

/// Algebraic name of a square, such as `e4`.
pub fn format_square(square: Square) -> String {
    let file = (b'a' + square.col()) as char;
    let rank = RANKS - square.row();

    format!("{}{}", file, rank)
}

/// Compact rendering of a move, such as `e2e4`.
pub fn format_move(from: Square, to: Square) -> String {
    format!("{}{}", format_square(from), format_square(to))
}
