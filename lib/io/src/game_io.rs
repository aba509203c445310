//! # game_io.rs
//!
//! Implements the message strings the interactive shell shows players.
//!
//! This file contains every sentence the game prints around the board
//! itself: prompts, rejection reports, the check announcement and the
//! final verdict. Keeping them here leaves the engine free of wording
//! and the shell free of formatting decisions.

use game::error::MoveError;
use game::representations::{piece::Color, square::Square};

use crate::move_io::format_move;

pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

pub fn prompt_move(color: Color) -> String {
    format!("{} move > ", color_name(color))
}

pub fn prompt_promotion(color: Color) -> String {
    format!("{} pawn promotion! Choose (Q,R,B,N): ", color_name(color))
}

pub fn format_usage_hint() -> String {
    "Invalid input, use format a2,a3".to_string()
}

pub fn format_rejection(
    from: Square,
    to: Square,
    reason: &MoveError,
) -> String {
    format!("Invalid {}: {}", format_move(from, to), reason)
}

pub fn format_check(color: Color) -> String {
    format!("{} King is in check!", color_name(color))
}

pub fn format_winner(color: Color) -> String {
    format!("Game Over! Winner: {}", color_name(color))
}
