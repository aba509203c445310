//! # state.rs
//!
//! Defines game state representation and management.
//!
//! This file contains the implementation of the `State` struct, which owns
//! the board, whose turn it is, and the bookkeeping the castling and attack
//! rules need: whether each king has moved, whether each corner rook has
//! moved, and where each king currently stands. The king positions are a
//! cache maintained on every king move rather than recomputed by scanning,
//! which keeps attack queries cheap.

use crate::constants::KING_COL;
use crate::representations::{
    board::Board,
    moves::CastleSide,
    piece::{Color, PieceKind},
    square::Square,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub board: Board,
    pub playing: Color,

    /// Monotone per color: set on the king's first move, never cleared.
    pub king_moved: [bool; 2],

    /// Monotone per color per wing: set when the corner rook first leaves
    /// its starting square, never cleared.
    pub rook_moved: [[bool; 2]; 2],

    /// Where each king stands. Updated on every king move; stale for a
    /// king that has been captured, which only `check_winner` notices by
    /// scanning the board itself.
    pub king_square: [Square; 2],
}

impl State {
    /// A fresh game: standard starting position, White to move, all
    /// castling bookkeeping clear.
    pub fn new() -> State {
        State {
            board: Board::new(),
            playing: Color::White,
            king_moved: [false; 2],
            rook_moved: [[false; 2]; 2],
            king_square: [
                Square::at(Color::White.back_row(), KING_COL),
                Square::at(Color::Black.back_row(), KING_COL),
            ],
        }
    }

    /// Builds a state around an arbitrary position, seeding the king
    /// cache with a single scan. A missing king keeps its starting-square
    /// entry, which stays unused until a king of that color exists again.
    pub fn from_position(board: Board, playing: Color) -> State {
        let mut state = State {
            board,
            playing,
            king_moved: [false; 2],
            rook_moved: [[false; 2]; 2],
            king_square: [
                Square::at(Color::White.back_row(), KING_COL),
                Square::at(Color::Black.back_row(), KING_COL),
            ],
        };

        for (square, cell) in state.board.squares() {
            if let Some(piece) = cell {
                if piece.kind == PieceKind::King {
                    state.king_square[piece.color.index()] = square;
                }
            }
        }

        state
    }

    #[inline(always)]
    pub fn king_moved(&self, color: Color) -> bool {
        self.king_moved[color.index()]
    }

    #[inline(always)]
    pub fn rook_moved(&self, color: Color, side: CastleSide) -> bool {
        self.rook_moved[color.index()][side.index()]
    }

    #[inline(always)]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_square[color.index()]
    }
}

impl Default for State {
    fn default() -> State {
        State::new()
    }
}
