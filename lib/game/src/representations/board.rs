//! # board.rs
//!
//! Defines the board structure and raw cell operations.
//!
//! This file contains the implementation of the `Board` struct, an 8x8 grid
//! of optional pieces. The board knows nothing about the rules of the game:
//! it places pieces, removes them, reports what stands where, and walks
//! straight lines looking for blockers. Legality lives in the move checks,
//! which consume these primitives.

use crate::constants::{
    BLACK_BACK_ROW, BLACK_PAWN_ROW, FILES, RANKS, WHITE_BACK_ROW,
    WHITE_PAWN_ROW,
};
use crate::error::MoveError;
use crate::representations::{
    piece::{Color, Piece, PieceKind},
    square::Square,
};

const BACK_RANK: [PieceKind; FILES as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; FILES as usize]; RANKS as usize],
}

impl Board {
    /// Creates a board holding the standard starting position.
    pub fn new() -> Board {
        let mut board = Board::empty();

        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;

            board.set(
                Square::at(BLACK_BACK_ROW, col),
                Some(Piece::new(kind, Color::Black)),
            );
            board.set(
                Square::at(WHITE_BACK_ROW, col),
                Some(Piece::new(kind, Color::White)),
            );
            board.set(
                Square::at(BLACK_PAWN_ROW, col),
                Some(Piece::new(PieceKind::Pawn, Color::Black)),
            );
            board.set(
                Square::at(WHITE_PAWN_ROW, col),
                Some(Piece::new(PieceKind::Pawn, Color::White)),
            );
        }

        board
    }

    /// Creates a board with every square empty.
    pub fn empty() -> Board {
        Board {
            cells: [[None; FILES as usize]; RANKS as usize],
        }
    }

    #[inline(always)]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    /// Unconditional overwrite of one cell. No legality check is made.
    #[inline(always)]
    pub fn set(&mut self, square: Square, cell: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = cell;
    }

    /// Walks unit steps from the square after `from` up to but excluding
    /// `to`, rejecting at the first occupied square in between. Adjacent
    /// squares trivially succeed. `from` and `to` must share a rank, file
    /// or diagonal, which every caller establishes first.
    pub fn path_clear(
        &self,
        from: Square,
        to: Square,
    ) -> Result<(), MoveError> {
        let row_step = (to.row() as i8 - from.row() as i8).signum();
        let col_step = (to.col() as i8 - from.col() as i8).signum();

        let mut walk = from.offset(row_step, col_step);

        while let Some(square) = walk {
            if square == to {
                break;
            }

            if self.get(square).is_some() {
                return Err(MoveError::PathBlocked);
            }

            walk = square.offset(row_step, col_step);
        }

        Ok(())
    }

    /// Read-only iteration over every square and its content, row by row
    /// from the top-left corner.
    pub fn squares(
        &self,
    ) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        (0..RANKS).flat_map(move |row| {
            (0..FILES).map(move |col| {
                let square = Square::at(row, col);
                (square, self.get(square))
            })
        })
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}
