//! # move_list.rs
//!
//! Implements move application and the whole-board queries.
//!
//! This file contains the mutating half of the rule engine: applying a
//! validated move with all of its bookkeeping (castle rook relocation,
//! king position cache, monotone moved flags, pawn promotion), plus the
//! scans that ask questions of the whole board: is a square attacked, is
//! the side to move in check, has either king been captured. A rejected
//! move leaves the state exactly as it was.

use crate::error::MoveError;
use crate::moves::move_check::validate_move;
use crate::representations::{
    moves::{CastleSide, MoveOutcome},
    piece::{Color, Piece, PieceKind},
    square::Square,
    state::State,
};

/// Validates and applies one move. On rejection the state is untouched
/// and the reason is returned unchanged. On success the piece relocates,
/// the bookkeeping fields update, and the turn passes to the other player
/// unless a pawn reached the far back row, in which case the caller must
/// settle the promotion first.
pub fn apply_move(
    state: &mut State,
    from: Square,
    to: Square,
) -> Result<MoveOutcome, MoveError> {
    validate_move(state, from, to, false)?;

    let piece = state.board.get(from).ok_or(MoveError::NoPiece)?;
    let color = piece.color;

    state.board.set(to, Some(piece));
    state.board.set(from, None);

    match piece.kind {
        PieceKind::King => {
            state.king_square[color.index()] = to;
            state.king_moved[color.index()] = true;

            let col_delta = to.col() as i8 - from.col() as i8;
            if col_delta.abs() == 2 {
                let side = CastleSide::of_delta(col_delta);
                let corner = Square::at(from.row(), side.rook_home_col());
                let landing =
                    Square::at(from.row(), side.rook_landing_col());

                let rook = state.board.get(corner);
                state.board.set(landing, rook);
                state.board.set(corner, None);
            }
        }
        PieceKind::Rook => {
            if from.row() == color.back_row() {
                if let Some(side) = CastleSide::of_column(from.col()) {
                    state.rook_moved[color.index()][side.index()] = true;
                }
            }
        }
        PieceKind::Pawn => {
            if to.row() == color.promotion_row() {
                return Ok(MoveOutcome::PendingPromotion);                       /* turn passes after the promotion    */
            }
        }
        _ => {}
    }

    state.playing = state.playing.opponent();

    Ok(MoveOutcome::Moved)
}

/// Replaces the pawn on `square` with a piece of the requested kind and
/// the same color, then passes the turn. Only Queen, Rook, Bishop and
/// Knight are valid replacements.
pub fn promote(
    state: &mut State,
    square: Square,
    kind: PieceKind,
) -> Result<(), MoveError> {
    let pawn = state
        .board
        .get(square)
        .filter(|piece| piece.kind == PieceKind::Pawn)
        .ok_or(MoveError::NoPawnToPromote)?;

    if matches!(kind, PieceKind::King | PieceKind::Pawn) {
        return Err(MoveError::InvalidPromotion);
    }

    state.board.set(square, Some(Piece::new(kind, pawn.color)));
    state.playing = state.playing.opponent();

    Ok(())
}

/// Whether any piece of the side not on the move could capture onto
/// `square` right now. One validation per occupied square, each a plain
/// shape and path check.
pub fn is_square_attacked(state: &State, square: Square) -> bool {
    let attacker = state.playing.opponent();

    state.board.squares().any(|(origin, cell)| {
        cell.is_some_and(|piece| piece.color == attacker)
            && validate_move(state, origin, square, true).is_ok()
    })
}

/// Whether the king of the side to move stands on an attacked square.
/// Answers false once that king has been captured.
pub fn is_in_check(state: &State) -> bool {
    let king = state.king_square(state.playing);

    let standing = state.board.get(king).is_some_and(|piece| {
        piece.kind == PieceKind::King && piece.color == state.playing
    });

    standing && is_square_attacked(state, king)
}

/// The winner, decided by king capture: as soon as a color has no king
/// left on the board, the other color has won.
pub fn check_winner(state: &State) -> Option<Color> {
    let mut kings = [false; 2];

    for (_, cell) in state.board.squares() {
        if let Some(piece) = cell {
            if piece.kind == PieceKind::King {
                kings[piece.color.index()] = true;
            }
        }
    }

    if !kings[Color::White.index()] {
        Some(Color::Black)
    } else if !kings[Color::Black.index()] {
        Some(Color::White)
    } else {
        None
    }
}
