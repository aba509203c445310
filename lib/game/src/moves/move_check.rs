//! # move_check.rs
//!
//! Implements move validation against the board state.
//!
//! This file contains the central legality predicate and the per-kind
//! shape rules it dispatches to. The same predicate serves two callers:
//! a player proposing a real move, and the attack scan asking whether an
//! opposing piece could reach a square, where turn ownership is
//! irrelevant. Every rejection is a typed `MoveError`; validation never
//! mutates anything.

use crate::error::MoveError;
use crate::representations::{
    board::Board,
    moves::CastleSide,
    piece::{Color, PieceKind},
    square::Square,
    state::State,
};

/// Checks whether moving the piece on `from` to `to` is legal in the
/// given state. With `for_attack_check` set, ownership of the turn is not
/// checked, so the predicate answers "could the piece on `from` reach
/// `to`" regardless of whose move it is.
pub fn validate_move(
    state: &State,
    from: Square,
    to: Square,
    for_attack_check: bool,
) -> Result<(), MoveError> {
    let piece = state.board.get(from).ok_or(MoveError::NoPiece)?;

    if let Some(target) = state.board.get(to) {
        if target.color == piece.color {
            return Err(MoveError::FriendlyFire);
        }
    }

    if !for_attack_check && piece.color != state.playing {
        return Err(MoveError::WrongTurn);
    }

    let row_delta = to.row() as i8 - from.row() as i8;
    let col_delta = to.col() as i8 - from.col() as i8;

    match piece.kind {
        PieceKind::Pawn => {
            check_pawn(&state.board, from, to, row_delta, col_delta)
        }
        PieceKind::Rook => {
            check_rook(&state.board, from, to, row_delta, col_delta)
        }
        PieceKind::Bishop => {
            check_bishop(&state.board, from, to, row_delta, col_delta)
        }
        PieceKind::Queen => {
            check_queen(&state.board, from, to, row_delta, col_delta)
        }
        PieceKind::Knight => check_knight(row_delta, col_delta),
        PieceKind::King => {
            check_king(state, from, to, row_delta, col_delta, piece.color)
        }
    }
}

/// A pawn pushes one square towards the far back row, two from its
/// starting row, and captures one square diagonally forward. Every other
/// shape, a blocked double push included, is the same rejection.
fn check_pawn(
    board: &Board,
    from: Square,
    to: Square,
    row_delta: i8,
    col_delta: i8,
) -> Result<(), MoveError> {
    let piece = board.get(from).ok_or(MoveError::NoPiece)?;
    let direction = piece.color.pawn_direction();
    let destination = board.get(to);

    let single_push = col_delta == 0
        && row_delta == direction
        && destination.is_none();

    let double_push = col_delta == 0
        && row_delta == 2 * direction
        && from.row() == piece.color.pawn_row()
        && destination.is_none()
        && board.path_clear(from, to).is_ok();

    let capture = col_delta.abs() == 1
        && row_delta == direction
        && destination.is_some_and(|target| target.color != piece.color);

    if single_push || double_push || capture {
        Ok(())
    } else {
        Err(MoveError::InvalidPawnMove)
    }
}

fn check_rook(
    board: &Board,
    from: Square,
    to: Square,
    row_delta: i8,
    col_delta: i8,
) -> Result<(), MoveError> {
    if (row_delta == 0) == (col_delta == 0) {
        return Err(MoveError::InvalidLinearMove);
    }

    board.path_clear(from, to)
}

fn check_bishop(
    board: &Board,
    from: Square,
    to: Square,
    row_delta: i8,
    col_delta: i8,
) -> Result<(), MoveError> {
    if row_delta.abs() != col_delta.abs() || row_delta == 0 {
        return Err(MoveError::InvalidDiagonalMove);
    }

    board.path_clear(from, to)
}

/// A queen combines the rook and bishop shapes. Shape mismatch is its own
/// rejection so the player is not told a queen is a rook.
fn check_queen(
    board: &Board,
    from: Square,
    to: Square,
    row_delta: i8,
    col_delta: i8,
) -> Result<(), MoveError> {
    let linear = (row_delta == 0) != (col_delta == 0);
    let diagonal = row_delta.abs() == col_delta.abs() && row_delta != 0;

    if !linear && !diagonal {
        return Err(MoveError::InvalidQueenMove);
    }

    board.path_clear(from, to)
}

fn check_knight(row_delta: i8, col_delta: i8) -> Result<(), MoveError> {
    match (row_delta.abs(), col_delta.abs()) {
        (2, 1) | (1, 2) => Ok(()),
        _ => Err(MoveError::InvalidKnightMove),
    }
}

/// A king steps one square in any direction. A two-column slide along its
/// own row is a castle attempt: the king must never have moved, its own
/// rook must still stand on the corner of that wing, and the squares
/// between the king and its destination must be empty. The rook's own
/// corridor is not examined, nor whether any crossed square is attacked.
fn check_king(
    state: &State,
    from: Square,
    to: Square,
    row_delta: i8,
    col_delta: i8,
    color: Color,
) -> Result<(), MoveError> {
    if row_delta.abs().max(col_delta.abs()) == 1 {
        return Ok(());
    }

    if row_delta == 0 && col_delta.abs() == 2 {
        if state.king_moved(color) {
            return Err(MoveError::KingAlreadyMoved);
        }

        let side = CastleSide::of_delta(col_delta);
        let corner = Square::at(from.row(), side.rook_home_col());

        let has_rook = state.board.get(corner).is_some_and(|piece| {
            piece.kind == PieceKind::Rook && piece.color == color
        });
        if !has_rook {
            return Err(MoveError::NoRookToCastle);
        }

        return state.board.path_clear(from, to);
    }

    Err(MoveError::InvalidKingMove)
}
