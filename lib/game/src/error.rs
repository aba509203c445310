//! # error.rs
//!
//! Defines the move rejection taxonomy.
//!
//! This file contains the single error type returned by every rule check.
//! Each variant is an ordinary, recoverable outcome of proposing an illegal
//! move: the caller reports it to the player and asks again. Nothing here
//! ever aborts the process, and a rejected move never changes game state.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on the starting square")]
    NoPiece,

    #[error("a friendly piece occupies the destination")]
    FriendlyFire,

    #[error("it is the other player's turn")]
    WrongTurn,

    #[error("the pawn cannot move there")]
    InvalidPawnMove,

    #[error("rooks move along a single rank or file")]
    InvalidLinearMove,

    #[error("bishops move along a diagonal")]
    InvalidDiagonalMove,

    #[error("queens move along a rank, file or diagonal")]
    InvalidQueenMove,

    #[error("knights move in an L shape")]
    InvalidKnightMove,

    #[error("kings move a single square")]
    InvalidKingMove,

    #[error("another piece blocks the path")]
    PathBlocked,

    #[error("castling is no longer available once the king has moved")]
    KingAlreadyMoved,

    #[error("no rook available on that side to castle with")]
    NoRookToCastle,

    #[error("no pawn on the promotion square")]
    NoPawnToPromote,

    #[error("pawns cannot promote to that piece")]
    InvalidPromotion,
}
