use crate::constants::{
    KINGSIDE_ROOK_COL, KINGSIDE_ROOK_LANDING_COL, QUEENSIDE_ROOK_COL,
    QUEENSIDE_ROOK_LANDING_COL,
};

/// The two wings a castle can happen on, named after the piece that starts
/// in the corner being vacated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Queenside,
    Kingside,
}

impl CastleSide {
    #[inline(always)]
    pub fn index(&self) -> usize {
        match self {
            CastleSide::Queenside => 0,
            CastleSide::Kingside => 1,
        }
    }

    /// Side selected by the king's column delta during a castle. The king
    /// moves towards the rook it castles with.
    pub fn of_delta(col_delta: i8) -> CastleSide {
        if col_delta > 0 {
            CastleSide::Kingside
        } else {
            CastleSide::Queenside
        }
    }

    /// Side owning the given corner column, `None` for any other column.
    pub fn of_column(col: u8) -> Option<CastleSide> {
        match col {
            QUEENSIDE_ROOK_COL => Some(CastleSide::Queenside),
            KINGSIDE_ROOK_COL => Some(CastleSide::Kingside),
            _ => None,
        }
    }

    /// Column the rook starts the game on.
    pub fn rook_home_col(&self) -> u8 {
        match self {
            CastleSide::Queenside => QUEENSIDE_ROOK_COL,
            CastleSide::Kingside => KINGSIDE_ROOK_COL,
        }
    }

    /// Column the rook lands on after the castle.
    pub fn rook_landing_col(&self) -> u8 {
        match self {
            CastleSide::Queenside => QUEENSIDE_ROOK_LANDING_COL,
            CastleSide::Kingside => KINGSIDE_ROOK_LANDING_COL,
        }
    }
}

/// What an accepted move leaves the caller to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move is complete and the turn has passed to the other player.
    Moved,

    /// A pawn reached the far back row. The turn does not pass until the
    /// caller picks a replacement piece through `promote`.
    PendingPromotion,
}
