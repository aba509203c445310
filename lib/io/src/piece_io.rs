//! # piece_io.rs
//!
//! Implements piece formatting and selection functions.
//!
//! This file contains the character mapping used everywhere a piece is
//! shown to or chosen by a player: uppercase letters for White, lowercase
//! for Black, and the single-letter menu a promoting player picks a
//! replacement piece from.

use game::representations::piece::{Color, Piece, PieceKind};

/// Uppercase letter naming a piece kind.
pub fn kind_letter(kind: PieceKind) -> char {
    match kind {
        PieceKind::King => 'K',
        PieceKind::Queen => 'Q',
        PieceKind::Rook => 'R',
        PieceKind::Bishop => 'B',
        PieceKind::Knight => 'N',
        PieceKind::Pawn => 'P',
    }
}

/// Board character for a piece: White keeps the uppercase letter, Black
/// gets the lowercase one.
pub fn piece_char(piece: Piece) -> char {
    let letter = kind_letter(piece.kind);

    match piece.color {
        Color::White => letter,
        Color::Black => letter.to_ascii_lowercase(),
    }
}

/// Maps a promotion menu answer onto the piece kind it names. Only the
/// four legal replacements are accepted.
pub fn promotion_choice(text: &str) -> Option<PieceKind> {
    match text.trim() {
        "Q" => Some(PieceKind::Queen),
        "R" => Some(PieceKind::Rook),
        "B" => Some(PieceKind::Bishop),
        "N" => Some(PieceKind::Knight),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_pick_the_letter_case() {
        let white = Piece::new(PieceKind::Knight, Color::White);
        let black = Piece::new(PieceKind::Knight, Color::Black);

        assert_eq!(piece_char(white), 'N');
        assert_eq!(piece_char(black), 'n');
    }

    #[test]
    fn promotion_menu_accepts_exactly_four_answers() {
        assert_eq!(promotion_choice("Q"), Some(PieceKind::Queen));
        assert_eq!(promotion_choice(" N "), Some(PieceKind::Knight));
        assert_eq!(promotion_choice("K"), None);
        assert_eq!(promotion_choice("P"), None);
        assert_eq!(promotion_choice("q"), None);
        assert_eq!(promotion_choice(""), None);
    }
}
