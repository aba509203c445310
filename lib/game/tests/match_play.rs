use game::error::MoveError;
use game::moves::{
    move_list::{apply_move, check_winner, is_in_check, promote},
    move_parse::parse_command,
};
use game::representations::{
    board::Board,
    moves::MoveOutcome,
    piece::{Color, Piece, PieceKind},
    square::Square,
    state::State,
};

use ntest::timeout;

fn play(state: &mut State, command: &str) -> Result<MoveOutcome, MoveError> {
    let (from, to) = parse_command(command).expect("well-formed command");

    apply_move(state, from, to)
}

#[test]
fn opening_push_passes_the_turn() {
    let mut state = State::new();

    assert_eq!(play(&mut state, "e2,e4"), Ok(MoveOutcome::Moved));
    assert_eq!(state.playing, Color::Black);
    assert_eq!(
        state.board.get(Square::at(4, 4)),
        Some(Piece::new(PieceKind::Pawn, Color::White)),
    );
}

#[test]
fn overlong_opening_push_is_rejected() {
    let mut state = State::new();

    assert_eq!(
        play(&mut state, "e2,e5"),
        Err(MoveError::InvalidPawnMove),
    );
    assert_eq!(state.playing, Color::White);
    assert_eq!(state, State::new());
}

#[test]
#[timeout(1000)]
fn a_game_runs_from_the_first_push_to_king_capture() {
    let mut state = State::new();

    assert_eq!(play(&mut state, "e2,e4"), Ok(MoveOutcome::Moved));
    assert_eq!(play(&mut state, "f7,f6"), Ok(MoveOutcome::Moved));
    assert_eq!(play(&mut state, "d1,h5"), Ok(MoveOutcome::Moved));

    assert_eq!(state.playing, Color::Black);
    assert!(is_in_check(&state));
    assert_eq!(check_winner(&state), None);

    assert_eq!(play(&mut state, "a7,a6"), Ok(MoveOutcome::Moved));
    assert_eq!(play(&mut state, "h5,e8"), Ok(MoveOutcome::Moved));

    assert_eq!(check_winner(&state), Some(Color::White));
}

#[test]
fn kingside_castle_through_cleared_squares() {
    let mut state = State::new();
    state.board.set(Square::at(7, 5), None);
    state.board.set(Square::at(7, 6), None);

    assert_eq!(play(&mut state, "e1,g1"), Ok(MoveOutcome::Moved));
    assert_eq!(
        state.board.get(Square::at(7, 6)),
        Some(Piece::new(PieceKind::King, Color::White)),
    );
    assert_eq!(
        state.board.get(Square::at(7, 5)),
        Some(Piece::new(PieceKind::Rook, Color::White)),
    );
    assert!(state.king_moved(Color::White));
}

#[test]
fn castling_stays_lost_for_the_rest_of_the_game() {
    let mut state = State::new();
    state.board.set(Square::at(7, 5), None);
    state.board.set(Square::at(7, 6), None);

    assert_eq!(play(&mut state, "e1,f1"), Ok(MoveOutcome::Moved));
    assert_eq!(play(&mut state, "b7,b6"), Ok(MoveOutcome::Moved));
    assert_eq!(play(&mut state, "f1,e1"), Ok(MoveOutcome::Moved));
    assert_eq!(play(&mut state, "b6,b5"), Ok(MoveOutcome::Moved));

    let before = state.clone();

    assert_eq!(
        play(&mut state, "e1,g1"),
        Err(MoveError::KingAlreadyMoved),
    );
    assert_eq!(state, before);
}

#[test]
fn promotion_protocol_runs_to_completion() {
    let mut board = Board::empty();
    board.set(
        Square::at(1, 0),
        Some(Piece::new(PieceKind::Pawn, Color::White)),
    );
    board.set(
        Square::at(7, 4),
        Some(Piece::new(PieceKind::King, Color::White)),
    );
    board.set(
        Square::at(0, 4),
        Some(Piece::new(PieceKind::King, Color::Black)),
    );

    let mut state = State::from_position(board, Color::White);

    assert_eq!(
        play(&mut state, "a7,a8"),
        Ok(MoveOutcome::PendingPromotion),
    );
    assert_eq!(state.playing, Color::White);

    promote(&mut state, Square::at(0, 0), PieceKind::Queen)
        .expect("promotion");

    assert_eq!(
        state.board.get(Square::at(0, 0)),
        Some(Piece::new(PieceKind::Queen, Color::White)),
    );
    assert_eq!(state.playing, Color::Black);
}

#[test]
fn turn_alternates_strictly_across_accepted_moves() {
    let mut state = State::new();
    let script = [
        ("e2,e4", Color::Black),
        ("e7,e5", Color::White),
        ("g1,f3", Color::Black),
        ("b8,c6", Color::White),
    ];

    for (command, next) in script {
        assert_eq!(play(&mut state, command), Ok(MoveOutcome::Moved));
        assert_eq!(state.playing, next);
    }

    assert_eq!(
        play(&mut state, "e7,e5"),
        Err(MoveError::NoPiece),
    );
    assert_eq!(state.playing, Color::White);
}
