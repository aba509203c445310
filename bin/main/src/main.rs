use std::io::{BufRead, Write};

use game::moves::{
    move_list::{apply_move, check_winner, is_in_check, promote},
    move_parse::parse_command,
};
use game::representations::{moves::MoveOutcome, state::State};

use io::{board_io, game_io, piece_io};

fn read_line(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();

    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,                                                 /* end of input quits the game        */
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn prompt(text: &str) {
    print!("{}", text);
    let _ = std::io::stdout().flush();
}

fn main() {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut state = State::new();

    println!("Console Chess");

    loop {
        println!("\n{}", board_io::format_board(&state.board));

        if let Some(winner) = check_winner(&state) {
            println!("{}", game_io::format_winner(winner));
            break;
        }

        let mover = state.playing;

        prompt(&game_io::prompt_move(mover));
        let Some(line) = read_line(&mut input) else {
            break;
        };

        if line == "exit" {
            break;
        }

        let Some((from, to)) = parse_command(&line) else {
            println!("{}", game_io::format_usage_hint());
            continue;
        };

        match apply_move(&mut state, from, to) {
            Err(reason) => {
                println!("{}", game_io::format_rejection(from, to, &reason));
                continue;
            }
            Ok(MoveOutcome::PendingPromotion) => {
                let kind = loop {
                    prompt(&game_io::prompt_promotion(mover));

                    let Some(answer) = read_line(&mut input) else {
                        return;
                    };

                    if let Some(kind) = piece_io::promotion_choice(&answer) {
                        break kind;
                    }
                };

                promote(&mut state, to, kind)
                    .expect("a pending promotion leaves a pawn in place");
            }
            Ok(MoveOutcome::Moved) => {}
        }

        if is_in_check(&state) {
            println!("{}", game_io::format_check(state.playing));
        }
    }
}
