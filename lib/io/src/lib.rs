pub mod board_io;
pub mod game_io;
pub mod move_io;
pub mod piece_io;
