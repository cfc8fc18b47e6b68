mod board;
mod bot_controller;
mod game_state;
mod move_ledger;
mod session;
mod snapshot;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, calculate_move, score_cell, select_move};
pub use game_state::GomokuGameState;
pub use move_ledger::MoveLedger;
pub use session::{GomokuSession, SessionOptions};
pub use snapshot::{GameSnapshot, SNAPSHOT_VERSION};
pub use types::{
    BOARD_SIZE, Cell, GameMode, GameStatus, Move, MoveOutcome, Position, Side, WIN_LENGTH,
    WinningLine,
};
pub use win_detector::{AXES, check_win, find_winning_line, run_length};
