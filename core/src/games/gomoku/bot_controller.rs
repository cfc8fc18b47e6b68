use super::board::Board;
use super::game_state::GomokuGameState;
use super::types::{BOARD_SIZE, Cell, Position, Side};
use super::win_detector::{AXES, check_win, run_length};

const CENTER: i32 = (BOARD_SIZE as i32 - 1) / 2;

pub struct BotInput {
    pub board: Board,
    pub side: Side,
}

impl BotInput {
    pub fn from_game_state(state: &GomokuGameState) -> Self {
        Self {
            board: state.board().clone(),
            side: state.side_to_move(),
        }
    }
}

pub fn calculate_move(input: BotInput) -> Option<Position> {
    select_move(&input.board, input.side)
}

/// Greedy one-ply choice: win now, else block the opponent's win, else best scored cell.
/// Returns `None` only for a full board.
pub fn select_move(board: &Board, side: Side) -> Option<Position> {
    let available_moves = board.empty_cells();
    if available_moves.is_empty() {
        return None;
    }

    let mut scratch = board.clone();

    if let Some(pos) = find_winning_move(&mut scratch, side, &available_moves) {
        return Some(pos);
    }

    if let Some(pos) = find_winning_move(&mut scratch, side.opponent(), &available_moves) {
        return Some(pos);
    }

    find_best_scored_move(board, side, &available_moves)
}

fn find_winning_move(board: &mut Board, side: Side, moves: &[Position]) -> Option<Position> {
    for &pos in moves {
        board.set(pos.row, pos.col, side.to_cell());
        let wins = check_win(board, pos.row, pos.col);
        board.set(pos.row, pos.col, Cell::Empty);

        if wins {
            return Some(pos);
        }
    }
    None
}

fn find_best_scored_move(board: &Board, side: Side, moves: &[Position]) -> Option<Position> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for &pos in moves {
        let score = score_cell(board, pos, side);
        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move
}

/// Scores an empty cell for `side` from the runs it would extend or cut, plus a pull toward the center.
pub fn score_cell(board: &Board, pos: Position, side: Side) -> i32 {
    let opponent = side.opponent();
    let mut score = 0;

    for axis in AXES {
        score += match run_length(board, pos, axis, side) {
            0 => 0,
            1 => 100,
            2 => 1_000,
            3 => 10_000,
            _ => 100_000,
        };
        score += match run_length(board, pos, axis, opponent) {
            0 | 1 => 0,
            2 => 500,
            3 => 5_000,
            _ => 50_000,
        };
    }

    let distance = (pos.row as i32 - CENTER).abs() + (pos.col as i32 - CENTER).abs();
    score + (2 * CENTER - distance) * 10
}
