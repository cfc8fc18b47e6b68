use serde::{Deserialize, Serialize};

use crate::error::GameError;
use super::board::Board;
use super::game_state::GomokuGameState;
use super::move_ledger::MoveLedger;
use super::types::{GameMode, Move, Side};

pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized form of a game; `board` holds cell codes row by row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub version: u32,
    pub board: Vec<Vec<u8>>,
    pub side_to_move: Side,
    pub terminal: bool,
    pub winner: Option<Side>,
    pub moves: Vec<Move>,
    pub mode: GameMode,
}

impl GameSnapshot {
    pub fn capture(state: &GomokuGameState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            board: state.board().to_codes(),
            side_to_move: state.side_to_move(),
            terminal: state.status().is_terminal(),
            winner: state.status().winner(),
            moves: state.ledger().moves().to_vec(),
            mode: state.mode(),
        }
    }

    /// Replays the ledger and checks that every stored field agrees with it.
    pub fn restore(&self) -> Result<GomokuGameState, GameError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(malformed(format!(
                "unsupported version {}, expected {}",
                self.version, SNAPSHOT_VERSION
            )));
        }

        let board = Board::from_codes(&self.board).map_err(malformed)?;
        MoveLedger::from_moves(self.moves.clone()).map_err(malformed)?;

        let state = GomokuGameState::replay(self.mode, &self.moves)
            .map_err(|e| malformed(format!("ledger does not replay: {}", e)))?;

        if state.board() != &board {
            return Err(malformed("board does not match move ledger".to_string()));
        }
        if state.side_to_move() != self.side_to_move {
            return Err(malformed(format!(
                "side to move is {}, ledger implies {}",
                self.side_to_move,
                state.side_to_move()
            )));
        }
        if state.status().is_terminal() != self.terminal || state.status().winner() != self.winner {
            return Err(malformed("game result does not match move ledger".to_string()));
        }

        Ok(state)
    }
}

fn malformed(details: String) -> GameError {
    GameError::MalformedSnapshot(details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::types::GameStatus;

    fn mid_game() -> GomokuGameState {
        let mut state = GomokuGameState::new(GameMode::HumanVsComputer);
        state.submit_move(7, 7).unwrap();
        state.play_computer_move().unwrap();
        state.submit_move(8, 8).unwrap();
        state.play_computer_move().unwrap();
        state
    }

    #[test]
    fn test_restore_reproduces_state() {
        let state = mid_game();
        let snapshot = GameSnapshot::capture(&state);
        assert_eq!(snapshot.moves.len(), 4);
        assert!(!snapshot.terminal);

        let restored = snapshot.restore().unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_restore_finished_game() {
        let mut state = GomokuGameState::new(GameMode::TwoHuman);
        for &(row, col) in &[(7, 7), (0, 0), (7, 8), (0, 2), (7, 9), (0, 4), (7, 10), (0, 6), (7, 11)] {
            state.submit_move(row, col).unwrap();
        }
        let snapshot = GameSnapshot::capture(&state);
        assert!(snapshot.terminal);
        assert_eq!(snapshot.winner, Some(Side::Black));

        let restored = snapshot.restore().unwrap();
        assert_eq!(restored.status(), GameStatus::BlackWon);
    }

    #[test]
    fn test_restore_rejects_wrong_version() {
        let mut snapshot = GameSnapshot::capture(&mid_game());
        snapshot.version = 99;
        assert!(matches!(snapshot.restore(), Err(GameError::MalformedSnapshot(_))));
    }

    #[test]
    fn test_restore_rejects_board_mismatch() {
        let mut snapshot = GameSnapshot::capture(&mid_game());
        snapshot.board[0][0] = 1;
        assert!(matches!(snapshot.restore(), Err(GameError::MalformedSnapshot(_))));
    }

    #[test]
    fn test_restore_rejects_sequence_gap() {
        let mut snapshot = GameSnapshot::capture(&mid_game());
        snapshot.moves[2].sequence_number = 7;
        assert!(matches!(snapshot.restore(), Err(GameError::MalformedSnapshot(_))));
    }

    #[test]
    fn test_restore_rejects_wrong_side_to_move() {
        let mut snapshot = GameSnapshot::capture(&mid_game());
        snapshot.side_to_move = Side::White;
        assert!(matches!(snapshot.restore(), Err(GameError::MalformedSnapshot(_))));
    }

    #[test]
    fn test_restore_rejects_false_result() {
        let mut snapshot = GameSnapshot::capture(&mid_game());
        snapshot.terminal = true;
        snapshot.winner = Some(Side::White);
        assert!(matches!(snapshot.restore(), Err(GameError::MalformedSnapshot(_))));
    }
}
