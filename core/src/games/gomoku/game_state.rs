use chrono::Utc;

use crate::error::{GameError, InvalidMoveReason};
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::move_ledger::MoveLedger;
use super::types::{Cell, GameMode, GameStatus, Move, MoveOutcome, Side, WinningLine};
use super::win_detector::{check_win, find_winning_line};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GomokuGameState {
    board: Board,
    ledger: MoveLedger,
    side_to_move: Side,
    status: GameStatus,
    mode: GameMode,
}

impl GomokuGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            ledger: MoveLedger::new(),
            side_to_move: Side::Black,
            status: GameStatus::InProgress,
            mode,
        }
    }

    /// Rebuilds a game by replaying recorded moves, keeping their timestamps.
    /// Each move must be legal at the point it was recorded.
    pub(crate) fn replay(mode: GameMode, moves: &[Move]) -> Result<Self, GameError> {
        let mut state = Self::new(mode);
        for mv in moves {
            state.check_turn(mv.side)?;
            state.apply_move(mv.side, mv.row, mv.col, mv.timestamp)?;
        }
        Ok(state)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ledger(&self) -> &MoveLedger {
        &self.ledger
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.ledger.last()
    }

    pub fn is_computer_turn(&self) -> bool {
        self.status == GameStatus::InProgress
            && self.mode.computer_side() == Some(self.side_to_move)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.status.winner()?;
        let last = self.ledger.last()?;
        find_winning_line(&self.board, last.row, last.col)
    }

    /// Human move for whichever side is to move.
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, GameError> {
        self.submit_move_as(self.side_to_move, row, col)
    }

    pub fn submit_move_as(
        &mut self,
        side: Side,
        row: usize,
        col: usize,
    ) -> Result<MoveOutcome, GameError> {
        self.check_turn(side)?;
        if self.mode.computer_side() == Some(side) {
            return Err(InvalidMoveReason::ComputerTurn.into());
        }
        self.apply_move(side, row, col, Utc::now().timestamp_millis())
    }

    /// Lets the heuristic selector pick and play the computer's stone.
    pub fn play_computer_move(&mut self) -> Result<Option<MoveOutcome>, GameError> {
        if self.status.is_terminal() {
            return Err(InvalidMoveReason::GameOver.into());
        }
        if !self.is_computer_turn() {
            return Err(InvalidMoveReason::NotYourTurn.into());
        }

        let Some(pos) = calculate_move(BotInput::from_game_state(self)) else {
            return Ok(None);
        };
        let side = self.side_to_move;
        self.apply_move(side, pos.row, pos.col, Utc::now().timestamp_millis())
            .map(Some)
    }

    fn check_turn(&self, side: Side) -> Result<(), GameError> {
        if self.status.is_terminal() {
            return Err(InvalidMoveReason::GameOver.into());
        }
        if side != self.side_to_move {
            return Err(InvalidMoveReason::NotYourTurn.into());
        }
        Ok(())
    }

    fn apply_move(
        &mut self,
        side: Side,
        row: usize,
        col: usize,
        timestamp: i64,
    ) -> Result<MoveOutcome, GameError> {
        let applied = Move {
            row,
            col,
            side,
            sequence_number: self.ledger.next_sequence_number(),
            timestamp,
        };

        self.board.place(row, col, side)?;
        if let Err(e) = self.ledger.append(applied) {
            self.board.set(row, col, Cell::Empty);
            return Err(e);
        }

        if check_win(&self.board, row, col) {
            self.status = GameStatus::won_by(side);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.side_to_move = side.opponent();
        }

        Ok(MoveOutcome {
            applied,
            status: self.status,
        })
    }

    /// Takes back the last move, or the computer's reply together with the
    /// human move before it. Also reopens a finished game.
    pub fn undo(&mut self) -> Vec<Move> {
        let mut undone = Vec::new();

        let Some(last) = self.pop_move() else {
            return undone;
        };
        undone.push(last);

        if !self.ledger.is_empty()
            && self.mode.computer_side() == Some(self.side_to_move)
            && let Some(previous) = self.pop_move()
        {
            undone.push(previous);
        }

        undone
    }

    fn pop_move(&mut self) -> Option<Move> {
        let mv = self.ledger.pop_last()?;
        self.board.set(mv.row, mv.col, Cell::Empty);
        self.side_to_move = self
            .ledger
            .last_side_to_move()
            .map_or(Side::Black, Side::opponent);
        self.status = GameStatus::InProgress;
        Some(mv)
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        *self = Self::new(mode);
    }
}
