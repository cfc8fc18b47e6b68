use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 15;
pub const WIN_LENGTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Black,
    White,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Side::Black),
            Cell::White => Some(Side::White),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Black),
            2 => Some(Cell::White),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub side: Side,
    pub sequence_number: u32,
    /// Unix epoch milliseconds.
    pub timestamp: i64,
}

impl Move {
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    TwoHuman,
    HumanVsComputer,
}

impl GameMode {
    /// The computer always answers as White; the human opens as Black.
    pub fn computer_side(self) -> Option<Side> {
        match self {
            GameMode::TwoHuman => None,
            GameMode::HumanVsComputer => Some(Side::White),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    BlackWon,
    WhiteWon,
    Draw,
}

impl GameStatus {
    pub fn won_by(side: Side) -> Self {
        match side {
            Side::Black => GameStatus::BlackWon,
            Side::White => GameStatus::WhiteWon,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::BlackWon => Some(Side::Black),
            GameStatus::WhiteWon => Some(Side::White),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub side: Side,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(side: Side, start: Position, end: Position) -> Self {
        Self { side, start, end }
    }
}

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub applied: Move,
    pub status: GameStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_codes_are_stable() {
        assert_eq!(Cell::Empty.code(), 0);
        assert_eq!(Cell::Black.code(), 1);
        assert_eq!(Cell::White.code(), 2);
        assert_eq!(Cell::from_code(2), Some(Cell::White));
        assert_eq!(Cell::from_code(3), None);
    }

    #[test]
    fn test_computer_plays_white() {
        assert_eq!(GameMode::HumanVsComputer.computer_side(), Some(Side::White));
        assert_eq!(GameMode::TwoHuman.computer_side(), None);
    }

    #[test]
    fn test_status_winner() {
        assert_eq!(GameStatus::won_by(Side::White).winner(), Some(Side::White));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert!(GameStatus::Draw.is_terminal());
        assert!(!GameStatus::InProgress.is_terminal());
    }
}
