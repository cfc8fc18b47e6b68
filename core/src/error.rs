#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    GameOver,
    NotYourTurn,
    ComputerTurn,
    Occupied,
    EmptyCell,
    OutOfSequence { expected: u32, found: u32 },
}

impl std::fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMoveReason::GameOver => write!(f, "game is already over"),
            InvalidMoveReason::NotYourTurn => write!(f, "not your turn"),
            InvalidMoveReason::ComputerTurn => write!(f, "waiting for the computer to move"),
            InvalidMoveReason::Occupied => write!(f, "cell is already occupied"),
            InvalidMoveReason::EmptyCell => write!(f, "cell is empty"),
            InvalidMoveReason::OutOfSequence { expected, found } => {
                write!(f, "expected sequence number {}, got {}", expected, found)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    OutOfBounds { row: usize, col: usize },
    InvalidMove(InvalidMoveReason),
    MalformedSnapshot(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is out of bounds", row, col)
            }
            GameError::InvalidMove(reason) => write!(f, "Invalid move: {}", reason),
            GameError::MalformedSnapshot(details) => write!(f, "Malformed snapshot: {}", details),
        }
    }
}

impl std::error::Error for GameError {}

impl From<InvalidMoveReason> for GameError {
    fn from(reason: InvalidMoveReason) -> Self {
        GameError::InvalidMove(reason)
    }
}
