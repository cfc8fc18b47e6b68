pub mod gomoku;
