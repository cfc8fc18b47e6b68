pub mod config;
pub mod error;
pub mod games;
pub mod logger;
pub mod storage;

pub use error::{GameError, InvalidMoveReason};
