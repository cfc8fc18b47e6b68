use std::collections::HashSet;

use crate::error::{GameError, InvalidMoveReason};
use super::board::Board;
use super::types::{Move, Side};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLedger {
    moves: Vec<Move>,
}

impl MoveLedger {
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    /// Rebuilds a ledger, checking sequence numbers, bounds and cell uniqueness.
    pub fn from_moves(moves: Vec<Move>) -> Result<Self, String> {
        let mut seen = HashSet::new();
        for (index, mv) in moves.iter().enumerate() {
            let expected = index as u32 + 1;
            if mv.sequence_number != expected {
                return Err(format!(
                    "Move {} has sequence number {}, expected {}",
                    index, mv.sequence_number, expected
                ));
            }
            if !Board::in_bounds(mv.row, mv.col) {
                return Err(format!("Move {} at ({}, {}) is out of bounds", index, mv.row, mv.col));
            }
            if !seen.insert(mv.position()) {
                return Err(format!("Cell ({}, {}) is played twice", mv.row, mv.col));
            }
        }
        Ok(Self { moves })
    }

    pub fn next_sequence_number(&self) -> u32 {
        self.moves.last().map_or(1, |mv| mv.sequence_number + 1)
    }

    pub fn append(&mut self, mv: Move) -> Result<(), GameError> {
        let expected = self.next_sequence_number();
        if mv.sequence_number != expected {
            return Err(InvalidMoveReason::OutOfSequence {
                expected,
                found: mv.sequence_number,
            }
            .into());
        }
        self.moves.push(mv);
        Ok(())
    }

    pub fn pop_last(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    /// Side that played the tail move.
    pub fn last_side_to_move(&self) -> Option<Side> {
        self.moves.last().map(|mv| mv.side)
    }

    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
