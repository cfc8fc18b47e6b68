use crate::error::{GameError, InvalidMoveReason};
use super::types::{BOARD_SIZE, Cell, Position, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Builds a board from rows of cell codes; every row must be `BOARD_SIZE` wide.
    pub fn from_codes(rows: &[Vec<u8>]) -> Result<Self, String> {
        if rows.len() != BOARD_SIZE {
            return Err(format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()));
        }

        let mut board = Self::new();
        for (row, codes) in rows.iter().enumerate() {
            if codes.len() != BOARD_SIZE {
                return Err(format!(
                    "Row {} has {} cells, expected {}",
                    row,
                    codes.len(),
                    BOARD_SIZE
                ));
            }
            for (col, &code) in codes.iter().enumerate() {
                board.cells[row][col] = Cell::from_code(code)
                    .ok_or_else(|| format!("Unknown cell code {} at ({}, {})", code, row, col))?;
            }
        }
        Ok(board)
    }

    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.code()).collect())
            .collect()
    }

    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        if !Self::in_bounds(row, col) {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(self.cells[row][col])
    }

    /// Unchecked read for callers that already bounds-checked.
    pub(crate) fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        Self::in_bounds(row, col) && self.cells[row][col] == Cell::Empty
    }

    pub fn place(&mut self, row: usize, col: usize, side: Side) -> Result<(), GameError> {
        if self.cell_at(row, col)? != Cell::Empty {
            return Err(InvalidMoveReason::Occupied.into());
        }
        self.cells[row][col] = side.to_cell();
        Ok(())
    }

    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        if self.cell_at(row, col)? == Cell::Empty {
            return Err(InvalidMoveReason::EmptyCell.into());
        }
        self.cells[row][col] = Cell::Empty;
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    pub fn stone_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Cell::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}
