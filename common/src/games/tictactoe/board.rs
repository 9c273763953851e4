use super::error::MoveError;
use super::types::{BOARD_SIZE, CELL_COUNT, Cell, Player, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from the `1` / `-1` / `0` notation (X / O / empty).
    pub fn from_signs(signs: [[i8; BOARD_SIZE]; BOARD_SIZE]) -> Option<Self> {
        let mut board = Self::new();
        for (row, values) in signs.iter().enumerate() {
            for (col, &sign) in values.iter().enumerate() {
                board.cells[row][col] = Cell::from_sign(sign)?;
            }
        }
        Some(board)
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos) == Cell::Empty
    }

    /// Empty cells in row-major order. Search tie-breaks depend on this order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    pub fn occupied_count(&self) -> usize {
        CELL_COUNT - self.empty_cells().len()
    }

    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::CellOccupied {
                row: pos.row(),
                col: pos.col(),
            });
        }
        self.set_cell(pos, player.marker());
        Ok(())
    }

    pub fn clear(&mut self, pos: Position) {
        self.set_cell(pos, Cell::Empty);
    }

    pub(crate) fn set_cell(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }
}
