use std::fmt;

use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::error::MoveError;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn from_sign(sign: i8) -> Option<Cell> {
        match sign {
            0 => Some(Cell::Empty),
            1 => Some(Cell::X),
            -1 => Some(Cell::O),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::Maximizer),
            Cell::O => Some(Player::Minimizer),
        }
    }
}

/// One of the two sides. X maximizes the score, O minimizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Maximizer,
    Minimizer,
}

impl Player {
    pub fn marker(&self) -> Cell {
        match self {
            Player::Maximizer => Cell::X,
            Player::Minimizer => Cell::O,
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::Maximizer => Player::Minimizer,
            Player::Minimizer => Player::Maximizer,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker().symbol())
    }
}

/// A cell coordinate, always inside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    pub const ALL: [Position; CELL_COUNT] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];

    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(Self::at(row, col))
    }

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Maps the keypad-style cell number 1-9 (row-major) to a position.
    pub fn from_cell_number(number: u32) -> Result<Self, MoveError> {
        if !(1..=CELL_COUNT as u32).contains(&number) {
            return Err(MoveError::InvalidCellNumber(number));
        }
        let index = (number - 1) as usize;
        Ok(Self::at(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    pub fn cell_number(&self) -> u32 {
        (self.row * BOARD_SIZE + self.col) as u32 + 1
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    MaximizerWon,
    MinimizerWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::MaximizerWon => Some(Player::Maximizer),
            GameStatus::MinimizerWon => Some(Player::Minimizer),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    X,
    O,
    Random,
}

impl FirstPlayerMode {
    pub fn resolve(&self, rng: &mut SessionRng) -> Player {
        match self {
            FirstPlayerMode::X => Player::Maximizer,
            FirstPlayerMode::O => Player::Minimizer,
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    Player::Maximizer
                } else {
                    Player::Minimizer
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [Position; BOARD_SIZE],
}

impl WinningLine {
    pub fn new(player: Player, cells: [Position; BOARD_SIZE]) -> Self {
        Self { player, cells }
    }

    pub fn start(&self) -> Position {
        self.cells[0]
    }

    pub fn end(&self) -> Position {
        self.cells[BOARD_SIZE - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_numbers_are_row_major() {
        assert_eq!(Position::from_cell_number(1).unwrap(), Position::at(0, 0));
        assert_eq!(Position::from_cell_number(3).unwrap(), Position::at(0, 2));
        assert_eq!(Position::from_cell_number(4).unwrap(), Position::at(1, 0));
        assert_eq!(Position::from_cell_number(9).unwrap(), Position::at(2, 2));
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.cell_number(), i as u32 + 1);
        }
    }

    #[test]
    fn test_cell_number_out_of_range() {
        assert_eq!(
            Position::from_cell_number(0),
            Err(MoveError::InvalidCellNumber(0))
        );
        assert_eq!(
            Position::from_cell_number(10),
            Err(MoveError::InvalidCellNumber(10))
        );
    }

    #[test]
    fn test_position_new_rejects_out_of_range() {
        assert!(Position::new(2, 2).is_ok());
        assert_eq!(
            Position::new(3, 0),
            Err(MoveError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            Position::new(0, 7),
            Err(MoveError::OutOfRange { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_player_markers() {
        assert_eq!(Player::Maximizer.marker(), Cell::X);
        assert_eq!(Player::Minimizer.marker(), Cell::O);
        assert_eq!(Player::Maximizer.opponent(), Player::Minimizer);
        assert_eq!(Cell::X.owner(), Some(Player::Maximizer));
        assert_eq!(Cell::Empty.owner(), None);
    }

    #[test]
    fn test_first_player_mode_resolution() {
        let mut rng = SessionRng::new(1);
        assert_eq!(FirstPlayerMode::X.resolve(&mut rng), Player::Maximizer);
        assert_eq!(FirstPlayerMode::O.resolve(&mut rng), Player::Minimizer);

        let picks: Vec<Player> = (0..32)
            .map(|_| FirstPlayerMode::Random.resolve(&mut rng))
            .collect();
        assert!(picks.contains(&Player::Maximizer));
        assert!(picks.contains(&Player::Minimizer));
    }
}
