use thiserror::Error;

/// Rejected moves. The board is never modified when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Position ({row}, {col}) is outside the 3x3 board")]
    OutOfRange { row: usize, col: usize },

    #[error("Cell ({row}, {col}) is already marked")]
    CellOccupied { row: usize, col: usize },

    #[error("Cell number {0} is not between 1 and 9")]
    InvalidCellNumber(u32),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("Game is already over")]
    GameOver,

    #[error("No legal move available")]
    NoMoveAvailable,
}
