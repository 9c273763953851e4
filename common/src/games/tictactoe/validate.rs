use super::board::Board;
use super::error::MoveError;
use super::types::Position;

pub fn parse_cell_number(input: &str) -> Result<u32, MoveError> {
    let trimmed = input.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| MoveError::NotANumber(trimmed.to_string()))
}

/// Turns a human cell number into a position that is free on `board`.
pub fn validate_human_move(board: &Board, cell_number: u32) -> Result<Position, MoveError> {
    let pos = Position::from_cell_number(cell_number)?;
    if !board.is_empty(pos) {
        return Err(MoveError::CellOccupied {
            row: pos.row(),
            col: pos.col(),
        });
    }
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    #[test]
    fn test_parse_cell_number() {
        assert_eq!(parse_cell_number(" 7\n"), Ok(7));
        assert_eq!(
            parse_cell_number("seven"),
            Err(MoveError::NotANumber("seven".to_string()))
        );
        assert_eq!(
            parse_cell_number("-1"),
            Err(MoveError::NotANumber("-1".to_string()))
        );
    }

    #[test]
    fn test_validate_human_move() {
        let mut board = Board::new();
        board
            .place(Position::new(0, 0).unwrap(), Player::Minimizer)
            .unwrap();

        assert_eq!(validate_human_move(&board, 2), Ok(Position::new(0, 1).unwrap()));
        assert_eq!(
            validate_human_move(&board, 1),
            Err(MoveError::CellOccupied { row: 0, col: 0 })
        );
        assert_eq!(
            validate_human_move(&board, 10),
            Err(MoveError::InvalidCellNumber(10))
        );
    }
}
